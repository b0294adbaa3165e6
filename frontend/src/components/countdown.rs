use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{debug, info};
use yew::prelude::*;

use crate::config;

/// Seconds left on the "offer expires" clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownState {
    remaining_seconds: u32,
}

impl CountdownState {
    /// Out of range starting values are clamped, never rejected.
    pub fn new(initial_seconds: i64) -> Self {
        let remaining_seconds = u32::try_from(initial_seconds.max(0)).unwrap_or(u32::MAX);
        Self { remaining_seconds }
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_seconds() == 0
    }

    pub fn tick(self) -> Self {
        Self {
            remaining_seconds: self.remaining_seconds.saturating_sub(1),
        }
    }

    pub fn formatted(&self) -> String {
        format_hms(self.remaining_seconds())
    }
}

pub enum CountdownAction {
    Tick,
}

impl Reducible for CountdownState {
    type Action = CountdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            // same Rc at the floor so nothing re-renders
            CountdownAction::Tick if self.is_expired() => self,
            CountdownAction::Tick => Rc::new(self.tick()),
        }
    }
}

/// Zero padded `HH:MM:SS`. Hours grow past two digits if they have to.
pub fn format_hms(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// A registered periodic callback. Once cancelled (or dropped) the callback
/// stops reaching `on_tick` even if the scheduler still fires it.
pub struct TickSubscription<H> {
    handle: Option<H>,
    live: Rc<Cell<bool>>,
}

impl<H> TickSubscription<H> {
    pub fn start<S, F>(schedule: S, mut on_tick: F) -> Self
    where
        S: FnOnce(Box<dyn FnMut()>) -> H,
        F: FnMut() + 'static,
    {
        let live = Rc::new(Cell::new(true));
        let gate = live.clone();
        let handle = schedule(Box::new(move || {
            if gate.get() {
                on_tick();
            }
        }));
        Self {
            handle: Some(handle),
            live,
        }
    }

    /// Returns true only for the call that released the handle.
    pub fn cancel(&mut self) -> bool {
        self.live.set(false);
        self.handle.take().is_some()
    }
}

impl<H> Drop for TickSubscription<H> {
    fn drop(&mut self) {
        if self.cancel() {
            debug!("Countdown tick cancelled");
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CountdownBannerProps {
    pub initial_seconds: i64,
}

#[function_component(CountdownBanner)]
pub fn countdown_banner(props: &CountdownBannerProps) -> Html {
    let initial_seconds = props.initial_seconds;
    let countdown = use_reducer(move || CountdownState::new(initial_seconds));

    {
        let countdown = countdown.clone();
        use_effect_with_deps(
            move |_| {
                debug!("Countdown ticking every {}ms", config::TICK_MILLIS);
                let subscription = TickSubscription::start(
                    |on_tick| Interval::new(config::TICK_MILLIS, on_tick),
                    move || countdown.dispatch(CountdownAction::Tick),
                );
                // dropping the Interval clears it
                move || drop(subscription)
            },
            (),
        );
    }

    {
        let expired = countdown.is_expired();
        use_effect_with_deps(
            move |expired| {
                if *expired {
                    info!("Countdown reached zero");
                }
                || ()
            },
            expired,
        );
    }

    html! {
        <div class="urgency-banner">
            {"🚨 ATENÇÃO: Esta oferta especial expira em "}
            <span class="urgency-clock">{countdown.formatted()}</span>
            <style>
                {r#"
                .urgency-banner {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    background: #dc2626;
                    color: #fff;
                    padding: 0.5rem 0;
                    text-align: center;
                    font-size: 0.875rem;
                    font-weight: 700;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                    animation: urgencyPulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                }

                .urgency-clock {
                    font-variant-numeric: tabular-nums;
                }

                @keyframes urgencyPulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.75; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    type Slot = Rc<RefCell<Option<Box<dyn FnMut()>>>>;

    fn fire(slot: &Slot) {
        if let Some(callback) = slot.borrow_mut().as_mut() {
            callback();
        }
    }

    fn tick(state: Rc<CountdownState>) -> Rc<CountdownState> {
        state.reduce(CountdownAction::Tick)
    }

    #[test]
    fn clamps_initial_value() {
        assert_eq!(CountdownState::new(-1).remaining_seconds(), 0);
        assert_eq!(CountdownState::new(i64::MIN).remaining_seconds(), 0);
        assert_eq!(CountdownState::new(2723).remaining_seconds(), 2723);
        assert_eq!(CountdownState::new(i64::MAX).remaining_seconds(), u32::MAX);
    }

    #[test]
    fn n_ticks_reach_zero_and_stay() {
        for n in (0..=300).chain([2723, 3661]) {
            let mut state = Rc::new(CountdownState::new(n));
            for _ in 0..n {
                state = tick(state);
            }
            assert_eq!(state.remaining_seconds(), 0, "start {}", n);

            let floor = tick(state.clone());
            assert_eq!(floor.remaining_seconds(), 0);
            assert!(Rc::ptr_eq(&state, &floor));
        }
    }

    #[test]
    fn formats_hours_minutes_seconds() {
        assert_eq!(format_hms(3661), "01:01:01");
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(59), "00:00:59");
        assert_eq!(format_hms(3600), "01:00:00");
        assert_eq!(format_hms(2723), "00:45:23");
        assert_eq!(format_hms(360_000), "100:00:00");
    }

    #[test]
    fn first_tick_from_default() {
        let state = tick(Rc::new(CountdownState::new(config::DEFAULT_COUNTDOWN_SECONDS)));
        assert_eq!(state.remaining_seconds(), 2722);
        assert_eq!(state.formatted(), "00:45:22");
    }

    #[test]
    fn cancel_releases_handle_once() {
        let slot: Slot = Rc::default();
        let fired = Rc::new(Cell::new(0u32));

        let mut subscription = {
            let slot = slot.clone();
            let fired = fired.clone();
            TickSubscription::start(
                move |callback| *slot.borrow_mut() = Some(callback),
                move || fired.set(fired.get() + 1),
            )
        };

        fire(&slot);
        fire(&slot);
        assert_eq!(fired.get(), 2);

        assert!(subscription.cancel());
        assert!(!subscription.cancel());

        fire(&slot);
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn no_decrements_after_teardown() {
        let slot: Slot = Rc::default();
        let state = Rc::new(RefCell::new(Rc::new(CountdownState::new(10))));

        let subscription = {
            let slot = slot.clone();
            let state = state.clone();
            TickSubscription::start(
                move |callback| *slot.borrow_mut() = Some(callback),
                move || {
                    let next = tick(state.borrow().clone());
                    *state.borrow_mut() = next;
                },
            )
        };

        fire(&slot);
        fire(&slot);
        assert_eq!(state.borrow().remaining_seconds(), 8);

        drop(subscription);
        for _ in 0..5 {
            fire(&slot);
        }
        assert_eq!(state.borrow().remaining_seconds(), 8);
    }
}
