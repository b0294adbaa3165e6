use std::rc::Rc;

use log::warn;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Which single FAQ item is expanded, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionState {
    open_index: Option<usize>,
    len: usize,
}

impl AccordionState {
    pub fn new(len: usize) -> Self {
        Self {
            open_index: None,
            len,
        }
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open_index
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open_index() == Some(index)
    }

    /// Closes `index` if it is the open item, otherwise opens it and closes
    /// whatever was open before. Indices past the list leave the state as is.
    pub fn toggle(&self, index: usize) -> Self {
        if index >= self.len {
            return self.clone();
        }
        let open_index = if self.is_open(index) { None } else { Some(index) };
        Self {
            open_index,
            len: self.len,
        }
    }
}

pub enum AccordionAction {
    Toggle(usize),
}

impl Reducible for AccordionState {
    type Action = AccordionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AccordionAction::Toggle(index) if index >= self.len => {
                warn!("Ignoring FAQ toggle for index {} of {}", index, self.len);
                self
            }
            AccordionAction::Toggle(index) => Rc::new(self.toggle(index)),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub entries: &'static [FaqEntry],
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let entries = props.entries;
    let accordion = use_reducer(move || AccordionState::new(entries.len()));

    html! {
        <div class="faq-list">
            { for entries.iter().enumerate().map(|(index, entry)| {
                let is_open = accordion.is_open(index);
                let toggle = {
                    let accordion = accordion.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        accordion.dispatch(AccordionAction::Toggle(index));
                    })
                };

                html! {
                    <div key={index} class={classes!("faq-item", is_open.then(|| "open"))}>
                        <button class="faq-question" onclick={toggle}>
                            <span class="question-text">{entry.question}</span>
                            <span class="toggle-icon">{if is_open { "▲" } else { "▼" }}</span>
                        </button>
                        {
                            if is_open {
                                html! { <div class="faq-answer">{entry.answer}</div> }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                }
            }) }
            <style>
                {r#"
                .faq-list {
                    max-width: 48rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .faq-item {
                    background: #fff;
                    border: 1px solid #e2e8f0;
                    border-radius: 12px;
                    overflow: hidden;
                }

                .faq-question {
                    width: 100%;
                    padding: 1.25rem;
                    background: none;
                    border: none;
                    color: #1e293b;
                    font-size: 1rem;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    transition: background 0.2s ease;
                }

                .faq-question:hover {
                    background: #f8fafc;
                }

                .toggle-icon {
                    font-size: 0.8rem;
                    color: #94a3b8;
                }

                .faq-item.open .toggle-icon {
                    color: #f97316;
                }

                .faq-answer {
                    padding: 0 1.25rem 1.25rem;
                    color: #475569;
                    line-height: 1.6;
                    animation: faqFadeIn 0.3s ease;
                }

                @keyframes faqFadeIn {
                    from { opacity: 0; transform: translateY(-4px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(state: Rc<AccordionState>, index: usize) -> Rc<AccordionState> {
        state.reduce(AccordionAction::Toggle(index))
    }

    fn open_count(state: &AccordionState) -> usize {
        (0..state.len).filter(|i| state.is_open(*i)).count()
    }

    #[test]
    fn starts_closed() {
        let state = AccordionState::new(7);
        assert_eq!(state.open_index(), None);
        assert_eq!(open_count(&state), 0);
    }

    #[test]
    fn clicking_open_item_closes_it() {
        let state = click(Rc::new(AccordionState::new(7)), 3);
        assert!(state.is_open(3));

        let state = click(state, 3);
        assert_eq!(state.open_index(), None);
    }

    #[test]
    fn opening_another_item_closes_previous() {
        let state = click(Rc::new(AccordionState::new(7)), 1);
        let state = click(state, 4);
        assert!(state.is_open(4));
        assert!(!state.is_open(1));
        assert_eq!(open_count(&state), 1);
    }

    #[test]
    fn double_click_returns_to_initial() {
        let initial = AccordionState::new(7);
        let state = click(click(Rc::new(initial.clone()), 2), 2);
        assert_eq!(*state, initial);
    }

    #[test]
    fn out_of_range_click_is_ignored() {
        let state = click(Rc::new(AccordionState::new(3)), 0);
        let after = click(state.clone(), 3);
        assert!(Rc::ptr_eq(&state, &after));
        assert!(after.is_open(0));

        let empty = Rc::new(AccordionState::new(0));
        assert_eq!(click(empty, 0).open_index(), None);
    }

    #[test]
    fn at_most_one_open_for_any_click_sequence() {
        let len = 7;
        let mut state = Rc::new(AccordionState::new(len));
        // small LCG so the sequence is varied but reproducible
        let mut seed: u32 = 0x2545_F491;
        for _ in 0..2_000 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let index = (seed >> 16) as usize % (len + 2);
            let before = state.open_index();
            state = click(state, index);

            assert!(open_count(&state) <= 1);
            assert!(state.open_index().map_or(true, |i| i < len));
            if index < len {
                let expected = if before == Some(index) { None } else { Some(index) };
                assert_eq!(state.open_index(), expected);
            } else {
                assert_eq!(state.open_index(), before);
            }
        }
    }
}
