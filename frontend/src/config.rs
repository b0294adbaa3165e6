/// Starting value of the urgency countdown, 45:23.
pub const DEFAULT_COUNTDOWN_SECONDS: i64 = 2723;

pub const TICK_MILLIS: u32 = 1_000;

/// Element id of the pricing section the CTA buttons scroll to.
pub const OFFER_ANCHOR: &str = "offer";

#[cfg(debug_assertions)]
pub fn initial_countdown_seconds() -> i64 {
    // Development builds accept ?countdown=<n> to check the floor quickly
    let search = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default();
    match countdown_override(&search) {
        Some(seconds) => {
            log::debug!("Countdown override from query string: {}", seconds);
            seconds
        }
        None => DEFAULT_COUNTDOWN_SECONDS,
    }
}

#[cfg(not(debug_assertions))]
pub fn initial_countdown_seconds() -> i64 {
    DEFAULT_COUNTDOWN_SECONDS
}

/// Reads the `countdown` parameter out of a `location.search` string.
#[cfg_attr(not(debug_assertions), allow(dead_code))]
pub fn countdown_override(search: &str) -> Option<i64> {
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            if key != "countdown" {
                return None;
            }
            urlencoding::decode(value).ok()?.trim().parse::<i64>().ok()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_countdown_param() {
        assert_eq!(countdown_override("?countdown=90"), Some(90));
        assert_eq!(countdown_override("?utm_source=ig&countdown=5"), Some(5));
    }

    #[test]
    fn keeps_negative_values_for_the_clamp() {
        assert_eq!(countdown_override("?countdown=-30"), Some(-30));
        assert_eq!(countdown_override("?countdown=%2D30"), Some(-30));
    }

    #[test]
    fn decodes_and_trims_value() {
        assert_eq!(countdown_override("?countdown=%2010"), Some(10));
    }

    #[test]
    fn ignores_missing_or_garbage() {
        assert_eq!(countdown_override(""), None);
        assert_eq!(countdown_override("?"), None);
        assert_eq!(countdown_override("?countdown"), None);
        assert_eq!(countdown_override("?countdown=abc"), None);
        assert_eq!(countdown_override("?other=12"), None);
    }
}
