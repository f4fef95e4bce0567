use once_cell::sync::Lazy;
use regex::Regex;

static ISO8601_DURATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?$").unwrap());

/// Parses an ISO-8601 media duration (hours/minutes/seconds only, e.g.
/// "PT1M30S") into total seconds.
///
/// Unparseable input degrades to 0 rather than erroring: a video without
/// usable duration information simply contributes no duration signal.
pub fn parse_duration(duration: &str) -> u64 {
    let captures = match ISO8601_DURATION.captures(duration) {
        Some(captures) => captures,
        None => return 0,
    };

    let component = |index: usize| -> u64 {
        captures
            .get(index)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };

    component(1) * 3600 + component(2) * 60 + component(3)
}
