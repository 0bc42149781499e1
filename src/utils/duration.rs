use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use thiserror::Error;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;
const MONTH: u64 = 30 * DAY;
const YEAR: u64 = 365 * DAY;

#[derive(Debug, Error)]
pub enum Error {
    #[error("duration is empty")]
    Empty,
    #[error("could not convert the input string of {0} into a duration")]
    Invalid(String),
}

/// Parses a duration string as used in the session configuration.
///
/// The input is a single `<number><unit>` token where unit is one of
/// `s m h d w M y` (`M` is 30 days, `y` is 365 days). A bare number is seconds.
pub fn parse_duration_string(input: &str) -> Result<Duration, Error> {
    static RE_DURATION: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^(\d+)([smhdwMy]?)$").unwrap());

    if input.is_empty() {
        return Err(Error::Empty);
    }
    let invalid = || Error::Invalid(input.to_string());
    let caps = RE_DURATION.captures(input).ok_or_else(invalid)?;
    let value: u64 = caps[1].parse().map_err(|_| invalid())?;
    let unit = match &caps[2] {
        "" | "s" => 1,
        "m" => MINUTE,
        "h" => HOUR,
        "d" => DAY,
        "w" => WEEK,
        "M" => MONTH,
        "y" => YEAR,
        _ => return Err(invalid()),
    };
    value
        .checked_mul(unit)
        .map(Duration::from_secs)
        .ok_or_else(invalid)
}
