use std::fmt;
use std::fmt::Formatter;
use std::time::Duration;

use thiserror::Error;

const NAMES: [&str; 5] = ["y", "d", "h", "m", "s"];
const SIZES_MS: [i64; 5] = [86_400_000 * 365, 86_400_000, 3_600_000, 60_000, 1_000];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("cannot parse duration `{0}`")]
    Invalid(String),
    #[error("invalid duration suffix in `{0}`")]
    InvalidSuffix(String),
    #[error("duration `{0}` is too large")]
    TooLarge(String),
}

/// Converts `d` to whole milliseconds. Sub-millisecond precision is truncated.
pub fn duration_to_ms(d: Duration) -> Result<i64, DurationError> {
    i64::try_from(d.as_millis()).map_err(|_| DurationError::TooLarge(format!("{d:?}")))
}

/// Returns the number of milliseconds for the given duration string.
///
/// Durations may be combined, i.e. `1h30m`. Supported suffixes are `ms`, `s`,
/// `m`, `h`, `d`, `w` and `y`. A bare number is treated as seconds.
/// Negative durations are rejected.
pub fn parse_duration_ms(s: &str) -> Result<i64, DurationError> {
    if s.is_empty() {
        return Err(DurationError::Invalid(s.to_string()));
    }
    if let Ok(seconds) = s.parse::<f64>() {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(DurationError::Invalid(s.to_string()));
        }
        return checked_ms(seconds * 1e3, s);
    }
    let mut total = 0_f64;
    let mut cursor = s;
    while !cursor.is_empty() {
        let num_end = cursor
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .ok_or_else(|| DurationError::Invalid(s.to_string()))?;
        if num_end == 0 {
            return Err(DurationError::Invalid(s.to_string()));
        }
        let num: f64 = cursor[..num_end]
            .parse()
            .map_err(|_| DurationError::Invalid(s.to_string()))?;
        let rest = &cursor[num_end..];
        let unit_end = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let multiplier_ms = match &rest[..unit_end] {
            "ms" => 1_f64,
            "s" => 1e3,
            "m" => 60.0 * 1e3,
            "h" => 3_600.0 * 1e3,
            "d" => 86_400.0 * 1e3,
            "w" => 7.0 * 86_400.0 * 1e3,
            "y" => 365.0 * 86_400.0 * 1e3,
            _ => return Err(DurationError::InvalidSuffix(s.to_string())),
        };
        total += num * multiplier_ms;
        cursor = &rest[unit_end..];
    }
    checked_ms(total, s)
}

fn checked_ms(ms: f64, s: &str) -> Result<i64, DurationError> {
    if !ms.is_finite() || ms > i64::MAX as f64 {
        return Err(DurationError::TooLarge(s.to_string()));
    }
    Ok(ms as i64)
}

/// Writes `v` milliseconds in a compact human-readable form, i.e. `1m30s`.
pub fn fmt_duration_ms(f: &mut Formatter<'_>, v: i64) -> fmt::Result {
    if v == 0 {
        return write!(f, "0ms");
    }
    for i in 0..NAMES.len() {
        let whole_num = if i == 0 {
            v / SIZES_MS[i]
        } else {
            (v % SIZES_MS[i - 1]) / SIZES_MS[i]
        };
        if whole_num != 0 {
            write!(f, "{}{}", whole_num, NAMES[i])?;
        }
    }
    if v % 1_000 != 0 {
        write!(f, "{}ms", v % 1_000)?;
    }
    Ok(())
}

/// Formats `v` milliseconds via [`fmt_duration_ms`].
pub fn duration_ms_to_string(v: i64) -> String {
    struct Ms(i64);
    impl fmt::Display for Ms {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            fmt_duration_ms(f, self.0)
        }
    }
    Ms(v).to_string()
}
