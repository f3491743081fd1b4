//! Duration text conversion for response-time columns.
//!
//! The worksheet stores the two latency metrics (`TimeTo: On It` and
//! `TimeTo: Attended`) as `H:MM:SS` text. This module converts that text to
//! whole seconds for aggregation, and converts aggregated seconds or minutes
//! back to display strings for tables, metric cards and exports.
//!
//! ## Parsing Policy
//!
//! Parsing is lossy but never fails: missing, empty or malformed text becomes
//! zero seconds. Timing data entered by hand into the sheet is frequently
//! blank or mistyped, and a report must still render when it is.
//!
//! ## Format Specifications
//!
//! - Hours are zero-padded to 2 digits and are not wrapped at 24
//! - Minutes and seconds are zero-padded to 2 digits
//! - Fractional seconds are truncated
//! - Negative values are treated as zero
//!
//! ### Examples
//! - 3661 seconds → "01:01:01"
//! - 90000 seconds → "25:00:00"
//! - 90 minutes → "01:30:00"
//!
//! ## Usage
//!
//! ```rust
//! use srrview::libs::duration::{format_minutes, format_seconds, parse_duration};
//!
//! assert_eq!(parse_duration(Some("1:01:01")), 3661);
//! assert_eq!(parse_duration(Some("bad")), 0);
//! assert_eq!(format_seconds(3661.0), "01:01:01");
//! assert_eq!(format_minutes(90.0), "01:30:00");
//! ```

const SECONDS_PER_HOUR: i64 = 3600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Parses `H:MM:SS` text into total seconds.
///
/// Hours may exceed 23. Returns `0` when the input is `None`, empty, does not
/// split into exactly three colon-separated parts, or any part is not a
/// non-negative integer.
///
/// # Examples
///
/// ```rust
/// use srrview::libs::duration::parse_duration;
///
/// assert_eq!(parse_duration(Some("00:10:00")), 600);
/// assert_eq!(parse_duration(Some("25:00:00")), 90000);
/// assert_eq!(parse_duration(None), 0);
/// assert_eq!(parse_duration(Some("not:a:time")), 0);
/// ```
pub fn parse_duration(text: Option<&str>) -> i64 {
    try_parse_duration(text).unwrap_or(0)
}

/// Parses `H:MM:SS` text into whole minutes, with the same fallback as
/// [`parse_duration`].
pub fn parse_minutes(text: Option<&str>) -> i64 {
    parse_duration(text) / SECONDS_PER_MINUTE
}

/// Parses `H:MM:SS` text into seconds, keeping the difference between a
/// missing value and a real zero.
///
/// Used where a mean has to exclude missing rows instead of counting them
/// as zero.
pub fn try_parse_duration(text: Option<&str>) -> Option<i64> {
    let (h, m, s) = text.and_then(split_hms)?;
    // Out-of-range hour counts are malformed, not wrapped.
    h.checked_mul(SECONDS_PER_HOUR)?
        .checked_add(m.checked_mul(SECONDS_PER_MINUTE)?)?
        .checked_add(s)
}

fn split_hms(text: &str) -> Option<(i64, i64, i64)> {
    let mut parts = text.trim().split(':');
    let hours = parse_part(parts.next()?)?;
    let minutes = parse_part(parts.next()?)?;
    let seconds = parse_part(parts.next()?)?;

    if parts.next().is_some() {
        return None;
    }
    Some((hours, minutes, seconds))
}

fn parse_part(part: &str) -> Option<i64> {
    part.parse::<i64>().ok().filter(|value| *value >= 0)
}

/// Formats a number of seconds as `HH:MM:SS`.
///
/// Accepts fractional values (means of second counts) and truncates them.
/// Non-finite and negative values format as `"00:00:00"`; callers that need to
/// show "no data" for an undefined mean should use
/// [`crate::libs::metrics::format_mean_seconds`] instead.
pub fn format_seconds(seconds: f64) -> String {
    let total = if seconds.is_finite() { seconds.max(0.0) as i64 } else { 0 };
    let hours = total / SECONDS_PER_HOUR;
    let minutes = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let secs = total % SECONDS_PER_MINUTE;

    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Formats a number of minutes as `HH:MM:00`.
///
/// Minute-granularity aggregates never carry sub-minute precision, so the
/// seconds component is always `00`.
pub fn format_minutes(minutes: f64) -> String {
    let total = if minutes.is_finite() { minutes.max(0.0) } else { 0.0 };
    let hours = (total / 60.0) as i64;
    let mins = (total % 60.0) as i64;

    format!("{:02}:{:02}:00", hours, mins)
}
