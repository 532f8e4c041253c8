use regex::Regex;

/// A `start-end` interval in seconds, e.g. `12.500-27.125`. Both endpoints
/// need an explicit decimal point; bare integers do not count.
const TIMESPAN_PATTERN: &str = r"\d+\.\d+-\d+\.\d+";

/// Fractional second digits used for report timecodes and ffmpeg arguments
pub const DEFAULT_PRECISION: usize = 3;

fn timespan_regex() -> Regex {
    Regex::new(TIMESPAN_PATTERN).unwrap()
}

/// True iff the note contains exactly one timespan.
///
/// Zero and multiple matches both count as "no timespan": an ambiguous
/// note falls through to manual review instead of being auto-trimmed.
pub fn is_timespan(note: &str) -> bool {
    timespan_regex().find_iter(note).count() == 1
}

/// Parse the note's single timespan into `(start, end)` seconds.
///
/// Returns `None` whenever [`is_timespan`] would return false, so callers
/// can rely on `parse_timespan(note).is_some() == is_timespan(note)`.
pub fn parse_timespan(note: &str) -> Option<(f64, f64)> {
    let regex = timespan_regex();
    let mut matches = regex.find_iter(note);
    let span = matches.next()?;
    if matches.next().is_some() {
        return None;
    }

    let (start, end) = span.as_str().split_once('-')?;
    Some((start.parse().ok()?, end.parse().ok()?))
}

/// Format seconds as `HH:MM:SS.fff`, prefixed with `D days, ` past a day
/// boundary. `precision` counts fractional second digits; 0 drops the
/// decimal point and truncates.
pub fn format_timecode(seconds: f64, precision: usize) -> String {
    let minutes = (seconds / 60.0).floor();
    let secs = seconds - minutes * 60.0;
    let hours = (minutes / 60.0).floor();
    let minutes = minutes - hours * 60.0;
    let days = (hours / 24.0).floor();
    let hours = hours - days * 24.0;

    let hms = if precision > 0 {
        // Width covers two integer digits, the point, and the fraction
        format!(
            "{:02}:{:02}:{:0w$.p$}",
            hours as u64,
            minutes as u64,
            secs,
            w = precision + 3,
            p = precision,
        )
    } else {
        format!("{:02}:{:02}:{:02}", hours as u64, minutes as u64, secs as u64)
    };

    if days == 0.0 {
        hms
    } else {
        format!("{} days, {}", days as u64, hms)
    }
}

/// Batch form of [`format_timecode`], preserving order and length
pub fn format_timecodes(seconds: &[f64], precision: usize) -> Vec<String> {
    seconds
        .iter()
        .map(|&s| format_timecode(s, precision))
        .collect()
}
