use crate::{Error, Result};

/// Format whole seconds as `MM:SS`, rounding fractional input.
///
/// Minutes are not wrapped into hours, so 3725 seconds reads `62:05`.
pub fn format_mmss(total_seconds: f64) -> String {
    if !total_seconds.is_finite() {
        return String::new();
    }
    let s = total_seconds.round().max(0.0) as u64;
    format!("{:02}:{:02}", s / 60, s % 60)
}

/// Parse `MM:SS` (or a bare number of seconds) into seconds.
///
/// Seconds are clamped to [0, 59] the way the viewer's calculator does.
pub fn parse_mmss(text: &str) -> Result<u32> {
    let invalid = || Error::InvalidClock(text.to_string());
    let (min, sec) = match text.trim().split_once(':') {
        Some((m, s)) => (m, s),
        None => ("0", text.trim()),
    };

    let min: u32 = if min.is_empty() {
        0
    } else {
        min.parse().map_err(|_| invalid())?
    };
    let sec: u32 = if sec.is_empty() {
        0
    } else {
        sec.parse().map_err(|_| invalid())?
    };

    Ok(min.saturating_mul(60).saturating_add(sec.min(59)))
}
