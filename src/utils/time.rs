//! Time utilities: parsing HH:MM strings and formatting minute counts.

/// Parse a clock-time string into minutes since midnight.
///
/// Accepts `HH:MM`; a bare hour (`"9"`) is treated as `9:00`. The parts are
/// not range-validated, so `25:00` or `10:75` are accepted arithmetically.
/// Anything past a second `:` is ignored. Returns `None` for empty input or
/// non-numeric parts.
pub fn parse_time(t: &str) -> Option<i64> {
    let t = t.trim();
    if t.is_empty() {
        return None;
    }
    let mut parts = t.split(':');
    let hh = parts.next().unwrap_or("");
    let mm = parts.next().unwrap_or("0").trim();

    let hours: i64 = hh.trim().parse().ok()?;
    let minutes: i64 = if mm.is_empty() { 0 } else { mm.parse().ok()? };

    Some(hours * 60 + minutes)
}

/// Format a signed minute count as `[-]H:MM`.
///
/// Hours are unpadded and unbounded; minutes are zero-padded. Non-finite
/// input renders as the neutral `0:00`.
pub fn format_hhmm(total_minutes: f64) -> String {
    if !total_minutes.is_finite() {
        return "0:00".to_string();
    }
    let negative = total_minutes < 0.0;
    let abs = total_minutes.round().abs() as i64;
    let sign = if negative { "-" } else { "" };
    format!("{}{}:{:02}", sign, abs / 60, abs % 60)
}

/// Integer-minute convenience wrapper around [`format_hhmm`].
pub fn format_minutes(mins: i64) -> String {
    format_hhmm(mins as f64)
}
