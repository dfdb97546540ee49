//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Checkbox-style rendering of a break flag.
pub fn flag(on: bool) -> &'static str {
    if on { "yes" } else { "-" }
}

/// Placeholder used for a clock time that has not been entered yet.
pub fn time_or_dash(t: &str) -> String {
    if t.is_empty() {
        "--:--".to_string()
    } else {
        t.to_string()
    }
}
