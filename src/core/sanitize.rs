// src/core/sanitize.rs

/// Trim a raw cell. Exports pad some fields with stray whitespace.
pub fn clean(s: &str) -> String {
    s.trim().to_string()
}

/// True if the cell is empty after trimming.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Lowercased copy for case-insensitive label comparison ("Hourly" vs "hourly").
pub fn fold_label(s: &str) -> String {
    s.trim().to_ascii_lowercase()
}

/// Parse a numeric cell; empty or malformed becomes None, never zero.
pub fn parse_numeric(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() { return None; }
    t.parse::<f64>().ok().filter(|v| v.is_finite())
}
