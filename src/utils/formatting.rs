//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// `510` → `8h 30m`.
pub fn mins2readable(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let abs_m = mins.abs();
    format!("{}{}h {:02}m", sign, abs_m / 60, abs_m % 60)
}

/// `8.5` → `8.50h`.
pub fn hours2readable(hours: f64) -> String {
    format!("{:.2}h", hours)
}
