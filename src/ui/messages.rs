//! Coloured one-line messages for the terminal.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Clone, Copy)]
enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn color(self) -> &'static str {
        match self {
            Tone::Info => "\x1b[34m",
            Tone::Success => "\x1b[32m",
            Tone::Warning => "\x1b[33m",
            Tone::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tone::Info => "ℹ️",
            Tone::Success => "✅",
            Tone::Warning => "⚠️",
            Tone::Error => "❌",
        }
    }

    fn render(self, msg: &dyn fmt::Display) -> String {
        format!("{}{}{} {}{}", self.color(), BOLD, self.icon(), RESET, msg)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", Tone::Info.render(&msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", Tone::Success.render(&msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", Tone::Warning.render(&msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", Tone::Error.render(&msg));
}

/// Section header, e.g. `=== 2025-07-16 ===`.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}=== {} ==={}", Tone::Info.color(), BOLD, msg, RESET);
}
