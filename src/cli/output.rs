//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

use crate::domain::Change;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print labelled detail, indented
pub fn field(label: &str, msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {:<14} {}", format!("{}:", label).dimmed(), msg);
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Count with thousands separators: `1234567` → `1,234,567`.
pub fn format_count(count: i64) -> String {
    let digits = count.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if count < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Signed percentage with one decimal; non-finite values render as `n/a`.
pub fn format_percent(percent: f64) -> String {
    if percent.is_finite() {
        format!("{:+.1}%", percent)
    } else {
        "n/a".to_string()
    }
}

/// Signed delta with its growth: `+20 (+20.0%)`.
pub fn format_delta(delta: i64, percent: f64) -> String {
    let sign = if delta > 0 { "+" } else { "" };
    format!("{}{} ({})", sign, format_count(delta), format_percent(percent))
}

/// New confirmed cases of a daily change, red while growing.
pub fn format_change(change: Option<Change>) -> String {
    match change {
        Some(change) => {
            let text = format_delta(change.new_confirmed, change.confirmed_growth_percent);
            if change.is_growing() {
                text.red().to_string()
            } else {
                text.green().to_string()
            }
        }
        None => "n/a".dimmed().to_string(),
    }
}
