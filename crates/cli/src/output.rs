//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use chrono::NaiveDate;
use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde::Serialize;
use wanderstay_core::models::BookingStatus;

/// How command results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON on stdout
    Json,
}

impl OutputFormat {
    /// Whether decorations such as spinners and headers should be shown
    pub fn is_text(self) -> bool {
        self == OutputFormat::Text
    }
}

/// Print `value` as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// Format an amount in rupees with two decimals and thousands separators
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}₹{grouped}.{frac}")
}

/// Format a stay as `2024-01-01 → 2024-01-03 (2 nights)`
pub fn format_stay(check_in: NaiveDate, check_out: NaiveDate) -> String {
    let nights = (check_out - check_in).num_days();
    format!(
        "{check_in} → {check_out} ({})",
        format_count(usize::try_from(nights).unwrap_or(0), "night", "nights")
    )
}

/// Colour a booking status
pub fn format_status(status: BookingStatus) -> String {
    match status {
        BookingStatus::Confirmed => status.as_str().green().to_string(),
        BookingStatus::Pending => status.as_str().yellow().to_string(),
        BookingStatus::Cancelled => status.as_str().red().to_string(),
    }
}

/// Format a rating out of five
pub fn format_rating(rating: f64) -> String {
    format!("★ {rating:.1}")
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(4480.0), "₹4,480.00");
        assert_eq!(format_amount(999.5), "₹999.50");
        assert_eq!(format_amount(1234567.891), "₹1,234,567.89");
        assert_eq!(format_amount(0.0), "₹0.00");
        assert_eq!(format_amount(-12.5), "-₹12.50");
    }

    #[test]
    fn test_format_stay() {
        let check_in = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let check_out = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        assert_eq!(format_stay(check_in, check_out), "2024-01-01 → 2024-01-03 (2 nights)");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(4.44), "★ 4.4");
        assert_eq!(format_rating(5.0), "★ 5.0");
    }

    #[test]
    fn test_format_count_singular() {
        assert_eq!(format_count(1, "hotel", "hotels"), "1 hotel");
    }

    #[test]
    fn test_format_count_plural() {
        assert_eq!(format_count(5, "hotel", "hotels"), "5 hotels");
    }

    #[test]
    fn test_format_status_keeps_text() {
        assert!(format_status(BookingStatus::Cancelled).contains("cancelled"));
    }
}
