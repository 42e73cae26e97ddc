//! Progress indicators
//!
//! A spinner on stderr while waiting on the backend. Hidden when stderr is
//! not a terminal, so scripted and JSON output stay clean.

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner for a backend call, or a hidden one when `enabled` is
/// false or stderr is not a terminal
pub fn spinner(message: &str, enabled: bool) -> ProgressBar {
    if !enabled || !Term::stderr().is_term() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.blue} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
