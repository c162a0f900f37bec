//! Centralized, hardcoded UI settings for prompt rendering.
//!
//! This is the single place to tweak prompt glyphs, hint strings, and colors.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Prompt glyphs / strings
// ---------------------------------------------------------------------------

pub const PROMPT_MARKER: &str = "?";
pub const SELECT_CURSOR: &str = ">";
pub const SELECT_INDENT: &str = "  ";
pub const MULTILINE_HINT: &str = " [Enter 2 empty lines to finish]";
pub const YES_HINT: &str = " [Y/n]";
pub const NO_HINT: &str = " [y/N]";
pub const ANSWER_YES: &str = "yes";
pub const ANSWER_NO: &str = "no";

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub fn color_marker() -> Color {
    Color::Green
}

pub fn color_answer() -> Color {
    Color::Cyan
}

pub fn color_cursor() -> Color {
    Color::Cyan
}
