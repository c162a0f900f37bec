//! Terminal primitives shared by every prompt: raw-mode lifetime guard,
//! the erase-then-redraw surface primitive, and styled prompt chrome.
//!
//! All writers are explicit parameters so tests can capture output in a
//! buffer; nothing here touches global stdout directly.

use crate::error::PromptError;
use crate::settings;
use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, Write};

/// Scoped raw-mode acquisition. The prior terminal attributes are restored
/// on drop, on every exit path: normal completion, decode error, early
/// return, or unwind.
///
/// At most one session may be active per terminal; nesting is a caller bug.
pub struct RawModeSession {
    _private: (),
}

impl RawModeSession {
    /// Enable raw mode, surfacing failure (e.g. stdin is not a terminal) as
    /// a distinct error before any attribute is changed.
    pub fn acquire() -> Result<Self, PromptError> {
        terminal::enable_raw_mode().map_err(PromptError::Terminal)?;
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeSession {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Erase the last `n` rendered lines and leave the cursor at column 0.
///
/// This is the one redraw primitive in the crate: line prompts use it once
/// after the answer, the selection prompt uses it on every key press.
pub fn erase_lines<W>(w: &mut W, n: usize) -> io::Result<()>
where
    W: Write + QueueableCommand,
{
    if n > 0 {
        w.queue(MoveUp(n as u16))?;
    }
    w.queue(MoveToColumn(0))?;
    w.queue(Clear(ClearType::FromCursorDown))?;
    Ok(())
}

/// Queue the `? question` prefix, optionally followed by a trailing space.
pub(crate) fn write_question_prefix<W>(
    w: &mut W,
    color: bool,
    question: &str,
    trailing_space: bool,
) -> io::Result<()>
where
    W: Write + QueueableCommand,
{
    if color {
        w.queue(PrintStyledContent(
            settings::PROMPT_MARKER.with(settings::color_marker()).bold(),
        ))?;
        w.queue(Print(" "))?;
        w.queue(PrintStyledContent(question.bold()))?;
    } else {
        w.queue(Print(settings::PROMPT_MARKER))?;
        w.queue(Print(" "))?;
        w.queue(Print(question))?;
    }
    if trailing_space {
        w.queue(Print(" "))?;
    }
    Ok(())
}

/// Queue the collapsed one-line `? question answer` summary that replaces a
/// finished prompt, newline-terminated.
pub(crate) fn write_answer_summary<W>(
    w: &mut W,
    color: bool,
    question: &str,
    answer: &str,
) -> io::Result<()>
where
    W: Write + QueueableCommand,
{
    write_question_prefix(w, color, question, true)?;
    if color {
        w.queue(PrintStyledContent(answer.with(settings::color_answer())))?;
    } else {
        w.queue(Print(answer))?;
    }
    w.queue(Print("\n"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erase_lines_moves_up_and_clears() {
        let mut out: Vec<u8> = Vec::new();
        erase_lines(&mut out, 3).unwrap();
        out.flush().unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.contains("\x1b[3A"), "missing cursor-up: {s:?}");
        assert!(s.contains("\x1b[J"), "missing clear-down: {s:?}");
    }

    #[test]
    fn erase_zero_lines_does_not_move_up() {
        let mut out: Vec<u8> = Vec::new();
        erase_lines(&mut out, 0).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(!s.contains('A'), "unexpected cursor-up: {s:?}");
    }

    #[test]
    fn plain_summary_has_no_escape_codes() {
        let mut out: Vec<u8> = Vec::new();
        write_answer_summary(&mut out, false, "Project name?", "quest").unwrap();
        let s = String::from_utf8(out).unwrap();
        assert_eq!(s, "? Project name? quest\n");
    }

    #[test]
    fn colored_summary_keeps_visible_text() {
        let mut out: Vec<u8> = Vec::new();
        write_answer_summary(&mut out, true, "Name?", "ada").unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.contains("Name?"));
        assert!(s.contains("ada"));
        assert!(s.contains('\x1b'));
    }
}
