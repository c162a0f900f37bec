//! Interactive arrow-key selection prompt.
//!
//! A small state machine: the highlighted index moves circularly on
//! Up/Down, Enter (or end of input) accepts it. Every state change erases
//! the previously drawn option block and redraws it in place, which is the
//! same primitive the line prompts use once after answering.

use crate::error::PromptError;
use crate::keys::{KeyDecoder, KeyEvent};
use crate::settings;
use crate::term::{erase_lines, write_answer_summary, write_question_prefix, RawModeSession};
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::QueueableCommand;
use std::io::{self, BufRead, IsTerminal, Read, Write};
use tracing::trace;

/// Arrow-key selection over a fixed option list.
#[derive(Debug, Clone)]
pub struct Select {
    question: String,
    options: Vec<String>,
    default: Option<String>,
}

impl Select {
    pub fn new(question: impl Into<String>, options: Vec<impl Into<String>>) -> Self {
        Self {
            question: question.into(),
            options: options.into_iter().map(Into::into).collect(),
            default: None,
        }
    }

    pub fn with_default(
        question: impl Into<String>,
        default: impl Into<String>,
        options: Vec<impl Into<String>>,
    ) -> Self {
        Self {
            question: question.into(),
            options: options.into_iter().map(Into::into).collect(),
            default: Some(default.into()),
        }
    }

    /// Initial highlighted index: the default matched by value, else 0.
    fn initial_index(&self) -> usize {
        self.default
            .as_deref()
            .and_then(|default| self.options.iter().position(|o| o == default))
            .unwrap_or(0)
    }

    /// Run the prompt against the real terminal and return the selected
    /// option string.
    ///
    /// Fails fast with [`PromptError::EmptyOptions`] before any terminal
    /// state is touched; raw-mode acquisition failure (stdin not a tty)
    /// surfaces as [`PromptError::Terminal`]. The terminal is restored on
    /// every exit path, including decode errors.
    pub fn run(&self, color: bool) -> Result<String, PromptError> {
        if self.options.is_empty() {
            return Err(PromptError::EmptyOptions);
        }

        if !io::stdin().is_terminal() {
            let stdin = io::stdin();
            return self.ask_fallback(&mut stdin.lock(), &mut io::stderr(), color);
        }

        let mut out = io::stderr();
        write_question_prefix(&mut out, color, &self.question, false)?;
        out.queue(Print("\n"))?;
        out.flush()?;

        let session = RawModeSession::acquire()?;
        let selected = run_loop(
            io::stdin().lock(),
            &mut out,
            &self.options,
            self.initial_index(),
            color,
        )?;
        drop(session);

        // Collapse the question line and option block into one summary line.
        erase_lines(&mut out, self.options.len() + 1)?;
        write_answer_summary(&mut out, color, &self.question, &self.options[selected])?;
        out.flush()?;
        Ok(self.options[selected].clone())
    }

    /// Numeric picker used when stdin is not a terminal: numbered options,
    /// empty/invalid input (or EOF) keeps the default selection. No cursor
    /// control is emitted; redirected streams get plain lines.
    fn ask_fallback<R, W>(
        &self,
        input: &mut R,
        out: &mut W,
        color: bool,
    ) -> Result<String, PromptError>
    where
        R: BufRead,
        W: Write + QueueableCommand,
    {
        write_question_prefix(out, color, &self.question, false)?;
        out.queue(Print("\n"))?;
        for (index, option) in self.options.iter().enumerate() {
            out.queue(Print(format!("  {}. {option}\n", index + 1)))?;
        }
        out.queue(Print("  pick (empty for default): "))?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            out.queue(Print("\n"))?;
        }
        let selected = match line.trim().parse::<usize>() {
            Ok(number) if (1..=self.options.len()).contains(&number) => number - 1,
            _ => self.initial_index(),
        };

        write_answer_summary(out, color, &self.question, &self.options[selected])?;
        out.flush()?;
        Ok(self.options[selected].clone())
    }
}

/// Drive the state machine over decoded key events.
///
/// End of input accepts the currently highlighted option, exactly as if
/// Enter had been pressed, so piped/closed stdin terminates cleanly.
fn run_loop<R, W>(
    input: R,
    out: &mut W,
    options: &[String],
    initial: usize,
    color: bool,
) -> io::Result<usize>
where
    R: Read,
    W: Write + QueueableCommand,
{
    let mut selected = initial.min(options.len().saturating_sub(1));
    draw_options(out, options, selected, color)?;
    out.flush()?;

    for event in KeyDecoder::new(input) {
        let moved = match event? {
            KeyEvent::Up => {
                selected = (selected + options.len() - 1) % options.len();
                true
            }
            KeyEvent::Down => {
                selected = (selected + 1) % options.len();
                true
            }
            KeyEvent::Enter => return Ok(selected),
            KeyEvent::Char(_) | KeyEvent::Unknown => false,
        };
        if moved {
            trace!(selected, "selection moved");
            erase_lines(out, options.len())?;
            draw_options(out, options, selected, color)?;
            out.flush()?;
        }
    }

    Ok(selected)
}

/// Draw the option block, cursor glyph on the highlighted line. Lines end
/// with `\r\n` because this runs under raw mode.
fn draw_options<W>(out: &mut W, options: &[String], selected: usize, color: bool) -> io::Result<()>
where
    W: Write + QueueableCommand,
{
    for (index, option) in options.iter().enumerate() {
        if index == selected {
            if color {
                out.queue(PrintStyledContent(
                    settings::SELECT_CURSOR
                        .with(settings::color_cursor())
                        .bold(),
                ))?;
                out.queue(Print(" "))?;
                out.queue(PrintStyledContent(
                    option.as_str().with(settings::color_cursor()),
                ))?;
            } else {
                out.queue(Print(settings::SELECT_CURSOR))?;
                out.queue(Print(" "))?;
                out.queue(Print(option.as_str()))?;
            }
        } else {
            out.queue(Print(settings::SELECT_INDENT))?;
            out.queue(Print(option.as_str()))?;
        }
        out.queue(Print("\r\n"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["red".to_string(), "green".to_string(), "blue".to_string()]
    }

    #[test]
    fn down_wraps_back_to_start_after_full_cycle() {
        let mut out: Vec<u8> = Vec::new();
        let selected = run_loop(&b"\x1b[B\x1b[B\x1b[B\n"[..], &mut out, &options(), 0, false).unwrap();
        assert_eq!(selected, 0);
    }

    #[test]
    fn up_from_first_wraps_to_last() {
        let mut out: Vec<u8> = Vec::new();
        let selected = run_loop(&b"\x1b[A\n"[..], &mut out, &options(), 0, false).unwrap();
        assert_eq!(selected, 2);
    }

    #[test]
    fn enter_accepts_current_index() {
        let mut out: Vec<u8> = Vec::new();
        let selected = run_loop(&b"\x1b[B\n"[..], &mut out, &options(), 0, false).unwrap();
        assert_eq!(selected, 1);
    }

    #[test]
    fn eof_accepts_highlighted_option() {
        let mut out: Vec<u8> = Vec::new();
        let selected = run_loop(&b"\x1b[B"[..], &mut out, &options(), 0, false).unwrap();
        assert_eq!(selected, 1);
    }

    #[test]
    fn unrelated_keys_do_not_move_or_redraw() {
        let mut out: Vec<u8> = Vec::new();
        let selected = run_loop(&b"xy\x1bz\n"[..], &mut out, &options(), 1, false).unwrap();
        assert_eq!(selected, 1);
        // One draw of three option rows, no redraw.
        let rendered = String::from_utf8(out).unwrap();
        assert_eq!(rendered.matches("\r\n").count(), 3);
    }

    #[test]
    fn default_resolves_by_value() {
        let select = Select::with_default("Color?", "green", vec!["red", "green", "blue"]);
        assert_eq!(select.initial_index(), 1);
    }

    #[test]
    fn missing_or_absent_default_resolves_to_zero() {
        let select = Select::new("Color?", vec!["red", "green", "blue"]);
        assert_eq!(select.initial_index(), 0);
        let select = Select::with_default("Color?", "mauve", vec!["red", "green", "blue"]);
        assert_eq!(select.initial_index(), 0);
    }

    #[test]
    fn empty_options_fail_fast() {
        let select = Select::new("Color?", Vec::<String>::new());
        assert!(matches!(select.run(false), Err(PromptError::EmptyOptions)));
    }

    #[test]
    fn fallback_accepts_numeric_choice() {
        let select = Select::new("Color?", vec!["red", "green", "blue"]);
        let mut out: Vec<u8> = Vec::new();
        let answer = select
            .ask_fallback(&mut &b"3\n"[..], &mut out, false)
            .unwrap();
        assert_eq!(answer, "blue");
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("  1. red"));
        assert!(rendered.contains("? Color? blue"));
    }

    #[test]
    fn fallback_empty_garbage_or_eof_keeps_default() {
        let select = Select::with_default("Color?", "green", vec!["red", "green", "blue"]);
        for input in [&b"\n"[..], &b"seven\n"[..], &b"9\n"[..], &b""[..]] {
            let mut out: Vec<u8> = Vec::new();
            let answer = select.ask_fallback(&mut &input[..], &mut out, false).unwrap();
            assert_eq!(answer, "green", "input {input:?}");
        }
    }

    #[test]
    fn redraw_erases_exactly_the_option_block() {
        let mut out: Vec<u8> = Vec::new();
        run_loop(&b"\x1b[B\n"[..], &mut out, &options(), 0, false).unwrap();
        let rendered = String::from_utf8(out).unwrap();
        // Initial draw plus one redraw, each erasing three lines first.
        assert!(rendered.contains("\x1b[3A"), "missing 3-line erase: {rendered:?}");
        assert_eq!(rendered.matches("\r\n").count(), 6);
    }

    #[test]
    fn cursor_glyph_tracks_selection() {
        let mut out: Vec<u8> = Vec::new();
        draw_options(&mut out, &options(), 1, false).unwrap();
        let rendered = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = rendered.split("\r\n").collect();
        assert_eq!(lines[0], "  red");
        assert_eq!(lines[1], "> green");
        assert_eq!(lines[2], "  blue");
    }
}
