//! Question prompts: single-line input, multi-line capture, yes/no, and the
//! questionnaire runner that chains them.
//!
//! Every prompt renders a `? question` line, captures input, then collapses
//! its own surface into a one-line `? question answer` summary using the
//! shared erase-then-redraw primitive. The interactive arrow-key selection
//! prompt lives in [`select`].
//!
//! All prompts run against explicit reader/writer parameters internally; the
//! public `run` methods bind them to stdin and stderr.

pub mod select;

use crate::error::PromptError;
use crate::settings;
use crate::term::{erase_lines, write_answer_summary, write_question_prefix};
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::QueueableCommand;
use std::io::{self, BufRead, Write};
use tracing::debug;

pub use self::select::Select;

/// One-line free-text prompt with an optional default used for empty input.
#[derive(Debug, Clone)]
pub struct Input {
    question: String,
    default: Option<String>,
}

impl Input {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            default: None,
        }
    }

    pub fn with_default(question: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            default: Some(default.into()),
        }
    }

    pub fn run(&self, color: bool) -> Result<String, PromptError> {
        let stdin = io::stdin();
        self.ask_with(&mut stdin.lock(), &mut io::stderr(), color)
    }

    fn ask_with<R, W>(&self, input: &mut R, out: &mut W, color: bool) -> Result<String, PromptError>
    where
        R: BufRead,
        W: Write + QueueableCommand,
    {
        write_question_prefix(out, color, &self.question, true)?;
        out.flush()?;

        let mut line = String::new();
        let read = input.read_line(&mut line)?;
        if read == 0 {
            // EOF leaves the cursor on the prompt line; move past it so the
            // erase below removes exactly the prompt.
            out.queue(Print("\n"))?;
        }
        let mut answer = line.trim_end_matches(['\r', '\n']).to_string();
        if answer.is_empty() {
            answer = self.default.clone().unwrap_or_default();
        }

        erase_lines(out, 1)?;
        write_answer_summary(out, color, &self.question, &answer)?;
        out.flush()?;
        Ok(answer)
    }
}

/// Multi-line capture, finished by two consecutive empty lines or EOF.
///
/// An empty first line short-circuits to the default text.
#[derive(Debug, Clone)]
pub struct Multiline {
    question: String,
    default: Option<String>,
}

impl Multiline {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            default: None,
        }
    }

    pub fn with_default(question: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            default: Some(default.into()),
        }
    }

    pub fn run(&self, color: bool) -> Result<String, PromptError> {
        let stdin = io::stdin();
        self.ask_with(&mut stdin.lock(), &mut io::stderr(), color)
    }

    fn ask_with<R, W>(&self, input: &mut R, out: &mut W, color: bool) -> Result<String, PromptError>
    where
        R: BufRead,
        W: Write + QueueableCommand,
    {
        write_question_prefix(out, color, &self.question, false)?;
        if color {
            out.queue(PrintStyledContent(
                settings::MULTILINE_HINT.with(settings::color_answer()),
            ))?;
        } else {
            out.queue(Print(settings::MULTILINE_HINT))?;
        }
        out.queue(Print("\n"))?;
        out.flush()?;

        let mut result = String::new();
        let mut blanks = 0usize;
        let mut captured_lines = 0usize;
        loop {
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                out.queue(Print("\n"))?;
                break;
            }
            let line = line.trim_end_matches(['\r', '\n']);

            if line.is_empty() && captured_lines == 0 {
                result = self.default.clone().unwrap_or_default();
                break;
            }
            if line.is_empty() {
                blanks += 1;
                if blanks == 2 {
                    break;
                }
            } else {
                blanks = 0;
            }

            captured_lines += 1;
            result.push_str(line);
            result.push('\n');
        }

        if result.is_empty() {
            result = self.default.clone().unwrap_or_default();
        }

        // Prompt line, captured rows, and the terminating blank row.
        erase_lines(out, captured_lines + 2)?;
        write_question_prefix(out, color, &self.question, false)?;
        out.queue(Print("\n"))?;
        if !result.is_empty() {
            if color {
                out.queue(PrintStyledContent(
                    result.as_str().with(settings::color_answer()),
                ))?;
            } else {
                out.queue(Print(result.as_str()))?;
            }
            if !result.ends_with('\n') {
                out.queue(Print("\n"))?;
            }
        }
        out.flush()?;
        Ok(result)
    }
}

/// Yes/no prompt returning `"yes"` or `"no"`, with a default for empty or
/// unrecognized input.
#[derive(Debug, Clone)]
pub struct YesNo {
    question: String,
    default: bool,
}

impl YesNo {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            default: false,
        }
    }

    pub fn with_default(question: impl Into<String>, default: bool) -> Self {
        Self {
            question: question.into(),
            default,
        }
    }

    pub fn run(&self, color: bool) -> Result<String, PromptError> {
        let stdin = io::stdin();
        self.ask_with(&mut stdin.lock(), &mut io::stderr(), color)
    }

    fn ask_with<R, W>(&self, input: &mut R, out: &mut W, color: bool) -> Result<String, PromptError>
    where
        R: BufRead,
        W: Write + QueueableCommand,
    {
        write_question_prefix(out, color, &self.question, false)?;
        let hint = if self.default {
            settings::YES_HINT
        } else {
            settings::NO_HINT
        };
        out.queue(Print(hint))?;
        out.queue(Print(" "))?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            out.queue(Print("\n"))?;
        }
        let yes = match line.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => true,
            "n" | "no" => false,
            _ => self.default,
        };
        let answer = if yes {
            settings::ANSWER_YES
        } else {
            settings::ANSWER_NO
        };

        erase_lines(out, 1)?;
        write_answer_summary(out, color, &self.question, answer)?;
        out.flush()?;
        Ok(answer.to_string())
    }
}

/// The closed set of question kinds a questionnaire can ask.
#[derive(Debug, Clone)]
pub enum Question {
    Input(Input),
    Multiline(Multiline),
    YesNo(YesNo),
    Select(Select),
}

impl Question {
    /// Run the prompt and return its answer string.
    pub fn ask(&self, color: bool) -> Result<String, PromptError> {
        match self {
            Self::Input(p) => p.run(color),
            Self::Multiline(p) => p.run(color),
            Self::YesNo(p) => p.run(color),
            Self::Select(p) => p.run(color),
        }
    }
}

/// An ordered list of questions asked in sequence.
#[derive(Debug, Clone, Default)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn push(&mut self, question: Question) {
        self.questions.push(question);
    }

    /// Ask every question in order, collecting answers. The first prompt
    /// error aborts the run; prompts are never retried.
    pub fn run(&self, color: bool) -> Result<Vec<String>, PromptError> {
        let mut answers = Vec::with_capacity(self.questions.len());
        for question in &self.questions {
            let answer = question.ask(color)?;
            debug!(answer = answer.as_str(), "question answered");
            answers.push(answer);
        }
        Ok(answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn input_returns_typed_line_and_collapses_to_summary() {
        let prompt = Input::new("Name?");
        let mut out: Vec<u8> = Vec::new();
        let answer = prompt
            .ask_with(&mut &b"ada\n"[..], &mut out, false)
            .unwrap();
        assert_eq!(answer, "ada");
        let rendered = plain(out);
        assert!(rendered.starts_with("? Name? "));
        assert!(rendered.ends_with("? Name? ada\n"));
    }

    #[test]
    fn input_empty_line_falls_back_to_default() {
        let prompt = Input::with_default("Color?", "mauve");
        let mut out: Vec<u8> = Vec::new();
        let answer = prompt.ask_with(&mut &b"\n"[..], &mut out, false).unwrap();
        assert_eq!(answer, "mauve");
    }

    #[test]
    fn input_eof_uses_default() {
        let prompt = Input::with_default("Color?", "teal");
        let mut out: Vec<u8> = Vec::new();
        let answer = prompt.ask_with(&mut &b""[..], &mut out, false).unwrap();
        assert_eq!(answer, "teal");
    }

    #[test]
    fn multiline_captures_until_two_blank_lines() {
        let prompt = Multiline::new("Bio?");
        let mut out: Vec<u8> = Vec::new();
        let answer = prompt
            .ask_with(&mut &b"first\nsecond\n\n\n"[..], &mut out, false)
            .unwrap();
        assert_eq!(answer, "first\nsecond\n\n");
    }

    #[test]
    fn multiline_blank_first_line_takes_default() {
        let prompt = Multiline::with_default("Bio?", "none given");
        let mut out: Vec<u8> = Vec::new();
        let answer = prompt.ask_with(&mut &b"\n"[..], &mut out, false).unwrap();
        assert_eq!(answer, "none given");
    }

    #[test]
    fn multiline_eof_finishes_capture() {
        let prompt = Multiline::new("Bio?");
        let mut out: Vec<u8> = Vec::new();
        let answer = prompt
            .ask_with(&mut &b"only line"[..], &mut out, false)
            .unwrap();
        assert_eq!(answer, "only line\n");
    }

    #[test]
    fn yesno_parses_case_insensitively() {
        let prompt = YesNo::new("Proceed?");
        let mut out: Vec<u8> = Vec::new();
        assert_eq!(
            prompt.ask_with(&mut &b"YES\n"[..], &mut out, false).unwrap(),
            "yes"
        );
        assert_eq!(
            prompt.ask_with(&mut &b"n\n"[..], &mut out, false).unwrap(),
            "no"
        );
    }

    #[test]
    fn yesno_empty_and_garbage_use_default() {
        let prompt = YesNo::with_default("Proceed?", true);
        let mut out: Vec<u8> = Vec::new();
        assert_eq!(
            prompt.ask_with(&mut &b"\n"[..], &mut out, false).unwrap(),
            "yes"
        );
        assert_eq!(
            prompt
                .ask_with(&mut &b"maybe\n"[..], &mut out, false)
                .unwrap(),
            "yes"
        );
    }

    #[test]
    fn yesno_hint_follows_default() {
        let mut out: Vec<u8> = Vec::new();
        YesNo::with_default("Go?", true)
            .ask_with(&mut &b"\n"[..], &mut out, false)
            .unwrap();
        assert!(plain(out).contains("[Y/n]"));

        let mut out: Vec<u8> = Vec::new();
        YesNo::new("Go?")
            .ask_with(&mut &b"\n"[..], &mut out, false)
            .unwrap();
        assert!(plain(out).contains("[y/N]"));
    }
}
