//! quest — interactive terminal prompts and Unicode-aware table rendering.
//!
//! This crate provides inline question/answer flows (free text, multi-line,
//! yes/no, and arrow-key selection) plus a bordered table renderer that
//! aligns columns correctly for CJK glyphs, emoji, combining marks, and
//! embedded ANSI styling.
//!
//! # Quick start
//!
//! ```no_run
//! use quest::prompt::{Question, Questionnaire, Input, Select};
//! use quest::table::{theme, Table, TableFlags};
//!
//! let questions = Questionnaire::new(vec![
//!     Question::Input(Input::new("What is your name?")),
//!     Question::Select(Select::new(
//!         "What is your favorite color?",
//!         vec!["red", "blue", "green"],
//!     )),
//! ]);
//! let answers = questions.run(true).unwrap();
//!
//! let table = Table::from_columns_with_theme(
//!     vec![vec!["name".to_string(), "color".to_string()], answers],
//!     TableFlags::VERTICAL_BORDERS | TableFlags::HEADER_BORDER,
//!     &theme::ROUNDED,
//! );
//! print!("{}", table.render());
//! ```

pub mod build_info;
pub mod error;
pub mod keys;
pub mod measure;
pub mod prompt;
pub mod settings;
pub mod table;
pub mod term;
pub mod width;
