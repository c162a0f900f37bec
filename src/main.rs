//! CLI entry point for the quest demo questionnaire.

mod cli;

use clap::Parser;
use quest::error::PromptError;
use quest::prompt::{Input, Multiline, Question, Questionnaire, Select};
use quest::table::{theme, Table, TableFlags};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("QUEST_LOG"))
        .with_writer(std::io::stderr)
        .init();

    let color = !args.no_color;
    let questions = vec![
        Question::Input(Input::new("What is your name?")),
        Question::Select(Select::new(
            "What is your favorite color?",
            vec!["red", "blue", "green"],
        )),
        Question::Multiline(Multiline::new("Write some multiline text.")),
    ];
    let questionnaire = Questionnaire::new(questions);

    let answers = match questionnaire.run(color) {
        Ok(answers) => answers,
        Err(PromptError::Terminal(e)) => {
            eprintln!("error: interactive selection needs a terminal: {e}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let selected_theme = match args.theme {
        cli::ThemeChoice::Modern => &theme::MODERN,
        cli::ThemeChoice::Rounded => &theme::ROUNDED,
        cli::ThemeChoice::Ascii => &theme::ASCII,
    };
    let mut flags = TableFlags::VERTICAL_BORDERS | TableFlags::HEADER_BORDER;
    if args.row_borders {
        flags |= TableFlags::HORIZONTAL_BORDERS;
    }

    let mut table = Table::with_theme(flags, selected_theme);
    table.append_column(vec!["question", "answer"]);
    let labels = ["name", "favorite color", "text"];
    for (label, answer) in labels.iter().zip(&answers) {
        table.append_column(vec![label.to_string(), answer.trim_end().to_string()]);
    }

    print!("{}", table.render());
}
