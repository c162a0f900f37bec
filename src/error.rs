//! Unified error types for prompts and terminal access.

use std::fmt;
use std::io;

/// Errors arising while running an interactive prompt.
#[derive(Debug)]
pub enum PromptError {
    /// A selection prompt was constructed with no options to choose from.
    EmptyOptions,
    /// The terminal could not be switched into raw mode (commonly: stdin is
    /// not a terminal). No attributes were changed, so nothing is restored.
    Terminal(io::Error),
    /// Reading input or writing the prompt surface failed.
    Io(io::Error),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyOptions => write!(f, "selection prompt has no options"),
            Self::Terminal(e) => write!(f, "terminal unavailable: {e}"),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for PromptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyOptions => None,
            Self::Terminal(e) | Self::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_descriptive() {
        assert_eq!(
            PromptError::EmptyOptions.to_string(),
            "selection prompt has no options"
        );
        let e = PromptError::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "closed"));
        assert!(e.to_string().contains("closed"));
    }
}
