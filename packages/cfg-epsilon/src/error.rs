use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq)]
pub enum Error {
    EpsilonNotAlone { line: usize, alternative: String },
    ExpectedNonTerminal(char),
    InvalidSymbol(char),
    Io { path: String, message: String },
    Syntax { line: usize, column: usize, text: String },
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EpsilonNotAlone { line, alternative } => write!(
                f,
                "line {}: ε may not be combined with other symbols in '{}'",
                line, alternative
            ),
            Error::ExpectedNonTerminal(c) => write!(f, "expected non-terminal, found '{}'", c),
            Error::InvalidSymbol(c) => write!(f, "invalid grammar symbol '{}'", c),
            Error::Io { path, message } => write!(f, "could not read '{}': {}", path, message),
            Error::Syntax { line, column, text } => write!(
                f,
                "line {} is malformed at column {}: '{}' (expected e.g. S -> 0A0 | 1B1 | BB)",
                line, column, text
            ),
        }
    }
}
