use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    DateParsing(String),
    TimeParsing(String),
    UnexpectedMarkup(String),
}

impl Error {
    pub fn date_parsing_error(msg: &str) -> Self {
        Self::DateParsing(msg.to_string())
    }
    pub fn time_parsing_error(msg: &str) -> Self {
        Self::TimeParsing(msg.to_string())
    }
    pub fn unexpected_markup_error(msg: &str) -> Self {
        Self::UnexpectedMarkup(msg.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateParsing(msg) => write!(f, "Date Parsing Failed: {}", msg),
            Self::TimeParsing(msg) => write!(f, "Time Parsing Failed: {}", msg),
            Self::UnexpectedMarkup(msg) => write!(f, "Unexpected Markup: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
