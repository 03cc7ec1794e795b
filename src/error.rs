//! Error types for the NHL stats CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, NhlError>;

#[derive(Error, Debug)]
pub enum NhlError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid season {value:?}, expected 8 digits such as 20162017")]
    InvalidSeason { value: String },

    #[error("Invalid draft year {year}, pick a year between {min} and {max}")]
    InvalidDraftYear { year: u16, min: u16, max: u16 },

    #[error("Invalid {name}: {value:?}")]
    InvalidArgument { name: &'static str, value: String },

    #[error("Missing {name} for `{command}`")]
    MissingArgument {
        command: &'static str,
        name: &'static str,
    },

    #[error("`{command}` takes at most {max} argument(s)")]
    TooManyArguments { command: &'static str, max: usize },

    #[error("Round {round} not found in the {year} draft")]
    DraftRoundNotFound { year: u16, round: u8 },

    #[error("NHL API returned no data: {what}")]
    NoData { what: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },
}

impl NhlError {
    pub(crate) fn no_data(what: impl Into<String>) -> Self {
        NhlError::NoData { what: what.into() }
    }
}
