use std::path::PathBuf;
use thiserror::Error;

/// Malformed line in a locations file
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("line {line}: expected `<designator>: x:<float>,y:<float>`, got {text:?}")]
    MissingValue { line: usize, text: String },

    #[error("line {line}: expected exactly two comma separated fields, got {text:?}")]
    FieldCount { line: usize, text: String },

    #[error("line {line}: field {field:?} has no `label:value` form")]
    MalformedField { line: usize, field: String },

    #[error("line {line}: {value:?} is not a number")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: designator {designator:?} must be `<name>.token` or `<name>.powers.<index>`")]
    InvalidDesignator { line: usize, designator: String },

    #[error("line {line}: power index {index:?} is not a non-negative integer")]
    InvalidPowerIndex { line: usize, index: String },
}

impl ParseError {
    /// 1-based line number the error was raised on
    pub fn line(&self) -> usize {
        match self {
            ParseError::MissingValue { line, .. }
            | ParseError::FieldCount { line, .. }
            | ParseError::MalformedField { line, .. }
            | ParseError::InvalidNumber { line, .. }
            | ParseError::InvalidDesignator { line, .. }
            | ParseError::InvalidPowerIndex { line, .. } => *line,
        }
    }
}

/// Failure while laying out the scatter plot
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    #[error("location {location:?} has neither a token nor any power to anchor its label")]
    MissingAnchor { location: String },
}

/// Failure while replaying requests
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("step `{step}`: failed to read request body {path:?}")]
    ReadBody {
        step: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("step `{step}`: POST {url} failed")]
    Transport {
        step: String,
        url: String,
        #[source]
        source: TransportError,
    },
}

/// Error raised by a [`crate::player::Transport`] implementation
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error of the locmap library
#[derive(Debug, Error)]
pub enum LocmapError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Plot(#[from] PlotError),

    #[error(transparent)]
    Player(#[from] PlayerError),

    #[error("I/O error on {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid locations JSON in {path:?}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, LocmapError>;
