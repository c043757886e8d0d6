use thiserror::Error;

use crate::pattern::PatternError;

#[derive(Debug, Error)]
pub enum UrlError {
    #[error("expected parameter \"{name}\" to be defined")]
    MissingParameter { name: String },
    #[error("expected parameter \"{name}\" to match \"{pattern}\", but received \"{value}\"")]
    ParameterMismatch {
        name: String,
        pattern: String,
        value: String,
    },
    #[error("route '{path}' is a regular expression and cannot generate urls")]
    NotATemplate { path: String },
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

pub type UrlResult<T> = Result<T, UrlError>;
