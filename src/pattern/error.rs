use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("parameter in pattern '{pattern}' at byte {index} is missing a name")]
    ParameterMissingName { pattern: String, index: usize },
    #[error("group starting at byte {start} in pattern '{pattern}' is never closed")]
    UnterminatedGroup { pattern: String, start: usize },
    #[error("group starting at byte {start} in pattern '{pattern}' is empty")]
    EmptyGroup { pattern: String, start: usize },
    #[error("group starting at byte {start} in pattern '{pattern}' contains an unescaped '('")]
    NestedGroup { pattern: String, start: usize },
    #[error("wildcard at byte {index} in pattern '{pattern}' cannot take modifier '{modifier}'")]
    WildcardQuantifierUnsupported {
        pattern: String,
        index: usize,
        modifier: char,
    },
    #[error("pattern '{pattern}' ends with a lone escape character at byte {index}")]
    LoneEscapeCharacter { pattern: String, index: usize },
    #[error("pattern '{pattern}' produced an invalid expression: {error}")]
    RegexInvalid { pattern: String, error: String },
}

pub type PatternResult<T> = Result<T, PatternError>;
