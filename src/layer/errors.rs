use thiserror::Error;

use super::LayerOptionsError;
use crate::pattern::PatternError;

#[derive(Debug, Error)]
pub enum LayerError {
    #[error("{methods} `{route}`: `middleware` must be a handler, not `{found}`")]
    InvalidMiddleware {
        methods: String,
        route: String,
        found: &'static str,
    },
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Options(#[from] LayerOptionsError),
}

pub type LayerResult<T> = Result<T, LayerError>;
