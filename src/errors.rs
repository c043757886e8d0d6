use crate::layer::{LayerError, LayerOptionsError};
use crate::pattern::PatternError;
use crate::url::UrlError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error(transparent)]
    Layer(#[from] LayerError),
    #[error(transparent)]
    Options(#[from] LayerOptionsError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Url(#[from] UrlError),
}

pub type RouteResult<T> = Result<T, RouteError>;
