mod error;
mod generate;
mod query;

pub use error::{UrlError, UrlResult};
pub use generate::{UrlOptions, UrlValues, generate_url};
pub use query::Query;
