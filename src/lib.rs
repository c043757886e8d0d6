pub mod errors;
pub mod layer;
pub mod middleware;
pub mod path;
pub mod pattern;
pub mod types;
pub mod url;

pub use errors::{RouteError, RouteResult};
pub use layer::{Layer, LayerOptions, LayerOptionsBuilder, MethodSet, Params, PathSpec};
pub use middleware::{Middleware, Next, RouteContext};
pub use pattern::{ParamDescriptor, ParamName};
pub use types::BoxFuture;
pub use url::{Query, UrlOptions, UrlValues};
