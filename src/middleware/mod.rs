mod handler;
mod stack;

pub use handler::{Middleware, Next, RouteContext};
pub use stack::MiddlewareStack;
