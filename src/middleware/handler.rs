use std::fmt;
use std::sync::Arc;

use crate::layer::Params;
use crate::types::BoxFuture;

/// Request state visible to parameter validators.
pub trait RouteContext: Send {
    fn params(&self) -> &Params;
}

type HandlerFn<C> = dyn for<'a> Fn(&'a mut C, Next<'a, C>) -> BoxFuture<'a, ()> + Send + Sync;

/// One unit of a layer's chain. Units built by
/// [`Layer::register_param_validator`](crate::layer::Layer::register_param_validator)
/// carry the name of the parameter they validate.
pub struct Middleware<C> {
    handler: Arc<HandlerFn<C>>,
    param: Option<Box<str>>,
}

impl<C> Middleware<C> {
    pub fn new<F>(f: F) -> Self
    where
        F: for<'a> Fn(&'a mut C, Next<'a, C>) -> BoxFuture<'a, ()> + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(f),
            param: None,
        }
    }

    pub fn param(&self) -> Option<&str> {
        self.param.as_deref()
    }

    pub fn is_param_validator(&self) -> bool {
        self.param.is_some()
    }

    pub fn call<'a>(&self, ctx: &'a mut C, next: Next<'a, C>) -> BoxFuture<'a, ()> {
        (self.handler)(ctx, next)
    }
}

impl<C: RouteContext + 'static> Middleware<C> {
    pub(crate) fn param_validator<F>(param: &str, f: F) -> Self
    where
        F: for<'a> Fn(Option<String>, &'a mut C, Next<'a, C>) -> BoxFuture<'a, ()>
            + Send
            + Sync
            + 'static,
    {
        let name: Box<str> = param.into();
        let key = name.clone();
        let mut middleware = Self::new(move |ctx: &mut C, next| {
            let value = ctx.params().get(&key).map(str::to_owned);
            f(value, ctx, next)
        });
        middleware.param = Some(name);
        middleware
    }
}

impl<C> Clone for Middleware<C> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
            param: self.param.clone(),
        }
    }
}

impl<C> fmt::Debug for Middleware<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Middleware")
            .field("param", &self.param)
            .finish_non_exhaustive()
    }
}

/// Continuation handed to each unit; running it starts the rest of the chain.
pub struct Next<'a, C> {
    validators: &'a [Middleware<C>],
    handlers: &'a [Middleware<C>],
}

impl<'a, C> Next<'a, C> {
    pub(crate) fn new(validators: &'a [Middleware<C>], handlers: &'a [Middleware<C>]) -> Self {
        Self {
            validators,
            handlers,
        }
    }

    /// Runs the rest of the chain. The context may be reborrowed for a
    /// shorter lifetime so the caller can keep using it afterwards.
    pub fn run<'b>(self, ctx: &'b mut C) -> BoxFuture<'b, ()>
    where
        'a: 'b,
    {
        if let Some((first, rest)) = self.validators.split_first() {
            return first.call(ctx, Next::new(rest, self.handlers));
        }
        if let Some((first, rest)) = self.handlers.split_first() {
            return first.call(ctx, Next::new(self.validators, rest));
        }
        Box::pin(async {})
    }
}
