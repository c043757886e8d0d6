use super::{Middleware, Next};

/// A layer's dispatch chain, kept as two tiers: parameter validators ordered
/// by the declaration index of their parameter, then regular handlers in
/// registration order. Validators for the same parameter keep insertion order.
pub struct MiddlewareStack<C> {
    validators: Vec<Middleware<C>>,
    handlers: Vec<Middleware<C>>,
}

impl<C> MiddlewareStack<C> {
    pub fn new(handlers: Vec<Middleware<C>>) -> Self {
        Self {
            validators: Vec::new(),
            handlers,
        }
    }

    /// Inserts a validator for the parameter declared at `position`, before
    /// the first validator whose parameter is declared later. Existing
    /// validators are ranked through `position_of` against the route's
    /// current declarations, so a path rebuilt since they were added is
    /// honoured.
    pub fn insert_validator<F>(&mut self, position: usize, middleware: Middleware<C>, position_of: F) -> usize
    where
        F: Fn(&str) -> Option<usize>,
    {
        let idx = self
            .validators
            .iter()
            .position(|existing| {
                existing
                    .param()
                    .and_then(&position_of)
                    .is_some_and(|current| current > position)
            })
            .unwrap_or(self.validators.len());
        self.validators.insert(idx, middleware);
        idx
    }

    pub fn len(&self) -> usize {
        self.validators.len() + self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn handlers(&self) -> &[Middleware<C>] {
        &self.handlers
    }

    pub fn iter(&self) -> impl Iterator<Item = &Middleware<C>> {
        self.validators.iter().chain(self.handlers.iter())
    }

    pub fn entry(&self) -> Next<'_, C> {
        Next::new(&self.validators, &self.handlers)
    }
}

impl<C> std::fmt::Debug for MiddlewareStack<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
