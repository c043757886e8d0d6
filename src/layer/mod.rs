mod errors;
mod methods;
mod options;
mod params;

pub use errors::{LayerError, LayerResult};
pub use methods::MethodSet;
pub use options::{LayerOptions, LayerOptionsBuilder, LayerOptionsError};
pub use params::Params;

use std::fmt;

use regex::Regex;

use crate::middleware::{Middleware, MiddlewareStack, Next, RouteContext};
use crate::path::{decode_component, plain_path};
use crate::pattern::{
    CaptureList, Matcher, ParamDescriptor, PatternError, PatternResult, compile_regex,
    compile_template, parse_pattern,
};
use crate::types::BoxFuture;
use crate::url::{UrlError, UrlOptions, UrlResult, UrlValues, generate_url};

#[derive(Debug, Clone)]
pub enum PathSpec {
    Template(String),
    Regex(Regex),
}

impl PathSpec {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Template(template) => template,
            Self::Regex(regex) => regex.as_str(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    fn with_prefix(&self, prefix: &str) -> PatternResult<Self> {
        match self {
            Self::Template(template) => Ok(Self::Template(format!("{prefix}{template}"))),
            Self::Regex(regex) => {
                let escaped = regex::escape(prefix);
                let source = match regex.as_str().strip_prefix('^') {
                    Some(rest) => format!("^{escaped}{rest}"),
                    None => format!("{escaped}{}", regex.as_str()),
                };
                Regex::new(&source)
                    .map(Self::Regex)
                    .map_err(|err| PatternError::RegexInvalid {
                        pattern: source,
                        error: err.to_string(),
                    })
            }
        }
    }
}

impl From<&str> for PathSpec {
    fn from(value: &str) -> Self {
        Self::Template(value.to_string())
    }
}

impl From<String> for PathSpec {
    fn from(value: String) -> Self {
        Self::Template(value)
    }
}

impl From<Regex> for PathSpec {
    fn from(value: Regex) -> Self {
        Self::Regex(value)
    }
}

struct CompiledPath {
    plain_path: String,
    params: Vec<ParamDescriptor>,
    matcher: Matcher,
}

fn compile_path(path: &PathSpec, options: &LayerOptions) -> PatternResult<CompiledPath> {
    let compile_options = options.compile_options();
    let (plain_path, compiled) = match path {
        PathSpec::Template(template) => (
            plain_path(template),
            compile_template(template, compile_options)?,
        ),
        PathSpec::Regex(regex) => (
            regex.as_str().to_string(),
            compile_regex(regex, compile_options),
        ),
    };
    let matcher = Matcher::new(&compiled)?;

    Ok(CompiledPath {
        plain_path,
        params: compiled.params,
        matcher,
    })
}

/// One route definition: methods, compiled path and middleware chain.
pub struct Layer<C> {
    name: Option<String>,
    path: PathSpec,
    plain_path: String,
    methods: MethodSet,
    matcher: Matcher,
    params: Vec<ParamDescriptor>,
    stack: MiddlewareStack<C>,
    options: LayerOptions,
}

impl<C> Layer<C> {
    #[tracing::instrument(level = "trace", skip_all, fields(path=%path.as_str()))]
    fn build(
        path: PathSpec,
        methods: Vec<String>,
        middleware: Vec<Option<Middleware<C>>>,
        options: LayerOptions,
    ) -> LayerResult<Self> {
        options.validate()?;

        let mut handlers = Vec::with_capacity(middleware.len());
        for item in middleware {
            match item {
                Some(handler) => handlers.push(handler),
                None => {
                    return Err(LayerError::InvalidMiddleware {
                        methods: methods.join(","),
                        route: options
                            .name
                            .clone()
                            .unwrap_or_else(|| path.as_str().to_string()),
                        found: "None",
                    });
                }
            }
        }

        let compiled = compile_path(&path, &options)?;

        Ok(Self {
            name: options.name.clone(),
            methods: MethodSet::new(&methods),
            path,
            plain_path: compiled.plain_path,
            matcher: compiled.matcher,
            params: compiled.params,
            stack: MiddlewareStack::new(handlers),
            options,
        })
    }

    pub fn new<P, M, S, I>(path: P, methods: M, middleware: I, options: LayerOptions) -> LayerResult<Self>
    where
        P: Into<PathSpec>,
        M: IntoIterator<Item = S>,
        S: AsRef<str>,
        I: IntoIterator,
        I::Item: Into<Option<Middleware<C>>>,
    {
        Self::build(
            path.into(),
            methods.into_iter().map(|m| m.as_ref().to_string()).collect(),
            middleware.into_iter().map(Into::into).collect(),
            options,
        )
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn path(&self) -> &PathSpec {
        &self.path
    }

    pub fn plain_path(&self) -> &str {
        &self.plain_path
    }

    pub fn methods(&self) -> &MethodSet {
        &self.methods
    }

    pub fn options(&self) -> &LayerOptions {
        &self.options
    }

    pub fn param_names(&self) -> &[ParamDescriptor] {
        &self.params
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn stack(&self) -> impl Iterator<Item = &Middleware<C>> {
        self.stack.iter()
    }

    /// End offset of the match in `path`, or `None` when the route does not match.
    pub fn match_length(&self, path: &str) -> Option<usize> {
        self.matcher.match_end(path)
    }

    pub fn matches(&self, path: &str) -> bool {
        self.matcher.is_match(path)
    }

    pub fn captures<'p>(&self, path: &'p str) -> CaptureList<'p> {
        if self.options.ignore_captures {
            return CaptureList::new();
        }
        self.matcher.captures(path).unwrap_or_default()
    }

    /// Binds `captures` to the declared parameters, percent-decoding each
    /// value. Pass the map from an outer layer as `existing` to accumulate.
    pub fn params(&self, captures: &[Option<&str>], existing: Option<Params>) -> Params {
        let mut params = existing.unwrap_or_default();

        for (descriptor, capture) in self.params.iter().zip(captures) {
            let value = capture.map(|raw| decode_component(raw).into_string());
            params.insert(descriptor.name.to_string(), value);
        }

        params
    }

    pub fn set_prefix(&mut self, prefix: &str) -> LayerResult<&mut Self> {
        if self.path.is_empty() {
            return Ok(self);
        }

        let path = self.path.with_prefix(prefix)?;
        let compiled = compile_path(&path, &self.options)?;
        tracing::debug!(prefix = %prefix, path = %path.as_str(), "route prefixed");

        self.path = path;
        self.plain_path = compiled.plain_path;
        self.params = compiled.params;
        self.matcher = compiled.matcher;
        Ok(self)
    }

    pub fn url(&self, values: impl Into<UrlValues>, options: Option<&UrlOptions>) -> UrlResult<String> {
        if let PathSpec::Regex(regex) = &self.path {
            return Err(UrlError::NotATemplate {
                path: regex.as_str().to_string(),
            });
        }

        let ast = parse_pattern(&self.plain_path)?;
        generate_url(&ast, &values.into(), options.unwrap_or(&UrlOptions::default()))
    }

    pub fn dispatch<'a>(&'a self, ctx: &'a mut C) -> BoxFuture<'a, ()> {
        self.stack.entry().run(ctx)
    }

    pub fn entry(&self) -> Next<'_, C> {
        self.stack.entry()
    }
}

impl<C: RouteContext + 'static> Layer<C> {
    /// Adds a validator for `param`, run with the bound value before any
    /// handler. Ignored when the path does not declare `param`.
    pub fn register_param_validator<F>(&mut self, param: &str, f: F) -> &mut Self
    where
        F: for<'a> Fn(Option<String>, &'a mut C, Next<'a, C>) -> BoxFuture<'a, ()>
            + Send
            + Sync
            + 'static,
    {
        let Some(position) = self.params.iter().position(|d| d.name.matches(param)) else {
            tracing::debug!(param = %param, path = %self.path.as_str(), "param not declared by route; validator dropped");
            return self;
        };

        let middleware = Middleware::param_validator(param, f);
        let declared = &self.params;
        self.stack.insert_validator(position, middleware, |name| {
            declared.iter().position(|d| d.name.matches(name))
        });
        self
    }
}

impl<C> fmt::Debug for Layer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layer")
            .field("name", &self.name)
            .field("path", &self.path.as_str())
            .field("methods", &self.methods)
            .field("params", &self.params)
            .field("stack", &self.stack)
            .finish()
    }
}
