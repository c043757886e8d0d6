#![allow(dead_code)]

use route_layer_rs::{Layer, LayerOptions, Middleware, Params, RouteContext};

#[derive(Debug, Default)]
pub struct TestContext {
    pub params: Params,
    pub trail: Vec<String>,
    pub status: u16,
    pub user: Option<String>,
}

impl RouteContext for TestContext {
    fn params(&self) -> &Params {
        &self.params
    }
}

pub fn mark(label: &'static str) -> Middleware<TestContext> {
    Middleware::new(move |ctx: &mut TestContext, next| {
        Box::pin(async move {
            ctx.trail.push(label.to_string());
            next.run(ctx).await;
        })
    })
}

pub fn layer(path: &str, methods: &[&str]) -> Layer<TestContext> {
    Layer::new(path, methods, [mark("handler")], LayerOptions::default())
        .expect("layer should build")
}

pub fn layer_with(path: &str, options: LayerOptions) -> Layer<TestContext> {
    Layer::new(path, ["GET"], [mark("handler")], options).expect("layer should build")
}

/// Matches `path` against `layer` and binds its parameters the way a router would.
pub fn bind(layer: &Layer<TestContext>, path: &str) -> TestContext {
    let captures = layer.captures(path);
    TestContext {
        params: layer.params(&captures, None),
        ..Default::default()
    }
}
