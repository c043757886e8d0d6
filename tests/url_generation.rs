mod common;

use std::collections::HashMap;

use common::{TestContext, layer, mark};
use regex::Regex;
use route_layer_rs::url::UrlError;
use route_layer_rs::{Layer, LayerOptions, Query, RouteError, RouteResult, UrlOptions, UrlValues};

#[test]
fn url_when_named_values_given_then_substitutes_params() {
    let route = layer("/:category/:title", &["get"]);
    let url = route
        .url(
            UrlValues::named([("category", "programming"), ("title", "how-to-node")]),
            None,
        )
        .unwrap();
    assert_eq!(url, "/programming/how-to-node");
}

#[test]
fn url_when_positional_values_given_then_fills_in_declaration_order() {
    let route = layer("/:category/:title", &["get"]);
    let url = route
        .url(UrlValues::positional(["programming", "how-to-node"]), None)
        .unwrap();
    assert_eq!(url, "/programming/how-to-node");
}

#[test]
fn url_when_value_has_spaces_then_it_is_percent_encoded() {
    let route = layer("/:category/:title", &["get"]);
    let url = route
        .url(
            UrlValues::named([("category", "programming"), ("title", "how to node")]),
            None,
        )
        .unwrap();
    assert_eq!(url, "/programming/how%20to%20node");
}

#[test]
fn url_when_required_value_missing_then_names_the_param() {
    let route = layer("/:category/:title", &["get"]);
    let values: HashMap<String, String> =
        [("category".to_string(), "programming".to_string())].into();
    match route.url(values, None).expect_err("missing title should fail") {
        UrlError::MissingParameter { name } => assert_eq!(name, "title"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn url_when_query_pairs_given_then_appends_query_string() {
    let route = layer("/users/:id", &["get"]);
    let options = UrlOptions::with_query(Query::pairs([
        ("tag", "a b"),
        ("tag", "c"),
        ("page", "2"),
    ]));
    let url = route
        .url(UrlValues::positional(["3"]), Some(&options))
        .unwrap();
    assert_eq!(url, "/users/3?tag=a%20b&tag=c&page=2");
}

#[test]
fn url_when_query_is_raw_string_then_appends_it_verbatim() {
    let route = layer("/search", &["get"]);
    let options = UrlOptions::with_query("q=rust&sort=new");
    let url = route.url(UrlValues::none(), Some(&options)).unwrap();
    assert_eq!(url, "/search?q=rust&sort=new");
}

#[test]
fn url_when_generated_then_layer_is_unchanged() {
    let route = layer("/:id", &["get"]);
    let _ = route.url(UrlValues::positional(["1"]), None).unwrap();
    assert_eq!(route.plain_path(), "/:id");
    assert!(route.matches("/2"));
}

#[test]
fn url_when_template_has_wildcard_group_then_it_is_omitted() {
    let route = layer("/files/:name(.*)", &["get"]);
    assert_eq!(
        route.url(UrlValues::positional(["report"]), None).unwrap(),
        "/files/report"
    );
}

#[test]
fn url_when_route_is_regex_then_generation_fails() {
    let route: Layer<TestContext> = Layer::new(
        Regex::new("^/api/(\\d+)").unwrap(),
        ["GET"],
        [mark("a")],
        LayerOptions::default(),
    )
    .unwrap();
    assert!(matches!(
        route.url(UrlValues::none(), None),
        Err(UrlError::NotATemplate { .. })
    ));
}

#[test]
fn url_when_value_has_unreserved_marks_then_they_are_kept() {
    let route = layer("/:title", &["get"]);
    assert_eq!(
        route.url(UrlValues::positional(["it's(1)!"]), None).unwrap(),
        "/it's(1)!"
    );
    assert_eq!(
        route.url(UrlValues::positional(["a*b~c"]), None).unwrap(),
        "/a*b~c"
    );
}

fn prefixed_url(prefix: &str, template: &str, values: UrlValues) -> RouteResult<String> {
    let mut route: Layer<TestContext> =
        Layer::new(template, ["GET"], [mark("a")], LayerOptions::default())?;
    route.set_prefix(prefix)?;
    Ok(route.url(values, None)?)
}

#[test]
fn url_when_steps_chained_then_errors_convert_into_route_error() {
    assert_eq!(
        prefixed_url("/orgs/:org", "/repos/:repo", UrlValues::positional(["acme", "widgets"]))
            .unwrap(),
        "/orgs/acme/repos/widgets"
    );
    assert!(matches!(
        prefixed_url("/orgs/:org", "/repos/:repo", UrlValues::positional(["acme"])),
        Err(RouteError::Url(UrlError::MissingParameter { .. }))
    ));
    assert!(matches!(
        prefixed_url("/(", "/repos/:repo", UrlValues::none()),
        Err(RouteError::Layer(_))
    ));
}
