use std::collections::HashMap;

use regex::Regex;

use super::{Query, UrlError, UrlResult};
use crate::path::{encode_component, encode_path};
use crate::pattern::{ParamToken, PatternAst, PatternError, Token, TokenKind};

/// Values substituted into a template, either in declaration order or by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlValues {
    Positional(Vec<String>),
    Named(HashMap<String, String>),
}

impl UrlValues {
    pub fn positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self::Positional(values.into_iter().map(Into::into).collect())
    }

    pub fn named<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Named(
            values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn none() -> Self {
        Self::Positional(Vec::new())
    }
}

impl From<Vec<String>> for UrlValues {
    fn from(value: Vec<String>) -> Self {
        Self::Positional(value)
    }
}

impl From<HashMap<String, String>> for UrlValues {
    fn from(value: HashMap<String, String>) -> Self {
        Self::Named(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlOptions {
    pub query: Option<Query>,
}

impl UrlOptions {
    pub fn with_query(query: impl Into<Query>) -> Self {
        Self {
            query: Some(query.into()),
        }
    }
}

#[tracing::instrument(level = "trace", skip_all, fields(tokens=ast.tokens.len() as u64))]
pub fn generate_url(ast: &PatternAst, values: &UrlValues, options: &UrlOptions) -> UrlResult<String> {
    let mut url = String::new();
    let mut cursor = 0usize;

    for token in &ast.tokens {
        let param = match token {
            Token::Literal(text) => {
                url.push_str(text);
                continue;
            }
            Token::Param(param) => param,
        };

        let value = match values {
            UrlValues::Positional(list) => {
                let value = list.get(cursor);
                cursor += 1;
                value
            }
            UrlValues::Named(map) => map.get(&param.name.to_string()),
        };

        let Some(value) = value else {
            if !param.is_optional() {
                return Err(UrlError::MissingParameter {
                    name: param.name.to_string(),
                });
            }
            if param.partial
                && let Some(prefix) = param.prefix
            {
                url.push(prefix);
            }
            continue;
        };

        let segment = encode_segment(param, value);
        ensure_matches(param, &segment)?;

        if let Some(prefix) = param.prefix {
            url.push(prefix);
        }
        url.push_str(&segment);
    }

    if let Some(query) = &options.query {
        let serialized = query.serialize();
        if !serialized.is_empty() {
            url.push('?');
            url.push_str(&serialized);
        }
    }

    Ok(url)
}

fn encode_segment(param: &ParamToken, value: &str) -> String {
    match param.kind {
        TokenKind::Asterisk => encode_path(value),
        TokenKind::Named | TokenKind::Group => encode_component(value).into_owned(),
    }
}

fn ensure_matches(param: &ParamToken, segment: &str) -> UrlResult<()> {
    let source = format!("^(?:{})$", param.pattern);
    let regex = Regex::new(&source).map_err(|err| PatternError::RegexInvalid {
        pattern: source.clone(),
        error: err.to_string(),
    })?;

    if regex.is_match(segment) {
        Ok(())
    } else {
        Err(UrlError::ParameterMismatch {
            name: param.name.to_string(),
            pattern: param.pattern.clone(),
            value: segment.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::parse_pattern;

    fn url(template: &str, values: UrlValues) -> UrlResult<String> {
        let ast = parse_pattern(template).unwrap();
        generate_url(&ast, &values, &UrlOptions::default())
    }

    #[test]
    fn skips_missing_optional_parameter_with_prefix() {
        assert_eq!(url("/users/:id?", UrlValues::none()).unwrap(), "/users");
    }

    #[test]
    fn asterisk_values_keep_slashes() {
        let ast = parse_pattern("/static/*").unwrap();
        let values = UrlValues::positional(["css/site main.css"]);
        let generated = generate_url(&ast, &values, &UrlOptions::default()).unwrap();
        assert_eq!(generated, "/static/css/site%20main.css");
    }

    #[test]
    fn constrained_parameter_rejects_non_matching_value() {
        let err = url("/users/:id(\\d+)", UrlValues::positional(["abc"])).unwrap_err();
        match err {
            UrlError::ParameterMismatch { name, value, .. } => {
                assert_eq!(name, "id");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_value_does_not_satisfy_default_pattern() {
        let err = url("/:id", UrlValues::positional([""])).unwrap_err();
        assert!(matches!(err, UrlError::ParameterMismatch { .. }));
    }
}
