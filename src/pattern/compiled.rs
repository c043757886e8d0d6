use regex::Regex;

use super::PatternResult;
use super::ast::{ParamDescriptor, ParamName, ParamToken, PatternAst, Token};
use super::parser::{DEFAULT_DELIMITER, parse_pattern};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    pub sensitive: bool,
    pub strict: bool,
    pub end: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            sensitive: false,
            strict: false,
            end: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    pub source: String,
    pub params: Vec<ParamDescriptor>,
    /// Set when the expression ends with an empty marker group followed by a
    /// consumed `/` or end of input; the marker's offset is the match end.
    pub boundary: bool,
    pub sensitive: bool,
}

pub fn compile_template(template: &str, options: CompileOptions) -> PatternResult<CompiledPattern> {
    let ast = parse_pattern(template)?;
    Ok(compile_pattern_ast(&ast, options))
}

#[tracing::instrument(level = "trace", skip(ast), fields(tokens=ast.tokens.len() as u64))]
pub fn compile_pattern_ast(ast: &PatternAst, options: CompileOptions) -> CompiledPattern {
    let mut route = String::new();
    let mut params = Vec::new();

    for token in &ast.tokens {
        match token {
            Token::Literal(text) => route.push_str(&regex::escape(text)),
            Token::Param(param) => {
                route.push_str(&compile_param(param));
                params.push(ParamDescriptor::from(param));
            }
        }
    }

    let delimiter = DEFAULT_DELIMITER;
    let ends_with_delimiter = route.ends_with(delimiter);

    if !options.strict {
        if ends_with_delimiter {
            route.pop();
        }
        route.push_str("(?:/$)?");
    }

    let boundary = if options.end {
        route.push('$');
        false
    } else if options.strict && ends_with_delimiter {
        false
    } else {
        route.push_str("()(?:/|$)");
        true
    };

    CompiledPattern {
        source: format!("^{route}"),
        params,
        boundary,
        sensitive: options.sensitive,
    }
}

fn compile_param(param: &ParamToken) -> String {
    let prefix = param
        .prefix
        .map(|p| regex::escape(p.encode_utf8(&mut [0u8; 4])))
        .unwrap_or_default();

    let mut capture = format!("(?:{})", param.pattern);
    if param.is_repeating() {
        capture = format!("{capture}(?:{prefix}{capture})*");
    }

    if !param.is_optional() {
        format!("{prefix}({capture})")
    } else if param.partial {
        format!("{prefix}({capture})?")
    } else {
        format!("(?:{prefix}({capture}))?")
    }
}

pub fn compile_regex(regex: &Regex, options: CompileOptions) -> CompiledPattern {
    let params = regex
        .capture_names()
        .skip(1)
        .enumerate()
        .map(|(idx, name)| ParamDescriptor {
            name: match name {
                Some(name) => ParamName::Named(name.to_string()),
                None => ParamName::Index(idx),
            },
            optional: false,
            repeatable: false,
        })
        .collect();

    CompiledPattern {
        source: regex.as_str().to_string(),
        params,
        boundary: false,
        sensitive: options.sensitive,
    }
}
