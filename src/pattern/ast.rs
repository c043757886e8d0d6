use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamName {
    Named(String),
    Index(usize),
}

impl ParamName {
    pub fn matches(&self, key: &str) -> bool {
        match self {
            Self::Named(name) => name == key,
            Self::Index(idx) => key.parse::<usize>().ok() == Some(*idx),
        }
    }
}

impl fmt::Display for ParamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Index(idx) => write!(f, "{idx}"),
        }
    }
}

impl From<&str> for ParamName {
    fn from(value: &str) -> Self {
        Self::Named(value.to_string())
    }
}

impl From<usize> for ParamName {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    One,
    ZeroOrOne,
    ZeroOrMore,
    OneOrMore,
}

impl Quantifier {
    pub fn from_modifier(ch: Option<char>) -> Option<Self> {
        match ch {
            Some('?') => Some(Self::ZeroOrOne),
            Some('*') => Some(Self::ZeroOrMore),
            Some('+') => Some(Self::OneOrMore),
            _ => None,
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Self::ZeroOrOne | Self::ZeroOrMore)
    }

    pub fn is_repeating(&self) -> bool {
        matches!(self, Self::ZeroOrMore | Self::OneOrMore)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Named,
    Group,
    Asterisk,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamToken {
    pub name: ParamName,
    pub kind: TokenKind,
    pub prefix: Option<char>,
    pub delimiter: char,
    pub quantifier: Quantifier,
    pub partial: bool,
    pub pattern: String,
}

impl ParamToken {
    pub fn is_optional(&self) -> bool {
        self.quantifier.is_optional()
    }

    pub fn is_repeating(&self) -> bool {
        self.quantifier.is_repeating()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(String),
    Param(ParamToken),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternAst {
    pub tokens: Vec<Token>,
}

impl PatternAst {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn params(&self) -> impl Iterator<Item = &ParamToken> {
        self.tokens.iter().filter_map(|token| match token {
            Token::Param(param) => Some(param),
            Token::Literal(_) => None,
        })
    }
}

/// One captured group of a compiled route, index-aligned with the matcher's groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDescriptor {
    pub name: ParamName,
    pub optional: bool,
    pub repeatable: bool,
}

impl From<&ParamToken> for ParamDescriptor {
    fn from(token: &ParamToken) -> Self {
        Self {
            name: token.name.clone(),
            optional: token.is_optional(),
            repeatable: token.is_repeating(),
        }
    }
}
