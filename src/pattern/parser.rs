use crate::pattern::ast::{ParamName, ParamToken, PatternAst, Quantifier, Token, TokenKind};
use crate::pattern::{PatternError, PatternResult};

pub const DEFAULT_DELIMITER: char = '/';
pub const ASTERISK_PATTERN: &str = ".*";

#[tracing::instrument(level = "trace", fields(pattern=%pattern))]
pub fn parse_pattern(pattern: &str) -> PatternResult<PatternAst> {
    let mut parser = PatternParser::new(pattern);
    let tokens = parser.parse()?;
    Ok(PatternAst::new(tokens))
}

struct PatternParser<'a> {
    pattern: &'a str,
    chars: Vec<(usize, char)>,
    index: usize,
    next_key: usize,
}

impl<'a> PatternParser<'a> {
    fn new(pattern: &'a str) -> Self {
        let chars: Vec<(usize, char)> = pattern.char_indices().collect();
        Self {
            pattern,
            chars,
            index: 0,
            next_key: 0,
        }
    }

    fn parse(&mut self) -> PatternResult<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut literal = String::new();

        while let Some(ch) = self.peek() {
            if self.is_escape_char(ch) {
                literal.push(self.consume_escape_char()?);
                continue;
            }

            let prefix = match ch {
                '/' | '.' if self.starts_param_at(self.index + 1) => {
                    self.next();
                    Some(ch)
                }
                _ if self.starts_param_at(self.index) => None,
                _ => {
                    literal.push(ch);
                    self.next();
                    continue;
                }
            };

            if !literal.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(Token::Param(self.parse_param(prefix)?));
        }

        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }

        Ok(tokens)
    }

    fn starts_param_at(&self, index: usize) -> bool {
        matches!(self.char_at(index), Some(':' | '(' | '*'))
    }

    fn parse_param(&mut self, prefix: Option<char>) -> PatternResult<ParamToken> {
        let start = self.current_byte_index();
        let delimiter = prefix.unwrap_or(DEFAULT_DELIMITER);

        let (name, kind, constraint, quantifier) = match self.peek() {
            Some(':') => {
                self.next();
                let name = self.read_name(start)?;
                let constraint = if self.peek() == Some('(') {
                    Some(self.read_group()?)
                } else {
                    None
                };
                let quantifier = self.parse_quantifier();
                (ParamName::Named(name), TokenKind::Named, constraint, quantifier)
            }
            Some('(') => {
                let body = self.read_group()?;
                let quantifier = self.parse_quantifier();
                (self.take_key(), TokenKind::Group, Some(body), quantifier)
            }
            _ => {
                self.expect('*');
                if let Some(modifier @ ('?' | '*' | '+')) = self.peek() {
                    return Err(PatternError::WildcardQuantifierUnsupported {
                        pattern: self.pattern.to_string(),
                        index: start,
                        modifier,
                    });
                }
                (
                    self.take_key(),
                    TokenKind::Asterisk,
                    Some(ASTERISK_PATTERN.to_string()),
                    Quantifier::One,
                )
            }
        };

        let partial = match (prefix, self.peek()) {
            (Some(p), Some(next)) => next != p,
            _ => false,
        };

        let pattern = constraint
            .unwrap_or_else(|| format!("[^{}]+?", regex::escape(&delimiter.to_string())));

        Ok(ParamToken {
            name,
            kind,
            prefix,
            delimiter,
            quantifier,
            partial,
            pattern,
        })
    }

    fn read_name(&mut self, start: usize) -> PatternResult<String> {
        let mut name = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                name.push(ch);
                self.next();
            } else {
                break;
            }
        }

        if name.is_empty() {
            return Err(PatternError::ParameterMissingName {
                pattern: self.pattern.to_string(),
                index: start,
            });
        }

        Ok(name)
    }

    fn read_group(&mut self) -> PatternResult<String> {
        let start = self.current_byte_index();
        self.expect('(');
        let mut body = String::new();

        while let Some(ch) = self.peek() {
            if self.is_escape_char(ch) {
                let escaped = self.consume_escape_char()?;
                body.push('\\');
                body.push(escaped);
                continue;
            }
            match ch {
                '(' => {
                    return Err(PatternError::NestedGroup {
                        pattern: self.pattern.to_string(),
                        start,
                    });
                }
                ')' => {
                    self.next();
                    if body.is_empty() {
                        return Err(PatternError::EmptyGroup {
                            pattern: self.pattern.to_string(),
                            start,
                        });
                    }
                    return Ok(body);
                }
                // taken literally; a body cannot anchor or open a group itself
                '=' | '!' | ':' | '$' | '/' => {
                    body.push('\\');
                    body.push(ch);
                    self.next();
                }
                _ => {
                    body.push(ch);
                    self.next();
                }
            }
        }

        Err(PatternError::UnterminatedGroup {
            pattern: self.pattern.to_string(),
            start,
        })
    }

    fn parse_quantifier(&mut self) -> Quantifier {
        match Quantifier::from_modifier(self.peek()) {
            Some(quantifier) => {
                self.next();
                quantifier
            }
            None => Quantifier::One,
        }
    }

    fn take_key(&mut self) -> ParamName {
        let key = self.next_key;
        self.next_key += 1;
        ParamName::Index(key)
    }

    fn expect(&mut self, expected: char) {
        let actual = self.next();
        debug_assert_eq!(Some(expected), actual);
    }

    fn peek(&self) -> Option<char> {
        self.char_at(self.index)
    }

    fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).map(|(_, ch)| *ch)
    }

    fn next(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.index += 1;
        }
        ch
    }

    fn current_byte_index(&self) -> usize {
        self.chars
            .get(self.index)
            .map(|(idx, _)| *idx)
            .unwrap_or_else(|| self.pattern.len())
    }

    fn is_escape_char(&self, ch: char) -> bool {
        ch == '\\'
    }

    fn consume_escape_char(&mut self) -> PatternResult<char> {
        let escape_index = self.current_byte_index();
        self.next();
        match self.next() {
            Some(ch) => Ok(ch),
            None => Err(PatternError::LoneEscapeCharacter {
                pattern: self.pattern.to_string(),
                index: escape_index,
            }),
        }
    }
}
