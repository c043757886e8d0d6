mod ast;
mod compiled;
mod error;
mod matcher;
mod parser;

pub use ast::{ParamDescriptor, ParamName, ParamToken, PatternAst, Quantifier, Token, TokenKind};
pub use compiled::{
    CompileOptions, CompiledPattern, compile_pattern_ast, compile_regex, compile_template,
};
pub use error::{PatternError, PatternResult};
pub use matcher::{CaptureList, Matcher};
pub use parser::{ASTERISK_PATTERN, DEFAULT_DELIMITER, parse_pattern};
