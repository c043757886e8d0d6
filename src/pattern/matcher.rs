use regex::{Regex, RegexBuilder};
use smallvec::SmallVec;

use super::{CompiledPattern, PatternError, PatternResult};

pub type CaptureList<'p> = SmallVec<[Option<&'p str>; 4]>;

/// Compiled route expression.
///
/// `regex::Regex` carries no search cursor between calls, so every match is
/// independent of the previous one and a `Matcher` can be shared freely.
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
    boundary: bool,
    params_len: usize,
}

impl Matcher {
    pub fn new(compiled: &CompiledPattern) -> PatternResult<Self> {
        // Always case-insensitive, whatever `sensitive` says.
        let regex = RegexBuilder::new(&compiled.source)
            .case_insensitive(true)
            .build()
            .map_err(|err| PatternError::RegexInvalid {
                pattern: compiled.source.clone(),
                error: err.to_string(),
            })?;

        Ok(Self {
            regex,
            boundary: compiled.boundary,
            params_len: compiled.params.len(),
        })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn capture_count(&self) -> usize {
        self.params_len
    }

    #[tracing::instrument(level = "trace", skip(self), fields(path=%path))]
    pub fn match_end(&self, path: &str) -> Option<usize> {
        if !self.boundary {
            return self.regex.find(path).map(|m| m.end());
        }

        let caps = self.regex.captures(path)?;
        caps.get(self.params_len + 1).map(|marker| marker.start())
    }

    #[tracing::instrument(level = "trace", skip(self), fields(path=%path))]
    pub fn captures<'p>(&self, path: &'p str) -> Option<CaptureList<'p>> {
        let caps = self.regex.captures(path)?;
        Some(
            (1..=self.params_len)
                .map(|idx| caps.get(idx).map(|m| m.as_str()))
                .collect(),
        )
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}
