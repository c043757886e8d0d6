use crate::path::encode_component;

/// Query data appended to a generated URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Key/value pairs; repeated keys are emitted once per pair, in order.
    Pairs(Vec<(String, String)>),
    /// A pre-serialised query string, appended verbatim.
    Raw(String),
}

impl Query {
    pub fn pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Pairs(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn serialize(&self) -> String {
        match self {
            Self::Pairs(pairs) => pairs
                .iter()
                .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
                .collect::<Vec<_>>()
                .join("&"),
            Self::Raw(raw) => raw.strip_prefix('?').unwrap_or(raw).to_string(),
        }
    }
}

impl From<&str> for Query {
    fn from(value: &str) -> Self {
        Self::Raw(value.to_string())
    }
}

impl From<String> for Query {
    fn from(value: String) -> Self {
        Self::Raw(value)
    }
}

impl<K: Into<String>, V: Into<String>> From<Vec<(K, V)>> for Query {
    fn from(value: Vec<(K, V)>) -> Self {
        Self::pairs(value)
    }
}
