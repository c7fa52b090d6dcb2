use thiserror::Error;

/// Errors produced while turning editor text into a schema value and back.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Editor text is not syntactically valid JSON. The display text is what
    /// the editor shows inline, so it stays short on purpose.
    #[error("Invalid JSON")]
    InvalidJson(#[source] serde_json::Error),

    #[error("failed to serialize schema: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl SchemaError {
    /// Line/column of a decode failure, when known.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Self::InvalidJson(e) => Some((e.line(), e.column())),
            Self::Serialize(_) => None,
        }
    }
}
