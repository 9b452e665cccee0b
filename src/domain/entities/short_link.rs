//! ShortLink entity: the mapping from a short code to a long URL.

/// A stored short code and the long URL it resolves to.
///
/// Records are created once and never mutated. Stores hand out owned copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub code: String,
    pub long_url: String,
}

impl ShortLink {
    pub fn new(code: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            long_url: long_url.into(),
        }
    }
}
