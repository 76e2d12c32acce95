use std::fmt;

use super::error::BuildError;

/// A dot-separated attribute path, split once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributePath {
    raw: String,
    segments: Vec<String>,
}

impl AttributePath {
    /// Parse a dotted path such as `"peer.asn"`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyAttribute`] for an empty string.
    pub fn parse(path: &str) -> Result<Self, BuildError> {
        if path.is_empty() {
            return Err(BuildError::EmptyAttribute);
        }
        Ok(Self {
            raw: path.to_owned(),
            segments: path.split('.').map(str::to_owned).collect(),
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
