//! CSS hex colour validation and normalization.
//!
//! The icon service takes colours as bare hex strings (`444444`, `f80`). User
//! input arrives with arbitrary case and an optional leading `#`; everything
//! is normalized to lowercase with no prefix before use.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The colour used when the user has not picked one.
pub const DEFAULT_COLOUR: &str = "444444";

/// Errors from colour parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColourError {
    /// The input was not a 3- or 6-digit hex string.
    #[error("invalid CSS colour: `{0}` (expected 3 or 6 hex digits)")]
    Invalid(String),
}

/// A validated CSS hex colour, stored lowercase without the leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Colour(String);

impl Colour {
    /// Parse a user-supplied colour string.
    ///
    /// Strips an optional leading `#`, lowercases, and requires exactly 3 or
    /// 6 hex digits.
    ///
    /// # Errors
    ///
    /// Returns [`ColourError::Invalid`] for anything else, including the
    /// empty string.
    pub fn parse(input: &str) -> Result<Self, ColourError> {
        let stripped = input.strip_prefix('#').unwrap_or(input);
        let valid = matches!(stripped.len(), 3 | 6)
            && stripped.chars().all(|c| c.is_ascii_hexdigit());
        if !valid {
            return Err(ColourError::Invalid(input.to_string()));
        }
        Ok(Self(stripped.to_ascii_lowercase()))
    }

    /// The normalized hex string, without `#`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self(DEFAULT_COLOUR.to_string())
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Colour::parse(&raw).map_err(serde::de::Error::custom)
    }
}
