//! Formatter configuration.
//!
//! With the `serde` feature, [`FormatterConfig`] can be deserialized as a
//! section of a host application's config file. Missing fields use defaults.

/// Text rendered by `%s` for [`Value::Absent`](crate::Value::Absent).
pub const DEFAULT_NIL_TOKEN: &str = "(nil)";

/// Configuration for [`Formatter`](crate::Formatter).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatterConfig {
    /// Text substituted for absent arguments under `%s`.
    pub nil_token: String,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            nil_token: DEFAULT_NIL_TOKEN.to_owned(),
        }
    }
}

impl FormatterConfig {
    /// Replace the nil token.
    #[must_use]
    pub fn with_nil_token(mut self, nil_token: impl Into<String>) -> Self {
        self.nil_token = nil_token.into();
        self
    }
}
