//! Error types for template formatting.

/// Error returned when a template cannot be formatted.
///
/// Both kinds are caller mistakes: the template is malformed, or it refers
/// to an argument that was not supplied. No partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FormatError {
    /// Template ended in the middle of a directive.
    #[error("template ended inside a directive at position {position}")]
    UnexpectedEnd {
        /// Byte offset where more input was expected.
        position: usize,
    },
    /// Conversion character is not one of `s`, `@`, `d`, `f`.
    #[error("unknown conversion '{conversion}' at position {position}")]
    UnknownConversion {
        /// The offending character.
        conversion: char,
        /// Byte offset of the conversion.
        position: usize,
    },
    /// Directive addresses an argument past the end of the argument list.
    #[error("argument {} requested but only {len} supplied", .index + 1)]
    ArgumentOutOfRange {
        /// Resolved 0-origin argument index.
        index: usize,
        /// Number of arguments supplied.
        len: usize,
    },
}
