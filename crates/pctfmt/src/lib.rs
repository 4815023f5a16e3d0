//! printf-style string formatting with positional arguments.
//!
//! A template is copied to the output with every `%` directive replaced by
//! the rendering of one argument. Arguments are a slice of [`Value`]s,
//! consumed in order or addressed explicitly with `%N$`.
//!
//! # Directives
//!
//! ```text
//! directive  := "%" ( "%" | attribute? conversion )
//! attribute  := ( index "$" | flags width? ) ( "." digits? )?
//! flags      := ( " " | "+" | "-" | "0" | "#" )*
//! conversion := "s" | "@" | "d" | "f"
//! ```
//!
//! Integers in directives start with `1`-`9`; a leading `0` is the zero-fill
//! flag. A bare leading integer is the width and no flags may follow it.
//!
//! - `%s`, `%@`: natural text, or the nil token for [`Value::Absent`].
//!   Precision is a maximum width applied after padding.
//! - `%d`: integer. Floats truncate toward zero.
//! - `%f`: float. Without a precision the shortest natural form is used;
//!   `%.N` truncates to N fractional digits instead of rounding.
//!
//! # Example
//!
//! ```
//! use pctfmt::sprintf;
//!
//! assert_eq!(sprintf!("<%5s>", "ab").unwrap(), "<   ab>");
//! assert_eq!(sprintf!("<%2$s><%1$s>", "a", "b").unwrap(), "<b><a>");
//! assert_eq!(sprintf!("<%+.1f>", 123.456).unwrap(), "<+123.4>");
//! assert!(sprintf!("<%5$s>", "a", "b").is_err());
//! ```

mod attribute;
mod config;
mod error;
mod formatter;
mod parser;
mod render;
mod value;

pub use config::{DEFAULT_NIL_TOKEN, FormatterConfig};
pub use error::FormatError;
pub use formatter::Formatter;
pub use value::Value;

/// Format `template` with the default configuration.
///
/// # Example
///
/// ```
/// use pctfmt::{FormatError, Value, format};
///
/// let out = format("%s: %05d", &[Value::from("id"), Value::from(42)]).unwrap();
/// assert_eq!(out, "id: 00042");
///
/// let err = format("%s %s", &[Value::from("only one")]).unwrap_err();
/// assert_eq!(err, FormatError::ArgumentOutOfRange { index: 1, len: 1 });
/// ```
pub fn format(template: &str, args: &[Value]) -> Result<String, FormatError> {
    Formatter::default().format(template, args)
}

/// Format a template with arguments converted through [`Value::from`].
///
/// Expands to a call to [`format`] and returns its `Result`.
///
/// ```
/// use pctfmt::sprintf;
///
/// let name: Option<&str> = None;
/// assert_eq!(sprintf!("%s is %d", name, 7_u8).unwrap(), "(nil) is 7");
/// ```
#[macro_export]
macro_rules! sprintf {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::format($template, &[$($crate::Value::from($arg)),*])
    };
}
