//! Template scanning and argument selection.

use crate::attribute::FormatAttribute;
use crate::config::FormatterConfig;
use crate::error::FormatError;
use crate::parser::Cursor;
use crate::render::Conversion;
use crate::value::Value;

/// Formats printf-style templates.
///
/// Holds only configuration, so one formatter can be shared across threads
/// and reused for any number of calls.
///
/// # Example
///
/// ```
/// use pctfmt::{Formatter, FormatterConfig, Value};
///
/// let formatter = Formatter::new(FormatterConfig::default().with_nil_token("-"));
/// let out = formatter.format("%s|%5.1f", &[Value::Absent, Value::from(2.25)]).unwrap();
/// assert_eq!(out, "-|  2.2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    config: FormatterConfig,
}

impl Formatter {
    /// Create a formatter with the given configuration.
    #[must_use]
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Substitute every directive in `template` with its rendered argument.
    ///
    /// Literal text is copied unchanged and `%%` produces `%`. A malformed
    /// directive or a reference to a missing argument fails the whole call.
    pub fn format(&self, template: &str, args: &[Value]) -> Result<String, FormatError> {
        tracing::trace!(
            template_len = template.len(),
            arg_count = args.len(),
            "Formatting template"
        );

        Scanner {
            cursor: Cursor::new(template),
            args,
            next_arg: 0,
            nil_token: &self.config.nil_token,
        }
        .run(template.len())
    }
}

/// State of one formatting pass.
struct Scanner<'a> {
    cursor: Cursor<'a>,
    args: &'a [Value],
    /// Next argument for directives without an explicit index.
    next_arg: usize,
    nil_token: &'a str,
}

impl<'a> Scanner<'a> {
    fn run(mut self, capacity: usize) -> Result<String, FormatError> {
        let mut out = String::with_capacity(capacity);

        loop {
            out.push_str(self.cursor.take_literal());
            if self.cursor.is_at_end() {
                break;
            }
            // Skip the `%` that stopped the literal
            self.cursor.bump();
            self.directive(&mut out)?;
        }

        Ok(out)
    }

    /// Handle one directive; the cursor sits just past its `%`.
    fn directive(&mut self, out: &mut String) -> Result<(), FormatError> {
        if self.cursor.expect_peek()? == '%' {
            self.cursor.bump();
            out.push('%');
            return Ok(());
        }

        let attr = self.cursor.parse_attribute()?;

        let position = self.cursor.position();
        let c = self.cursor.expect_peek()?;
        let Some(conversion) = Conversion::from_char(c) else {
            tracing::debug!(conversion = %c, position, "Unknown conversion");
            return Err(FormatError::UnknownConversion {
                conversion: c,
                position,
            });
        };
        self.cursor.bump();

        let value = self.select(&attr)?;
        out.push_str(&conversion.render(&attr, value, self.nil_token));
        Ok(())
    }

    /// Explicit indexes leave the sequential counter untouched.
    fn select(&mut self, attr: &FormatAttribute) -> Result<&'a Value, FormatError> {
        let index = attr.arg_index.unwrap_or_else(|| {
            let index = self.next_arg;
            self.next_arg += 1;
            index
        });

        self.args.get(index).ok_or_else(|| {
            tracing::debug!(index, len = self.args.len(), "Argument out of range");
            FormatError::ArgumentOutOfRange {
                index,
                len: self.args.len(),
            }
        })
    }
}
