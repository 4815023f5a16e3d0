//! Rendering of a selected argument under `%s`, `%d` and `%f`.

use std::borrow::Cow;

use crate::attribute::{FormatAttribute, Precision};
use crate::value::{Integer, Value};

/// Conversion character of a directive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Conversion {
    /// `s`, or `@` for any object.
    String,
    /// `d`
    Decimal,
    /// `f`
    Float,
}

impl Conversion {
    pub(crate) fn from_char(c: char) -> Option<Self> {
        match c {
            's' | '@' => Some(Self::String),
            'd' => Some(Self::Decimal),
            'f' => Some(Self::Float),
            _ => None,
        }
    }

    /// Render `value`, including width and justification.
    pub(crate) fn render(self, attr: &FormatAttribute, value: &Value, nil_token: &str) -> String {
        match self {
            Self::String => render_string(attr, value, nil_token),
            Self::Decimal => attr.fill(decimal_to_string(attr, value.to_integer())),
            Self::Float => attr.fill(float_to_string(attr, value.to_float())),
        }
    }
}

/// Pad first, then cut to the maximum width if one was given.
fn render_string(attr: &FormatAttribute, value: &Value, nil_token: &str) -> String {
    let text = value
        .natural_text()
        .unwrap_or(Cow::Borrowed(nil_token));
    let filled = attr.fill(text.into_owned());

    match attr.precision {
        Precision::Unspecified => filled,
        Precision::Exact(max_width) => truncate_chars(filled, max_width),
    }
}

fn truncate_chars(mut s: String, max_chars: usize) -> String {
    if let Some((end, _)) = s.char_indices().nth(max_chars) {
        s.truncate(end);
    }
    s
}

/// Negative values carry their own sign and never get a prefix.
fn decimal_to_string(attr: &FormatAttribute, value: Integer) -> String {
    match value {
        Integer::Signed(v) if v < 0 => v.to_string(),
        Integer::Signed(v) => format!("{}{v}", attr.number_prefix()),
        Integer::Unsigned(v) => format!("{}{v}", attr.number_prefix()),
    }
}

/// Format a float.
///
/// Without a precision the value is shown as naturally as possible:
/// integral values drop the fraction, others use their shortest decimal
/// form. With `.N` the fraction is multiplied by 10^N and truncated, never
/// rounded, and the resulting integer is printed as is. Binary
/// representation error can show in the last digit, and a fraction with
/// leading zeros loses them (`%.2f` of 1.05 is `1.5`).
fn float_to_string(attr: &FormatAttribute, v: f64) -> String {
    let negative = v < 0.0;
    let prefix = if negative { "-" } else { attr.number_prefix() };

    if !v.is_finite() {
        // Display already carries the sign of -inf
        let prefix = if negative { "" } else { prefix };
        return format!("{prefix}{v}");
    }

    // Display of an integral f64 never uses exponent notation, so this
    // also covers magnitudes beyond i64
    let int_part = v.trunc().abs();
    let fraction = v.fract().abs();

    match attr.precision {
        Precision::Unspecified if fraction == 0.0 => format!("{prefix}{int_part}"),
        Precision::Unspecified if negative => v.to_string(),
        Precision::Unspecified => format!("{prefix}{v}"),
        Precision::Exact(0) => format!("{prefix}{int_part}"),
        Precision::Exact(digits) => {
            let fraction = fraction_digits(fraction, digits);
            format!("{prefix}{int_part}.{fraction}")
        }
    }
}

/// `fraction * 10^digits`, truncated, as decimal digits.
///
/// Kept in `f64` so products past `u64::MAX` still print every digit.
fn fraction_digits(fraction: f64, digits: usize) -> String {
    if fraction == 0.0 {
        return "0".to_owned();
    }
    let scale = 10_f64.powi(i32::try_from(digits).unwrap_or(i32::MAX));
    format!("{:.0}", (fraction * scale).trunc())
}
