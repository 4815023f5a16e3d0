//! Argument values.
//!
//! Templates are formatted against a slice of [`Value`]s. Every supported
//! Rust type converts into one of a fixed set of variants, so the renderer
//! dispatches on a closed type instead of inspecting arbitrary values.

use std::borrow::Cow;
use std::fmt;

/// A single formatting argument.
///
/// # Example
///
/// ```
/// use pctfmt::Value;
///
/// assert_eq!(Value::from(7_u8), Value::UInt(7));
/// assert_eq!(Value::from(None::<&str>), Value::Absent);
/// assert_eq!(Value::opaque(std::net::Ipv4Addr::LOCALHOST), Value::Opaque("127.0.0.1".to_owned()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No value. Renders as the nil token under `%s` and as zero under `%d`/`%f`.
    Absent,
    /// Text.
    Text(String),
    /// Any signed integer width.
    Int(i64),
    /// Any unsigned integer width.
    UInt(u64),
    /// Any floating-point width.
    Float(f64),
    /// Any other displayable value, stored as its natural string form.
    Opaque(String),
}

/// Integer view of a value, used by `%d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Integer {
    Signed(i64),
    Unsigned(u64),
}

impl Value {
    /// Wrap any displayable value as [`Value::Opaque`].
    pub fn opaque(value: impl fmt::Display) -> Self {
        Self::Opaque(value.to_string())
    }

    /// Whether this is [`Value::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Natural textual representation, or `None` for [`Value::Absent`].
    pub fn natural_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Absent => None,
            Self::Text(s) | Self::Opaque(s) => Some(Cow::Borrowed(s)),
            Self::Int(v) => Some(Cow::Owned(v.to_string())),
            Self::UInt(v) => Some(Cow::Owned(v.to_string())),
            Self::Float(v) => Some(Cow::Owned(v.to_string())),
        }
    }

    /// Integer view. Floats truncate toward zero; text is parsed leniently.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn to_integer(&self) -> Integer {
        match self {
            Self::Absent => Integer::Signed(0),
            Self::Int(v) => Integer::Signed(*v),
            Self::UInt(v) => Integer::Unsigned(*v),
            // `as` saturates at the i64 bounds and maps NaN to 0
            Self::Float(v) => Integer::Signed(*v as i64),
            Self::Text(s) | Self::Opaque(s) => {
                Integer::Signed(parse_leading_int(s).unwrap_or_else(|| {
                    tracing::debug!(value = %s, "Value is not an integer, using zero");
                    0
                }))
            }
        }
    }

    /// Floating-point view. Integers widen; text is parsed leniently.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn to_float(&self) -> f64 {
        match self {
            Self::Absent => 0.0,
            Self::Int(v) => *v as f64,
            Self::UInt(v) => *v as f64,
            Self::Float(v) => *v,
            Self::Text(s) | Self::Opaque(s) => parse_leading_float(s).unwrap_or_else(|| {
                tracing::debug!(value = %s, "Value is not a number, using zero");
                0.0
            }),
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident => $wide:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Self::$variant(<$wide>::from(v))
                }
            }
        )*
    };
}

impl_from_int!(Int => i64: i8, i16, i32, i64);
impl_from_int!(UInt => u64: u8, u16, u32, u64);

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Self::Int(v as i64)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Self::UInt(v as u64)
    }
}

/// Widens to `f64`, so the natural text under `%s` shows the widened value:
/// `0.1_f32` renders as `0.10000000149011612`.
impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Self::Text(v.clone())
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::opaque(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Absent, Into::into)
    }
}

/// Parse a leading decimal integer the way C `atoll` does.
///
/// Leading ASCII whitespace and one sign are accepted; parsing stops at the
/// first non-digit. Overflow saturates.
fn parse_leading_int(text: &str) -> Option<i64> {
    let s = text.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let len = count_digits(digits.as_bytes());
    if len == 0 {
        return None;
    }

    let value = digits.as_bytes()[..len].iter().fold(0_i64, |acc, b| {
        let digit = i64::from(b - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(digit)
        } else {
            acc.saturating_mul(10).saturating_add(digit)
        }
    });
    Some(value)
}

/// Parse the longest leading float literal the way C `atof` does.
fn parse_leading_float(text: &str) -> Option<f64> {
    let s = text.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let len = float_prefix_len(s);
    if len == 0 {
        return None;
    }
    s[..len].parse().ok()
}

/// Length in bytes of the float literal at the start of `s`.
fn float_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let rest = &s[i..];
    for word in ["infinity", "inf", "nan"] {
        if rest
            .get(..word.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(word))
        {
            return i + word.len();
        }
    }

    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = count_digits(&bytes[i + 1..]);
        i += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return 0;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(&bytes[j..]);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    i
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
