//! Per-directive formatting attributes.

bitflags::bitflags! {
    /// Flag characters accepted between `%` and the width.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub(crate) struct Flags: u8 {
        /// ` `: prefix non-negative numbers with a space
        const SPACE_PREFIX = 1 << 0;
        /// `+`: prefix non-negative numbers with a plus sign
        const PLUS_PREFIX = 1 << 1;
        /// `-`: pad on the right
        const LEFT_JUSTIFY = 1 << 2;
        /// `0`: pad with zeros
        const ZERO = 1 << 3;
        /// `#`: accepted, has no effect on `s`, `d` or `f`
        const ALTERNATE = 1 << 4;
    }
}

impl Flags {
    /// Map a flag character to its bit.
    pub(crate) fn from_char(c: char) -> Option<Self> {
        match c {
            ' ' => Some(Self::SPACE_PREFIX),
            '+' => Some(Self::PLUS_PREFIX),
            '-' => Some(Self::LEFT_JUSTIFY),
            '0' => Some(Self::ZERO),
            '#' => Some(Self::ALTERNATE),
            _ => None,
        }
    }
}

/// Precision for `%f`, maximum width for `%s`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Precision {
    /// No `.` in the directive.
    #[default]
    Unspecified,
    /// `.N`, or `.` alone for zero.
    Exact(usize),
}

/// Attributes parsed from one `%...` directive.
///
/// Built fresh for every directive and dropped once it is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct FormatAttribute {
    /// Explicit argument, already converted to 0-origin.
    pub(crate) arg_index: Option<usize>,
    pub(crate) flags: Flags,
    pub(crate) min_width: usize,
    pub(crate) precision: Precision,
}

impl FormatAttribute {
    /// Padding character for right-justified output.
    pub(crate) fn filling(&self) -> char {
        if self.flags.contains(Flags::ZERO) && !self.flags.contains(Flags::LEFT_JUSTIFY) {
            '0'
        } else {
            ' '
        }
    }

    /// Prefix for non-negative numbers. Plus wins over space.
    pub(crate) fn number_prefix(&self) -> &'static str {
        if self.flags.contains(Flags::PLUS_PREFIX) {
            "+"
        } else if self.flags.contains(Flags::SPACE_PREFIX) {
            " "
        } else {
            ""
        }
    }

    /// Pad `s` to `min_width` characters.
    ///
    /// Left-justified output is always padded with spaces on the right;
    /// otherwise [`filling`](Self::filling) is prepended.
    pub(crate) fn fill(&self, s: String) -> String {
        let width = s.chars().count();
        let padding = self.min_width.saturating_sub(width);
        if padding == 0 {
            return s;
        }

        let mut out = String::with_capacity(s.len() + padding);
        if self.flags.contains(Flags::LEFT_JUSTIFY) {
            out.push_str(&s);
            out.extend(std::iter::repeat_n(' ', padding));
        } else {
            out.extend(std::iter::repeat_n(self.filling(), padding));
            out.push_str(&s);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr(flags: Flags, min_width: usize) -> FormatAttribute {
        FormatAttribute {
            flags,
            min_width,
            ..Default::default()
        }
    }

    #[test]
    fn test_flags_from_char() {
        assert_eq!(Flags::from_char(' '), Some(Flags::SPACE_PREFIX));
        assert_eq!(Flags::from_char('+'), Some(Flags::PLUS_PREFIX));
        assert_eq!(Flags::from_char('-'), Some(Flags::LEFT_JUSTIFY));
        assert_eq!(Flags::from_char('0'), Some(Flags::ZERO));
        assert_eq!(Flags::from_char('#'), Some(Flags::ALTERNATE));
        assert_eq!(Flags::from_char('1'), None);
        assert_eq!(Flags::from_char('s'), None);
    }

    #[test]
    fn test_filling() {
        assert_eq!(attr(Flags::empty(), 0).filling(), ' ');
        assert_eq!(attr(Flags::ZERO, 0).filling(), '0');
        assert_eq!(attr(Flags::ZERO | Flags::LEFT_JUSTIFY, 0).filling(), ' ');
    }

    #[test]
    fn test_number_prefix_plus_wins() {
        assert_eq!(attr(Flags::empty(), 0).number_prefix(), "");
        assert_eq!(attr(Flags::SPACE_PREFIX, 0).number_prefix(), " ");
        assert_eq!(attr(Flags::PLUS_PREFIX, 0).number_prefix(), "+");
        assert_eq!(
            attr(Flags::SPACE_PREFIX | Flags::PLUS_PREFIX, 0).number_prefix(),
            "+"
        );
    }

    #[test]
    fn test_fill_right_justify() {
        assert_eq!(attr(Flags::empty(), 5).fill("ab".to_owned()), "   ab");
        assert_eq!(attr(Flags::ZERO, 5).fill("7".to_owned()), "00007");
    }

    #[test]
    fn test_fill_left_justify_ignores_zero() {
        assert_eq!(attr(Flags::LEFT_JUSTIFY, 4).fill("ab".to_owned()), "ab  ");
        assert_eq!(
            attr(Flags::LEFT_JUSTIFY | Flags::ZERO, 5).fill("7".to_owned()),
            "7    "
        );
    }

    #[test]
    fn test_fill_never_shrinks() {
        assert_eq!(attr(Flags::empty(), 2).fill("abcd".to_owned()), "abcd");
        assert_eq!(attr(Flags::empty(), 0).fill(String::new()), "");
    }

    #[test]
    fn test_fill_counts_chars() {
        assert_eq!(attr(Flags::empty(), 4).fill("日本".to_owned()), "  日本");
    }
}
