//! Helpers for writing numbers the way each calendar's readers expect.

/// Which digit glyphs to write numbers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Digits {
    /// `0123456789`
    #[default]
    Ascii,
    /// `۰۱۲۳۴۵۶۷۸۹` (Extended Arabic-Indic, as used in Persian).
    Persian,
}

impl Digits {
    /// The glyph written for zero.
    pub const fn zero(self) -> char {
        match self {
            Self::Ascii => '0',
            Self::Persian => '\u{06F0}',
        }
    }

    /// Replace every ASCII digit in the string with this set's glyphs.
    pub fn localize(self, s: &str) -> String {
        match self {
            Self::Ascii => s.to_owned(),
            Self::Persian => s
                .chars()
                // both sets are contiguous from zero
                .map(|c| {
                    c.to_digit(10)
                        .and_then(|d| char::from_u32(self.zero() as u32 + d))
                        .unwrap_or(c)
                })
                .collect(),
        }
    }

    /// Format a number in these digits.
    pub fn format(self, n: impl std::fmt::Display) -> String {
        self.localize(&n.to_string())
    }
}

/// Two-digit day of month in the given digits with a single leading zero removed.
///
/// Both ASCII and the native zero glyph are recognized, whatever produced the text.
pub fn day_text(day: u8, digits: Digits) -> String {
    let padded = digits.localize(&format!("{:02}", day));
    strip_leading_zero(&padded).to_owned()
}

/// Remove a single leading `0` or `۰`.
pub fn strip_leading_zero(s: &str) -> &str {
    s.strip_prefix('0')
        .or_else(|| s.strip_prefix(Digits::Persian.zero()))
        .unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localize_persian() {
        assert_eq!(Digits::Persian.localize("1404/07/01"), "۱۴۰۴/۰۷/۰۱");
        assert_eq!(Digits::Ascii.localize("1404/07/01"), "1404/07/01");
        assert_eq!(Digits::Persian.format(1405), "۱۴۰۵");
    }

    #[test]
    fn test_day_text_strips_one_zero() {
        assert_eq!(day_text(1, Digits::Ascii), "1");
        assert_eq!(day_text(10, Digits::Ascii), "10");
        assert_eq!(day_text(7, Digits::Persian), "۷");
        assert_eq!(day_text(30, Digits::Persian), "۳۰");
    }

    #[test]
    fn test_strip_leading_zero_mixed_input() {
        assert_eq!(strip_leading_zero("00"), "0");
        assert_eq!(strip_leading_zero("۰۹"), "۹");
        assert_eq!(strip_leading_zero("12"), "12");
        assert_eq!(strip_leading_zero(""), "");
    }
}
