use std::{fmt, str::FromStr};

use num_format::ToFormattedString;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{FileSizeError, Result};

pub const DEFAULT_LOCALE: &str = "en_US";

static LOCALE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]{2}_[A-Z]{2}$").expect("locale pattern is valid"));

/// A validated `ab_CD` locale tag together with the number conventions
/// (grouping and decimal separators) it resolves to.
#[derive(Clone, Debug)]
pub struct Locale {
    tag: String,
    numbers: num_format::Locale,
}

impl Locale {
    pub fn parse(tag: &str) -> Result<Self> {
        if !LOCALE_PATTERN.is_match(tag) {
            return Err(FileSizeError::LocaleFormat {
                locale: tag.to_string(),
            });
        }

        Ok(Self {
            tag: tag.to_string(),
            numbers: resolve_numbers(tag),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.tag
    }

    pub fn language(&self) -> &str {
        &self.tag[..2]
    }

    pub fn decimal_separator(&self) -> &str {
        self.numbers.decimal()
    }

    pub fn grouping_separator(&self) -> &str {
        self.numbers.separator()
    }

    /// Formats `value` with exactly `fraction_digits` digits after the
    /// decimal separator, grouping the integer part per this locale.
    pub fn format_decimal(&self, value: f64, fraction_digits: usize) -> String {
        let fixed = format!("{:.*}", fraction_digits, value);
        let (whole, fraction) = match fixed.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (fixed.as_str(), None),
        };

        let whole = match whole.parse::<u128>() {
            Ok(n) => n.to_formatted_string(&self.numbers),
            Err(_) => whole.to_string(),
        };

        match fraction {
            Some(fraction) => format!("{whole}{}{fraction}", self.decimal_separator()),
            None => whole,
        }
    }
}

/// Looks up CLDR number data for `tag`, trying the full tag before the bare
/// language. Unknown locales use English conventions.
fn resolve_numbers(tag: &str) -> num_format::Locale {
    let hyphenated = tag.replace('_', "-");
    for name in [tag, hyphenated.as_str(), &tag[..2]] {
        if let Ok(numbers) = num_format::Locale::from_name(name) {
            return numbers;
        }
    }

    debug!("no number format data for locale {}; using en", tag);
    num_format::Locale::en
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            tag: DEFAULT_LOCALE.to_string(),
            numbers: num_format::Locale::en,
        }
    }
}

impl PartialEq for Locale {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
    }
}

impl Eq for Locale {}

impl FromStr for Locale {
    type Err = FileSizeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        for tag in ["en_US", "de_DE", "fr_FR", "pt_BR"] {
            let locale = Locale::parse(tag).unwrap();
            assert_eq!(locale.as_str(), tag);
        }
        assert_eq!(Locale::parse("de_DE").unwrap().language(), "de");
    }

    #[test]
    fn test_parse_invalid() {
        for tag in ["english", "en-US", "EN_us", "en_USA", "e_US", "", "en_us", " en_US"] {
            match Locale::parse(tag) {
                Err(FileSizeError::LocaleFormat { locale }) => assert_eq!(locale, tag),
                other => panic!("expected LocaleFormat for {tag:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_default_is_en_us() {
        let locale = Locale::default();
        assert_eq!(locale.to_string(), "en_US");
        assert_eq!(locale, Locale::parse("en_US").unwrap());
    }

    #[test]
    fn test_format_decimal_en() {
        let locale = Locale::default();
        assert_eq!(locale.format_decimal(1234.5678, 2), "1,234.57");
        assert_eq!(locale.format_decimal(0.0, 2), "0.00");
        assert_eq!(locale.format_decimal(1.5, 0), "2");
        assert_eq!(locale.format_decimal(999.999, 2), "1,000.00");
        assert_eq!(locale.format_decimal(1_234_567.0, 1), "1,234,567.0");
    }

    #[test]
    fn test_format_decimal_de() {
        let locale: Locale = "de_DE".parse().unwrap();
        assert_eq!(locale.decimal_separator(), ",");
        assert_eq!(locale.grouping_separator(), ".");
        assert_eq!(locale.format_decimal(1234.5678, 2), "1.234,57");
        assert_eq!(locale.format_decimal(1.5, 2), "1,50");
    }

    #[test]
    fn test_regional_tags_resolve() {
        let cases = [
            ("en_IN", "12,34,567.89"),
            ("de_CH", "1\u{2019}234\u{2019}567.89"),
            ("fr_FR", "1\u{202f}234\u{202f}567,89"),
        ];
        for (tag, expected) in cases {
            let locale = Locale::parse(tag).unwrap();
            assert_eq!(locale.format_decimal(1_234_567.891, 2), expected, "{tag}");
        }
    }

    #[test]
    fn test_unknown_locale_uses_english_conventions() {
        let locale = Locale::parse("zz_ZZ").unwrap();
        assert_eq!(locale.as_str(), "zz_ZZ");
        assert_eq!(locale.format_decimal(1234.5, 2), "1,234.50");
    }
}
