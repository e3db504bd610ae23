use bon::Builder;
use serde::{Deserialize, Serialize};
use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, opt};
use winnow::prelude::*;
use winnow::token::one_of;

use crate::interpreter::RegistrationError;

/// Decimal formatting rules used by the `number` type tag.
///
/// Formatting rounds to at most `max_fraction_digits` digits,
/// trims trailing zeros and optionally groups the integer part in threes.
/// [`NumberFormat::parse`] accepts everything [`NumberFormat::format`]
/// produces, so finite numbers survive a stringify/parse round trip up to
/// the configured precision. Non-finite values format as `inf`, `-inf` and
/// `NaN` but do not parse back.
///
/// # Example
///
/// ```
/// use plex::NumberFormat;
///
/// let format = NumberFormat::builder()
///     .decimal_separator(',')
///     .grouping_separator('.')
///     .max_fraction_digits(2)
///     .build();
///
/// assert_eq!(format.format(1234.567), "1.234,57");
/// assert_eq!(format.parse("1.234,57"), Some(1234.57));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct NumberFormat {
    /// Character placed between the integer and fractional parts.
    #[builder(default = '.')]
    pub decimal_separator: char,

    /// Character inserted between groups of three integer digits, if any.
    pub grouping_separator: Option<char>,

    /// Maximum number of fractional digits kept when formatting.
    #[builder(default = 3)]
    pub max_fraction_digits: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::builder().build()
    }
}

impl NumberFormat {
    /// Check that formatted output can be parsed back unambiguously.
    ///
    /// Separators must differ from each other and must not be digits,
    /// signs or exponent markers.
    pub fn validate(&self) -> Result<(), RegistrationError> {
        let invalid = |reason: String| Err(RegistrationError::InvalidNumberFormat { reason });
        if is_reserved(self.decimal_separator) {
            return invalid(format!(
                "decimal separator '{}' is reserved for numbers",
                self.decimal_separator
            ));
        }
        match self.grouping_separator {
            Some(separator) if is_reserved(separator) => invalid(format!(
                "grouping separator '{separator}' is reserved for numbers"
            )),
            Some(separator) if separator == self.decimal_separator => invalid(format!(
                "grouping and decimal separators are both '{separator}'"
            )),
            _ => Ok(()),
        }
    }

    /// Format a number for display.
    pub fn format(&self, n: f64) -> String {
        if !n.is_finite() {
            return n.to_string();
        }

        let fixed = format!("{:.*}", self.max_fraction_digits, n);
        let (sign, digits) = match fixed.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", fixed.as_str()),
        };
        let (integer, fraction) = digits.split_once('.').unwrap_or((digits, ""));
        let fraction = fraction.trim_end_matches('0');

        let mut output = String::with_capacity(fixed.len() + 4);
        // Rounding can leave "-0"; print it as "0".
        if !(fraction.is_empty() && integer.bytes().all(|b| b == b'0')) {
            output.push_str(sign);
        }
        match self.grouping_separator {
            Some(separator) => {
                for (index, c) in integer.chars().enumerate() {
                    if index > 0 && (integer.len() - index) % 3 == 0 {
                        output.push(separator);
                    }
                    output.push(c);
                }
            }
            None => output.push_str(integer),
        }
        if !fraction.is_empty() {
            output.push(self.decimal_separator);
            output.push_str(fraction);
        }
        output
    }

    /// Parse text produced by [`NumberFormat::format`].
    ///
    /// Grouping separators are ignored and the decimal separator is mapped
    /// back to `.`. Surrounding whitespace is ignored.
    pub fn parse(&self, text: &str) -> Option<f64> {
        let mut normalized = String::with_capacity(text.len());
        for c in text.trim().chars() {
            if Some(c) == self.grouping_separator {
                continue;
            }
            normalized.push(if c == self.decimal_separator { '.' } else { c });
        }
        parse_decimal(&normalized)
    }
}

fn is_reserved(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | 'e' | 'E')
}

/// Parse plain decimal syntax: optional sign, digits with an optional
/// fraction, optional exponent. Words like `inf` and `NaN` are rejected.
pub(crate) fn parse_decimal(text: &str) -> Option<f64> {
    let digits = decimal.parse(text).ok()?;
    str::parse::<f64>(digits).ok()
}

fn decimal<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        opt(one_of(['+', '-'])),
        alt(((digit1, opt(('.', digit0))).void(), ('.', digit1).void())),
        opt((one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1)),
    )
        .take()
        .parse_next(input)
}
