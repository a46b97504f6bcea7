//! Parsing and validation of the repeat count.
//!
//! The generator takes exactly one argument. It is read as a base-10 integer first and,
//! only if that fails, as a base-16 integer. So `"10"` is ten while `"ff"` and `"0x10"`
//! fall back to hex:
//! ```
//! use tsx_repeat_gen::count::validate_arguments;
//!
//! assert_eq!(validate_arguments(&["10"]).unwrap().get(), 10);
//! assert_eq!(validate_arguments(&["0x10"]).unwrap().get(), 16);
//! assert!(validate_arguments(&["1"]).is_err());
//! ```

use std::fmt;
use std::num::IntErrorKind;
use tracing::debug;

use crate::error::{GeneratorError, Result};

/// The number of times the repeat macro expands the caller's macro.
///
/// A `RepeatCount` can only be obtained through validation, so it always is at least [`RepeatCount::MIN`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RepeatCount(usize);

impl RepeatCount {
    /// Smallest accepted repeat count
    pub const MIN: usize = 2;

    /// The repeat count N.
    pub fn get(&self) -> usize {
        self.0
    }

    /// N + 1, the exclusive upper bound of the indices the macro emits.
    pub fn exclusive_bound(&self) -> usize {
        self.0 + 1
    }

    /// The indices 1 to N in the order the repeat macro expands them.
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        1..=self.0
    }
}

impl TryFrom<i64> for RepeatCount {
    type Error = GeneratorError;

    fn try_from(value: i64) -> Result<Self> {
        if value < Self::MIN as i64 {
            return Err(GeneratorError::InvalidArgumentRange(value.to_string()));
        }

        usize::try_from(value)
            .map(Self)
            .map_err(|_| GeneratorError::InvalidArgumentTooLarge(value.to_string()))
    }
}

impl fmt::Display for RepeatCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An integer read from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Integer {
    Value(i64),
    TooSmall,
    TooLarge,
}

/// Parse `text` as an integer in `radix`.
///
/// Accepts what a permissive integer conversion would: surrounding whitespace, a sign,
/// `_` between digits and, for base 16, a `0x` prefix. Only ASCII digits are recognized.
fn parse_radix(text: &str, radix: u32) -> Option<Integer> {
    let text = text.trim();

    let (negative, body) = if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else {
        (false, text.strip_prefix('+').unwrap_or(text))
    };

    let body = if radix == 16 {
        body.strip_prefix("0x")
            .or_else(|| body.strip_prefix("0X"))
            .map(|rest| rest.strip_prefix('_').unwrap_or(rest))
            .unwrap_or(body)
    } else {
        body
    };

    if body.is_empty() || body.starts_with('_') || body.ends_with('_') || body.contains("__") {
        return None;
    }

    let digits: String = body.chars().filter(|c| *c != '_').collect();

    if !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    let signed = if negative { format!("-{}", digits) } else { digits };

    match i64::from_str_radix(&signed, radix) {
        Ok(value) => Some(Integer::Value(value)),
        Err(e) => match e.kind() {
            IntErrorKind::NegOverflow => Some(Integer::TooSmall),
            IntErrorKind::PosOverflow => Some(Integer::TooLarge),
            _ => None,
        },
    }
}

/// Interpret `raw` as an integer, decimal first and hexadecimal as a fallback.
///
/// Integers beyond the range of an `i64` are still integers: below it they are out of
/// range, above it they are too large.
pub fn parse_count(raw: &str) -> Result<i64> {
    let integer = parse_radix(raw, 10)
        .or_else(|| parse_radix(raw, 16))
        .ok_or_else(|| GeneratorError::InvalidArgumentFormat(raw.to_string()))?;

    match integer {
        Integer::Value(value) => Ok(value),
        Integer::TooSmall => Err(GeneratorError::InvalidArgumentRange(raw.trim().to_string())),
        Integer::TooLarge => Err(GeneratorError::InvalidArgumentTooLarge(raw.trim().to_string())),
    }
}

/// Validate the content of a single argument and turn it into a [`RepeatCount`].
pub fn validate_argument(raw: &str) -> Result<RepeatCount> {
    let value = parse_count(raw)?;
    let count = RepeatCount::try_from(value)?;

    debug!(raw, count = count.get(), "validated repeat count");

    Ok(count)
}

/// Validate the complete argument list of the generator.
///
/// The number of arguments is checked before any of them is looked at.
pub fn validate_arguments<S: AsRef<str>>(args: &[S]) -> Result<RepeatCount> {
    match args {
        [raw] => validate_argument(raw.as_ref()),
        _ => Err(GeneratorError::InvalidArgumentCount(args.len())),
    }
}
