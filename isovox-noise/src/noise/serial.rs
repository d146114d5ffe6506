//! Compact string form of a [`FractalNoise`] configuration.
//!
//! The format is `` `seed~frequency~mode~octaves` `` with the mode written as
//! its integer code. Two readers exist: a lenient one that never fails and
//! reads whatever numeric prefix each field has (saved maps must load even from
//! a damaged string), and a strict [`FromStr`] for callers that want to know.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::fractal::{FractalMode, FractalNoise};

const DELIMITER: char = '`';
const SEPARATOR: char = '~';

/// An error from the strict configuration string parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SerialError {
    /// The string is not wrapped in backticks.
    #[error("configuration string must be wrapped in backticks")]
    MissingDelimiter,
    /// A field is missing.
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    /// A field is present but not a number of the right kind.
    #[error("field `{field}` is not valid: {value:?}")]
    InvalidField {
        /// Name of the field.
        field: &'static str,
        /// The text that failed to parse.
        value: String,
    },
    /// More fields follow the octave count.
    #[error("unexpected data after the octave count: {0:?}")]
    TrailingData(String),
}

/// Read the leading integer of `text`.
///
/// An optional sign followed by decimal digits; reading stops at the first
/// other character. Returns 0 when no digit was read and saturates at the
/// `i32` limits.
#[must_use]
pub fn parse_int_prefix(text: &str) -> i32 {
    let bytes = text.as_bytes();
    let (negative, mut i) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };
    let mut value: i64 = 0;
    while let Some(digit) = bytes.get(i).filter(|b| b.is_ascii_digit()) {
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'));
        i += 1;
    }
    if negative {
        value = -value;
    }
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Read the leading decimal float of `text`.
///
/// Accepts `[sign] digits [. digits] [e [sign] digits]` and stops at the first
/// character that cannot extend the number. Returns 0 when the mantissa has no
/// digit. An exponent marker without digits is left unread.
#[must_use]
pub fn parse_float_prefix(text: &str) -> f32 {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        let start = i;
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        (i, i - start)
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'-' | b'+')));
    let (after_int, int_digits) = digits_from(end);
    end = after_int;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        let (after_frac, count) = digits_from(end + 1);
        frac_digits = count;
        end = after_frac;
    }
    if int_digits + frac_digits == 0 {
        return 0.0;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'-' | b'+')));
        let (after_exp, count) = digits_from(end + 1 + sign);
        if count > 0 {
            end = after_exp;
        }
    }
    text[..end].parse().unwrap_or(0.0)
}

impl FractalNoise {
    /// Encode as `` `seed~frequency~mode~octaves` ``.
    ///
    /// The frequency uses the shortest decimal that reads back to the same
    /// `f32`, so a round trip restores the configuration exactly.
    #[must_use]
    pub fn serialize_to_string(&self) -> String {
        self.to_string()
    }

    /// Decode a configuration string, recovering from damage.
    ///
    /// Each field contributes its numeric prefix, or 0 when it has none.
    /// Missing fields read as 0, unknown mode codes become FBM and the octave
    /// count is raised to at least 1. Never fails.
    #[must_use]
    pub fn deserialize_from_string(data: &str) -> Self {
        let trimmed = data.trim_start();
        let body = trimmed.strip_prefix(DELIMITER).unwrap_or(trimmed);
        let mut fields = body.split(SEPARATOR);
        let seed = fields.next().map_or(0, parse_int_prefix);
        let frequency = fields.next().map_or(0.0, parse_float_prefix);
        let mode = FractalMode::from_code(fields.next().map_or(0, parse_int_prefix));
        let octaves = fields.next().map_or(0, parse_int_prefix);
        Self::new(seed, frequency, mode, octaves)
    }
}

impl fmt::Display for FractalNoise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{DELIMITER}{}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{}{DELIMITER}",
            self.seed(),
            self.frequency(),
            self.mode().code(),
            self.octaves()
        )
    }
}

fn field<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> Result<&'a str, SerialError> {
    fields.next().ok_or(SerialError::MissingField(name))
}

fn invalid(field: &'static str, value: &str) -> SerialError {
    SerialError::InvalidField {
        field,
        value: value.to_owned(),
    }
}

impl FromStr for FractalNoise {
    type Err = SerialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .strip_prefix(DELIMITER)
            .and_then(|rest| rest.strip_suffix(DELIMITER))
            .ok_or(SerialError::MissingDelimiter)?;
        let mut fields = body.split(SEPARATOR);

        let seed = field(&mut fields, "seed")?;
        let seed: i32 = seed.parse().map_err(|_| invalid("seed", seed))?;

        let frequency = field(&mut fields, "frequency")?;
        let frequency: f32 = frequency
            .parse()
            .map_err(|_| invalid("frequency", frequency))?;

        let mode = field(&mut fields, "mode")?;
        let mode = match mode.parse::<i32>() {
            Ok(code @ 0..=3) => FractalMode::from_code(code),
            _ => return Err(invalid("mode", mode)),
        };

        let octaves = field(&mut fields, "octaves")?;
        let octaves: i32 = octaves.parse().map_err(|_| invalid("octaves", octaves))?;

        if let Some(extra) = fields.next() {
            return Err(SerialError::TrailingData(extra.to_owned()));
        }
        Ok(Self::new(seed, frequency, mode, octaves))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_prefix() {
        assert_eq!(parse_int_prefix("123"), 123);
        assert_eq!(parse_int_prefix("-45abc"), -45);
        assert_eq!(parse_int_prefix("+7`"), 7);
        assert_eq!(parse_int_prefix("abc"), 0);
        assert_eq!(parse_int_prefix(""), 0);
        assert_eq!(parse_int_prefix("-"), 0);
        assert_eq!(parse_int_prefix("99999999999"), i32::MAX);
        assert_eq!(parse_int_prefix("-99999999999"), i32::MIN);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn float_prefix() {
        assert_eq!(parse_float_prefix("0.25"), 0.25);
        assert_eq!(parse_float_prefix("-1.5xyz"), -1.5);
        assert_eq!(parse_float_prefix(".5"), 0.5);
        assert_eq!(parse_float_prefix("3."), 3.0);
        assert_eq!(parse_float_prefix("2e3~"), 2000.0);
        assert_eq!(parse_float_prefix("2e-1"), 0.2);
        assert_eq!(parse_float_prefix("4e"), 4.0);
        assert_eq!(parse_float_prefix("4e+`"), 4.0);
        assert_eq!(parse_float_prefix("nope"), 0.0);
        assert_eq!(parse_float_prefix("-.x"), 0.0);
        assert_eq!(parse_float_prefix(""), 0.0);
    }

    #[test]
    fn format_is_backtick_tilde() {
        let noise = FractalNoise::new(-12, 0.0625, FractalMode::Warp, 5);
        assert_eq!(noise.serialize_to_string(), "`-12~0.0625~3~5`");
    }

    #[test]
    fn lenient_reader_round_trips() {
        let noise = FractalNoise::new(123_456, 0.013_37, FractalMode::Billow, 3);
        let back = FractalNoise::deserialize_from_string(&noise.serialize_to_string());
        assert_eq!(back, noise);
    }

    #[test]
    fn lenient_reader_ignores_trailing_garbage() {
        let noise = FractalNoise::deserialize_from_string("`77~0.5~2~4`and then some~junk");
        assert_eq!(noise, FractalNoise::new(77, 0.5, FractalMode::Ridged, 4));
    }

    #[test]
    fn lenient_reader_zeroes_damaged_fields() {
        let noise = FractalNoise::deserialize_from_string("`x1~?~9~oops`");
        assert_eq!(noise.seed(), 0);
        assert!(noise.frequency().abs() < f32::EPSILON);
        assert_eq!(noise.mode(), FractalMode::Fbm);
        assert_eq!(noise.octaves(), 1);
    }

    #[test]
    fn lenient_reader_accepts_truncated_strings() {
        let noise = FractalNoise::deserialize_from_string("`5~0.1");
        assert_eq!(noise, FractalNoise::new(5, 0.1, FractalMode::Fbm, 1));
        assert_eq!(
            FractalNoise::deserialize_from_string(""),
            FractalNoise::new(0, 0.0, FractalMode::Fbm, 1)
        );
    }

    #[test]
    fn strict_reader() {
        let noise: FractalNoise = "`9~0.03125~1~6`".parse().expect("valid string");
        assert_eq!(noise, FractalNoise::new(9, 0.031_25, FractalMode::Billow, 6));

        assert_eq!(
            "9~0.1~1~6".parse::<FractalNoise>(),
            Err(SerialError::MissingDelimiter)
        );
        assert_eq!(
            "`9~0.1~1`".parse::<FractalNoise>(),
            Err(SerialError::MissingField("octaves"))
        );
        assert_eq!(
            "`9~fast~1~6`".parse::<FractalNoise>(),
            Err(SerialError::InvalidField {
                field: "frequency",
                value: "fast".to_owned()
            })
        );
        assert_eq!(
            "`9~0.1~4~6`".parse::<FractalNoise>(),
            Err(SerialError::InvalidField {
                field: "mode",
                value: "4".to_owned()
            })
        );
        assert_eq!(
            "`9~0.1~1~6~2`".parse::<FractalNoise>(),
            Err(SerialError::TrailingData("2".to_owned()))
        );
    }

    #[test]
    fn strict_reader_still_clamps_octaves() {
        let noise: FractalNoise = "`1~0.5~0~-3`".parse().expect("valid string");
        assert_eq!(noise.octaves(), 1);
    }
}
