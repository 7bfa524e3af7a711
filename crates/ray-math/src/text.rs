//! Text output and token input for vectors.
//!
//! Output and input use different shapes:
//!
//! - [`Display`](std::fmt::Display) writes `( c0 ; c1 ; ... )`.
//! - [`Vector::read_tokens`], [`Vector::read_from`] and [`FromStr`] read bare
//!   whitespace-separated numbers (`1 2 3`) with no delimiter handling.
//!
//! The bracketed output is therefore not accepted back as input:
//!
//! ```rust
//! use ray_math::{vec3, Vec3};
//!
//! let v = vec3(1.0, 2.0, 3.0);
//! assert_eq!(v.to_string(), "( 1 ; 2 ; 3 )");
//! assert_eq!("1 2 3".parse::<Vec3>().unwrap(), v);
//! assert!(v.to_string().parse::<Vec3>().is_err());
//! ```

use std::fmt;
use std::io::{self, BufRead};
use std::num::ParseFloatError;
use std::str::FromStr;

use thiserror::Error;

use crate::Vector;

/// Failure while reading vector components from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseVectorError {
    /// The token source ended before every component was read.
    #[error("expected {expected} components, input ended after {found}")]
    MissingComponent {
        /// Components the vector needs
        expected: usize,
        /// Components read before the input ran out
        found: usize,
    },

    /// A token could not be parsed as `f32`.
    #[error("component {index}: invalid number {token:?}")]
    InvalidComponent {
        /// Position of the failing component
        index: usize,
        /// The offending token
        token: String,
        /// Underlying float parse error
        #[source]
        source: ParseFloatError,
    },
}

/// Failure while reading a vector from a [`BufRead`] source.
#[derive(Debug, Error)]
pub enum ReadVectorError {
    /// The reader failed, or a token was not valid UTF-8.
    #[error("read error: {0}")]
    Io(#[from] io::Error),

    /// The tokens did not form a vector.
    #[error(transparent)]
    Parse(#[from] ParseVectorError),
}

impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, c) in self.0.iter().enumerate() {
            f.write_str(if i == 0 { " " } else { " ; " })?;
            // An explicit precision means fixed notation; otherwise `%g`.
            if f.precision().is_some() {
                fmt::Display::fmt(c, f)?;
            } else {
                f.pad(&format_general(*c))?;
            }
        }
        f.write_str(" )")
    }
}

/// Significant digits written per component when no precision is given.
pub const DISPLAY_DIGITS: usize = 6;

/// Formats `value` like C's `%g`: [`DISPLAY_DIGITS`] significant digits,
/// trailing zeros dropped, exponent form (`1e+07`) below `1e-4` or at
/// `10^DISPLAY_DIGITS` and above.
pub fn format_general(value: f32) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_owned();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_owned();
    }

    let value = f64::from(value);
    // Exponent is taken after rounding: 9.9999995 picks the `10` branch.
    let sci = format!("{:.*e}", DISPLAY_DIGITS - 1, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exponent < -4 || exponent >= DISPLAY_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", strip_fraction_zeros(mantissa), sign, exponent.abs())
    } else {
        let decimals = (DISPLAY_DIGITS as i32 - 1 - exponent) as usize;
        strip_fraction_zeros(&format!("{:.*}", decimals, value)).to_owned()
    }
}

fn strip_fraction_zeros(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

impl<const N: usize> Vector<N> {
    /// Reads exactly `N` tokens from `tokens` into the components, in order.
    ///
    /// Tokens must be bare numbers; no delimiters are skipped. Components
    /// assigned before a failure keep their new values, the failing one and
    /// any after it are left unchanged. Tokens after the `N`th are not
    /// consumed, so several vectors can be read from one source:
    ///
    /// ```rust
    /// use ray_math::{vec2, Vec2};
    ///
    /// let mut tokens = "1 2 3 4".split_whitespace();
    /// let mut a = Vec2::ZERO;
    /// let mut b = Vec2::ZERO;
    /// a.read_tokens(&mut tokens).unwrap();
    /// b.read_tokens(&mut tokens).unwrap();
    /// assert_eq!((a, b), (vec2(1.0, 2.0), vec2(3.0, 4.0)));
    /// ```
    pub fn read_tokens<'a, I>(&mut self, tokens: &mut I) -> Result<(), ParseVectorError>
    where
        I: Iterator<Item = &'a str>,
    {
        for index in 0..N {
            let token = tokens.next().ok_or(ParseVectorError::MissingComponent {
                expected: N,
                found: index,
            })?;
            self.0[index] = parse_component(index, token)?;
        }
        Ok(())
    }

    /// Reads exactly `N` whitespace-separated tokens from a buffered reader.
    ///
    /// Same rules as [`read_tokens`](Self::read_tokens). The reader is left
    /// positioned just after the last token read, so its delimiter and
    /// anything after it are still available:
    ///
    /// ```rust
    /// use std::io::{BufRead, Cursor};
    /// use ray_math::{vec3, Vec3};
    ///
    /// let mut input = Cursor::new("0.5 0.7 1\nrest");
    /// let mut sky = Vec3::ZERO;
    /// sky.read_from(&mut input).unwrap();
    /// assert_eq!(sky, vec3(0.5, 0.7, 1.0));
    ///
    /// let mut tail = String::new();
    /// input.read_line(&mut tail).unwrap();
    /// assert_eq!(tail, "\n");
    /// ```
    pub fn read_from<R: BufRead>(&mut self, reader: &mut R) -> Result<(), ReadVectorError> {
        for index in 0..N {
            let token = next_token(reader)?.ok_or(ParseVectorError::MissingComponent {
                expected: N,
                found: index,
            })?;
            self.0[index] = parse_component(index, &token)?;
        }
        Ok(())
    }
}

fn parse_component(index: usize, token: &str) -> Result<f32, ParseVectorError> {
    token
        .parse()
        .map_err(|source| ParseVectorError::InvalidComponent {
            index,
            token: token.to_owned(),
            source,
        })
}

/// Next whitespace-delimited token, or `None` at end of input.
///
/// Leading whitespace is consumed; the delimiter after the token is not.
fn next_token<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut token = Vec::new();
    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }

        let mut used = 0;
        let mut ended = false;
        for &byte in buf {
            if byte.is_ascii_whitespace() {
                if !token.is_empty() {
                    ended = true;
                    break;
                }
            } else {
                token.push(byte);
            }
            used += 1;
        }
        reader.consume(used);
        if ended {
            break;
        }
    }

    if token.is_empty() {
        return Ok(None);
    }
    String::from_utf8(token)
        .map(Some)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Reads the first `N` whitespace-separated tokens; the rest of the string
/// is ignored.
impl<const N: usize> FromStr for Vector<N> {
    type Err = ParseVectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut v = Self::ZERO;
        v.read_tokens(&mut s.split_whitespace())?;
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{vec2, vec3, vec4, Vec2, Vec3, Vec4};
    use std::io::{BufReader, Cursor, Read};

    #[test]
    fn test_display_vec3() {
        assert_eq!(vec3(1.0, 2.0, 3.0).to_string(), "( 1 ; 2 ; 3 )");
    }

    #[test]
    fn test_display_arities() {
        assert_eq!(vec2(0.5, -1.0).to_string(), "( 0.5 ; -1 )");
        assert_eq!(vec4(1.0, 2.0, 3.0, 4.0).to_string(), "( 1 ; 2 ; 3 ; 4 )");
    }

    #[test]
    fn test_display_precision() {
        assert_eq!(format!("{:.2}", vec2(1.0, 0.126)), "( 1.00 ; 0.13 )");
    }

    #[test]
    fn test_display_non_finite() {
        assert_eq!(vec2(f32::INFINITY, f32::NAN).to_string(), "( inf ; nan )");
        assert_eq!(vec2(f32::NEG_INFINITY, -0.0).to_string(), "( -inf ; -0 )");
    }

    #[test]
    fn test_display_six_significant_digits() {
        assert_eq!(
            vec3(1.0 / 3.0, 1.0e7, f32::NAN).to_string(),
            "( 0.333333 ; 1e+07 ; nan )"
        );
        assert_eq!(vec2(123456.0, 1234567.0).to_string(), "( 123456 ; 1.23457e+06 )");
        assert_eq!(vec2(0.0001, 0.00001).to_string(), "( 0.0001 ; 1e-05 )");
        assert_eq!(vec2(9.9999995, -2.5e-7).to_string(), "( 10 ; -2.5e-07 )");
    }

    #[test]
    fn test_format_general() {
        assert_eq!(format_general(0.1), "0.1");
        assert_eq!(format_general(100000.0), "100000");
        assert_eq!(format_general(999999.5), "1e+06");
        assert_eq!(format_general(-3.25), "-3.25");
        assert_eq!(format_general(1.0e-30), "1e-30");
        assert_eq!(format_general(3.0e38), "3e+38");
    }

    #[test]
    fn test_display_width_pads_components() {
        assert_eq!(format!("{:>4}", vec2(1.0, 0.5)), "(    1 ;  0.5 )");
    }

    #[test]
    fn test_parse_bare_tokens() {
        assert_eq!("4 8".parse::<Vec2>().unwrap(), vec2(4.0, 8.0));
        assert_eq!(
            "  1.5\n-2\t3e1 0 ".parse::<Vec4>().unwrap(),
            vec4(1.5, -2.0, 30.0, 0.0)
        );
    }

    #[test]
    fn test_parse_ignores_trailing_tokens() {
        assert_eq!("1 2 3 junk".parse::<Vec3>().unwrap(), vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_parse_display_output_fails() {
        let err = "( 1 ; 2 ; 3 )".parse::<Vec3>().unwrap_err();
        match err {
            ParseVectorError::InvalidComponent { index, token, .. } => {
                assert_eq!(index, 0);
                assert_eq!(token, "(");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_missing_component() {
        let err = "1 2".parse::<Vec3>().unwrap_err();
        assert_eq!(
            err,
            ParseVectorError::MissingComponent {
                expected: 3,
                found: 2
            }
        );
        assert_eq!(err.to_string(), "expected 3 components, input ended after 2");
    }

    #[test]
    fn test_read_tokens_partial_assignment() {
        let mut v = vec3(9.0, 9.0, 9.0);
        let result = v.read_tokens(&mut "1 oops 3".split_whitespace());
        assert!(result.is_err());
        assert_eq!(v, vec3(1.0, 9.0, 9.0));
    }

    #[test]
    fn test_read_tokens_leaves_rest() {
        let mut tokens = "1 2 3 4 5".split_whitespace();
        let mut v = Vec3::ZERO;
        v.read_tokens(&mut tokens).unwrap();
        assert_eq!(v, vec3(1.0, 2.0, 3.0));
        assert_eq!(tokens.collect::<Vec<_>>(), ["4", "5"]);
    }

    #[test]
    fn test_read_from_reader() {
        let mut input = Cursor::new("1 2 3\n  4.5 -6 7e-1 extra");
        let mut a = Vec3::ZERO;
        let mut b = Vec3::ZERO;
        a.read_from(&mut input).unwrap();
        b.read_from(&mut input).unwrap();
        assert_eq!(a, vec3(1.0, 2.0, 3.0));
        assert_eq!(b, vec3(4.5, -6.0, 0.7));

        let mut rest = String::new();
        input.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, " extra");
    }

    #[test]
    fn test_read_from_small_buffer() {
        // Tokens straddle the 2-byte buffer boundary.
        let mut input = BufReader::with_capacity(2, "10.25 -3".as_bytes());
        let mut v = Vec2::ZERO;
        v.read_from(&mut input).unwrap();
        assert_eq!(v, vec2(10.25, -3.0));
    }

    #[test]
    fn test_read_from_errors() {
        let mut v = vec2(9.0, 9.0);
        let err = v.read_from(&mut Cursor::new("1.5")).unwrap_err();
        assert!(matches!(
            err,
            ReadVectorError::Parse(ParseVectorError::MissingComponent { expected: 2, found: 1 })
        ));
        assert_eq!(v, vec2(1.5, 9.0));

        let err = v.read_from(&mut Cursor::new("x 1")).unwrap_err();
        assert!(matches!(
            err,
            ReadVectorError::Parse(ParseVectorError::InvalidComponent { index: 0, .. })
        ));

        let err = v.read_from(&mut Cursor::new(b"\xff 1".to_vec())).unwrap_err();
        assert!(matches!(err, ReadVectorError::Io(ref e) if e.kind() == io::ErrorKind::InvalidData));
    }
}
