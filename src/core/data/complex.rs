use std::fmt;
use std::num::ParseFloatError;
use std::ops::{Add, Mul};
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseComplexError {
    #[error("{0:?} must be two comma-separated numbers")]
    WrongArity(String),
    #[error("invalid {part} part {text:?}: {source}")]
    InvalidPart {
        part: &'static str,
        text: String,
        source: ParseFloatError,
    },
    #[error("{part} part {text:?} is not a finite number")]
    NonFinitePart { part: &'static str, text: String },
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// `Re² + Im²`. May overflow to infinity, or to NaN when one part is already infinite.
    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.real, self.imag)
    }
}

/// Parses `"re,im"`, e.g. `"-0.7,0.27015"`. Whitespace around either part is ignored.
impl FromStr for Complex {
    type Err = ParseComplexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.splitn(3, ',').collect();
        let [real, imag] = parts.as_slice() else {
            return Err(ParseComplexError::WrongArity(s.to_string()));
        };

        Ok(Self {
            real: parse_part("real", real)?,
            imag: parse_part("imaginary", imag)?,
        })
    }
}

fn parse_part(part: &'static str, text: &str) -> Result<f64, ParseComplexError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|source| ParseComplexError::InvalidPart {
            part,
            text: text.to_string(),
            source,
        })?;

    if !value.is_finite() {
        return Err(ParseComplexError::NonFinitePart {
            part,
            text: text.to_string(),
        });
    }

    Ok(value)
}
