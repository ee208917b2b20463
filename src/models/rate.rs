//! Nightly rate for a room
//!
//! Rates are kept as the number the operator typed. Display uses the shortest
//! round-trip form, so `100.0` renders as `100` and `99.5` as `99.5`. Very
//! large or very small magnitudes switch to exponent form (`1E+21`, `1E-05`)
//! so snapshot lines match files written by earlier registries.

use std::fmt;

/// Magnitudes at or above this print in exponent form
const EXPONENT_ABOVE: f64 = 1e15;
/// Non-zero magnitudes below this print in exponent form
const EXPONENT_BELOW: f64 = 1e-4;

/// A room's nightly rate
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rate(f64);

impl Rate {
    /// Create a rate from a finite value
    ///
    /// # Examples
    /// ```
    /// use hotel::models::Rate;
    /// assert_eq!(Rate::new(100.0).unwrap().to_string(), "100");
    /// assert!(Rate::new(f64::NAN).is_none());
    /// ```
    pub fn new(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        // -0.0 would otherwise print as "-0"
        Some(Self(if value == 0.0 { 0.0 } else { value }))
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the rate is negative
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Parse a rate from operator input
    ///
    /// Accepts any finite decimal number, including zero and negative values.
    pub fn parse(s: &str) -> Result<Self, RateParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(RateParseError::Empty);
        }

        let value: f64 = trimmed
            .parse()
            .map_err(|_| RateParseError::InvalidFormat(trimmed.to_string()))?;

        Self::new(value).ok_or_else(|| RateParseError::NotFinite(trimmed.to_string()))
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.0.abs();
        if magnitude == 0.0 || (EXPONENT_BELOW..EXPONENT_ABOVE).contains(&magnitude) {
            return write!(f, "{}", self.0);
        }

        // `{:e}` gives "1.5e-7"; rewrite as "1.5E-07"
        let scientific = format!("{:e}", self.0);
        match scientific.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                write!(f, "{}E{}{:0>2}", mantissa, sign, digits)
            }
            None => write!(f, "{}", scientific),
        }
    }
}

/// Error type for rate parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateParseError {
    Empty,
    InvalidFormat(String),
    NotFinite(String),
}

impl fmt::Display for RateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateParseError::Empty => write!(f, "Rate cannot be empty"),
            RateParseError::InvalidFormat(s) => write!(f, "Invalid rate format: {}", s),
            RateParseError::NotFinite(s) => write!(f, "Rate must be a finite number: {}", s),
        }
    }
}

impl std::error::Error for RateParseError {}
