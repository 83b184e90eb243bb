//! Unit conversion utilities.
//!
//! WordprocessingML mixes several length units: drawing extents are in EMUs,
//! font sizes are in half-points, and some attributes accept "universal
//! measures" such as `12pt` or `2.5cm`.

use std::fmt;
use std::str::FromStr;

use crate::ooxml::error::{OoxmlError, Result};

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_MM: i64 = 36_000;
pub const EMUS_PER_PT: i64 = 12_700;
pub const EMUS_PER_PICA: i64 = EMUS_PER_PT * 12;
pub const EMUS_PER_TWIP: i64 = 635;

/// Units accepted in an OOXML universal measure (`ST_UniversalMeasure`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureUnit {
    /// Millimeter
    Millimeter,
    /// Centimeter
    Centimeter,
    /// Inch
    Inch,
    /// Point (1/72 inch)
    Point,
    /// Pica (1/6 inch), written `pc` or `pi`
    Pica,
}

impl MeasureUnit {
    /// Get the unit abbreviation
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Millimeter => "mm",
            Self::Centimeter => "cm",
            Self::Inch => "in",
            Self::Point => "pt",
            Self::Pica => "pc",
        }
    }

    #[inline]
    fn emus_per_unit(self) -> f64 {
        match self {
            Self::Millimeter => EMUS_PER_MM as f64,
            Self::Centimeter => EMUS_PER_CM as f64,
            Self::Inch => EMUS_PER_INCH as f64,
            Self::Point => EMUS_PER_PT as f64,
            Self::Pica => EMUS_PER_PICA as f64,
        }
    }

    fn from_str_internal(s: &str) -> Option<Self> {
        match s {
            "mm" => Some(Self::Millimeter),
            "cm" => Some(Self::Centimeter),
            "in" => Some(Self::Inch),
            "pt" => Some(Self::Point),
            "pc" | "pi" => Some(Self::Pica),
            _ => None,
        }
    }
}

impl FromStr for MeasureUnit {
    type Err = OoxmlError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_internal(s)
            .ok_or_else(|| OoxmlError::InvalidValue(format!("unknown measure unit '{}'", s)))
    }
}

impl fmt::Display for MeasureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a universal measure such as `12pt` or `-2.5cm` into EMUs.
///
/// Returns `None` when the literal has no recognized unit suffix, which lets
/// callers fall back to the unit-less interpretation of the attribute.
pub fn parse_universal_measure(s: &str) -> Option<Result<i64>> {
    let s = s.trim();
    if s.len() < 3 || !s.is_char_boundary(s.len() - 2) {
        return None;
    }
    let (number, unit) = s.split_at(s.len() - 2);
    let unit = MeasureUnit::from_str_internal(unit)?;
    Some(
        number
            .parse::<f64>()
            .ok()
            .map(|value| (value * unit.emus_per_unit()).round())
            .filter(|emus| emus.is_finite() && emus.abs() < i64::MAX as f64)
            .map(|emus| emus as i64)
            .ok_or_else(|| OoxmlError::InvalidValue(format!("malformed measure '{}'", s))),
    )
}
