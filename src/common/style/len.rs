use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::unit::{EMUS_PER_CM, EMUS_PER_INCH, EMUS_PER_MM, EMUS_PER_PT, EMUS_PER_TWIP};

/// Length measurement with units.
///
/// Represents a measurement value used for drawing extents and font sizes.
/// Office formats primarily use EMUs (English Metric Units).
///
/// # Examples
///
/// ```rust
/// use docx_run::common::Length;
///
/// // Create from EMUs
/// let length = Length::from_emus(914400); // 1 inch
///
/// // Convert to different units
/// assert_eq!(length.inches(), 1.0);
/// assert_eq!(Length::from_pt(12.0).pt(), 12.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Length {
    /// Value in EMUs (English Metric Units)
    /// 1 inch = 914,400 EMUs
    /// 1 cm = 360,000 EMUs
    emus: i64,
}

impl Length {
    /// Create a length from EMUs (English Metric Units).
    #[inline]
    pub const fn from_emus(emus: i64) -> Self {
        Self { emus }
    }

    /// Create a length from inches.
    #[inline]
    pub fn from_inches(inches: f64) -> Self {
        Self {
            emus: (inches * EMUS_PER_INCH as f64) as i64,
        }
    }

    /// Create a length from centimeters.
    #[inline]
    pub fn from_cm(cm: f64) -> Self {
        Self {
            emus: (cm * EMUS_PER_CM as f64) as i64,
        }
    }

    /// Create a length from millimeters.
    #[inline]
    pub fn from_mm(mm: f64) -> Self {
        Self {
            emus: (mm * EMUS_PER_MM as f64) as i64,
        }
    }

    /// Create a length from points (1/72 inch).
    #[inline]
    pub fn from_pt(pt: f64) -> Self {
        Self {
            emus: (pt * EMUS_PER_PT as f64) as i64,
        }
    }

    /// Create a length from twentieths of a point, saturating at the
    /// bounds of the EMU range.
    #[inline]
    pub const fn from_twips(twips: i64) -> Self {
        Self {
            emus: twips.saturating_mul(EMUS_PER_TWIP),
        }
    }

    /// Create a length from twentieths of a point; `None` if it does not
    /// fit in EMUs.
    #[inline]
    pub const fn checked_from_twips(twips: i64) -> Option<Self> {
        match twips.checked_mul(EMUS_PER_TWIP) {
            Some(emus) => Some(Self { emus }),
            None => None,
        }
    }

    /// Get the value in EMUs.
    #[inline]
    pub const fn emus(&self) -> i64 {
        self.emus
    }

    /// Convert to inches.
    #[inline]
    pub fn inches(&self) -> f64 {
        self.emus as f64 / EMUS_PER_INCH as f64
    }

    /// Convert to centimeters.
    #[inline]
    pub fn cm(&self) -> f64 {
        self.emus as f64 / EMUS_PER_CM as f64
    }

    /// Convert to points (1/72 inch).
    #[inline]
    pub fn pt(&self) -> f64 {
        self.emus as f64 / EMUS_PER_PT as f64
    }

    /// Convert to twentieths of a point, rounding to the nearest twip.
    #[inline]
    pub fn twips(&self) -> i64 {
        (self.emus as f64 / EMUS_PER_TWIP as f64).round() as i64
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}\"", self.inches())
    }
}
