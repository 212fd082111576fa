//! One-decimal percentages.

use serde::{Serialize, Serializer};

use occupancy_core::ValueObject;

/// A share of a whole, rounded half-up to one decimal place.
///
/// Stored in tenths of a percent so that equality and display are exact.
/// Serializes as its display string (`"12.5"`).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percentage {
    tenths: u64,
}

impl ValueObject for Percentage {}

impl Percentage {
    pub const ZERO: Percentage = Percentage { tenths: 0 };

    /// `part / whole × 100`, or zero when `whole` is zero.
    pub fn of(part: usize, whole: usize) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        let part = part as u64;
        let whole = whole as u64;
        let tenths = (part * 2000 + whole) / (2 * whole);
        Self { tenths }
    }
}

impl core::fmt::Display for Percentage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}", self.tenths / 10, self.tenths % 10)
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
