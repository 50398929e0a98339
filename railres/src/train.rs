//! Train number type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A valid train number (1-9999).
///
/// # Examples
///
/// ```
/// use railres::TrainNumber;
///
/// let train = TrainNumber::try_from(101).unwrap();
/// assert_eq!(train.value(), 101);
///
/// assert!(TrainNumber::try_from(0).is_err());
/// assert!(TrainNumber::try_from(10_000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u16")]
pub struct TrainNumber(u16);

impl TrainNumber {
    /// The smallest valid train number.
    pub const MIN: u16 = 1;

    /// The largest valid train number.
    pub const MAX: u16 = 9999;

    /// Returns the underlying train number.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl TryFrom<i64> for TrainNumber {
    type Error = InvalidTrainNumberError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u16::try_from(value)
            .ok()
            .filter(|n| (Self::MIN..=Self::MAX).contains(n))
            .map(Self)
            .ok_or_else(|| InvalidTrainNumberError {
                value,
                reason: format!("must be between {} and {}", Self::MIN, Self::MAX),
            })
    }
}

impl From<TrainNumber> for u16 {
    fn from(train: TrainNumber) -> Self {
        train.0
    }
}

impl fmt::Display for TrainNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for train numbers outside the accepted range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTrainNumberError {
    /// The rejected value.
    pub value: i64,
    /// The reason the value is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidTrainNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid train number {}: {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidTrainNumberError {}
