use derive_more::{Display, Into};

/// Training week of the cycle, in the range 1 to 6.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Week(u8);

impl Week {
    pub const FIRST: Week = Week(1);
    pub const DELOAD: Week = Week(6);

    pub fn new(value: u8) -> Result<Self, WeekError> {
        if !(Self::FIRST.0..=Self::DELOAD.0).contains(&value) {
            return Err(WeekError::OutOfRange(value));
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn is_first(self) -> bool {
        self == Self::FIRST
    }

    #[must_use]
    pub fn is_deload(self) -> bool {
        self == Self::DELOAD
    }

    #[must_use]
    pub fn previous(self) -> Option<Week> {
        if self.is_first() {
            None
        } else {
            Some(Week(self.0 - 1))
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    pub fn all() -> impl Iterator<Item = Week> {
        (Self::FIRST.0..=Self::DELOAD.0).map(Week)
    }
}

impl TryFrom<u8> for Week {
    type Error = WeekError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Week::new(value)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeekError {
    #[error("Week must be in the range 1 to 6 ({0})")]
    OutOfRange(u8),
}
