use crate::Error;
use std::fmt;

/// The state a single cell can be in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(u8)]
pub enum Status {
    #[default]
    Zero = 0,
    One = 1,
    Two = 2,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Zero, Status::One, Status::Two];

    #[inline]
    pub fn value(self) -> u8 {
        self as u8
    }

    /// The character used when charting this status
    #[inline]
    pub fn glyph(self) -> char {
        match self {
            Self::Zero => ' ',
            Self::One => '-',
            Self::Two => '+',
        }
    }
}

impl TryFrom<i64> for Status {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            n => Err(Error::InvalidStatus(n)),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
