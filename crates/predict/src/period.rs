//! Coarse daily periods used to annotate predicted hours.

use std::fmt;

/// Quarter of the day a predicted hour falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPeriod {
    /// Hours 0-5.
    Night,
    /// Hours 6-11.
    Morning,
    /// Hours 12-17.
    Afternoon,
    /// Hours 18-23.
    Evening,
}

impl DayPeriod {
    /// Period of an hour offset into the predicted day. Offsets past 23 wrap.
    pub fn from_offset(offset: usize) -> Self {
        match offset % 24 {
            0..=5 => Self::Night,
            6..=11 => Self::Morning,
            12..=17 => Self::Afternoon,
            _ => Self::Evening,
        }
    }

    /// Expected traffic behaviour in this period.
    pub fn expectation(self) -> &'static str {
        match self {
            Self::Night => "low",
            Self::Morning => "rising",
            Self::Afternoon => "high",
            Self::Evening => "falling",
        }
    }
}

impl fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Night => "Night",
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
        };
        write!(f, "{name} ({})", self.expectation())
    }
}
