//! Radio transfer units.

use std::fmt::{Display, Formatter};

/// A word as delivered by the radio channel.
///
/// Only the low eight bits of the raw value carry payload. The two flags travel
/// out of band next to the data.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Word {
    raw: u32,
    invalid: bool,
    end_of_frame: bool,
}

impl Word {
    /// The word reported when the channel has no data available.
    pub const INVALID: Self = Self {
        raw: 0,
        invalid: true,
        end_of_frame: false,
    };

    /// Creates an ordinary data word.
    #[must_use]
    pub const fn data(raw: u32) -> Self {
        Self {
            raw,
            invalid: false,
            end_of_frame: false,
        }
    }

    /// Creates a data word that closes the current frame.
    #[must_use]
    pub const fn last(raw: u32) -> Self {
        Self {
            raw,
            invalid: false,
            end_of_frame: true,
        }
    }

    /// Returns the raw value including the bits above the payload.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.raw
    }

    /// Returns the payload byte.
    #[must_use]
    pub const fn payload(self) -> u8 {
        (self.raw & 0xFF) as u8
    }

    /// Returns `true` if the word carries data.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        !self.invalid
    }

    /// Returns `true` if this is the last word of a frame.
    #[must_use]
    pub const fn is_end_of_frame(self) -> bool {
        self.end_of_frame
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.invalid {
            write!(f, "INVALID")
        } else if self.end_of_frame {
            write!(f, "LAST({:#04X})", self.payload())
        } else {
            write!(f, "DATA({:#04X})", self.payload())
        }
    }
}
