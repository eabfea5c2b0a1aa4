use std::fmt::{Display, Formatter, Write};

/// A wrapper around a slice of bytes to display it as an escaped byte string.
pub struct Escaped<'a>(&'a [u8]);

impl<'a> Escaped<'a> {
    /// Creates a new `Escaped` from a slice of bytes.
    #[must_use]
    pub const fn new(slice: &'a [u8]) -> Self {
        Self(slice)
    }
}

impl<'a> From<&'a [u8]> for Escaped<'a> {
    fn from(slice: &'a [u8]) -> Self {
        Self::new(slice)
    }
}

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("b\"")?;

        for escaped in self.0.iter().flat_map(|byte| byte.escape_ascii()) {
            f.write_char(char::from(escaped))?;
        }

        f.write_char('"')
    }
}
