//! Fixed-capacity byte buffers with a write cursor.

use std::fmt::{Display, Formatter};
use std::ops::Deref;

use crate::protocol::MAX_BYTES;

/// Buffer holding the line currently being edited on the terminal side.
pub type LineBuffer = Buffer<MAX_BYTES>;

/// Buffer holding the radio frame currently being reassembled.
pub type FrameBuffer = Buffer<MAX_BYTES>;

/// A stack-allocated byte buffer of `SIZE` bytes.
///
/// The cursor is the count of valid bytes and at the same time the index the
/// next byte is written to. Every mutation is bounds-checked.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Buffer<const SIZE: usize> {
    bytes: [u8; SIZE],
    pos: usize,
}

impl<const SIZE: usize> Buffer<SIZE> {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: [0; SIZE],
            pos: 0,
        }
    }

    /// Returns the amount of valid bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.pos
    }

    /// Returns `true` if the buffer holds no valid bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pos == 0
    }

    /// Returns the current write position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the total amount of bytes the buffer can hold.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        SIZE
    }

    /// Returns the amount of bytes that can still be written.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        SIZE - self.pos
    }

    /// Appends a byte at the cursor and advances it.
    ///
    /// # Errors
    ///
    /// Returns [`BufferFull`] carrying the refused byte if the buffer is full.
    pub fn push(&mut self, byte: u8) -> Result<(), BufferFull> {
        let slot = self.bytes.get_mut(self.pos).ok_or(BufferFull(byte))?;
        *slot = byte;
        self.pos += 1;
        Ok(())
    }

    /// Removes the last valid byte and returns it.
    ///
    /// Returns `None` and leaves the buffer untouched if it is empty.
    pub fn erase(&mut self) -> Option<u8> {
        self.pos = self.pos.checked_sub(1)?;
        Some(self.bytes[self.pos])
    }

    /// Stores a byte at the cursor without advancing it.
    ///
    /// # Errors
    ///
    /// Returns [`BufferFull`] if there is no slot at the cursor.
    pub fn terminate(&mut self, byte: u8) -> Result<(), BufferFull> {
        let slot = self.bytes.get_mut(self.pos).ok_or(BufferFull(byte))?;
        *slot = byte;
        Ok(())
    }

    /// Returns the byte physically following the valid bytes, if any.
    #[must_use]
    pub fn terminator(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Resets the cursor to zero.
    pub fn clear(&mut self) {
        self.pos = 0;
    }
}

impl<const SIZE: usize> Default for Buffer<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const SIZE: usize> Deref for Buffer<SIZE> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.bytes[..self.pos]
    }
}

/// A byte was refused because the buffer it was meant for is full.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BufferFull(pub u8);

impl Display for BufferFull {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Buffer full. Dropped byte {:#04X}.", self.0)
    }
}

impl std::error::Error for BufferFull {}

#[cfg(test)]
mod tests {
    use super::{Buffer, BufferFull, LineBuffer};

    #[test]
    fn test_new() {
        let buffer = LineBuffer::new();
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.position(), 0);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_push() {
        let mut buffer = LineBuffer::new();

        for byte in [1, 2, 3, 4] {
            buffer.push(byte).expect("Could not push to buffer.");
        }

        assert_eq!(&*buffer, &[1, 2, 3, 4]);
        assert_eq!(buffer.position(), 4);
    }

    #[test]
    fn test_push_full() {
        let mut buffer: Buffer<2> = Buffer::new();
        buffer.push(0x61).expect("Could not push to buffer.");
        buffer.push(0x62).expect("Could not push to buffer.");
        assert_eq!(buffer.push(0x63), Err(BufferFull(0x63)));
        assert_eq!(&*buffer, b"ab");
    }

    #[test]
    fn test_erase() {
        let mut buffer = LineBuffer::new();
        buffer.push(b'x').expect("Could not push to buffer.");
        buffer.push(b'y').expect("Could not push to buffer.");
        assert_eq!(buffer.erase(), Some(b'y'));
        assert_eq!(&*buffer, b"x");
        assert_eq!(buffer.erase(), Some(b'x'));
        assert_eq!(buffer.erase(), None);
        assert_eq!(buffer.position(), 0);
    }

    #[test]
    fn test_terminate() {
        let mut buffer = LineBuffer::new();
        buffer.push(b'o').expect("Could not push to buffer.");
        buffer.push(b'k').expect("Could not push to buffer.");
        buffer.terminate(b'\r').expect("Could not terminate buffer.");
        assert_eq!(&*buffer, b"ok");
        assert_eq!(buffer.terminator(), Some(b'\r'));
    }

    #[test]
    fn test_terminate_full() {
        let mut buffer: Buffer<1> = Buffer::new();
        buffer.push(b'a').expect("Could not push to buffer.");
        assert_eq!(buffer.terminate(b'\n'), Err(BufferFull(b'\n')));
        assert_eq!(buffer.terminator(), None);
    }

    #[test]
    fn test_clear() {
        let mut buffer = LineBuffer::new();
        buffer.push(42).expect("Could not push to buffer.");
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.remaining(), buffer.capacity());
    }
}
