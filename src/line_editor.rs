//! Line editing on the terminal side.

use log::trace;

use crate::buffer::{BufferFull, LineBuffer};
use crate::protocol::{is_terminator, BACKSPACE};

/// The effect a single fed byte had on the line.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Edit {
    /// The byte was appended to the line.
    Appended,
    /// The last byte of the line was erased.
    Erased(u8),
    /// An erase was requested on an empty line.
    Unchanged,
    /// The line is complete and ready to be transmitted.
    Terminated,
}

/// Accumulates terminal bytes into a [`LineBuffer`].
///
/// The last slot of the buffer is reserved for the terminator, so a complete
/// line always has its terminator stored right behind its content.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LineEditor {
    line: LineBuffer,
}

impl LineEditor {
    /// Creates an editor with an empty line.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            line: LineBuffer::new(),
        }
    }

    /// Feeds one byte read from the terminal.
    ///
    /// On [`Edit::Terminated`] the terminator is stored at the cursor but is not
    /// part of the line's length. The caller is expected to transmit the line,
    /// which resets it.
    ///
    /// # Errors
    ///
    /// Returns [`BufferFull`] if the byte would occupy the terminator slot.
    /// The line is left unchanged in that case.
    pub fn feed(&mut self, byte: u8) -> Result<Edit, BufferFull> {
        if byte == BACKSPACE {
            return Ok(self.line.erase().map_or(Edit::Unchanged, Edit::Erased));
        }

        if is_terminator(byte) {
            self.line.terminate(byte)?;
            trace!("Line terminated after {} bytes.", self.line.len());
            return Ok(Edit::Terminated);
        }

        if self.line.remaining() <= 1 {
            return Err(BufferFull(byte));
        }

        self.line.push(byte)?;
        Ok(Edit::Appended)
    }

    /// Returns the current line.
    #[must_use]
    pub const fn line(&self) -> &LineBuffer {
        &self.line
    }

    /// Returns the current line for transmission.
    pub fn line_mut(&mut self) -> &mut LineBuffer {
        &mut self.line
    }
}
