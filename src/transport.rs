//! Byte and word channels the bridge is wired to.

pub use serial::SerialTerminal;

pub mod fake;
mod serial;

use crate::word::Word;

/// A reliable byte channel towards the local terminal.
pub trait Terminal {
    /// Reads one byte if one is available, without blocking.
    ///
    /// # Errors
    ///
    /// Returns an [`std::io::Error`] if the underlying channel failed.
    fn try_recv_byte(&mut self) -> std::io::Result<Option<u8>>;

    /// Sends `bytes`, blocking until the channel accepted them.
    ///
    /// Returns the amount of bytes the channel accepted.
    ///
    /// # Errors
    ///
    /// Returns an [`std::io::Error`] if the underlying channel failed.
    fn send(&mut self, bytes: &[u8]) -> std::io::Result<usize>;
}

/// A word channel towards the radio.
///
/// Writes block until the word is taken and cannot fail.
pub trait Radio {
    /// Reads the next word without blocking.
    ///
    /// Returns [`Word::INVALID`] if no data is available.
    fn recv_word(&mut self) -> Word;

    /// Sends an ordinary word carrying `payload`.
    fn send_word(&mut self, payload: u8);

    /// Sends the word that closes the current frame.
    fn send_final_word(&mut self, payload: u8);
}

impl<T> Terminal for &mut T
where
    T: Terminal + ?Sized,
{
    fn try_recv_byte(&mut self) -> std::io::Result<Option<u8>> {
        (**self).try_recv_byte()
    }

    fn send(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
        (**self).send(bytes)
    }
}

impl<T> Radio for &mut T
where
    T: Radio + ?Sized,
{
    fn recv_word(&mut self) -> Word {
        (**self).recv_word()
    }

    fn send_word(&mut self, payload: u8) {
        (**self).send_word(payload);
    }

    fn send_final_word(&mut self, payload: u8) {
        (**self).send_final_word(payload);
    }
}
