//! Framing of lines into radio words and back.

pub use frame_words::FrameWords;

mod frame_words;
mod receive;
mod transmit;

use crate::buffer::FrameBuffer;
use crate::config::{Config, ReceiveMode, TerminatorPolicy};

/// Summary of a radio frame that was forwarded to the terminal.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Delivery {
    /// Amount of bytes the terminal accepted.
    pub len: usize,
    /// Amount of bytes that did not fit into the frame buffer.
    pub dropped: usize,
}

/// Sends lines as radio frames and reassembles received frames.
///
/// The framer owns the radio and the [`FrameBuffer`] of the receive path.
#[derive(Debug)]
pub struct RadioFramer<R> {
    radio: R,
    frame: FrameBuffer,
    dropped: usize,
    receive_mode: ReceiveMode,
    terminator_policy: TerminatorPolicy,
}

impl<R> RadioFramer<R> {
    /// Creates a framer on top of the given radio.
    #[must_use]
    pub const fn new(radio: R, config: &Config) -> Self {
        Self {
            radio,
            frame: FrameBuffer::new(),
            dropped: 0,
            receive_mode: config.receive_mode(),
            terminator_policy: config.terminator_policy(),
        }
    }

    /// Returns the frame received so far.
    #[must_use]
    pub const fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Returns a reference to the radio.
    #[must_use]
    pub const fn radio(&self) -> &R {
        &self.radio
    }

    /// Returns a mutable reference to the radio.
    pub fn radio_mut(&mut self) -> &mut R {
        &mut self.radio
    }

    /// Returns the radio.
    #[must_use]
    pub fn into_radio(self) -> R {
        self.radio
    }
}
