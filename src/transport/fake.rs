//! Queue-backed transports for tests and host simulation.
//!
//! Both fakes hand out queued input first and then report that no data is
//! available. Everything written to them is recorded for inspection.

use std::collections::VecDeque;

use log::trace;

use crate::transport::{Radio, Terminal};
use crate::word::Word;

/// Fake terminal channel.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FakeTerminal {
    input: VecDeque<u8>,
    output: Vec<u8>,
    accept_limit: Option<usize>,
}

impl FakeTerminal {
    /// Creates a fake terminal without pending input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues bytes to be returned by [`Terminal::try_recv_byte`].
    pub fn type_bytes(&mut self, bytes: &[u8]) {
        self.input.extend(bytes);
    }

    /// Limits the amount of bytes a single [`Terminal::send`] accepts.
    pub fn accept_at_most(&mut self, limit: usize) {
        self.accept_limit = Some(limit);
    }

    /// Returns everything that was sent to the terminal so far.
    #[must_use]
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Returns the amount of bytes that are still queued.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.input.len()
    }
}

impl Terminal for FakeTerminal {
    fn try_recv_byte(&mut self) -> std::io::Result<Option<u8>> {
        Ok(self.input.pop_front())
    }

    fn send(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
        let len = self
            .accept_limit
            .map_or(bytes.len(), |limit| limit.min(bytes.len()));
        self.output.extend_from_slice(&bytes[..len]);
        Ok(len)
    }
}

/// Fake radio channel.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FakeRadio {
    incoming: VecDeque<Word>,
    sent: Vec<Word>,
}

impl FakeRadio {
    /// Creates a fake radio without pending words.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a single word to be returned by [`Radio::recv_word`].
    pub fn queue_word(&mut self, word: Word) {
        self.incoming.push_back(word);
    }

    /// Queues one frame: ordinary words for all but the last byte.
    ///
    /// An empty slice queues nothing.
    pub fn queue_frame(&mut self, bytes: &[u8]) {
        if let Some((&last, head)) = bytes.split_last() {
            self.incoming
                .extend(head.iter().map(|&byte| Word::data(byte.into())));
            self.incoming.push_back(Word::last(last.into()));
        }
    }

    /// Returns all words sent over the radio so far.
    #[must_use]
    pub fn sent(&self) -> &[Word] {
        &self.sent
    }

    /// Splits the sent words into frames and returns their payloads.
    ///
    /// Trailing words without an end-of-frame flag are not returned.
    #[must_use]
    pub fn sent_frames(&self) -> Vec<Vec<u8>> {
        let mut frames = Vec::new();
        let mut frame = Vec::new();

        for word in &self.sent {
            frame.push(word.payload());

            if word.is_end_of_frame() {
                frames.push(std::mem::take(&mut frame));
            }
        }

        frames
    }

    /// Returns the amount of words that are still queued.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.incoming.len()
    }
}

impl Radio for FakeRadio {
    fn recv_word(&mut self) -> Word {
        self.incoming.pop_front().unwrap_or(Word::INVALID)
    }

    fn send_word(&mut self, payload: u8) {
        trace!("FakeRadio: sending DATA({payload:#04X})");
        self.sent.push(Word::data(payload.into()));
    }

    fn send_final_word(&mut self, payload: u8) {
        trace!("FakeRadio: sending LAST({payload:#04X})");
        self.sent.push(Word::last(payload.into()));
    }
}
