//! Host-side console for talking to the bridge over its terminal channel.
//!
//! The console keeps a short input line, turns it into bridge lines on enter,
//! and splits the bytes coming back from the bridge into messages.

pub use history::{Direction, History, Message};

mod history;

use log::trace;

use crate::protocol::{is_terminator, LINE_FEED, MAX_BYTES};

/// Maximum length of a line typed into the console.
pub const MAX_INPUT_LEN: usize = 15;

/// Default amount of messages kept in the history.
pub const DEFAULT_HISTORY_LEN: usize = 50;

/// A key press.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// Erase the last character.
    Backspace,
    /// Send the current line.
    Enter,
    /// Leave the console.
    Escape,
}

/// What the caller has to do after a key press.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Action {
    /// Nothing.
    None,
    /// Write the bytes to the bridge.
    Send(Vec<u8>),
    /// Leave the console.
    Quit,
}

/// Console state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Console {
    input: heapless::Vec<u8, MAX_INPUT_LEN>,
    output: Vec<u8>,
    history: History,
}

impl Console {
    /// Creates a console keeping `history_len` messages.
    #[must_use]
    pub fn new(history_len: usize) -> Self {
        Self {
            input: heapless::Vec::new(),
            output: Vec::new(),
            history: History::new(history_len),
        }
    }

    /// Handles a key press.
    ///
    /// Characters that do not fit into the input line or that are not ASCII
    /// are ignored. Enter on an empty line does nothing.
    pub fn key(&mut self, key: Key) -> Action {
        match key {
            Key::Char(character) => {
                if character.is_ascii() && self.input.push(character as u8).is_err() {
                    trace!("Input line full. Ignoring {character:?}.");
                }

                Action::None
            }
            Key::Backspace => {
                self.input.pop();
                Action::None
            }
            Key::Enter => {
                if self.input.is_empty() {
                    return Action::None;
                }

                let mut line = self.input.to_vec();
                self.history
                    .push(Direction::In, String::from_utf8_lossy(&line).into_owned());
                line.push(LINE_FEED);
                self.input.clear();
                Action::Send(line)
            }
            Key::Escape => Action::Quit,
        }
    }

    /// Handles a byte received from the bridge.
    ///
    /// Returns the message completed by this byte, if any. A message ends with
    /// a line terminator or once it reaches [`MAX_BYTES`], the largest frame the
    /// bridge forwards.
    pub fn receive(&mut self, byte: u8) -> Option<&Message> {
        self.output.push(byte);

        if !is_terminator(byte) && self.output.len() < MAX_BYTES {
            return None;
        }

        let text = String::from_utf8_lossy(&self.output).into_owned();
        self.output.clear();
        Some(self.history.push(Direction::Out, text))
    }

    /// Records a status message of the console itself.
    pub fn status(&mut self, text: impl Into<String>) -> &Message {
        self.history.push(Direction::Term, text.into())
    }

    /// Returns the line currently being typed.
    #[must_use]
    pub fn input(&self) -> &[u8] {
        &self.input
    }

    /// Returns the message history.
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LEN)
    }
}
