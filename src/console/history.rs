use std::collections::VecDeque;
use std::fmt::{Display, Formatter};

/// Where a console message came from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    /// Typed locally and sent to the bridge.
    In,
    /// Received from the bridge.
    Out,
    /// Status of the console itself.
    Term,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::In => write!(f, ">>"),
            Self::Out => write!(f, "<<"),
            Self::Term => write!(f, "--"),
        }
    }
}

/// A console message.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Message {
    /// Origin of the message.
    pub direction: Direction,
    /// Text of the message.
    pub text: String,
}

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.direction, self.text)
    }
}

/// Bounded message history, newest first.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct History {
    messages: VecDeque<Message>,
    capacity: usize,
}

impl History {
    /// Creates an empty history holding at most `capacity` messages.
    ///
    /// The history always keeps at least the newest message.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            messages: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records a message, evicting the oldest one if the history is full.
    pub fn push(&mut self, direction: Direction, text: String) -> &Message {
        if self.messages.len() >= self.capacity {
            self.messages.pop_back();
        }

        self.messages.push_front(Message { direction, text });
        &self.messages[0]
    }

    /// Iterates over the messages, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    /// Returns the amount of recorded messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if no message was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
