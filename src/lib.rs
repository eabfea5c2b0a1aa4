//! Terminal to packet-radio bridge.
//!
//! This library implements a bidirectional bridge between a line-oriented
//! terminal channel (e.g. a UART) and a radio channel that transfers words
//! carrying one payload byte and an end-of-frame flag.
//!
//! Bytes typed on the terminal are collected into a line with basic editing
//! (backspace). A line terminator sends the line over the radio as one frame.
//! Frames arriving over the radio are reassembled and written to the terminal.
//! Both directions are served by a single cooperative polling loop, see
//! [`Bridge`].
//!
//! The hardware side is abstracted by the [`Terminal`] and [`Radio`] traits.

pub use bridge::Bridge;
pub use buffer::{Buffer, BufferFull, FrameBuffer, LineBuffer};
pub use config::{Config, Idle, ReceiveMode, TerminatorPolicy};
pub use error::{Error, Result};
pub use framer::{Delivery, FrameWords, RadioFramer};
pub use line_editor::{Edit, LineEditor};
pub use serial_port::open;
pub use stats::Stats;
pub use transport::{Radio, SerialTerminal, Terminal};
pub use utils::Escaped;
pub use word::Word;

mod bridge;
mod buffer;
mod config;
pub mod console;
mod error;
mod framer;
mod line_editor;
pub mod protocol;
pub mod serial_port;
mod stats;
pub mod transport;
mod utils;
mod word;
