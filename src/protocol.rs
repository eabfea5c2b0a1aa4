//! Bytes and limits shared by both sides of the bridge.

/// Capacity of the line and frame buffers in bytes.
pub const MAX_BYTES: usize = 2048;

/// Erases the last byte of the current line.
pub const BACKSPACE: u8 = 0x08;
/// Terminates the current line.
pub const CARRIAGE_RETURN: u8 = 0x0D;
/// Terminates the current line.
pub const LINE_FEED: u8 = 0x0A;

/// Line announced over the radio once the bridge is up.
pub const STARTUP_LINE: &[u8] = b"init\n";

/// Returns `true` if `byte` ends a line.
#[must_use]
pub const fn is_terminator(byte: u8) -> bool {
    matches!(byte, CARRIAGE_RETURN | LINE_FEED)
}
