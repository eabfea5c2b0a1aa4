use std::fmt::{Display, Formatter};

/// Counters kept by the bridge.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Stats {
    /// Lines sent over the radio, including the startup line.
    pub lines_sent: usize,
    /// Frames forwarded to the terminal.
    pub frames_received: usize,
    /// Terminal bytes refused because the line was full.
    pub line_bytes_dropped: usize,
    /// Radio bytes dropped because the frame was too long.
    pub frame_bytes_dropped: usize,
}

impl Stats {
    /// Returns `true` if any byte was dropped so far.
    #[must_use]
    pub const fn overflowed(&self) -> bool {
        self.line_bytes_dropped > 0 || self.frame_bytes_dropped > 0
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "sent {} lines, received {} frames, dropped {} line bytes and {} frame bytes",
            self.lines_sent, self.frames_received, self.line_bytes_dropped, self.frame_bytes_dropped
        )
    }
}
