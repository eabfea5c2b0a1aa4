use std::convert::Infallible;

use log::{debug, error, info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::framer::RadioFramer;
use crate::line_editor::{Edit, LineEditor};
use crate::protocol::STARTUP_LINE;
use crate::stats::Stats;
use crate::transport::{Radio, Terminal};

/// Bridge between a terminal channel and a radio channel.
///
/// The bridge owns both transports and both buffers. It is driven by
/// repeatedly calling [`Bridge::poll`], or by handing control to
/// [`Bridge::run`].
///
/// # Usage
///
/// ```
/// use uart_radio_bridge::transport::fake::{FakeRadio, FakeTerminal};
/// use uart_radio_bridge::{Bridge, Config};
///
/// let mut bridge = Bridge::new(FakeTerminal::new(), FakeRadio::new(), Config::default());
/// bridge.announce();
/// bridge.poll().unwrap();
/// assert_eq!(bridge.radio().sent_frames(), vec![b"init\n".to_vec()]);
/// ```
#[derive(Debug)]
pub struct Bridge<T, R> {
    terminal: T,
    editor: LineEditor,
    framer: RadioFramer<R>,
    config: Config,
    stats: Stats,
}

impl<T, R> Bridge<T, R>
where
    T: Terminal,
    R: Radio,
{
    /// Creates a new bridge.
    #[must_use]
    pub fn new(terminal: T, radio: R, config: Config) -> Self {
        Self {
            terminal,
            editor: LineEditor::new(),
            framer: RadioFramer::new(radio, &config),
            config,
            stats: Stats::default(),
        }
    }

    /// Transmits the startup line over the radio.
    ///
    /// The startup line is assembled apart from the line being typed, which is
    /// kept as it is.
    pub fn announce(&mut self) {
        info!("Announcing bridge over radio.");
        let mut editor = LineEditor::new();

        for &byte in STARTUP_LINE {
            if let Ok(Edit::Terminated) = editor.feed(byte) {
                self.framer.transmit(editor.line_mut());
                self.stats.lines_sent += 1;
            }
        }
    }

    /// Feeds a byte from the terminal into the line editor.
    ///
    /// A line terminator transmits the current line. A byte that does not fit
    /// into the line is dropped and counted.
    pub fn feed(&mut self, byte: u8) {
        match self.editor.feed(byte) {
            Ok(Edit::Terminated) => {
                self.framer.transmit(self.editor.line_mut());
                self.stats.lines_sent += 1;
            }
            Ok(_) => {}
            Err(overflow) => {
                warn!("{overflow}");
                self.stats.line_bytes_dropped += 1;
            }
        }
    }

    /// Runs one iteration of the polling loop.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`](crate::Error) if the terminal transport failed.
    pub fn poll(&mut self) -> Result<()> {
        if let Some(byte) = self.terminal.try_recv_byte()? {
            self.feed(byte);
        }

        if let Some(delivery) = self.framer.poll_receive(&mut self.terminal)? {
            debug!("Delivered {} bytes to terminal.", delivery.len);
            self.stats.frames_received += 1;
            self.stats.frame_bytes_dropped += delivery.dropped;
        }

        Ok(())
    }

    /// Announces the bridge and polls until a transport fails.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error`](crate::Error) raised by the terminal transport.
    pub fn run(&mut self) -> Result<Infallible> {
        self.announce();
        let idle = self.config.idle();

        loop {
            if let Err(error) = self.poll() {
                error!("Stopping bridge: {error}");
                info!("Bridge {}", self.stats);
                return Err(error);
            }

            idle.wait();
        }
    }
}

impl<T, R> Bridge<T, R> {
    /// Returns the line editor.
    #[must_use]
    pub const fn editor(&self) -> &LineEditor {
        &self.editor
    }

    /// Returns the radio framer.
    #[must_use]
    pub const fn framer(&self) -> &RadioFramer<R> {
        &self.framer
    }

    /// Returns a reference to the terminal.
    #[must_use]
    pub const fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Returns a mutable reference to the terminal.
    pub fn terminal_mut(&mut self) -> &mut T {
        &mut self.terminal
    }

    /// Returns a reference to the radio.
    #[must_use]
    pub const fn radio(&self) -> &R {
        self.framer.radio()
    }

    /// Returns a mutable reference to the radio.
    pub fn radio_mut(&mut self) -> &mut R {
        self.framer.radio_mut()
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the counters.
    #[must_use]
    pub const fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Returns the terminal and the radio.
    #[must_use]
    pub fn into_parts(self) -> (T, R) {
        (self.terminal, self.framer.into_radio())
    }
}

#[cfg(test)]
mod tests {
    use super::Bridge;
    use crate::config::Config;
    use crate::error::Error;
    use crate::protocol::{BACKSPACE, MAX_BYTES};
    use crate::transport::fake::{FakeRadio, FakeTerminal};

    fn bridge() -> Bridge<FakeTerminal, FakeRadio> {
        Bridge::new(FakeTerminal::new(), FakeRadio::new(), Config::default())
    }

    fn poll_until_idle(bridge: &mut Bridge<FakeTerminal, FakeRadio>) {
        while bridge.terminal().pending() > 0 || bridge.radio().pending() > 0 {
            bridge.poll().expect("Polling should succeed.");
        }
    }

    #[test]
    fn test_announce() {
        let mut bridge = bridge();
        bridge.announce();
        assert_eq!(bridge.radio().sent_frames(), vec![b"init\n".to_vec()]);
        assert!(bridge.editor().line().is_empty());
        assert_eq!(bridge.stats().lines_sent, 1);
    }

    #[test]
    fn test_announce_keeps_typed_line() {
        let mut bridge = bridge();
        bridge.terminal_mut().type_bytes(b"ab");
        poll_until_idle(&mut bridge);
        bridge.announce();
        assert_eq!(bridge.radio().sent_frames(), vec![b"init\n".to_vec()]);
        assert_eq!(&**bridge.editor().line(), b"ab");

        bridge.terminal_mut().type_bytes(b"c\n");
        poll_until_idle(&mut bridge);
        assert_eq!(
            bridge.radio().sent_frames(),
            vec![b"init\n".to_vec(), b"abc\n".to_vec()]
        );
    }

    #[test]
    fn test_line_with_erase() {
        let mut bridge = bridge();
        bridge
            .terminal_mut()
            .type_bytes(&[b'h', b'x', BACKSPACE, b'i', b'\r']);
        poll_until_idle(&mut bridge);
        assert_eq!(bridge.radio().sent_frames(), vec![b"hi\r".to_vec()]);
    }

    #[test]
    fn test_radio_frame_reaches_terminal() {
        let mut bridge = bridge();
        bridge.radio_mut().queue_frame(b"pong\n");
        bridge.poll().expect("Polling should succeed.");
        assert_eq!(bridge.terminal().output(), b"pong\n");
        assert_eq!(bridge.stats().frames_received, 1);
    }

    #[test]
    fn test_line_overflow_is_counted() {
        let mut bridge = bridge();

        for _ in 0..MAX_BYTES + 1 {
            bridge.feed(b'a');
        }

        assert_eq!(bridge.editor().line().len(), MAX_BYTES - 1);
        assert_eq!(bridge.stats().line_bytes_dropped, 2);
        assert!(bridge.stats().overflowed());
        bridge.feed(b'\n');
        assert_eq!(bridge.radio().sent().len(), MAX_BYTES);
    }

    #[test]
    fn test_run_stops_on_short_write() {
        let mut bridge = bridge();
        bridge.terminal_mut().accept_at_most(1);
        bridge.radio_mut().queue_frame(b"abc");

        match bridge.run() {
            Ok(never) => match never {},
            Err(Error::ShortWrite { expected, sent }) => {
                assert_eq!(expected, 3);
                assert_eq!(sent, 1);
            }
            Err(error) => panic!("Unexpected error: {error}"),
        }

        assert_eq!(bridge.radio().sent_frames(), vec![b"init\n".to_vec()]);
        assert!(bridge.framer().frame().is_empty());
    }
}
