use log::{debug, error, trace, warn};

use crate::config::TerminatorPolicy;
use crate::error::{Error, Result};
use crate::framer::{Delivery, FrameWords, RadioFramer};
use crate::transport::{Radio, Terminal};
use crate::utils::Escaped;

impl<R> RadioFramer<R>
where
    R: Radio,
{
    /// Drains at most one radio frame and forwards it to the terminal.
    ///
    /// Returns `Ok(None)` if no complete frame is available. The frame buffer
    /// is left untouched if the radio had no data at all.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if forwarding the frame to the terminal failed.
    pub fn poll_receive<T>(&mut self, terminal: &mut T) -> Result<Option<Delivery>>
    where
        T: Terminal + ?Sized,
    {
        let mut words = FrameWords::new(&mut self.radio, self.receive_mode);

        for word in &mut words {
            trace!("Received word: {word}");

            if word.is_end_of_frame() && self.terminator_policy == TerminatorPolicy::Discard {
                continue;
            }

            if self.frame.push(word.payload()).is_err() {
                self.dropped += 1;
            }
        }

        if !words.is_complete() {
            if !self.frame.is_empty() {
                trace!("Frame incomplete after {} bytes.", self.frame.len());
            }

            return Ok(None);
        }

        let dropped = std::mem::take(&mut self.dropped);

        if dropped > 0 {
            warn!("Frame exceeded buffer capacity. Dropped {dropped} bytes.");
        }

        let len = self.flush_to_terminal(terminal)?;
        Ok(Some(Delivery { len, dropped }))
    }

    /// Writes the received frame to the terminal in one call.
    ///
    /// The frame buffer is reset whether or not the write succeeded.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the terminal failed or did not accept every byte.
    pub fn flush_to_terminal<T>(&mut self, terminal: &mut T) -> Result<usize>
    where
        T: Terminal + ?Sized,
    {
        let expected = self.frame.len();
        debug!("Forwarding frame: {}", Escaped::new(&self.frame));
        let result = terminal.send(&self.frame);
        self.frame.clear();
        let sent = result?;

        if sent == expected {
            Ok(sent)
        } else {
            error!("Terminal accepted only {sent} of {expected} bytes.");
            Err(Error::ShortWrite { expected, sent })
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{Config, ReceiveMode, TerminatorPolicy};
    use crate::error::Error;
    use crate::framer::{Delivery, RadioFramer};
    use crate::protocol::MAX_BYTES;
    use crate::transport::fake::{FakeRadio, FakeTerminal};
    use crate::word::Word;

    #[test]
    fn test_no_data() {
        let mut framer = RadioFramer::new(FakeRadio::new(), &Config::default());
        let mut terminal = FakeTerminal::new();
        let delivery = framer
            .poll_receive(&mut terminal)
            .expect("Polling an idle radio should succeed.");
        assert_eq!(delivery, None);
        assert!(framer.frame().is_empty());
        assert!(terminal.output().is_empty());
    }

    #[test]
    fn test_receive_keeps_terminator() {
        let mut radio = FakeRadio::new();
        radio.queue_frame(b"hello\n");
        let mut framer = RadioFramer::new(radio, &Config::default());
        let mut terminal = FakeTerminal::new();
        let delivery = framer
            .poll_receive(&mut terminal)
            .expect("Frame should be forwarded.");
        assert_eq!(delivery, Some(Delivery { len: 6, dropped: 0 }));
        assert_eq!(terminal.output(), b"hello\n");
        assert!(framer.frame().is_empty());
    }

    #[test]
    fn test_receive_discards_terminator() {
        let mut radio = FakeRadio::new();
        radio.queue_frame(b"hello\n");
        let config = Config::new().with_terminator_policy(TerminatorPolicy::Discard);
        let mut framer = RadioFramer::new(radio, &config);
        let mut terminal = FakeTerminal::new();
        let delivery = framer
            .poll_receive(&mut terminal)
            .expect("Frame should be forwarded.");
        assert_eq!(delivery, Some(Delivery { len: 5, dropped: 0 }));
        assert_eq!(terminal.output(), b"hello");
    }

    #[test]
    fn test_one_frame_per_poll() {
        let mut radio = FakeRadio::new();
        radio.queue_frame(b"first\n");
        radio.queue_frame(b"second\n");
        let mut framer = RadioFramer::new(radio, &Config::default());
        let mut terminal = FakeTerminal::new();
        framer
            .poll_receive(&mut terminal)
            .expect("Frame should be forwarded.");
        assert_eq!(terminal.output(), b"first\n");
        framer
            .poll_receive(&mut terminal)
            .expect("Frame should be forwarded.");
        assert_eq!(terminal.output(), b"first\nsecond\n");
    }

    #[test]
    fn test_resumable_frame_spans_polls() {
        let mut radio = FakeRadio::new();
        radio.queue_word(Word::data(b'o'.into()));
        let config = Config::new().with_receive_mode(ReceiveMode::Resumable);
        let mut framer = RadioFramer::new(radio, &config);
        let mut terminal = FakeTerminal::new();
        assert_eq!(
            framer
                .poll_receive(&mut terminal)
                .expect("Partial frame should not fail."),
            None
        );
        assert_eq!(&**framer.frame(), b"o");
        framer.radio_mut().queue_word(Word::last(b'k'.into()));
        assert_eq!(
            framer
                .poll_receive(&mut terminal)
                .expect("Frame should be forwarded."),
            Some(Delivery { len: 2, dropped: 0 })
        );
        assert_eq!(terminal.output(), b"ok");
    }

    #[test]
    fn test_oversized_frame_is_truncated() {
        let mut radio = FakeRadio::new();
        let mut payload = vec![b'z'; MAX_BYTES + 3];
        payload.push(b'\n');
        radio.queue_frame(&payload);
        let mut framer = RadioFramer::new(radio, &Config::default());
        let mut terminal = FakeTerminal::new();
        let delivery = framer
            .poll_receive(&mut terminal)
            .expect("Frame should be forwarded.");
        assert_eq!(
            delivery,
            Some(Delivery {
                len: MAX_BYTES,
                dropped: 4
            })
        );
        assert_eq!(terminal.output(), &payload[..MAX_BYTES]);
    }

    #[test]
    fn test_short_write_resets_frame() {
        let mut radio = FakeRadio::new();
        radio.queue_frame(b"hello\n");
        radio.queue_frame(b"ok\n");
        let mut framer = RadioFramer::new(radio, &Config::default());
        let mut terminal = FakeTerminal::new();
        terminal.accept_at_most(4);

        match framer.poll_receive(&mut terminal) {
            Err(Error::ShortWrite { expected, sent }) => {
                assert_eq!(expected, 6);
                assert_eq!(sent, 4);
            }
            other => panic!("Expected short write, got {other:?}"),
        }

        assert!(framer.frame().is_empty());
        let delivery = framer
            .poll_receive(&mut terminal)
            .expect("Short frame should fit.");
        assert_eq!(delivery, Some(Delivery { len: 3, dropped: 0 }));
        assert_eq!(terminal.output(), b"hellok\n");
    }
}
