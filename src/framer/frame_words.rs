use std::iter::FusedIterator;

use crate::config::ReceiveMode;
use crate::transport::Radio;
use crate::word::Word;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    Open,
    Complete,
    Stalled,
}

/// Lazy sequence of the words of one radio frame.
///
/// The sequence ends after yielding the end-of-frame word, or as soon as the
/// radio runs dry. Which of the two happened is available afterwards through
/// [`FrameWords::is_complete`] and [`FrameWords::is_stalled`].
///
/// In [`ReceiveMode::Blocking`] the sequence only stalls if the very first
/// read finds no data; once a word arrived it spins until the frame is done.
#[derive(Debug)]
pub struct FrameWords<'a, R>
where
    R: ?Sized,
{
    radio: &'a mut R,
    mode: ReceiveMode,
    started: bool,
    state: State,
}

impl<'a, R> FrameWords<'a, R>
where
    R: Radio + ?Sized,
{
    /// Starts reading a frame from the radio.
    pub fn new(radio: &'a mut R, mode: ReceiveMode) -> Self {
        Self {
            radio,
            mode,
            started: false,
            state: State::Open,
        }
    }

    /// Returns `true` if the end-of-frame word has been yielded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == State::Complete
    }

    /// Returns `true` if the radio ran out of data before the frame ended.
    #[must_use]
    pub fn is_stalled(&self) -> bool {
        self.state == State::Stalled
    }
}

impl<R> Iterator for FrameWords<'_, R>
where
    R: Radio + ?Sized,
{
    type Item = Word;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state != State::Open {
            return None;
        }

        loop {
            let word = self.radio.recv_word();

            if word.is_valid() {
                self.started = true;

                if word.is_end_of_frame() {
                    self.state = State::Complete;
                }

                return Some(word);
            }

            if self.started && self.mode == ReceiveMode::Blocking {
                std::hint::spin_loop();
                continue;
            }

            self.state = State::Stalled;
            return None;
        }
    }
}

impl<R> FusedIterator for FrameWords<'_, R> where R: Radio + ?Sized {}

#[cfg(test)]
mod tests {
    use super::FrameWords;
    use crate::config::ReceiveMode;
    use crate::transport::fake::FakeRadio;
    use crate::word::Word;

    #[test]
    fn test_empty_radio_stalls() {
        let mut radio = FakeRadio::new();
        let mut words = FrameWords::new(&mut radio, ReceiveMode::Blocking);
        assert_eq!(words.next(), None);
        assert!(words.is_stalled());
        assert!(!words.is_complete());
    }

    #[test]
    fn test_stops_after_end_of_frame() {
        let mut radio = FakeRadio::new();
        radio.queue_frame(b"ab");
        radio.queue_frame(b"cd");
        let mut words = FrameWords::new(&mut radio, ReceiveMode::Blocking);
        let payload: Vec<u8> = (&mut words).map(Word::payload).collect();
        assert_eq!(payload, b"ab");
        assert!(words.is_complete());
        assert_eq!(words.next(), None);
        assert_eq!(radio.pending(), 2);
    }

    #[test]
    fn test_blocking_waits_for_rest_of_frame() {
        let mut radio = FakeRadio::new();
        radio.queue_word(Word::data(b'a'.into()));
        radio.queue_word(Word::INVALID);
        radio.queue_word(Word::INVALID);
        radio.queue_word(Word::last(b'b'.into()));
        let mut words = FrameWords::new(&mut radio, ReceiveMode::Blocking);
        let payload: Vec<u8> = (&mut words).map(Word::payload).collect();
        assert_eq!(payload, b"ab");
        assert!(words.is_complete());
    }

    #[test]
    fn test_resumable_stalls_mid_frame() {
        let mut radio = FakeRadio::new();
        radio.queue_word(Word::data(b'a'.into()));
        radio.queue_word(Word::INVALID);
        radio.queue_word(Word::last(b'b'.into()));
        let mut words = FrameWords::new(&mut radio, ReceiveMode::Resumable);
        let payload: Vec<u8> = (&mut words).map(Word::payload).collect();
        assert_eq!(payload, b"a");
        assert!(words.is_stalled());
        assert_eq!(radio.pending(), 1);
    }
}
