use log::{debug, trace, warn};

use crate::buffer::LineBuffer;
use crate::framer::RadioFramer;
use crate::protocol::LINE_FEED;
use crate::transport::Radio;
use crate::utils::Escaped;

impl<R> RadioFramer<R>
where
    R: Radio,
{
    /// Sends the given line as one radio frame and resets it.
    ///
    /// Every byte of the line goes out as an ordinary word. The byte stored
    /// right behind the line, i.e. its terminator, is sent as the final word.
    /// An empty line therefore still produces a frame of exactly one word.
    pub fn transmit(&mut self, line: &mut LineBuffer) {
        debug!("Transmitting line: {}", Escaped::new(&**line));

        for &byte in line.iter() {
            self.radio.send_word(byte);
        }

        let terminator = line.terminator().unwrap_or_else(|| {
            warn!("Line has no terminator slot. Closing frame with line feed.");
            LINE_FEED
        });
        trace!("Closing frame with {terminator:#04X}.");
        self.radio.send_final_word(terminator);
        line.clear();
    }
}
