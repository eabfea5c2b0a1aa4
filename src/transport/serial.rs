use std::io::{ErrorKind, Read, Write};

use log::trace;
use serialport::SerialPort;

use crate::transport::Terminal;

/// A [`Terminal`] backed by a serial port.
#[derive(Debug)]
pub struct SerialTerminal<P> {
    port: P,
}

impl<P> SerialTerminal<P> {
    /// Wraps the given serial port.
    #[must_use]
    pub const fn new(port: P) -> Self {
        Self { port }
    }

    /// Returns the wrapped serial port.
    #[must_use]
    pub fn into_inner(self) -> P {
        self.port
    }
}

impl<P> Terminal for SerialTerminal<P>
where
    P: SerialPort,
{
    fn try_recv_byte(&mut self) -> std::io::Result<Option<u8>> {
        if self.port.bytes_to_read()? == 0 {
            return Ok(None);
        }

        let mut byte = [0];

        match self.port.read(&mut byte) {
            Ok(1) => Ok(Some(byte[0])),
            Ok(_) => Ok(None),
            Err(error) if matches!(error.kind(), ErrorKind::TimedOut | ErrorKind::WouldBlock) => {
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }

    fn send(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
        let mut sent = 0;

        while sent < bytes.len() {
            match self.port.write(&bytes[sent..]) {
                Ok(0) => break,
                Ok(len) => sent += len,
                Err(error) if error.kind() == ErrorKind::Interrupted => continue,
                Err(error) if error.kind() == ErrorKind::TimedOut => break,
                Err(error) => return Err(error),
            }
        }

        trace!("Serial port accepted {sent} of {} bytes.", bytes.len());
        self.port.flush()?;
        Ok(sent)
    }
}
