//! Opening host serial ports for the terminal side of the bridge.

pub use settings::{DataBits, Parity, Settings, StopBits};

mod settings;

#[cfg(windows)]
pub use serialport::COMPort as SerialPortImpl;

#[cfg(unix)]
pub use serialport::TTYPort as SerialPortImpl;

/// Opens a serial port depending on the local operating system.
///
/// # Errors
/// For errors please refer to [`SerialPortImpl::open()`] and [`serialport::new()`]
pub fn open<'a>(
    path: impl Into<std::borrow::Cow<'a, str>>,
    settings: &Settings,
) -> serialport::Result<SerialPortImpl> {
    SerialPortImpl::open(
        &serialport::new(path, settings.baud_rate)
            .data_bits(settings.data_bits.into())
            .stop_bits(settings.stop_bits.into())
            .parity(settings.parity.into())
            .timeout(settings.timeout),
    )
}
