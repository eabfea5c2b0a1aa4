use std::time::Duration;

/// Line settings of a serial connection.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Settings {
    /// Baud rate in symbols per second.
    pub baud_rate: u32,
    /// Data bits per character.
    pub data_bits: DataBits,
    /// Stop bits per character.
    pub stop_bits: StopBits,
    /// Parity checking mode.
    pub parity: Parity,
    /// Read timeout.
    pub timeout: Duration,
}

impl Settings {
    /// Baud rate the bridge's UART is configured with.
    pub const DEFAULT_BAUD_RATE: u32 = 115_200;
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            baud_rate: Self::DEFAULT_BAUD_RATE,
            data_bits: DataBits::default(),
            stop_bits: StopBits::default(),
            parity: Parity::default(),
            timeout: Duration::from_secs(1) / 60,
        }
    }
}

/// Number of data bits per character.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum DataBits {
    /// Five data bits.
    Five,
    /// Six data bits.
    Six,
    /// Seven data bits.
    Seven,
    /// Eight data bits.
    #[default]
    Eight,
}

impl From<DataBits> for serialport::DataBits {
    fn from(data_bits: DataBits) -> Self {
        match data_bits {
            DataBits::Five => Self::Five,
            DataBits::Six => Self::Six,
            DataBits::Seven => Self::Seven,
            DataBits::Eight => Self::Eight,
        }
    }
}

#[cfg(feature = "cli")]
impl clap::ValueEnum for DataBits {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Five, Self::Six, Self::Seven, Self::Eight]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(match self {
            Self::Five => clap::builder::PossibleValue::new("5"),
            Self::Six => clap::builder::PossibleValue::new("6"),
            Self::Seven => clap::builder::PossibleValue::new("7"),
            Self::Eight => clap::builder::PossibleValue::new("8"),
        })
    }
}

/// Number of stop bits per character.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum StopBits {
    /// One stop bit.
    #[default]
    One,
    /// Two stop bits.
    Two,
}

impl From<StopBits> for serialport::StopBits {
    fn from(stop_bits: StopBits) -> Self {
        match stop_bits {
            StopBits::One => Self::One,
            StopBits::Two => Self::Two,
        }
    }
}

#[cfg(feature = "cli")]
impl clap::ValueEnum for StopBits {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::One, Self::Two]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(match self {
            Self::One => clap::builder::PossibleValue::new("1"),
            Self::Two => clap::builder::PossibleValue::new("2"),
        })
    }
}

/// Parity checking mode.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Parity {
    /// No parity bit.
    #[default]
    None,
    /// Odd parity.
    Odd,
    /// Even parity.
    Even,
}

impl From<Parity> for serialport::Parity {
    fn from(parity: Parity) -> Self {
        match parity {
            Parity::None => Self::None,
            Parity::Odd => Self::Odd,
            Parity::Even => Self::Even,
        }
    }
}

#[cfg(feature = "cli")]
impl clap::ValueEnum for Parity {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::None, Self::Odd, Self::Even]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(match self {
            Self::None => clap::builder::PossibleValue::new("none").alias("N"),
            Self::Odd => clap::builder::PossibleValue::new("odd").alias("O"),
            Self::Even => clap::builder::PossibleValue::new("even").alias("E"),
        })
    }
}
