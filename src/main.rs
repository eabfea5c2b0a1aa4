//! Serial console for the terminal side of the radio bridge.

use std::io::{BufRead, ErrorKind, Read, Write};
use std::process::ExitCode;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread::spawn;

use clap::Parser;
use log::{debug, error};
use serialport::SerialPort;
use uart_radio_bridge::console::{Action, Console, Key, Message, DEFAULT_HISTORY_LEN};
use uart_radio_bridge::serial_port::{open, DataBits, Parity, Settings, StopBits};

#[derive(Debug, Parser)]
#[command(about = "Communicate with the radio bridge over its serial terminal.")]
struct Args {
    #[arg(index = 1, help = "Port to connect to (e.g. '/dev/ttyUSB0' or 'COM3')")]
    port: String,
    #[arg(short = 'b', long, default_value_t = Settings::DEFAULT_BAUD_RATE)]
    baud: u32,
    #[arg(short = 'd', long, value_enum, default_value_t = DataBits::Eight)]
    data_bits: DataBits,
    #[arg(short = 's', long, value_enum, default_value_t = StopBits::One)]
    stop_bits: StopBits,
    #[arg(short = 'p', long, value_enum, default_value_t = Parity::None)]
    parity: Parity,
    #[arg(long, default_value_t = DEFAULT_HISTORY_LEN)]
    history_len: usize,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings {
            baud_rate: self.baud,
            data_bits: self.data_bits,
            stop_bits: self.stop_bits,
            parity: self.parity,
            ..Settings::default()
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match open(args.port.as_str(), &args.settings()) {
        Ok(serial_port) => {
            run(serial_port, args.history_len);
            ExitCode::SUCCESS
        }
        Err(error) => {
            error!("Could not open {}: {error}", args.port);
            ExitCode::FAILURE
        }
    }
}

fn run(mut serial_port: impl SerialPort, history_len: usize) {
    let keys = read_keys();
    let mut console = Console::new(history_len);
    show(console.status("Serial connection established."));
    let mut byte = [0];

    loop {
        match keys.try_recv() {
            Ok(keys) => {
                for key in keys {
                    match console.key(key) {
                        Action::None => {}
                        Action::Send(line) => {
                            if let Err(error) = serial_port.write_all(&line) {
                                error!("{error}");
                                show(console.status("Serial connection lost."));
                                return;
                            }

                            if let Some(message) = console.history().iter().next() {
                                show(message);
                            }
                        }
                        Action::Quit => {
                            show(console.status("Serial connection closed."));
                            return;
                        }
                    }
                }
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => return,
        }

        match serial_port.read(&mut byte) {
            Ok(1) => {
                if let Some(message) = console.receive(byte[0]) {
                    show(message);
                }
            }
            Ok(_) => {}
            Err(error) if error.kind() == ErrorKind::TimedOut => {}
            Err(error) => {
                error!("{error}");
                show(console.status("Serial connection lost."));
                return;
            }
        }
    }
}

/// Reads lines from stdin on a separate thread and translates them into key presses.
fn read_keys() -> Receiver<Vec<Key>> {
    let (sender, receiver) = channel();

    spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let keys = match line {
                Ok(line) => line
                    .chars()
                    .map(|character| match character {
                        '\u{8}' | '\u{7f}' => Key::Backspace,
                        '\u{1b}' => Key::Escape,
                        character => Key::Char(character),
                    })
                    .chain(std::iter::once(Key::Enter))
                    .collect(),
                Err(error) => {
                    debug!("Could not read from stdin: {error}");
                    break;
                }
            };

            if sender.send(keys).is_err() {
                return;
            }
        }

        sender.send(vec![Key::Escape]).unwrap_or_else(|error| {
            debug!("Console already closed: {error}");
        });
    });

    receiver
}

fn show(message: &Message) {
    println!("{} {}", message.direction, message.text.trim_end());
}
