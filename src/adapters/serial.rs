//! Serial line source adapter.
//!
//! Implements [`LineSource`] on top of the `serialport` crate.  The port is
//! opened once, left to settle while the board reboots, and read one
//! newline-terminated line at a time through a [`BufReader`].
//!
//! The reader type is generic so tests can drive the same line framing
//! from an in-memory buffer.

use std::io::{self, BufRead, BufReader, Read};
use std::thread;

use log::info;
use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};

use crate::app::ports::LineSource;
use crate::config::LoggerConfig;
use crate::error::{Error, Result};

/// Line-oriented reader over a serial port (or any [`Read`]).
pub struct SerialLineSource<R: Read = Box<dyn SerialPort>> {
    /// `None` once the connection has been released.
    reader: Option<BufReader<R>>,
    port_name: String,
}

impl SerialLineSource {
    /// Open the configured port (8N1, no flow control) and wait out the
    /// settle delay before returning.
    pub fn open(config: &LoggerConfig) -> Result<Self> {
        let port = serialport::new(&config.port, config.baud_rate)
            .timeout(config.read_timeout())
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .open()
            .map_err(|e| Error::SerialOpen {
                port: config.port.clone(),
                source: e.into(),
            })?;

        info!(
            "Serial port {} opened at {} baud, settling for {:?}",
            config.port,
            config.baud_rate,
            config.settle_delay()
        );
        thread::sleep(config.settle_delay());

        Ok(Self::from_reader(port, config.port.clone()))
    }
}

impl<R: Read> SerialLineSource<R> {
    pub fn from_reader(reader: R, port_name: impl Into<String>) -> Self {
        Self {
            reader: Some(BufReader::new(reader)),
            port_name: port_name.into(),
        }
    }

    pub fn port_name(&self) -> &str {
        &self.port_name
    }

    pub fn is_open(&self) -> bool {
        self.reader.is_some()
    }
}

impl<R: Read> LineSource for SerialLineSource<R> {
    fn read_line(&mut self) -> io::Result<Vec<u8>> {
        let Some(reader) = self.reader.as_mut() else {
            return Err(io::Error::new(
                io::ErrorKind::NotConnected,
                format!("serial port {} already closed", self.port_name),
            ));
        };

        // Bytes consumed before a timeout stay in `buf`; a partial line is
        // returned as-is and the remainder arrives with the next read.
        let mut buf = Vec::new();
        match reader.read_until(b'\n', &mut buf) {
            Ok(_) => Ok(buf),
            Err(e) if e.kind() == io::ErrorKind::TimedOut => Ok(buf),
            Err(e) => Err(e),
        }
    }

    fn close(&mut self) {
        if self.reader.take().is_some() {
            info!("Serial connection {} closed", self.port_name);
        }
    }
}
