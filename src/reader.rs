//! Background frame reader.
//!
//! Owns the serial link for its whole lifetime: the port is opened once when
//! the reader thread starts and closed when the thread returns, whatever the
//! reason. Each iteration reads one line, shape-checks it and pushes accepted
//! frames onto the UI queue. The reader never touches display state.
//!
//! # Failure Handling
//!
//! | Condition | Action |
//! |-----------|--------|
//! | Port cannot be opened | log error, exit thread (no retry) |
//! | Read timeout | treated as an empty line, skipped silently |
//! | I/O or UTF-8 error on a line | log warning, continue |
//! | Malformed frame | skipped silently |
//! | Stop requested | exit after the current read returns |
//! | End of stream / UI gone | exit |

use std::io::{self, BufRead, BufReader, ErrorKind};
use std::string::FromUtf8Error;
use std::thread::{self, JoinHandle};

use log::{debug, error, info, warn};
use serialport::SerialPort;
use thiserror::Error;

use crate::config::{BAUD_RATE, READ_TIMEOUT};
use crate::frame::RawFrame;
use crate::queue::{FrameSender, Push};
use crate::stop::StopToken;

/// Errors raised while talking to the serial link.
#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("could not open serial port {port}: {source}")]
    Open {
        port: String,
        #[source]
        source: serialport::Error,
    },

    #[error("serial read failed: {0}")]
    Io(#[from] io::Error),

    #[error("line is not valid UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),
}

/// Counters reported when the reader exits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReaderStats {
    /// Frames handed to the UI queue.
    pub frames_queued: u64,
    /// Frames dropped because the queue was full.
    pub frames_dropped: u64,
    /// Lines lost to I/O or decode errors.
    pub read_errors: u64,
}

/// Open the sensor link with the fixed baud rate and read timeout.
pub fn open_serial(port: &str) -> Result<BufReader<Box<dyn SerialPort>>, ReaderError> {
    let link = serialport::new(port, BAUD_RATE)
        .timeout(READ_TIMEOUT)
        .open()
        .map_err(|source| ReaderError::Open { port: port.to_owned(), source })?;
    Ok(BufReader::new(link))
}

/// Start the reader thread on `port`.
///
/// Only fails if the OS refuses to create the thread. A port that cannot be
/// opened is logged from inside the thread, which then exits immediately.
pub fn spawn(port: &str, frames: FrameSender, stop: StopToken) -> io::Result<JoinHandle<ReaderStats>> {
    let port = port.to_owned();
    thread::Builder::new().name("frame-reader".into()).spawn(move || {
        let source = match open_serial(&port) {
            Ok(source) => source,
            Err(e) => {
                error!("{e}. Is the device connected?");
                return ReaderStats::default();
            }
        };
        info!("Reading gait frames from {port} at {BAUD_RATE} baud");
        FrameReader::new(source, frames, stop).run()
    })
}

/// Line-oriented reader over any buffered byte source.
pub struct FrameReader<R> {
    source: R,
    frames: FrameSender,
    stop: StopToken,
    line: Vec<u8>,
}

impl<R: BufRead> FrameReader<R> {
    pub fn new(source: R, frames: FrameSender, stop: StopToken) -> Self {
        Self { source, frames, stop, line: Vec::new() }
    }

    /// Read until stopped, the stream ends, or the UI goes away.
    pub fn run(mut self) -> ReaderStats {
        let mut stats = ReaderStats::default();

        while !self.stop.is_stopped() {
            let line = match self.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    info!("Serial stream ended");
                    break;
                }
                Err(e) => {
                    stats.read_errors += 1;
                    warn!("Serial read error: {e}");
                    continue;
                }
            };

            // The read may have blocked across a stop request
            if self.stop.is_stopped() {
                break;
            }

            let Some(frame) = RawFrame::from_line(&line) else {
                continue;
            };

            match self.frames.push(frame) {
                Push::Queued => stats.frames_queued += 1,
                Push::Dropped => stats.frames_dropped += 1,
                Push::Closed => {
                    debug!("Frame queue closed, stopping reader");
                    break;
                }
            }
        }

        stats
    }

    /// Read one line.
    ///
    /// Returns `Ok(None)` at end of stream. A timeout yields an empty line;
    /// bytes of a partially received line are discarded with it.
    fn read_line(&mut self) -> Result<Option<String>, ReaderError> {
        self.line.clear();
        match self.source.read_until(b'\n', &mut self.line) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(String::from_utf8(std::mem::take(&mut self.line))?)),
            Err(e) if matches!(e.kind(), ErrorKind::TimedOut | ErrorKind::WouldBlock) => Ok(Some(String::new())),
            Err(e) => Err(e.into()),
        }
    }
}
