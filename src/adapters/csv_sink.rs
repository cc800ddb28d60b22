//! CSV record sink adapter.
//!
//! Implements [`RecordSink`] with the `csv` crate.  Rows use minimal
//! quoting and CRLF terminators, which spreadsheet tools open without an
//! import dialog.  Every flush goes all the way to the disk.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::info;

use crate::app::ports::RecordSink;
use crate::error::{Error, Result};
use crate::reading::{CSV_HEADER, Reading};

/// Something that can push already-written bytes to durable storage.
pub trait SyncData {
    fn sync_data(&self) -> io::Result<()>;
}

impl SyncData for File {
    fn sync_data(&self) -> io::Result<()> {
        File::sync_data(self)
    }
}

/// In-memory buffers have nothing to sync.
impl SyncData for Vec<u8> {
    fn sync_data(&self) -> io::Result<()> {
        Ok(())
    }
}

pub struct CsvRecordSink<W: Write + SyncData> {
    writer: csv::Writer<W>,
}

impl CsvRecordSink<File> {
    /// Create (truncate) the output file.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| Error::OutputOpen {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Writing readings to {}", path.display());
        Ok(Self::from_writer(file))
    }
}

impl<W: Write + SyncData> CsvRecordSink<W> {
    pub fn from_writer(inner: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new()
                .terminator(csv::Terminator::CRLF)
                .from_writer(inner),
        }
    }

    pub fn get_ref(&self) -> &W {
        self.writer.get_ref()
    }

    /// Flush and hand back the inner writer.
    pub fn into_inner(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}

impl<W: Write + SyncData> RecordSink for CsvRecordSink<W> {
    fn write_header(&mut self) -> io::Result<()> {
        self.writer.write_record(CSV_HEADER)?;
        Ok(())
    }

    fn append(&mut self, reading: &Reading) -> io::Result<()> {
        self.writer.write_record(reading.to_record())?;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()?;
        self.writer.get_ref().sync_data()
    }
}
