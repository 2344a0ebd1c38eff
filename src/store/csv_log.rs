use anyhow::{Context, Result};
use log::info;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use crate::domain::LogRecord;
use crate::errors::log_context;

/// Append-only CSV log of tick records
#[derive(Debug, Clone)]
pub struct CsvLog {
    path: PathBuf,
}

impl CsvLog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, writing the header first for a new file
    pub fn append(&self, record: &LogRecord) -> Result<()> {
        let needs_header = self.needs_header();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| log_context("open", &self.path))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        writer
            .serialize(record)
            .with_context(|| log_context("write", &self.path))?;
        writer
            .flush()
            .with_context(|| log_context("flush", &self.path))?;

        if needs_header {
            info!("Created CSV log: {}", self.path.display());
        }
        Ok(())
    }

    fn needs_header(&self) -> bool {
        fs::metadata(&self.path)
            .map(|metadata| metadata.len() == 0)
            .unwrap_or(true)
    }
}
