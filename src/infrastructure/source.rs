//! Record sources: where the header and data rows come from.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use tracing::{debug, instrument};

use crate::domain::MAX_ROWS;
use crate::infrastructure::{InfraError, InfraResult};

/// Header line plus data rows, as handed to the analysis core.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordInput {
    pub header: String,
    pub rows: Vec<String>,
}

/// Supplier of raw records.
pub trait RecordSource {
    fn read_records(&self) -> InfraResult<RecordInput>;
}

/// Comma separated file on disk.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for CsvFileSource {
    /// Reads at most one row past [`MAX_ROWS`], enough for the parser to
    /// reject an oversized file without reading it to the end.
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    fn read_records(&self) -> InfraResult<RecordInput> {
        if !self.path.exists() {
            return Err(InfraError::SourceNotFound(self.path.clone()));
        }
        let file = File::open(&self.path)
            .map_err(|e| InfraError::io(format!("open {}", self.path.display()), e))?;
        let mut lines = BufReader::new(file).lines();

        let header = lines
            .next()
            .ok_or_else(|| InfraError::EmptySource(self.path.clone()))?
            .map_err(|e| InfraError::io(format!("read {}", self.path.display()), e))?;

        let rows = lines
            .take(MAX_ROWS + 1)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| InfraError::io(format!("read {}", self.path.display()), e))?;

        debug!(rows = rows.len(), "records read");
        Ok(RecordInput { header, rows })
    }
}
