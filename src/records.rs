use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{PlotError, Result};

/// One timing measurement. Fields other than `avg_time` are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Record {
    /// Average revocation time in milliseconds.
    pub avg_time: f64,
}

pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let data_format = |reason: String| PlotError::DataFormat {
        path: path.to_path_buf(),
        reason,
    };

    let file = File::open(path).map_err(|e| data_format(e.to_string()))?;
    let records: Vec<Record> =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| data_format(e.to_string()))?;

    tracing::debug!(path = %path.display(), count = records.len(), "loaded records");
    Ok(records)
}
