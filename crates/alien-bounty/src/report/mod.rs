mod views;

use crate::bounty::RewardResult;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

pub use views::{RewardRow, CSV_COLUMNS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

impl ReportFormat {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to create report {}: {source}", path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write csv report: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write json report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to flush report: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes the ranked results as delimited text, header first, in the given
/// order.
pub fn write_csv<W: Write>(writer: W, results: &[RewardResult]) -> Result<(), ReportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(CSV_COLUMNS)?;
    for result in results {
        csv_writer.serialize(RewardRow::from(result))?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(mut writer: W, results: &[RewardResult]) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut writer, results)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

pub fn write_report<W: Write>(
    writer: W,
    format: ReportFormat,
    results: &[RewardResult],
) -> Result<(), ReportError> {
    match format {
        ReportFormat::Csv => write_csv(writer, results),
        ReportFormat::Json => write_json(writer, results),
    }
}

/// Creates or truncates `path` and writes the report into it.
pub fn write_report_to_path<P: AsRef<Path>>(
    path: P,
    format: ReportFormat,
    results: &[RewardResult],
) -> Result<(), ReportError> {
    let path = path.as_ref();
    let file = std::fs::File::create(path).map_err(|source| ReportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_report(std::io::BufWriter::new(file), format, results)?;
    info!(
        rows = results.len(),
        format = format.label(),
        path = %path.display(),
        "bounty report written"
    );
    Ok(())
}
