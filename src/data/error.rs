use std::path::PathBuf;

use thiserror::Error;

/// Failure to produce a [`LaunchDataset`](super::model::LaunchDataset) from a source file.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed Parquet: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("malformed Arrow data: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("unsupported file extension: .{extension}")]
    UnsupportedFormat { extension: String },

    #[error("required column '{column}' is missing")]
    MissingColumn { column: String },

    #[error("row {row}: payload mass '{value}' is not a non-negative number")]
    InvalidPayload { row: usize, value: String },

    #[error("row {row}: outcome class '{value}' is neither 0 nor 1")]
    InvalidOutcome { row: usize, value: String },

    #[error("row {row}: column '{column}' is empty")]
    EmptyCell { row: usize, column: String },

    #[error("dataset contains no launch records")]
    Empty,
}

/// A selection that cannot be served by the filter engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectionError {
    #[error("unknown launch site '{site}'")]
    UnknownSite { site: String },

    #[error("payload range is inverted: {low} > {high}")]
    InvertedRange { low: f64, high: f64 },
}
