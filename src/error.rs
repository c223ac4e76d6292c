//! Error types for the solar schools dashboard.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the two source tables.
///
/// A failure on either source is fatal for the dashboard; the message is
/// surfaced to the user as-is and nothing is retried.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read a local CSV file.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to build the async runtime used for the concurrent fetch.
    #[error("failed to start runtime: {source}")]
    Runtime { source: std::io::Error },

    /// The HTTP request itself failed (connection, DNS, body read).
    #[error("request to '{url}' failed: {source}")]
    Request { url: String, source: reqwest::Error },

    /// The server answered with a non-success status.
    #[error("failed to load '{url}' ({status})")]
    HttpStatus { url: String, status: u16 },
}

/// Errors that can occur when exporting the summary table.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to flush data to the file.
    #[error("failed to write data: {message}")]
    WriteFailed { message: String },

    /// Failed to serialize the summary to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV records.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}
