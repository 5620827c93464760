use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("{url} answered with status {status}")]
    UnexpectedStatus { url: String, status: StatusCode },

    #[error("failed to read systems file {path}")]
    SystemsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid systems file {path}")]
    SystemsFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
