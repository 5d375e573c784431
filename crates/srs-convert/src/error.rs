use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = ConvertError> = std::result::Result<T, E>;

/// Per-file conversion errors. All of these are caught at the directory
/// walker boundary and folded into the batch report; none of them abort
/// a batch.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("no rules found in {path}")]
    EmptyRules { path: PathBuf },

    #[error("serialize {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("io {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
