//! Error type shared by the natpass library.

use std::path::PathBuf;

use thiserror::Error;

use crate::list::FieldId;

#[derive(Debug, Error)]
pub enum Error {
    /// A record could not be turned into a field, or a field was
    /// reconfigured with a record of a different kind.
    #[error("invalid field configuration: {0}")]
    InvalidConfig(String),

    /// No saved configuration exists yet.
    #[error("no saved configuration at {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The saved configuration is not valid JSON or lacks the `inputs` key.
    #[error("malformed configuration in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no field with id {0}")]
    UnknownField(FieldId),
}

pub type Result<T> = std::result::Result<T, Error>;
