//! Error kinds surfaced by the hosts-file core.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostsError {
    #[error("host entry is empty")]
    EmptyLine,

    #[error("superfluous comment")]
    SuperfluousComment,

    #[error("address and domain are required")]
    MissingFields,

    #[error("invalid host entry field: {0:?}")]
    InvalidField(String),

    #[error("invalid host entry format: {0}")]
    BadFormat(String),

    #[error("entry is already in hosts file: {0}")]
    Duplicate(String),

    #[error("cannot open hosts file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write hosts file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("export error: {0}")]
    Export(#[from] serde_json::Error),
}

impl HostsError {
    /// True for the rejections `load` skips over silently.
    pub fn is_parse_rejection(&self) -> bool {
        matches!(
            self,
            HostsError::EmptyLine
                | HostsError::SuperfluousComment
                | HostsError::MissingFields
                | HostsError::InvalidField(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, HostsError>;
