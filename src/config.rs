//! Invocation options: which hosts file to work on and what to do with it.
//!
//! Built by the CLI from its flags; library callers construct it directly.

use std::path::PathBuf;

use crate::platform;

/// One invocation's worth of options. Mirrors the command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Hosts file path.
    pub config: PathBuf,
    /// `ADDR@DOMAIN[,ALIAS...]` to add.
    pub add: Option<String>,
    /// Substring query over the canonical entry form.
    pub search: Option<String>,
    pub enable: bool,
    pub disable: bool,
    pub remove: bool,
    pub export: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self::for_path(platform::default_hosts_path())
    }
}

impl Options {
    /// Options bound to `path` with no action selected.
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config: path.into(),
            add: None,
            search: None,
            enable: false,
            disable: false,
            remove: false,
            export: false,
        }
    }
}
