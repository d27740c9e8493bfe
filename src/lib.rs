//! Hostman - hosts file manager: search, add, enable, disable, remove and export entries.

pub mod cli;
pub mod command;
pub mod config;
pub mod entry;
pub mod error;
pub mod export;
pub mod hosts;
pub mod logging;
pub mod platform;

pub use entry::Entry;
pub use error::{HostsError, Result};
pub use hosts::{HostsFile, Selection};
