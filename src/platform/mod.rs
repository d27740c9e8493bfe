//! Platform defaults for the hosts file location.

use std::path::PathBuf;

#[cfg(unix)]
const SYSTEM_HOSTS_PATH: &str = "/etc/hosts";

#[cfg(windows)]
const SYSTEM_HOSTS_PATH: &str = r"C:\Windows\System32\drivers\etc\hosts";

/// System hosts file, used when no path is given.
pub fn default_hosts_path() -> PathBuf {
    PathBuf::from(SYSTEM_HOSTS_PATH)
}
