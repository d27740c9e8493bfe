//! Hosts-file line codec: one text line <-> one [`Entry`].
//!
//! A data line is an address followed by a domain and any number of aliases,
//! separated by tabs or spaces. A leading `#` on the address marks the line
//! disabled; a leading `# ` (hash + space) marks a free-form comment, which is
//! rejected rather than parsed.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{HostsError, Result};

const DISABLED_MARKER: char = '#';
const COMMENT_PREFIX: &str = "# ";

/// One record of the hosts file.
///
/// Fields are private so `raw` always matches `address`, `domain` and
/// `aliases`; every mutator rebuilds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    address: String,
    domain: String,
    aliases: Vec<String>,
    disabled: bool,
    raw: String,
}

impl Entry {
    /// Build an enabled entry.
    ///
    /// Address and domain must be non-empty. No field may be empty or hold
    /// ASCII whitespace, and the address may not start with `#`.
    pub fn new(
        address: impl Into<String>,
        domain: impl Into<String>,
        aliases: Vec<String>,
    ) -> Result<Self> {
        let address = address.into();
        let domain = domain.into();
        if address.is_empty() || domain.is_empty() {
            return Err(HostsError::MissingFields);
        }
        if address.starts_with(DISABLED_MARKER) {
            return Err(HostsError::InvalidField(address));
        }
        for field in [&address, &domain].into_iter().chain(&aliases) {
            check_field(field)?;
        }
        let raw = canonical(&address, &domain, &aliases);
        Ok(Self {
            address,
            domain,
            aliases,
            disabled: false,
            raw,
        })
    }

    /// Parse one line of a hosts file.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        if line.is_empty() {
            return Err(HostsError::EmptyLine);
        }
        if line.starts_with(COMMENT_PREFIX) {
            return Err(HostsError::SuperfluousComment);
        }

        let line = line.replace(' ', "\t");
        let mut fields = line.split('\t').filter(|f| !f.is_empty());

        let (Some(address), Some(domain)) = (fields.next(), fields.next()) else {
            return Err(HostsError::MissingFields);
        };
        let aliases: Vec<String> = fields.map(String::from).collect();

        let (address, disabled) = match address.strip_prefix(DISABLED_MARKER) {
            Some(rest) => (rest, true),
            None => (address, false),
        };

        let mut entry = Self::new(address, domain, aliases)?;
        entry.disabled = disabled;
        Ok(entry)
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Canonical `address TAB domain[ SPACE alias...]`, never prefixed with `#`.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Copy of this entry with every occurrence of `alias` dropped from its aliases.
    pub fn without_alias(&self, alias: &str) -> Entry {
        let aliases: Vec<String> = self
            .aliases
            .iter()
            .filter(|a| a.as_str() != alias)
            .cloned()
            .collect();
        Entry {
            raw: canonical(&self.address, &self.domain, &aliases),
            address: self.address.clone(),
            domain: self.domain.clone(),
            aliases,
            disabled: self.disabled,
        }
    }
}

/// Serialized line without the trailing newline.
impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.disabled {
            write!(f, "{DISABLED_MARKER}")?;
        }
        f.write_str(&self.raw)
    }
}

impl FromStr for Entry {
    type Err = HostsError;

    fn from_str(s: &str) -> Result<Self> {
        Entry::parse(s)
    }
}

fn check_field(field: &str) -> Result<()> {
    if field.is_empty() || field.contains(|c: char| c.is_ascii_whitespace()) {
        return Err(HostsError::InvalidField(field.to_string()));
    }
    Ok(())
}

fn canonical(address: &str, domain: &str, aliases: &[String]) -> String {
    let mut raw = format!("{address}\t{domain}");
    if !aliases.is_empty() {
        raw.push(' ');
        raw.push_str(&aliases.join(" "));
    }
    raw
}
