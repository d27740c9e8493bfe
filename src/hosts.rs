//! Hosts file document: the ordered entries of one file plus its open handle.
//!
//! Every mutation rewrites the whole file through the held handle. Lines the
//! codec rejects (blank lines, `# ` comments, lines with fewer than two
//! fields or with malformed fields) are skipped on load and therefore dropped
//! on the next rewrite.

use std::collections::HashSet;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info, trace};

use crate::entry::Entry;
use crate::error::{HostsError, Result};

/// `ADDR@DOMAIN[,ALIAS...]` as accepted by [`HostsFile::add`].
static ADD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9a-f:.]{7,39})@(\S+)$").expect("add pattern is a valid regex")
});

/// Set of canonical `raw` keys that remove/enable/disable match against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    raws: HashSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: &Entry) {
        self.raws.insert(entry.raw().to_string());
    }

    pub fn contains(&self, raw: &str) -> bool {
        self.raws.contains(raw)
    }

    pub fn len(&self) -> usize {
        self.raws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raws.is_empty()
    }
}

impl<'a> FromIterator<&'a Entry> for Selection {
    fn from_iter<I: IntoIterator<Item = &'a Entry>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for entry in iter {
            selection.insert(entry);
        }
        selection
    }
}

impl From<&[Entry]> for Selection {
    fn from(entries: &[Entry]) -> Self {
        entries.iter().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Remove,
    Enable,
    Disable,
}

/// An open hosts file and its parsed entries.
#[derive(Debug)]
pub struct HostsFile {
    path: PathBuf,
    file: File,
    entries: Vec<Entry>,
}

impl HostsFile {
    /// Open an existing hosts file for reading and writing. Never creates it.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let open_err = |source| HostsError::Open {
            path: path.to_path_buf(),
            source,
        };
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(open_err)?;
        let path = fs::canonicalize(path).map_err(open_err)?;
        debug!(path = %path.display(), "opened hosts file");
        Ok(Self {
            path,
            file,
            entries: Vec::new(),
        })
    }

    /// Release the file handle.
    pub fn close(self) {
        debug!(path = %self.path.display(), "closed hosts file");
    }

    /// Read the file and replace the in-memory entries with every line that parses.
    pub fn load(&mut self) -> Result<()> {
        let mut buf = Vec::new();
        with_lock(&self.file, false, |mut file| {
            file.seek(SeekFrom::Start(0))?;
            file.read_to_end(&mut buf)?;
            Ok(())
        })?;

        let content = String::from_utf8_lossy(&buf);
        self.entries.clear();
        for (n, line) in content.lines().enumerate() {
            match Entry::parse(line) {
                Ok(entry) => self.entries.push(entry),
                Err(e) if e.is_parse_rejection() => {
                    trace!(line = n + 1, reason = %e, "skipped line")
                }
                Err(e) => return Err(e),
            }
        }
        debug!(
            path = %self.path.display(),
            entries = self.entries.len(),
            "loaded hosts file"
        );
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose canonical form contains `query`, in file order.
    pub fn search(&self, query: &str) -> Vec<Entry> {
        self.entries
            .iter()
            .filter(|e| e.raw().contains(query))
            .cloned()
            .collect()
    }

    /// True if an entry with the same canonical form exists, enabled or not.
    pub fn already_exists(&self, entry: &Entry) -> bool {
        self.entries.iter().any(|e| e.raw() == entry.raw())
    }

    /// Add an entry from `ADDR@DOMAIN[,ALIAS...]` and rewrite the file.
    pub fn add(&mut self, spec: &str) -> Result<Entry> {
        if !ADD_PATTERN.is_match(spec) {
            return Err(HostsError::BadFormat(spec.to_string()));
        }
        let line = spec.replacen('@', "\t", 1).replace(',', " ");
        let entry = Entry::parse(&line)?;

        if self.already_exists(&entry) {
            return Err(HostsError::Duplicate(entry.raw().to_string()));
        }

        self.entries.push(entry.clone());
        self.write()?;
        info!(entry = entry.raw(), "added entry");
        Ok(entry)
    }

    /// Drop every selected entry and rewrite the file. Returns the removed entries.
    pub fn remove(&mut self, selection: &Selection) -> Result<Vec<Entry>> {
        self.apply(selection, Action::Remove)
    }

    /// Clear the disabled flag on selected entries and rewrite the file.
    pub fn enable(&mut self, selection: &Selection) -> Result<Vec<Entry>> {
        self.apply(selection, Action::Enable)
    }

    /// Set the disabled flag on selected entries and rewrite the file.
    pub fn disable(&mut self, selection: &Selection) -> Result<Vec<Entry>> {
        self.apply(selection, Action::Disable)
    }

    /// Copy of `entry` without `alias`. The document is not touched.
    pub fn remove_alias(entry: &Entry, alias: &str) -> Entry {
        entry.without_alias(alias)
    }

    /// Serialize every entry and replace the file contents.
    pub fn write(&mut self) -> Result<()> {
        let mut content = String::new();
        for entry in &self.entries {
            content.push_str(&entry.to_string());
            content.push('\n');
        }

        with_lock(&self.file, true, |mut file| {
            file.set_len(0)?;
            file.seek(SeekFrom::Start(0))?;
            file.write_all(content.as_bytes())?;
            file.flush()
        })
        .map_err(|source| HostsError::Write {
            path: self.path.clone(),
            source,
        })?;

        debug!(
            path = %self.path.display(),
            entries = self.entries.len(),
            bytes = content.len(),
            "wrote hosts file"
        );
        Ok(())
    }

    fn apply(&mut self, selection: &Selection, action: Action) -> Result<Vec<Entry>> {
        let mut affected = Vec::new();
        let mut kept = Vec::with_capacity(self.entries.len());

        for mut entry in std::mem::take(&mut self.entries) {
            if !selection.contains(entry.raw()) {
                kept.push(entry);
                continue;
            }
            match action {
                Action::Remove => affected.push(entry),
                Action::Enable | Action::Disable => {
                    entry.set_disabled(action == Action::Disable);
                    affected.push(entry.clone());
                    kept.push(entry);
                }
            }
        }

        self.entries = kept;
        self.write()?;
        info!(action = ?action, count = affected.len(), "updated entries");
        Ok(affected)
    }
}

/// Run `f` on `file` under an advisory lock, releasing it on every path.
fn with_lock<T>(
    file: &File,
    exclusive: bool,
    f: impl FnOnce(&File) -> std::io::Result<T>,
) -> std::io::Result<T> {
    if exclusive {
        fs2::FileExt::lock_exclusive(file)?;
    } else {
        fs2::FileExt::lock_shared(file)?;
    }
    let result = f(file);
    let unlocked = fs2::FileExt::unlock(file);
    let value = result?;
    unlocked?;
    Ok(value)
}
