//! Structured listing of entries.
//!
//! Output is a pretty-printed JSON array with two-space indentation. Each
//! object carries `address`, `domain`, `aliases`, `disabled` and `raw`, in
//! that order; `aliases` is always an array.

use crate::entry::Entry;
use crate::error::Result;

pub fn export(entries: &[Entry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}
