//! Maps one invocation's options onto hosts file operations.

use std::io::Write;

use tracing::debug;

use crate::config::Options;
use crate::entry::Entry;
use crate::error::Result;
use crate::export::export;
use crate::hosts::{HostsFile, Selection};

/// What to do with the entries a search matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAction {
    /// Print each match's canonical form.
    Print,
    Remove,
    Enable,
    Disable,
    Export,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Search { query: String, action: SearchAction },
    Export,
}

/// Outcome of [`run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Done,
    /// No actionable option was given; the caller should print usage.
    NoCommand,
}

impl Command {
    /// Pick the single command `options` asks for.
    ///
    /// `add` wins over everything else. With `search`, the first of
    /// remove/enable/disable/export that is set picks the action.
    pub fn from_options(options: &Options) -> Option<Command> {
        if let Some(spec) = non_empty(&options.add) {
            return Some(Command::Add(spec.to_string()));
        }
        if let Some(query) = non_empty(&options.search) {
            let action = if options.remove {
                SearchAction::Remove
            } else if options.enable {
                SearchAction::Enable
            } else if options.disable {
                SearchAction::Disable
            } else if options.export {
                SearchAction::Export
            } else {
                SearchAction::Print
            };
            return Some(Command::Search {
                query: query.to_string(),
                action,
            });
        }
        if options.export {
            return Some(Command::Export);
        }
        None
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Open the configured hosts file, load it and run the requested command.
pub fn run(options: &Options, out: &mut impl Write) -> Result<Status> {
    let Some(command) = Command::from_options(options) else {
        return Ok(Status::NoCommand);
    };
    debug!(?command, path = %options.config.display(), "running command");

    let mut hosts = HostsFile::open(&options.config)?;
    hosts.load()?;
    execute(&mut hosts, &command, out)?;
    hosts.close();
    Ok(Status::Done)
}

/// Run `command` against an already loaded hosts file, writing output to `out`.
pub fn execute(hosts: &mut HostsFile, command: &Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Add(spec) => {
            let entry = hosts.add(spec)?;
            writeln!(out, "{}", entry.raw())?;
        }
        Command::Export => {
            writeln!(out, "{}", export(hosts.entries())?)?;
        }
        Command::Search { query, action } => {
            let matches = hosts.search(query);
            let selection = Selection::from(matches.as_slice());
            match action {
                SearchAction::Print => print_raw(out, &matches)?,
                SearchAction::Export => writeln!(out, "{}", export(&matches)?)?,
                SearchAction::Remove => print_raw(out, &hosts.remove(&selection)?)?,
                SearchAction::Enable => print_raw(out, &hosts.enable(&selection)?)?,
                SearchAction::Disable => print_raw(out, &hosts.disable(&selection)?)?,
            }
        }
    }
    Ok(())
}

fn print_raw(out: &mut impl Write, entries: &[Entry]) -> Result<()> {
    for entry in entries {
        writeln!(out, "{}", entry.raw())?;
    }
    Ok(())
}
