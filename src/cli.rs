//! CLI definitions and command routing.

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use crate::command::{self, Status};
use crate::config::Options;
use crate::platform;

/// Exit code when no actionable flag was given.
pub const USAGE_EXIT_CODE: i32 = 2;

const EXAMPLES: &str = "\
Examples:
  hostman -search example
  hostman -search example -export
  hostman -search example -remove
  hostman -search 127.0.0.1 -enable
  hostman -search 127.0.0.1 -disable
  hostman -add 127.0.0.1@example.com
  hostman -add 127.0.0.1@example.com,example.org
  hostman -add 127.0.0.1@example.com,example.org,example.net
  hostman -export (default: /etc/hosts)
  hostman -config /tmp/hosts -export";

#[derive(Parser, Debug)]
#[command(name = "hostman")]
#[command(about = "Hosts Manager: search, add, enable, disable, remove and export hosts file entries")]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Absolute path of the hosts file
    #[arg(
        long,
        value_name = "PATH",
        env = "HOSTMAN_HOSTS_FILE",
        default_value_os_t = platform::default_hosts_path(),
        allow_hyphen_values = true
    )]
    pub config: PathBuf,

    /// Add new entry to the hosts file
    #[arg(long, value_name = "ADDR@DOMAIN[,ALIAS...]", allow_hyphen_values = true)]
    pub add: Option<String>,

    /// Search address or domain in the hosts file
    #[arg(long, value_name = "QUERY", allow_hyphen_values = true)]
    pub search: Option<String>,

    /// Enable entries from the hosts file (with --search)
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub enable: bool,

    /// Disable entries from the hosts file (with --search)
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub disable: bool,

    /// Remove entries from the hosts file (with --search)
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub remove: bool,

    /// List entries from the hosts file
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub export: bool,
}

impl From<Cli> for Options {
    fn from(cli: Cli) -> Self {
        Options {
            config: cli.config,
            add: cli.add,
            search: cli.search,
            enable: cli.enable,
            disable: cli.disable,
            remove: cli.remove,
            export: cli.export,
        }
    }
}

/// Flags that may be written with a single dash (`-add`), as well as `--add`.
const LONG_FLAGS: &[&str] = &[
    "config", "add", "search", "enable", "disable", "remove", "export", "help",
];

/// Flags whose value may follow as a separate argument.
const VALUE_FLAGS: &[&str] = &["config", "add", "search"];

/// Rewrite `-flag` / `-flag=value` to `--flag` / `--flag=value` for known flags.
/// The argument after a value flag is left alone, so `-search -remove` still
/// searches for `-remove`. Boolean flags take an optional `=true` / `=false`.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut value_next = false;

    for (i, arg) in args.into_iter().map(Into::<OsString>::into).enumerate() {
        if i == 0 || value_next {
            value_next = false;
            out.push(arg);
            continue;
        }
        let Some(s) = arg.to_str().map(str::to_owned) else {
            out.push(arg);
            continue;
        };
        let (name, has_value) = match s.trim_start_matches('-').split_once('=') {
            Some((name, _)) => (name, true),
            None => (s.trim_start_matches('-'), false),
        };
        let dashes = s.len() - s.trim_start_matches('-').len();
        if !(1..=2).contains(&dashes) || !LONG_FLAGS.contains(&name) {
            out.push(arg);
            continue;
        }
        value_next = !has_value && VALUE_FLAGS.contains(&name);
        if dashes == 1 {
            out.push(OsString::from(format!("-{s}")));
        } else {
            out.push(arg);
        }
    }
    out
}

/// Run CLI and dispatch to the command surface. Returns the process exit code.
pub fn run() -> Result<i32> {
    crate::logging::init();
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    let options = Options::from(cli);

    let mut out = std::io::stdout().lock();
    let status = command::run(&options, &mut out)
        .with_context(|| format!("hosts file {}", options.config.display()))?;
    out.flush().context("flush stdout")?;
    drop(out);

    match status {
        Status::Done => Ok(0),
        Status::NoCommand => {
            Cli::command().print_help().context("print usage")?;
            Ok(USAGE_EXIT_CODE)
        }
    }
}
