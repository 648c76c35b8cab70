// src/cli.rs
use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::outreach::{DEFAULT_COMPANIES_PATH, DEFAULT_PROFILE_PATH};
use crate::config::DEFAULT_CONFIG_PATH;
use crate::outreach::OutreachMode;

#[derive(Parser, Debug)]
#[command(
    name = "lia-finder",
    about = "Find LIA internship listings for a Java track and draft outreach documents",
    version
)]
pub struct Cli {
    /// Path to the YAML (or .toml) configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch, score and report listings once
    Monitor(MonitorArgs),
    /// Generate outreach documents for every company in companies.yaml
    Outreach(OutreachArgs),
    /// Re-run the monitor on a fixed interval until stopped
    Daemon(DaemonArgs),
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct MonitorArgs {
    /// Rows in the console preview (defaults to output.preview_limit)
    #[arg(long)]
    pub top: Option<usize>,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct OutreachArgs {
    #[arg(long, value_enum, default_value_t = OutreachMode::Cold)]
    pub mode: OutreachMode,
    #[arg(long, default_value = DEFAULT_COMPANIES_PATH)]
    pub companies: PathBuf,
    #[arg(long, default_value = DEFAULT_PROFILE_PATH)]
    pub profile: PathBuf,
}

impl Default for OutreachArgs {
    fn default() -> Self {
        Self {
            mode: OutreachMode::Cold,
            companies: PathBuf::from(DEFAULT_COMPANIES_PATH),
            profile: PathBuf::from(DEFAULT_PROFILE_PATH),
        }
    }
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct DaemonArgs {
    /// Seconds between runs (defaults to daemon.interval_secs)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_secs: Option<u64>,
    #[arg(long)]
    pub top: Option<usize>,
}

/// Map one line of prompt input to a command. Accepts the menu number or name.
pub fn parse_choice(input: &str) -> Option<Command> {
    match input.trim().to_ascii_lowercase().as_str() {
        "1" | "monitor" | "m" => Some(Command::Monitor(MonitorArgs::default())),
        "2" | "outreach" | "o" => Some(Command::Outreach(OutreachArgs::default())),
        "3" | "daemon" | "d" => Some(Command::Daemon(DaemonArgs::default())),
        _ => None,
    }
}

/// Ask on `output` until a valid choice is read from `input`.
/// Returns `None` on end of input.
pub fn prompt_mode<R: BufRead, W: Write>(mut input: R, mut output: W) -> std::io::Result<Option<Command>> {
    loop {
        writeln!(output, "Choose a mode:")?;
        writeln!(output, "  1) monitor   - fetch and report new listings once")?;
        writeln!(output, "  2) outreach  - generate outreach documents")?;
        writeln!(output, "  3) daemon    - monitor continuously")?;
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if let Some(cmd) = parse_choice(&line) {
            return Ok(Some(cmd));
        }
        writeln!(output, "Unknown choice {:?}.", line.trim())?;
    }
}
