//! lia-finder: binary entrypoint.
//! Picks one of three modes (monitor, outreach, daemon) from the command line,
//! or asks on stdin when none is given.

use std::io::{self, IsTerminal};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lia_finder::cli::{prompt_mode, Cli, Command, DaemonArgs, MonitorArgs, OutreachArgs};
use lia_finder::config::outreach::{load_companies, load_profile};
use lia_finder::ingest::scheduler::{run_every, DaemonCfg};
use lia_finder::pipeline::{build_providers, run_monitor};
use lia_finder::{outreach, report, AppConfig};

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lia_finder=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(io::stderr))
        .init();
}

fn load_config(path: &Path) -> Result<AppConfig> {
    AppConfig::load_from_file(path).with_context(|| format!("loading {}", path.display()))
}

/// One monitor pass. The credential check happens before any request.
async fn monitor_once(config_path: &Path, top: Option<usize>) -> Result<()> {
    let cfg = load_config(config_path)?;
    let providers = build_providers().context("building search providers")?;
    let summary = run_monitor(&cfg, &providers).await?;

    let top_n = top.unwrap_or(cfg.output.preview_limit);
    print!("{}", report::render_summary(&summary, top_n));
    Ok(())
}

async fn run_outreach(config_path: &Path, args: OutreachArgs) -> Result<()> {
    let cfg = load_config(config_path)?;
    let companies = load_companies(&args.companies)?;
    let profile = load_profile(&args.profile)?;

    let packs = outreach::generate_all(&cfg, &companies, &profile, args.mode)?;
    for p in &packs {
        println!("Generated outreach pack for: {} -> {}", p.company, p.folder.display());
    }
    if packs.is_empty() {
        println!("No companies with a name in {}.", args.companies.display());
    }
    Ok(())
}

async fn run_daemon(config_path: &Path, args: DaemonArgs) -> Result<()> {
    // A broken config is fatal here, not per run.
    let cfg = load_config(config_path)?;
    let secs = cfg.daemon_interval_secs(args.interval_secs)?;
    tracing::info!(interval_secs = secs, "daemon mode started");

    let outcome =
        run_every(DaemonCfg::every_secs(secs), |_run| monitor_once(config_path, args.top)).await;
    tracing::info!(runs = outcome.runs, failures = outcome.failures, "daemon stopped");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env for JOBTECH_API_KEY; a missing file is fine.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    let command = match cli.command {
        Some(c) => c,
        None if io::stdin().is_terminal() => {
            match prompt_mode(io::stdin().lock(), io::stdout())? {
                Some(c) => c,
                None => return Ok(()),
            }
        }
        None => Command::Monitor(MonitorArgs::default()),
    };

    match command {
        Command::Monitor(args) => monitor_once(&cli.config, args.top).await,
        Command::Outreach(args) => run_outreach(&cli.config, args).await,
        Command::Daemon(args) => run_daemon(&cli.config, args).await,
    }
}
