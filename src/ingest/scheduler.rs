// src/ingest/scheduler.rs
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use metrics::counter;

#[derive(Clone, Copy, Debug)]
pub struct DaemonCfg {
    pub interval: Duration,
    /// Stop after this many runs. `None` loops until the process is killed.
    pub max_runs: Option<usize>,
}

impl DaemonCfg {
    pub fn every_secs(secs: u64) -> Self {
        Self {
            interval: Duration::from_secs(secs),
            max_runs: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DaemonReport {
    pub runs: usize,
    pub failures: usize,
}

/// Run `job` now, then again after every `interval`.
///
/// A failing run is logged and counted; the loop carries on with the next
/// interval. Nothing is retried early.
pub async fn run_every<F, Fut, T, E>(cfg: DaemonCfg, mut job: F) -> DaemonReport
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut report = DaemonReport::default();
    loop {
        let run = report.runs + 1;
        tracing::info!(target: "daemon", run, "pipeline run starting");

        match job(run).await {
            Ok(_) => {
                counter!("daemon_runs_total").increment(1);
                tracing::info!(target: "daemon", run, "pipeline run finished");
            }
            Err(e) => {
                report.failures += 1;
                counter!("daemon_failures_total").increment(1);
                tracing::warn!(target: "daemon", run, error = %e, "pipeline run failed; waiting for next interval");
            }
        }
        report.runs = run;

        if cfg.max_runs.is_some_and(|max| report.runs >= max) {
            return report;
        }

        let next = chrono::Utc::now()
            + chrono::Duration::from_std(cfg.interval).unwrap_or_else(|_| chrono::Duration::zero());
        tracing::info!(target: "daemon", next_run = %next.to_rfc3339(), "sleeping");
        tokio::time::sleep(cfg.interval).await;
    }
}
