//! CLI entry point for issuecast.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. Registry construction and dispatch live in `issuecast-app`.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use issuecast_app::{
    DispatchOutcome, FaultPolicy, SinkRegistry, build_registry, dispatch_all, known_sink_ids,
    load_report,
};
use issuecast_dispatch::{LogDestination, WriteLog};
use issuecast_settings::{SinksConfigV1, active_sink_ids, parse_config_toml};
use issuecast_types::ClassifiedReport;

#[derive(Parser, Debug)]
#[command(
    name = "issuecast",
    version,
    about = "Notify configured sinks with classified static-analysis reports"
)]
struct Cli {
    /// Path to issuecast config TOML.
    #[arg(long, default_value = "issuecast.toml")]
    config: Utf8PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Dispatch a classified report to every configured sink.
    Dispatch {
        /// Path to the classified report JSON.
        #[arg(long, default_value = "artifacts/issuecast/report.json")]
        report: Utf8PathBuf,

        /// Where to write the run log (defaults to stdout).
        #[arg(long)]
        log_out: Option<Utf8PathBuf>,

        /// Fault handling across sinks (isolate|fail-fast).
        #[arg(long, default_value = "isolate")]
        fault_policy: String,
    },

    /// List known sinks and whether the config enables them.
    Sinks,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = read_config(&cli.config)?;

    match cli.cmd {
        Commands::Dispatch {
            ref report,
            ref log_out,
            ref fault_policy,
        } => cmd_dispatch(&cfg, report, log_out.as_deref(), fault_policy),
        Commands::Sinks => cmd_sinks(&cfg),
    }
}

fn read_config(path: &Utf8PathBuf) -> anyhow::Result<SinksConfigV1> {
    match std::fs::read_to_string(path) {
        Ok(text) => parse_config_toml(&text).with_context(|| format!("in config {path}")),
        // No config file means no sinks configured; not an error.
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(SinksConfigV1::default()),
        Err(err) => Err(err).with_context(|| format!("read config {path}")),
    }
}

fn cmd_dispatch(
    cfg: &SinksConfigV1,
    report_path: &Utf8PathBuf,
    log_out: Option<&camino::Utf8Path>,
    fault_policy: &str,
) -> anyhow::Result<()> {
    let policy = parse_fault_policy(fault_policy)?;
    let registry = build_registry(cfg)?;

    if registry.is_empty() {
        eprintln!("issuecast: no sinks configured, nothing to dispatch");
        return Ok(());
    }

    let report = load_report(report_path)?;

    let outcome = match log_out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
            }
            let file = std::fs::File::create(path).with_context(|| format!("create log {path}"))?;
            let mut log = WriteLog::new(file);
            run_dispatch(&report, &registry, &mut log, policy)?
        }
        None => {
            let mut log = WriteLog::new(std::io::stdout().lock());
            run_dispatch(&report, &registry, &mut log, policy)?
        }
    };

    if !outcome.is_clean() {
        for failure in outcome.failures {
            eprintln!("issuecast: {:#}", anyhow::Error::new(failure));
        }
        std::process::exit(2);
    }

    Ok(())
}

fn run_dispatch(
    report: &ClassifiedReport,
    registry: &SinkRegistry,
    log: &mut dyn LogDestination,
    policy: FaultPolicy,
) -> anyhow::Result<DispatchOutcome> {
    Ok(dispatch_all(report, registry, log, policy)?)
}

fn cmd_sinks(cfg: &SinksConfigV1) -> anyhow::Result<()> {
    let active = active_sink_ids(cfg);
    for id in known_sink_ids() {
        let state = if active.iter().any(|a| a == id) {
            "enabled"
        } else {
            "disabled"
        };
        println!("{id}\t{state}");
    }
    Ok(())
}

fn parse_fault_policy(v: &str) -> anyhow::Result<FaultPolicy> {
    match v {
        "isolate" => Ok(FaultPolicy::Isolate),
        "fail-fast" => Ok(FaultPolicy::FailFast),
        other => anyhow::bail!("unknown fault policy: {other} (expected isolate|fail-fast)"),
    }
}
