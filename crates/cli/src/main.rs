mod cli;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use valet_core::{
    builtin_rules, load_config, validate_config, Config, FsMetadataSource, FsMover,
    HttpPageFetcher, RuleEngine, Runner,
};

use cli::Cli;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Cli::parse();

    // Load configuration
    let config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            load_config(path).with_context(|| format!("Failed to load config from {:?}", path))?
        }
        None => Config::default(),
    };
    validate_config(&config).context("Configuration validation failed")?;

    // CLI arguments override config file values, which override platform
    // defaults
    let root = resolve_root(&args, &config)?;
    let dest = resolve_dest(&args, &config)?;
    let unknown_category = args
        .unknown
        .unwrap_or_else(|| config.dest.unknown_category.clone());
    let overwrite = args.overwrite || config.mover.overwrite;

    let fetcher = Arc::new(HttpPageFetcher::new(&config.fetcher));
    let engine = RuleEngine::new(builtin_rules(fetcher), unknown_category);

    info!(
        root = %root.display(),
        dest = %dest.display(),
        rules = engine.rule_count(),
        "Starting triage run"
    );

    let metadata = Arc::new(FsMetadataSource::new(root.clone()));
    let runner = Runner::new(root, dest, engine, metadata, Arc::new(FsMover::new()))
        .with_overwrite(overwrite);

    let report = runner.run().await.context("Triage run failed")?;

    info!(
        placed = report.placed,
        ignored = report.ignored,
        failed = report.failed,
        "Triage finished"
    );

    if report.has_failures() {
        bail!("{} of {} files failed", report.failed, report.total());
    }

    Ok(())
}

fn resolve_root(args: &Cli, config: &Config) -> Result<PathBuf> {
    if let Some(root) = args.root.clone().or_else(|| config.source.root.clone()) {
        return Ok(root);
    }
    match dirs::download_dir() {
        Some(dir) => Ok(dir),
        None => bail!("No source directory given and no platform Downloads directory found"),
    }
}

fn resolve_dest(args: &Cli, config: &Config) -> Result<PathBuf> {
    if let Some(dest) = args.dest.clone().or_else(|| config.dest.dir.clone()) {
        return Ok(dest);
    }
    match dirs::home_dir() {
        Some(dir) => Ok(dir.join("torrents")),
        None => bail!("No destination directory given and no home directory found"),
    }
}
