use std::path::PathBuf;

use clap::Parser;
use humantime::format_duration;
use sessionguard::model::config::CacheBackend;
use sessionguard::model::loader;
use sessionguard::Report;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Session configuration checker
#[derive(Parser, Debug)]
#[command(version = env!("CARGO_APP_VERSION"), name = "sessionguard", about, long_about = None)]
struct Args {
    /// Configuration file (yaml or json)
    #[arg(long, env, default_value = "configuration.yml")]
    config: PathBuf,
    /// Overrides session.domain from the file
    #[arg(long, env)]
    domain: Option<String>,
    /// Overrides session.secret from the file
    #[arg(long, env, hide_env_values = true)]
    secret: Option<String>,
}

fn main_int(args: Args) -> anyhow::Result<()> {
    log::info!("Starting sessionguard");
    tracing::info!(version = env!("CARGO_APP_VERSION"));
    tracing::info!(config = %args.config.display(), "cfg");

    let mut loaded = loader::load_from_path(&args.config)?;
    if let Some(domain) = args.domain {
        tracing::debug!("domain overridden from args");
        loaded.session.domain = domain;
    }
    if let Some(secret) = args.secret {
        tracing::debug!("secret overridden from args");
        loaded.session.secret = secret.into();
    }

    let report = sessionguard::check(loaded.session, loaded.unknown_keys);
    if report.validator.has_warnings() {
        for warning in report.validator.warnings() {
            tracing::warn!("{}", warning);
        }
        tracing::warn!(
            count = report.validator.warnings().len(),
            "unknown keys are ignored"
        );
    }
    if report.validator.has_errors() {
        for err in report.validator.errors() {
            tracing::error!("{}", err);
        }
        return Err(anyhow::anyhow!(
            "configuration has {} error(s)",
            report.validator.errors().len()
        ));
    }
    log_effective(&report)?;
    tracing::info!("Configuration OK");
    Ok(())
}

fn log_effective(report: &Report) -> anyhow::Result<()> {
    let session = &report.session;
    let timings = report
        .session_config()
        .ok_or_else(|| anyhow::anyhow!("session durations could not be resolved"))?;
    tracing::info!(name = session.name, domain = session.domain, "cfg");
    tracing::info!(
        expiration = format_duration(timings.expiration).to_string(),
        "cfg"
    );
    tracing::info!(
        inactivity = format_duration(timings.inactivity).to_string(),
        "cfg"
    );
    tracing::info!(
        remember_me_duration = format_duration(timings.remember_me_duration).to_string(),
        "cfg"
    );
    match session.backend() {
        CacheBackend::Local => tracing::warn!("Using in-memory session store"),
        CacheBackend::Direct(redis) => {
            tracing::info!(host = redis.host, port = redis.port, "Using redis store")
        }
        CacheBackend::Sentinel { name, .. } => {
            tracing::info!(sentinel = name, "Using redis sentinel store")
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();
    let args = Args::parse();
    if let Err(e) = main_int(args) {
        log::error!("{}", e);
        return Err(e);
    }
    Ok(())
}
