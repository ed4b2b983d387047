use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use driver_resolver::config::{self, LOG_FILE_NAME, ResolverConfig};
use driver_resolver::platform::Host;
use driver_resolver::version::fetchers::HttpFetcher;
use driver_resolver::version::local::DirLister;
use driver_resolver::version::resolver::VersionResolver;
use driver_resolver::version::types::{BinaryUrl, LATEST};

/// Environment variable holding the tracing filter directive
const LOG_ENV: &str = "DRIVER_RESOLVER_LOG";

#[derive(Parser)]
#[command(name = "driver-resolver")]
#[command(version, about = "Resolve download URLs for chromedriver binaries")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file (defaults to $XDG_CONFIG_HOME/driver-resolver/config.json)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory holding already downloaded drivers
    #[arg(long, global = true, value_name = "DIR")]
    binary_dir: Option<PathBuf>,

    /// Resolve for this operating system instead of the current one
    #[arg(long, global = true)]
    os: Option<String>,

    /// Resolve for this CPU architecture instead of the current one
    #[arg(long, global = true)]
    arch: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the download URL of a driver version
    Url {
        /// Exact version, or "latest" for the Stable channel
        #[arg(default_value = LATEST)]
        version: String,
    },
    /// List archives of the legacy storage bucket usable on this host
    List {
        /// Print only the highest listed version
        #[arg(long)]
        latest: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging();

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

/// JSON logs go to a file in the data directory. When that file cannot be
/// opened, plain logs go to stderr and no guard is returned.
fn init_logging() -> Option<WorkerGuard> {
    let log_dir = config::data_dir();
    let filter = |default: &str| {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
    };

    match file_log_writer(&log_dir) {
        Ok(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter("info"))
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_ansi(false)
                        .with_writer(writer),
                )
                .init();
            Some(guard)
        }
        Err(e) => {
            tracing_subscriber::registry()
                .with(filter("warn"))
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
            warn!("{e:#}, logging to stderr");
            None
        }
    }
}

fn file_log_writer(log_dir: &Path) -> anyhow::Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(log_dir)
        .with_context(|| format!("failed to open log file in {}", log_dir.display()))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(config::config_path);
    let mut config = ResolverConfig::load(&config_path)?;
    if let Some(dir) = cli.binary_dir {
        config.binary_dir = dir;
    }

    let detected = Host::detect();
    let host = Host::new(
        cli.os.as_deref().unwrap_or(std::env::consts::OS),
        cli.arch.as_deref().unwrap_or(&detected.arch),
    );

    let fetcher = match config.request_timeout_ms {
        Some(ms) => HttpFetcher::new(Duration::from_millis(ms)),
        None => HttpFetcher::with_default_timeout(),
    }
    .context("failed to create HTTP client")?;
    let resolver = VersionResolver::new(config, host, Arc::new(fetcher), Arc::new(DirLister));

    match cli.command {
        Command::Url { version } => {
            let resolved = resolver
                .get_url(&version)
                .await
                .with_context(|| format!("failed to resolve chromedriver {version}"))?;
            print_binary_url(&resolved, cli.json)?;
        }
        Command::List { latest: true } => {
            let resolved = resolver
                .get_latest_listed()
                .await
                .context("failed to read the chromedriver bucket listing")?
                .with_context(|| {
                    format!(
                        "no chromedriver archive listed for {} {}",
                        resolver.host().os,
                        resolver.host().arch
                    )
                })?;
            print_binary_url(&resolved, cli.json)?;
        }
        Command::List { latest: false } => {
            let keys = resolver
                .get_version_list()
                .await
                .context("failed to read the chromedriver bucket listing")?;
            if cli.json {
                println!("{}", serde_json::to_string(&keys)?);
            } else {
                for key in keys {
                    println!("{key}");
                }
            }
        }
    }

    Ok(())
}

fn print_binary_url(binary: &BinaryUrl, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(binary)?);
    } else {
        println!("{} {}", binary.version, binary.url);
    }
    Ok(())
}
