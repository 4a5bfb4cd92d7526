#[macro_use]
extern crate log;

use std::io;
use std::process;
use std::time::Duration;

use clap::Parser;
use tokio_util::sync::CancellationToken;

use pubsub_admin::PubSubBackend;
use topic_lister::{ConfigError, Lister, ListerConfig, ListerError, OutputFormat};

/// Periodically lists the topics of a Google Cloud Pub/Sub project.
#[derive(Debug, Parser)]
#[command(name = "topic-lister", version)]
struct Cli {
    /// Project whose topics are listed
    #[arg(long, env = "GOOGLE_CLOUD_PROJECT")]
    project: String,

    /// Pause between two passes, in milliseconds
    #[arg(long, env = "TOPIC_LISTER_INTERVAL_MS", default_value_t = 1000)]
    interval_ms: u64,

    /// Topics fetched per page
    #[arg(long, env = "TOPIC_LISTER_PAGE_SIZE", value_parser = clap::value_parser!(i32).range(1..))]
    page_size: Option<i32>,

    /// Pub/Sub endpoint override, e.g. a regional endpoint
    #[arg(long, env = "PUBSUB_ENDPOINT")]
    endpoint: Option<String>,

    /// Output format: text or json
    #[arg(long, env = "TOPIC_LISTER_FORMAT", default_value = "text")]
    format: OutputFormat,

    /// List the topics once and exit
    #[arg(long)]
    once: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("{}: {}", .0.context(), .0)]
    Lister(#[from] ListerError),
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = ListerConfig::new(cli.project)
        .with_interval(Duration::from_millis(cli.interval_ms))
        .with_format(cli.format);
    let backend = PubSubBackend::new()
        .with_endpoint(cli.endpoint)
        .with_page_size(cli.page_size);
    let lister = Lister::new(backend, config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.once {
        let summary = lister.run_pass(&mut out).await?;
        info!("listed {} topics", summary.topics);
        return Ok(());
    }

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("interrupt received, stopping");
                on_interrupt.cancel();
            }
            Err(e) => warn!("unable to listen for interrupts: {}", e),
        }
    });

    lister.run(&mut out, &cancel).await?;

    Ok(())
}
