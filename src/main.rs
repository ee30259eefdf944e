mod app;
mod config;
mod lyrics;
mod web;

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing::level_filters::LevelFilter;

#[derive(Debug, Parser)]
#[command(name = "lyricgrab", version, about = "Look up song lyrics from the command line")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Log progress to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Per-request timeout in seconds (overrides the config file).
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Write the default config file and exit.
    #[arg(long)]
    init_config: bool,

    /// Song to search for, e.g. `ed sheeran shape of you`.
    #[arg(trailing_var_arg = true)]
    query: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(log_level(cli.verbose))
        .with_target(false)
        .with_level(true)
        .init();

    if cli.init_config {
        let path = config::save(&config::defaults::defaults(), cli.config.as_deref())
            .context("save config")?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let setup = || -> anyhow::Result<lyrics::Session<web::HttpFetcher>> {
        let mut cfg = config::load(cli.config.as_deref()).context("load config")?;
        if let Some(secs) = cli.timeout {
            cfg.search.timeout_secs = secs;
        }
        let fetcher = web::HttpFetcher::new(&cfg.search)?;
        lyrics::Session::new(&cfg, fetcher)
    };

    app::run(&cli.query, setup, &mut std::io::stdout(), &mut std::io::stderr())
        .await
        .context("write output")?;
    Ok(())
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::OFF,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
