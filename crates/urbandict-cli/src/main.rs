use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use urbandict_config::Config;
use urbandict_core::{DictionaryLookup, Fetcher, LookupError, Response};

mod cli;
mod render;

use self::cli::{Cli, Command};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            let code = e
                .downcast_ref::<LookupError>()
                .map(LookupError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code as u8)
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    // Missing .env is fine
    let _ = dotenvy::dotenv();

    match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(Config::new()),
    }
}

fn init_tracing(config: &Config, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    init_tracing(&config, cli.verbose);

    let fetcher = Fetcher::new(&config.api)?;
    tracing::debug!(base_url = %config.api.base_url, "fetcher ready");

    let mut response = lookup(&fetcher, &cli.command).await?;

    let view = cli.command.view();
    view.apply(&mut response);

    if view.json {
        println!("{}", render::render_json(&response)?);
    } else {
        print!("{}", render::render_text(&response));
    }

    Ok(())
}

async fn lookup(
    dictionary: &dyn DictionaryLookup,
    command: &Command,
) -> Result<Response, LookupError> {
    match command {
        Command::Define { term, .. } => dictionary.define(term).await,
        Command::Id { defid, .. } => dictionary.define_by_id(*defid).await,
        Command::Random { .. } => dictionary.random().await,
    }
}
