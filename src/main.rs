use clap::Parser;
use tracing_subscriber::EnvFilter;

use agentfind::{Engine, EngineConfig, Store};

mod cli;
use cli::display::{themed, BOLD, RED};
use cli::{commands, Cli, CliError, Commands};

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", themed(RED, &[BOLD], "✗"), e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `AGENTFIND_LOG`, then `RUST_LOG`, then `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("AGENTFIND_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => EngineConfig::from_path(path)?,
        None => EngineConfig::default(),
    };
    let data = cli.data.as_ref().ok_or(CliError::MissingData)?;
    let engine = Engine::with_store(Store::from_path(data, config)?);

    match cli.command {
        Commands::Search {
            query,
            filters,
            sort,
            limit,
        } => commands::search(&engine, &query, &filters, sort.as_deref(), limit, cli.json),
        Commands::Suggest { query } => commands::suggest(&engine, &query, cli.json),
        Commands::Stats { outcode } => commands::stats(&engine, &outcode, cli.json),
        Commands::Nearby { outcode, limit } => commands::nearby(&engine, &outcode, limit, cli.json),
        Commands::Show { id } => commands::show(&engine, id, cli.json),
        Commands::Info => commands::info(&engine, cli.json),
    }
}
