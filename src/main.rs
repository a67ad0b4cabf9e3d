use cdg::cli::{Cli, Commands};
use cdg::cli_handlers;
use clap::Parser;
use std::process;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Order { file, class, json } => cli_handlers::handle_order(&file, &class, json),
        Commands::Graph { file, json } => cli_handlers::handle_graph(&file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
