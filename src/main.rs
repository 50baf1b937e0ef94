//! rpcalloc CLI - deterministic RPC endpoint allocation

use clap::Parser;
use rpc_allocator::cli::{self, Cli, Commands};
use rpc_allocator::ConfigFile;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::new(filter))
        .init();

    let config_file = ConfigFile::load_default().ok().flatten();

    match &cli.command {
        Commands::Distribute(args) => cli::distribute::handle(args, config_file.as_ref(), cli.quiet),
        Commands::Merge(args) => cli::merge::handle(args, config_file.as_ref(), cli.quiet),
        Commands::Show(args) => cli::show::handle(args, config_file.as_ref()),
        Commands::Config { action } => cli::config::handle(action),
    }
}
