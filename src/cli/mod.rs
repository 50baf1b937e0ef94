//! CLI command modules
//!
//! Each subcommand has its own module with argument definitions and handlers.

pub mod config;
pub mod distribute;
pub mod merge;
pub mod show;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rpcalloc")]
#[command(
    version,
    about = "Deterministic RPC endpoint allocation across services with a persisted multi-chain document"
)]
#[command(after_help = r#"EXAMPLES:
    # Allocate a pool across the standard services (main, history, referral)
    rpcalloc distribute --chain 1442 \
                        --http https://rpc-1.example.org --http https://rpc-2.example.org \
                        --ws wss://rpc-1.example.org/ws

    # Include the optional broker slot, reading HTTP endpoints from a file
    rpcalloc distribute --chain 1442 --http-file endpoints.txt --broker

    # Merge newly collected endpoints into the persisted document
    rpcalloc merge --chain 1442 --http https://rpc-3.example.org -f prod.rpcs.json

    # Model a WS channel for a chain without adding endpoints yet
    rpcalloc merge --chain 1442 --ws -f prod.rpcs.json

    # Inspect the persisted document
    rpcalloc show -f prod.rpcs.json --chain 1442

CONFIG FILE:
    Default: ~/.config/rpc-allocator/config.toml
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute each service's endpoint share from a pool
    Distribute(distribute::DistributeArgs),

    /// Merge endpoints into the persisted multi-chain document
    Merge(merge::MergeArgs),

    /// Show the persisted document
    Show(show::ShowArgs),

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: config::ConfigCommands,
    },
}
