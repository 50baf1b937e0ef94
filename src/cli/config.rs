//! Configuration management commands

use crate::config::ConfigFile;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show config file path
    Path,

    /// Set the persisted RPC document path
    SetDocument {
        /// Document path
        path: PathBuf,
    },

    /// Show current config
    Show,
}

pub fn handle(action: &ConfigCommands) -> anyhow::Result<()> {
    match action {
        ConfigCommands::Path => {
            println!("{}", ConfigFile::default_path().display());
        }

        ConfigCommands::SetDocument { path } => {
            let mut config = ConfigFile::load_default()?.unwrap_or_default();
            config.set_document(path.clone())?;
            println!("RPC document path saved to config file.");
        }

        ConfigCommands::Show => {
            let path = ConfigFile::default_path();
            if path.exists() {
                let content = std::fs::read_to_string(&path)?;
                println!("# {}\n", path.display());
                println!("{}", content);
            } else {
                println!("No config file found at: {}", path.display());
                println!("\nCreate one with:");
                println!("  rpcalloc config set-document /path/to/rpcs.json");
            }
        }
    }

    Ok(())
}
