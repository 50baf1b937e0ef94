//! Show command - inspect the persisted document

use crate::cli::merge::document_path;
use crate::config::{ConfigFile, RpcDocument, RpcEntry};
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct ShowArgs {
    /// Path of the persisted document (defaults to the configured path)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Show only this chain
    #[arg(long)]
    pub chain: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn handle(args: &ShowArgs, config_file: Option<&ConfigFile>) -> anyhow::Result<()> {
    let path = document_path(args.file.as_ref(), config_file);

    if !path.exists() {
        println!("No RPC document found at: {}", path.display());
        println!("\nCreate one with:");
        println!("  rpcalloc merge --chain <ID> --http <URL>");
        return Ok(());
    }

    let document = RpcDocument::load(&path)?;

    if let Some(chain_id) = args.chain {
        match document.entry(chain_id) {
            Some(entry) => {
                if args.json {
                    println!("{}", serde_json::to_string_pretty(entry)?);
                } else {
                    print_entry(entry);
                }
            }
            None => {
                println!("No entry for chain {}", chain_id);
            }
        }
        return Ok(());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else if document.is_empty() {
        println!("Document is empty: {}", path.display());
    } else {
        println!("# {}\n", path.display());
        for entry in document.entries() {
            print_entry(entry);
            println!();
        }
    }

    Ok(())
}

fn print_entry(entry: &RpcEntry) {
    println!("Chain {}", entry.chain_id);
    println!("  HTTP ({}):", entry.http.len());
    for url in &entry.http {
        println!("    {}", url);
    }
    match &entry.ws {
        None => {}
        Some(ws) if ws.is_empty() => {
            println!("  WS: (empty)");
        }
        Some(ws) => {
            println!("  WS ({}):", ws.len());
            for url in ws {
                println!("    {}", url);
            }
        }
    }
}
