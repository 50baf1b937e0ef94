//! Merge command - fold collected endpoints into the persisted document

use crate::config::{ConfigFile, RpcDocument};
use crate::rpc::EndpointPool;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct MergeArgs {
    /// Chain id to merge into
    #[arg(long)]
    pub chain: u64,

    /// HTTP endpoint (can be repeated)
    #[arg(long = "http", action = clap::ArgAction::Append)]
    pub http: Vec<String>,

    /// WebSocket endpoint (can be repeated; pass --ws with no value to
    /// model the WS channel without adding endpoints)
    #[arg(long = "ws", num_args = 0.., action = clap::ArgAction::Append)]
    pub ws: Option<Vec<String>>,

    /// Path of the persisted document (defaults to the configured path)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

pub fn handle(
    args: &MergeArgs,
    config_file: Option<&ConfigFile>,
    quiet: bool,
) -> anyhow::Result<()> {
    // Validation and input dedup happen at the pool boundary; the merge
    // engine itself never inspects endpoint contents
    let pool = EndpointPool::from_lists(
        args.chain,
        args.http.iter().cloned(),
        args.ws.iter().flatten().cloned(),
    )?;
    let ws = args.ws.as_ref().map(|_| pool.ws());

    let path = document_path(args.file.as_ref(), config_file);

    let mut document = RpcDocument::load_or_default(&path)?;
    document.merge(args.chain, pool.http(), ws);
    document.store(&path)?;

    if !quiet {
        if let Some(entry) = document.entry(args.chain) {
            let ws_state = match &entry.ws {
                None => "absent".to_string(),
                Some(ws) => format!("{} endpoints", ws.len()),
            };
            eprintln!(
                "Chain {}: {} HTTP endpoints, WS {}, stored in {}",
                args.chain,
                entry.http.len(),
                ws_state,
                path.display()
            );
        }
    }

    Ok(())
}

/// Resolve the document path: flag, then config file, then default
pub fn document_path(flag: Option<&PathBuf>, config_file: Option<&ConfigFile>) -> PathBuf {
    if let Some(path) = flag {
        return path.clone();
    }
    config_file
        .map(ConfigFile::document_path)
        .unwrap_or_else(ConfigFile::default_document_path)
}
