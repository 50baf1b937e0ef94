//! Distribute command - print each service's share of an endpoint pool

use crate::config::ConfigFile;
use crate::rpc::{distribute, EndpointPool, HttpService, WsService};
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct DistributeArgs {
    /// Chain id the pool belongs to
    #[arg(long)]
    pub chain: u64,

    /// HTTP endpoint (can be repeated)
    #[arg(long = "http", action = clap::ArgAction::Append)]
    pub http: Vec<String>,

    /// WebSocket endpoint (can be repeated)
    #[arg(long = "ws", action = clap::ArgAction::Append)]
    pub ws: Vec<String>,

    /// Load HTTP endpoints from file (one URL per line, # comments)
    #[arg(long)]
    pub http_file: Option<PathBuf>,

    /// Load WebSocket endpoints from file
    #[arg(long)]
    pub ws_file: Option<PathBuf>,

    /// Include the optional broker HTTP slot
    #[arg(long)]
    pub broker: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn handle(
    args: &DistributeArgs,
    config_file: Option<&ConfigFile>,
    quiet: bool,
) -> anyhow::Result<()> {
    let include_broker = args.broker
        || config_file.is_some_and(|c| c.settings.include_broker);

    let mut pool = EndpointPool::new(args.chain);
    for url in collect_urls(&args.http, args.http_file.as_deref())? {
        pool.add_http(url)?;
    }
    for url in collect_urls(&args.ws, args.ws_file.as_deref())? {
        pool.add_ws(url)?;
    }

    if pool.is_empty() {
        anyhow::bail!("No endpoints supplied. Use --http/--ws or --http-file/--ws-file");
    }

    let http_slots = HttpService::slots(include_broker);
    let ws_slots = WsService::SLOTS;

    if args.json {
        let http: serde_json::Map<String, serde_json::Value> = http_slots
            .iter()
            .map(|s| {
                let share = distribute(s.index(), http_slots.len(), pool.http());
                (s.label().to_string(), serde_json::json!(share))
            })
            .collect();
        let ws: serde_json::Map<String, serde_json::Value> = ws_slots
            .iter()
            .map(|s| {
                let share = distribute(s.index(), ws_slots.len(), pool.ws());
                (s.label().to_string(), serde_json::json!(share))
            })
            .collect();

        let out = serde_json::json!({
            "chainId": args.chain,
            "HTTP": http,
            "WS": ws,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if !quiet {
        eprintln!(
            "Allocating {} HTTP and {} WS endpoints for chain {}",
            pool.http().len(),
            pool.ws().len(),
            args.chain
        );
    }

    println!("HTTP ({} services):", http_slots.len());
    for service in http_slots {
        let share = distribute(service.index(), http_slots.len(), pool.http());
        println!("  {:<9} {}", format!("{}:", service), format_share(&share));
    }

    println!("\nWS ({} services):", ws_slots.len());
    for service in ws_slots {
        let share = distribute(service.index(), ws_slots.len(), pool.ws());
        println!("  {:<9} {}", format!("{}:", service), format_share(&share));
    }

    Ok(())
}

fn format_share(share: &[String]) -> String {
    if share.is_empty() {
        "(none)".to_string()
    } else {
        share.join(", ")
    }
}

/// Merge URLs from CLI flags and an optional list file, flags first
fn collect_urls(from_args: &[String], file: Option<&Path>) -> anyhow::Result<Vec<String>> {
    let mut urls: Vec<String> = from_args.to_vec();

    if let Some(path) = file {
        let content = std::fs::read_to_string(path)?;
        for line in content.lines() {
            let url = line.trim();
            if !url.is_empty() && !url.starts_with('#') {
                urls.push(url.to_string());
            }
        }
    }

    Ok(urls)
}
