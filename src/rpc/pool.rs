//! Per-chain endpoint pool with insertion-order dedup
//!
//! The pool is built once per chain by whatever collects the endpoints
//! (CLI flags, list files). Order is significant: the distribution rule is
//! positional, so the pool must hand endpoints to it exactly as supplied.

use crate::error::{PoolError, Result};

/// Endpoint transport, used for scheme validation at the pool boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Http,
    Ws,
}

impl Transport {
    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Transport::Http => "HTTP",
            Transport::Ws => "WS",
        }
    }

    /// Whether `url` carries this transport's scheme prefix
    pub fn matches(self, url: &str) -> bool {
        match self {
            Transport::Http => url.starts_with("http://") || url.starts_with("https://"),
            Transport::Ws => url.starts_with("ws://") || url.starts_with("wss://"),
        }
    }

    /// Validate a URL for this transport
    pub fn validate(self, url: &str) -> Result<()> {
        if url.trim().is_empty() {
            return Err(PoolError::EmptyUrl.into());
        }
        if !self.matches(url) {
            return Err(PoolError::InvalidScheme {
                transport: self.label(),
                url: url.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Ordered, deduplicated endpoint pool for one chain
#[derive(Debug, Clone, Default)]
pub struct EndpointPool {
    chain_id: u64,
    http: Vec<String>,
    ws: Vec<String>,
}

impl EndpointPool {
    /// Create an empty pool for a chain
    pub fn new(chain_id: u64) -> Self {
        Self {
            chain_id,
            http: Vec::new(),
            ws: Vec::new(),
        }
    }

    /// Build a pool from endpoint lists, validating and deduplicating
    pub fn from_lists<I, J, S>(chain_id: u64, http: I, ws: J) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut pool = Self::new(chain_id);
        for url in http {
            pool.add_http(url)?;
        }
        for url in ws {
            pool.add_ws(url)?;
        }
        Ok(pool)
    }

    /// Chain id this pool belongs to
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Add an HTTP endpoint. Returns `false` if it was already present.
    pub fn add_http(&mut self, url: impl Into<String>) -> Result<bool> {
        let url = url.into();
        Transport::Http.validate(&url)?;
        Ok(push_unique(&mut self.http, url))
    }

    /// Add a WebSocket endpoint. Returns `false` if it was already present.
    pub fn add_ws(&mut self, url: impl Into<String>) -> Result<bool> {
        let url = url.into();
        Transport::Ws.validate(&url)?;
        Ok(push_unique(&mut self.ws, url))
    }

    /// HTTP endpoints, in insertion order
    pub fn http(&self) -> &[String] {
        &self.http
    }

    /// WebSocket endpoints, in insertion order
    pub fn ws(&self) -> &[String] {
        &self.ws
    }

    /// Whether the pool holds no endpoints at all
    pub fn is_empty(&self) -> bool {
        self.http.is_empty() && self.ws.is_empty()
    }
}

fn push_unique(list: &mut Vec<String>, url: String) -> bool {
    if list.iter().any(|u| u == &url) {
        tracing::debug!("Skipping duplicate endpoint: {}", url);
        return false;
    }
    list.push(url);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_preserves_order_and_dedups() {
        let mut pool = EndpointPool::new(1442);

        assert!(pool.add_http("https://rpc-1.example.org").unwrap());
        assert!(pool.add_http("https://rpc-2.example.org").unwrap());
        assert!(!pool.add_http("https://rpc-1.example.org").unwrap());

        assert_eq!(
            pool.http(),
            &[
                "https://rpc-1.example.org".to_string(),
                "https://rpc-2.example.org".to_string(),
            ]
        );
    }

    #[test]
    fn test_scheme_validation() {
        let mut pool = EndpointPool::new(1442);

        assert!(pool.add_http("wss://rpc.example.org").is_err());
        assert!(pool.add_ws("https://rpc.example.org").is_err());
        assert!(pool.add_http("").is_err());

        assert!(pool.add_http("http://rpc.example.org").unwrap());
        assert!(pool.add_ws("ws://rpc.example.org").unwrap());
        assert!(pool.add_ws("wss://rpc2.example.org").unwrap());
    }

    #[test]
    fn test_from_lists() {
        let pool = EndpointPool::from_lists(
            80094,
            vec![
                "https://a.example.org",
                "https://b.example.org",
                "https://a.example.org",
            ],
            vec!["wss://c.example.org"],
        )
        .unwrap();

        assert_eq!(pool.chain_id(), 80094);
        assert_eq!(pool.http().len(), 2);
        assert_eq!(pool.ws().len(), 1);
        assert!(!pool.is_empty());
    }

    #[test]
    fn test_transport_matches() {
        assert!(Transport::Http.matches("http://x"));
        assert!(Transport::Http.matches("https://x"));
        assert!(!Transport::Http.matches("wss://x"));
        assert!(Transport::Ws.matches("ws://x"));
        assert!(Transport::Ws.matches("wss://x"));
        assert!(!Transport::Ws.matches("https://x"));
    }
}
