//! Deterministic endpoint distribution across consuming services
//!
//! Pure allocation rule: given an ordered pool of endpoints and a fixed
//! number of consuming services, compute the share of one service. Repeated
//! calls with the same inputs always produce the same output, so every
//! service can compute its own share independently.

/// Compute the endpoints assigned to service `service_index` out of
/// `service_count` consumers, from an ordered `pool`.
///
/// Precondition: `service_count >= 1`. A zero count is not a supported
/// mode; every index is ineligible and the result is empty.
///
/// Rules, in order:
/// - an index outside `[0, service_count)` gets nothing;
/// - an empty pool yields nothing;
/// - a single endpoint is shared by every eligible service;
/// - with fewer endpoints than services, service 0 keeps `pool[0]` and the
///   remaining endpoints are round-robined across services 1..;
/// - with enough endpoints, service `i` takes positions `i, i+S, i+2S, ...`
///   ("card dealing"), giving each service a disjoint share that jointly
///   covers the whole pool.
pub fn distribute(service_index: usize, service_count: usize, pool: &[String]) -> Vec<String> {
    if service_index >= service_count {
        return Vec::new();
    }

    match pool.len() {
        0 => Vec::new(),
        1 => vec![pool[0].clone()],
        available if available < service_count => {
            if service_index == 0 {
                vec![pool[0].clone()]
            } else {
                let idx = 1 + (service_index - 1) % (available - 1);
                vec![pool[idx].clone()]
            }
        }
        _ => pool
            .iter()
            .skip(service_index)
            .step_by(service_count)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(urls: &[&str]) -> Vec<String> {
        urls.iter().map(|u| (*u).to_string()).collect()
    }

    #[test]
    fn test_single_endpoint_shared_by_all() {
        let p = pool(&["http-rpc-1"]);

        for i in 0..3 {
            assert_eq!(distribute(i, 3, &p), pool(&["http-rpc-1"]));
        }
    }

    #[test]
    fn test_single_ws_endpoint_both_slots() {
        let p = pool(&["ws-rpc-1"]);

        assert_eq!(distribute(0, 2, &p), pool(&["ws-rpc-1"]));
        assert_eq!(distribute(1, 2, &p), pool(&["ws-rpc-1"]));
    }

    #[test]
    fn test_under_supply_head_then_rotate() {
        let p = pool(&["http-rpc-1", "http-rpc-2", "http-rpc-3"]);

        assert_eq!(distribute(0, 4, &p), pool(&["http-rpc-1"]));
        assert_eq!(distribute(1, 4, &p), pool(&["http-rpc-2"]));
        assert_eq!(distribute(2, 4, &p), pool(&["http-rpc-3"]));
        // Rotation wraps back past the fixed head
        assert_eq!(distribute(3, 4, &p), pool(&["http-rpc-2"]));
    }

    #[test]
    fn test_under_supply_two_endpoints() {
        let p = pool(&["http-rpc-1", "http-rpc-2"]);

        // Every service past the head rotates over a single tail endpoint
        assert_eq!(distribute(0, 4, &p), pool(&["http-rpc-1"]));
        assert_eq!(distribute(1, 4, &p), pool(&["http-rpc-2"]));
        assert_eq!(distribute(2, 4, &p), pool(&["http-rpc-2"]));
        assert_eq!(distribute(3, 4, &p), pool(&["http-rpc-2"]));
    }

    #[test]
    fn test_card_dealing_exact_supply() {
        let p = pool(&["http-rpc-1", "http-rpc-2", "http-rpc-3"]);

        assert_eq!(distribute(0, 3, &p), pool(&["http-rpc-1"]));
        assert_eq!(distribute(1, 3, &p), pool(&["http-rpc-2"]));
        assert_eq!(distribute(2, 3, &p), pool(&["http-rpc-3"]));
    }

    #[test]
    fn test_card_dealing_over_supply() {
        let p: Vec<String> = (1..=10).map(|n| format!("http-rpc-{n}")).collect();

        assert_eq!(
            distribute(0, 4, &p),
            pool(&["http-rpc-1", "http-rpc-5", "http-rpc-9"])
        );
        assert_eq!(
            distribute(1, 4, &p),
            pool(&["http-rpc-2", "http-rpc-6", "http-rpc-10"])
        );
        assert_eq!(distribute(2, 4, &p), pool(&["http-rpc-3", "http-rpc-7"]));
        assert_eq!(distribute(3, 4, &p), pool(&["http-rpc-4", "http-rpc-8"]));
    }

    #[test]
    fn test_card_dealing_disjoint_and_exhaustive() {
        // Sufficient supply must partition the pool: every endpoint assigned
        // to exactly one service, nothing dropped.
        for count in 1..=6usize {
            for size in count..=count * 4 {
                let p: Vec<String> = (0..size).map(|n| format!("rpc-{n}")).collect();

                let mut seen = Vec::new();
                for i in 0..count {
                    for url in distribute(i, count, &p) {
                        assert!(!seen.contains(&url), "{url} dealt twice (S={count})");
                        seen.push(url);
                    }
                }
                assert_eq!(seen.len(), size, "pool not covered (S={count}, A={size})");
            }
        }
    }

    #[test]
    fn test_under_supply_every_service_gets_one() {
        for count in 2..=6usize {
            for size in 2..count {
                let p: Vec<String> = (0..size).map(|n| format!("rpc-{n}")).collect();

                assert_eq!(distribute(0, count, &p), vec![p[0].clone()]);
                for i in 1..count {
                    let share = distribute(i, count, &p);
                    assert_eq!(share.len(), 1, "S={count}, A={size}, i={i}");
                    // The head endpoint is reserved for service 0
                    assert_ne!(share[0], p[0]);
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let p: Vec<String> = (0..7).map(|n| format!("rpc-{n}")).collect();

        for i in 0..4 {
            assert_eq!(distribute(i, 4, &p), distribute(i, 4, &p));
        }
    }

    #[test]
    fn test_ineligible_slot() {
        let p = pool(&["ws-rpc-1", "ws-rpc-2", "ws-rpc-3"]);

        // Only two WS slots exist; anything past them gets nothing
        assert!(distribute(2, 2, &p).is_empty());
        assert!(distribute(5, 2, &p).is_empty());
    }

    #[test]
    fn test_empty_pool() {
        for i in 0..4 {
            assert!(distribute(i, 4, &[]).is_empty());
        }
    }

    #[test]
    fn test_zero_service_count_is_empty_not_panic() {
        let p = pool(&["http-rpc-1", "http-rpc-2"]);

        assert!(distribute(0, 0, &p).is_empty());
        assert!(distribute(3, 0, &p).is_empty());
    }

    #[test]
    fn test_preserves_pool_order_within_share() {
        let p: Vec<String> = (0..9).map(|n| format!("rpc-{n}")).collect();

        let share = distribute(1, 2, &p);
        assert_eq!(share, pool(&["rpc-1", "rpc-3", "rpc-5", "rpc-7"]));
    }
}
