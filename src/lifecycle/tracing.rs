//! # Observability & Tracing
//!
//! Structured logging for the whole desk, built on `tracing`.
//!
//! Actors log with an `entity_type` field instead of a module path, so the subscriber
//! hides targets. Output goes to stderr; stdout is reserved for command results.
//!
//! ```bash
//! RUST_LOG=info order-desk list          # lifecycle and mutations
//! RUST_LOG=debug order-desk add ...      # full payloads, every request
//! ```
//!
//! With `RUST_LOG=debug` a create looks like:
//!
//! ```text
//! DEBUG create_order: create_order called draft=OrderDraft { .. }
//! INFO create_order: Sending create_order to actor
//! DEBUG Create entity_type="Order" params=OrderDraft { .. }
//! INFO Created entity_type="Order" id=5f0c.. size=4
//! DEBUG Persisted collection key="orders" size=4
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` wins over `default_level`.
pub fn setup_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type carries the context
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
