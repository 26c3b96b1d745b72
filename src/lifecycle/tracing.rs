//! # Observability
//!
//! Structured logging for the whole service via `tracing`.
//!
//! - The registry actor logs every request with `entity_type` and `id` fields.
//! - Clients open a span per call (`#[instrument]`).
//! - Each progression task runs inside a `progression{order_id=...}` span.
//! - HTTP requests are traced by `tower-http`.
//!
//! ```bash
//! RUST_LOG=info cargo run                       # default
//! RUST_LOG=debug cargo run                      # payloads and every status step
//! RUST_LOG=pizza_intake=debug,tower_http=warn cargo run
//! ```
//!
//! A typical order at `info`:
//!
//! ```text
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO place_order{item=2}: Order placed order_id=order_1
//! INFO Action ok entity_type="Order" id=order_1 outcome=Preparing
//! INFO Action ok entity_type="Order" id=order_1 outcome=Done
//! INFO Action ok entity_type="Order" id=order_1 outcome=Delivered
//! INFO progression{order_id=order_1}: Lifecycle complete
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` wins; otherwise `info`.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
