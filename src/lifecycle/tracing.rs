//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the `tracing` subscriber for the binary. Diagnostics go to
//! stderr so stdout carries only the console report.
//!
//! The stores log every request with structured fields (`entity_type`, `id`, `size`), and the
//! controllers open a span per call:
//!
//! ```text
//! INFO Actor started entity_type="Category"
//! INFO Created entity_type="Category" id=Pães size=1
//! WARN create_product: on_create failed entity_type="Product" id=product_6 error=Category does not exist: Confeitaria
//! INFO Shutdown entity_type="Product" size=5
//! ```
//!
//! ```bash
//! RUST_LOG=info cargo run      # store activity
//! RUST_LOG=debug cargo run     # full payloads
//! ```
//!
//! Without `RUST_LOG` only errors are shown.

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false) // entity_type already says which store logged
        .compact()
        .init();
}
