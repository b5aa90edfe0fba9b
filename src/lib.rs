//! # Padaria
//!
//! A bakery catalog built from resource-oriented actors: categories and products live in
//! two stores, each a Tokio task that owns its collection and answers requests over a
//! channel. Controllers wrap the channels in a typed API, and an orchestrator seeds the
//! catalog, demonstrates every operation and prints the results.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`ResourceActor`](framework::ResourceActor) and the
//! [`ActorEntity`](framework::ActorEntity) trait it manages. Business rules live in the
//! entity; the actor supplies ordering, uniqueness and the request loop.
//!
//! ### 2. The Catalog ([`model`], [`category_actor`], [`product_actor`])
//! - Categories are keyed by their exact name; creating a second one with the same name fails
//!   with [`CategoryError::DuplicateKey`](category_actor::CategoryError::DuplicateKey).
//! - Products get a generated id and must name an existing category, otherwise creation
//!   fails with [`ProductError::InvalidReference`](product_actor::ProductError::InvalidReference).
//!
//! ### 3. The Interface ([`controllers`])
//! [`CategoryController`](controllers::CategoryController) and
//! [`ProductController`](controllers::ProductController): create, list, filter and update.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`PadariaSystem`](lifecycle::PadariaSystem) wires the stores together, seeds the catalog
//! from [`config`], runs the demonstration and shuts everything down.
//!
//! ### 5. The Event Log ([`logger`])
//! Timestamped info/success/error records, kept in memory and optionally appended to a file.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run                                  # default catalog
//! cargo run -- --show-logs                   # print the event log at the end
//! RUST_LOG=info cargo run -- --log-file logs/padaria.jsonl
//! ```

pub mod category_actor;
pub mod config;
pub mod controllers;
pub mod framework;
pub mod lifecycle;
pub mod logger;
pub mod model;
pub mod product_actor;
