//! # System Lifecycle & Orchestration
//!
//! Starting, wiring, driving and stopping the catalog stores.
//!
//! ## Responsibilities
//! 1. **Store creation** - build the category and product stores with their controllers
//! 2. **Dependency injection** - the product store runs with a `CategoryController` as context
//! 3. **Seeding & demonstration** - create the default catalog and exercise every operation
//! 4. **Graceful shutdown** - drop the controllers and await both store tasks
//! 5. **Observability setup** - [`setup_tracing`] for diagnostics, [`open_event_log`] for the event log
//!
//! ## Dependency Injection via Context
//!
//! Stores are created without dependencies and receive them when started:
//!
//! ```rust,ignore
//! let (category_store, categories) = category_actor::new(32);
//! let (product_store, products) = product_actor::new(32);
//!
//! tokio::spawn(category_store.run(()));
//! tokio::spawn(product_store.run(categories.clone()));
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all controllers** - closes the sender side of each channel
//! 2. **Stores detect closure** - `receiver.recv()` returns `None`
//! 3. **Stores log their final size** and exit
//! 4. **Await completion** - [`PadariaSystem::shutdown`] waits for both tasks
//!
//! The product store's context holds a clone of the category controller, so the category
//! store stops only after the product store has. The dependency graph is acyclic, so this
//! always terminates.

pub mod console;
pub mod padaria_system;
pub mod tracing;

pub use padaria_system::*;
pub use self::tracing::*;
