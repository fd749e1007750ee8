//! # Stockpile Architecture
//!
//! Stockpile is a small inventory manager: products live in a plain
//! comma-separated file, are loaded into memory at start, edited through a
//! text menu, and written back on exit. The library holds everything except
//! the terminal; the `stockpile` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, colours, exit codes                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session's Catalog and its store                 │
//! │  - Turns outcomes into CmdResult messages                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - find, list, add, edit, remove over &Catalog / &mut       │
//! │  - No I/O; unknown ids are outcomes, not errors             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - CatalogStore trait, text format                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ids and positions
//!
//! Every product has a stable numeric id, assigned as one more than the
//! current maximum. Listings also show a 1-based position, which is only a
//! display aid; see [`index`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Catalog operations
//! - [`store`]: Persistence and the file format
//! - [`model`]: `Product`, `ProductDraft`, `Catalog`
//! - [`index`]: Display rows for listings
//! - [`config`]: Configuration management
//! - [`logging`]: Tracing setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod model;
pub mod store;
