//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic product inventory library**. It keeps an ordered
//! collection of products, derives their sale prices, and persists the whole
//! collection after every change. The `shelf` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (the `shelf` crate)                                    │
//! │  - Parses arguments and forms, renders tables and messages  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Assigns product ids                                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns store outcomes into CmdResult + messages           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ProductStore: ordered collection, observers, persistence │
//! │  - StorageBackend trait: FsBackend, MemBackend (testing)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pricing ([`pricing`]) sits beside the layers: pure functions over
//! [`rust_decimal::Decimal`] that the store calls on every write.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Diagnostics go through `tracing`; the client decides whether
//! and where to show them.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`store`]: The product store and its storage backends
//! - [`model`]: `Product`, `ProductDraft`, `ProductPatch`, `Category`
//! - [`pricing`]: Discount and rounding rules
//! - [`config`]: Configuration management
//! - [`init`]: Wiring config, data directory and store at startup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod pricing;
pub mod store;
