//! # CLI Behavior
//!
//! This is **one possible UI client** for shelf, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting.
//!
//! ### Naked Execution (`shelf`)
//!
//! Running `shelf` with no arguments defaults to `shelf list`.
//!
//! ### Forms
//!
//! `add` and `edit` take product fields as flags. They are validated here,
//! at the boundary, before anything reaches the store:
//! - `add` requires name, category, cost price, sell price and expiry date
//! - `edit <id>` starts from the stored product and changes only the flags
//!   given
//! - discount is lenient: missing or unreadable means 0
//!
//! `preview` shows what a sell price and discount would come to without
//! saving anything.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `form`: Turning raw flag values into drafts and patches
//! - `render`: Output formatting (tables, colors, messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod form;
mod render;
pub mod setup;

pub use commands::run;
