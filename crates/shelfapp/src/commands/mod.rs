//! # Command Layer
//!
//! Each command lives in its own submodule as a plain function over a
//! [`ProductStore`](crate::store::ProductStore). Commands:
//! - Call the store and turn its results into a [`CmdResult`]
//! - Are completely UI-agnostic (no stdout, no prompts, no exit codes)
//! - Turn a failed write into a warning message rather than an error, since
//!   the in-memory change has already been committed
//!
//! ## Command Modules
//!
//! - [`create`]: Add a product
//! - [`update`]: Patch an existing product
//! - [`delete`]: Batch-remove products
//! - [`list`]: The whole collection
//! - [`view`]: Specific products by id
//! - [`preview`]: Derived prices for unsaved form input

use crate::error::ShelfError;
use crate::model::Product;
use crate::pricing::PriceBreakdown;
use serde::Serialize;

pub mod create;
pub mod delete;
pub mod list;
pub mod preview;
pub mod update;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Products created or modified by the command, as committed.
    pub affected_products: Vec<Product>,
    /// Products to display.
    pub listed_products: Vec<Product>,
    /// Number of products removed (delete only).
    pub removed: usize,
    /// Derived prices for unsaved input (preview only).
    pub preview: Option<PriceBreakdown>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_listed_products(mut self, products: Vec<Product>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_preview(mut self, preview: PriceBreakdown) -> Self {
        self.preview = Some(preview);
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning)
    }

    pub(crate) fn note_persist_error(&mut self, persist_error: Option<ShelfError>) {
        if let Some(err) = persist_error {
            self.add_message(CmdMessage::warning(format!(
                "Change kept for this session but not saved: {}",
                err
            )));
        }
    }
}
