//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Logging**: Install the `tracing` subscriber (stderr, `SHELF_LOG`)
//! 2. **Context Setup**: Initialize the API from config and `--data`
//! 3. **Dispatch**: Route each subcommand to the API
//! 4. **Output Formatting**: Hand results to `render`
//!
//! Errors are returned to `main`, which prints them and exits with status 1.

use super::form;
use super::render;
use super::setup::{Cli, Commands, ProductFields};
use chrono::Local;
use clap::Parser;
use shelfapp::api::ShelfApi;
use shelfapp::commands::CmdResult;
use shelfapp::error::Result;
use shelfapp::init::initialize;
use shelfapp::model::ProductId;
use shelfapp::store::StorageBackend;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "SHELF_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = initialize(cli.data.clone())?;
    tracing::info!(
        data_dir = %ctx.data_dir.display(),
        storage_key = %ctx.config.storage_key,
        "using product data"
    );
    if !ctx.warnings.is_empty() {
        eprint!("{}", render::render_messages(&ctx.warnings));
    }
    ctx.api.on_change(|products| {
        tracing::debug!(products = products.len(), "collection changed");
    });

    match cli.command.unwrap_or(Commands::List) {
        Commands::Add { fields, id } => handle_add(&mut ctx.api, &fields, id),
        Commands::Edit { id, fields } => handle_edit(&mut ctx.api, &id, &fields),
        Commands::List => handle_list(&ctx.api),
        Commands::View { ids } => handle_view(&ctx.api, &ids),
        Commands::Delete { ids } => handle_delete(&mut ctx.api, &ids),
        Commands::Preview {
            sell_price,
            discount,
        } => handle_preview(&ctx.api, sell_price.as_deref(), discount.as_deref()),
    }
}

/// `SHELF_LOG` takes an `EnvFilter` directive; without it, `warn`
/// (or `debug` with `--verbose`).
fn init_logging(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));
    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn handle_add<B: StorageBackend>(
    api: &mut ShelfApi<B>,
    fields: &ProductFields,
    id: Option<i64>,
) -> Result<()> {
    let draft = form::parse_draft(fields, Local::now().date_naive())?;
    let result = match id {
        Some(id) => api.create_product_with_id(ProductId(id), draft)?,
        None => api.create_product(draft)?,
    };
    print_changed(&result);
    Ok(())
}

fn handle_edit<B: StorageBackend>(
    api: &mut ShelfApi<B>,
    id: &str,
    fields: &ProductFields,
) -> Result<()> {
    let id: ProductId = id.parse()?;
    let patch = form::parse_patch(fields, Local::now().date_naive())?;
    let result = api.update_product(id, &patch)?;
    print_changed(&result);
    Ok(())
}

fn handle_list<B: StorageBackend>(api: &ShelfApi<B>) -> Result<()> {
    let result = api.list_products();
    print!("{}", render::render_product_table(&result.listed_products));
    Ok(())
}

fn handle_view<B: StorageBackend>(api: &ShelfApi<B>, ids: &[String]) -> Result<()> {
    let result = api.view_products(&parse_ids(ids)?)?;
    print!("{}", render::render_products(&result.listed_products));
    Ok(())
}

fn handle_delete<B: StorageBackend>(api: &mut ShelfApi<B>, ids: &[String]) -> Result<()> {
    let result = api.delete_products(&parse_ids(ids)?);
    print!("{}", render::render_messages(&result.messages));
    Ok(())
}

fn handle_preview<B: StorageBackend>(
    api: &ShelfApi<B>,
    sell_price: Option<&str>,
    discount: Option<&str>,
) -> Result<()> {
    if let Some(preview) = api.preview_pricing(sell_price, discount).preview {
        print!("{}", render::render_preview(&preview));
    }
    Ok(())
}

fn parse_ids(ids: &[String]) -> Result<Vec<ProductId>> {
    ids.iter().map(|id| id.parse()).collect()
}

/// Messages first, then the product as stored.
fn print_changed(result: &CmdResult) {
    print!("{}", render::render_messages(&result.messages));
    if !result.affected_products.is_empty() {
        println!();
        print!("{}", render::render_products(&result.affected_products));
    }
}
