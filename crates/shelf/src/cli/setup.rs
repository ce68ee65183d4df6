use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "shelf",
    bin_name = "shelf",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Keep track of products, prices and discounts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the product data (overrides config)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

/// Product form fields, as typed by the user. Validated in `form`.
#[derive(Args, Debug, Default, Clone)]
pub struct ProductFields {
    /// Product name
    #[arg(long)]
    pub name: Option<String>,

    /// One of Food, Clothing, Electronics, Furniture
    #[arg(long, short)]
    pub category: Option<String>,

    /// Free-form description (empty clears it on edit)
    #[arg(long, short)]
    pub description: Option<String>,

    /// Expiry date, not earlier than today
    #[arg(long = "expiry", value_name = "YYYY-MM-DD")]
    pub expiry_date: Option<String>,

    /// Cost price
    #[arg(long = "cost", value_name = "PRICE")]
    pub cost_price: Option<String>,

    /// Sell price
    #[arg(long = "sell", value_name = "PRICE")]
    pub sell_price: Option<String>,

    /// Discount in percent
    #[arg(long, value_name = "PERCENT")]
    pub discount: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a product
    #[command(alias = "a", display_order = 1)]
    Add {
        #[command(flatten)]
        fields: ProductFields,

        /// Use this id instead of the current timestamp
        #[arg(long)]
        id: Option<i64>,
    },

    /// Change fields of a product
    #[command(alias = "e", display_order = 2)]
    Edit {
        /// Id of the product
        id: String,

        #[command(flatten)]
        fields: ProductFields,
    },

    /// List products
    #[command(alias = "ls", display_order = 3)]
    List,

    /// Show products in full
    #[command(alias = "v", display_order = 4)]
    View {
        /// Ids of the products
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Delete one or more products
    #[command(alias = "rm", display_order = 5)]
    Delete {
        /// Ids of the products (unknown ids are ignored)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Show derived prices without saving anything
    #[command(display_order = 6)]
    Preview {
        /// Sell price
        #[arg(long = "sell", value_name = "PRICE")]
        sell_price: Option<String>,

        /// Discount in percent
        #[arg(long, value_name = "PERCENT")]
        discount: Option<String>,
    },
}
