//! Output formatting. Every function returns a `String`; printing is left to
//! the caller so everything here can be tested without a terminal.

use colored::Colorize;
use shelfapp::commands::{CmdMessage, MessageLevel};
use shelfapp::model::Product;
use shelfapp::pricing::PriceBreakdown;
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 5] = ["Id", "Name", "Category", "Sell Price", "Final Price"];
const COLUMN_GAP: &str = "  ";
const LABEL_WIDTH: usize = 23;

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut output = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.normal().to_string(),
            MessageLevel::Success => message.content.green().to_string(),
            MessageLevel::Warning => format!("{} {}", "Warning:".yellow().bold(), message.content),
        };
        output.push_str(&line);
        output.push('\n');
    }
    output
}

/// The listing table: id, name, category, sell price and final price.
pub fn render_product_table(products: &[Product]) -> String {
    if products.is_empty() {
        return format!("No products yet. Add one with {}.\n", "shelf add".bold());
    }

    let rows: Vec<[String; 5]> = products
        .iter()
        .map(|p| {
            [
                p.id.to_string(),
                p.name.clone(),
                p.category.to_string(),
                p.sell_price.to_string(),
                p.final_price().to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(UnicodeWidthStr::width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let mut output = String::new();
    let header: Vec<String> = HEADERS
        .iter()
        .enumerate()
        .map(|(i, h)| align(h, widths[i], is_numeric_column(i)))
        .collect();
    output.push_str(&header.join(COLUMN_GAP).bold().to_string());
    output.push('\n');

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let padded = align(cell, widths[i], is_numeric_column(i));
                match i {
                    0 => padded.dimmed().to_string(),
                    4 => padded.green().to_string(),
                    _ => padded,
                }
            })
            .collect();
        output.push_str(cells.join(COLUMN_GAP).trim_end());
        output.push('\n');
    }
    output
}

/// Full record, one field per line.
pub fn render_product_details(product: &Product) -> String {
    let mut output = format!(
        "{} {}\n",
        product.name.bold(),
        format!("({})", product.id).dimmed()
    );
    let mut field = |label: &str, value: String| {
        output.push_str(&format!("  {}{}\n", align(&format!("{}:", label), LABEL_WIDTH, false), value));
    };

    field("Category", product.category.to_string());
    if let Some(description) = &product.description {
        field("Description", description.clone());
    }
    field(
        "Expiry date",
        product
            .expiry_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string()),
    );
    field("Cost price", product.cost_price.to_string());
    field("Sell price", product.sell_price.to_string());
    field("Discount", format!("{}%", product.discount));
    field(
        "Discounted sell price",
        product.discounted_sell_price().to_string(),
    );
    field("Final price", product.final_price().to_string().green().to_string());
    output
}

pub fn render_products(products: &[Product]) -> String {
    products
        .iter()
        .map(render_product_details)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_preview(preview: &PriceBreakdown) -> String {
    format!(
        "{}{}\n{}{}\n",
        align("Discounted sell price:", LABEL_WIDTH, false),
        preview.discounted_sell_price,
        align("Final price:", LABEL_WIDTH, false),
        preview.final_price.to_string().green()
    )
}

fn is_numeric_column(index: usize) -> bool {
    index >= 3
}

/// Pads to `width` display columns; `String` formatting counts chars, not columns.
fn align(text: &str, width: usize, right: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(text.width()));
    if right {
        format!("{}{}", fill, text)
    } else {
        format!("{}{}", text, fill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfapp::model::{Category, ProductDraft, ProductId};

    fn plain() {
        colored::control::set_override(false);
    }

    fn product(id: i64, name: &str, sell: &str, discount: &str) -> Product {
        Product::new(
            ProductId(id),
            ProductDraft::new(name, Category::Food)
                .with_sell_price(sell.parse().unwrap())
                .with_discount(discount.parse().unwrap()),
        )
    }

    #[test]
    fn test_empty_table_hints_at_add() {
        plain();
        assert_eq!(
            render_product_table(&[]),
            "No products yet. Add one with shelf add.\n"
        );
    }

    #[test]
    fn test_table_columns_line_up() {
        plain();
        let output = render_product_table(&[
            product(1, "Milk", "10", "10"),
            product(22, "Crème brûlée", "899.99", "0"),
        ]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Id  Name"));
        assert!(lines[1].contains("Milk"));
        assert!(lines[1].ends_with("9.00"));
        assert!(lines[2].ends_with("899.99"));

        // "Category" starts at the same display column on every line
        let column = lines[0].find("Category").unwrap();
        assert_eq!(&lines[1][column..column + 4], "Food");
        let accented_column = UnicodeWidthStr::width(&lines[2][..lines[2].find("Food").unwrap()]);
        assert_eq!(accented_column, column);
    }

    #[test]
    fn test_details_show_derived_prices() {
        plain();
        let mut milk = product(1, "Milk", "10", "10");
        milk.description = Some("Whole".into());
        let output = render_product_details(&milk);
        assert!(output.starts_with("Milk (1)\n"));
        assert!(output.contains("Description:"));
        assert!(output.contains("Whole"));
        assert!(output.contains("Discount:"));
        assert!(output.contains("10%"));
        assert!(output.contains("Discounted sell price: 9.00"));
        assert!(output.contains("Expiry date:"));
    }

    #[test]
    fn test_messages_by_level() {
        plain();
        let output = render_messages(&[
            CmdMessage::success("Product created (1): Milk"),
            CmdMessage::warning("not saved"),
            CmdMessage::info("Nothing to change"),
        ]);
        assert_eq!(
            output,
            "Product created (1): Milk\nWarning: not saved\nNothing to change\n"
        );
    }

    #[test]
    fn test_preview() {
        plain();
        let output = render_preview(&shelfapp::pricing::derive(
            "10".parse().unwrap(),
            "10".parse().unwrap(),
        ));
        assert_eq!(
            output,
            "Discounted sell price: 9.00\nFinal price:           9.00\n"
        );
    }
}
