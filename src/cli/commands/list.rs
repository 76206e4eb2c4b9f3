//! List command - show the cart contents

use crate::cart::CartItem;
use crate::cli::args::{ListArgs, OutputFormat};
use crate::cli::commands::mount_cart;
use crate::config::Config;
use crate::error::CartResult;
use crate::ui::{self, UiContext};
use console::style;

/// Execute the list command
pub async fn execute(args: ListArgs, config: &Config) -> CartResult<()> {
    let provider = mount_cart(config).await;
    let cart = provider.context().use_cart()?;
    let products = cart.products().await;

    if products.is_empty() {
        match args.format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Plain => {}
            OutputFormat::Table => {
                let ctx = UiContext::detect();
                ui::step_info(&ctx, "Cart is empty");
            }
        }
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => print_table(&products),
        OutputFormat::Json => print_json(&products)?,
        OutputFormat::Plain => print_plain(&products),
    }

    Ok(())
}

fn print_table(products: &[CartItem]) {
    let ctx = UiContext::detect();
    ui::intro(&ctx, "Cart");

    println!(
        "{:<16} {:<32} {:>6} {:>10}",
        style("ID").bold(),
        style("TITLE").bold(),
        style("QTY").bold(),
        style("PRICE").bold()
    );
    println!("{}", "-".repeat(67));

    for product in products {
        println!(
            "{:<16} {:<32} {:>6} {:>10.2}",
            product.id,
            truncate(&product.title, 32),
            product.quantity,
            product.price
        );
    }

    let units: u64 = products.iter().map(|p| u64::from(p.quantity)).sum();
    println!();
    println!("{} product(s), {} unit(s)", products.len(), units);
}

fn print_json(products: &[CartItem]) -> CartResult<()> {
    let json = serde_json::to_string_pretty(products)?;
    println!("{}", json);
    Ok(())
}

fn print_plain(products: &[CartItem]) {
    for product in products {
        println!("{}\t{}", product.id, product.quantity);
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_title_unchanged() {
        assert_eq!(truncate("Shirt", 32), "Shirt");
    }

    #[test]
    fn truncate_long_title() {
        let out = truncate("A very long product title", 10);
        assert_eq!(out, "A very ...");
        assert_eq!(out.chars().count(), 10);
    }
}
