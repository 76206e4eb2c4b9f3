//! Increment and decrement commands

use crate::cli::args::QuantityArgs;
use crate::cli::commands::mount_cart;
use crate::config::Config;
use crate::error::CartResult;
use crate::ui::{self, UiContext};
use console::style;

/// Execute the increment command
pub async fn increment(args: QuantityArgs, config: &Config) -> CartResult<()> {
    let provider = mount_cart(config).await;
    let cart = provider.context().use_cart()?;
    let ctx = UiContext::detect();

    let known = cart.get(&args.id).await.is_some();
    cart.increment(&args.id).await;

    match cart.get(&args.id).await {
        Some(product) if known => ui::step_ok(
            &ctx,
            &format!(
                "{} quantity is now {}",
                style(&product.id).cyan(),
                product.quantity
            ),
        ),
        _ => not_in_cart(&ctx, &args.id),
    }

    Ok(())
}

/// Execute the decrement command
pub async fn decrement(args: QuantityArgs, config: &Config) -> CartResult<()> {
    let provider = mount_cart(config).await;
    let cart = provider.context().use_cart()?;
    let ctx = UiContext::detect();

    let known = cart.get(&args.id).await.is_some();
    cart.decrement(&args.id).await;

    match cart.get(&args.id).await {
        _ if !known => not_in_cart(&ctx, &args.id),
        Some(product) => ui::step_ok(
            &ctx,
            &format!(
                "{} quantity is now {}",
                style(&product.id).cyan(),
                product.quantity
            ),
        ),
        None => ui::step_ok(
            &ctx,
            &format!("Removed {} from cart", style(&args.id).cyan()),
        ),
    }

    Ok(())
}

fn not_in_cart(ctx: &UiContext, id: &str) {
    ui::step_warn_hint(
        ctx,
        &format!("{} is not in the cart", id),
        "Run: cartstore add --id <ID> --title <TITLE> --price <PRICE>",
    );
}
