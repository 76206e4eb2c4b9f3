//! Add command - put one unit of a product in the cart

use crate::cart::NewCartItem;
use crate::cli::args::AddArgs;
use crate::cli::commands::mount_cart;
use crate::config::Config;
use crate::error::CartResult;
use crate::ui::{self, UiContext};
use console::style;

/// Execute the add command
pub async fn execute(args: AddArgs, config: &Config) -> CartResult<()> {
    let provider = mount_cart(config).await;
    let cart = provider.context().use_cart()?;

    let item = NewCartItem::new(args.id, args.title, args.image_url, args.price);
    let id = item.id.clone();
    cart.add_to_cart(item).await;

    let quantity = cart.get(&id).await.map_or(0, |p| p.quantity);
    let ctx = UiContext::detect();
    ui::step_ok(
        &ctx,
        &format!("Added {} (quantity {})", style(&id).cyan(), quantity),
    );

    Ok(())
}
