//! CLI command implementations

pub mod add;
pub mod config;
pub mod list;
pub mod quantity;

pub use add::execute as add;
pub use config::execute as config;
pub use list::execute as list;
pub use quantity::{decrement, increment};

use crate::cart::CartProvider;
use crate::config::Config;
use crate::storage::create_store;
use tracing::debug;

/// Mount the cart described by the configuration
pub(crate) async fn mount_cart(config: &Config) -> CartProvider {
    let storage = create_store(&config.storage);
    debug!("Using {} storage", storage.backend_name());
    CartProvider::mount(storage, config.storage.key.clone()).await
}
