//! Shopping cart state

pub mod item;
pub mod provider;
pub mod store;

pub use item::{CartItem, NewCartItem};
pub use provider::{CartContext, CartHandle, CartProvider};
pub use store::{CartStore, DEFAULT_STORAGE_KEY};
