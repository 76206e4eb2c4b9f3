//! cartstore - Shopping cart state container
//!
//! Keeps an ordered list of cart lines in memory and mirrors it to local
//! key-value storage after every change.

pub mod cart;
pub mod cli;
pub mod config;
pub mod error;
pub mod storage;
pub mod ui;

pub use cart::{CartContext, CartHandle, CartItem, CartProvider, CartStore, NewCartItem};
pub use error::{CartError, CartResult};
