//! Scoped access to a shared cart
//!
//! A [`CartProvider`] owns the store for as long as it is mounted. Consumers
//! receive a [`CartContext`] passed down explicitly and resolve it into a
//! [`CartHandle`] with [`CartContext::use_cart`]. Contexts hold a weak
//! reference, so once the provider is dropped they stop resolving.
//!
//! ```rust,ignore
//! let provider = CartProvider::mount(storage, DEFAULT_STORAGE_KEY).await;
//! let cart = provider.context().use_cart()?;
//!
//! cart.add_to_cart(NewCartItem::new("p1", "Shirt", "", 10.0)).await;
//! cart.increment("p1").await;
//! ```

use crate::cart::item::{CartItem, NewCartItem};
use crate::cart::store::CartStore;
use crate::error::{CartError, CartResult};
use crate::storage::KeyValueStore;
use std::sync::{Arc, Weak};
use tokio::sync::Mutex;
use tracing::debug;

/// Owner of a mounted cart store
pub struct CartProvider {
    store: Arc<Mutex<CartStore>>,
}

impl CartProvider {
    /// Open the store, load the persisted cart, and mount it
    pub async fn mount(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let store = CartStore::open(storage, key).await;
        debug!("Mounted cart provider for {}", store.storage_key());
        Self::from_store(store)
    }

    /// Mount an already opened store
    pub fn from_store(store: CartStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Context bound to this provider
    pub fn context(&self) -> CartContext {
        CartContext {
            store: Some(Arc::downgrade(&self.store)),
        }
    }
}

/// Token that consumers resolve into a cart handle
#[derive(Debug, Clone, Default)]
pub struct CartContext {
    store: Option<Weak<Mutex<CartStore>>>,
}

impl CartContext {
    /// Context with no provider behind it
    pub fn detached() -> Self {
        Self::default()
    }

    /// Resolve the cart for this context
    ///
    /// Fails with [`CartError::OutsideProvider`] when the context was never
    /// bound to a provider or the provider has since been dropped.
    pub fn use_cart(&self) -> CartResult<CartHandle> {
        self.store
            .as_ref()
            .and_then(Weak::upgrade)
            .map(|store| CartHandle { store })
            .ok_or(CartError::OutsideProvider)
    }
}

/// Consumer interface to a mounted cart
#[derive(Debug, Clone)]
pub struct CartHandle {
    store: Arc<Mutex<CartStore>>,
}

impl CartHandle {
    /// Snapshot of the cart contents
    pub async fn products(&self) -> Vec<CartItem> {
        self.store.lock().await.products().to_vec()
    }

    /// Look up a single line
    pub async fn get(&self, id: &str) -> Option<CartItem> {
        self.store.lock().await.get(id).cloned()
    }

    pub async fn add_to_cart(&self, item: NewCartItem) {
        self.store.lock().await.add_to_cart(item).await;
    }

    pub async fn increment(&self, id: &str) {
        self.store.lock().await.increment(id).await;
    }

    pub async fn decrement(&self, id: &str) {
        self.store.lock().await.decrement(id).await;
    }
}
