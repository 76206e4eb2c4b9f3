//! Cart state and its durable mirror

use crate::cart::item::{CartItem, NewCartItem};
use crate::error::CartResult;
use crate::storage::KeyValueStore;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Storage key the cart collection is mirrored under
pub const DEFAULT_STORAGE_KEY: &str = "@GoMarketplace:products";

/// Authoritative in-memory cart, mirrored to a key-value store
///
/// Every mutation updates the in-memory collection first and then writes the
/// whole collection as a JSON array under the storage key. Write failures are
/// logged and otherwise ignored, so the in-memory cart is always the source of
/// truth for the running process.
pub struct CartStore {
    products: Vec<CartItem>,
    storage: Arc<dyn KeyValueStore>,
    key: String,
    initialized: bool,
}

impl CartStore {
    /// Create an empty, not yet initialized store
    pub fn new(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            products: Vec::new(),
            storage,
            key: key.into(),
            initialized: false,
        }
    }

    /// Create a store and load the persisted cart before returning it
    pub async fn open(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let mut store = Self::new(storage, key);
        store.initialize().await;
        store
    }

    /// Load the persisted cart, replacing the in-memory collection
    ///
    /// Only the first call has any effect. A missing value means an empty
    /// cart; an unreadable or unparseable value is logged and leaves the cart
    /// empty.
    pub async fn initialize(&mut self) {
        if self.initialized {
            debug!("Cart already initialized, skipping load");
            return;
        }
        self.initialized = true;

        match self.load().await {
            Ok(Some(products)) => {
                info!("Loaded {} cart item(s) from {}", products.len(), self.key);
                self.products = products;
            }
            Ok(None) => debug!("No persisted cart under {}", self.key),
            Err(e) => warn!("Failed to load persisted cart: {}", e),
        }
    }

    async fn load(&self) -> CartResult<Option<Vec<CartItem>>> {
        let Some(content) = self.storage.get_item(&self.key).await? else {
            return Ok(None);
        };

        // Decode line by line so one malformed entry cannot empty the cart
        let stored: Vec<serde_json::Value> = serde_json::from_str(&content)?;
        Ok(Some(Self::sanitize(stored)))
    }

    /// Drop entries that fail to decode or break the one-line-per-id,
    /// quantity >= 1 invariant
    fn sanitize(stored: Vec<serde_json::Value>) -> Vec<CartItem> {
        let mut seen = HashSet::new();
        stored
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<CartItem>(value) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!("Dropping unreadable persisted cart item: {}", e);
                    None
                }
            })
            .filter(|item| {
                if item.quantity == 0 {
                    warn!("Dropping persisted cart item {} with zero quantity", item.id);
                    return false;
                }
                if !seen.insert(item.id.clone()) {
                    warn!("Dropping duplicate persisted cart item {}", item.id);
                    return false;
                }
                true
            })
            .collect()
    }

    /// Whether the initial load has run
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Current cart contents in insertion order
    pub fn products(&self) -> &[CartItem] {
        &self.products
    }

    /// Find the line for a product
    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Number of distinct products
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Sum of quantities across all lines
    pub fn total_quantity(&self) -> u64 {
        self.products.iter().map(|p| u64::from(p.quantity)).sum()
    }

    /// Key the cart is mirrored under
    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Add one unit of a product
    ///
    /// An existing line has its quantity bumped and its attributes replaced by
    /// the supplied ones; otherwise a new line with quantity 1 is appended.
    /// A NaN or infinite price cannot be stored, so such items are ignored.
    pub async fn add_to_cart(&mut self, item: NewCartItem) {
        if !item.price.is_finite() {
            warn!("Ignoring {} with non-finite price {}", item.id, item.price);
            return;
        }

        match self.products.iter_mut().find(|p| p.id == item.id) {
            Some(existing) => {
                let quantity = existing.quantity.saturating_add(1);
                *existing = item.with_quantity(quantity);
                debug!("Bumped {} to quantity {}", existing.id, quantity);
            }
            None => {
                debug!("Added {} to cart", item.id);
                self.products.push(item.with_quantity(1));
            }
        }

        self.persist().await;
    }

    /// Add one unit to an existing line. Unknown ids leave the cart unchanged.
    pub async fn increment(&mut self, id: &str) {
        match self.products.iter_mut().find(|p| p.id == id) {
            Some(product) => product.quantity = product.quantity.saturating_add(1),
            None => debug!("Increment of {} ignored, not in cart", id),
        }

        self.persist().await;
    }

    /// Remove one unit from a line, dropping the line when it reaches zero.
    /// Unknown ids leave the cart unchanged.
    pub async fn decrement(&mut self, id: &str) {
        match self.products.iter().position(|p| p.id == id) {
            Some(index) if self.products[index].quantity <= 1 => {
                let removed = self.products.remove(index);
                debug!("Removed {} from cart", removed.id);
            }
            Some(index) => self.products[index].quantity -= 1,
            None => debug!("Decrement of {} ignored, not in cart", id),
        }

        self.persist().await;
    }

    /// Write the current collection to storage, returning any failure
    pub async fn save(&self) -> CartResult<()> {
        let content = serde_json::to_string(&self.products)?;
        self.storage.set_item(&self.key, &content).await
    }

    /// Write the current collection to storage
    ///
    /// Failures are logged and dropped; mutations never fail on storage.
    async fn persist(&self) {
        if let Err(e) = self.save().await {
            warn!("Failed to persist cart under {}: {}", self.key, e);
        }
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("key", &self.key)
            .field("backend", &self.storage.backend_name())
            .field("products", &self.products)
            .finish()
    }
}
