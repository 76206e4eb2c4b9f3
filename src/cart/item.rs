//! Cart line items

use serde::{Deserialize, Serialize};

/// One distinct product in the cart
///
/// `id` is the only field the store interprets. The display attributes are
/// carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product identifier, unique within a cart
    pub id: String,

    /// Display name
    pub title: String,

    /// Product image location
    #[serde(alias = "imageUrl")]
    pub image_url: String,

    /// Unit price as shown by the storefront
    pub price: f64,

    /// Units of this product in the cart, always at least 1
    pub quantity: u32,
}

/// Product attributes supplied when adding to the cart
///
/// Quantity is managed by the store and cannot be set by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCartItem {
    pub id: String,
    pub title: String,
    #[serde(alias = "imageUrl")]
    pub image_url: String,
    pub price: f64,
}

impl NewCartItem {
    /// Create a product entry
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        image_url: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image_url: image_url.into(),
            price,
        }
    }

    /// Turn into a cart line with the given quantity
    pub fn with_quantity(self, quantity: u32) -> CartItem {
        CartItem {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            price: self.price,
            quantity,
        }
    }
}
