//! Cart errors.

use thiserror::Error;

use crate::products::ProductId;

/// Reasons a cart mutation is refused. The cart is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// The requested quantity alone is more than the stock.
    #[error("only {available} of \"{product_name}\" available")]
    ReplaceExceedsStock { product_name: String, available: u32 },

    /// Adding to the held quantity would go past the stock.
    #[error(
        "only {available} of \"{product_name}\" available, you already have {held} in your cart"
    )]
    AdditionExceedsStock {
        product_name: String,
        available: u32,
        held: u32,
    },

    /// Quantities must be positive.
    #[error("quantity must be at least 1")]
    ZeroQuantity,
}

/// Errors decoding a cart from session storage.
#[derive(Debug, Error)]
pub enum CartCodecError {
    #[error("malformed session cart")]
    Json(#[from] serde_json::Error),

    #[error("unsupported session cart version {0}")]
    UnsupportedVersion(u32),

    #[error("session cart holds product {0} more than once")]
    DuplicateLine(ProductId),

    #[error("session cart holds zero units of product {0}")]
    ZeroQuantity(ProductId),
}
