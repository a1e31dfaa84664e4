//! Session encoding for carts.
//!
//! Carts are stored inside session state as a versioned envelope:
//! `{ "version": 1, "lines": [ { "product_id", "product_name", "unit_price", "quantity" } ] }`.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cart::{Cart, CartCodecError, CartLine};

/// Envelope version written by [`Cart::to_session_value`].
pub const CART_SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    lines: &'a [CartLine],
}

#[derive(Deserialize)]
struct Envelope {
    version: u32,
    lines: Vec<CartLine>,
}

impl Cart {
    /// Encode the cart for session storage.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_session_value(&self) -> Result<Value, CartCodecError> {
        let envelope = EnvelopeRef {
            version: CART_SCHEMA_VERSION,
            lines: &self.lines,
        };

        Ok(serde_json::to_value(envelope)?)
    }

    /// Decode a cart previously written by [`Cart::to_session_value`].
    ///
    /// # Errors
    ///
    /// Returns an error when the value is not an envelope, carries an unknown version,
    /// or holds a duplicate or empty line.
    pub fn from_session_value(value: Value) -> Result<Self, CartCodecError> {
        let envelope: Envelope = serde_json::from_value(value)?;

        if envelope.version != CART_SCHEMA_VERSION {
            return Err(CartCodecError::UnsupportedVersion(envelope.version));
        }

        let mut seen = FxHashSet::default();

        for line in &envelope.lines {
            if line.quantity == 0 {
                return Err(CartCodecError::ZeroQuantity(line.product_id));
            }

            if !seen.insert(line.product_id) {
                return Err(CartCodecError::DuplicateLine(line.product_id));
            }
        }

        Ok(Self {
            lines: envelope.lines,
        })
    }
}
