//! Cart Responses

use gearlock::notices::{Notice, NoticeLevel};
use gearlock_app::domain::carts::data::{CartItemView, CartMutation, CartSnapshot};
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    pub product_uuid: Uuid,
    pub product_name: String,

    /// Price captured when the product was first added
    pub unit_price: String,

    pub quantity: u32,
    pub total_price: String,
    pub available_quantity: u32,
    pub availability: String,
}

impl From<CartItemView> for CartItemResponse {
    fn from(item: CartItemView) -> Self {
        CartItemResponse {
            product_uuid: item.product_uuid.into_uuid(),
            product_name: item.product_name,
            unit_price: item.unit_price.to_string(),
            quantity: item.quantity,
            total_price: item.total_price.to_string(),
            available_quantity: item.available_quantity,
            availability: item.availability.as_str().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct NoticeResponse {
    /// One of "success", "warning", "error"
    pub level: String,

    pub message: String,
}

impl From<Notice> for NoticeResponse {
    fn from(notice: Notice) -> Self {
        let level = match notice.level {
            NoticeLevel::Success => "success",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        };

        NoticeResponse {
            level: level.to_string(),
            message: notice.message,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// Lines in the order they were added
    pub items: Vec<CartItemResponse>,

    pub total_quantity: u64,
    pub total_price: String,

    /// Corrections made against live stock while loading the cart
    pub notices: Vec<NoticeResponse>,
}

impl From<CartSnapshot> for CartResponse {
    fn from(cart: CartSnapshot) -> Self {
        CartResponse {
            items: cart.items.into_iter().map(Into::into).collect(),
            total_quantity: cart.total_quantity,
            total_price: cart.total_price.to_string(),
            notices: cart.notices.into_vec().into_iter().map(Into::into).collect(),
        }
    }
}

/// Result of a cart change, rendered the same way for every front end.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartChangeResponse {
    pub success: bool,
    pub message: String,
    pub cart_total_quantity: u64,
    pub cart_total_price: String,

    /// Live stock of the product touched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_quantity: Option<u32>,

    /// Quantity of that product now in the cart
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_cart_quantity: Option<u32>,
}

impl From<CartMutation> for CartChangeResponse {
    fn from(mutation: CartMutation) -> Self {
        CartChangeResponse {
            success: mutation.accepted,
            message: mutation.message,
            cart_total_quantity: mutation.total_quantity,
            cart_total_price: mutation.total_price.to_string(),
            available_quantity: mutation.available_quantity,
            in_cart_quantity: mutation.in_cart_quantity,
        }
    }
}

/// Render a cart change, answering 400 when it was refused.
pub(crate) fn render_change(
    mutation: CartMutation,
    res: &mut Response,
) -> Json<CartChangeResponse> {
    if !mutation.accepted {
        res.status_code(StatusCode::BAD_REQUEST);
    }

    Json(mutation.into())
}
