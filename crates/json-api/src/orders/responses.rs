//! Order Responses

use gearlock::orders::{Buyer, FieldError, ValidationErrors};
use gearlock_app::domain::orders::records::{OrderLineRecord, OrderRecord};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BuyerResponse {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,

    /// One of "card", "cash", "bank"
    pub payment_method: String,

    pub notes: String,
}

impl From<Buyer> for BuyerResponse {
    fn from(buyer: Buyer) -> Self {
        BuyerResponse {
            payment_method: buyer.payment_method.as_str().to_string(),
            first_name: buyer.first_name,
            last_name: buyer.last_name,
            email: buyer.email,
            phone: buyer.phone,
            address: buyer.address,
            city: buyer.city,
            postal_code: buyer.postal_code,
            notes: buyer.notes,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderLineResponse {
    pub uuid: Uuid,
    pub product_uuid: Uuid,

    /// Product name when the order was placed
    pub product_name: String,

    /// Unit price when the product was added to the cart
    pub price: String,

    pub quantity: u32,
    pub total_price: String,
}

impl From<OrderLineRecord> for OrderLineResponse {
    fn from(line: OrderLineRecord) -> Self {
        OrderLineResponse {
            uuid: line.uuid.into_uuid(),
            product_uuid: line.product_uuid.into_uuid(),
            total_price: line.total_price().to_string(),
            product_name: line.product_name,
            price: line.price.to_string(),
            quantity: line.quantity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    pub uuid: Uuid,

    /// One of "new", "processing", "shipped", "delivered", "cancelled"
    pub status: String,

    pub status_label: String,
    pub buyer: BuyerResponse,
    pub total_price: String,
    pub lines: Vec<OrderLineResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        OrderResponse {
            uuid: order.uuid.into_uuid(),
            status: order.status.as_str().to_string(),
            status_label: order.status.label().to_string(),
            buyer: order.buyer.into(),
            total_price: order.total_price.to_string(),
            lines: order.lines.into_iter().map(Into::into).collect(),
            created_at: order.created_at.to_string(),
            updated_at: order.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    /// Newest first
    pub orders: Vec<OrderResponse>,
}

impl From<Vec<OrderRecord>> for OrdersResponse {
    fn from(orders: Vec<OrderRecord>) -> Self {
        OrdersResponse {
            orders: orders.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FieldErrorResponse {
    pub field: String,
    pub message: String,
}

impl From<FieldError> for FieldErrorResponse {
    fn from(error: FieldError) -> Self {
        FieldErrorResponse {
            field: error.field,
            message: error.message,
        }
    }
}

/// Body of a 422 answer to a checkout with invalid buyer details.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ValidationErrorResponse {
    pub message: String,

    /// Every rejected field, in form order
    pub fields: Vec<FieldErrorResponse>,
}

impl From<ValidationErrors> for ValidationErrorResponse {
    fn from(errors: ValidationErrors) -> Self {
        ValidationErrorResponse {
            message: errors.to_string(),
            fields: errors.fields.into_iter().map(Into::into).collect(),
        }
    }
}
