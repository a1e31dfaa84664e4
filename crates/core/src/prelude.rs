//! Gearlock prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{
        AdditionKind, Adjustment, Cart, CartAddition, CartCodecError, CartError, CartItem,
        CartItems, CartLine, QuantityMode,
    },
    catalog::{Page, PageRequest, ProductSort, discount_percent},
    notices::{Notice, NoticeLevel, Notices},
    orders::{
        Buyer, BuyerDetails, MaterializeError, NewOrder, NewOrderLine, OrderStatus,
        PaymentMethod, StatusChange, StockPolicy, TransitionPolicy, ValidationErrors, materialize,
        request_status_change,
    },
    products::{Availability, Product, ProductId},
    reviews::{Rating, ReviewDraft, average_rating},
    roles::Role,
    slugs::{base_slug, slug_or, slugify, unique_slug},
};
