//! Order Management

mod handlers;

pub(crate) use handlers::*;
