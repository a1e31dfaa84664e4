//! App Router

use salvo::Router;

use crate::{
    auth, brands, cart, categories, healthcheck, manage, orders, products, reviews, session,
};

/// Storefront routes for customers, backed by the session cookie.
fn storefront_router() -> Router {
    Router::new()
        .hoop(session::handler)
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("by-slug/{slug}").get(products::by_slug::handler))
                .push(
                    Router::with_path("{product}")
                        .get(products::get::handler)
                        .push(
                            Router::with_path("reviews")
                                .get(reviews::index::handler)
                                .post(reviews::create::handler),
                        ),
                ),
        )
        .push(
            Router::with_path("categories")
                .get(categories::index::handler)
                .push(Router::with_path("{slug}").get(categories::get::handler)),
        )
        .push(
            Router::with_path("brands")
                .get(brands::index::handler)
                .push(Router::with_path("{slug}").get(brands::get::handler)),
        )
        .push(
            Router::with_path("cart")
                .get(cart::show::handler)
                .delete(cart::clear::handler)
                .push(
                    Router::with_path("items")
                        .post(cart::add::handler)
                        .push(
                            Router::with_path("{product}")
                                .put(cart::update::handler)
                                .delete(cart::remove::handler),
                        ),
                ),
        )
        .push(Router::with_path("checkout").post(orders::checkout::handler))
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .push(Router::with_path("{order}").get(orders::get::handler)),
        )
}

/// Catalog editing, for staff allowed to manage the catalog.
fn catalog_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .hoop(auth::middleware::require_catalog_manager)
        .push(
            Router::with_path("products")
                .post(products::create::handler)
                .push(
                    Router::with_path("{product}")
                        .put(products::update::handler)
                        .delete(products::delete::handler)
                        .push(Router::with_path("stock").put(products::stock::handler)),
                ),
        )
        .push(
            Router::with_path("categories")
                .post(categories::create::handler)
                .push(Router::with_path("{slug}").delete(categories::delete::handler)),
        )
        .push(
            Router::with_path("brands")
                .post(brands::create::handler)
                .push(Router::with_path("{slug}").delete(brands::delete::handler)),
        )
}

/// Order management, for staff allowed to manage orders.
fn manage_router() -> Router {
    Router::with_path("manage")
        .hoop(auth::middleware::handler)
        .hoop(auth::middleware::require_order_manager)
        .push(
            Router::with_path("orders")
                .get(manage::index::handler)
                .push(
                    Router::with_path("{order}")
                        .get(manage::get::handler)
                        .push(Router::with_path("status").put(manage::status::handler)),
                ),
        )
}

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(manage_router())
        .push(storefront_router())
        .push(catalog_router())
}
