//! Carts service.

use async_trait::async_trait;
use gearlock::{
    cart::{Cart, QuantityMode},
    notices::Notices,
    products::{Product, ProductId},
};
use mockall::automock;
use tracing::{debug, warn};

use crate::{
    database::Db,
    domain::{
        carts::{
            data::{CartItemView, CartMutation, CartSnapshot},
            errors::CartsServiceError,
            repository::PgCartSessionsRepository,
        },
        products::{records::ProductRecord, repository::PgProductsRepository},
        sessions::SessionUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    sessions_repository: PgCartSessionsRepository,
    products_repository: PgProductsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            sessions_repository: PgCartSessionsRepository::new(),
            products_repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_cart(&self, session: SessionUuid) -> Result<CartSnapshot, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut cart = self.sessions_repository.load_cart(&mut tx, session).await?;

        let products: Vec<Product> = self
            .products_repository
            .find_products(&mut tx, &cart.product_ids())
            .await?
            .iter()
            .map(ProductRecord::to_product)
            .collect();

        let mut notices = Notices::new();
        let adjustments = cart.reconcile(&products, Some(&mut notices));

        if !adjustments.is_empty() {
            warn!(
                %session,
                adjustments = adjustments.len(),
                "cart corrected against live stock"
            );

            self.sessions_repository
                .save_cart(&mut tx, session, &cart)
                .await?;
        }

        tx.commit().await?;

        Ok(CartSnapshot {
            items: cart.iter_with(&products).map(CartItemView::from).collect(),
            total_quantity: cart.total_quantity(),
            total_price: cart.total_price(),
            notices,
        })
    }

    async fn add_item(
        &self,
        session: SessionUuid,
        product: ProductId,
        quantity: u32,
        mode: QuantityMode,
    ) -> Result<CartMutation, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self.products_repository.get_product(&mut tx, product).await?;

        let mut cart = self.sessions_repository.load_cart(&mut tx, session).await?;

        let (accepted, message) = match cart.add(&record.to_product(), quantity, mode, None) {
            Ok(addition) => {
                self.sessions_repository
                    .save_cart(&mut tx, session, &cart)
                    .await?;

                (true, addition.message())
            }
            Err(error) => {
                debug!(%session, %product, %error, "cart change refused");

                (false, error.to_string())
            }
        };

        tx.commit().await?;

        Ok(summarize(&cart, accepted, message, Some((product, record.quantity))))
    }

    async fn remove_item(
        &self,
        session: SessionUuid,
        product: ProductId,
    ) -> Result<CartMutation, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut cart = self.sessions_repository.load_cart(&mut tx, session).await?;

        let message = match cart.remove(product) {
            Some(line) => {
                self.sessions_repository
                    .save_cart(&mut tx, session, &cart)
                    .await?;

                format!("\"{}\" removed from cart", line.product_name)
            }
            None => "product was not in your cart".to_string(),
        };

        tx.commit().await?;

        let mut mutation = summarize(&cart, true, message, None);

        mutation.in_cart_quantity = Some(0);

        Ok(mutation)
    }

    async fn clear_cart(&self, session: SessionUuid) -> Result<CartMutation, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut cart = self.sessions_repository.load_cart(&mut tx, session).await?;

        cart.clear();

        self.sessions_repository
            .save_cart(&mut tx, session, &cart)
            .await?;

        tx.commit().await?;

        Ok(summarize(&cart, true, "cart cleared".to_string(), None))
    }
}

fn summarize(
    cart: &Cart,
    accepted: bool,
    message: String,
    product: Option<(ProductId, u32)>,
) -> CartMutation {
    CartMutation {
        accepted,
        message,
        total_quantity: cart.total_quantity(),
        total_price: cart.total_price(),
        available_quantity: product.map(|(_, available)| available),
        in_cart_quantity: product.map(|(product, _)| cart.get_item_quantity(product)),
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Load the session's cart, correct it against live stock and return it with any
    /// correction notices.
    async fn get_cart(&self, session: SessionUuid) -> Result<CartSnapshot, CartsServiceError>;

    /// Add units of a product, or replace the held quantity with [`QuantityMode::Replace`].
    ///
    /// Refusals for lack of stock are reported as an unaccepted mutation, not an error.
    async fn add_item(
        &self,
        session: SessionUuid,
        product: ProductId,
        quantity: u32,
        mode: QuantityMode,
    ) -> Result<CartMutation, CartsServiceError>;

    /// Remove a product's line. Removing an absent product is not an error.
    async fn remove_item(
        &self,
        session: SessionUuid,
        product: ProductId,
    ) -> Result<CartMutation, CartsServiceError>;

    /// Empty the session's cart.
    async fn clear_cart(&self, session: SessionUuid) -> Result<CartMutation, CartsServiceError>;
}
