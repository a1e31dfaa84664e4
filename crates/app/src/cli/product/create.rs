use clap::Args;
use gearlock_app::domain::{
    brands::records::BrandUuid,
    categories::records::CategoryUuid,
    products::{PgProductsService, ProductsService, data::NewProduct},
};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Product display name
    #[arg(long)]
    name: String,

    /// Unit price, e.g. 19.99
    #[arg(long)]
    price: Decimal,

    /// Units in stock
    #[arg(long, default_value_t = 0)]
    quantity: u32,

    /// Optional stock keeping unit; used for the slug when given
    #[arg(long)]
    sku: Option<String>,

    #[arg(long, default_value = "")]
    description: String,

    /// Price before a markdown, shown struck through
    #[arg(long)]
    old_price: Option<Decimal>,

    /// Category UUID
    #[arg(long)]
    category: Option<Uuid>,

    /// Brand UUID
    #[arg(long)]
    brand: Option<Uuid>,

    /// Keep the product out of storefront listings
    #[arg(long)]
    inactive: bool,
}

pub(crate) async fn run(args: CreateProductArgs) -> Result<(), String> {
    if args.price.is_sign_negative() || args.old_price.is_some_and(|old| old.is_sign_negative()) {
        return Err("prices cannot be negative".to_string());
    }

    let service = PgProductsService::new(args.database.connect().await?);

    let product = service
        .create_product(NewProduct {
            name: args.name,
            sku: args.sku,
            description: args.description,
            price: args.price,
            old_price: args.old_price,
            quantity: args.quantity,
            category: args.category.map(CategoryUuid::from_uuid),
            brand: args.brand.map(BrandUuid::from_uuid),
            is_active: !args.inactive,
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    println!("product_uuid: {}", product.uuid);
    println!("slug: {}", product.slug);
    println!("price: {}", product.price);
    println!("quantity: {}", product.quantity);
    println!("discount: {}%", product.discount_percent());

    Ok(())
}
