use clap::Args;
use gearlock::catalog::{PageRequest, ProductSort};
use gearlock_app::domain::products::{PgProductsService, ProductsService, data::ProductFilter};
use rust_decimal::Decimal;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ListProductsArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Only list products whose name, description or SKU contains this text
    #[arg(long)]
    search: Option<String>,

    /// Hide products that are out of stock
    #[arg(long)]
    available_only: bool,

    /// Category slug; subcategories are included
    #[arg(long)]
    category: Option<String>,

    /// Brand slug
    #[arg(long)]
    brand: Option<String>,

    #[arg(long)]
    min_price: Option<Decimal>,

    #[arg(long)]
    max_price: Option<Decimal>,

    /// newest, price_asc, price_desc, name or quantity_desc
    #[arg(long, default_value_t = ProductSort::Newest)]
    sort: ProductSort,

    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Include deactivated products
    #[arg(long)]
    all: bool,
}

pub(crate) async fn run(args: ListProductsArgs) -> Result<(), String> {
    let page = PageRequest::new(args.page).ok_or("page starts at 1")?;

    let service = PgProductsService::new(args.database.connect().await?);

    let products = service
        .list_products(ProductFilter {
            search: args.search,
            available_only: args.available_only,
            category: args.category,
            brand: args.brand,
            min_price: args.min_price,
            max_price: args.max_price,
            include_inactive: args.all,
            sort: args.sort,
            page,
        })
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    if products.items.is_empty() {
        println!("no products found");
        return Ok(());
    }

    println!(
        "page {} of {} ({} products)",
        products.number,
        products.total_pages(),
        products.total_items
    );

    for product in products.items {
        println!(
            "{}  {:<40}  {:>10}  {:>5} in stock{}",
            product.uuid,
            product.name,
            product.price,
            product.quantity,
            if product.is_active { "" } else { "  (inactive)" }
        );
    }

    Ok(())
}
