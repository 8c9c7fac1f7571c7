use clap::Parser;
use rust_decimal::Decimal;
use small_orders::utils::{logger, validation::Validate};
use small_orders::{
    Catalog, CliConfig, InMemoryCustomers, InMemoryOrders, InMemoryProducts, OrderPlacer,
    OrderRequest,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-orders CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let catalog = match Catalog::load(&config.catalog) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Failed to load catalog {}: {}", config.catalog, e);
            eprintln!("❌ Cannot load catalog {}: {}", config.catalog, e);
            std::process::exit(2);
        }
    };
    tracing::debug!(
        "Loaded catalog: {} customer(s), {} product(s)",
        catalog.customers.len(),
        catalog.products.len()
    );

    let request = OrderRequest {
        customer_id: config.customer.clone(),
        lines: config.requested_lines()?,
    };

    let customers = InMemoryCustomers::seeded(catalog.customers);
    let products = InMemoryProducts::seeded(catalog.products);
    let orders = InMemoryOrders::new();

    let placer = OrderPlacer::new(customers, products, orders);

    match placer.place_order(request).await {
        Ok(order) => {
            let total: Decimal = order
                .lines
                .iter()
                .map(|line| line.price * Decimal::from(line.quantity))
                .sum();
            println!("✅ Order {} placed at {}", order.id, order.created_at);
            for line in &order.lines {
                println!("   {} x{} @ {}", line.product_id, line.quantity, line.price);
            }
            println!("   Total: {}", total);
        }
        Err(e) => {
            tracing::error!("Order placement failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(if e.is_domain() { 1 } else { 2 });
        }
    }

    Ok(())
}
