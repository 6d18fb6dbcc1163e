mod admin;
mod app_system;
mod assist;
mod clients;
mod domain;
mod error;
mod intake;
mod router;
mod store_actor;
mod tracking;

#[cfg(test)]
mod mock_framework;

use std::path::Path;

use tracing::{info, Instrument};

use crate::admin::AdminForm;
use crate::app_system::{setup_tracing, Storefront};
use crate::domain::View;
use crate::intake::IntakeFlow;
use crate::tracking::{SearchOutcome, TrackingScreen};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting K-pop shop storefront demo");

    let shop = Storefront::new();
    shop.router.navigate(View::ProductList);

    let products = shop
        .catalog
        .list_products()
        .await
        .map_err(|e| e.to_string())?;
    info!(count = products.len(), "Catalog loaded");
    let featured = products.first().cloned().ok_or("Catalog is empty")?;
    info!(product = %featured.name, price = featured.price, "Opening intake for featured product");

    // Walk one order through the intake flow, the way a buyer would.
    let mut views = shop.router.subscribe();
    let mut flow = IntakeFlow::open(featured, shop.orders.clone(), shop.router.clone());
    flow.set_name("Jane");
    flow.set_line_id("janeline");
    flow.set_specs("ver. A");
    flow.increment_quantity();
    flow.increment_quantity();
    flow.decrement_quantity();
    info!(quantity = flow.quantity(), total = flow.total(), "Draft ready");

    let order_id = flow
        .submit()
        .instrument(tracing::info_span!("order_intake"))
        .await
        .map_err(|e| e.to_string())?;
    info!(order_id = %order_id, state = ?flow.state(), "Order placed, confirmation on screen");

    // The flow redirects to tracking once the confirmation delay elapses.
    views.changed().await.map_err(|e| e.to_string())?;
    info!(view = ?shop.router.current(), "Redirect fired");
    flow.close();

    let mut tracking = TrackingScreen::new(shop.orders.clone());
    match tracking
        .search(&order_id)
        .instrument(tracing::info_span!("order_lookup"))
        .await
        .map_err(|e| e.to_string())?
    {
        Some(SearchOutcome::Found(order)) => info!(
            order_id = %order.id,
            product_id = %order.product_id,
            product = %order.product_name,
            customer = %order.customer_name,
            contact = %order.line_id,
            specs = %order.specs,
            quantity = order.quantity,
            date = %order.date,
            status = %order.status,
            progress = order.status.progress_percent(),
            "Order located"
        ),
        Some(SearchOutcome::NotFound { code }) => info!(code = %code, "Order not found"),
        None => info!("No search performed"),
    }
    drop(tracking);

    // List one product through the admin form. Without a credential the
    // description assist falls back to its placeholder text.
    shop.router.navigate(View::Admin);
    let mut admin = AdminForm::new(shop.catalog.clone(), shop.assist.clone());
    admin.set_name("NewJeans 'How Sweet' Album");
    admin.set_price("850");
    admin.set_category(admin::CATEGORIES[0]);
    admin.set_description("Pre-order now, ships in August.");
    admin.attach_image(Path::new("how-sweet.jpg"));
    admin
        .generate_description()
        .instrument(tracing::info_span!("description_assist"))
        .await;

    let listed = admin.submit().await.map_err(|e| e.to_string())?;
    info!(
        product_id = %listed.id,
        category = %listed.category,
        image = %listed.image,
        description = %listed.description,
        "Product listed via admin"
    );
    drop(admin);

    shop.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
