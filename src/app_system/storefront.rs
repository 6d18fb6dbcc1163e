use std::sync::Arc;

use tracing::{error, info};

use crate::assist::{DescriptionGenerator, GeminiAssist};
use crate::clients::{CatalogClient, OrderClient};
use crate::domain::Product;
use crate::router::ViewRouter;
use crate::store_actor::StoreActor;

/// Launch inventory. New products land in front of these.
pub fn initial_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "NewJeans 2nd EP 'Get Up'".to_string(),
            price: 650,
            image: "https://picsum.photos/400/500?random=1".to_string(),
            category: "Album".to_string(),
            description: "The highly anticipated 2nd EP featuring hit tracks Super Shy and ETA. Includes photobook and random card.".to_string(),
        },
        Product {
            id: "2".to_string(),
            name: "IVE - THE 1st EP <I'VE MINE>".to_string(),
            price: 580,
            image: "https://picsum.photos/400/500?random=2".to_string(),
            category: "Album".to_string(),
            description: "IVE's latest comeback featuring triple title tracks. Comes with various pre-order benefits.".to_string(),
        },
        Product {
            id: "3".to_string(),
            name: "SEVENTEEN Official Light Stick Ver.3".to_string(),
            price: 1500,
            image: "https://picsum.photos/400/500?random=3".to_string(),
            category: "Merch".to_string(),
            description: "The official carat bong ver.3 with improved bluetooth connectivity and color customization.".to_string(),
        },
        Product {
            id: "4".to_string(),
            name: "AESPA Drama The 4th Mini Album".to_string(),
            price: 620,
            image: "https://picsum.photos/400/500?random=4".to_string(),
            category: "Album".to_string(),
            description: "Experience the drama with Aespa's powerful new mini album. Giant version available.".to_string(),
        },
    ]
}

/// The application root: owns the store actors, the view selector, and the
/// shared description generator, and hands clients to the screens.
///
/// Single writer, many readers: every mutation goes through a client command,
/// and screens only ever see snapshots.
pub struct Storefront {
    pub catalog: CatalogClient,
    pub orders: OrderClient,
    pub router: ViewRouter,
    pub assist: Arc<dyn DescriptionGenerator>,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Storefront {
    pub fn new() -> Self {
        Self::with_assist(Arc::new(GeminiAssist::from_env()))
    }

    /// Wires the system around a caller-chosen generator. Tests use this to
    /// avoid the network.
    pub fn with_assist(assist: Arc<dyn DescriptionGenerator>) -> Self {
        let (catalog_actor, catalog_store) = StoreActor::new(32);
        let catalog_actor = catalog_actor.with_seed(initial_products());
        let catalog_handle = tokio::spawn(catalog_actor.run());

        let (order_actor, order_store) = StoreActor::new(32);
        let order_handle = tokio::spawn(order_actor.run());

        Self {
            catalog: CatalogClient::new(catalog_store),
            orders: OrderClient::new(order_store),
            router: ViewRouter::new(),
            assist,
            handles: vec![catalog_handle, order_handle],
        }
    }

    /// Drops the clients, which closes the store channels, then waits for the
    /// actors to drain. Clones handed to screens must be gone by now or the
    /// join waits on them.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");

        drop(self.catalog);
        drop(self.orders);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store actor task failed: {:?}", e);
                return Err(format!("Store actor task failed: {:?}", e));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assist::Blurb;
    use async_trait::async_trait;

    struct NoAssist;

    #[async_trait]
    impl DescriptionGenerator for NoAssist {
        async fn generate(&self, _product_name: &str, _category: &str) -> Blurb {
            Blurb::Fallback("")
        }
    }

    #[tokio::test]
    async fn catalog_starts_with_the_seed_inventory() {
        let shop = Storefront::with_assist(Arc::new(NoAssist));

        let products = shop.catalog.list_products().await.unwrap();
        assert_eq!(products.len(), 4);
        assert_eq!(products[0].name, "NewJeans 2nd EP 'Get Up'");
        assert_eq!(products[0].price, 650);

        assert!(shop.orders.list_orders().await.unwrap().is_empty());
        shop.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn shutdown_joins_both_store_actors() {
        let shop = Storefront::with_assist(Arc::new(NoAssist));
        shop.shutdown().await.unwrap();
    }
}
