use tracing::{debug, instrument};

use crate::domain::{ids, Product, ProductDraft};
use crate::error::CatalogError;
use crate::impl_store_list;
use crate::store_actor::StoreClient;

/// Client for the catalog store actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: StoreClient<Product>,
}

impl CatalogClient {
    pub fn new(inner: StoreClient<Product>) -> Self {
        Self { inner }
    }

    /// Builds a product from the admin-supplied draft plus a freshly minted
    /// id and prepends it to the catalog. Cannot fail given a well-formed
    /// draft; only channel failures surface.
    #[instrument(skip(self, draft), fields(product_name = %draft.name))]
    pub async fn add_product(&self, draft: ProductDraft) -> Result<Product, CatalogError> {
        debug!("Sending request");
        let product = Product::from_draft(ids::product_id(), draft);
        self.inner
            .insert(product.clone())
            .await
            .map_err(|e| CatalogError::ActorCommunicationError(e.to_string()))?;
        Ok(product)
    }
}

impl_store_list!(CatalogClient, Product, CatalogError, product);
