use tracing::{debug, instrument};

use crate::domain::Order;
use crate::error::OrderError;
use crate::impl_store_list;
use crate::store_actor::StoreClient;

/// Client for the order store actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: StoreClient<Order>,
}

impl OrderClient {
    pub fn new(inner: StoreClient<Order>) -> Self {
        Self { inner }
    }

    /// Prepends a fully-formed order. Id, status, and date stamp are assigned
    /// by the intake flow before the order reaches the store.
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub async fn submit_order(&self, order: Order) -> Result<(), OrderError> {
        debug!("Sending request");
        self.inner
            .insert(order)
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))
    }

    /// Case-insensitive exact match on the order code. `None` means the code
    /// is unknown, which is an expected user-facing outcome, not a failure.
    #[instrument(skip(self))]
    pub async fn find_order(&self, code: &str) -> Result<Option<Order>, OrderError> {
        debug!("Sending request");
        self.inner
            .find(code)
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))
    }
}

impl_store_list!(OrderClient, Order, OrderError, order);
