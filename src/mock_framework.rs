//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver, then helpers
//! like [`expect_insert`] or [`expect_find`] to assert on the traffic.

use tokio::sync::{mpsc, oneshot};

use crate::store_actor::{Entity, StoreClient, StoreRequest};

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// Instead of spinning up a full `StoreActor` when the subject under test is
/// a client, we hand the client a channel we control and inspect the messages
/// arriving on it. That lets a test play the actor's side deterministically,
/// including failures and delays.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Insert request.
pub async fn expect_insert<T: Entity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T, oneshot::Sender<()>)> {
    match receiver.recv().await {
        Some(StoreRequest::Insert { entity, respond_to }) => Some((entity, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request.
pub async fn expect_list<T: Entity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<oneshot::Sender<Vec<T>>> {
    match receiver.recv().await {
        Some(StoreRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Find request.
pub async fn expect_find<T: Entity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(String, oneshot::Sender<Option<T>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Find { code, respond_to }) => Some((code, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::OrderClient;
    use crate::domain::{Order, OrderStatus};

    fn pending_order(id: &str) -> Order {
        Order {
            id: id.to_string(),
            customer_name: "Jane".to_string(),
            line_id: "janeline".to_string(),
            product_id: "1".to_string(),
            product_name: "NewJeans 2nd EP 'Get Up'".to_string(),
            quantity: 1,
            specs: "ver. A".to_string(),
            status: OrderStatus::Pending,
            date: "2026-08-27".to_string(),
        }
    }

    #[tokio::test]
    async fn order_client_sends_insert_for_submissions() {
        let (inner, mut rx) = create_mock_client::<Order>(10);
        let client = OrderClient::new(inner);

        let submit_task = tokio::spawn(async move {
            client.submit_order(pending_order("HS-000042")).await
        });

        let (order, responder) = expect_insert(&mut rx).await.expect("Expected Insert request");
        assert_eq!(order.id, "HS-000042");
        assert_eq!(order.status, OrderStatus::Pending);
        responder.send(()).unwrap();

        submit_task.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn catalog_client_list_is_a_plain_pass_through() {
        use crate::clients::CatalogClient;
        use crate::domain::Product;

        let (inner, mut rx) = create_mock_client::<Product>(10);
        let client = CatalogClient::new(inner);

        let list_task = tokio::spawn(async move { client.list_products().await });

        let responder = expect_list(&mut rx).await.expect("Expected List request");
        responder.send(Vec::new()).unwrap();

        assert!(list_task.await.unwrap().unwrap().is_empty());
    }

    #[tokio::test]
    async fn order_client_passes_the_search_code_through() {
        let (inner, mut rx) = create_mock_client::<Order>(10);
        let client = OrderClient::new(inner);

        let find_task = tokio::spawn(async move { client.find_order("hs-000042").await });

        let (code, responder) = expect_find(&mut rx).await.expect("Expected Find request");
        assert_eq!(code, "hs-000042");
        responder.send(Some(pending_order("HS-000042"))).unwrap();

        let found = find_task.await.unwrap().unwrap();
        assert_eq!(found.map(|o| o.id), Some("HS-000042".to_string()));
    }
}
