use std::fmt::Debug;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any domain record must implement to be held by a [`StoreActor`].
pub trait Entity: Clone + Debug + Send + Sync + 'static {
    /// The record's identifying code, as presented to users.
    fn id(&self) -> &str;
}

/// Channel-level failures. Store operations themselves cannot fail; the only
/// way a request goes wrong is the actor being gone.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<T>;

#[derive(Debug)]
pub enum StoreRequest<T: Entity> {
    /// Prepend a fully-formed record. The id is assigned by the caller.
    Insert {
        entity: T,
        respond_to: Response<()>,
    },
    /// Snapshot of all records, most-recently-inserted first.
    List {
        respond_to: Response<Vec<T>>,
    },
    /// Case-insensitive exact match against the record id.
    Find {
        code: String,
        respond_to: Response<Option<T>>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// An actor owning an ordered, insert-only sequence of records.
///
/// There is no update or delete: records are immutable once inserted, which is
/// the whole lifecycle the storefront needs.
pub struct StoreActor<T: Entity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    entries: Vec<T>,
}

impl<T: Entity> StoreActor<T> {
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            entries: Vec::new(),
        };
        (actor, StoreClient::new(sender))
    }

    /// Pre-populate the store before it starts serving requests. The seed is
    /// kept in the given order; later inserts land in front of it.
    pub fn with_seed(mut self, seed: Vec<T>) -> Self {
        self.entries = seed;
        self
    }

    pub async fn run(mut self) {
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Insert { entity, respond_to } => {
                    self.entries.insert(0, entity);
                    let _ = respond_to.send(());
                }
                StoreRequest::List { respond_to } => {
                    let _ = respond_to.send(self.entries.clone());
                }
                StoreRequest::Find { code, respond_to } => {
                    let found = self
                        .entries
                        .iter()
                        .find(|e| e.id().eq_ignore_ascii_case(&code))
                        .cloned();
                    let _ = respond_to.send(found);
                }
            }
        }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct StoreClient<T: Entity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: Entity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn insert(&self, entity: T) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Insert { entity, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::List { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    pub async fn find(&self, code: &str) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Find {
                code: code.to_string(),
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Ticket {
        code: String,
        label: String,
    }

    impl Entity for Ticket {
        fn id(&self) -> &str {
            &self.code
        }
    }

    fn ticket(code: &str, label: &str) -> Ticket {
        Ticket {
            code: code.to_string(),
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn inserts_are_prepended() {
        let (actor, client) = StoreActor::new(10);
        tokio::spawn(actor.run());

        client.insert(ticket("T-1", "first")).await.unwrap();
        client.insert(ticket("T-2", "second")).await.unwrap();
        client.insert(ticket("T-3", "third")).await.unwrap();

        let all = client.list().await.unwrap();
        let codes: Vec<&str> = all.iter().map(|t| t.code.as_str()).collect();
        assert_eq!(codes, vec!["T-3", "T-2", "T-1"]);
    }

    #[tokio::test]
    async fn seed_sits_behind_later_inserts() {
        let (actor, client) = StoreActor::new(10);
        let actor = actor.with_seed(vec![ticket("T-1", "seeded"), ticket("T-2", "seeded")]);
        tokio::spawn(actor.run());

        client.insert(ticket("T-3", "fresh")).await.unwrap();

        let all = client.list().await.unwrap();
        let codes: Vec<&str> = all.iter().map(|t| t.code.as_str()).collect();
        assert_eq!(codes, vec!["T-3", "T-1", "T-2"]);
    }

    #[tokio::test]
    async fn find_is_case_insensitive_exact_match() {
        let (actor, client) = StoreActor::new(10);
        tokio::spawn(actor.run());

        client.insert(ticket("HS-123456", "order")).await.unwrap();

        let hit = client.find("hs-123456").await.unwrap();
        assert_eq!(hit.map(|t| t.code), Some("HS-123456".to_string()));

        let miss = client.find("HS-123").await.unwrap();
        assert_eq!(miss, None);
    }

    #[tokio::test]
    async fn client_reports_closed_actor() {
        let (actor, client) = StoreActor::<Ticket>::new(10);
        drop(actor);

        let err = client.list().await.unwrap_err();
        assert_eq!(err, FrameworkError::ActorClosed);
    }
}
