use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, instrument};

use crate::domain::View;

/// Single selector over the four top-level screens.
///
/// Handles are cheap clones over one shared `watch` channel, so any flow may
/// request a navigation and any observer may await changes. Navigation never
/// clears other component state.
#[derive(Clone)]
pub struct ViewRouter {
    tx: Arc<watch::Sender<View>>,
}

impl ViewRouter {
    /// Starts on [`View::Home`].
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(View::default());
        Self { tx: Arc::new(tx) }
    }

    #[instrument(skip(self))]
    pub fn navigate(&self, view: View) {
        debug!("Switching view");
        self.tx.send_replace(view);
    }

    pub fn current(&self) -> View {
        *self.tx.borrow()
    }

    /// Receiver that observers can await for view changes.
    pub fn subscribe(&self) -> watch::Receiver<View> {
        self.tx.subscribe()
    }
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_on_home_and_navigates() {
        let router = ViewRouter::new();
        assert_eq!(router.current(), View::Home);

        router.navigate(View::Admin);
        assert_eq!(router.current(), View::Admin);
    }

    #[tokio::test]
    async fn subscribers_observe_navigation() {
        let router = ViewRouter::new();
        let mut rx = router.subscribe();

        let observer = router.clone();
        tokio::spawn(async move {
            observer.navigate(View::Tracking);
        });

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), View::Tracking);
    }

    #[tokio::test]
    async fn clones_share_the_same_selector() {
        let router = ViewRouter::new();
        let other = router.clone();

        other.navigate(View::ProductList);
        assert_eq!(router.current(), View::ProductList);
    }
}
