use tracing::{debug, instrument};

use crate::clients::OrderClient;
use crate::domain::Order;
use crate::error::OrderError;

/// Outcome of an order-code lookup. A miss is an expected, user-facing
/// presentation, never an error.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(Order),
    NotFound { code: String },
}

/// The order-status lookup screen: a search box over the order store plus the
/// last outcome, which the page keeps showing until the next search.
pub struct TrackingScreen {
    orders: OrderClient,
    last: Option<SearchOutcome>,
}

impl TrackingScreen {
    pub fn new(orders: OrderClient) -> Self {
        Self { orders, last: None }
    }

    /// Looks up a code. Blank input is ignored and leaves the previous
    /// outcome in place, matching the form's refusal to search empty terms.
    #[instrument(skip(self))]
    pub async fn search(&mut self, code: &str) -> Result<Option<&SearchOutcome>, OrderError> {
        let code = code.trim();
        if code.is_empty() {
            debug!("Ignoring blank search");
        } else {
            let outcome = match self.orders.find_order(code).await? {
                Some(order) => SearchOutcome::Found(order),
                None => SearchOutcome::NotFound {
                    code: code.to_string(),
                },
            };
            self.last = Some(outcome);
        }
        Ok(self.last.as_ref())
    }

    #[allow(dead_code)]
    pub fn last_search(&self) -> Option<&SearchOutcome> {
        self.last.as_ref()
    }
}
