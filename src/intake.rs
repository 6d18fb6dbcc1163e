use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{info, instrument};

use crate::clients::OrderClient;
use crate::domain::{ids, Order, OrderStatus, Product, View};
use crate::error::IntakeError;
use crate::router::ViewRouter;

/// How long the confirmation screen stays up before the flow redirects to
/// the tracking view.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Lifecycle of one intake modal. `Submitted` is terminal: a flow places at
/// most one order.
#[derive(Debug, Clone, PartialEq)]
pub enum IntakeState {
    Editing,
    Submitted { order_id: String },
}

/// The modal-scoped process turning a product selection plus customer input
/// into a stored order.
///
/// On submission the flow mints the order code, stamps the date, forces the
/// status to `Pending`, hands the order to the store, and schedules the
/// redirect to tracking. The redirect timer is owned by the flow: dismissing
/// the modal cancels it instead of letting it fire against a closed view.
pub struct IntakeFlow {
    product: Product,
    orders: OrderClient,
    router: ViewRouter,
    name: String,
    line_id: String,
    specs: String,
    quantity: u32,
    state: IntakeState,
    redirect_delay: Duration,
    redirect: Option<JoinHandle<()>>,
}

impl IntakeFlow {
    /// Opens the modal for the selected product with an empty draft.
    pub fn open(product: Product, orders: OrderClient, router: ViewRouter) -> Self {
        Self {
            product,
            orders,
            router,
            name: String::new(),
            line_id: String::new(),
            specs: String::new(),
            quantity: 1,
            state: IntakeState::Editing,
            redirect_delay: REDIRECT_DELAY,
            redirect: None,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_line_id(&mut self, line_id: impl Into<String>) {
        self.line_id = line_id.into();
    }

    pub fn set_specs(&mut self, specs: impl Into<String>) {
        self.specs = specs.into();
    }

    /// Unbounded upward.
    pub fn increment_quantity(&mut self) {
        self.quantity += 1;
    }

    /// Clamped at 1, no matter how often it is pressed.
    pub fn decrement_quantity(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(1);
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Running total shown under the form.
    pub fn total(&self) -> u64 {
        u64::from(self.product.price) * u64::from(self.quantity)
    }

    #[allow(dead_code)]
    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn state(&self) -> &IntakeState {
        &self.state
    }

    /// `Editing -> Submitted`. Guarded by required-field presence only; on a
    /// guard failure nothing reaches the store. Returns the generated order
    /// code shown on the confirmation screen.
    #[instrument(skip(self), fields(product_id = %self.product.id))]
    pub async fn submit(&mut self) -> Result<String, IntakeError> {
        if matches!(self.state, IntakeState::Submitted { .. }) {
            return Err(IntakeError::AlreadySubmitted);
        }
        if self.name.trim().is_empty() {
            return Err(IntakeError::MissingField("name"));
        }
        if self.line_id.trim().is_empty() {
            return Err(IntakeError::MissingField("line_id"));
        }
        if self.specs.trim().is_empty() {
            return Err(IntakeError::MissingField("specs"));
        }

        let order_id = ids::order_code();
        let order = Order {
            id: order_id.clone(),
            customer_name: self.name.clone(),
            line_id: self.line_id.clone(),
            product_id: self.product.id.clone(),
            product_name: self.product.name.clone(),
            quantity: self.quantity,
            specs: self.specs.clone(),
            status: OrderStatus::Pending,
            date: submission_date(),
        };
        self.orders.submit_order(order).await?;

        info!(order_id = %order_id, "Order placed");
        self.state = IntakeState::Submitted {
            order_id: order_id.clone(),
        };

        // Confirmation stays visible for the delay, then the flow lands the
        // user on tracking where the fresh code can be looked up.
        let router = self.router.clone();
        let delay = self.redirect_delay;
        self.redirect = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            router.navigate(View::Tracking);
        }));

        Ok(order_id)
    }

    /// Dismisses the modal. Before submission this discards the draft without
    /// a prompt; after submission it cancels a still-pending redirect.
    pub fn close(self) {}
}

impl Drop for IntakeFlow {
    fn drop(&mut self) {
        if let Some(redirect) = self.redirect.take() {
            redirect.abort();
        }
    }
}

/// Date stamp for new orders. The source used the viewer's locale; headless
/// we settle on ISO `YYYY-MM-DD`, which is display-only either way.
pub fn submission_date() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
