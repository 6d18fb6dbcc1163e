use std::fmt;

use crate::store_actor::Entity;

/// Order status labels. An order is `Pending` from creation onward: no
/// operation in the system transitions it, so the later variants exist only
/// for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Completed,
}

impl OrderStatus {
    /// Illustrative progress for the tracking screen's bar. Not a state
    /// machine.
    pub fn progress_percent(&self) -> u8 {
        match self {
            OrderStatus::Pending => 25,
            OrderStatus::Confirmed => 50,
            OrderStatus::Shipped => 75,
            OrderStatus::Completed => 100,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Completed => "Completed",
        };
        f.write_str(label)
    }
}

/// A customer order. Created exclusively by the intake flow, never mutated or
/// removed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Display code in the form `HS-123456`. Not a security token, and not
    /// guaranteed unique under rapid submissions.
    pub id: String,
    pub customer_name: String,
    /// LINE contact handle, free-form.
    pub line_id: String,
    pub product_id: String,
    /// Name snapshot taken at order time; later catalog changes (there are
    /// none today) would not affect it.
    pub product_name: String,
    pub quantity: u32,
    /// Free-form specification / notes text.
    pub specs: String,
    pub status: OrderStatus,
    /// Date stamp taken at submission, display-only.
    pub date: String,
}

impl Entity for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_monotonic_over_status_labels() {
        let steps = [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Shipped,
            OrderStatus::Completed,
        ];
        let percents: Vec<u8> = steps.iter().map(|s| s.progress_percent()).collect();
        assert_eq!(percents, vec![25, 50, 75, 100]);
    }

    #[test]
    fn status_displays_its_label() {
        assert_eq!(OrderStatus::Pending.to_string(), "Pending");
        assert_eq!(OrderStatus::Shipped.to_string(), "Shipped");
    }
}
