//! Timestamp-derived display identifiers.
//!
//! Both generators mirror the shop's existing codes: opaque millisecond
//! strings for products, a short `HS-` code for orders. Neither is checked
//! for uniqueness; rapid submissions can collide. Treat these as display
//! codes, never as security tokens.

use chrono::Utc;

/// Prefix carried by every order code.
pub const ORDER_CODE_PREFIX: &str = "HS-";

/// Opaque product id: the current millisecond timestamp as a string.
pub fn product_id() -> String {
    Utc::now().timestamp_millis().to_string()
}

/// Human-presentable order code: the fixed prefix plus the last six digits of
/// a millisecond timestamp.
pub fn order_code() -> String {
    let millis = Utc::now().timestamp_millis();
    format!("{}{:06}", ORDER_CODE_PREFIX, millis % 1_000_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_code_matches_the_display_format() {
        let code = order_code();
        let digits = code.strip_prefix(ORDER_CODE_PREFIX).unwrap();
        assert_eq!(digits.len(), 6);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn product_id_is_numeric() {
        let id = product_id();
        assert!(!id.is_empty());
        assert!(id.chars().all(|c| c.is_ascii_digit()));
    }
}
