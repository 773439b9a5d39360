//! Customer contact details collected at checkout.

use serde::{Deserialize, Serialize};

/// Errors reported when checkout details are incomplete.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderInfoError {
    /// The customer name is empty.
    #[error("name is required")]
    MissingName,
    /// The phone number is empty.
    #[error("phone is required")]
    MissingPhone,
    /// The delivery address is empty.
    #[error("address is required")]
    MissingAddress,
}

impl OrderInfoError {
    /// Alert shown to the customer when a required field is empty.
    pub const ALERT: &'static str = "يرجى ملء جميع الحقول الإلزامية";
}

/// Contact and delivery details for one order.
///
/// Exists only for the duration of checkout and is never persisted.
///
/// ## Constraints
///
/// - `name`, `phone`, `address` must be non-empty
/// - `notes` is optional; an empty string means no notes
///
/// ## Examples
///
/// ```
/// use elyosr_core::{OrderInfo, OrderInfoError};
///
/// let mut info = OrderInfo::new("Mona", "0100", "Cairo");
/// assert!(info.validate().is_ok());
///
/// info.address.clear();
/// assert_eq!(info.validate(), Err(OrderInfoError::MissingAddress));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub notes: String,
}

impl OrderInfo {
    /// Create order details without notes.
    #[must_use]
    pub fn new(name: impl Into<String>, phone: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
            notes: String::new(),
        }
    }

    /// Attach free-form notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Check that every required field is filled in.
    ///
    /// Only emptiness is checked; whitespace counts as a value.
    ///
    /// # Errors
    ///
    /// Returns the first missing field, in form order.
    pub fn validate(&self) -> Result<(), OrderInfoError> {
        if self.name.is_empty() {
            return Err(OrderInfoError::MissingName);
        }
        if self.phone.is_empty() {
            return Err(OrderInfoError::MissingPhone);
        }
        if self.address.is_empty() {
            return Err(OrderInfoError::MissingAddress);
        }
        Ok(())
    }

    /// Notes, if any were given.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        Some(self.notes.as_str()).filter(|notes| !notes.is_empty())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_complete() {
        assert!(OrderInfo::new("a", "b", "c").validate().is_ok());
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        assert_eq!(
            OrderInfo::new("", "", "").validate(),
            Err(OrderInfoError::MissingName)
        );
        assert_eq!(
            OrderInfo::new("a", "", "").validate(),
            Err(OrderInfoError::MissingPhone)
        );
        assert_eq!(
            OrderInfo::new("a", "b", "").validate(),
            Err(OrderInfoError::MissingAddress)
        );
    }

    #[test]
    fn test_whitespace_counts_as_value() {
        assert!(OrderInfo::new(" ", " ", " ").validate().is_ok());
    }

    #[test]
    fn test_notes_optional() {
        let info = OrderInfo::new("a", "b", "c");
        assert_eq!(info.notes(), None);
        assert_eq!(info.with_notes("ring twice").notes(), Some("ring twice"));
    }

    #[test]
    fn test_missing_fields_deserialize_empty() {
        let info: OrderInfo = serde_json::from_str(r#"{"name":"a","phone":"b"}"#).unwrap();
        assert_eq!(info.validate(), Err(OrderInfoError::MissingAddress));
    }
}
