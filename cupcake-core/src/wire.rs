//! JSON wire format exchanged with the order endpoint.

use crate::order::Order;

#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("Failed to encode order: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Failed to decode order: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Encode the eight wire fields of `order`, in wire order.
pub fn serialize(order: &Order) -> Result<Vec<u8>, WireError> {
    serde_json::to_vec(order).map_err(WireError::Encode)
}

/// Decode an order from a JSON object carrying all eight wire fields.
///
/// Extra keys are ignored. `special_requests` comes back as `false`.
pub fn deserialize(bytes: &[u8]) -> Result<Order, WireError> {
    serde_json::from_slice(bytes).map_err(WireError::Decode)
}

/// Decode an order from an already parsed JSON value.
pub fn from_value(value: serde_json::Value) -> Result<Order, WireError> {
    serde_json::from_value(value).map_err(WireError::Decode)
}
