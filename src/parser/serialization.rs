//! Pluggable serialization for batches of emitted events.

use std::fmt;

use crate::parser::types::EmittedOrder;

/// Error produced while serializing or deserializing a batch of events.
#[derive(Debug, Clone)]
pub struct SerializationError {
    message: String,
}

impl SerializationError {
    fn new(message: impl Into<String>) -> Self {
        SerializationError {
            message: message.into(),
        }
    }
}

impl fmt::Display for SerializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "serialization error: {}", self.message)
    }
}

impl std::error::Error for SerializationError {}

/// A pluggable codec for batches of [`EmittedOrder`]s.
pub trait EventSerializer: Send + Sync + fmt::Debug {
    /// Serialize a batch of events to bytes.
    fn serialize(&self, orders: &[EmittedOrder]) -> Result<Vec<u8>, SerializationError>;

    /// Deserialize a batch of events from bytes.
    fn deserialize(&self, bytes: &[u8]) -> Result<Vec<EmittedOrder>, SerializationError>;

    /// A MIME-like label for the encoding this serializer produces.
    fn content_type(&self) -> &'static str;
}

/// JSON event serializer, backed by `serde_json`. Always available.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonEventSerializer;

impl EventSerializer for JsonEventSerializer {
    fn serialize(&self, orders: &[EmittedOrder]) -> Result<Vec<u8>, SerializationError> {
        serde_json::to_vec(orders).map_err(|e| SerializationError::new(e.to_string()))
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<Vec<EmittedOrder>, SerializationError> {
        serde_json::from_slice(bytes).map_err(|e| SerializationError::new(e.to_string()))
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }
}

/// Bincode event serializer. Enabled by the `bincode` feature.
#[cfg(feature = "bincode")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BincodeEventSerializer;

#[cfg(feature = "bincode")]
impl EventSerializer for BincodeEventSerializer {
    fn serialize(&self, orders: &[EmittedOrder]) -> Result<Vec<u8>, SerializationError> {
        bincode::serde::encode_to_vec(orders, bincode::config::standard())
            .map_err(|e| SerializationError::new(e.to_string()))
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<Vec<EmittedOrder>, SerializationError> {
        bincode::serde::decode_from_slice(bytes, bincode::config::standard())
            .map(|(orders, _)| orders)
            .map_err(|e| SerializationError::new(e.to_string()))
    }

    fn content_type(&self) -> &'static str {
        "application/octet-stream"
    }
}
