//! Encoding of the free-form `metadata` column.
//!
//! Metadata is stored as serialized JSON in a `TEXT` column.

use bandroom_core::error::CoreError;
use bandroom_core::types::Metadata;

pub fn encode_metadata(metadata: &Metadata) -> String {
    serde_json::Value::Object(metadata.clone()).to_string()
}

/// Decode a stored metadata value. Blank text decodes to an empty object;
/// anything that is not a JSON object is an `Internal` error.
pub fn decode_metadata(entity: &'static str, raw: &str) -> Result<Metadata, CoreError> {
    if raw.trim().is_empty() {
        return Ok(Metadata::new());
    }
    serde_json::from_str::<Metadata>(raw).map_err(|e| {
        CoreError::Internal(format!("{entity} has malformed metadata: {e}"))
    })
}
