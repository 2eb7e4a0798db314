//! JSON helpers - thin typed wrappers over serde_json
//!
//! `encode` turns a serializable value into its JSON text; `decode`
//! parses JSON text directly into a concrete type, so operations defined
//! on that type are available on the result. The two failure directions
//! stay distinct: [`SerializationError`] going out, [`ParseError`]
//! coming in.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A value could not be represented as JSON text.
///
/// Rust ownership rules out cyclic plain data, so in practice this
/// surfaces serde_json's other unrepresentable cases, e.g. a map with
/// non-string keys.
#[derive(thiserror::Error, Debug)]
#[error("JSON encode failed: {0}")]
pub struct SerializationError(#[from] serde_json::Error);

/// Input text was not valid JSON, or did not match the target type.
#[derive(thiserror::Error, Debug)]
#[error("JSON parse failed: {0}")]
pub struct ParseError(#[from] serde_json::Error);

/// Encode `value` as a JSON string.
///
/// Object key order follows serde_json's serializer (struct field order
/// for derived types).
pub fn encode<T: Serialize>(value: &T) -> Result<String, SerializationError> {
    Ok(serde_json::to_string(value)?)
}

/// Parse `text` as JSON and construct a `T` from the parsed record.
///
/// `T` plays the role of the capability set: any method defined on `T`
/// is callable on the decoded value.
pub fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ParseError> {
    Ok(serde_json::from_str(text)?)
}

/// Parse `text` as JSON into an untyped [`serde_json::Value`].
pub fn decode_value(text: &str) -> Result<serde_json::Value, ParseError> {
    decode(text)
}
