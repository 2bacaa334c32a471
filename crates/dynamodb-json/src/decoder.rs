//! Attribute-value decoder.
//!
//! Turns DynamoDB's tagged attribute-value JSON (`{"S": "..."}`,
//! `{"N": "..."}`, `{"M": {...}}`, ...) into [`NativeValue`]s.
//!
//! The walk is post-order: the fields of an object are decoded before the
//! object itself is classified, so `M` and `L` payloads are already native
//! when their wrapper is unwrapped. Malformed or ambiguous wrappers never fail;
//! they decode to whatever the first matching tag produces.

use serde_json::Value;

use crate::coerce::{decimal_to_native, parse_number, parse_timestamp};
use crate::error::Error;
use crate::tag::AttributeTag;
use crate::value::{Mapping, NativeValue};

/// Stateless attribute-value decoder.
#[derive(Debug, Default, Clone, Copy)]
pub struct AttributeValueDecoder;

impl AttributeValueDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode a parsed JSON tree.
    pub fn decode(&self, node: Value) -> NativeValue {
        self.decode_native(NativeValue::from(node))
    }

    /// Decode UTF-8 JSON text.
    pub fn decode_str(&self, s: &str) -> Result<NativeValue, Error> {
        let node: Value = serde_json::from_str(s)?;
        Ok(self.decode(node))
    }

    /// Decode JSON bytes.
    pub fn decode_slice(&self, bytes: &[u8]) -> Result<NativeValue, Error> {
        let node: Value = serde_json::from_slice(bytes)?;
        Ok(self.decode(node))
    }

    /// Run the decoding pass over a native tree.
    ///
    /// Values that are already decoded pass through unchanged, so applying
    /// this to the output of [`decode`](Self::decode) is a no-op.
    pub fn decode_native(&self, node: NativeValue) -> NativeValue {
        match node {
            NativeValue::Mapping(fields) => {
                let fields: Mapping = fields
                    .into_iter()
                    .map(|(k, v)| (k, self.decode_native(v)))
                    .collect();
                self.decode_object(fields)
            }
            NativeValue::Sequence(items) => NativeValue::Sequence(
                items.into_iter().map(|v| self.decode_native(v)).collect(),
            ),
            other => other,
        }
    }

    fn decode_object(&self, mut fields: Mapping) -> NativeValue {
        match AttributeTag::classify(&fields) {
            Some(tag) => match fields.swap_remove(tag.key()) {
                Some(value) => decode_tagged(tag, value),
                None => NativeValue::Mapping(fields),
            },
            None => decode_plain(fields),
        }
    }
}

fn decode_tagged(tag: AttributeTag, value: NativeValue) -> NativeValue {
    match tag {
        AttributeTag::String => match value {
            NativeValue::String(s) => match parse_timestamp(&s) {
                Some(ts) => NativeValue::Timestamp(ts),
                None => NativeValue::String(s),
            },
            other => other,
        },
        AttributeTag::Number => match value {
            NativeValue::String(s) => parse_number(&s),
            other => other,
        },
        AttributeTag::StringSet | AttributeTag::NumberSet | AttributeTag::BinarySet => {
            match value {
                NativeValue::Sequence(items) => NativeValue::set_from(items),
                other => other,
            }
        }
        // BOOL, B, M and L carry their payload as-is; B stays base64 text.
        AttributeTag::Bool | AttributeTag::Binary | AttributeTag::Map | AttributeTag::List => {
            value
        }
        AttributeTag::Null => NativeValue::Null,
    }
}

/// An object that is not an attribute-value: recover timestamps from string
/// fields and coerce decimal fields.
fn decode_plain(mut fields: Mapping) -> NativeValue {
    for value in fields.values_mut() {
        let replacement = match value {
            NativeValue::String(s) => parse_timestamp(s).map(NativeValue::Timestamp),
            NativeValue::Decimal(d) => Some(decimal_to_native(d)),
            _ => None,
        };
        if let Some(replacement) = replacement {
            *value = replacement;
        }
    }
    NativeValue::Mapping(fields)
}

/// Decode a parsed JSON tree with a default [`AttributeValueDecoder`].
pub fn decode(node: Value) -> NativeValue {
    AttributeValueDecoder::new().decode(node)
}

/// Decode UTF-8 JSON text with a default [`AttributeValueDecoder`].
pub fn decode_str(s: &str) -> Result<NativeValue, Error> {
    AttributeValueDecoder::new().decode_str(s)
}
