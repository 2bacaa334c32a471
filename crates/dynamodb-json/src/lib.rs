//! DynamoDB attribute-value JSON decoding and Decimal normalization.
//!
//! Two independent tree transforms:
//!
//! - [`AttributeValueDecoder`] reads the store's tagged attribute-value JSON
//!   into [`NativeValue`]s, recovering `YYYY-MM-DDThh:mm:ss.ffffff`
//!   timestamps along the way.
//! - [`NumericNormalizer`] rewrites the `Decimal` leaves of values read from
//!   the store into integers or floats.
//!
//! # Example
//!
//! ```
//! use dynamodb_json::{decode, NativeValue};
//! use serde_json::json;
//!
//! let v = decode(json!({"M": {"a": {"N": "1"}, "b": {"S": "x"}}}));
//! assert_eq!(v.get("a"), Some(&NativeValue::Int(1)));
//! assert_eq!(v.get("b"), Some(&NativeValue::String("x".into())));
//! ```

pub mod coerce;
pub mod decoder;
pub mod error;
pub mod normalize;
pub mod tag;
pub mod value;

pub use coerce::{decimal_to_native, parse_number, parse_timestamp, TIMESTAMP_FORMAT};
pub use decoder::{decode, decode_str, AttributeValueDecoder};
pub use error::Error;
pub use normalize::{normalize, normalized, NumericNormalizer};
pub use tag::AttributeTag;
pub use value::{Item, Mapping, NativeValue};

pub use rust_decimal::Decimal;
