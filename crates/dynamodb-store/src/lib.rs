//! Batch save / retrieve over a DynamoDB client, decoding attribute-value
//! JSON and normalizing decimals with [`dynamodb_json`].
//!
//! # Example
//!
//! ```
//! use dynamodb_store::{DocumentStore, MemoryStore, RetrieveOptions};
//! use dynamodb_json::NativeValue;
//! use serde_json::json;
//!
//! let store = DocumentStore::with_client(MemoryStore::new().with_table("orders"));
//! let item = store.load_object(json!({"M": {"id": {"N": "7"}, "total": {"N": "2.5"}}}));
//! let NativeValue::Mapping(item) = item else { unreachable!() };
//! store.save_many(vec![item], "orders").unwrap();
//!
//! let rows = store.retrieve_many("orders", &RetrieveOptions::default()).unwrap();
//! assert_eq!(rows[0]["id"], NativeValue::Int(7));
//! assert_eq!(rows[0]["total"], NativeValue::Float(2.5));
//! ```

pub mod client;
pub mod error;
pub mod options;
pub mod store;

pub use client::{ItemStore, MemoryStore};
pub use error::StoreError;
pub use options::{RetrieveOptions, DEFAULT_MAX_BATCH_SIZE};
pub use store::DocumentStore;
