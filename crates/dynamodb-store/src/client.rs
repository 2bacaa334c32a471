//! The data-store client boundary and an in-process implementation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use dynamodb_json::{Decimal, Item, NativeValue};
use rust_decimal::prelude::FromPrimitive;

use crate::error::StoreError;

/// Operations the store component needs from a DynamoDB client.
///
/// Chunking, retries and pagination are the implementation's business.
pub trait ItemStore {
    /// Write every item of `items` into `table`.
    fn put_items(&self, table: &str, items: Vec<Item>) -> Result<(), StoreError>;

    /// Read at most `limit` items from `table`, all attributes included.
    /// Numbers come back as [`NativeValue::Decimal`].
    fn scan(&self, table: &str, limit: usize) -> Result<Vec<Item>, StoreError>;
}

impl<T: ItemStore + ?Sized> ItemStore for &T {
    fn put_items(&self, table: &str, items: Vec<Item>) -> Result<(), StoreError> {
        (**self).put_items(table, items)
    }

    fn scan(&self, table: &str, limit: usize) -> Result<Vec<Item>, StoreError> {
        (**self).scan(table, limit)
    }
}

impl<T: ItemStore + ?Sized> ItemStore for Arc<T> {
    fn put_items(&self, table: &str, items: Vec<Item>) -> Result<(), StoreError> {
        (**self).put_items(table, items)
    }

    fn scan(&self, table: &str, limit: usize) -> Result<Vec<Item>, StoreError> {
        (**self).scan(table, limit)
    }
}

/// In-memory tables keyed by name.
///
/// Numbers are stored as decimals, the way the managed store keeps them, so
/// scans hand back the same `Decimal` leaves a real client would. Tables must
/// be created before use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<String, Vec<Item>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`create_table`](Self::create_table).
    pub fn with_table(self, table: &str) -> Self {
        self.create_table(table);
        self
    }

    pub fn create_table(&self, table: &str) {
        self.lock().entry(table.to_string()).or_default();
    }

    /// Number of items in `table`, or `None` when it does not exist.
    pub fn item_count(&self, table: &str) -> Option<usize> {
        self.lock().get(table).map(Vec::len)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<Item>>> {
        // a poisoned map is still structurally valid
        self.tables.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ItemStore for MemoryStore {
    fn put_items(&self, table: &str, items: Vec<Item>) -> Result<(), StoreError> {
        let stored = items
            .into_iter()
            .map(|item| to_stored_item(table, item))
            .collect::<Result<Vec<_>, _>>()?;

        let mut tables = self.lock();
        let rows = tables
            .get_mut(table)
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))?;
        rows.extend(stored);
        Ok(())
    }

    fn scan(&self, table: &str, limit: usize) -> Result<Vec<Item>, StoreError> {
        let tables = self.lock();
        let rows = tables
            .get(table)
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))?;
        Ok(rows.iter().take(limit).cloned().collect())
    }
}

fn to_stored_item(table: &str, item: Item) -> Result<Item, StoreError> {
    item.into_iter()
        .map(|(k, v)| to_stored(table, v).map(|v| (k, v)))
        .collect()
}

fn to_stored(table: &str, value: NativeValue) -> Result<NativeValue, StoreError> {
    Ok(match value {
        NativeValue::Int(i) => NativeValue::Decimal(Decimal::from(i)),
        NativeValue::Float(f) => match Decimal::from_f64(f) {
            Some(d) => NativeValue::Decimal(d),
            None => return Err(StoreError::client(table, format!("unsupported number {f}"))),
        },
        NativeValue::Sequence(items) => NativeValue::Sequence(
            items
                .into_iter()
                .map(|v| to_stored(table, v))
                .collect::<Result<_, _>>()?,
        ),
        NativeValue::Set(items) => NativeValue::Set(
            items
                .into_iter()
                .map(|v| to_stored(table, v))
                .collect::<Result<_, _>>()?,
        ),
        NativeValue::Mapping(fields) => NativeValue::Mapping(to_stored_item(table, fields)?),
        other => other,
    })
}
