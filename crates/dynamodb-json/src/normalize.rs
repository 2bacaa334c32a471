//! Numeric normalization of values read from the store.
//!
//! Replaces every [`NativeValue::Decimal`] leaf with `Int` (no fractional
//! part) or `Float`, in place. Containers keep their shape, order and keys.

use crate::coerce::decimal_to_native;
use crate::value::{Item, NativeValue};

/// Stateless decimal normalizer.
#[derive(Debug, Default, Clone, Copy)]
pub struct NumericNormalizer;

impl NumericNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, value: &mut NativeValue) {
        normalize(value)
    }

    pub fn normalize_item(&self, item: &mut Item) {
        item.values_mut().for_each(normalize)
    }

    pub fn normalize_items(&self, items: &mut [Item]) {
        items.iter_mut().for_each(|item| self.normalize_item(item))
    }
}

/// Normalize `value` in place.
///
/// Set elements are normalized too, since number sets come back from the
/// store as sets of decimals.
pub fn normalize(value: &mut NativeValue) {
    match value {
        NativeValue::Sequence(items) | NativeValue::Set(items) => {
            items.iter_mut().for_each(normalize)
        }
        NativeValue::Mapping(fields) => fields.values_mut().for_each(normalize),
        NativeValue::Decimal(d) => {
            let coerced = decimal_to_native(d);
            *value = coerced;
        }
        _ => {}
    }
}

/// Normalize and return `value`.
pub fn normalized(mut value: NativeValue) -> NativeValue {
    normalize(&mut value);
    value
}
