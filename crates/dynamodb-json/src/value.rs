//! [`NativeValue`] — the decoded, native form of a DynamoDB value.

use chrono::NaiveDateTime;
use indexmap::{IndexMap, IndexSet};
use rust_decimal::Decimal;
use serde_json::Value;

use crate::coerce::{decimal_to_native, TIMESTAMP_DISPLAY_FORMAT};

/// Field name to value, in insertion order.
pub type Mapping = IndexMap<String, NativeValue>;

/// One stored record.
pub type Item = Mapping;

/// A value produced by decoding attribute-value JSON, or handed back by a
/// data-store client on read.
///
/// Equality is structural, except that two `Set`s are equal when they hold
/// the same elements in any order.
#[derive(Debug, Clone)]
pub enum NativeValue {
    Null,
    Bool(bool),
    /// Integer that fits in `i64`.
    Int(i64),
    /// Fractional number, or an integer too large for `i64`.
    Float(f64),
    String(String),
    /// Date-time without offset, recovered from `YYYY-MM-DDThh:mm:ss.ffffff`.
    Timestamp(NaiveDateTime),
    /// Ordered list.
    Sequence(Vec<NativeValue>),
    /// Unordered collection without duplicates. Elements are kept in
    /// first-occurrence order, which is not part of the contract.
    Set(Vec<NativeValue>),
    Mapping(Mapping),
    /// Arbitrary-precision number as returned by the store on read. The
    /// decoder never produces this variant.
    Decimal(Decimal),
}

impl NativeValue {
    /// Builds a [`NativeValue::Set`], collapsing duplicate elements.
    ///
    /// String elements are deduplicated through a hash set. Other payloads
    /// fall back to pairwise comparison.
    pub fn set_from<I>(values: I) -> Self
    where
        I: IntoIterator<Item = NativeValue>,
    {
        let values: Vec<NativeValue> = values.into_iter().collect();
        if values.iter().all(|v| matches!(v, NativeValue::String(_))) {
            let unique: IndexSet<String> = values
                .into_iter()
                .filter_map(|v| match v {
                    NativeValue::String(s) => Some(s),
                    _ => None,
                })
                .collect();
            return NativeValue::Set(unique.into_iter().map(NativeValue::String).collect());
        }
        let mut out: Vec<NativeValue> = Vec::with_capacity(values.len());
        for value in values {
            if !out.contains(&value) {
                out.push(value);
            }
        }
        NativeValue::Set(out)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, NativeValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            NativeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            NativeValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as `f64` for both `Int` and `Float`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NativeValue::Int(i) => Some(*i as f64),
            NativeValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            NativeValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<&NaiveDateTime> {
        match self {
            NativeValue::Timestamp(ts) => Some(ts),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            NativeValue::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// Elements of a `Sequence` or a `Set`.
    pub fn as_slice(&self) -> Option<&[NativeValue]> {
        match self {
            NativeValue::Sequence(items) | NativeValue::Set(items) => Some(items),
            _ => None,
        }
    }

    /// Looks up a field of a `Mapping`.
    pub fn get(&self, key: &str) -> Option<&NativeValue> {
        self.as_mapping().and_then(|m| m.get(key))
    }

    /// Renders the value as plain JSON.
    ///
    /// Timestamps use `YYYY-MM-DDThh:mm:ss.ffffff`, sets become arrays, and
    /// decimals are coerced to integers or floats first. Non-finite floats
    /// have no JSON form and become `null`.
    pub fn to_json(&self) -> Value {
        match self {
            NativeValue::Null => Value::Null,
            NativeValue::Bool(b) => Value::Bool(*b),
            NativeValue::Int(i) => Value::from(*i),
            NativeValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            NativeValue::String(s) => Value::String(s.clone()),
            NativeValue::Timestamp(ts) => {
                Value::String(ts.format(TIMESTAMP_DISPLAY_FORMAT).to_string())
            }
            NativeValue::Sequence(items) | NativeValue::Set(items) => {
                Value::Array(items.iter().map(NativeValue::to_json).collect())
            }
            NativeValue::Mapping(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
            NativeValue::Decimal(d) => decimal_to_native(d).to_json(),
        }
    }
}

fn same_elements(a: &[NativeValue], b: &[NativeValue]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    fn as_strs(items: &[NativeValue]) -> Option<IndexSet<&str>> {
        items.iter().map(NativeValue::as_str).collect()
    }
    if let (Some(left), Some(right)) = (as_strs(a), as_strs(b)) {
        return left == right;
    }
    a.iter().all(|x| b.contains(x)) && b.iter().all(|x| a.contains(x))
}

impl PartialEq for NativeValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (NativeValue::Null, NativeValue::Null) => true,
            (NativeValue::Bool(a), NativeValue::Bool(b)) => a == b,
            (NativeValue::Int(a), NativeValue::Int(b)) => a == b,
            (NativeValue::Float(a), NativeValue::Float(b)) => a == b,
            (NativeValue::String(a), NativeValue::String(b)) => a == b,
            (NativeValue::Timestamp(a), NativeValue::Timestamp(b)) => a == b,
            (NativeValue::Sequence(a), NativeValue::Sequence(b)) => a == b,
            (NativeValue::Set(a), NativeValue::Set(b)) => same_elements(a, b),
            (NativeValue::Mapping(a), NativeValue::Mapping(b)) => a == b,
            (NativeValue::Decimal(a), NativeValue::Decimal(b)) => a == b,
            _ => false,
        }
    }
}

/// Structural conversion: no tag recognition, no timestamp recovery.
impl From<Value> for NativeValue {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => NativeValue::Null,
            Value::Bool(b) => NativeValue::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    NativeValue::Int(i)
                } else {
                    // u64 above i64::MAX lands here as well
                    NativeValue::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            Value::String(s) => NativeValue::String(s),
            Value::Array(arr) => {
                NativeValue::Sequence(arr.into_iter().map(NativeValue::from).collect())
            }
            Value::Object(obj) => NativeValue::Mapping(
                obj.into_iter()
                    .map(|(k, v)| (k, NativeValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for NativeValue {
    fn from(b: bool) -> Self {
        NativeValue::Bool(b)
    }
}

impl From<i64> for NativeValue {
    fn from(i: i64) -> Self {
        NativeValue::Int(i)
    }
}

impl From<f64> for NativeValue {
    fn from(f: f64) -> Self {
        NativeValue::Float(f)
    }
}

impl From<&str> for NativeValue {
    fn from(s: &str) -> Self {
        NativeValue::String(s.to_string())
    }
}

impl From<String> for NativeValue {
    fn from(s: String) -> Self {
        NativeValue::String(s)
    }
}

impl From<Decimal> for NativeValue {
    fn from(d: Decimal) -> Self {
        NativeValue::Decimal(d)
    }
}

impl From<NaiveDateTime> for NativeValue {
    fn from(ts: NaiveDateTime) -> Self {
        NativeValue::Timestamp(ts)
    }
}

impl From<Vec<NativeValue>> for NativeValue {
    fn from(items: Vec<NativeValue>) -> Self {
        NativeValue::Sequence(items)
    }
}

impl From<Mapping> for NativeValue {
    fn from(fields: Mapping) -> Self {
        NativeValue::Mapping(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn set_from_collapses_duplicates() {
        let set = NativeValue::set_from(vec![
            NativeValue::from("a"),
            NativeValue::from("a"),
            NativeValue::from("b"),
        ]);
        assert_eq!(set.as_slice().map(<[_]>::len), Some(2));

        let mixed = NativeValue::set_from(vec![
            NativeValue::Int(1),
            NativeValue::from("1"),
            NativeValue::Int(1),
        ]);
        assert_eq!(mixed.as_slice().map(<[_]>::len), Some(2));
    }

    #[test]
    fn set_from_handles_large_string_sets() {
        let n = 50_000;
        let values = (0..n)
            .chain(0..n / 2)
            .map(|i| NativeValue::String(format!("member-{i}")));
        let set = NativeValue::set_from(values);
        let items = set.as_slice().expect("set");
        assert_eq!(items.len(), n);
        assert_eq!(items[0], NativeValue::from("member-0"));
        assert_eq!(items[n - 1], NativeValue::String(format!("member-{}", n - 1)));
    }

    #[test]
    fn set_equality_ignores_order() {
        let ab = NativeValue::set_from(vec![NativeValue::from("a"), NativeValue::from("b")]);
        let ba = NativeValue::set_from(vec![NativeValue::from("b"), NativeValue::from("a")]);
        assert_eq!(ab, ba);

        let nums = NativeValue::Set(vec![NativeValue::Int(1), NativeValue::Float(2.5)]);
        let swapped = NativeValue::Set(vec![NativeValue::Float(2.5), NativeValue::Int(1)]);
        assert_eq!(nums, swapped);

        let ac = NativeValue::set_from(vec![NativeValue::from("a"), NativeValue::from("c")]);
        assert_ne!(ab, ac);
        assert_ne!(ab, NativeValue::set_from(vec![NativeValue::from("a")]));
        assert_ne!(
            ab,
            NativeValue::Sequence(vec![NativeValue::from("a"), NativeValue::from("b")])
        );
    }

    #[test]
    fn sequence_equality_keeps_order() {
        let ab = NativeValue::Sequence(vec![NativeValue::from("a"), NativeValue::from("b")]);
        let ba = NativeValue::Sequence(vec![NativeValue::from("b"), NativeValue::from("a")]);
        assert_ne!(ab, ba);
    }

    #[test]
    fn from_json_is_structural() {
        let v = NativeValue::from(json!({"S": "x", "n": [1, 2.5, null]}));
        let m = v.as_mapping().expect("mapping");
        assert_eq!(m.get("S"), Some(&NativeValue::String("x".into())));
        assert_eq!(
            m.get("n"),
            Some(&NativeValue::Sequence(vec![
                NativeValue::Int(1),
                NativeValue::Float(2.5),
                NativeValue::Null,
            ]))
        );
    }

    #[test]
    fn huge_unsigned_becomes_float() {
        let v = NativeValue::from(json!(u64::MAX));
        assert!(matches!(v, NativeValue::Float(_)));
    }

    #[test]
    fn to_json_renders_timestamps_sets_and_decimals() {
        let ts = NaiveDate::from_ymd_opt(2020, 1, 2)
            .and_then(|d| d.and_hms_micro_opt(3, 4, 5, 120_000))
            .expect("valid date");
        let mut fields = Mapping::new();
        fields.insert("at".into(), NativeValue::Timestamp(ts));
        fields.insert("tags".into(), NativeValue::set_from(vec![NativeValue::from("x")]));
        fields.insert("qty".into(), NativeValue::Decimal(Decimal::new(40, 1)));
        fields.insert("nan".into(), NativeValue::Float(f64::NAN));
        assert_eq!(
            NativeValue::Mapping(fields).to_json(),
            json!({
                "at": "2020-01-02T03:04:05.120000",
                "tags": ["x"],
                "qty": 4,
                "nan": null,
            })
        );
    }
}
