//! Attribute-value type tags and their recognition order.

use std::fmt;

use crate::value::{Mapping, NativeValue};

/// The short key naming an attribute-value's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeTag {
    Bool,
    String,
    StringSet,
    Number,
    Binary,
    NumberSet,
    BinarySet,
    Map,
    List,
    Null,
}

impl AttributeTag {
    /// Recognition order. An object carrying several tag keys is classified
    /// by the first one in this list; the rest are ignored.
    pub const PRECEDENCE: [AttributeTag; 10] = [
        AttributeTag::Bool,
        AttributeTag::String,
        AttributeTag::StringSet,
        AttributeTag::Number,
        AttributeTag::Binary,
        AttributeTag::NumberSet,
        AttributeTag::BinarySet,
        AttributeTag::Map,
        AttributeTag::List,
        AttributeTag::Null,
    ];

    pub fn key(self) -> &'static str {
        match self {
            AttributeTag::Bool => "BOOL",
            AttributeTag::String => "S",
            AttributeTag::StringSet => "SS",
            AttributeTag::Number => "N",
            AttributeTag::Binary => "B",
            AttributeTag::NumberSet => "NS",
            AttributeTag::BinarySet => "BS",
            AttributeTag::Map => "M",
            AttributeTag::List => "L",
            AttributeTag::Null => "NULL",
        }
    }

    pub fn from_key(key: &str) -> Option<AttributeTag> {
        Self::PRECEDENCE.into_iter().find(|tag| tag.key() == key)
    }

    pub fn is_set(self) -> bool {
        matches!(
            self,
            AttributeTag::StringSet | AttributeTag::NumberSet | AttributeTag::BinarySet
        )
    }

    /// Picks the tag an object is decoded as, or `None` for an ordinary
    /// object.
    ///
    /// `NULL` only counts when its value is literally `true`; `{"NULL": false}`
    /// is an ordinary object.
    pub fn classify(fields: &Mapping) -> Option<AttributeTag> {
        Self::PRECEDENCE
            .into_iter()
            .find(|tag| match (tag, fields.get(tag.key())) {
                (_, None) => false,
                (AttributeTag::Null, Some(value)) => *value == NativeValue::Bool(true),
                (_, Some(_)) => true,
            })
    }
}

impl fmt::Display for AttributeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
