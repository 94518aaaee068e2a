// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Open props record.
//!
//! Props are string-keyed records destined for a rendering layer. Field names
//! are built at runtime (`onClick`, `event`, ...), so the record is a map
//! rather than a fixed struct. A field holds either plain data or an
//! [`EventHandler`].
//!
//! ```
//! use propflux_stream::Props;
//! use serde_json::json;
//!
//! let props = Props::new().with("foo", "foo").with("count", 3);
//!
//! assert_eq!(props.data("foo"), Some(&json!("foo")));
//! assert_eq!(props.to_json(), json!({ "foo": "foo", "count": 3 }));
//! ```

use crate::handler::EventHandler;
use propflux_core::PropsError;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use std::collections::btree_map::{self, BTreeMap};

/// A single props field.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// Plain data
    Data(Value),
    /// An injected event handler, compared by identity
    Handler(EventHandler),
}

impl PropValue {
    /// Returns the data if this field is not a handler.
    #[must_use]
    pub fn as_data(&self) -> Option<&Value> {
        match self {
            PropValue::Data(value) => Some(value),
            PropValue::Handler(_) => None,
        }
    }

    /// Returns the handler if this field holds one.
    #[must_use]
    pub fn as_handler(&self) -> Option<&EventHandler> {
        match self {
            PropValue::Handler(handler) => Some(handler),
            PropValue::Data(_) => None,
        }
    }
}

macro_rules! impl_data_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for PropValue {
                fn from(value: $ty) -> Self {
                    PropValue::Data(Value::from(value))
                }
            }
        )*
    };
}

impl_data_from!(Value, String, &str, bool, i32, i64, u32, u64, f64);

impl From<EventHandler> for PropValue {
    fn from(handler: EventHandler) -> Self {
        PropValue::Handler(handler)
    }
}

/// A string-keyed props record.
///
/// Operators only ever add fields; nothing here removes or renames a field
/// behind the caller's back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    fields: BTreeMap<String, PropValue>,
}

impl Props {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a field, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Option<PropValue> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        self.fields.remove(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.fields.get(key)
    }

    /// Data stored under `key`, `None` for missing fields and handlers.
    #[must_use]
    pub fn data(&self, key: &str) -> Option<&Value> {
        self.get(key).and_then(PropValue::as_data)
    }

    /// Handler stored under `key`, `None` for missing fields and plain data.
    #[must_use]
    pub fn handler(&self, key: &str) -> Option<&EventHandler> {
        self.get(key).and_then(PropValue::as_handler)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, PropValue> {
        self.fields.iter()
    }

    /// Shallow merge: fields of `other` overwrite same-named fields of `self`.
    #[must_use]
    pub fn merge(mut self, other: Props) -> Props {
        self.fields.extend(other.fields);
        self
    }

    /// JSON view of the data fields. Handlers are omitted.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .filter_map(|(key, value)| value.as_data().map(|v| (key.clone(), v.clone())))
                .collect(),
        )
    }
}

impl From<Map<String, Value>> for Props {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl TryFrom<Value> for Props {
    type Error = PropsError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(map.into()),
            other => Err(PropsError::stream_error(format!(
                "props must be a JSON object, got `{other}`"
            ))),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Props
where
    K: Into<String>,
    V: Into<PropValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Props {
    type Item = (String, PropValue);
    type IntoIter = btree_map::IntoIter<String, PropValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a Props {
    type Item = (&'a String, &'a PropValue);
    type IntoIter = btree_map::Iter<'a, String, PropValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

// Handlers are not data; the rendering layer reads them from the record itself.
impl Serialize for Props {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in &self.fields {
            if let PropValue::Data(data) = value {
                map.serialize_entry(key, data)?;
            }
        }
        map.end()
    }
}
