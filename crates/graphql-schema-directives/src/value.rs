use std::any::type_name;

use indexmap::IndexMap;
use serde_json::Value;

use crate::ExtractionError;

/// The value of a directive argument on an applied directive.
///
/// `Unset` and `ExplicitNull` are distinct: the first means the argument was never assigned,
/// the second that it was assigned `null`.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentValue {
    Provided(Value),
    ExplicitNull,
    Unset,
}

impl ArgumentValue {
    /// Wraps a value. `null` becomes [`ArgumentValue::ExplicitNull`].
    pub fn provided(value: impl Into<Value>) -> Self {
        match value.into() {
            Value::Null => ArgumentValue::ExplicitNull,
            value => ArgumentValue::Provided(value),
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, ArgumentValue::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ArgumentValue::ExplicitNull)
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            ArgumentValue::Provided(value) => Some(value),
            ArgumentValue::ExplicitNull | ArgumentValue::Unset => None,
        }
    }

    /// `None` when unset, `Some(Value::Null)` for an explicit null.
    pub fn into_value(self) -> Option<Value> {
        match self {
            ArgumentValue::Provided(value) => Some(value),
            ArgumentValue::ExplicitNull => Some(Value::Null),
            ArgumentValue::Unset => None,
        }
    }
}

impl From<Value> for ArgumentValue {
    fn from(value: Value) -> Self {
        ArgumentValue::provided(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for ArgumentValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => ArgumentValue::provided(value),
            None => ArgumentValue::ExplicitNull,
        }
    }
}

/// A directive instance whose attributes can be read by name.
pub trait AppliedDirective {
    /// `None` when the attribute was never assigned on this instance.
    fn attribute(&self, name: &str) -> Option<ArgumentValue>;
}

impl<T: AppliedDirective + ?Sized> AppliedDirective for &T {
    fn attribute(&self, name: &str) -> Option<ArgumentValue> {
        (**self).attribute(name)
    }
}

impl AppliedDirective for serde_json::Map<String, Value> {
    fn attribute(&self, name: &str) -> Option<ArgumentValue> {
        self.get(name).cloned().map(ArgumentValue::provided)
    }
}

/// Attribute values of an applied directive, in assignment order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AttributeMap(IndexMap<String, ArgumentValue>);

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the attributes from the serialized form of `value`, which must be a JSON object.
    ///
    /// Keys absent from the serialized object (`#[serde(skip_serializing_if = ...)]`) are unset,
    /// `null` values are explicit nulls. JSON has no NaN or infinity: non-finite floats serialize
    /// to `null` and are read back as explicit nulls.
    pub fn from_serialize<T: serde::Serialize + ?Sized>(value: &T) -> Result<Self, ExtractionError> {
        Self::from_json(serde_json::to_value(value)?, type_name::<T>())
    }

    pub(crate) fn from_json(value: Value, type_name: &'static str) -> Result<Self, ExtractionError> {
        let Value::Object(map) = value else {
            return Err(ExtractionError::NotAnObject { type_name });
        };

        Ok(map
            .into_iter()
            .map(|(name, value)| (name, ArgumentValue::provided(value)))
            .collect())
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ArgumentValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ArgumentValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AppliedDirective for AttributeMap {
    fn attribute(&self, name: &str) -> Option<ArgumentValue> {
        self.0.get(name).cloned()
    }
}

impl<K: Into<String>, V: Into<ArgumentValue>> FromIterator<(K, V)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, value)| (name.into(), value.into())).collect())
    }
}
