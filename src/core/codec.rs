use crate::core::error::ModelError;
use crate::util::aliases::ModelResult;
use crate::util::traits::ResultExtensions;
use crate::util::{decimal_utils, hex_utils};
use serde_json::{Map, Value};
use std::convert::TryFrom;
use std::fmt;

/// The six value kinds a json document can contain.  Used to produce readable
/// [TypeMismatch](crate::core::error::ModelError::TypeMismatch) errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}
impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}
impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        };
        write!(f, "{}", name)
    }
}

/// Every schema type implements this trait to move between its typed form and the json
/// wire format.  Decoding validates required/optional presence and value kinds per field;
/// encoding emits properties in the schema-declared order with the discriminator (where
/// one exists) written first.
pub trait ModelType: Sized {
    /// The schema name of the type, used for error context.
    const TYPE_NAME: &'static str;

    fn decode(value: &Value) -> ModelResult<Self>;

    fn encode(&self) -> Value;

    fn from_json_str(json: &str) -> ModelResult<Self> {
        let value = serde_json::from_str::<Value>(json)?;
        Self::decode(&value)
    }

    fn to_json_string(&self) -> String {
        self.encode().to_string()
    }
}

/// Wraps a json object during a decode, exposing presence-checked and kind-checked reads
/// over its properties.  A json null is treated identically to an absent property.
pub struct ObjectDecoder<'a> {
    type_name: &'static str,
    fields: &'a Map<String, Value>,
}
impl<'a> ObjectDecoder<'a> {
    pub fn new(type_name: &'static str, value: &'a Value) -> ModelResult<Self> {
        match value.as_object() {
            Some(fields) => ObjectDecoder { type_name, fields }.to_ok(),
            None => ModelError::TypeMismatch {
                type_name: type_name.to_string(),
                field: "<document>".to_string(),
                expected: JsonKind::Object.to_string(),
                found: JsonKind::of(value).to_string(),
            }
            .to_err(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    fn lookup(&self, field: &str) -> Option<&'a Value> {
        self.fields.get(field).filter(|value| !value.is_null())
    }

    fn mismatch(&self, field: &str, expected: impl Into<String>, found: &Value) -> ModelError {
        ModelError::TypeMismatch {
            type_name: self.type_name.to_string(),
            field: field.to_string(),
            expected: expected.into(),
            found: JsonKind::of(found).to_string(),
        }
    }

    pub fn require(&self, field: &str) -> ModelResult<&'a Value> {
        match self.lookup(field) {
            Some(value) => value.to_ok(),
            None => ModelError::MissingRequiredField {
                type_name: self.type_name.to_string(),
                field: field.to_string(),
            }
            .to_err(),
        }
    }

    pub fn require_string(&self, field: &str) -> ModelResult<String> {
        let value = self.require(field)?;
        match value.as_str() {
            Some(string) => string.to_string().to_ok(),
            None => self.mismatch(field, JsonKind::String.to_string(), value).to_err(),
        }
    }

    pub fn require_bool(&self, field: &str) -> ModelResult<bool> {
        let value = self.require(field)?;
        match value.as_bool() {
            Some(flag) => flag.to_ok(),
            None => self.mismatch(field, JsonKind::Boolean.to_string(), value).to_err(),
        }
    }

    pub fn require_u64(&self, field: &str) -> ModelResult<u64> {
        let value = self.require(field)?;
        match value.as_u64() {
            Some(number) => number.to_ok(),
            None => self
                .mismatch(field, "unsigned 64-bit number", value)
                .to_err(),
        }
    }

    pub fn require_u32(&self, field: &str) -> ModelResult<u32> {
        let value = self.require(field)?;
        match value.as_u64().and_then(|number| u32::try_from(number).ok()) {
            Some(number) => number.to_ok(),
            None => self
                .mismatch(field, "unsigned 32-bit number", value)
                .to_err(),
        }
    }

    pub fn require_array(&self, field: &str) -> ModelResult<&'a Vec<Value>> {
        let value = self.require(field)?;
        match value.as_array() {
            Some(elements) => elements.to_ok(),
            None => self.mismatch(field, JsonKind::Array.to_string(), value).to_err(),
        }
    }

    /// Reads a required string field holding a decimal amount in attos, verifying its
    /// lexical format and representable range.
    pub fn require_decimal(&self, field: &str) -> ModelResult<String> {
        let value = self.require_string(field)?;
        decimal_utils::validate_attos_decimal(self.type_name, field, &value)?;
        value.to_ok()
    }

    /// Reads a required string field holding a hex-encoded binary payload, verifying its
    /// lexical format.
    pub fn require_hex(&self, field: &str) -> ModelResult<String> {
        let value = self.require_string(field)?;
        hex_utils::validate_hex_string(self.type_name, field, &value)?;
        value.to_ok()
    }

    /// Reads a required array field whose elements are hex-encoded binary payloads,
    /// verifying each element's lexical format.
    pub fn require_hex_array(&self, field: &str) -> ModelResult<Vec<String>> {
        self.require_array(field)?
            .iter()
            .map(|element| match element.as_str() {
                Some(string) => {
                    hex_utils::validate_hex_string(self.type_name, field, string)?;
                    string.to_string().to_ok()
                }
                None => self
                    .mismatch(field, "an array of hex strings", element)
                    .to_err(),
            })
            .collect::<ModelResult<Vec<String>>>()
    }

    pub fn require_model<T: ModelType>(&self, field: &str) -> ModelResult<T> {
        T::decode(self.require(field)?)
    }

    pub fn require_model_array<T: ModelType>(&self, field: &str) -> ModelResult<Vec<T>> {
        self.require_array(field)?
            .iter()
            .map(T::decode)
            .collect::<ModelResult<Vec<T>>>()
    }

    pub fn optional_string(&self, field: &str) -> ModelResult<Option<String>> {
        match self.lookup(field) {
            Some(value) => match value.as_str() {
                Some(string) => Some(string.to_string()).to_ok(),
                None => self.mismatch(field, JsonKind::String.to_string(), value).to_err(),
            },
            None => None.to_ok(),
        }
    }

    pub fn optional_u32(&self, field: &str) -> ModelResult<Option<u32>> {
        match self.lookup(field) {
            Some(value) => match value.as_u64().and_then(|number| u32::try_from(number).ok()) {
                Some(number) => Some(number).to_ok(),
                None => self
                    .mismatch(field, "unsigned 32-bit number", value)
                    .to_err(),
            },
            None => None.to_ok(),
        }
    }

    pub fn optional_model<T: ModelType>(&self, field: &str) -> ModelResult<Option<T>> {
        match self.lookup(field) {
            Some(value) => Some(T::decode(value)?).to_ok(),
            None => None.to_ok(),
        }
    }

    /// Reads an optional field as raw json, for schema properties that carry arbitrary
    /// documents (e.g. decoded sbor payloads).
    pub fn optional_value(&self, field: &str) -> Option<Value> {
        self.lookup(field).cloned()
    }
}

/// Builds a json object during an encode, preserving the insertion order of its
/// properties.  Required properties are always written, even when they hold an empty or
/// default value; optional properties are only written when set.
pub struct ObjectEncoder {
    fields: Map<String, Value>,
}
impl ObjectEncoder {
    pub fn new() -> Self {
        ObjectEncoder { fields: Map::new() }
    }

    /// Starts an object for a polymorphic variant, writing the discriminator as the first
    /// property.  The tag is derived from the runtime variant by the caller, never from
    /// stored state.
    pub fn discriminated(tag_field: &str, tag: &str) -> Self {
        Self::new().field(tag_field, tag)
    }

    pub fn field<V: Into<Value>>(mut self, name: &str, value: V) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    pub fn optional_field<V: Into<Value>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.field(name, value),
            None => self,
        }
    }

    pub fn model_field<T: ModelType>(self, name: &str, model: &T) -> Self {
        self.field(name, model.encode())
    }

    pub fn optional_model_field<T: ModelType>(self, name: &str, model: &Option<T>) -> Self {
        match model {
            Some(model) => self.model_field(name, model),
            None => self,
        }
    }

    pub fn model_array_field<T: ModelType>(self, name: &str, models: &[T]) -> Self {
        self.field(
            name,
            models.iter().map(ModelType::encode).collect::<Vec<Value>>(),
        )
    }

    pub fn string_array_field(self, name: &str, values: &[String]) -> Self {
        self.field(
            name,
            values
                .iter()
                .map(|value| Value::from(value.as_str()))
                .collect::<Vec<Value>>(),
        )
    }

    pub fn finish(self) -> Value {
        Value::Object(self.fields)
    }
}
impl Default for ObjectEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Bridges a model type into standard serde usage by funneling serialization through its
/// codec, keeping the wire rules (ordering, required/optional emission, discriminators)
/// intact when a model is embedded in a larger serde structure.
macro_rules! impl_serde_via_codec {
    ($model:ty) => {
        impl serde::Serialize for $model {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serde::Serialize::serialize(&crate::core::codec::ModelType::encode(self), serializer)
            }
        }
        impl<'de> serde::Deserialize<'de> for $model {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                crate::core::codec::ModelType::decode(&value).map_err(serde::de::Error::custom)
            }
        }
    };
}
pub(crate) use impl_serde_via_codec;
