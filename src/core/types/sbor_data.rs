use crate::core::codec::{impl_serde_via_codec, ModelType, ObjectDecoder, ObjectEncoder};
use crate::util::aliases::ModelResult;
use crate::util::hex_utils;
use serde_json::Value;

/// An opaque SBOR-encoded payload.  The hex bytes are authoritative; the JSON rendering is
/// a convenience produced by upstream tooling and is carried through untouched when
/// present.
#[derive(Clone, Debug, PartialEq)]
pub struct SborData {
    pub data_hex: String,
    pub data_json: Option<Value>,
}

impl SborData {
    pub fn new<S: Into<String>>(data_hex: S) -> Self {
        Self {
            data_hex: data_hex.into(),
            data_json: None,
        }
    }

    pub fn with_json<S: Into<String>>(data_hex: S, data_json: Value) -> Self {
        Self {
            data_hex: data_hex.into(),
            data_json: Some(data_json),
        }
    }

    /// The raw payload bytes, for consumers that want the binary form rather than the hex
    /// string.
    pub fn data_bytes(&self) -> ModelResult<Vec<u8>> {
        hex_utils::decode_hex(Self::TYPE_NAME, "data_hex", &self.data_hex)
    }
}
impl ModelType for SborData {
    const TYPE_NAME: &'static str = "SborData";

    fn decode(value: &Value) -> ModelResult<Self> {
        let fields = ObjectDecoder::new(Self::TYPE_NAME, value)?;
        Ok(Self {
            data_hex: fields.require_hex("data_hex")?,
            data_json: fields.optional_value("data_json"),
        })
    }

    fn encode(&self) -> Value {
        ObjectEncoder::new()
            .field("data_hex", self.data_hex.as_str())
            .optional_field("data_json", self.data_json.clone())
            .finish()
    }
}
impl_serde_via_codec!(SborData);
