use crate::core::codec::{impl_serde_via_codec, ModelType, ObjectDecoder, ObjectEncoder};
use crate::core::types::signature::Signature;
use crate::util::aliases::ModelResult;
use serde_json::Value;

/// A fully notarized user transaction payload, identified by its hash.
#[derive(Clone, Debug, PartialEq)]
pub struct NotarizedTransaction {
    pub hash_hex: String,
    pub payload_hex: String,
    pub notary_signature: Signature,
}

impl ModelType for NotarizedTransaction {
    const TYPE_NAME: &'static str = "NotarizedTransaction";

    fn decode(value: &Value) -> ModelResult<Self> {
        let fields = ObjectDecoder::new(Self::TYPE_NAME, value)?;
        Ok(Self {
            hash_hex: fields.require_hex("hash_hex")?,
            payload_hex: fields.require_hex("payload_hex")?,
            notary_signature: fields.require_model("notary_signature")?,
        })
    }

    fn encode(&self) -> Value {
        ObjectEncoder::new()
            .field("hash_hex", self.hash_hex.as_str())
            .field("payload_hex", self.payload_hex.as_str())
            .model_field("notary_signature", &self.notary_signature)
            .finish()
    }
}
impl_serde_via_codec!(NotarizedTransaction);
