use crate::core::codec::{impl_serde_via_codec, ModelType, ObjectDecoder, ObjectEncoder};
use crate::util::aliases::ModelResult;
use serde_json::Value;

/// The system-generated transaction that advances consensus rounds.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundUpdateTransaction {
    pub proposer_timestamp_ms: u64,
    pub epoch: u64,
    pub round_in_epoch: u64,
}

impl ModelType for RoundUpdateTransaction {
    const TYPE_NAME: &'static str = "RoundUpdateTransaction";

    fn decode(value: &Value) -> ModelResult<Self> {
        let fields = ObjectDecoder::new(Self::TYPE_NAME, value)?;
        Ok(Self {
            proposer_timestamp_ms: fields.require_u64("proposer_timestamp_ms")?,
            epoch: fields.require_u64("epoch")?,
            round_in_epoch: fields.require_u64("round_in_epoch")?,
        })
    }

    fn encode(&self) -> Value {
        ObjectEncoder::new()
            .field("proposer_timestamp_ms", self.proposer_timestamp_ms)
            .field("epoch", self.epoch)
            .field("round_in_epoch", self.round_in_epoch)
            .finish()
    }
}
impl_serde_via_codec!(RoundUpdateTransaction);
