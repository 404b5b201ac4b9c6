use crate::core::codec::{impl_serde_via_codec, ModelType, ObjectDecoder, ObjectEncoder};
use crate::core::types::public_key::PublicKey;
use crate::util::aliases::ModelResult;
use serde_json::Value;

/// The signed header of a user transaction.  Epoch bounds above the documented maximum are
/// accepted; the documented limit is advisory and enforcement belongs to the ledger, not
/// the wire format.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionHeader {
    pub network_id: u32,
    pub start_epoch_inclusive: u64,
    pub end_epoch_exclusive: u64,
    pub nonce: u64,
    pub notary_public_key: PublicKey,
    pub notary_is_signatory: bool,
    pub tip_percentage: u32,
}

impl ModelType for TransactionHeader {
    const TYPE_NAME: &'static str = "TransactionHeader";

    fn decode(value: &Value) -> ModelResult<Self> {
        let fields = ObjectDecoder::new(Self::TYPE_NAME, value)?;
        Ok(Self {
            network_id: fields.require_u32("network_id")?,
            start_epoch_inclusive: fields.require_u64("start_epoch_inclusive")?,
            end_epoch_exclusive: fields.require_u64("end_epoch_exclusive")?,
            nonce: fields.require_u64("nonce")?,
            notary_public_key: fields.require_model("notary_public_key")?,
            notary_is_signatory: fields.require_bool("notary_is_signatory")?,
            tip_percentage: fields.require_u32("tip_percentage")?,
        })
    }

    fn encode(&self) -> Value {
        ObjectEncoder::new()
            .field("network_id", self.network_id)
            .field("start_epoch_inclusive", self.start_epoch_inclusive)
            .field("end_epoch_exclusive", self.end_epoch_exclusive)
            .field("nonce", self.nonce)
            .model_field("notary_public_key", &self.notary_public_key)
            .field("notary_is_signatory", self.notary_is_signatory)
            .field("tip_percentage", self.tip_percentage)
            .finish()
    }
}
impl_serde_via_codec!(TransactionHeader);

#[cfg(test)]
mod tests {
    use crate::core::codec::ModelType;
    use crate::core::error::ModelError;
    use crate::core::types::public_key::PublicKey;
    use crate::core::types::transaction_header::TransactionHeader;
    use crate::testutil::test_constants::DEFAULT_PUBLIC_KEY_HEX;
    use crate::util::constants::MAX_DOCUMENTED_EPOCH;
    use serde_json::json;

    fn sample() -> TransactionHeader {
        TransactionHeader {
            network_id: 242,
            start_epoch_inclusive: 100,
            end_epoch_exclusive: 110,
            nonce: 12345,
            notary_public_key: PublicKey::ecdsa_secp256k1(DEFAULT_PUBLIC_KEY_HEX),
            notary_is_signatory: false,
            tip_percentage: 5,
        }
    }

    #[test]
    fn test_round_trip() {
        let header = sample();
        let decoded =
            TransactionHeader::decode(&header.encode()).expect("an encoded header should decode");
        assert_eq!(header, decoded, "the decoded header should equal the original");
    }

    #[test]
    fn test_epoch_above_documented_maximum_is_accepted() {
        let mut header = sample();
        header.end_epoch_exclusive = MAX_DOCUMENTED_EPOCH + 1;
        TransactionHeader::decode(&header.encode())
            .expect("an epoch past the documented maximum should still decode");
    }

    #[test]
    fn test_nested_key_failure_names_the_key_type() {
        let err = TransactionHeader::decode(&json!({
            "network_id": 242,
            "start_epoch_inclusive": 100,
            "end_epoch_exclusive": 110,
            "nonce": 12345,
            "notary_public_key": { "key_type": "EcdsaSecp256k1" },
            "notary_is_signatory": false,
            "tip_percentage": 5,
        }))
        .expect_err("a notary key missing its hex should fail the whole parse");
        assert!(
            matches!(
                err,
                ModelError::MissingRequiredField { ref type_name, ref field }
                    if type_name == "PublicKey" && field == "key_hex"
            ),
            "expected the nested key type to be named in the error, but got: {:?}",
            err,
        );
    }
}
