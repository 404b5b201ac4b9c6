use crate::core::codec::ModelType;
use crate::core::types::access_rule::AccessRule;
use crate::core::types::access_rule_node::AccessRuleNode;
use crate::core::types::fixed_resource_descriptor::FixedResourceDescriptor;
use crate::core::types::notarized_transaction::NotarizedTransaction;
use crate::core::types::proof_rule::ProofRule;
use crate::core::types::public_key::PublicKey;
use crate::core::types::signature::Signature;
use crate::core::types::transaction_header::TransactionHeader;
use crate::testutil::test_constants::{
    DEFAULT_PUBLIC_KEY_HEX, DEFAULT_RESOURCE_ADDRESS, DEFAULT_SIGNATURE_HEX,
    DEFAULT_TRANSACTION_HASH_HEX,
};

/// Decodes the encoded form of the given model and asserts the result equals the input.
pub fn assert_round_trip<T: ModelType + PartialEq + std::fmt::Debug>(model: &T) {
    let decoded = T::decode(&model.encode()).unwrap_or_else(|e| {
        panic!(
            "expected an encoded {} to decode cleanly, but got: {:?}",
            T::TYPE_NAME,
            e,
        )
    });
    assert_eq!(
        model, &decoded,
        "expected the decoded {} to equal the original",
        T::TYPE_NAME,
    );
}

/// A protected access rule gating on possession of the default test resource.
pub fn default_protected_access_rule() -> AccessRule {
    AccessRule::Protected(AccessRuleNode::ProofRule(ProofRule::Require(
        FixedResourceDescriptor::resource(DEFAULT_RESOURCE_ADDRESS),
    )))
}

/// A transaction header filled with the default test vectors.
pub fn default_transaction_header() -> TransactionHeader {
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

/// A notarized transaction filled with the default test vectors.
pub fn default_notarized_transaction() -> NotarizedTransaction {
    NotarizedTransaction {
        hash_hex: DEFAULT_TRANSACTION_HASH_HEX.to_string(),
        payload_hex: "1002000000".to_string(),
        notary_signature: Signature::ecdsa_secp256k1(DEFAULT_SIGNATURE_HEX),
    }
}
