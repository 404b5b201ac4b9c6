use core_api_models::core::codec::ModelType;
use core_api_models::core::error::ModelError;
use core_api_models::core::types::access_rule::AccessRule;
use core_api_models::core::types::access_rule_node::AccessRuleNode;
use core_api_models::core::types::dynamic_amount::DynamicAmount;
use core_api_models::core::types::dynamic_resource_descriptor::DynamicResourceDescriptor;
use core_api_models::core::types::fixed_resource_descriptor::FixedResourceDescriptor;
use core_api_models::core::types::ledger_transaction::LedgerTransaction;
use core_api_models::core::types::notarized_transaction::NotarizedTransaction;
use core_api_models::core::types::proof_rule::ProofRule;
use core_api_models::core::types::public_key::PublicKey;
use core_api_models::core::types::resource_amount::ResourceAmount;
use core_api_models::core::types::signature::Signature;
use core_api_models::core::types::substate::{MetadataEntry, Substate};
use core_api_models::core::types::transaction_header::TransactionHeader;
use serde_json::json;

const RESOURCE_ADDRESS: &str = "resource_sim1u3rh7qymnvr0dfnfs2aacpwuthee4a3yyg6y8py64y0h9sfy";
const PUBLIC_KEY_HEX: &str =
    "02f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9";
const SIGNATURE_HEX: &str =
    "bd15a5cbaa79b420cd0529b09a5f33c806d557d43626977bcd6f5d1c5e5f4a8e\
     1b2c3d4e5f60718293a4b5c6d7e8f9000112233445566778899aabbccddeeff0";
const TRANSACTION_HASH_HEX: &str =
    "1dbb1f3e5a0c07d9f5b3f1a2c4e6d8fa0b1c2d3e4f5a6b7c8d9e0f1a2b3c4d5e";

#[test]
fn deeply_nested_access_rule_decodes_from_raw_json() {
    let document = json!({
        "type": "Protected",
        "access_rule": {
            "type": "AllOf",
            "access_rules": [
                {
                    "type": "ProofRule",
                    "proof_rule": {
                        "type": "AmountOf",
                        "amount": { "type": "Amount", "amount": "5000000000000000000" },
                        "resource": { "type": "Resource", "resource_address": RESOURCE_ADDRESS },
                    },
                },
                {
                    "type": "AnyOf",
                    "access_rules": [
                        {
                            "type": "ProofAccessRuleNode",
                            "proof_rule": {
                                "type": "RequireProofRule",
                                "resource": {
                                    "type": "Resource",
                                    "resource_address": RESOURCE_ADDRESS,
                                },
                            },
                        },
                    ],
                },
            ],
        },
    });
    let decoded = AccessRule::decode(&document).expect("the nested document should decode");
    let expected = AccessRule::Protected(AccessRuleNode::AllOf(vec![
        AccessRuleNode::ProofRule(ProofRule::AmountOf {
            amount: DynamicAmount::amount("5000000000000000000"),
            resource: DynamicResourceDescriptor::resource(RESOURCE_ADDRESS),
        }),
        AccessRuleNode::AnyOf(vec![AccessRuleNode::ProofRule(ProofRule::Require(
            FixedResourceDescriptor::resource(RESOURCE_ADDRESS),
        ))]),
    ]));
    assert_eq!(
        expected, decoded,
        "short and qualified tags should decode interchangeably at every level",
    );
}

#[test]
fn encoded_output_is_byte_stable() {
    let transaction = LedgerTransaction::User {
        payload_hex: "1002000000".to_string(),
        notarized_transaction: NotarizedTransaction {
            hash_hex: TRANSACTION_HASH_HEX.to_string(),
            payload_hex: "1002000000".to_string(),
            notary_signature: Signature::eddsa_ed25519(SIGNATURE_HEX),
        },
    };
    let expected = format!(
        concat!(
            r#"{{"type":"User","payload_hex":"1002000000","#,
            r#""notarized_transaction":{{"hash_hex":"{}","payload_hex":"1002000000","#,
            r#""notary_signature":{{"key_type":"EddsaEd25519","signature_hex":"{}"}}}}}}"#,
        ),
        TRANSACTION_HASH_HEX, SIGNATURE_HEX,
    );
    assert_eq!(
        expected,
        transaction.to_json_string(),
        "encoding should be deterministic with discriminators first and schema field order",
    );
    // Encoding the same value twice must yield identical bytes
    assert_eq!(
        transaction.to_json_string(),
        transaction.to_json_string(),
        "repeated encodes should be byte-identical",
    );
}

#[test]
fn serde_embedding_preserves_the_wire_rules() {
    // A model embedded in an ordinary serde structure should serialize via its codec
    #[derive(serde::Serialize)]
    struct Envelope {
        transaction_header: TransactionHeader,
    }
    let envelope = Envelope {
        transaction_header: TransactionHeader {
            network_id: 242,
            start_epoch_inclusive: 100,
            end_epoch_exclusive: 110,
            nonce: 1,
            notary_public_key: PublicKey::eddsa_ed25519(PUBLIC_KEY_HEX),
            notary_is_signatory: true,
            tip_percentage: 0,
        },
    };
    let serialized =
        serde_json::to_string(&envelope).expect("the envelope should serialize cleanly");
    assert!(
        serialized.contains(r#""key_type":"EddsaEd25519""#),
        "the embedded model should carry its discriminator, but produced: {}",
        serialized,
    );
}

#[test]
fn substate_collection_round_trips_through_strings() {
    let substates = vec![
        Substate::EpochManager { epoch: 42, round: 7 },
        Substate::Vault {
            resource_amount: ResourceAmount::fungible(RESOURCE_ADDRESS, "1000000000000000000"),
        },
        Substate::Metadata {
            entries: vec![MetadataEntry::new("name", "Radix")],
        },
    ];
    for substate in substates {
        let decoded = Substate::from_json_str(&substate.to_json_string())
            .expect("an encoded substate should parse back from its string form");
        assert_eq!(substate, decoded, "the decoded substate should equal the original");
    }
}

#[test]
fn errors_surface_structured_context_from_deep_in_a_document() {
    let err = LedgerTransaction::decode(&json!({
        "type": "User",
        "payload_hex": "1002000000",
        "notarized_transaction": {
            "hash_hex": TRANSACTION_HASH_HEX,
            "payload_hex": "1002000000",
            "notary_signature": { "key_type": "Schnorr", "signature_hex": SIGNATURE_HEX },
        },
    }))
    .expect_err("an unknown signature curve should fail the whole parse");
    match err {
        ModelError::UnknownDiscriminator {
            base_name,
            discriminator,
            expected,
        } => {
            assert_eq!("Signature", base_name, "the inner type should be named");
            assert_eq!("Schnorr", discriminator, "the rejected tag should be named");
            assert_eq!(
                "EcdsaSecp256k1, EcdsaSecp256k1Signature, EddsaEd25519, EddsaEd25519Signature",
                expected,
                "every accepted curve tag should be listed",
            );
        }
        _ => panic!("unexpected error encountered: {:?}", err),
    };
}

#[test]
fn malformed_json_text_is_reported_as_a_json_error() {
    let err = AccessRule::from_json_str("{ not json")
        .expect_err("malformed json text should be rejected");
    assert!(
        matches!(err, ModelError::Json(_)),
        "expected a json error, but got: {:?}",
        err,
    );
}
