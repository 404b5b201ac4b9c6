use crate::core::codec::{impl_serde_via_codec, ModelType, ObjectEncoder};
use crate::core::registry::DiscriminatorRegistry;
use crate::core::types::proof_rule::ProofRule;
use crate::util::aliases::ModelResult;
use crate::util::constants::TYPE_FIELD;
use crate::util::traits::ResultExtensions;
use once_cell::sync::Lazy;
use serde_json::Value;

const ALL_OF_NAME: &str = "AllOf";
const ANY_OF_NAME: &str = "AnyOf";
const PROOF_RULE_NAME: &str = "ProofRule";

/// A node of the boolean composition tree evaluated by a protected access rule.  Interior
/// nodes combine their children with all-of/any-of semantics; leaves carry a
/// [ProofRule](super::proof_rule::ProofRule).
///
/// The qualified alias of the leaf variant is `ProofAccessRuleNode` (not
/// `ProofRuleAccessRuleNode`), matching the wire format's documented values.
#[derive(Clone, Debug, PartialEq)]
pub enum AccessRuleNode {
    AllOf(Vec<AccessRuleNode>),
    AnyOf(Vec<AccessRuleNode>),
    ProofRule(ProofRule),
}

static VARIANTS: Lazy<DiscriminatorRegistry<AccessRuleNode>> = Lazy::new(|| {
    DiscriminatorRegistry::new(AccessRuleNode::TYPE_NAME, TYPE_FIELD)
        .variant(&[ALL_OF_NAME, "AllOfAccessRuleNode"], |fields| {
            AccessRuleNode::AllOf(fields.require_model_array("access_rules")?).to_ok()
        })
        .variant(&[ANY_OF_NAME, "AnyOfAccessRuleNode"], |fields| {
            AccessRuleNode::AnyOf(fields.require_model_array("access_rules")?).to_ok()
        })
        .variant(&[PROOF_RULE_NAME, "ProofAccessRuleNode"], |fields| {
            AccessRuleNode::ProofRule(fields.require_model("proof_rule")?).to_ok()
        })
});

impl ModelType for AccessRuleNode {
    const TYPE_NAME: &'static str = "AccessRuleNode";

    fn decode(value: &Value) -> ModelResult<Self> {
        VARIANTS.decode(value)
    }

    fn encode(&self) -> Value {
        match self {
            Self::AllOf(access_rules) => ObjectEncoder::discriminated(TYPE_FIELD, ALL_OF_NAME)
                .model_array_field("access_rules", access_rules)
                .finish(),
            Self::AnyOf(access_rules) => ObjectEncoder::discriminated(TYPE_FIELD, ANY_OF_NAME)
                .model_array_field("access_rules", access_rules)
                .finish(),
            Self::ProofRule(proof_rule) => {
                ObjectEncoder::discriminated(TYPE_FIELD, PROOF_RULE_NAME)
                    .model_field("proof_rule", proof_rule)
                    .finish()
            }
        }
    }
}
impl_serde_via_codec!(AccessRuleNode);

#[cfg(test)]
mod tests {
    use crate::core::codec::ModelType;
    use crate::core::error::ModelError;
    use crate::core::types::access_rule_node::AccessRuleNode;
    use crate::core::types::fixed_resource_descriptor::FixedResourceDescriptor;
    use crate::core::types::proof_rule::ProofRule;
    use crate::testutil::test_constants::DEFAULT_RESOURCE_ADDRESS;
    use serde_json::json;

    fn sample_leaf() -> AccessRuleNode {
        AccessRuleNode::ProofRule(ProofRule::Require(FixedResourceDescriptor::resource(
            DEFAULT_RESOURCE_ADDRESS,
        )))
    }

    #[test]
    fn test_nested_tree_round_trip() {
        let tree = AccessRuleNode::AllOf(vec![
            sample_leaf(),
            AccessRuleNode::AnyOf(vec![sample_leaf(), sample_leaf()]),
        ]);
        let decoded =
            AccessRuleNode::decode(&tree.encode()).expect("an encoded tree should decode");
        assert_eq!(tree, decoded, "the decoded tree should equal the original");
    }

    #[test]
    fn test_proof_rule_short_and_qualified_tags_decode_identically() {
        let proof_rule = json!({
            "type": "Require",
            "resource": { "type": "Resource", "resource_address": DEFAULT_RESOURCE_ADDRESS },
        });
        let short = AccessRuleNode::decode(&json!({
            "type": "ProofRule",
            "proof_rule": proof_rule.clone(),
        }))
        .expect("the short tag should decode");
        let qualified = AccessRuleNode::decode(&json!({
            "type": "ProofAccessRuleNode",
            "proof_rule": proof_rule,
        }))
        .expect("the qualified tag should decode");
        assert_eq!(
            short, qualified,
            "ProofRule and ProofAccessRuleNode should produce identical decoded objects",
        );
    }

    #[test]
    fn test_unknown_tag_lists_both_forms() {
        let err = AccessRuleNode::decode(&json!({ "type": "NoneOf", "access_rules": [] }))
            .expect_err("an unknown tag should be rejected");
        match err {
            ModelError::UnknownDiscriminator {
                base_name,
                discriminator,
                expected,
            } => {
                assert_eq!("AccessRuleNode", base_name, "the base type should be named");
                assert_eq!("NoneOf", discriminator, "the rejected tag should be named");
                assert_eq!(
                    "AllOf, AllOfAccessRuleNode, AnyOf, AnyOfAccessRuleNode, ProofRule, ProofAccessRuleNode",
                    expected,
                    "every accepted discriminator value should be listed",
                );
            }
            _ => panic!("unexpected error encountered: {:?}", err),
        };
    }

    #[test]
    fn test_empty_composition_is_valid() {
        // An empty all-of is trivially satisfied; the codec does not reject it
        let decoded = AccessRuleNode::decode(&json!({ "type": "AllOf", "access_rules": [] }))
            .expect("an empty composition should decode");
        assert_eq!(AccessRuleNode::AllOf(vec![]), decoded);
    }
}
