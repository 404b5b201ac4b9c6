use crate::core::codec::{impl_serde_via_codec, ModelType, ObjectEncoder};
use crate::core::registry::DiscriminatorRegistry;
use crate::core::types::access_rule_node::AccessRuleNode;
use crate::util::aliases::ModelResult;
use crate::util::constants::TYPE_FIELD;
use crate::util::traits::ResultExtensions;
use once_cell::sync::Lazy;
use serde_json::Value;

const ALLOW_ALL_NAME: &str = "AllowAll";
const DENY_ALL_NAME: &str = "DenyAll";
const PROTECTED_NAME: &str = "Protected";

/// The authorization rule attached to a component method: open to everyone, closed to
/// everyone, or gated behind a proof composition tree.
#[derive(Clone, Debug, PartialEq)]
pub enum AccessRule {
    AllowAll,
    DenyAll,
    Protected(AccessRuleNode),
}

static VARIANTS: Lazy<DiscriminatorRegistry<AccessRule>> = Lazy::new(|| {
    DiscriminatorRegistry::new(AccessRule::TYPE_NAME, TYPE_FIELD)
        .variant(&[ALLOW_ALL_NAME, "AllowAllAccessRule"], |_| {
            AccessRule::AllowAll.to_ok()
        })
        .variant(&[DENY_ALL_NAME, "DenyAllAccessRule"], |_| {
            AccessRule::DenyAll.to_ok()
        })
        .variant(&[PROTECTED_NAME, "ProtectedAccessRule"], |fields| {
            AccessRule::Protected(fields.require_model("access_rule")?).to_ok()
        })
});

impl ModelType for AccessRule {
    const TYPE_NAME: &'static str = "AccessRule";

    fn decode(value: &Value) -> ModelResult<Self> {
        VARIANTS.decode(value)
    }

    fn encode(&self) -> Value {
        match self {
            Self::AllowAll => ObjectEncoder::discriminated(TYPE_FIELD, ALLOW_ALL_NAME).finish(),
            Self::DenyAll => ObjectEncoder::discriminated(TYPE_FIELD, DENY_ALL_NAME).finish(),
            Self::Protected(access_rule) => {
                ObjectEncoder::discriminated(TYPE_FIELD, PROTECTED_NAME)
                    .model_field("access_rule", access_rule)
                    .finish()
            }
        }
    }
}
impl_serde_via_codec!(AccessRule);

#[cfg(test)]
mod tests {
    use crate::core::codec::ModelType;
    use crate::core::error::ModelError;
    use crate::core::types::access_rule::AccessRule;
    use crate::core::types::access_rule_node::AccessRuleNode;
    use serde_json::json;

    #[test]
    fn test_marker_variants_encode_only_the_discriminator() {
        assert_eq!(
            r#"{"type":"AllowAll"}"#,
            AccessRule::AllowAll.to_json_string(),
        );
        assert_eq!(r#"{"type":"DenyAll"}"#, AccessRule::DenyAll.to_json_string());
    }

    #[test]
    fn test_protected_round_trip() {
        let rule = AccessRule::Protected(AccessRuleNode::AnyOf(vec![]));
        let decoded = AccessRule::decode(&rule.encode()).expect("an encoded rule should decode");
        assert_eq!(rule, decoded, "the decoded rule should equal the original");
    }

    #[test]
    fn test_protected_requires_its_node() {
        let err = AccessRule::decode(&json!({ "type": "Protected" }))
            .expect_err("a protected rule without a node should be rejected");
        match err {
            ModelError::MissingRequiredField { type_name, field } => {
                assert_eq!("AccessRule", type_name, "the type name should be carried");
                assert_eq!("access_rule", field, "the missing field should be named");
            }
            _ => panic!("unexpected error encountered: {:?}", err),
        };
    }
}
