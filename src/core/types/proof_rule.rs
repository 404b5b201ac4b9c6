use crate::core::codec::{impl_serde_via_codec, ModelType, ObjectEncoder};
use crate::core::registry::DiscriminatorRegistry;
use crate::core::types::dynamic_amount::DynamicAmount;
use crate::core::types::dynamic_count::DynamicCount;
use crate::core::types::dynamic_resource_descriptor::{
    DynamicResourceDescriptor, DynamicResourceDescriptorList,
};
use crate::core::types::fixed_resource_descriptor::FixedResourceDescriptor;
use crate::util::aliases::ModelResult;
use crate::util::constants::TYPE_FIELD;
use crate::util::traits::ResultExtensions;
use once_cell::sync::Lazy;
use serde_json::Value;

const REQUIRE_NAME: &str = "Require";
const AMOUNT_OF_NAME: &str = "AmountOf";
const COUNT_OF_NAME: &str = "CountOf";
const ALL_OF_NAME: &str = "AllOf";
const ANY_OF_NAME: &str = "AnyOf";

/// A leaf predicate of an access rule tree, satisfied by proofs present on the caller's
/// auth zone when the protected method is invoked.
#[derive(Clone, Debug, PartialEq)]
pub enum ProofRule {
    Require(FixedResourceDescriptor),
    AmountOf {
        amount: DynamicAmount,
        resource: DynamicResourceDescriptor,
    },
    CountOf {
        count: DynamicCount,
        list: DynamicResourceDescriptorList,
    },
    AllOf(DynamicResourceDescriptorList),
    AnyOf(DynamicResourceDescriptorList),
}

static VARIANTS: Lazy<DiscriminatorRegistry<ProofRule>> = Lazy::new(|| {
    DiscriminatorRegistry::new(ProofRule::TYPE_NAME, TYPE_FIELD)
        .variant(&[REQUIRE_NAME, "RequireProofRule"], |fields| {
            ProofRule::Require(fields.require_model("resource")?).to_ok()
        })
        .variant(&[AMOUNT_OF_NAME, "AmountOfProofRule"], |fields| {
            ProofRule::AmountOf {
                amount: fields.require_model("amount")?,
                resource: fields.require_model("resource")?,
            }
            .to_ok()
        })
        .variant(&[COUNT_OF_NAME, "CountOfProofRule"], |fields| {
            ProofRule::CountOf {
                count: fields.require_model("count")?,
                list: fields.require_model("list")?,
            }
            .to_ok()
        })
        .variant(&[ALL_OF_NAME, "AllOfProofRule"], |fields| {
            ProofRule::AllOf(fields.require_model("list")?).to_ok()
        })
        .variant(&[ANY_OF_NAME, "AnyOfProofRule"], |fields| {
            ProofRule::AnyOf(fields.require_model("list")?).to_ok()
        })
});

impl ModelType for ProofRule {
    const TYPE_NAME: &'static str = "ProofRule";

    fn decode(value: &Value) -> ModelResult<Self> {
        VARIANTS.decode(value)
    }

    fn encode(&self) -> Value {
        match self {
            Self::Require(resource) => ObjectEncoder::discriminated(TYPE_FIELD, REQUIRE_NAME)
                .model_field("resource", resource)
                .finish(),
            Self::AmountOf { amount, resource } => {
                ObjectEncoder::discriminated(TYPE_FIELD, AMOUNT_OF_NAME)
                    .model_field("amount", amount)
                    .model_field("resource", resource)
                    .finish()
            }
            Self::CountOf { count, list } => {
                ObjectEncoder::discriminated(TYPE_FIELD, COUNT_OF_NAME)
                    .model_field("count", count)
                    .model_field("list", list)
                    .finish()
            }
            Self::AllOf(list) => ObjectEncoder::discriminated(TYPE_FIELD, ALL_OF_NAME)
                .model_field("list", list)
                .finish(),
            Self::AnyOf(list) => ObjectEncoder::discriminated(TYPE_FIELD, ANY_OF_NAME)
                .model_field("list", list)
                .finish(),
        }
    }
}
impl_serde_via_codec!(ProofRule);
