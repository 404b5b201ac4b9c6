use crate::core::codec::{impl_serde_via_codec, ModelType, ObjectEncoder};
use crate::core::registry::DiscriminatorRegistry;
use crate::util::address_utils::validate_entity_address;
use crate::util::aliases::ModelResult;
use crate::util::constants::{RESOURCE_ADDRESS_PREFIX, TYPE_FIELD};
use crate::util::traits::ResultExtensions;
use once_cell::sync::Lazy;
use serde_json::Value;

const RESOURCE_NAME: &str = "Resource";
const NON_FUNGIBLE_NAME: &str = "NonFungible";

/// A resource requirement fixed at rule creation time: either any proof of a resource, or
/// a proof of one specific non-fungible of that resource.
#[derive(Clone, Debug, PartialEq)]
pub enum FixedResourceDescriptor {
    Resource(String),
    NonFungible {
        resource_address: String,
        non_fungible_id_hex: String,
    },
}

static VARIANTS: Lazy<DiscriminatorRegistry<FixedResourceDescriptor>> = Lazy::new(|| {
    DiscriminatorRegistry::new(FixedResourceDescriptor::TYPE_NAME, TYPE_FIELD)
        .variant(
            &[RESOURCE_NAME, "ResourceFixedResourceDescriptor"],
            |fields| {
                FixedResourceDescriptor::Resource(validate_entity_address(
                    fields.require_string("resource_address")?,
                    RESOURCE_ADDRESS_PREFIX,
                )?)
                .to_ok()
            },
        )
        .variant(
            &[NON_FUNGIBLE_NAME, "NonFungibleFixedResourceDescriptor"],
            |fields| {
                FixedResourceDescriptor::NonFungible {
                    resource_address: validate_entity_address(
                        fields.require_string("resource_address")?,
                        RESOURCE_ADDRESS_PREFIX,
                    )?,
                    non_fungible_id_hex: fields.require_hex("non_fungible_id_hex")?,
                }
                .to_ok()
            },
        )
});

impl FixedResourceDescriptor {
    pub fn resource<S: Into<String>>(resource_address: S) -> Self {
        Self::Resource(resource_address.into())
    }

    pub fn non_fungible<S1: Into<String>, S2: Into<String>>(
        resource_address: S1,
        non_fungible_id_hex: S2,
    ) -> Self {
        Self::NonFungible {
            resource_address: resource_address.into(),
            non_fungible_id_hex: non_fungible_id_hex.into(),
        }
    }
}
impl ModelType for FixedResourceDescriptor {
    const TYPE_NAME: &'static str = "FixedResourceDescriptor";

    fn decode(value: &Value) -> ModelResult<Self> {
        VARIANTS.decode(value)
    }

    fn encode(&self) -> Value {
        match self {
            Self::Resource(resource_address) => {
                ObjectEncoder::discriminated(TYPE_FIELD, RESOURCE_NAME)
                    .field("resource_address", resource_address.as_str())
                    .finish()
            }
            Self::NonFungible {
                resource_address,
                non_fungible_id_hex,
            } => ObjectEncoder::discriminated(TYPE_FIELD, NON_FUNGIBLE_NAME)
                .field("resource_address", resource_address.as_str())
                .field("non_fungible_id_hex", non_fungible_id_hex.as_str())
                .finish(),
        }
    }
}
impl_serde_via_codec!(FixedResourceDescriptor);
