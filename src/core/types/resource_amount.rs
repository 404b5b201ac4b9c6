use crate::core::codec::{impl_serde_via_codec, ModelType, ObjectEncoder};
use crate::core::registry::DiscriminatorRegistry;
use crate::util::aliases::ModelResult;
use crate::util::constants::{RESOURCE_ADDRESS_PREFIX, RESOURCE_TYPE_FIELD};
use crate::util::address_utils::validate_entity_address;
use crate::util::traits::ResultExtensions;
use once_cell::sync::Lazy;
use serde_json::Value;

const FUNGIBLE_NAME: &str = "Fungible";
const NON_FUNGIBLE_NAME: &str = "NonFungible";

/// The contents of a vault, discriminated by `resource_type` rather than `type`.  Fungible
/// holdings carry a balance in attos; non-fungible holdings carry the hex ids of the
/// individual units.
#[derive(Clone, Debug, PartialEq)]
pub enum ResourceAmount {
    Fungible {
        resource_address: String,
        amount_attos: String,
    },
    NonFungible {
        resource_address: String,
        non_fungible_id_hexes: Vec<String>,
    },
}

static VARIANTS: Lazy<DiscriminatorRegistry<ResourceAmount>> = Lazy::new(|| {
    DiscriminatorRegistry::new(ResourceAmount::TYPE_NAME, RESOURCE_TYPE_FIELD)
        .variant(&[FUNGIBLE_NAME, "FungibleResourceAmount"], |fields| {
            ResourceAmount::Fungible {
                resource_address: validate_entity_address(
                    fields.require_string("resource_address")?,
                    RESOURCE_ADDRESS_PREFIX,
                )?,
                amount_attos: fields.require_decimal("amount_attos")?,
            }
            .to_ok()
        })
        .variant(&[NON_FUNGIBLE_NAME, "NonFungibleResourceAmount"], |fields| {
            ResourceAmount::NonFungible {
                resource_address: validate_entity_address(
                    fields.require_string("resource_address")?,
                    RESOURCE_ADDRESS_PREFIX,
                )?,
                non_fungible_id_hexes: fields.require_hex_array("non_fungible_id_hexes")?,
            }
            .to_ok()
        })
});

impl ResourceAmount {
    pub fn fungible<S1: Into<String>, S2: Into<String>>(
        resource_address: S1,
        amount_attos: S2,
    ) -> Self {
        Self::Fungible {
            resource_address: resource_address.into(),
            amount_attos: amount_attos.into(),
        }
    }

    pub fn non_fungible<S: Into<String>>(
        resource_address: S,
        non_fungible_id_hexes: Vec<String>,
    ) -> Self {
        Self::NonFungible {
            resource_address: resource_address.into(),
            non_fungible_id_hexes,
        }
    }
}
impl ModelType for ResourceAmount {
    const TYPE_NAME: &'static str = "ResourceAmount";

    fn decode(value: &Value) -> ModelResult<Self> {
        VARIANTS.decode(value)
    }

    fn encode(&self) -> Value {
        match self {
            Self::Fungible {
                resource_address,
                amount_attos,
            } => ObjectEncoder::discriminated(RESOURCE_TYPE_FIELD, FUNGIBLE_NAME)
                .field("resource_address", resource_address.as_str())
                .field("amount_attos", amount_attos.as_str())
                .finish(),
            Self::NonFungible {
                resource_address,
                non_fungible_id_hexes,
            } => ObjectEncoder::discriminated(RESOURCE_TYPE_FIELD, NON_FUNGIBLE_NAME)
                .field("resource_address", resource_address.as_str())
                .string_array_field("non_fungible_id_hexes", non_fungible_id_hexes)
                .finish(),
        }
    }
}
impl_serde_via_codec!(ResourceAmount);
