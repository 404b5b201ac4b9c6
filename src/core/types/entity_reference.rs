use crate::core::codec::{impl_serde_via_codec, ModelType, ObjectDecoder, ObjectEncoder};
use crate::core::error::ModelError;
use crate::util::address_utils::validate_address;
use crate::util::aliases::ModelResult;
use crate::util::traits::ResultExtensions;
use serde_json::Value;

const RESOURCE_NAME: &str = "Resource";
const ACCOUNT_NAME: &str = "Account";
const COMPONENT_NAME: &str = "Component";
const PACKAGE_NAME: &str = "Package";
const VALIDATOR_NAME: &str = "Validator";

/// The category of a ledger entity.  Unlike the polymorphic families, this is a closed
/// string enum with no payload and no qualified aliases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityType {
    Resource,
    Account,
    Component,
    Package,
    Validator,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resource => RESOURCE_NAME,
            Self::Account => ACCOUNT_NAME,
            Self::Component => COMPONENT_NAME,
            Self::Package => PACKAGE_NAME,
            Self::Validator => VALIDATOR_NAME,
        }
    }

    pub fn parse(value: &str) -> ModelResult<Self> {
        match value {
            RESOURCE_NAME => Self::Resource.to_ok(),
            ACCOUNT_NAME => Self::Account.to_ok(),
            COMPONENT_NAME => Self::Component.to_ok(),
            PACKAGE_NAME => Self::Package.to_ok(),
            VALIDATOR_NAME => Self::Validator.to_ok(),
            _ => ModelError::UnknownDiscriminator {
                base_name: "EntityType".to_string(),
                discriminator: value.to_string(),
                expected: format!(
                    "{}, {}, {}, {}, {}",
                    RESOURCE_NAME, ACCOUNT_NAME, COMPONENT_NAME, PACKAGE_NAME, VALIDATOR_NAME,
                ),
            }
            .to_err(),
        }
    }
}

/// A pointer to a ledger entity: its category plus its bech32m address.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityReference {
    pub entity_type: EntityType,
    pub address: String,
}

impl EntityReference {
    pub fn new<S: Into<String>>(entity_type: EntityType, address: S) -> Self {
        Self {
            entity_type,
            address: address.into(),
        }
    }
}
impl ModelType for EntityReference {
    const TYPE_NAME: &'static str = "EntityReference";

    fn decode(value: &Value) -> ModelResult<Self> {
        let fields = ObjectDecoder::new(Self::TYPE_NAME, value)?;
        Ok(Self {
            entity_type: EntityType::parse(&fields.require_string("entity_type")?)?,
            address: validate_address(fields.require_string("address")?)?,
        })
    }

    fn encode(&self) -> Value {
        ObjectEncoder::new()
            .field("entity_type", self.entity_type.as_str())
            .field("address", self.address.as_str())
            .finish()
    }
}
impl_serde_via_codec!(EntityReference);
