use crate::core::codec::{impl_serde_via_codec, ModelType, ObjectDecoder, ObjectEncoder};
use crate::core::registry::DiscriminatorRegistry;
use crate::core::types::resource_amount::ResourceAmount;
use crate::core::types::sbor_data::SborData;
use crate::util::aliases::ModelResult;
use crate::util::constants::SUBSTATE_TYPE_FIELD;
use crate::util::traits::ResultExtensions;
use once_cell::sync::Lazy;
use serde_json::Value;

const EPOCH_MANAGER_NAME: &str = "EpochManager";
const RESOURCE_MANAGER_NAME: &str = "ResourceManager";
const VAULT_NAME: &str = "Vault";
const METADATA_NAME: &str = "Metadata";
const COMPONENT_STATE_NAME: &str = "ComponentState";

/// A single key/value pair of a metadata substate.
#[derive(Clone, Debug, PartialEq)]
pub struct MetadataEntry {
    pub key: String,
    pub value: String,
}

impl MetadataEntry {
    pub fn new<S1: Into<String>, S2: Into<String>>(key: S1, value: S2) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
impl ModelType for MetadataEntry {
    const TYPE_NAME: &'static str = "MetadataEntry";

    fn decode(value: &Value) -> ModelResult<Self> {
        let fields = ObjectDecoder::new(Self::TYPE_NAME, value)?;
        Ok(Self {
            key: fields.require_string("key")?,
            value: fields.require_string("value")?,
        })
    }

    fn encode(&self) -> Value {
        ObjectEncoder::new()
            .field("key", self.key.as_str())
            .field("value", self.value.as_str())
            .finish()
    }
}
impl_serde_via_codec!(MetadataEntry);

/// A unit of ledger state, discriminated by `substate_type`.  Epoch values in substates
/// are not range-checked against the documented epoch ceiling; values the ledger has
/// committed are reported as-is.
#[derive(Clone, Debug, PartialEq)]
pub enum Substate {
    EpochManager {
        epoch: u64,
        round: u64,
    },
    ResourceManager {
        total_supply_attos: String,
        fungible_divisibility: Option<u32>,
    },
    Vault {
        resource_amount: ResourceAmount,
    },
    Metadata {
        entries: Vec<MetadataEntry>,
    },
    ComponentState {
        data_struct: SborData,
    },
}

static VARIANTS: Lazy<DiscriminatorRegistry<Substate>> = Lazy::new(|| {
    DiscriminatorRegistry::new(Substate::TYPE_NAME, SUBSTATE_TYPE_FIELD)
        .variant(&[EPOCH_MANAGER_NAME, "EpochManagerSubstate"], |fields| {
            Substate::EpochManager {
                epoch: fields.require_u64("epoch")?,
                round: fields.require_u64("round")?,
            }
            .to_ok()
        })
        .variant(
            &[RESOURCE_MANAGER_NAME, "ResourceManagerSubstate"],
            |fields| {
                Substate::ResourceManager {
                    total_supply_attos: fields.require_decimal("total_supply_attos")?,
                    fungible_divisibility: fields.optional_u32("fungible_divisibility")?,
                }
                .to_ok()
            },
        )
        .variant(&[VAULT_NAME, "VaultSubstate"], |fields| {
            Substate::Vault {
                resource_amount: fields.require_model("resource_amount")?,
            }
            .to_ok()
        })
        .variant(&[METADATA_NAME, "MetadataSubstate"], |fields| {
            Substate::Metadata {
                entries: fields.require_model_array("entries")?,
            }
            .to_ok()
        })
        .variant(&[COMPONENT_STATE_NAME, "ComponentStateSubstate"], |fields| {
            Substate::ComponentState {
                data_struct: fields.require_model("data_struct")?,
            }
            .to_ok()
        })
});

impl ModelType for Substate {
    const TYPE_NAME: &'static str = "Substate";

    fn decode(value: &Value) -> ModelResult<Self> {
        VARIANTS.decode(value)
    }

    fn encode(&self) -> Value {
        match self {
            Self::EpochManager { epoch, round } => {
                ObjectEncoder::discriminated(SUBSTATE_TYPE_FIELD, EPOCH_MANAGER_NAME)
                    .field("epoch", *epoch)
                    .field("round", *round)
                    .finish()
            }
            Self::ResourceManager {
                total_supply_attos,
                fungible_divisibility,
            } => ObjectEncoder::discriminated(SUBSTATE_TYPE_FIELD, RESOURCE_MANAGER_NAME)
                .field("total_supply_attos", total_supply_attos.as_str())
                .optional_field("fungible_divisibility", *fungible_divisibility)
                .finish(),
            Self::Vault { resource_amount } => {
                ObjectEncoder::discriminated(SUBSTATE_TYPE_FIELD, VAULT_NAME)
                    .model_field("resource_amount", resource_amount)
                    .finish()
            }
            Self::Metadata { entries } => {
                ObjectEncoder::discriminated(SUBSTATE_TYPE_FIELD, METADATA_NAME)
                    .model_array_field("entries", entries)
                    .finish()
            }
            Self::ComponentState { data_struct } => {
                ObjectEncoder::discriminated(SUBSTATE_TYPE_FIELD, COMPONENT_STATE_NAME)
                    .model_field("data_struct", data_struct)
                    .finish()
            }
        }
    }
}
impl_serde_via_codec!(Substate);
