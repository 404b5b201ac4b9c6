use crate::core::codec::{impl_serde_via_codec, ModelType, ObjectEncoder};
use crate::core::registry::DiscriminatorRegistry;
use crate::core::types::schema_subpath::SchemaSubpath;
use crate::util::address_utils::validate_entity_address;
use crate::util::aliases::ModelResult;
use crate::util::constants::{RESOURCE_ADDRESS_PREFIX, TYPE_FIELD};
use crate::util::traits::ResultExtensions;
use once_cell::sync::Lazy;
use serde_json::Value;

const RESOURCE_NAME: &str = "Resource";
const NON_FUNGIBLE_NAME: &str = "NonFungible";
const SCHEMA_PATH_NAME: &str = "SchemaPath";
const LIST_NAME: &str = "List";

/// A resource requirement that may be resolved at evaluation time: fixed forms mirror
/// [FixedResourceDescriptor](super::fixed_resource_descriptor::FixedResourceDescriptor),
/// and the schema path form reads the requirement from component state.
#[derive(Clone, Debug, PartialEq)]
pub enum DynamicResourceDescriptor {
    Resource(String),
    NonFungible {
        resource_address: String,
        non_fungible_id_hex: String,
    },
    SchemaPath(Vec<SchemaSubpath>),
}

/// A list of dynamic resource requirements, either literal or read wholesale from a
/// schema path into component state.
#[derive(Clone, Debug, PartialEq)]
pub enum DynamicResourceDescriptorList {
    List(Vec<DynamicResourceDescriptor>),
    SchemaPath(Vec<SchemaSubpath>),
}

static DESCRIPTOR_VARIANTS: Lazy<DiscriminatorRegistry<DynamicResourceDescriptor>> =
    Lazy::new(|| {
        DiscriminatorRegistry::new(DynamicResourceDescriptor::TYPE_NAME, TYPE_FIELD)
            .variant(
                &[RESOURCE_NAME, "ResourceDynamicResourceDescriptor"],
                |fields| {
                    DynamicResourceDescriptor::Resource(validate_entity_address(
                        fields.require_string("resource_address")?,
                        RESOURCE_ADDRESS_PREFIX,
                    )?)
                    .to_ok()
                },
            )
            .variant(
                &[NON_FUNGIBLE_NAME, "NonFungibleDynamicResourceDescriptor"],
                |fields| {
                    DynamicResourceDescriptor::NonFungible {
                        resource_address: validate_entity_address(
                            fields.require_string("resource_address")?,
                            RESOURCE_ADDRESS_PREFIX,
                        )?,
                        non_fungible_id_hex: fields.require_hex("non_fungible_id_hex")?,
                    }
                    .to_ok()
                },
            )
            .variant(
                &[SCHEMA_PATH_NAME, "SchemaPathDynamicResourceDescriptor"],
                |fields| {
                    DynamicResourceDescriptor::SchemaPath(fields.require_model_array("path")?)
                        .to_ok()
                },
            )
    });

static LIST_VARIANTS: Lazy<DiscriminatorRegistry<DynamicResourceDescriptorList>> =
    Lazy::new(|| {
        DiscriminatorRegistry::new(DynamicResourceDescriptorList::TYPE_NAME, TYPE_FIELD)
            .variant(
                &[LIST_NAME, "ListDynamicResourceDescriptorList"],
                |fields| {
                    DynamicResourceDescriptorList::List(fields.require_model_array("list")?)
                        .to_ok()
                },
            )
            .variant(
                &[SCHEMA_PATH_NAME, "SchemaPathDynamicResourceDescriptorList"],
                |fields| {
                    DynamicResourceDescriptorList::SchemaPath(fields.require_model_array("path")?)
                        .to_ok()
                },
            )
    });

impl DynamicResourceDescriptor {
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

    pub fn schema_path(path: Vec<SchemaSubpath>) -> Self {
        Self::SchemaPath(path)
    }
}
impl ModelType for DynamicResourceDescriptor {
    const TYPE_NAME: &'static str = "DynamicResourceDescriptor";

    fn decode(value: &Value) -> ModelResult<Self> {
        DESCRIPTOR_VARIANTS.decode(value)
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
            Self::SchemaPath(path) => ObjectEncoder::discriminated(TYPE_FIELD, SCHEMA_PATH_NAME)
                .model_array_field("path", path)
                .finish(),
        }
    }
}
impl_serde_via_codec!(DynamicResourceDescriptor);

impl DynamicResourceDescriptorList {
    pub fn list(descriptors: Vec<DynamicResourceDescriptor>) -> Self {
        Self::List(descriptors)
    }

    pub fn schema_path(path: Vec<SchemaSubpath>) -> Self {
        Self::SchemaPath(path)
    }
}
impl ModelType for DynamicResourceDescriptorList {
    const TYPE_NAME: &'static str = "DynamicResourceDescriptorList";

    fn decode(value: &Value) -> ModelResult<Self> {
        LIST_VARIANTS.decode(value)
    }

    fn encode(&self) -> Value {
        match self {
            Self::List(descriptors) => ObjectEncoder::discriminated(TYPE_FIELD, LIST_NAME)
                .model_array_field("list", descriptors)
                .finish(),
            Self::SchemaPath(path) => ObjectEncoder::discriminated(TYPE_FIELD, SCHEMA_PATH_NAME)
                .model_array_field("path", path)
                .finish(),
        }
    }
}
impl_serde_via_codec!(DynamicResourceDescriptorList);
