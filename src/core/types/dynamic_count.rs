use crate::core::codec::{impl_serde_via_codec, ModelType, ObjectEncoder};
use crate::core::registry::DiscriminatorRegistry;
use crate::core::types::schema_subpath::SchemaSubpath;
use crate::util::aliases::ModelResult;
use crate::util::constants::TYPE_FIELD;
use crate::util::traits::ResultExtensions;
use once_cell::sync::Lazy;
use serde_json::Value;

const COUNT_NAME: &str = "Count";
const SCHEMA_PATH_NAME: &str = "SchemaPath";

/// A non-fungible count parameter of a proof rule, either a fixed literal or resolved at
/// evaluation time from a schema path into component state.
#[derive(Clone, Debug, PartialEq)]
pub enum DynamicCount {
    Count(u32),
    SchemaPath(Vec<SchemaSubpath>),
}

static VARIANTS: Lazy<DiscriminatorRegistry<DynamicCount>> = Lazy::new(|| {
    DiscriminatorRegistry::new(DynamicCount::TYPE_NAME, TYPE_FIELD)
        .variant(&[COUNT_NAME, "CountDynamicCount"], |fields| {
            DynamicCount::Count(fields.require_u32("count")?).to_ok()
        })
        .variant(&[SCHEMA_PATH_NAME, "SchemaPathDynamicCount"], |fields| {
            DynamicCount::SchemaPath(fields.require_model_array("path")?).to_ok()
        })
});

impl DynamicCount {
    pub fn count(count: u32) -> Self {
        Self::Count(count)
    }

    pub fn schema_path(path: Vec<SchemaSubpath>) -> Self {
        Self::SchemaPath(path)
    }
}
impl ModelType for DynamicCount {
    const TYPE_NAME: &'static str = "DynamicCount";

    fn decode(value: &Value) -> ModelResult<Self> {
        VARIANTS.decode(value)
    }

    fn encode(&self) -> Value {
        match self {
            Self::Count(count) => ObjectEncoder::discriminated(TYPE_FIELD, COUNT_NAME)
                .field("count", *count)
                .finish(),
            Self::SchemaPath(path) => ObjectEncoder::discriminated(TYPE_FIELD, SCHEMA_PATH_NAME)
                .model_array_field("path", path)
                .finish(),
        }
    }
}
impl_serde_via_codec!(DynamicCount);
