use crate::core::codec::{impl_serde_via_codec, ModelType, ObjectEncoder};
use crate::core::registry::DiscriminatorRegistry;
use crate::core::types::schema_subpath::SchemaSubpath;
use crate::util::aliases::ModelResult;
use crate::util::constants::TYPE_FIELD;
use crate::util::traits::ResultExtensions;
use once_cell::sync::Lazy;
use serde_json::Value;

const AMOUNT_NAME: &str = "Amount";
const SCHEMA_PATH_NAME: &str = "SchemaPath";

/// A fungible amount parameter of a proof rule, either fixed as a literal attos decimal
/// string or resolved at evaluation time from a schema path into component state.
#[derive(Clone, Debug, PartialEq)]
pub enum DynamicAmount {
    Amount(String),
    SchemaPath(Vec<SchemaSubpath>),
}

static VARIANTS: Lazy<DiscriminatorRegistry<DynamicAmount>> = Lazy::new(|| {
    DiscriminatorRegistry::new(DynamicAmount::TYPE_NAME, TYPE_FIELD)
        .variant(&[AMOUNT_NAME, "AmountDynamicAmount"], |fields| {
            DynamicAmount::Amount(fields.require_decimal("amount")?).to_ok()
        })
        .variant(&[SCHEMA_PATH_NAME, "SchemaPathDynamicAmount"], |fields| {
            DynamicAmount::SchemaPath(fields.require_model_array("path")?).to_ok()
        })
});

impl DynamicAmount {
    pub fn amount<S: Into<String>>(amount_attos: S) -> Self {
        Self::Amount(amount_attos.into())
    }

    pub fn schema_path(path: Vec<SchemaSubpath>) -> Self {
        Self::SchemaPath(path)
    }
}
impl ModelType for DynamicAmount {
    const TYPE_NAME: &'static str = "DynamicAmount";

    fn decode(value: &Value) -> ModelResult<Self> {
        VARIANTS.decode(value)
    }

    fn encode(&self) -> Value {
        match self {
            Self::Amount(amount_attos) => ObjectEncoder::discriminated(TYPE_FIELD, AMOUNT_NAME)
                .field("amount", amount_attos.as_str())
                .finish(),
            Self::SchemaPath(path) => ObjectEncoder::discriminated(TYPE_FIELD, SCHEMA_PATH_NAME)
                .model_array_field("path", path)
                .finish(),
        }
    }
}
impl_serde_via_codec!(DynamicAmount);
