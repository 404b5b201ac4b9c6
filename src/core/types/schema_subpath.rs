use crate::core::codec::{impl_serde_via_codec, ModelType, ObjectEncoder};
use crate::core::registry::DiscriminatorRegistry;
use crate::util::aliases::ModelResult;
use crate::util::constants::TYPE_FIELD;
use crate::util::traits::ResultExtensions;
use once_cell::sync::Lazy;
use serde_json::Value;

const FIELD_NAME: &str = "Field";
const INDEX_NAME: &str = "Index";

/// One step of a schema path: a named field of a struct, or an index into an array.
/// Schema paths point dynamic rule parameters at values stored inside a component's own
/// state rather than fixing them at rule creation time.
#[derive(Clone, Debug, PartialEq)]
pub enum SchemaSubpath {
    Field(String),
    Index(u64),
}

static VARIANTS: Lazy<DiscriminatorRegistry<SchemaSubpath>> = Lazy::new(|| {
    DiscriminatorRegistry::new(SchemaSubpath::TYPE_NAME, TYPE_FIELD)
        .variant(&[FIELD_NAME, "FieldSchemaSubpath"], |fields| {
            SchemaSubpath::Field(fields.require_string("field")?).to_ok()
        })
        .variant(&[INDEX_NAME, "IndexSchemaSubpath"], |fields| {
            SchemaSubpath::Index(fields.require_u64("index")?).to_ok()
        })
});

impl SchemaSubpath {
    pub fn field<S: Into<String>>(name: S) -> Self {
        Self::Field(name.into())
    }

    pub fn index(index: u64) -> Self {
        Self::Index(index)
    }
}
impl ModelType for SchemaSubpath {
    const TYPE_NAME: &'static str = "SchemaSubpath";

    fn decode(value: &Value) -> ModelResult<Self> {
        VARIANTS.decode(value)
    }

    fn encode(&self) -> Value {
        match self {
            Self::Field(name) => ObjectEncoder::discriminated(TYPE_FIELD, FIELD_NAME)
                .field("field", name.as_str())
                .finish(),
            Self::Index(index) => ObjectEncoder::discriminated(TYPE_FIELD, INDEX_NAME)
                .field("index", *index)
                .finish(),
        }
    }
}
impl_serde_via_codec!(SchemaSubpath);
