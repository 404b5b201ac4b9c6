use thiserror::Error;

/// All failures a model decode (or address/number validation) can produce.  Every variant
/// carries enough context to diagnose the offending field without re-parsing the document.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Bech32Error(#[from] bech32::Error),

    #[error("Unknown discriminator [{discriminator}] for type [{base_name}]. Expected one of [{expected}]")]
    UnknownDiscriminator {
        base_name: String,
        discriminator: String,
        expected: String,
    },

    #[error("Missing required field [{field}] on type [{type_name}]")]
    MissingRequiredField { type_name: String, field: String },

    #[error("Type mismatch in field [{field}] on type [{type_name}]: expected {expected}, but found {found}")]
    TypeMismatch {
        type_name: String,
        field: String,
        expected: String,
        found: String,
    },

    #[error("Malformed numeric string in field [{field}] on type [{type_name}]: expected {expected_format}, but got [{value}]")]
    MalformedNumericString {
        type_name: String,
        field: String,
        expected_format: String,
        value: String,
    },

    #[error("Invalid address [{address}]: {explanation}")]
    InvalidAddress { address: String, explanation: String },
}
