use crate::core::codec::{impl_serde_via_codec, ModelType, ObjectEncoder};
use crate::core::registry::DiscriminatorRegistry;
use crate::util::aliases::ModelResult;
use crate::util::constants::KEY_TYPE_FIELD;
use crate::util::traits::ResultExtensions;
use once_cell::sync::Lazy;
use serde_json::Value;

const ECDSA_SECP256K1_NAME: &str = "EcdsaSecp256k1";
const EDDSA_ED25519_NAME: &str = "EddsaEd25519";

/// A signature over a transaction payload, discriminated by curve like
/// [PublicKey](super::public_key::PublicKey).  Signature bytes stay hex-encoded and are
/// never verified by this layer.
#[derive(Clone, Debug, PartialEq)]
pub enum Signature {
    EcdsaSecp256k1 { signature_hex: String },
    EddsaEd25519 { signature_hex: String },
}

static VARIANTS: Lazy<DiscriminatorRegistry<Signature>> = Lazy::new(|| {
    DiscriminatorRegistry::new(Signature::TYPE_NAME, KEY_TYPE_FIELD)
        .variant(
            &[ECDSA_SECP256K1_NAME, "EcdsaSecp256k1Signature"],
            |fields| {
                Signature::EcdsaSecp256k1 {
                    signature_hex: fields.require_hex("signature_hex")?,
                }
                .to_ok()
            },
        )
        .variant(&[EDDSA_ED25519_NAME, "EddsaEd25519Signature"], |fields| {
            Signature::EddsaEd25519 {
                signature_hex: fields.require_hex("signature_hex")?,
            }
            .to_ok()
        })
});

impl Signature {
    pub fn ecdsa_secp256k1<S: Into<String>>(signature_hex: S) -> Self {
        Self::EcdsaSecp256k1 {
            signature_hex: signature_hex.into(),
        }
    }

    pub fn eddsa_ed25519<S: Into<String>>(signature_hex: S) -> Self {
        Self::EddsaEd25519 {
            signature_hex: signature_hex.into(),
        }
    }
}
impl ModelType for Signature {
    const TYPE_NAME: &'static str = "Signature";

    fn decode(value: &Value) -> ModelResult<Self> {
        VARIANTS.decode(value)
    }

    fn encode(&self) -> Value {
        match self {
            Self::EcdsaSecp256k1 { signature_hex } => {
                ObjectEncoder::discriminated(KEY_TYPE_FIELD, ECDSA_SECP256K1_NAME)
                    .field("signature_hex", signature_hex.as_str())
                    .finish()
            }
            Self::EddsaEd25519 { signature_hex } => {
                ObjectEncoder::discriminated(KEY_TYPE_FIELD, EDDSA_ED25519_NAME)
                    .field("signature_hex", signature_hex.as_str())
                    .finish()
            }
        }
    }
}
impl_serde_via_codec!(Signature);
