use crate::core::codec::{impl_serde_via_codec, ModelType, ObjectEncoder};
use crate::core::registry::DiscriminatorRegistry;
use crate::util::aliases::ModelResult;
use crate::util::constants::KEY_TYPE_FIELD;
use crate::util::traits::ResultExtensions;
use once_cell::sync::Lazy;
use serde_json::Value;

const ECDSA_SECP256K1_NAME: &str = "EcdsaSecp256k1";
const EDDSA_ED25519_NAME: &str = "EddsaEd25519";

/// A public key carried by notary and signer fields, discriminated by its curve.  The key
/// bytes stay hex-encoded; this layer performs no cryptography.
#[derive(Clone, Debug, PartialEq)]
pub enum PublicKey {
    EcdsaSecp256k1 { key_hex: String },
    EddsaEd25519 { key_hex: String },
}

static VARIANTS: Lazy<DiscriminatorRegistry<PublicKey>> = Lazy::new(|| {
    DiscriminatorRegistry::new(PublicKey::TYPE_NAME, KEY_TYPE_FIELD)
        .variant(
            &[ECDSA_SECP256K1_NAME, "EcdsaSecp256k1PublicKey"],
            |fields| {
                PublicKey::EcdsaSecp256k1 {
                    key_hex: fields.require_hex("key_hex")?,
                }
                .to_ok()
            },
        )
        .variant(&[EDDSA_ED25519_NAME, "EddsaEd25519PublicKey"], |fields| {
            PublicKey::EddsaEd25519 {
                key_hex: fields.require_hex("key_hex")?,
            }
            .to_ok()
        })
});

impl PublicKey {
    pub fn ecdsa_secp256k1<S: Into<String>>(key_hex: S) -> Self {
        Self::EcdsaSecp256k1 {
            key_hex: key_hex.into(),
        }
    }

    pub fn eddsa_ed25519<S: Into<String>>(key_hex: S) -> Self {
        Self::EddsaEd25519 {
            key_hex: key_hex.into(),
        }
    }
}
impl ModelType for PublicKey {
    const TYPE_NAME: &'static str = "PublicKey";

    fn decode(value: &Value) -> ModelResult<Self> {
        VARIANTS.decode(value)
    }

    fn encode(&self) -> Value {
        match self {
            Self::EcdsaSecp256k1 { key_hex } => {
                ObjectEncoder::discriminated(KEY_TYPE_FIELD, ECDSA_SECP256K1_NAME)
                    .field("key_hex", key_hex.as_str())
                    .finish()
            }
            Self::EddsaEd25519 { key_hex } => {
                ObjectEncoder::discriminated(KEY_TYPE_FIELD, EDDSA_ED25519_NAME)
                    .field("key_hex", key_hex.as_str())
                    .finish()
            }
        }
    }
}
impl_serde_via_codec!(PublicKey);
