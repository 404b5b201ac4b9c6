use crate::core::codec::{impl_serde_via_codec, ModelType, ObjectEncoder};
use crate::core::registry::DiscriminatorRegistry;
use crate::core::types::notarized_transaction::NotarizedTransaction;
use crate::core::types::round_update_transaction::RoundUpdateTransaction;
use crate::core::types::sbor_data::SborData;
use crate::util::aliases::ModelResult;
use crate::util::constants::TYPE_FIELD;
use crate::util::traits::ResultExtensions;
use once_cell::sync::Lazy;
use serde_json::Value;

const USER_NAME: &str = "User";
const ROUND_UPDATE_NAME: &str = "RoundUpdate";
const GENESIS_NAME: &str = "Genesis";

/// A transaction as committed to the ledger.  Every variant carries the raw committed
/// payload; the typed sub-document depends on who originated the transaction.
#[derive(Clone, Debug, PartialEq)]
pub enum LedgerTransaction {
    User {
        payload_hex: String,
        notarized_transaction: NotarizedTransaction,
    },
    RoundUpdate {
        payload_hex: String,
        round_update_transaction: RoundUpdateTransaction,
    },
    Genesis {
        payload_hex: String,
        is_flash: bool,
        system_transaction: Option<SborData>,
    },
}

static VARIANTS: Lazy<DiscriminatorRegistry<LedgerTransaction>> = Lazy::new(|| {
    DiscriminatorRegistry::new(LedgerTransaction::TYPE_NAME, TYPE_FIELD)
        .variant(&[USER_NAME, "UserLedgerTransaction"], |fields| {
            LedgerTransaction::User {
                payload_hex: fields.require_hex("payload_hex")?,
                notarized_transaction: fields.require_model("notarized_transaction")?,
            }
            .to_ok()
        })
        .variant(
            &[ROUND_UPDATE_NAME, "RoundUpdateLedgerTransaction"],
            |fields| {
                LedgerTransaction::RoundUpdate {
                    payload_hex: fields.require_hex("payload_hex")?,
                    round_update_transaction: fields.require_model("round_update_transaction")?,
                }
                .to_ok()
            },
        )
        .variant(&[GENESIS_NAME, "GenesisLedgerTransaction"], |fields| {
            LedgerTransaction::Genesis {
                payload_hex: fields.require_hex("payload_hex")?,
                is_flash: fields.require_bool("is_flash")?,
                system_transaction: fields.optional_model("system_transaction")?,
            }
            .to_ok()
        })
});

impl ModelType for LedgerTransaction {
    const TYPE_NAME: &'static str = "LedgerTransaction";

    fn decode(value: &Value) -> ModelResult<Self> {
        VARIANTS.decode(value)
    }

    fn encode(&self) -> Value {
        match self {
            Self::User {
                payload_hex,
                notarized_transaction,
            } => ObjectEncoder::discriminated(TYPE_FIELD, USER_NAME)
                .field("payload_hex", payload_hex.as_str())
                .model_field("notarized_transaction", notarized_transaction)
                .finish(),
            Self::RoundUpdate {
                payload_hex,
                round_update_transaction,
            } => ObjectEncoder::discriminated(TYPE_FIELD, ROUND_UPDATE_NAME)
                .field("payload_hex", payload_hex.as_str())
                .model_field("round_update_transaction", round_update_transaction)
                .finish(),
            Self::Genesis {
                payload_hex,
                is_flash,
                system_transaction,
            } => ObjectEncoder::discriminated(TYPE_FIELD, GENESIS_NAME)
                .field("payload_hex", payload_hex.as_str())
                .field("is_flash", *is_flash)
                .optional_model_field("system_transaction", system_transaction)
                .finish(),
        }
    }
}
impl_serde_via_codec!(LedgerTransaction);
