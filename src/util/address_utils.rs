use crate::core::error::ModelError;
use crate::util::aliases::ModelResult;
use crate::util::traits::ResultExtensions;
use bech32::Variant;

/// Validates that an address field carries a well-formed bech32m string.  The checksum
/// variant matters: legacy bech32 encodings of the same data are rejected.
pub fn validate_address<S: Into<String>>(address: S) -> ModelResult<String> {
    let address_string = address.into();
    let (_, _, variant) = bech32::decode(&address_string)?;
    if variant != Variant::Bech32m {
        return ModelError::InvalidAddress {
            address: address_string,
            explanation: "expected a bech32m encoding".to_string(),
        }
        .to_err();
    }
    address_string.to_ok()
}

/// Validates a bech32m address whose human-readable prefix must begin with the given
/// entity prefix (the full prefix also encodes the network, e.g. `resource_sim`).
pub fn validate_entity_address<S: Into<String>>(
    address: S,
    expected_prefix: &str,
) -> ModelResult<String> {
    let address_string = address.into();
    let (hrp, _, variant) = bech32::decode(&address_string)?;
    if variant != Variant::Bech32m {
        return ModelError::InvalidAddress {
            address: address_string,
            explanation: "expected a bech32m encoding".to_string(),
        }
        .to_err();
    }
    if !hrp.starts_with(expected_prefix) {
        return ModelError::InvalidAddress {
            address: address_string,
            explanation: format!(
                "expected the address prefix to begin with [{}], but the prefix was [{}]",
                expected_prefix, hrp,
            ),
        }
        .to_err();
    }
    address_string.to_ok()
}
