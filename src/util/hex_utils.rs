use crate::core::error::ModelError;
use crate::util::aliases::ModelResult;
use crate::util::traits::ResultExtensions;

const EXPECTED_FORMAT: &str = "an even-length hexadecimal string";

/// Validates a binary payload field's hex string without materializing the decoded bytes.
pub fn validate_hex_string(type_name: &str, field: &str, value: &str) -> ModelResult<()> {
    if value.len() % 2 != 0 || !value.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return ModelError::MalformedNumericString {
            type_name: type_name.to_string(),
            field: field.to_string(),
            expected_format: EXPECTED_FORMAT.to_string(),
            value: value.to_string(),
        }
        .to_err();
    }
    Ok(())
}

/// Decodes a hex payload into its raw bytes, for consumers that opt into the binary form
/// of a field rather than its string rendering.
pub fn decode_hex(type_name: &str, field: &str, value: &str) -> ModelResult<Vec<u8>> {
    hex::decode(value).map_err(|_| ModelError::MalformedNumericString {
        type_name: type_name.to_string(),
        field: field.to_string(),
        expected_format: EXPECTED_FORMAT.to_string(),
        value: value.to_string(),
    })
}
