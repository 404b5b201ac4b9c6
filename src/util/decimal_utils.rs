use crate::core::error::ModelError;
use crate::util::aliases::ModelResult;
use crate::util::traits::ResultExtensions;

/// The decimal rendering of 2^255.  Amount fields carry fixed-point values scaled by
/// 10^18 (attos) and transmitted as decimal strings, constrained to [-2^255, 2^255) by
/// the underlying ledger representation.
const MAX_MAGNITUDE: &str =
    "57896044618658097711785492504343953926634992332820282019728792003956564819968";

const EXPECTED_FORMAT: &str = "a base-10 integer amount in attos within [-2^255, 2^255)";

/// Validates an amount field's decimal string: an optional leading minus sign followed by
/// ASCII digits only, with a magnitude representable by the ledger's signed 256-bit
/// fixed-point type.  The range check compares digit strings, so no big-integer
/// arithmetic is required.
pub fn validate_attos_decimal(type_name: &str, field: &str, value: &str) -> ModelResult<()> {
    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    };
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return malformed(type_name, field, value);
    }
    let magnitude = digits.trim_start_matches('0');
    // The negative bound is inclusive and the positive bound exclusive
    let in_range = if negative {
        !exceeds_max(magnitude)
    } else {
        !exceeds_max(magnitude) && magnitude != MAX_MAGNITUDE
    };
    if !in_range {
        return malformed(type_name, field, value);
    }
    Ok(())
}

fn exceeds_max(magnitude: &str) -> bool {
    magnitude.len() > MAX_MAGNITUDE.len()
        || (magnitude.len() == MAX_MAGNITUDE.len() && magnitude > MAX_MAGNITUDE)
}

fn malformed(type_name: &str, field: &str, value: &str) -> ModelResult<()> {
    ModelError::MalformedNumericString {
        type_name: type_name.to_string(),
        field: field.to_string(),
        expected_format: EXPECTED_FORMAT.to_string(),
        value: value.to_string(),
    }
    .to_err()
}

#[cfg(test)]
mod tests {
    use crate::core::error::ModelError;
    use crate::util::decimal_utils::{validate_attos_decimal, MAX_MAGNITUDE};

    #[test]
    fn test_plain_amounts_are_accepted() {
        for value in &["0", "1", "10000000000000000000", "-1", "-0", "000042"] {
            validate_attos_decimal("TestType", "amount", value)
                .unwrap_or_else(|err| panic!("expected [{}] to be accepted, got: {:?}", value, err));
        }
    }

    #[test]
    fn test_non_numeric_strings_are_rejected() {
        for value in &["", "-", "1.5", "1e18", " 1", "1 ", "+1", "0x10", "ten"] {
            let err = validate_attos_decimal("TestType", "amount", value)
                .expect_err(&format!("expected [{}] to be rejected", value));
            assert!(
                matches!(err, ModelError::MalformedNumericString { .. }),
                "expected a malformed numeric string error for [{}], but got: {:?}",
                value,
                err,
            );
        }
    }

    #[test]
    fn test_range_boundaries() {
        // 2^255 - 1 is the largest representable positive amount
        let max_positive =
            "57896044618658097711785492504343953926634992332820282019728792003956564819967";
        validate_attos_decimal("TestType", "amount", max_positive)
            .expect("2^255 - 1 should be accepted");
        let at_bound = validate_attos_decimal("TestType", "amount", MAX_MAGNITUDE)
            .expect_err("2^255 should be rejected, the positive bound is exclusive");
        match at_bound {
            ModelError::MalformedNumericString {
                type_name, field, ..
            } => {
                assert_eq!("TestType", type_name, "the type name should be carried");
                assert_eq!("amount", field, "the offending field should be named");
            }
            _ => panic!("unexpected error encountered: {:?}", at_bound),
        };
        // -2^255 is the inclusive negative bound
        let min_negative = format!("-{}", MAX_MAGNITUDE);
        validate_attos_decimal("TestType", "amount", &min_negative)
            .expect("-2^255 should be accepted, the negative bound is inclusive");
        let below_bound = format!("-{}1", MAX_MAGNITUDE);
        validate_attos_decimal("TestType", "amount", &below_bound)
            .expect_err("a magnitude below -2^255 should be rejected");
    }

    #[test]
    fn test_leading_zeroes_do_not_defeat_the_range_check() {
        let padded = format!("000{}", MAX_MAGNITUDE);
        validate_attos_decimal("TestType", "amount", &padded)
            .expect_err("zero-padding should not sneak 2^255 past the range check");
    }
}
