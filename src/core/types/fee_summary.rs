use crate::core::codec::{impl_serde_via_codec, ModelType, ObjectDecoder, ObjectEncoder};
use crate::util::aliases::ModelResult;
use serde_json::Value;

/// The fee breakdown of a committed transaction.  Cost unit counts are plain numbers; the
/// xrd totals are attos decimal strings.
#[derive(Clone, Debug, PartialEq)]
pub struct FeeSummary {
    pub execution_cost_units_consumed: u64,
    pub finalization_cost_units_consumed: u64,
    pub xrd_total_execution_cost: String,
    pub xrd_total_royalty_cost: String,
    pub xrd_total_tipping_cost: String,
}

impl ModelType for FeeSummary {
    const TYPE_NAME: &'static str = "FeeSummary";

    fn decode(value: &Value) -> ModelResult<Self> {
        let fields = ObjectDecoder::new(Self::TYPE_NAME, value)?;
        Ok(Self {
            execution_cost_units_consumed: fields.require_u64("execution_cost_units_consumed")?,
            finalization_cost_units_consumed: fields
                .require_u64("finalization_cost_units_consumed")?,
            xrd_total_execution_cost: fields.require_decimal("xrd_total_execution_cost")?,
            xrd_total_royalty_cost: fields.require_decimal("xrd_total_royalty_cost")?,
            xrd_total_tipping_cost: fields.require_decimal("xrd_total_tipping_cost")?,
        })
    }

    fn encode(&self) -> Value {
        ObjectEncoder::new()
            .field(
                "execution_cost_units_consumed",
                self.execution_cost_units_consumed,
            )
            .field(
                "finalization_cost_units_consumed",
                self.finalization_cost_units_consumed,
            )
            .field(
                "xrd_total_execution_cost",
                self.xrd_total_execution_cost.as_str(),
            )
            .field(
                "xrd_total_royalty_cost",
                self.xrd_total_royalty_cost.as_str(),
            )
            .field(
                "xrd_total_tipping_cost",
                self.xrd_total_tipping_cost.as_str(),
            )
            .finish()
    }
}
impl_serde_via_codec!(FeeSummary);

#[cfg(test)]
mod tests {
    use crate::core::codec::ModelType;
    use crate::core::error::ModelError;
    use crate::core::types::fee_summary::FeeSummary;
    use serde_json::json;

    fn sample() -> FeeSummary {
        FeeSummary {
            execution_cost_units_consumed: 1_250_000,
            finalization_cost_units_consumed: 98_000,
            xrd_total_execution_cost: "12500000000000000".to_string(),
            xrd_total_royalty_cost: "0".to_string(),
            xrd_total_tipping_cost: "625000000000000".to_string(),
        }
    }

    #[test]
    fn test_round_trip() {
        let summary = sample();
        let decoded =
            FeeSummary::decode(&summary.encode()).expect("an encoded summary should decode");
        assert_eq!(summary, decoded, "the decoded summary should equal the original");
    }

    #[test]
    fn test_field_order_follows_the_schema() {
        assert_eq!(
            concat!(
                r#"{"execution_cost_units_consumed":1250000,"#,
                r#""finalization_cost_units_consumed":98000,"#,
                r#""xrd_total_execution_cost":"12500000000000000","#,
                r#""xrd_total_royalty_cost":"0","#,
                r#""xrd_total_tipping_cost":"625000000000000"}"#,
            ),
            sample().to_json_string(),
            "properties should be emitted in the schema-declared order",
        );
    }

    #[test]
    fn test_numeric_cost_as_string_is_rejected() {
        let err = FeeSummary::decode(&json!({
            "execution_cost_units_consumed": "1250000",
            "finalization_cost_units_consumed": 98000,
            "xrd_total_execution_cost": "0",
            "xrd_total_royalty_cost": "0",
            "xrd_total_tipping_cost": "0",
        }))
        .expect_err("a stringified cost unit count should be rejected");
        assert!(
            matches!(err, ModelError::TypeMismatch { .. }),
            "expected a type mismatch error, but got: {:?}",
            err,
        );
    }
}
