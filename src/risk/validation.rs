use crate::config::PlausibleRanges;
use crate::models::{EngineInput, VitalField};

use super::messages::AlertMessages;

/// Check order; issues are reported in this order.
const VALIDATED_FIELDS: [VitalField; 4] = [
    VitalField::HeartRate,
    VitalField::Spo2,
    VitalField::Temperature,
    VitalField::Pain,
];

/// Reject physiologically impossible values.
///
/// Absent fields are skipped: absence is a missing-data concern, not a
/// validity one. Non-finite values always fail.
pub fn validate_inputs(reading: &EngineInput, ranges: &PlausibleRanges) -> Vec<String> {
    VALIDATED_FIELDS
        .into_iter()
        .filter_map(|field| {
            let value = reading.value(field)?;
            let range = match field {
                VitalField::HeartRate => ranges.heart_rate,
                VitalField::Spo2 => ranges.spo2,
                VitalField::Temperature => ranges.temperature,
                VitalField::Pain => ranges.pain,
            };
            (!range.contains(value)).then(|| AlertMessages::invalid(field).to_string())
        })
        .collect()
}
