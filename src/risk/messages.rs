use crate::models::VitalField;

/// Alert wording shown to patients and clinicians.
/// Short, factual phrases; the caller joins them into one message.
pub struct AlertMessages;

impl AlertMessages {
    pub const NO_DATA: &'static str = "No data provided";
    pub const STALE: &'static str = "Data is stale";

    pub const CRITICAL_OXYGEN: &'static str = "CRITICAL: Oxygen dangerously low";
    pub const CRITICAL_BREATHING: &'static str = "CRITICAL: Breathing difficulty";
    pub const CRITICAL_HYPOXIA: &'static str = "Critical hypoxia";

    pub const LOW_OXYGEN: &'static str = "Low oxygen";
    pub const SEVERE_TACHYCARDIA: &'static str = "Severe tachycardia";
    pub const TACHYCARDIA: &'static str = "Tachycardia";
    pub const EXTREME_PAIN: &'static str = "Extreme pain";
    pub const SEVERE_PAIN: &'static str = "Severe pain";
    pub const WOUND_INFECTION: &'static str = "Possible wound infection";
    pub const MISSED_DOSES: &'static str = "Multiple medication doses missed";

    pub const PERSISTENT_FEVER: &'static str = "Persistent fever (active)";
    pub const RECENT_FEVER: &'static str = "Recent fever history (monitor)";
    pub const PAIN_WORSENING: &'static str = "Pain worsening trend";
    pub const PAIN_TREND_MONITOR: &'static str = "Pain trend improving but monitor";
    pub const PAIN_RISING: &'static str = "Pain rising steadily across recent logs";
    pub const TEMPERATURE_RISING: &'static str = "Temperature rising steadily across recent logs";

    pub const HR_ABOVE_BASELINE: &'static str = "HR elevated from personal baseline";
    pub const CARDIAC_OXYGEN: &'static str = "Cardiac patient oxygen caution";
    pub const PREDICTIVE_FLAG: &'static str = "Predictive model flagged elevated risk";

    /// Validation issue for a reading outside plausible bounds.
    pub fn invalid(field: VitalField) -> &'static str {
        match field {
            VitalField::HeartRate => "Invalid heart rate reading",
            VitalField::Spo2 => "Invalid SpO2 reading",
            VitalField::Temperature => "Invalid temperature reading",
            VitalField::Pain => "Invalid pain score",
        }
    }

    pub fn high_fever(threshold: f64) -> String {
        format!("High fever (>={})", threshold)
    }

    pub fn fever(threshold: f64) -> String {
        format!("Fever (>={})", threshold)
    }
}
