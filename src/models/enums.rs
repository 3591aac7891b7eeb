use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid enum value for {field}: {value}")]
pub struct ParseEnumError {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// Variant order is severity order where the enum is ranked.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ParseEnumError {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(RiskLevel {
    Normal => "NORMAL",
    Warning => "WARNING",
    Critical => "CRITICAL",
});

str_enum!(TrafficLight {
    Green => "GREEN",
    Yellow => "YELLOW",
    Red => "RED",
});

str_enum!(SurgeryType {
    General => "general",
    Cardiac => "cardiac",
    Orthopedic => "orthopedic",
    Abdominal => "abdominal",
    Thoracic => "thoracic",
});

str_enum!(VitalField {
    Temperature => "temperature",
    Spo2 => "spo2",
    Pain => "pain",
    HeartRate => "heart_rate",
});

impl RiskLevel {
    /// Coarse 0/1/2 band used by the traffic-light view and predictive models.
    /// Anything above 2 saturates at `Critical`.
    pub fn from_band(band: u8) -> Self {
        match band {
            0 => Self::Normal,
            1 => Self::Warning,
            _ => Self::Critical,
        }
    }

    pub fn band(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::Warning => 1,
            Self::Critical => 2,
        }
    }

    pub fn traffic_light(self) -> TrafficLight {
        match self {
            Self::Normal => TrafficLight::Green,
            Self::Warning => TrafficLight::Yellow,
            Self::Critical => TrafficLight::Red,
        }
    }
}

impl Default for RiskLevel {
    fn default() -> Self {
        Self::Normal
    }
}

impl Default for SurgeryType {
    fn default() -> Self {
        Self::General
    }
}

impl VitalField {
    /// Fields whose absence lowers confidence.
    pub const REQUIRED: [VitalField; 4] = [
        VitalField::Temperature,
        VitalField::Spo2,
        VitalField::Pain,
        VitalField::HeartRate,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn risk_level_round_trip() {
        for (variant, s) in [
            (RiskLevel::Normal, "NORMAL"),
            (RiskLevel::Warning, "WARNING"),
            (RiskLevel::Critical, "CRITICAL"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(RiskLevel::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn risk_level_ordering() {
        assert!(RiskLevel::Normal < RiskLevel::Warning);
        assert!(RiskLevel::Warning < RiskLevel::Critical);
        assert!(TrafficLight::Green < TrafficLight::Red);
    }

    #[test]
    fn coarse_band_maps_to_traffic_light() {
        assert_eq!(RiskLevel::from_band(0).traffic_light(), TrafficLight::Green);
        assert_eq!(RiskLevel::from_band(1).traffic_light(), TrafficLight::Yellow);
        assert_eq!(RiskLevel::from_band(2).traffic_light(), TrafficLight::Red);
        assert_eq!(RiskLevel::from_band(7), RiskLevel::Critical);
        assert_eq!(RiskLevel::Warning.band(), 1);
    }

    #[test]
    fn surgery_type_defaults_to_general() {
        assert_eq!(SurgeryType::default(), SurgeryType::General);
        assert_eq!(SurgeryType::from_str("cardiac").unwrap(), SurgeryType::Cardiac);
    }

    #[test]
    fn wire_form_matches_as_str() {
        let json = serde_json::to_string(&RiskLevel::Critical).unwrap();
        assert_eq!(json, "\"CRITICAL\"");
        let json = serde_json::to_string(&VitalField::HeartRate).unwrap();
        assert_eq!(json, "\"heart_rate\"");
        let parsed: TrafficLight = serde_json::from_str("\"YELLOW\"").unwrap();
        assert_eq!(parsed, TrafficLight::Yellow);
    }

    #[test]
    fn invalid_enum_returns_error() {
        let err = RiskLevel::from_str("orange").unwrap_err();
        assert_eq!(err.field, "RiskLevel");
        assert!(SurgeryType::from_str("").is_err());
    }
}
