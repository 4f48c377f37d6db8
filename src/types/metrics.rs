//! Categorical values derived from raw readings: Beaufort force, UV exposure,
//! precipitation intensity and the Tempest battery operating mode.

use serde::Serialize;
use std::fmt;

/// Named Beaufort wind force categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BeaufortCategory {
    /// No wind speed was reported.
    #[default]
    None,
    Calm,
    LightAir,
    LightBreeze,
    GentleBreeze,
    ModerateBreeze,
    FreshBreeze,
    StrongBreeze,
    ModerateGale,
    FreshGale,
    StrongGale,
    Storm,
    ViolentStorm,
    Hurricane,
}

impl BeaufortCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BeaufortCategory::None => "none",
            BeaufortCategory::Calm => "calm",
            BeaufortCategory::LightAir => "light_air",
            BeaufortCategory::LightBreeze => "light_breeze",
            BeaufortCategory::GentleBreeze => "gentle_breeze",
            BeaufortCategory::ModerateBreeze => "moderate_breeze",
            BeaufortCategory::FreshBreeze => "fresh_breeze",
            BeaufortCategory::StrongBreeze => "strong_breeze",
            BeaufortCategory::ModerateGale => "moderate_gale",
            BeaufortCategory::FreshGale => "fresh_gale",
            BeaufortCategory::StrongGale => "strong_gale",
            BeaufortCategory::Storm => "storm",
            BeaufortCategory::ViolentStorm => "violent_storm",
            BeaufortCategory::Hurricane => "hurricane",
        }
    }
}

impl fmt::Display for BeaufortCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A wind speed classified on the Beaufort scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BeaufortValue {
    /// Force 0 to 12.
    pub scale: u8,
    pub category: BeaufortCategory,
}

/// UV index exposure bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UvCategory {
    None,
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl UvCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            UvCategory::None => "none",
            UvCategory::Low => "low",
            UvCategory::Moderate => "moderate",
            UvCategory::High => "high",
            UvCategory::VeryHigh => "very-high",
            UvCategory::Extreme => "extreme",
        }
    }
}

impl fmt::Display for UvCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Precipitation intensity bands, based on the hourly rain rate in mm/h.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrecipIntensity {
    None,
    VeryLight,
    Light,
    Moderate,
    Heavy,
    VeryHeavy,
    Extreme,
}

impl PrecipIntensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrecipIntensity::None => "none",
            PrecipIntensity::VeryLight => "very_light",
            PrecipIntensity::Light => "light",
            PrecipIntensity::Moderate => "moderate",
            PrecipIntensity::Heavy => "heavy",
            PrecipIntensity::VeryHeavy => "very_heavy",
            PrecipIntensity::Extreme => "extreme",
        }
    }
}

impl fmt::Display for PrecipIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Power-saving state of a Tempest. The station lowers its sampling rate as the
/// battery voltage drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BatteryMode {
    /// Mode 0: all sensors at full rate.
    FullPerformance = 0,
    /// Mode 1: wind sampled every 6 seconds.
    ReducedWind = 1,
    /// Mode 2: wind sampled once a minute.
    MinuteWind = 2,
    /// Mode 3: wind every 5 minutes, lightning and rain sensors off.
    Conservation = 3,
}

impl BatteryMode {
    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn description(&self) -> &'static str {
        match self {
            BatteryMode::FullPerformance => {
                "All sensors enabled and operating at full performance. Wind sampling interval every 3 seconds"
            }
            BatteryMode::ReducedWind => "Wind sampling interval set to 6 seconds",
            BatteryMode::MinuteWind => "Wind sampling interval set to one minute",
            BatteryMode::Conservation => {
                "Wind sampling interval set to 5 minutes. All other sensors sampled once per minute. Lightning sensor and Haptic rain sensor are disabled"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_names() {
        assert_eq!(
            serde_json::to_value(BeaufortCategory::FreshGale).unwrap(),
            "fresh_gale"
        );
        assert_eq!(serde_json::to_value(UvCategory::VeryHigh).unwrap(), "very-high");
        assert_eq!(
            serde_json::to_value(PrecipIntensity::VeryLight).unwrap(),
            "very_light"
        );
        assert_eq!(UvCategory::VeryHigh.to_string(), UvCategory::VeryHigh.as_str());
    }

    #[test]
    fn test_battery_mode_numbers() {
        assert_eq!(BatteryMode::FullPerformance.number(), 0);
        assert_eq!(BatteryMode::Conservation.number(), 3);
        assert!(BatteryMode::MinuteWind.description().contains("one minute"));
    }
}
