//! Defines the unit systems a client can report in, and the unit labels that go
//! with each measured quantity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The unit system every unit-bearing field of a record is expressed in.
///
/// The WeatherFlow API always reports metric values; [`UnitSystem::Imperial`]
/// makes the client convert them before they reach a record.
///
/// # Examples
///
/// ```
/// use weatherflow_rest::UnitSystem;
///
/// assert_eq!("imperial".parse::<UnitSystem>().unwrap(), UnitSystem::Imperial);
/// // Unknown names fall back to metric.
/// assert_eq!("nautical".parse::<UnitSystem>().unwrap(), UnitSystem::Metric);
/// assert_eq!(UnitSystem::default().to_string(), "metric");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// °C, hPa, mm, m/s, km, kg/m³.
    #[default]
    Metric,
    /// °F, inHg, in, mph, mi, lb/ft³.
    Imperial,
}

impl UnitSystem {
    pub fn is_metric(&self) -> bool {
        matches!(self, UnitSystem::Metric)
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parsing never fails: anything that is not `"imperial"` is metric.
impl FromStr for UnitSystem {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("imperial") {
            Ok(UnitSystem::Imperial)
        } else {
            Ok(UnitSystem::Metric)
        }
    }
}

/// Unit labels for each quantity a record can carry, for the configured
/// [`UnitSystem`]. Handy for dashboards that render values next to their unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitDescriptions {
    pub altitude: &'static str,
    pub density: &'static str,
    pub distance: &'static str,
    /// Unit of the primary wind speed fields.
    pub length: &'static str,
    /// Unit of forecast wind speeds when the host localizes values itself.
    pub length_km: &'static str,
    pub pressure: &'static str,
    pub precipitation: &'static str,
    pub precipitation_rate: &'static str,
    pub temperature: &'static str,
}

impl UnitDescriptions {
    pub fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Metric => Self {
                altitude: "m",
                density: "kg/m³",
                distance: "km",
                length: "m/s",
                length_km: "km/h",
                pressure: "hPa",
                precipitation: "mm",
                precipitation_rate: "mm/h",
                temperature: "°C",
            },
            UnitSystem::Imperial => Self {
                altitude: "ft",
                density: "lb/ft³",
                distance: "mi",
                length: "mph",
                length_km: "mph",
                pressure: "inHg",
                precipitation: "in",
                precipitation_rate: "in/h",
                temperature: "°F",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unit_system() {
        assert_eq!("metric".parse::<UnitSystem>(), Ok(UnitSystem::Metric));
        assert_eq!("Imperial".parse::<UnitSystem>(), Ok(UnitSystem::Imperial));
        assert_eq!("".parse::<UnitSystem>(), Ok(UnitSystem::Metric));
    }

    #[test]
    fn test_unit_descriptions() {
        let metric = UnitDescriptions::for_system(UnitSystem::Metric);
        assert_eq!(metric.temperature, "°C");
        assert_eq!(metric.precipitation_rate, "mm/h");

        let imperial = UnitDescriptions::for_system(UnitSystem::Imperial);
        assert_eq!(imperial.pressure, "inHg");
        assert_eq!(imperial.length_km, "mph");
        assert_eq!(imperial.altitude, "ft");
    }
}
