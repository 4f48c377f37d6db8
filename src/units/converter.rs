//! Scalar conversions from the metric values the WeatherFlow API reports into
//! the unit system a client was configured with.

use crate::units::unit_system::UnitSystem;
use crate::utils::round_to;

const HPA_TO_INHG: f64 = 0.02953;
const MM_TO_IN: f64 = 0.0393700787;
const MS_TO_MPH: f64 = 2.2369362920;
const MS_TO_KMH: f64 = 3.6;
const MS_TO_KNOTS: f64 = 1.943844;
const KGM3_TO_LBFT3: f64 = 0.06243;
const KM_TO_MI: f64 = 0.6213688756;
const M_TO_FT: f64 = 3.2808399;

/// Converts raw metric readings into the configured [`UnitSystem`].
///
/// Every method is total over `Option<f64>`: `None` in gives `None` out, so a
/// value the station did not report stays unknown instead of turning into zero.
/// Rounding precision is fixed per quantity.
///
/// When `host_localized` is set, the host application re-localizes
/// temperatures itself, so [`UnitConverter::temperature`] always returns °C.
///
/// # Examples
///
/// ```
/// use weatherflow_rest::{UnitConverter, UnitSystem};
///
/// let converter = UnitConverter::new(UnitSystem::Imperial, false);
/// assert_eq!(converter.temperature(Some(20.0)), Some(68.0));
/// assert_eq!(converter.wind_speed(Some(17.2)), Some(38.5));
/// assert_eq!(converter.pressure(None), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitConverter {
    system: UnitSystem,
    host_localized: bool,
}

impl UnitConverter {
    pub fn new(system: UnitSystem, host_localized: bool) -> Self {
        Self {
            system,
            host_localized,
        }
    }

    pub fn system(&self) -> UnitSystem {
        self.system
    }

    pub fn is_host_localized(&self) -> bool {
        self.host_localized
    }

    fn imperial(&self) -> bool {
        !self.system.is_metric()
    }

    /// °C to the configured unit, 1 decimal. Passes through as °C when host localized.
    pub fn temperature(&self, value: Option<f64>) -> Option<f64> {
        if self.host_localized {
            return value.map(|v| round_to(v, 1));
        }
        self.temperature_unlocalized(value)
    }

    /// Like [`UnitConverter::temperature`] but ignores the host-localization flag.
    pub fn temperature_unlocalized(&self, value: Option<f64>) -> Option<f64> {
        value.map(|v| {
            if self.imperial() {
                round_to(v * 1.8 + 32.0, 1)
            } else {
                round_to(v, 1)
            }
        })
    }

    /// A temperature difference in °C to the configured unit, 1 decimal.
    /// Follows the host-localization flag like [`UnitConverter::temperature`].
    pub fn temperature_delta(&self, value: Option<f64>) -> Option<f64> {
        value.map(|v| {
            if self.imperial() && !self.host_localized {
                round_to(v * 1.8, 1)
            } else {
                round_to(v, 1)
            }
        })
    }

    /// hPa to inHg (3 decimals) or hPa (1 decimal).
    pub fn pressure(&self, value: Option<f64>) -> Option<f64> {
        value.map(|v| {
            if self.imperial() {
                round_to(v * HPA_TO_INHG, 3)
            } else {
                round_to(v, 1)
            }
        })
    }

    /// mm to in (2 decimals) or mm (1 decimal).
    pub fn rain(&self, value: Option<f64>) -> Option<f64> {
        value.map(|v| {
            if self.imperial() {
                round_to(v * MM_TO_IN, 2)
            } else {
                round_to(v, 1)
            }
        })
    }

    /// Per-minute precipitation (mm) to an hourly rate.
    pub fn rain_rate(&self, value: Option<f64>) -> Option<f64> {
        value.map(|v| {
            let per_hour = v * 60.0;
            if self.imperial() {
                round_to(per_hour * MM_TO_IN, 2)
            } else {
                round_to(per_hour, 1)
            }
        })
    }

    /// m/s to mph or m/s, 1 decimal.
    pub fn wind_speed(&self, value: Option<f64>) -> Option<f64> {
        value.map(|v| {
            if self.imperial() {
                round_to(v * MS_TO_MPH, 1)
            } else {
                round_to(v, 1)
            }
        })
    }

    pub fn wind_speed_kmh(&self, value: Option<f64>) -> Option<f64> {
        value.map(|v| round_to(v * MS_TO_KMH, 1))
    }

    pub fn wind_speed_knots(&self, value: Option<f64>) -> Option<f64> {
        value.map(|v| round_to(v * MS_TO_KNOTS, 1))
    }

    /// Wind speed for forecast records. Metric hosts that localize values
    /// themselves get km/h instead of m/s.
    pub fn forecast_wind_speed(&self, value: Option<f64>) -> Option<f64> {
        if self.host_localized && !self.imperial() {
            return self.wind_speed_kmh(value);
        }
        self.wind_speed(value)
    }

    /// kg/m³ to lb/ft³ or kg/m³, 5 decimals.
    pub fn density(&self, value: Option<f64>) -> Option<f64> {
        value.map(|v| {
            if self.imperial() {
                round_to(v * KGM3_TO_LBFT3, 5)
            } else {
                round_to(v, 5)
            }
        })
    }

    /// km to mi or km, 1 decimal.
    pub fn distance(&self, value: Option<f64>) -> Option<f64> {
        value.map(|v| {
            if self.imperial() {
                round_to(v * KM_TO_MI, 1)
            } else {
                round_to(v, 1)
            }
        })
    }

    /// m to ft (1 decimal) or whole metres.
    pub fn altitude(&self, value: Option<f64>) -> Option<f64> {
        value.map(|v| {
            if self.imperial() {
                round_to(v * M_TO_FT, 1)
            } else {
                round_to(v, 0)
            }
        })
    }

    pub fn uv_index(&self, value: Option<f64>) -> Option<f64> {
        value.map(|v| round_to(v, 1))
    }
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self::new(UnitSystem::Metric, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric() -> UnitConverter {
        UnitConverter::new(UnitSystem::Metric, false)
    }

    fn imperial() -> UnitConverter {
        UnitConverter::new(UnitSystem::Imperial, false)
    }

    #[test]
    fn test_none_propagates() {
        for converter in [metric(), imperial(), UnitConverter::new(UnitSystem::Metric, true)] {
            assert_eq!(converter.temperature(None), None);
            assert_eq!(converter.temperature_unlocalized(None), None);
            assert_eq!(converter.temperature_delta(None), None);
            assert_eq!(converter.pressure(None), None);
            assert_eq!(converter.rain(None), None);
            assert_eq!(converter.rain_rate(None), None);
            assert_eq!(converter.wind_speed(None), None);
            assert_eq!(converter.wind_speed_kmh(None), None);
            assert_eq!(converter.wind_speed_knots(None), None);
            assert_eq!(converter.forecast_wind_speed(None), None);
            assert_eq!(converter.density(None), None);
            assert_eq!(converter.distance(None), None);
            assert_eq!(converter.altitude(None), None);
            assert_eq!(converter.uv_index(None), None);
        }
    }

    #[test]
    fn test_imperial_conversions() {
        let c = imperial();
        assert_eq!(c.temperature(Some(-10.0)), Some(14.0));
        assert_eq!(c.temperature_delta(Some(5.0)), Some(9.0));
        assert_eq!(c.temperature_delta(Some(-2.5)), Some(-4.5));
        assert_eq!(c.pressure(Some(1013.25)), Some(29.921));
        assert_eq!(c.rain(Some(25.4)), Some(1.0));
        assert_eq!(c.rain_rate(Some(0.5)), Some(1.18));
        assert_eq!(c.wind_speed(Some(17.2)), Some(38.5));
        assert_eq!(c.density(Some(1.2)), Some(0.07492));
        assert_eq!(c.distance(Some(10.0)), Some(6.2));
        assert_eq!(c.altitude(Some(100.0)), Some(328.1));
    }

    #[test]
    fn test_metric_rounding() {
        let c = metric();
        assert_eq!(c.temperature(Some(21.456)), Some(21.5));
        assert_eq!(c.pressure(Some(1013.27)), Some(1013.3));
        assert_eq!(c.rain_rate(Some(0.5)), Some(30.0));
        assert_eq!(c.wind_speed_kmh(Some(10.0)), Some(36.0));
        assert_eq!(c.wind_speed_knots(Some(10.0)), Some(19.4));
        assert_eq!(c.density(Some(1.2345678)), Some(1.23457));
        assert_eq!(c.altitude(Some(126.6)), Some(127.0));
    }

    #[test]
    fn test_host_localized_temperature_passes_through() {
        let c = UnitConverter::new(UnitSystem::Imperial, true);
        assert_eq!(c.temperature(Some(20.04)), Some(20.0));
        assert_eq!(c.temperature_unlocalized(Some(20.0)), Some(68.0));
        assert_eq!(c.temperature_delta(Some(5.04)), Some(5.0));
        // Other quantities still follow the unit system.
        assert_eq!(c.wind_speed(Some(17.2)), Some(38.5));
    }

    #[test]
    fn test_forecast_wind_speed() {
        assert_eq!(metric().forecast_wind_speed(Some(5.0)), Some(5.0));
        assert_eq!(
            UnitConverter::new(UnitSystem::Metric, true).forecast_wind_speed(Some(5.0)),
            Some(18.0)
        );
        assert_eq!(
            UnitConverter::new(UnitSystem::Imperial, true).forecast_wind_speed(Some(5.0)),
            Some(11.2)
        );
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        let c = imperial();
        for speed in [0.4, 3.3, 12.7, 17.2, 31.9] {
            let mph = c.wind_speed(Some(speed)).unwrap();
            assert!((mph / MS_TO_MPH - speed).abs() < 0.1, "wind {speed}");
        }
        for pressure in [1000.5, 1013.25, 1030.0] {
            let inhg = c.pressure(Some(pressure)).unwrap();
            assert!((inhg / HPA_TO_INHG - pressure).abs() < 0.01, "pressure {pressure}");
        }
    }
}
