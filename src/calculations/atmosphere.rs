//! Quantities the station does not report but that follow from temperature,
//! humidity and elevation.

use crate::utils::round_to;

/// Estimated horizontal visibility in km.
///
/// The clear-air maximum depends on the observer height (elevation, at least
/// 2 m). It is reduced as the dew point spread shrinks, down to 2.5% of the
/// maximum when the air is saturated.
///
/// # Examples
///
/// ```
/// use weatherflow_rest::calculations::visibility;
///
/// let km = visibility(Some(50.0), Some(20.0), Some(10.0)).unwrap();
/// assert!((km - 25.24).abs() < 0.01);
/// assert_eq!(visibility(None, Some(20.0), Some(10.0)), None);
/// ```
pub fn visibility(
    elevation: Option<f64>,
    temperature: Option<f64>,
    dew_point: Option<f64>,
) -> Option<f64> {
    let (elevation, temperature, dew_point) = (elevation?, temperature?, dew_point?);
    let max_visibility = 3.56972 * elevation.max(2.0).sqrt();
    let spread = (temperature - dew_point).abs();
    let reduction = ((1.13 * spread - 1.15) / 10.0).clamp(0.025, 1.0);
    Some(max_visibility * reduction)
}

/// Water vapour content of the air in g/m³, rounded to 2 decimals.
pub fn absolute_humidity(temperature: Option<f64>, relative_humidity: Option<f64>) -> Option<f64> {
    let (temperature, relative_humidity) = (temperature?, relative_humidity?);
    let kelvin = temperature + 273.16;
    let saturation = 10f64.powf((7.4475 * (kelvin - 273.14)) / (kelvin - 39.44));
    Some(round_to(
        (1320.65 / kelvin) * (relative_humidity / 100.0) * saturation,
        2,
    ))
}

/// Estimated cloud base above sea level in metres.
pub fn cloud_base(
    temperature: Option<f64>,
    dew_point: Option<f64>,
    elevation: Option<f64>,
) -> Option<f64> {
    Some((temperature? - dew_point?) * 126.67 + elevation?)
}

/// Estimated altitude of the 0 °C isotherm above sea level in metres.
pub fn freezing_line(temperature: Option<f64>, elevation: Option<f64>) -> Option<f64> {
    Some(192.0 * temperature? + elevation?)
}
