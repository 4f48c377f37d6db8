//! Raw response shapes of the WeatherFlow REST API.
//!
//! Every field is optional: the API omits values a device did not measure and
//! its schema differs between device generations. Unknown fields are ignored.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusPayload {
    pub status_code: Option<i64>,
    pub status_message: Option<String>,
}

/// Reads `status.status_code` from any response body.
pub fn status_code(body: &Value) -> Option<i64> {
    body.get("status")?.get("status_code")?.as_i64()
}

// --- Station descriptor ---

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StationsPayload {
    pub status: Option<StatusPayload>,
    #[serde(default)]
    pub stations: Option<Vec<StationPayload>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StationPayload {
    pub station_id: Option<i64>,
    pub name: Option<String>,
    pub public_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
    pub station_meta: Option<StationMetaPayload>,
    #[serde(default)]
    pub devices: Vec<DevicePayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StationMetaPayload {
    pub elevation: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DevicePayload {
    pub device_id: Option<i64>,
    pub device_type: Option<String>,
    pub serial_number: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub hardware_revision: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub firmware_revision: Option<String>,
    pub device_meta: Option<DeviceMetaPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeviceMetaPayload {
    pub name: Option<String>,
}

/// Revisions show up as `"171"` on some firmware and `171` on others.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

// --- Station observation ---

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StationObservationPayload {
    #[serde(default)]
    pub obs: Option<Vec<ObservationPayload>>,
}

/// One entry of a station's `obs` array. All values metric.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObservationPayload {
    pub timestamp: Option<i64>,
    pub air_temperature: Option<f64>,
    pub barometric_pressure: Option<f64>,
    pub station_pressure: Option<f64>,
    pub sea_level_pressure: Option<f64>,
    pub relative_humidity: Option<f64>,
    pub precip: Option<f64>,
    pub precip_accum_last_1hr: Option<f64>,
    pub precip_accum_local_day: Option<f64>,
    pub precip_accum_local_day_final: Option<f64>,
    pub precip_accum_local_yesterday: Option<f64>,
    pub precip_accum_local_yesterday_final: Option<f64>,
    pub precip_minutes_local_day: Option<i64>,
    pub precip_minutes_local_yesterday: Option<i64>,
    pub precip_minutes_local_yesterday_final: Option<i64>,
    pub wind_avg: Option<f64>,
    pub wind_direction: Option<f64>,
    pub wind_gust: Option<f64>,
    pub wind_lull: Option<f64>,
    pub solar_radiation: Option<f64>,
    pub uv: Option<f64>,
    pub brightness: Option<f64>,
    pub lightning_strike_last_epoch: Option<i64>,
    pub lightning_strike_last_distance: Option<f64>,
    pub lightning_strike_count: Option<i64>,
    pub lightning_strike_count_last_1hr: Option<i64>,
    pub lightning_strike_count_last_3hr: Option<i64>,
    pub feels_like: Option<f64>,
    pub heat_index: Option<f64>,
    pub wind_chill: Option<f64>,
    pub dew_point: Option<f64>,
    pub wet_bulb_temperature: Option<f64>,
    pub delta_t: Option<f64>,
    pub air_density: Option<f64>,
    pub pressure_trend: Option<String>,
}

// --- Device observation ---

/// Per-device observation. `obs` holds positional reading arrays whose layout
/// depends on `type` (`obs_st`, `obs_air`, `obs_sky`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeviceObservationPayload {
    #[serde(rename = "type")]
    pub observation_type: Option<String>,
    #[serde(default)]
    pub obs: Option<Vec<Vec<Option<f64>>>>,
}

// --- Forecast ---

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastPayload {
    pub current_conditions: CurrentConditionsPayload,
    pub forecast: ForecastSeriesPayload,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentConditionsPayload {
    pub time: Option<i64>,
    pub conditions: Option<String>,
    pub icon: Option<String>,
    pub air_temperature: Option<f64>,
    pub station_pressure: Option<f64>,
    pub sea_level_pressure: Option<f64>,
    pub pressure_trend: Option<String>,
    pub relative_humidity: Option<f64>,
    pub wind_avg: Option<f64>,
    pub wind_direction: Option<f64>,
    pub wind_direction_cardinal: Option<String>,
    pub wind_gust: Option<f64>,
    pub solar_radiation: Option<f64>,
    pub uv: Option<f64>,
    pub brightness: Option<f64>,
    pub feels_like: Option<f64>,
    pub dew_point: Option<f64>,
    pub wet_bulb_temperature: Option<f64>,
    pub delta_t: Option<f64>,
    pub air_density: Option<f64>,
    pub lightning_strike_count_last_1hr: Option<i64>,
    pub lightning_strike_count_last_3hr: Option<i64>,
    pub lightning_strike_last_distance: Option<f64>,
    pub lightning_strike_last_distance_msg: Option<String>,
    pub lightning_strike_last_epoch: Option<i64>,
    pub precip_accum_local_day: Option<f64>,
    pub precip_accum_local_yesterday: Option<f64>,
    pub precip_minutes_local_day: Option<i64>,
    pub precip_minutes_local_yesterday: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastSeriesPayload {
    #[serde(default)]
    pub daily: Vec<DailyForecastPayload>,
    #[serde(default)]
    pub hourly: Vec<HourlyForecastPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyForecastPayload {
    pub day_start_local: Option<i64>,
    /// Day of month; hourly entries refer to it through `local_day`.
    pub day_num: Option<i64>,
    pub conditions: Option<String>,
    pub icon: Option<String>,
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
    pub air_temp_high: Option<f64>,
    pub air_temp_low: Option<f64>,
    pub precip_probability: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HourlyForecastPayload {
    pub time: Option<i64>,
    pub conditions: Option<String>,
    pub icon: Option<String>,
    pub air_temperature: Option<f64>,
    pub sea_level_pressure: Option<f64>,
    pub relative_humidity: Option<f64>,
    pub precip: Option<f64>,
    pub precip_probability: Option<f64>,
    pub wind_avg: Option<f64>,
    pub wind_direction: Option<f64>,
    pub wind_direction_cardinal: Option<String>,
    pub wind_gust: Option<f64>,
    pub uv: Option<f64>,
    pub feels_like: Option<f64>,
    pub local_day: Option<i64>,
}
