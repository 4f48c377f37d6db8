use chrono::{DateTime, Utc};
use serde::Serialize;

/// Current conditions plus the daily and hourly forecast for a station.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ForecastRecord {
    pub station_id: i64,
    pub utc_time: Option<DateTime<Utc>>,
    pub conditions: Option<String>,
    pub icon: Option<String>,

    pub air_temperature: Option<f64>,
    pub feels_like: Option<f64>,
    pub dew_point: Option<f64>,
    pub wet_bulb_temperature: Option<f64>,
    pub delta_t: Option<f64>,
    /// Forecast high for the current day.
    pub temp_high_today: Option<f64>,
    /// Forecast low for the current day.
    pub temp_low_today: Option<f64>,

    pub station_pressure: Option<f64>,
    pub sea_level_pressure: Option<f64>,
    pub pressure_trend: Option<String>,
    pub relative_humidity: Option<f64>,
    pub air_density: Option<f64>,

    pub wind_avg: Option<f64>,
    pub wind_gust: Option<f64>,
    pub wind_direction: Option<f64>,
    pub wind_direction_cardinal: Option<String>,

    pub solar_radiation: Option<f64>,
    pub uv: Option<f64>,
    pub brightness: Option<f64>,

    pub lightning_strike_count_last_1hr: Option<i64>,
    pub lightning_strike_count_last_3hr: Option<i64>,
    pub lightning_strike_last_distance: Option<f64>,
    pub lightning_strike_last_distance_msg: Option<String>,
    pub lightning_strike_last_epoch: Option<DateTime<Utc>>,

    pub precip_accum_local_day: Option<f64>,
    pub precip_accum_local_yesterday: Option<f64>,
    pub precip_minutes_local_day: Option<i64>,
    pub precip_minutes_local_yesterday: Option<i64>,

    pub forecast_daily: Vec<DailyForecastRecord>,
    /// Hourly periods in feed order, at most the requested horizon.
    pub forecast_hourly: Vec<HourlyForecastRecord>,
}

/// One forecast day.
///
/// `precip`, `wind_avg` and `wind_direction` are aggregated from the hourly
/// periods of the same day rather than read from the daily feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyForecastRecord {
    pub utc_time: Option<DateTime<Utc>>,
    pub conditions: Option<String>,
    pub icon: String,
    pub sunrise: Option<DateTime<Utc>>,
    pub sunset: Option<DateTime<Utc>>,
    pub air_temp_high: Option<f64>,
    pub air_temp_low: Option<f64>,
    /// Summed precipitation of the day's hours.
    pub precip: Option<f64>,
    pub precip_probability: Option<f64>,
    /// Mean wind speed of the day's hours.
    pub wind_avg: Option<f64>,
    /// Arithmetic mean of the day's hourly bearings, truncated to whole degrees.
    pub wind_direction: Option<i64>,
}

/// One forecast hour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyForecastRecord {
    pub utc_time: Option<DateTime<Utc>>,
    pub conditions: Option<String>,
    pub icon: String,
    pub air_temperature: Option<f64>,
    pub feels_like: Option<f64>,
    pub sea_level_pressure: Option<f64>,
    pub relative_humidity: Option<f64>,
    pub precip: Option<f64>,
    pub precip_probability: Option<f64>,
    pub wind_avg: Option<f64>,
    pub wind_gust: Option<f64>,
    pub wind_direction: Option<f64>,
    pub wind_direction_cardinal: Option<String>,
    pub uv: Option<f64>,
}
