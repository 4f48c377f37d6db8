use crate::types::metrics::{BeaufortCategory, PrecipIntensity, UvCategory};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The latest observation of a station, converted to the client's unit system
/// and enriched with derived metrics.
///
/// Every field is optional: a value the station did not report stays `None`.
/// Unit-bearing fields use the unit system the client was built with, except
/// the `_kmh` and `_knots` wind fields which always carry those units.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ObservationRecord {
    pub station_id: i64,
    pub station_name: Option<String>,
    pub utc_time: Option<DateTime<Utc>>,

    pub air_temperature: Option<f64>,
    pub feels_like: Option<f64>,
    pub heat_index: Option<f64>,
    pub wind_chill: Option<f64>,
    pub dew_point: Option<f64>,
    pub wet_bulb_temperature: Option<f64>,
    /// Dry bulb minus wet bulb temperature.
    pub delta_t: Option<f64>,

    pub barometric_pressure: Option<f64>,
    pub station_pressure: Option<f64>,
    pub sea_level_pressure: Option<f64>,
    pub pressure_trend: Option<String>,
    pub air_density: Option<f64>,
    pub relative_humidity: Option<f64>,
    /// Grams of water vapour per cubic metre.
    pub absolute_humidity: Option<f64>,

    /// Precipitation during the last minute.
    pub precip: Option<f64>,
    /// Last-minute precipitation extrapolated to an hourly rate.
    pub precip_rate: Option<f64>,
    pub precip_intensity: Option<PrecipIntensity>,
    pub precip_accum_last_1hr: Option<f64>,
    pub precip_accum_local_day: Option<f64>,
    pub precip_accum_local_day_final: Option<f64>,
    pub precip_accum_local_yesterday: Option<f64>,
    pub precip_accum_local_yesterday_final: Option<f64>,
    pub precip_minutes_local_day: Option<i64>,
    pub precip_minutes_local_yesterday: Option<i64>,
    pub precip_minutes_local_yesterday_final: Option<i64>,

    pub wind_avg: Option<f64>,
    pub wind_avg_kmh: Option<f64>,
    pub wind_avg_knots: Option<f64>,
    pub wind_gust: Option<f64>,
    pub wind_gust_kmh: Option<f64>,
    pub wind_gust_knots: Option<f64>,
    pub wind_lull: Option<f64>,
    pub wind_lull_kmh: Option<f64>,
    pub wind_lull_knots: Option<f64>,
    /// Degrees from north.
    pub wind_direction: Option<f64>,
    pub wind_cardinal: Option<&'static str>,
    pub beaufort: u8,
    pub beaufort_description: BeaufortCategory,

    /// W/m².
    pub solar_radiation: Option<f64>,
    pub uv: Option<f64>,
    pub uv_description: Option<UvCategory>,
    /// Lux.
    pub brightness: Option<f64>,

    pub lightning_strike_count: Option<i64>,
    pub lightning_strike_count_last_1hr: Option<i64>,
    pub lightning_strike_count_last_3hr: Option<i64>,
    pub lightning_strike_last_distance: Option<f64>,
    pub lightning_strike_last_epoch: Option<DateTime<Utc>>,

    pub is_raining: Option<bool>,
    pub is_freezing: Option<bool>,
    pub is_lightning: Option<bool>,

    pub visibility: Option<f64>,
    pub cloud_base: Option<f64>,
    pub freezing_line: Option<f64>,

    pub voltage_tempest: Option<f64>,
    pub battery_tempest: Option<u8>,
    pub voltage_air: Option<f64>,
    pub battery_air: Option<u8>,
    pub voltage_sky: Option<f64>,
    pub battery_sky: Option<u8>,
    /// Tempest battery operating mode, 0 to 3.
    pub battery_mode: Option<u8>,
    pub battery_mode_description: Option<&'static str>,
}
