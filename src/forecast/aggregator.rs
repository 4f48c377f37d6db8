use crate::api::payloads::{
    CurrentConditionsPayload, DailyForecastPayload, ForecastPayload, HourlyForecastPayload,
};
use crate::error::InvalidDataError;
use crate::types::forecast::{DailyForecastRecord, ForecastRecord, HourlyForecastRecord};
use crate::units::converter::UnitConverter;
use crate::utils::{round_to, utc_from_timestamp};
use log::{debug, warn};
use serde_json::Value;

const DEFAULT_ICON: &str = "cloudy";

/// How [`aggregate_forecast`] treats the forecast payload.
#[derive(Debug, Clone, Copy)]
pub struct ForecastOptions {
    /// Maximum number of hourly periods to keep.
    pub hours: usize,
    /// Keep going with `None` when an hourly period lacks a field, instead of
    /// failing with [`InvalidDataError::MissingField`].
    pub ignore_fetch_errors: bool,
}

/// Builds a [`ForecastRecord`] from a `better_forecast` response.
///
/// Daily precipitation, wind speed and wind bearing are aggregated over every
/// hourly period of the same local day, not just the hours within
/// [`ForecastOptions::hours`]. Days without any hourly period are left out.
pub fn aggregate_forecast(
    station_id: i64,
    payload: Value,
    cnv: &UnitConverter,
    options: ForecastOptions,
) -> Result<ForecastRecord, InvalidDataError> {
    let payload: ForecastPayload =
        serde_json::from_value(payload).map_err(|source| InvalidDataError::Malformed {
            context: "forecast",
            source,
        })?;

    let mut record = current_conditions(station_id, payload.current_conditions, cnv);

    let daily = &payload.forecast.daily;
    let hourly = &payload.forecast.hourly;

    if let Some(today) = daily.first() {
        record.temp_high_today = cnv.temperature(today.air_temp_high);
        record.temp_low_today = cnv.temperature(today.air_temp_low);
    }

    record.forecast_daily = daily
        .iter()
        .filter_map(|day| daily_record(day, hourly, cnv))
        .collect();

    record.forecast_hourly = hourly
        .iter()
        .take(options.hours)
        .map(|hour| hourly_record(hour, cnv, options.ignore_fetch_errors))
        .collect::<Result<_, _>>()?;

    debug!(
        "Forecast for station {}: {} days, {} hours",
        station_id,
        record.forecast_daily.len(),
        record.forecast_hourly.len()
    );
    Ok(record)
}

fn current_conditions(
    station_id: i64,
    current: CurrentConditionsPayload,
    cnv: &UnitConverter,
) -> ForecastRecord {
    ForecastRecord {
        station_id,
        utc_time: utc_from_timestamp(current.time),
        conditions: current.conditions,
        icon: current.icon,

        air_temperature: cnv.temperature(current.air_temperature),
        feels_like: cnv.temperature(current.feels_like),
        dew_point: cnv.temperature(current.dew_point),
        wet_bulb_temperature: cnv.temperature(current.wet_bulb_temperature),
        delta_t: cnv.temperature_delta(current.delta_t),

        station_pressure: cnv.pressure(current.station_pressure),
        sea_level_pressure: cnv.pressure(current.sea_level_pressure),
        pressure_trend: current.pressure_trend,
        relative_humidity: current.relative_humidity,
        air_density: cnv.density(current.air_density),

        wind_avg: cnv.forecast_wind_speed(current.wind_avg),
        wind_gust: cnv.forecast_wind_speed(current.wind_gust),
        wind_direction: current.wind_direction,
        wind_direction_cardinal: current.wind_direction_cardinal,

        solar_radiation: current.solar_radiation,
        uv: current.uv,
        brightness: current.brightness,

        lightning_strike_count_last_1hr: current.lightning_strike_count_last_1hr,
        lightning_strike_count_last_3hr: current.lightning_strike_count_last_3hr,
        lightning_strike_last_distance: cnv.distance(current.lightning_strike_last_distance),
        lightning_strike_last_distance_msg: current.lightning_strike_last_distance_msg,
        lightning_strike_last_epoch: utc_from_timestamp(current.lightning_strike_last_epoch),

        precip_accum_local_day: cnv.rain(current.precip_accum_local_day),
        precip_accum_local_yesterday: cnv.rain(current.precip_accum_local_yesterday),
        precip_minutes_local_day: current.precip_minutes_local_day,
        precip_minutes_local_yesterday: current.precip_minutes_local_yesterday,

        ..ForecastRecord::default()
    }
}

/// Sums and averages of the hourly periods that belong to one day.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DayTotals {
    precip: Option<f64>,
    wind_avg: Option<f64>,
    wind_direction: Option<i64>,
}

fn day_totals(day_num: i64, hourly: &[HourlyForecastPayload]) -> Option<DayTotals> {
    let hours: Vec<&HourlyForecastPayload> = hourly
        .iter()
        .filter(|hour| hour.local_day == Some(day_num))
        .collect();
    if hours.is_empty() {
        return None;
    }

    let precip: Vec<f64> = hours.iter().filter_map(|hour| hour.precip).collect();
    let winds: Vec<f64> = hours.iter().filter_map(|hour| hour.wind_avg).collect();
    let bearings: Vec<f64> = hours.iter().filter_map(|hour| hour.wind_direction).collect();

    // Bearings are averaged arithmetically, so 350° and 10° give 180°.
    Some(DayTotals {
        precip: (!precip.is_empty()).then(|| precip.iter().sum()),
        wind_avg: mean(&winds).map(|avg| round_to(avg, 1)),
        wind_direction: mean(&bearings).map(|avg| avg.trunc() as i64),
    })
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

fn daily_record(
    day: &DailyForecastPayload,
    hourly: &[HourlyForecastPayload],
    cnv: &UnitConverter,
) -> Option<DailyForecastRecord> {
    let totals = day.day_num.and_then(|day_num| day_totals(day_num, hourly));
    let Some(totals) = totals else {
        debug!("Skipping forecast day {:?} without hourly data", day.day_num);
        return None;
    };

    Some(DailyForecastRecord {
        utc_time: utc_from_timestamp(day.day_start_local),
        conditions: day.conditions.clone(),
        icon: day.icon.clone().unwrap_or_else(|| DEFAULT_ICON.to_string()),
        sunrise: utc_from_timestamp(day.sunrise),
        sunset: utc_from_timestamp(day.sunset),
        air_temp_high: cnv.temperature(day.air_temp_high),
        air_temp_low: cnv.temperature(day.air_temp_low),
        precip: cnv.rain(totals.precip),
        precip_probability: day.precip_probability,
        wind_avg: cnv.forecast_wind_speed(totals.wind_avg),
        wind_direction: totals.wind_direction,
    })
}

/// Passes `value` through, reporting it when the feed left it out.
fn required<T>(
    value: Option<T>,
    key: &'static str,
    ignore_fetch_errors: bool,
) -> Result<Option<T>, InvalidDataError> {
    match value {
        Some(value) => Ok(Some(value)),
        None if ignore_fetch_errors => {
            warn!("Hourly forecast is missing '{key}', the WeatherFlow API may have changed");
            Ok(None)
        }
        None => Err(InvalidDataError::MissingField { key }),
    }
}

fn hourly_record(
    hour: &HourlyForecastPayload,
    cnv: &UnitConverter,
    ignore: bool,
) -> Result<HourlyForecastRecord, InvalidDataError> {
    Ok(HourlyForecastRecord {
        utc_time: utc_from_timestamp(hour.time),
        conditions: required(hour.conditions.clone(), "conditions", ignore)?,
        icon: hour.icon.clone().unwrap_or_else(|| DEFAULT_ICON.to_string()),
        air_temperature: cnv.temperature(required(hour.air_temperature, "air_temperature", ignore)?),
        feels_like: cnv.temperature_unlocalized(required(hour.feels_like, "feels_like", ignore)?),
        sea_level_pressure: cnv.pressure(required(
            hour.sea_level_pressure,
            "sea_level_pressure",
            ignore,
        )?),
        relative_humidity: required(hour.relative_humidity, "relative_humidity", ignore)?,
        precip: cnv.rain(required(hour.precip, "precip", ignore)?),
        precip_probability: required(hour.precip_probability, "precip_probability", ignore)?,
        wind_avg: cnv.forecast_wind_speed(required(hour.wind_avg, "wind_avg", ignore)?),
        wind_gust: cnv.forecast_wind_speed(required(hour.wind_gust, "wind_gust", ignore)?),
        wind_direction: required(hour.wind_direction, "wind_direction", ignore)?,
        wind_direction_cardinal: required(
            hour.wind_direction_cardinal.clone(),
            "wind_direction_cardinal",
            ignore,
        )?,
        uv: required(hour.uv, "uv", ignore)?,
    })
}
