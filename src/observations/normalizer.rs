use crate::api::payloads::{DeviceObservationPayload, ObservationPayload, StationObservationPayload};
use crate::api::readings::DeviceReading;
use crate::calculations;
use crate::error::InvalidDataError;
use crate::types::observation::ObservationRecord;
use crate::types::station::{DeviceKind, DeviceRecord, StationRecord};
use crate::units::converter::UnitConverter;
use crate::utils::utc_from_timestamp;
use log::debug;
use serde_json::Value;

/// Converts the latest entry of an `observations/station/{id}` response into an
/// [`ObservationRecord`].
///
/// Derived metrics are computed from the raw metric values before conversion.
/// Battery fields stay empty; they are filled per device by
/// [`apply_device_reading`] and [`apply_battery_mode`].
pub fn normalize_observation(
    station: &StationRecord,
    payload: Value,
    converter: &UnitConverter,
) -> Result<ObservationRecord, InvalidDataError> {
    let payload: StationObservationPayload =
        serde_json::from_value(payload).map_err(|source| InvalidDataError::Malformed {
            context: "station observation",
            source,
        })?;

    let observations = payload.obs.unwrap_or_default();
    let Some(latest) = observations.first() else {
        return Err(InvalidDataError::EmptyDataset);
    };

    Ok(build_record(station, latest, converter))
}

fn build_record(
    station: &StationRecord,
    obs: &ObservationPayload,
    cnv: &UnitConverter,
) -> ObservationRecord {
    let beaufort = calculations::beaufort(obs.wind_avg);
    let visibility =
        calculations::visibility(station.elevation, obs.air_temperature, obs.dew_point);
    let cloud_base =
        calculations::cloud_base(obs.air_temperature, obs.dew_point, station.elevation);
    let freezing_line = calculations::freezing_line(obs.air_temperature, station.elevation);

    ObservationRecord {
        station_id: station.station_id,
        station_name: station.name.clone(),
        utc_time: utc_from_timestamp(obs.timestamp),

        air_temperature: cnv.temperature(obs.air_temperature),
        feels_like: cnv.temperature(obs.feels_like),
        heat_index: cnv.temperature(obs.heat_index),
        wind_chill: cnv.temperature(obs.wind_chill),
        dew_point: cnv.temperature(obs.dew_point),
        wet_bulb_temperature: cnv.temperature(obs.wet_bulb_temperature),
        delta_t: cnv.temperature_delta(obs.delta_t),

        barometric_pressure: cnv.pressure(obs.barometric_pressure),
        station_pressure: cnv.pressure(obs.station_pressure),
        sea_level_pressure: cnv.pressure(obs.sea_level_pressure),
        pressure_trend: obs.pressure_trend.clone(),
        air_density: cnv.density(obs.air_density),
        relative_humidity: obs.relative_humidity,
        absolute_humidity: calculations::absolute_humidity(
            obs.air_temperature,
            obs.relative_humidity,
        ),

        precip: cnv.rain(obs.precip),
        precip_rate: cnv.rain_rate(obs.precip),
        precip_intensity: calculations::precip_intensity(obs.precip),
        precip_accum_last_1hr: cnv.rain(obs.precip_accum_last_1hr),
        precip_accum_local_day: cnv.rain(obs.precip_accum_local_day),
        precip_accum_local_day_final: cnv.rain(obs.precip_accum_local_day_final),
        precip_accum_local_yesterday: cnv.rain(obs.precip_accum_local_yesterday),
        precip_accum_local_yesterday_final: cnv.rain(obs.precip_accum_local_yesterday_final),
        precip_minutes_local_day: obs.precip_minutes_local_day,
        precip_minutes_local_yesterday: obs.precip_minutes_local_yesterday,
        precip_minutes_local_yesterday_final: obs.precip_minutes_local_yesterday_final,

        wind_avg: cnv.wind_speed(obs.wind_avg),
        wind_avg_kmh: cnv.wind_speed_kmh(obs.wind_avg),
        wind_avg_knots: cnv.wind_speed_knots(obs.wind_avg),
        wind_gust: cnv.wind_speed(obs.wind_gust),
        wind_gust_kmh: cnv.wind_speed_kmh(obs.wind_gust),
        wind_gust_knots: cnv.wind_speed_knots(obs.wind_gust),
        wind_lull: cnv.wind_speed(obs.wind_lull),
        wind_lull_kmh: cnv.wind_speed_kmh(obs.wind_lull),
        wind_lull_knots: cnv.wind_speed_knots(obs.wind_lull),
        wind_direction: obs.wind_direction,
        wind_cardinal: calculations::wind_cardinal(obs.wind_direction),
        beaufort: beaufort.scale,
        beaufort_description: beaufort.category,

        solar_radiation: obs.solar_radiation,
        uv: cnv.uv_index(obs.uv),
        uv_description: calculations::uv_category(obs.uv),
        brightness: obs.brightness,

        lightning_strike_count: obs.lightning_strike_count,
        lightning_strike_count_last_1hr: obs.lightning_strike_count_last_1hr,
        lightning_strike_count_last_3hr: obs.lightning_strike_count_last_3hr,
        lightning_strike_last_distance: cnv.distance(obs.lightning_strike_last_distance),
        lightning_strike_last_epoch: utc_from_timestamp(obs.lightning_strike_last_epoch),

        is_raining: calculations::is_raining(obs.precip),
        is_freezing: calculations::is_freezing(obs.air_temperature),
        is_lightning: calculations::is_lightning(obs.lightning_strike_count),

        visibility: cnv.distance(visibility),
        cloud_base: cnv.altitude(cloud_base),
        freezing_line: cnv.altitude(freezing_line),

        ..ObservationRecord::default()
    }
}

/// Stores the battery voltage and charge of `device` from its
/// `observations/device/{id}` response.
///
/// Only the first reading is used. Hubs are ignored.
pub fn apply_device_reading(
    record: &mut ObservationRecord,
    device: &DeviceRecord,
    payload: Value,
) -> Result<(), InvalidDataError> {
    let Some(expected_type) = DeviceReading::observation_type(device.kind) else {
        return Ok(());
    };

    let payload: DeviceObservationPayload =
        serde_json::from_value(payload).map_err(|source| InvalidDataError::Malformed {
            context: "device observation",
            source,
        })?;

    if let Some(found) = payload.observation_type {
        if found != expected_type {
            return Err(InvalidDataError::ReadingKind {
                device_id: device.device_id,
                expected: expected_type,
                found,
            });
        }
    }

    let readings = payload.obs.unwrap_or_default();
    let Some(values) = readings.first() else {
        return Err(InvalidDataError::EmptyDataset);
    };

    let reading = DeviceReading::decode(device.kind, values).map_err(|mismatch| {
        InvalidDataError::ReadingLayout {
            device_id: device.device_id,
            kind: device.kind,
            expected: mismatch.expected,
            found: mismatch.found,
        }
    })?;
    let Some(reading) = reading else {
        return Ok(());
    };

    let voltage = reading.battery_voltage();
    let percent = calculations::battery_percent(reading.kind(), voltage);
    debug!(
        "Device {} ({}) battery {:?} V, {:?}%",
        device.device_id, device.kind, voltage, percent
    );
    match reading.kind() {
        DeviceKind::Tempest => {
            record.voltage_tempest = voltage;
            record.battery_tempest = percent;
        }
        DeviceKind::Air => {
            record.voltage_air = voltage;
            record.battery_air = percent;
        }
        DeviceKind::Sky => {
            record.voltage_sky = voltage;
            record.battery_sky = percent;
        }
        DeviceKind::Hub => {}
    }
    Ok(())
}

/// Sets the Tempest battery mode from the stored Tempest voltage and the
/// observed solar radiation.
pub fn apply_battery_mode(record: &mut ObservationRecord) {
    let mode = calculations::battery_mode(record.voltage_tempest, record.solar_radiation);
    record.battery_mode = mode.map(|mode| mode.number());
    record.battery_mode_description = mode.map(|mode| mode.description());
}
