//! In-memory transport and canned API responses for client tests.

use crate::api::error::TransportError;
use crate::api::transport::Transport;
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

pub const BASE_URL: &str = "http://weatherflow.test";
pub const TOKEN: &str = "fixture-token";
pub const STATION_ID: i64 = 34094;
pub const HUB_ID: i64 = 100;
pub const TEMPEST_ID: i64 = 101;
pub const AIR_ID: i64 = 102;
pub const SKY_ID: i64 = 103;

/// Serves canned JSON by url and records every request made.
#[derive(Debug, Default)]
pub struct FixtureTransport {
    responses: HashMap<String, Value>,
    requests: Mutex<Vec<String>>,
}

impl FixtureTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, url: String, body: Value) -> Self {
        self.responses.insert(url, body);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for FixtureTransport {
    async fn fetch_json(&self, url: &str) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| TransportError::HttpStatus {
                url: url.to_string(),
                status: StatusCode::NOT_FOUND,
            })
    }
}

pub fn url(path: &str) -> String {
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{BASE_URL}/{path}{separator}token={TOKEN}")
}

pub fn station_response(devices: Value) -> Value {
    json!({
        "status": { "status_code": 0, "status_message": "SUCCESS" },
        "stations": [{
            "station_id": STATION_ID,
            "name": "Garden",
            "public_name": "Garden Road",
            "latitude": 55.62,
            "longitude": 12.21,
            "timezone": "Europe/Copenhagen",
            "station_meta": { "elevation": 40.0 },
            "devices": devices,
        }]
    })
}

pub fn tempest_station_response() -> Value {
    station_response(json!([
        { "device_id": HUB_ID, "device_type": "HB", "serial_number": "HB-00001", "firmware_revision": "177" },
        { "device_id": TEMPEST_ID, "device_type": "ST", "serial_number": "ST-00001",
          "hardware_revision": "1", "firmware_revision": 165,
          "device_meta": { "name": "Tempest" } },
    ]))
}

pub fn air_sky_station_response() -> Value {
    station_response(json!([
        { "device_id": HUB_ID, "device_type": "HB", "serial_number": "HB-00002" },
        { "device_id": AIR_ID, "device_type": "AR", "serial_number": "AR-00001" },
        { "device_id": SKY_ID, "device_type": "SK", "serial_number": "SK-00001" },
    ]))
}

pub fn unauthorized_response() -> Value {
    json!({ "status": { "status_code": 401, "status_message": "UNAUTHORIZED" } })
}

pub fn station_observation_response() -> Value {
    json!({
        "station_id": STATION_ID,
        "obs": [{
            "timestamp": 1_700_000_000,
            "air_temperature": 12.5,
            "barometric_pressure": 1008.1,
            "station_pressure": 1008.1,
            "sea_level_pressure": 1013.1,
            "relative_humidity": 81,
            "precip": 0.0,
            "precip_accum_last_1hr": 0.0,
            "precip_accum_local_day": 2.4,
            "precip_minutes_local_day": 14,
            "wind_avg": 17.2,
            "wind_direction": 225,
            "wind_gust": 21.0,
            "wind_lull": 12.0,
            "solar_radiation": 250,
            "uv": 1.2,
            "brightness": 30000,
            "lightning_strike_last_epoch": 1_699_990_000,
            "lightning_strike_last_distance": 12,
            "lightning_strike_count": 0,
            "lightning_strike_count_last_1hr": 0,
            "lightning_strike_count_last_3hr": 2,
            "feels_like": 12.5,
            "dew_point": 9.4,
            "wet_bulb_temperature": 10.6,
            "delta_t": 1.9,
            "air_density": 1.23,
            "pressure_trend": "falling",
        }]
    })
}

pub fn tempest_reading_response(battery: f64) -> Value {
    let mut reading = vec![json!(0); 18];
    reading[0] = json!(1_700_000_000);
    reading[16] = json!(battery);
    json!({ "device_id": TEMPEST_ID, "type": "obs_st", "obs": [reading] })
}

pub fn air_reading_response(battery: f64) -> Value {
    json!({
        "device_id": AIR_ID,
        "type": "obs_air",
        "obs": [[1_700_000_000, 1008.1, 12.5, 81, 0, 0, battery, 1]],
    })
}

pub fn sky_reading_response(battery: f64) -> Value {
    let mut reading = vec![json!(0); 14];
    reading[0] = json!(1_700_000_000);
    reading[8] = json!(battery);
    json!({ "device_id": SKY_ID, "type": "obs_sky", "obs": [reading] })
}

/// Three forecast days with 24 hourly periods each.
pub fn forecast_response() -> Value {
    let start = 1_700_000_000_i64;
    let daily: Vec<Value> = (0..3)
        .map(|i| {
            json!({
                "day_start_local": start + i * 86_400,
                "day_num": 14 + i,
                "month_num": 11,
                "conditions": "Partly Cloudy",
                "icon": "partly-cloudy-day",
                "sunrise": start + i * 86_400 + 27_000,
                "sunset": start + i * 86_400 + 57_000,
                "air_temp_high": 9.0,
                "air_temp_low": 3.0,
                "precip_probability": 30,
            })
        })
        .collect();
    let hourly: Vec<Value> = (0..72)
        .map(|i| {
            json!({
                "time": start + i * 3_600,
                "conditions": "Cloudy",
                "icon": "cloudy",
                "air_temperature": 6.0,
                "feels_like": 4.0,
                "sea_level_pressure": 1012.0,
                "relative_humidity": 85,
                "precip": 0.5,
                "precip_probability": 30,
                "wind_avg": 5.0,
                "wind_gust": 8.0,
                "wind_direction": 200,
                "wind_direction_cardinal": "SSW",
                "uv": 1,
                "local_day": 14 + i / 24,
                "local_hour": i % 24,
            })
        })
        .collect();

    json!({
        "status": { "status_code": 0, "status_message": "SUCCESS" },
        "current_conditions": {
            "time": start,
            "conditions": "Cloudy",
            "icon": "cloudy",
            "air_temperature": 7.0,
            "sea_level_pressure": 1012.4,
            "station_pressure": 1007.4,
            "pressure_trend": "steady",
            "relative_humidity": 84,
            "wind_avg": 4.0,
            "wind_direction": 210,
            "wind_direction_cardinal": "SSW",
            "wind_gust": 7.0,
            "feels_like": 4.8,
            "dew_point": 4.5,
            "lightning_strike_count_last_1hr": 0,
            "lightning_strike_count_last_3hr": 0,
            "lightning_strike_last_distance": 30,
            "lightning_strike_last_distance_msg": "28 - 32 km",
            "precip_accum_local_day": 1.2,
            "precip_minutes_local_day": 20,
        },
        "forecast": { "daily": daily, "hourly": hourly },
    })
}
