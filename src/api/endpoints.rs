pub const WEATHERFLOW_BASE_URL: &str = "https://swd.weatherflow.com/swd/rest";

/// Builds the REST urls for one station and its devices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
    station_id: i64,
    api_token: String,
}

impl Endpoints {
    pub fn new(base_url: &str, station_id: i64, api_token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            station_id,
            api_token: api_token.to_string(),
        }
    }

    pub fn station(&self) -> String {
        format!(
            "{}/stations/{}?token={}",
            self.base_url, self.station_id, self.api_token
        )
    }

    pub fn station_observation(&self) -> String {
        format!(
            "{}/observations/station/{}?token={}",
            self.base_url, self.station_id, self.api_token
        )
    }

    pub fn device_observation(&self, device_id: i64) -> String {
        format!(
            "{}/observations/device/{}?token={}",
            self.base_url, device_id, self.api_token
        )
    }

    pub fn forecast(&self) -> String {
        format!(
            "{}/better_forecast?station_id={}&token={}",
            self.base_url, self.station_id, self.api_token
        )
    }
}
