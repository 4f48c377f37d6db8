use crate::api::endpoints::WEATHERFLOW_BASE_URL;
use crate::units::unit_system::UnitSystem;
use bon::Builder;

/// Settings for a [`crate::WeatherFlow`] client.
///
/// # Examples
///
/// ```
/// use weatherflow_rest::{ClientConfig, UnitSystem};
///
/// let config = ClientConfig::builder()
///     .station_id(34094)
///     .api_token("my-token")
///     .units(UnitSystem::Imperial)
///     .forecast_hours(24)
///     .build();
///
/// assert_eq!(config.units(), UnitSystem::Imperial);
/// assert_eq!(config.forecast_hours(), 24);
/// assert!(config.ignore_fetch_errors());
/// assert_eq!(config.base_url(), "https://swd.weatherflow.com/swd/rest");
/// ```
#[derive(Debug, Clone, Builder)]
pub struct ClientConfig {
    station_id: i64,
    /// Personal access token from the WeatherFlow account settings.
    #[builder(into)]
    api_token: String,
    #[builder(default)]
    units: UnitSystem,
    /// Report forecast temperatures in °C and metric forecast wind in km/h,
    /// for hosts that localize values themselves.
    #[builder(default)]
    host_localized: bool,
    /// Number of hourly forecast periods to keep.
    #[builder(default = 48)]
    forecast_hours: usize,
    /// Treat missing hourly forecast fields as absent instead of failing.
    #[builder(default = true)]
    ignore_fetch_errors: bool,
    #[builder(into, default = WEATHERFLOW_BASE_URL.to_string())]
    base_url: String,
}

impl ClientConfig {
    pub fn station_id(&self) -> i64 {
        self.station_id
    }

    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    pub fn units(&self) -> UnitSystem {
        self.units
    }

    pub fn host_localized(&self) -> bool {
        self.host_localized
    }

    pub fn forecast_hours(&self) -> usize {
        self.forecast_hours
    }

    pub fn ignore_fetch_errors(&self) -> bool {
        self.ignore_fetch_errors
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
