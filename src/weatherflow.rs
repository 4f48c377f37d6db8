//! The client that ties the WeatherFlow REST endpoints to the normalization
//! pipeline: station catalog, latest observation and forecast.

use crate::api::endpoints::Endpoints;
use crate::api::payloads::status_code;
use crate::api::transport::{redact_token, HttpTransport, Transport};
use crate::config::ClientConfig;
use crate::error::WeatherFlowError;
use crate::forecast::aggregator::{aggregate_forecast, ForecastOptions};
use crate::observations::normalizer::{
    apply_battery_mode, apply_device_reading, normalize_observation,
};
use crate::stations::catalog::build_station_catalog;
use crate::types::forecast::ForecastRecord;
use crate::types::observation::ObservationRecord;
use crate::types::station::StationRecord;
use crate::units::converter::UnitConverter;
use crate::units::unit_system::UnitDescriptions;
use bon::bon;
use log::{debug, info, warn};
use serde_json::Value;

/// Client for one WeatherFlow station.
///
/// Call [`WeatherFlow::initialize`] once to load the station and its devices.
/// Until then, [`WeatherFlow::update_observations`] and
/// [`WeatherFlow::update_forecast`] return `Ok(None)`.
///
/// # Examples
///
/// ```rust,no_run
/// # use weatherflow_rest::{ClientConfig, UnitSystem, WeatherFlow, WeatherFlowError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), WeatherFlowError> {
/// let config = ClientConfig::builder()
///     .station_id(34094)
///     .api_token("my-token")
///     .units(UnitSystem::Metric)
///     .build();
/// let mut client = WeatherFlow::new(config);
/// client.initialize().await?;
///
/// if let Some(observation) = client.update_observations().await? {
///     println!("{:?} °C", observation.air_temperature);
/// }
/// let forecast = client.update_forecast().hours(24).call().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct WeatherFlow<T: Transport = HttpTransport> {
    config: ClientConfig,
    endpoints: Endpoints,
    converter: UnitConverter,
    transport: T,
    station: Option<StationRecord>,
}

impl WeatherFlow<HttpTransport> {
    /// Creates a client that talks to the API over HTTP.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, HttpTransport::new())
    }
}

#[bon]
impl<T: Transport> WeatherFlow<T> {
    /// Creates a client that fetches through `transport`.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        let endpoints = Endpoints::new(config.base_url(), config.station_id(), config.api_token());
        let converter = UnitConverter::new(config.units(), config.host_localized());
        Self {
            config,
            endpoints,
            converter,
            transport,
            station: None,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Loads the station descriptor and device catalog.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherFlowError::WrongStationId`] for an unknown station,
    /// [`WeatherFlowError::NotAuthorized`] for a rejected token, and
    /// [`WeatherFlowError::InvalidData`] when no station is listed.
    pub async fn initialize(&mut self) -> Result<&StationRecord, WeatherFlowError> {
        let payload = self.request(&self.endpoints.station()).await?;
        let station = build_station_catalog(self.config.station_id(), payload)?;
        info!(
            "Initialized WeatherFlow station {} ({} devices)",
            station.station_id,
            station.devices.len()
        );
        Ok(&*self.station.insert(station))
    }

    /// The station loaded by [`WeatherFlow::initialize`].
    pub fn station_data(&self) -> Option<&StationRecord> {
        self.station.as_ref()
    }

    /// Unit labels for the configured unit system.
    pub fn unit_descriptions(&self) -> UnitDescriptions {
        UnitDescriptions::for_system(self.config.units())
    }

    /// Fetches the latest observation and the battery state of every device.
    ///
    /// Devices are queried one after the other. Any failure aborts the call
    /// without a partial record.
    pub async fn update_observations(&self) -> Result<Option<ObservationRecord>, WeatherFlowError> {
        let Some(station) = &self.station else {
            debug!("Observation update skipped, station not initialized");
            return Ok(None);
        };

        let payload = self.request(&self.endpoints.station_observation()).await?;
        let mut record = normalize_observation(station, payload, &self.converter)?;

        for device in &station.devices {
            let payload = self
                .request(&self.endpoints.device_observation(device.device_id))
                .await?;
            apply_device_reading(&mut record, device, payload)?;
        }

        if station.is_tempest_equipped {
            apply_battery_mode(&mut record);
        }
        Ok(Some(record))
    }

    /// Fetches the current conditions with the daily and hourly forecast.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.hours(usize)`: Optional. Number of hourly periods to keep. Defaults to
    ///   [`ClientConfig::forecast_hours`].
    #[builder]
    pub async fn update_forecast(
        &self,
        hours: Option<usize>,
    ) -> Result<Option<ForecastRecord>, WeatherFlowError> {
        if self.station.is_none() {
            debug!("Forecast update skipped, station not initialized");
            return Ok(None);
        }

        let options = ForecastOptions {
            hours: hours.unwrap_or(self.config.forecast_hours()),
            ignore_fetch_errors: self.config.ignore_fetch_errors(),
        };
        let payload = self.request(&self.endpoints.forecast()).await?;
        let record = aggregate_forecast(self.config.station_id(), payload, &self.converter, options)?;
        Ok(Some(record))
    }

    async fn request(&self, url: &str) -> Result<Value, WeatherFlowError> {
        let body = self.transport.fetch_json(url).await?;
        if status_code(&body) == Some(401) {
            warn!("Request to {} was not authorized", redact_token(url));
            return Err(WeatherFlowError::NotAuthorized {
                station_id: self.config.station_id(),
            });
        }
        Ok(body)
    }
}
