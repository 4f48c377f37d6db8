mod api;
pub mod calculations;
mod config;
mod error;
mod forecast;
mod observations;
mod stations;
mod types;
mod units;
mod utils;
mod weatherflow;

#[cfg(test)]
mod fixtures;

pub use config::ClientConfig;
pub use error::{InvalidDataError, WeatherFlowError};
pub use weatherflow::WeatherFlow;

pub use api::endpoints::WEATHERFLOW_BASE_URL;
pub use api::error::TransportError;
pub use api::readings::{AirReading, DeviceReading, LayoutMismatch, SkyReading, TempestReading};
pub use api::transport::{HttpTransport, Transport};

pub use forecast::aggregator::{aggregate_forecast, ForecastOptions};
pub use observations::normalizer::{apply_battery_mode, apply_device_reading, normalize_observation};
pub use stations::catalog::build_station_catalog;

pub use types::forecast::{DailyForecastRecord, ForecastRecord, HourlyForecastRecord};
pub use types::metrics::{BatteryMode, BeaufortCategory, BeaufortValue, PrecipIntensity, UvCategory};
pub use types::observation::ObservationRecord;
pub use types::station::{DeviceKind, DeviceRecord, StationRecord, UnrecognizedDevice};

pub use units::converter::UnitConverter;
pub use units::unit_system::{UnitDescriptions, UnitSystem};
