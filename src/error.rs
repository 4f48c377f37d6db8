use crate::api::error::TransportError;
use crate::types::station::DeviceKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherFlowError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Station {station_id} does not exist or is not accessible")]
    WrongStationId { station_id: i64 },

    #[error("Not authorized to access station {station_id}. Check the api token")]
    NotAuthorized { station_id: i64 },

    #[error(transparent)]
    InvalidData(#[from] InvalidDataError),
}

#[derive(Debug, Error)]
pub enum InvalidDataError {
    #[error("Empty dataset returned from WeatherFlow. Make sure the station is online.")]
    EmptyDataset,

    #[error("No stations returned for station id {station_id}")]
    EmptyStationList { station_id: i64 },

    #[error("Could not decode {context} payload")]
    Malformed {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Reading of {kind} device {device_id} has {found} values, expected at least {expected}")]
    ReadingLayout {
        device_id: i64,
        kind: DeviceKind,
        expected: usize,
        found: usize,
    },

    #[error("Device {device_id} returned '{found}' observations, expected '{expected}'")]
    ReadingKind {
        device_id: i64,
        expected: &'static str,
        found: String,
    },

    #[error("Forecast data is missing '{key}'")]
    MissingField { key: &'static str },
}
