use crate::api::payloads::{DevicePayload, StationPayload, StationsPayload};
use crate::error::{InvalidDataError, WeatherFlowError};
use crate::types::station::{DeviceKind, DeviceRecord, StationRecord, UnrecognizedDevice};
use log::{debug, warn};
use serde_json::Value;

/// Builds the [`StationRecord`] for `station_id` from a `stations/{id}` response.
///
/// Fails with [`WeatherFlowError::WrongStationId`] or
/// [`WeatherFlowError::NotAuthorized`] when the API reports 404 or 401 in the
/// body, and with [`InvalidDataError`] when no station is listed. Devices with
/// a type code other than `HB`, `AR`, `SK` or `ST` are collected in
/// [`StationRecord::unrecognized_devices`].
pub fn build_station_catalog(
    station_id: i64,
    payload: Value,
) -> Result<StationRecord, WeatherFlowError> {
    let payload: StationsPayload =
        serde_json::from_value(payload).map_err(|source| InvalidDataError::Malformed {
            context: "station",
            source,
        })?;

    if let Some(status) = &payload.status {
        match status.status_code {
            Some(404) => return Err(WeatherFlowError::WrongStationId { station_id }),
            Some(401) => return Err(WeatherFlowError::NotAuthorized { station_id }),
            Some(code) if code != 0 => warn!(
                "Station {} responded with status {}: {:?}",
                station_id, code, status.status_message
            ),
            _ => {}
        }
    }

    let station = payload
        .stations
        .and_then(|stations| stations.into_iter().next())
        .ok_or(InvalidDataError::EmptyStationList { station_id })?;

    Ok(catalog_station(station_id, station))
}

fn catalog_station(station_id: i64, station: StationPayload) -> StationRecord {
    let mut record = StationRecord {
        station_id: station.station_id.unwrap_or(station_id),
        name: station.name,
        public_name: station.public_name,
        latitude: station.latitude,
        longitude: station.longitude,
        timezone: station.timezone,
        elevation: station.station_meta.and_then(|meta| meta.elevation),
        is_tempest_equipped: false,
        hub: None,
        devices: Vec::new(),
        unrecognized_devices: Vec::new(),
    };

    for device in station.devices {
        let kind = device.device_type.as_deref().and_then(DeviceKind::from_code);
        match (kind, device.device_id) {
            (Some(DeviceKind::Hub), Some(device_id)) => {
                record.hub = Some(device_record(device_id, DeviceKind::Hub, device));
            }
            (Some(kind), Some(device_id)) => {
                if kind == DeviceKind::Tempest {
                    record.is_tempest_equipped = true;
                }
                record.devices.push(device_record(device_id, kind, device));
            }
            _ => {
                warn!(
                    "Station {}: skipping device {:?} with type {:?}",
                    record.station_id, device.device_id, device.device_type
                );
                record.unrecognized_devices.push(UnrecognizedDevice {
                    device_id: device.device_id,
                    device_type: device.device_type,
                    serial_number: device.serial_number,
                });
            }
        }
    }

    debug!(
        "Station {} has {} devices, tempest: {}",
        record.station_id,
        record.devices.len(),
        record.is_tempest_equipped
    );
    record
}

fn device_record(device_id: i64, kind: DeviceKind, device: DevicePayload) -> DeviceRecord {
    DeviceRecord {
        device_id,
        name: device.device_meta.and_then(|meta| meta.name),
        kind,
        hardware_revision: device.hardware_revision,
        firmware_revision: device.firmware_revision,
        serial_number: device.serial_number,
    }
}
