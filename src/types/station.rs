//! Defines the data structures describing a WeatherFlow station and the physical
//! devices attached to it.

use serde::Serialize;
use std::fmt;

/// The kind of physical WeatherFlow device.
///
/// The REST API identifies devices with a two letter code; use
/// [`DeviceKind::from_code`] to map it.
///
/// # Examples
///
/// ```
/// use weatherflow_rest::DeviceKind;
///
/// assert_eq!(DeviceKind::from_code("ST"), Some(DeviceKind::Tempest));
/// assert_eq!(DeviceKind::from_code("XX"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    /// Code `HB`: the hub relaying sensor data to the cloud.
    Hub,
    /// Code `AR`: legacy sensor for temperature, humidity, pressure and lightning.
    Air,
    /// Code `SK`: legacy sensor for wind, rain and solar.
    Sky,
    /// Code `ST`: all-in-one sensor combining Air and Sky.
    Tempest,
}

impl DeviceKind {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "HB" => Some(DeviceKind::Hub),
            "AR" => Some(DeviceKind::Air),
            "SK" => Some(DeviceKind::Sky),
            "ST" => Some(DeviceKind::Tempest),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            DeviceKind::Hub => "HB",
            DeviceKind::Air => "AR",
            DeviceKind::Sky => "SK",
            DeviceKind::Tempest => "ST",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DeviceKind::Hub => "hub",
            DeviceKind::Air => "air",
            DeviceKind::Sky => "sky",
            DeviceKind::Tempest => "tempest",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A device attached to a station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceRecord {
    pub device_id: i64,
    /// Display name from the device metadata. Hubs usually have none.
    pub name: Option<String>,
    pub kind: DeviceKind,
    pub hardware_revision: Option<String>,
    pub firmware_revision: Option<String>,
    pub serial_number: Option<String>,
}

/// A device whose type code this crate does not know about.
///
/// Kept on the [`StationRecord`] so new hardware shows up instead of vanishing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnrecognizedDevice {
    pub device_id: Option<i64>,
    pub device_type: Option<String>,
    pub serial_number: Option<String>,
}

/// A WeatherFlow station with its device catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationRecord {
    pub station_id: i64,
    pub name: Option<String>,
    pub public_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// IANA timezone name, e.g. "Europe/Copenhagen".
    pub timezone: Option<String>,
    /// Elevation above sea level in metres.
    pub elevation: Option<f64>,
    /// `true` if at least one Tempest is attached.
    pub is_tempest_equipped: bool,
    pub hub: Option<DeviceRecord>,
    /// Sensor devices (Air, Sky, Tempest) in the order the API lists them.
    pub devices: Vec<DeviceRecord>,
    pub unrecognized_devices: Vec<UnrecognizedDevice>,
}

impl StationRecord {
    /// The first device of the given kind, if any.
    pub fn device(&self, kind: DeviceKind) -> Option<&DeviceRecord> {
        self.devices.iter().find(|device| device.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_codes_round_trip() {
        for kind in [
            DeviceKind::Hub,
            DeviceKind::Air,
            DeviceKind::Sky,
            DeviceKind::Tempest,
        ] {
            assert_eq!(DeviceKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(DeviceKind::from_code("hb"), None);
        assert_eq!(DeviceKind::Sky.to_string(), "sky");
    }
}
