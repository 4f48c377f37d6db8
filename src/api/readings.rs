//! Named decoders for the positional reading arrays returned by the device
//! observation endpoint.
//!
//! Each device generation reports a fixed layout. Decoding checks the array is
//! long enough for that layout, so upstream schema drift is reported instead of
//! silently reading a neighbouring value.

use crate::types::station::DeviceKind;

/// Layout of an `obs_st` reading.
#[derive(Debug, Clone, PartialEq)]
pub struct TempestReading {
    pub timestamp: Option<f64>,
    pub wind_lull: Option<f64>,
    pub wind_avg: Option<f64>,
    pub wind_gust: Option<f64>,
    pub wind_direction: Option<f64>,
    pub wind_sample_interval: Option<f64>,
    pub station_pressure: Option<f64>,
    pub air_temperature: Option<f64>,
    pub relative_humidity: Option<f64>,
    pub illuminance: Option<f64>,
    pub uv: Option<f64>,
    pub solar_radiation: Option<f64>,
    pub rain_accumulated: Option<f64>,
    pub precipitation_type: Option<f64>,
    pub lightning_avg_distance: Option<f64>,
    pub lightning_strike_count: Option<f64>,
    pub battery: Option<f64>,
    pub report_interval: Option<f64>,
}

/// Layout of an `obs_air` reading.
#[derive(Debug, Clone, PartialEq)]
pub struct AirReading {
    pub timestamp: Option<f64>,
    pub station_pressure: Option<f64>,
    pub air_temperature: Option<f64>,
    pub relative_humidity: Option<f64>,
    pub lightning_strike_count: Option<f64>,
    pub lightning_avg_distance: Option<f64>,
    pub battery: Option<f64>,
    pub report_interval: Option<f64>,
}

/// Layout of an `obs_sky` reading.
#[derive(Debug, Clone, PartialEq)]
pub struct SkyReading {
    pub timestamp: Option<f64>,
    pub illuminance: Option<f64>,
    pub uv: Option<f64>,
    pub rain_accumulated: Option<f64>,
    pub wind_lull: Option<f64>,
    pub wind_avg: Option<f64>,
    pub wind_gust: Option<f64>,
    pub wind_direction: Option<f64>,
    pub battery: Option<f64>,
    pub report_interval: Option<f64>,
    pub solar_radiation: Option<f64>,
    pub local_day_rain_accumulation: Option<f64>,
    pub precipitation_type: Option<f64>,
    pub wind_sample_interval: Option<f64>,
}

/// A decoded device reading.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceReading {
    Tempest(TempestReading),
    Air(AirReading),
    Sky(SkyReading),
}

/// A reading array that does not match the layout of its device kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMismatch {
    pub expected: usize,
    pub found: usize,
}

impl DeviceReading {
    /// Number of values in a full reading for `kind`, or `None` for devices
    /// that report no readings.
    pub fn layout_len(kind: DeviceKind) -> Option<usize> {
        match kind {
            DeviceKind::Tempest => Some(18),
            DeviceKind::Air => Some(8),
            DeviceKind::Sky => Some(14),
            DeviceKind::Hub => None,
        }
    }

    /// The `type` tag the API puts on observations of `kind`.
    pub fn observation_type(kind: DeviceKind) -> Option<&'static str> {
        match kind {
            DeviceKind::Tempest => Some("obs_st"),
            DeviceKind::Air => Some("obs_air"),
            DeviceKind::Sky => Some("obs_sky"),
            DeviceKind::Hub => None,
        }
    }

    /// Decodes `values` using the layout of `kind`.
    ///
    /// Returns `Ok(None)` for hubs, which have no sensor readings.
    pub fn decode(kind: DeviceKind, values: &[Option<f64>]) -> Result<Option<Self>, LayoutMismatch> {
        let Some(expected) = Self::layout_len(kind) else {
            return Ok(None);
        };
        if values.len() < expected {
            return Err(LayoutMismatch {
                expected,
                found: values.len(),
            });
        }
        let v = |index: usize| values[index];

        let reading = match kind {
            DeviceKind::Tempest => DeviceReading::Tempest(TempestReading {
                timestamp: v(0),
                wind_lull: v(1),
                wind_avg: v(2),
                wind_gust: v(3),
                wind_direction: v(4),
                wind_sample_interval: v(5),
                station_pressure: v(6),
                air_temperature: v(7),
                relative_humidity: v(8),
                illuminance: v(9),
                uv: v(10),
                solar_radiation: v(11),
                rain_accumulated: v(12),
                precipitation_type: v(13),
                lightning_avg_distance: v(14),
                lightning_strike_count: v(15),
                battery: v(16),
                report_interval: v(17),
            }),
            DeviceKind::Air => DeviceReading::Air(AirReading {
                timestamp: v(0),
                station_pressure: v(1),
                air_temperature: v(2),
                relative_humidity: v(3),
                lightning_strike_count: v(4),
                lightning_avg_distance: v(5),
                battery: v(6),
                report_interval: v(7),
            }),
            DeviceKind::Sky => DeviceReading::Sky(SkyReading {
                timestamp: v(0),
                illuminance: v(1),
                uv: v(2),
                rain_accumulated: v(3),
                wind_lull: v(4),
                wind_avg: v(5),
                wind_gust: v(6),
                wind_direction: v(7),
                battery: v(8),
                report_interval: v(9),
                solar_radiation: v(10),
                local_day_rain_accumulation: v(11),
                precipitation_type: v(12),
                wind_sample_interval: v(13),
            }),
            DeviceKind::Hub => return Ok(None),
        };
        Ok(Some(reading))
    }

    pub fn kind(&self) -> DeviceKind {
        match self {
            DeviceReading::Tempest(_) => DeviceKind::Tempest,
            DeviceReading::Air(_) => DeviceKind::Air,
            DeviceReading::Sky(_) => DeviceKind::Sky,
        }
    }

    /// Battery voltage in volts.
    pub fn battery_voltage(&self) -> Option<f64> {
        match self {
            DeviceReading::Tempest(reading) => reading.battery,
            DeviceReading::Air(reading) => reading.battery,
            DeviceReading::Sky(reading) => reading.battery,
        }
    }
}
