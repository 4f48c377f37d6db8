use crate::types::metrics::BatteryMode;
use crate::types::station::DeviceKind;

/// Solar radiation (W/m²) above which a Tempest is assumed to be charging.
const CHARGING_SOLAR_RADIATION: f64 = 100.0;

/// Battery charge in percent, estimated from the voltage.
///
/// Tempest runs on a supercapacitor/battery between 1.8 V and 2.8 V, Air and
/// Sky on AA cells between 2.4 V and 3.5 V. The result is truncated and always
/// within 0..=100. Hubs are mains powered and have no battery.
///
/// # Examples
///
/// ```
/// use weatherflow_rest::DeviceKind;
/// use weatherflow_rest::calculations::battery_percent;
///
/// assert_eq!(battery_percent(DeviceKind::Tempest, Some(2.655)), Some(85));
/// assert_eq!(battery_percent(DeviceKind::Sky, Some(3.6)), Some(100));
/// assert_eq!(battery_percent(DeviceKind::Hub, Some(3.0)), None);
/// ```
pub fn battery_percent(kind: DeviceKind, voltage: Option<f64>) -> Option<u8> {
    let voltage = voltage?;
    let percent = match kind {
        DeviceKind::Tempest => {
            if voltage >= 2.80 {
                100.0
            } else if voltage <= 1.8 {
                0.0
            } else {
                (voltage - 1.8) * 100.0
            }
        }
        DeviceKind::Air | DeviceKind::Sky => {
            if voltage >= 3.50 {
                100.0
            } else if voltage <= 2.4 {
                0.0
            } else {
                ((voltage - 2.4) / 1.1) * 100.0
            }
        }
        DeviceKind::Hub => return None,
    };
    Some(percent.trunc().clamp(0.0, 100.0) as u8)
}

/// Tempest power-saving mode for the given battery voltage.
///
/// The thresholds differ between charging and discharging so the station does
/// not flap between modes around a single voltage.
pub fn battery_mode(voltage: Option<f64>, solar_radiation: Option<f64>) -> Option<BatteryMode> {
    let (voltage, solar_radiation) = (voltage?, solar_radiation?);
    let charging = solar_radiation > CHARGING_SOLAR_RADIATION;

    let mode = if voltage >= 2.455 {
        BatteryMode::FullPerformance
    } else if voltage <= 2.355 {
        BatteryMode::Conservation
    } else if charging {
        if voltage >= 2.41 {
            BatteryMode::ReducedWind
        } else if voltage > 2.375 {
            BatteryMode::MinuteWind
        } else {
            BatteryMode::Conservation
        }
    } else if voltage > 2.415 {
        BatteryMode::FullPerformance
    } else if voltage > 2.39 {
        BatteryMode::ReducedWind
    } else if voltage > 2.355 {
        BatteryMode::MinuteWind
    } else {
        BatteryMode::Conservation
    };
    Some(mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tempest_breakpoints() {
        assert_eq!(battery_percent(DeviceKind::Tempest, Some(2.80)), Some(100));
        assert_eq!(battery_percent(DeviceKind::Tempest, Some(3.10)), Some(100));
        assert_eq!(battery_percent(DeviceKind::Tempest, Some(1.8)), Some(0));
        assert_eq!(battery_percent(DeviceKind::Tempest, Some(0.5)), Some(0));
        assert_eq!(battery_percent(DeviceKind::Tempest, Some(2.35)), Some(55));
    }

    #[test]
    fn test_air_sky_breakpoints() {
        for kind in [DeviceKind::Air, DeviceKind::Sky] {
            assert_eq!(battery_percent(kind, Some(3.50)), Some(100));
            assert_eq!(battery_percent(kind, Some(2.4)), Some(0));
            assert_eq!(battery_percent(kind, Some(2.0)), Some(0));
            assert_eq!(battery_percent(kind, Some(2.96)), Some(50));
        }
    }

    #[test]
    fn test_percent_always_in_range() {
        for kind in [DeviceKind::Tempest, DeviceKind::Air, DeviceKind::Sky] {
            for step in 0..=500 {
                let voltage = step as f64 * 0.01;
                let percent = battery_percent(kind, Some(voltage)).unwrap();
                assert!(percent <= 100, "{kind} at {voltage} V gave {percent}");
            }
            assert_eq!(battery_percent(kind, None), None);
        }
    }

    #[test]
    fn test_battery_mode_fixed_bands() {
        assert_eq!(battery_mode(Some(2.5), Some(0.0)), Some(BatteryMode::FullPerformance));
        assert_eq!(battery_mode(Some(2.455), Some(500.0)), Some(BatteryMode::FullPerformance));
        assert_eq!(battery_mode(Some(2.355), Some(500.0)), Some(BatteryMode::Conservation));
        assert_eq!(battery_mode(Some(2.2), Some(0.0)), Some(BatteryMode::Conservation));
    }

    #[test]
    fn test_battery_mode_hysteresis() {
        // Same voltage, different mode depending on whether the panel is charging.
        assert_eq!(battery_mode(Some(2.42), Some(500.0)), Some(BatteryMode::ReducedWind));
        assert_eq!(battery_mode(Some(2.42), Some(50.0)), Some(BatteryMode::FullPerformance));

        assert_eq!(battery_mode(Some(2.40), Some(500.0)), Some(BatteryMode::MinuteWind));
        assert_eq!(battery_mode(Some(2.40), Some(50.0)), Some(BatteryMode::ReducedWind));

        assert_eq!(battery_mode(Some(2.37), Some(500.0)), Some(BatteryMode::Conservation));
        assert_eq!(battery_mode(Some(2.37), Some(50.0)), Some(BatteryMode::MinuteWind));
    }

    #[test]
    fn test_battery_mode_requires_inputs() {
        assert_eq!(battery_mode(None, Some(500.0)), None);
        assert_eq!(battery_mode(Some(2.5), None), None);
    }
}
