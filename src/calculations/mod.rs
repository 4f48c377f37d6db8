//! Derived meteorological metrics that the WeatherFlow feed does not report
//! directly.
//!
//! All functions are pure and work on raw metric inputs. They return `None`
//! whenever a required input is missing, so an unknown reading never turns
//! into a made-up value.

mod atmosphere;
mod battery;
mod conditions;
mod wind;

pub use atmosphere::{absolute_humidity, cloud_base, freezing_line, visibility};
pub use battery::{battery_mode, battery_percent};
pub use conditions::{is_freezing, is_lightning, is_raining, precip_intensity, uv_category};
pub use wind::{beaufort, wind_cardinal};
