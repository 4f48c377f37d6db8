use crate::types::metrics::{BeaufortCategory, BeaufortValue};

/// Lower bound in m/s of each Beaufort force, strongest first.
const BEAUFORT_THRESHOLDS: [(f64, u8, BeaufortCategory); 13] = [
    (32.7, 12, BeaufortCategory::Hurricane),
    (28.5, 11, BeaufortCategory::ViolentStorm),
    (24.5, 10, BeaufortCategory::Storm),
    (20.8, 9, BeaufortCategory::StrongGale),
    (17.2, 8, BeaufortCategory::FreshGale),
    (13.9, 7, BeaufortCategory::ModerateGale),
    (10.8, 6, BeaufortCategory::StrongBreeze),
    (8.0, 5, BeaufortCategory::FreshBreeze),
    (5.5, 4, BeaufortCategory::ModerateBreeze),
    (3.4, 3, BeaufortCategory::GentleBreeze),
    (1.6, 2, BeaufortCategory::LightBreeze),
    (0.3, 1, BeaufortCategory::LightAir),
    (f64::NEG_INFINITY, 0, BeaufortCategory::Calm),
];

const COMPASS_POINTS: [&str; 16] = [
    "n", "nne", "ne", "ene", "e", "ese", "se", "sse", "s", "ssw", "sw", "wsw", "w", "wnw", "nw",
    "nnw",
];

/// Classifies a wind speed in m/s on the Beaufort scale.
///
/// A missing speed maps to force 0 with category [`BeaufortCategory::None`].
///
/// # Examples
///
/// ```
/// use weatherflow_rest::calculations::beaufort;
/// use weatherflow_rest::BeaufortCategory;
///
/// let value = beaufort(Some(17.2));
/// assert_eq!(value.scale, 8);
/// assert_eq!(value.category, BeaufortCategory::FreshGale);
/// assert_eq!(beaufort(None).category, BeaufortCategory::None);
/// ```
pub fn beaufort(speed: Option<f64>) -> BeaufortValue {
    let Some(speed) = speed else {
        return BeaufortValue {
            scale: 0,
            category: BeaufortCategory::None,
        };
    };
    BEAUFORT_THRESHOLDS
        .iter()
        .find(|(threshold, _, _)| speed >= *threshold)
        .map(|&(_, scale, category)| BeaufortValue { scale, category })
        .unwrap_or(BeaufortValue {
            scale: 0,
            category: BeaufortCategory::Calm,
        })
}

/// 16-point compass direction (lowercase) for a bearing in degrees.
pub fn wind_cardinal(bearing: Option<f64>) -> Option<&'static str> {
    let index = ((bearing? + 11.25) / 22.5).floor() as i64;
    Some(COMPASS_POINTS[index.rem_euclid(16) as usize])
}
