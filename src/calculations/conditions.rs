use crate::types::metrics::{PrecipIntensity, UvCategory};

/// UV exposure category for a UV index.
pub fn uv_category(uv: Option<f64>) -> Option<UvCategory> {
    let uv = uv?;
    let category = if uv >= 10.5 {
        UvCategory::Extreme
    } else if uv >= 7.5 {
        UvCategory::VeryHigh
    } else if uv >= 5.5 {
        UvCategory::High
    } else if uv >= 2.5 {
        UvCategory::Moderate
    } else if uv > 0.0 {
        UvCategory::Low
    } else {
        UvCategory::None
    };
    Some(category)
}

/// Intensity of the rain that fell in the last minute (mm), judged by its hourly rate.
pub fn precip_intensity(precip: Option<f64>) -> Option<PrecipIntensity> {
    let rate = precip? * 60.0;
    let intensity = if rate >= 50.0 {
        PrecipIntensity::Extreme
    } else if rate >= 16.0 {
        PrecipIntensity::VeryHeavy
    } else if rate >= 4.0 {
        PrecipIntensity::Heavy
    } else if rate >= 1.0 {
        PrecipIntensity::Moderate
    } else if rate >= 0.25 {
        PrecipIntensity::Light
    } else if rate > 0.0 {
        PrecipIntensity::VeryLight
    } else {
        PrecipIntensity::None
    };
    Some(intensity)
}

pub fn is_raining(precip: Option<f64>) -> Option<bool> {
    Some(precip? * 60.0 > 0.0)
}

pub fn is_freezing(temperature: Option<f64>) -> Option<bool> {
    Some(temperature? < 0.0)
}

pub fn is_lightning(strike_count: Option<i64>) -> Option<bool> {
    Some(strike_count? > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uv_category_bands() {
        assert_eq!(uv_category(Some(11.0)), Some(UvCategory::Extreme));
        assert_eq!(uv_category(Some(10.5)), Some(UvCategory::Extreme));
        assert_eq!(uv_category(Some(8.0)), Some(UvCategory::VeryHigh));
        assert_eq!(uv_category(Some(6.0)), Some(UvCategory::High));
        assert_eq!(uv_category(Some(2.5)), Some(UvCategory::Moderate));
        assert_eq!(uv_category(Some(0.4)), Some(UvCategory::Low));
        assert_eq!(uv_category(Some(0.0)), Some(UvCategory::None));
        assert_eq!(uv_category(None), None);
    }

    #[test]
    fn test_precip_intensity_bands() {
        assert_eq!(precip_intensity(Some(1.0)), Some(PrecipIntensity::Extreme));
        assert_eq!(precip_intensity(Some(0.3)), Some(PrecipIntensity::VeryHeavy));
        assert_eq!(precip_intensity(Some(0.1)), Some(PrecipIntensity::Heavy));
        assert_eq!(precip_intensity(Some(0.02)), Some(PrecipIntensity::Moderate));
        assert_eq!(precip_intensity(Some(0.005)), Some(PrecipIntensity::Light));
        assert_eq!(precip_intensity(Some(0.001)), Some(PrecipIntensity::VeryLight));
        assert_eq!(precip_intensity(Some(0.0)), Some(PrecipIntensity::None));
        assert_eq!(precip_intensity(None), None);
    }

    #[test]
    fn test_flags() {
        assert_eq!(is_raining(Some(0.01)), Some(true));
        assert_eq!(is_raining(Some(0.0)), Some(false));
        assert_eq!(is_freezing(Some(-0.1)), Some(true));
        assert_eq!(is_freezing(Some(0.0)), Some(false));
        assert_eq!(is_lightning(Some(3)), Some(true));
        assert_eq!(is_lightning(Some(0)), Some(false));
        assert_eq!(is_raining(None), None);
        assert_eq!(is_freezing(None), None);
        assert_eq!(is_lightning(None), None);
    }
}
