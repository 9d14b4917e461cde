use serde::{Deserialize, Serialize};

/// WGS84 location used for the current-weather lookup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    lat: f64,
    lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Result<Coordinates, String> {
        let lat = check_range(lat, -90.0, 90.0).map_err(|e| format!("invalid latitude: {e}"))?;
        let lon =
            check_range(lon, -180.0, 180.0).map_err(|e| format!("invalid longitude: {e}"))?;
        Ok(Coordinates { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

fn check_range(v: f64, min: f64, max: f64) -> Result<f64, String> {
    if v.is_nan() || v < min || max < v {
        Err(format!(
            "number '{v}' is not valid, must be in range [{min},{max}]"
        ))
    } else {
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    use super::Coordinates;

    #[test]
    fn test_valid_and_invalid_coordinates() {
        let incheon = Coordinates::new(37.4602, 126.4407).expect("test failed");
        assert_eq!(incheon.lat(), 37.4602);
        assert!(Coordinates::new(91.0, 0.0).is_err());
        assert!(Coordinates::new(0.0, -180.5).is_err());
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    }
}
