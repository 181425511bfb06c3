use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};

/// Base width, base depth and peak height of a tent.
///
/// Values are in any consistent linear unit; nothing here assumes meters.
/// All three are finite and strictly positive once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimensions {
    width: f64,
    depth: f64,
    height: f64,
}

impl Dimensions {
    /// Creates validated dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is zero, negative, NaN or infinite.
    pub fn new(width: f64, depth: f64, height: f64) -> Result<Self> {
        check("width", width)?;
        check("depth", depth)?;
        check("height", height)?;
        Ok(Self {
            width,
            depth,
            height,
        })
    }

    /// Creates dimensions from centimeter inputs, converting them to meters.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is not a finite positive number.
    pub fn from_centimeters(width: f64, depth: f64, height: f64) -> Result<Self> {
        Self::new(width / 100.0, depth / 100.0, height / 100.0)
    }

    /// Returns the base width (extent along X).
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the base depth (extent along Y).
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Returns the peak height (extent along Z).
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}

fn check(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidDimension { name, value }.into())
    }
}

#[derive(Deserialize)]
struct RawDimensions {
    width: f64,
    depth: f64,
    height: f64,
}

impl<'de> Deserialize<'de> for Dimensions {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawDimensions::deserialize(deserializer)?;
        Self::new(raw.width, raw.depth, raw.height).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::TentformError;

    #[test]
    fn accepts_positive_values() {
        let d = Dimensions::new(1.4, 2.3, 1.2).unwrap();
        assert_eq!(d.width(), 1.4);
        assert_eq!(d.depth(), 2.3);
        assert_eq!(d.height(), 1.2);
    }

    #[test]
    fn rejects_non_positive_and_non_finite() {
        for (w, d, h) in [
            (0.0, 1.0, 1.0),
            (1.0, -2.0, 1.0),
            (1.0, 1.0, f64::NAN),
            (f64::INFINITY, 1.0, 1.0),
        ] {
            assert!(Dimensions::new(w, d, h).is_err(), "{w} {d} {h}");
        }
    }

    #[test]
    fn error_names_the_offending_dimension() {
        let err = Dimensions::new(1.0, 1.0, -0.5).unwrap_err();
        assert!(matches!(
            err,
            TentformError::Geometry(GeometryError::InvalidDimension { name: "height", .. })
        ));
    }

    #[test]
    fn centimeters_are_converted_to_meters() {
        let d = Dimensions::from_centimeters(140.0, 230.0, 120.0).unwrap();
        assert_eq!(d.width(), 1.4);
        assert_eq!(d.depth(), 2.3);
        assert_eq!(d.height(), 1.2);
    }

    #[test]
    fn deserialization_validates() {
        let ok: Dimensions = serde_json::from_str(r#"{"width":1,"depth":2,"height":3}"#).unwrap();
        assert_eq!(ok.depth(), 2.0);
        let bad = serde_json::from_str::<Dimensions>(r#"{"width":0,"depth":2,"height":3}"#);
        assert!(bad.is_err());
    }
}
