use std::fmt::Display;

use crate::Error;

/// Projected easting/northing point, in the linear unit of the projection's ellipsoid
/// (metres for every bundled system).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCoord {
    #[cfg_attr(feature = "serde", serde(alias = "x", alias = "e"))]
    pub(crate) easting: f64,
    #[cfg_attr(feature = "serde", serde(alias = "y", alias = "n"))]
    pub(crate) northing: f64,
}

impl GridCoord {
    pub(crate) fn new(easting: f64, northing: f64) -> GridCoord {
        Self { easting, northing }
    }

    /// Tries to create a grid point. Both values must be finite.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if the easting or northing is `NaN` or infinite.
    ///
    /// # Usage
    ///
    /// ```
    /// use geoproj::GridCoord;
    ///
    /// let coord = GridCoord::create(1_558_376.32, 5_380_181.71).unwrap();
    /// assert_eq!(coord.easting(), 1_558_376.32);
    /// assert_eq!(coord.northing(), 5_380_181.71);
    ///
    /// assert!(GridCoord::create(f64::NAN, 0.0).is_err());
    /// ```
    pub fn create(easting: f64, northing: f64) -> Result<GridCoord, Error> {
        if easting.is_finite() && northing.is_finite() {
            Ok(GridCoord::new(easting, northing))
        } else {
            Err(Error::InvalidCoord(format!("Grid coordinate ({easting}, {northing}) is not finite.")))
        }
    }

    #[inline]
    pub fn easting(&self) -> f64 {
        self.easting
    }

    #[inline]
    pub fn northing(&self) -> f64 {
        self.northing
    }
}

impl Display for GridCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let easting = buf.format(self.easting);
        let mut buf = ryu::Buffer::new();
        let northing = buf.format(self.northing);
        write!(f, "{easting}mE {northing}mN")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_labels_axes() {
        let coord = GridCoord::create(2_958_434.27, 6_919_056.8).unwrap();
        assert_eq!(coord.to_string(), "2958434.27mE 6919056.8mN");
    }
}
