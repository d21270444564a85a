use std::fmt::Display;

use crate::{Error, utility::{dms, GeoMath}};

/// Geographic longitude/latitude point in degrees. Projections accept and return these
/// through [`Projection::project`](crate::Projection::project) and
/// [`Projection::unproject`](crate::Projection::unproject).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LonLat {
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
}

impl LonLat {
    /// Internal-only constructor that doesn't check the bounds of lon/lat
    pub(crate) fn new(lon: f64, lat: f64) -> LonLat {
        Self {
            longitude: lon,
            latitude: lat,
        }
    }

    /// Tries to create a point from a longitude/latitude pair. First checks if the
    /// values are valid:
    /// * Latitude must be in range [-90,90]
    /// * Longitude must be in range [-360,360]. Values past ±180 are kept as given, so
    ///   regions crossing the antimeridian can use a continuous range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either longitude or latitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use geoproj::LonLat;
    ///
    /// let coord = LonLat::create(172.499523, -41.729082).unwrap();
    ///
    /// assert_eq!(coord.longitude(), 172.499523);
    /// assert_eq!(coord.latitude(), -41.729082);
    ///
    /// assert!(LonLat::create(0.0, 100.0).is_err());
    /// assert!(LonLat::create(-400.0, 0.0).is_err());
    /// ```
    pub fn create(lon: f64, lat: f64) -> Result<LonLat, Error> {
        let turn = f64::from(2 * dms::HD);
        if !lat.is_latitude() {
            Err(Error::InvalidCoord(format!("Latitude {lat} outside of valid range [-90, 90].")))
        } else if !(-turn..=turn).contains(&lon) {
            Err(Error::InvalidCoord(format!("Longitude {lon} outside of valid range [-360, 360].")))
        } else {
            Ok(LonLat::new(lon, lat))
        }
    }

    /// Returns the longitude value.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns the latitude value.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns whether the current point is in the northern hemisphere.
    ///
    /// # Example
    ///
    /// ```
    /// use geoproj::LonLat;
    ///
    /// assert!(!LonLat::create(172.5, -41.7).unwrap().is_north());
    /// assert!(LonLat::create(2.35, 48.86).unwrap().is_north());
    /// ```
    pub fn is_north(&self) -> bool {
        self.latitude.is_sign_positive()
    }
}

impl Display for LonLat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        write!(
            f,
            "{lon} {lat}",
        )
    }
}
