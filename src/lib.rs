//! Forward and inverse map projections between geographic longitude/latitude and planar
//! easting/northing for two conformal families: the two-parallel Lambert Conformal Conic
//! and a Redfearn-series Transverse Mercator. Named New Zealand systems (NZCS2000,
//! NZTM2000) are provided in [`systems`].
//!
//! ```
//! use geoproj::{Projection, systems::Nztm2000};
//!
//! let nztm = Nztm2000::new();
//! let (lon, lat) = nztm.inverse(1_558_376.32, 5_380_181.71).unwrap();
//!
//! assert!((lon - 172.49952353).abs() < 1e-5);
//! assert!((lat + 41.72908258).abs() < 1e-5);
//! ```
#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::many_single_char_names,
    clippy::similar_names
)]

use thiserror::Error;

pub mod bounds;
pub mod ellipsoid;
pub mod grid;
pub mod lonlat;
pub mod systems;

pub use bounds::bounds;
pub use ellipsoid::Ellipsoid;
pub use grid::GridCoord;
pub use lonlat::LonLat;
pub use projections::lambert_conformal_conic::{LambertConformalConic, LambertConformalConicParams};
pub use projections::transverse_mercator::{TransverseMercator, TransverseMercatorParams};

pub mod projections {
    pub mod lambert_conformal_conic;
    pub mod transverse_mercator;
}

pub(crate) mod constants;
pub(crate) mod utility;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Ellipsoid parameters are not valid: {0}")]
    InvalidEllipsoid(String),
    #[error("Projection parameters are not valid: {0}")]
    InvalidParameter(String),
    #[error("Latitude did not converge after {iterations} iterations (last step {residual:e} rad)")]
    NoConvergence {
        iterations: usize,
        residual: f64,
    },
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
    #[error("No coordinate system registered for {0}")]
    UnknownSystem(String),
}

/// A map projection between geographic degrees and planar grid units.
///
/// `forward` takes `(longitude, latitude)` in degrees and returns `(easting, northing)`;
/// `inverse` goes the other way. Implementations hold only immutable derived constants,
/// so one instance can be shared across threads and called any number of times.
pub trait Projection: Send + Sync {
    /// `(lon°, lat°) -> (x, y)`
    fn forward(&self, lon: f64, lat: f64) -> (f64, f64);

    /// `(x, y) -> (lon°, lat°)`
    ///
    /// # Errors
    ///
    /// Returns an error if the projection needs an iterative solve that fails to
    /// converge (see [`Error::NoConvergence`]).
    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), Error>;

    /// Forward-projects every pair in place.
    fn forward_batch(&self, coords: &mut [(f64, f64)]) {
        for c in coords.iter_mut() {
            *c = self.forward(c.0, c.1);
        }
    }

    /// Inverse-projects every pair in place, stopping at the first failure. Pairs before
    /// the failing one are already converted.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by [`Projection::inverse`].
    fn inverse_batch(&self, coords: &mut [(f64, f64)]) -> Result<(), Error> {
        for c in coords.iter_mut() {
            *c = self.inverse(c.0, c.1)?;
        }
        Ok(())
    }

    /// Projects a typed geographic point.
    fn project(&self, point: &LonLat) -> GridCoord {
        let (x, y) = self.forward(point.longitude, point.latitude);
        GridCoord::new(x, y)
    }

    /// Recovers the geographic point of a typed grid point.
    ///
    /// # Errors
    ///
    /// Same as [`Projection::inverse`].
    fn unproject(&self, point: &GridCoord) -> Result<LonLat, Error> {
        let (lon, lat) = self.inverse(point.easting, point.northing)?;
        Ok(LonLat::new(lon, lat))
    }
}

impl<P: Projection + ?Sized> Projection for Box<P> {
    fn forward(&self, lon: f64, lat: f64) -> (f64, f64) {
        (**self).forward(lon, lat)
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), Error> {
        (**self).inverse(x, y)
    }
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
