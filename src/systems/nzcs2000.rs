//! New Zealand Continental Shelf Lambert Conformal 2000.
//!
//! Covers 160°E to 170°W and 25°S to 60°S. A conic is used instead of Transverse Mercator
//! because the latter distorts too much over this longitude range.

use crate::{
    Ellipsoid, Error, LambertConformalConic, LambertConformalConicParams, Projection,
    constants::{
        GRS80_A, GRS80_F, NZCS_FALSE_EASTING, NZCS_FALSE_NORTHING, NZCS_FIRST_PARALLEL,
        NZCS_ORIGIN_LATITUDE, NZCS_SECOND_PARALLEL, NZ_ORIGIN_LONGITUDE,
    },
};

use super::{NamedSystem, SystemInfo};

pub const EPSG: u32 = 3851;

pub static INFO: SystemInfo = SystemInfo {
    epsg: EPSG,
    name: "NZGD2000 / NZCS2000",
    center: (3_164_132.21, 6_831_808.49),
    bounds: [1_646_165.27, 4_749_388.17, 4_765_747.77, 8_692_410.06],
    wgs84_bounds: [160.0, -60.0, 190.0, -25.0],
};

/// NZCS2000 (EPSG:3851) on the GRS80 ellipsoid.
///
/// # Usage
///
/// ```
/// use geoproj::{Projection, systems::Nzcs2000};
///
/// let nzcs = Nzcs2000::new();
/// let (x, y) = nzcs.forward(172.49952353, -41.72908258);
///
/// assert!((x - 2_958_434.27).abs() < 0.01);
/// assert!((y - 6_919_056.80).abs() < 0.01);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Nzcs2000 {
    engine: LambertConformalConic,
}

impl Nzcs2000 {
    pub fn new() -> Nzcs2000 {
        Self {
            engine: LambertConformalConic::derive(Ellipsoid::GRS80, Self::params()),
        }
    }

    /// The defining parameters, for building a modified variant through
    /// [`LambertConformalConic::new`].
    pub fn params() -> LambertConformalConicParams {
        LambertConformalConicParams {
            semi_major_axis: GRS80_A,
            flattening: GRS80_F,
            first_standard_parallel: NZCS_FIRST_PARALLEL.to_radians(),
            second_standard_parallel: NZCS_SECOND_PARALLEL.to_radians(),
            origin_latitude: NZCS_ORIGIN_LATITUDE.to_radians(),
            origin_longitude: NZ_ORIGIN_LONGITUDE.to_radians(),
            false_northing: NZCS_FALSE_NORTHING,
            false_easting: NZCS_FALSE_EASTING,
        }
    }

    pub fn engine(&self) -> &LambertConformalConic {
        &self.engine
    }
}

impl Default for Nzcs2000 {
    fn default() -> Self {
        Self::new()
    }
}

impl Projection for Nzcs2000 {
    fn forward(&self, lon: f64, lat: f64) -> (f64, f64) {
        self.engine.forward(lon, lat)
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), Error> {
        self.engine.inverse(x, y)
    }
}

impl NamedSystem for Nzcs2000 {
    fn info(&self) -> &'static SystemInfo {
        &INFO
    }
}
