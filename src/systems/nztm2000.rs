//! New Zealand Transverse Mercator 2000, the projection of Topo50 and most mainland
//! mapping.

use crate::{
    Ellipsoid, Error, Projection, TransverseMercator, TransverseMercatorParams,
    constants::{
        GRS80_A, GRS80_F, NZTM_FALSE_EASTING, NZTM_FALSE_NORTHING, NZTM_K0,
        NZTM_ORIGIN_LATITUDE, NZ_ORIGIN_LONGITUDE,
    },
};

use super::{NamedSystem, SystemInfo};

pub const EPSG: u32 = 2193;

pub static INFO: SystemInfo = SystemInfo {
    epsg: EPSG,
    name: "NZGD2000 / New Zealand Transverse Mercator 2000",
    center: (1_557_768.54, 5_492_759.66),
    bounds: [987_942.45, 4_736_810.69, 2_119_620.66, 6_212_415.67],
    wgs84_bounds: [166.37, -47.33, 178.63, -34.1],
};

/// NZTM2000 (EPSG:2193) on the GRS80 ellipsoid.
///
/// # Usage
///
/// ```
/// use geoproj::{Projection, systems::Nztm2000};
///
/// let nztm = Nztm2000::new();
/// let (x, y) = nztm.forward(172.49952353, -41.72908258);
///
/// assert!((x - 1_558_376.32).abs() < 0.5);
/// assert!((y - 5_380_181.71).abs() < 0.5);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Nztm2000 {
    engine: TransverseMercator,
}

impl Nztm2000 {
    pub fn new() -> Nztm2000 {
        Self {
            engine: TransverseMercator::derive(Ellipsoid::GRS80, Self::params()),
        }
    }

    /// The defining parameters, for building a modified variant through
    /// [`TransverseMercator::new`].
    pub fn params() -> TransverseMercatorParams {
        TransverseMercatorParams {
            semi_major_axis: GRS80_A,
            flattening: GRS80_F,
            origin_latitude: NZTM_ORIGIN_LATITUDE.to_radians(),
            origin_longitude: NZ_ORIGIN_LONGITUDE.to_radians(),
            false_northing: NZTM_FALSE_NORTHING,
            false_easting: NZTM_FALSE_EASTING,
            scale_factor: NZTM_K0,
        }
    }

    pub fn engine(&self) -> &TransverseMercator {
        &self.engine
    }
}

impl Default for Nztm2000 {
    fn default() -> Self {
        Self::new()
    }
}

impl Projection for Nztm2000 {
    fn forward(&self, lon: f64, lat: f64) -> (f64, f64) {
        self.engine.forward(lon, lat)
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), Error> {
        self.engine.inverse(x, y)
    }
}

impl NamedSystem for Nztm2000 {
    fn info(&self) -> &'static SystemInfo {
        &INFO
    }
}
