//! Named coordinate systems: fixed parameter bundles around one projection engine, with
//! their EPSG code and published extents.

use std::collections::HashMap;

use lazy_static::lazy_static;
use tracing::{debug, warn};

use crate::{Error, Projection};

pub mod nzcs2000;
pub mod nztm2000;

pub use nzcs2000::Nzcs2000;
pub use nztm2000::Nztm2000;

/// Constant metadata describing a named coordinate system.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SystemInfo {
    pub(crate) epsg: u32,
    pub(crate) name: &'static str,
    pub(crate) center: (f64, f64),
    pub(crate) bounds: [f64; 4],
    pub(crate) wgs84_bounds: [f64; 4],
}

impl SystemInfo {
    /// EPSG registry code
    pub fn epsg(&self) -> u32 {
        self.epsg
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Centre of the area of use in grid units `(x, y)`
    pub fn center(&self) -> (f64, f64) {
        self.center
    }

    /// Area of use in grid units `[x0, y0, x1, y1]`
    pub fn bounds(&self) -> [f64; 4] {
        self.bounds
    }

    /// Area of use in degrees `[min_lon, min_lat, max_lon, max_lat]`. A region crossing
    /// the antimeridian has `max_lon` above 180.
    pub fn wgs84_bounds(&self) -> [f64; 4] {
        self.wgs84_bounds
    }
}

/// A projection that is also a named, registered coordinate system.
pub trait NamedSystem: Projection {
    fn info(&self) -> &'static SystemInfo;
}

lazy_static! {
    static ref REGISTRY: HashMap<u32, &'static SystemInfo> = [&nzcs2000::INFO, &nztm2000::INFO]
        .into_iter()
        .map(|info| (info.epsg, info))
        .collect();
}

/// Looks up the metadata of a bundled system.
///
/// ```
/// use geoproj::systems;
///
/// assert_eq!(systems::info(2193).unwrap().name(), "NZGD2000 / New Zealand Transverse Mercator 2000");
/// assert!(systems::info(4326).is_none());
/// ```
pub fn info(epsg: u32) -> Option<&'static SystemInfo> {
    REGISTRY.get(&epsg).copied()
}

/// Builds the projection of a bundled system from its EPSG code.
///
/// # Errors
///
/// Returns [`Error::UnknownSystem`] if no bundled system has that code.
///
/// # Usage
///
/// ```
/// use geoproj::{Projection, systems};
///
/// let nzcs = systems::from_epsg(3851).unwrap();
/// let (x, y) = nzcs.forward(173.0, -41.0);
/// assert!((x - 3_000_000.0).abs() < 1e-6);
/// assert!((y - 7_000_000.0).abs() < 1e-6);
///
/// assert!(systems::from_epsg(27200).is_err());
/// ```
pub fn from_epsg(epsg: u32) -> Result<Box<dyn Projection>, Error> {
    let projection: Box<dyn Projection> = match epsg {
        nzcs2000::EPSG => Box::new(Nzcs2000::new()),
        nztm2000::EPSG => Box::new(Nztm2000::new()),
        _ => {
            warn!(epsg, "no bundled coordinate system");
            return Err(Error::UnknownSystem(format!("EPSG:{epsg}")));
        }
    };

    debug!(epsg, "resolved bundled coordinate system");
    Ok(projection)
}

/// Same as [`from_epsg`], from an `"EPSG:nnnn"` string. The prefix is case-insensitive and
/// may be left out.
///
/// # Errors
///
/// Returns [`Error::UnknownSystem`] if the string is not an EPSG code or names no bundled
/// system.
///
/// # Usage
///
/// ```
/// use geoproj::systems;
///
/// assert!(systems::parse_epsg("EPSG:2193").is_ok());
/// assert!(systems::parse_epsg("epsg:3851").is_ok());
/// assert!(systems::parse_epsg("2193").is_ok());
/// assert!(systems::parse_epsg("+proj=tmerc").is_err());
/// ```
pub fn parse_epsg(crs: &str) -> Result<Box<dyn Projection>, Error> {
    let crs = crs.trim();
    let code = crs
        .get(..5)
        .filter(|prefix| prefix.eq_ignore_ascii_case("epsg:"))
        .map_or(crs, |_| &crs[5..]);

    let epsg = code
        .parse::<u32>()
        .map_err(|_| Error::UnknownSystem(crs.to_owned()))?;

    from_epsg(epsg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_holds_every_bundled_system() {
        for epsg in [nzcs2000::EPSG, nztm2000::EPSG] {
            assert_eq!(info(epsg).unwrap().epsg(), epsg);
            assert!(from_epsg(epsg).is_ok());
        }
    }

    #[test]
    fn unknown_codes_are_reported() {
        assert!(matches!(from_epsg(0), Err(Error::UnknownSystem(code)) if code == "EPSG:0"));
        assert!(matches!(parse_epsg("EPSG:abc"), Err(Error::UnknownSystem(_))));
        assert!(matches!(parse_epsg(""), Err(Error::UnknownSystem(_))));
    }

    #[test]
    fn extents_are_ordered() {
        for info in REGISTRY.values() {
            let [x0, y0, x1, y1] = info.bounds();
            assert!(x0 < x1 && y0 < y1);
            let [lon0, lat0, lon1, lat1] = info.wgs84_bounds();
            assert!(lon0 < lon1 && lat0 < lat1);
            let (cx, cy) = info.center();
            assert!((x0..=x1).contains(&cx) && (y0..=y1).contains(&cy));
        }
    }
}
