// GRS80 semi-major axis a
pub(crate) const GRS80_A: f64 = 6_378_137.;
// GRS80 flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const GRS80_F: f64 = 1.0 / 298.257222101;

// WGS84 semi-major axis a
pub(crate) const WGS84_A: f64 = 6_378_137.;
// WGS84 flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const WGS84_F: f64 = 1.0 / 298.257223563;

/// Largest latitude change (radians) still counted as a moving LCC inverse solve.
/// Roughly 2e-5 arc-seconds.
pub(crate) const LCC_TOLERANCE: f64 = 1.0e-9;

/// Iteration cap for the LCC inverse latitude solve. Well-formed parameters settle in
/// under 10.
pub(crate) const LCC_MAX_ITERATIONS: usize = 50;

/// Smallest separation (radians) between LCC standard parallels, about 0.6 mm on the ground.
pub(crate) const LCC_MIN_PARALLEL_SEPARATION: f64 = 1.0e-10;

/// Smallest magnitude of the LCC cone constant `n`. Below this the cone is a cylinder
/// and `F` blows up.
pub(crate) const LCC_MIN_CONE_CONSTANT: f64 = 1.0e-10;

// NZGD2000 based systems share the same origin meridian
pub(crate) const NZ_ORIGIN_LONGITUDE: f64 = 173.0;

// NZCS2000 Lambert parameters
pub(crate) const NZCS_FIRST_PARALLEL: f64 = -37.5;
pub(crate) const NZCS_SECOND_PARALLEL: f64 = -44.5;
pub(crate) const NZCS_ORIGIN_LATITUDE: f64 = -41.0;
pub(crate) const NZCS_FALSE_NORTHING: f64 = 7_000_000.;
pub(crate) const NZCS_FALSE_EASTING: f64 = 3_000_000.;

// NZTM2000 Transverse Mercator parameters
pub(crate) const NZTM_ORIGIN_LATITUDE: f64 = 0.0;
pub(crate) const NZTM_FALSE_NORTHING: f64 = 10_000_000.;
pub(crate) const NZTM_FALSE_EASTING: f64 = 1_600_000.;
pub(crate) const NZTM_K0: f64 = 9996.0 / 10_000.;
