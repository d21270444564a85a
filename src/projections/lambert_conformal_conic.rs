//! Lambert Conformal Conic with two standard parallels.
//!
//! Meridians are straight lines meeting at the projected pole, parallels are arcs of
//! circles centred on that point. Scale is true along both standard parallels.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use tracing::{debug, trace, warn};

use crate::{
    Ellipsoid, Error, Projection, ThisOrThat,
    constants::{LCC_MAX_ITERATIONS, LCC_MIN_CONE_CONSTANT, LCC_MIN_PARALLEL_SEPARATION, LCC_TOLERANCE},
    utility::GeoMath,
};

/// Defining parameters of a two-parallel Lambert Conformal Conic. Angles are in radians,
/// offsets in the unit of `semi_major_axis`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LambertConformalConicParams {
    pub semi_major_axis: f64,
    pub flattening: f64,
    pub first_standard_parallel: f64,
    pub second_standard_parallel: f64,
    pub origin_latitude: f64,
    pub origin_longitude: f64,
    pub false_northing: f64,
    pub false_easting: f64,
}

/// A configured Lambert Conformal Conic. The cone constant `n`, scale constant `F` and
/// origin radius `ρ0` are derived once in [`LambertConformalConic::new`].
#[derive(Clone, Copy, Debug)]
pub struct LambertConformalConic {
    params: LambertConformalConicParams,
    ellipsoid: Ellipsoid,
    e: f64,
    n: f64,
    f: f64,
    rho0: f64,
}

impl LambertConformalConic {
    /// Validates the parameters and derives the projection constants.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEllipsoid`] for a bad axis/flattening pair and
    /// [`Error::InvalidParameter`] when the angles are non-finite or out of range, the
    /// standard parallels coincide or sit on a pole, or they are placed symmetrically about
    /// the equator (which flattens the cone into a cylinder).
    ///
    /// # Usage
    ///
    /// ```
    /// use geoproj::{LambertConformalConic, LambertConformalConicParams, Projection};
    ///
    /// let lambert93 = LambertConformalConic::new(LambertConformalConicParams {
    ///     semi_major_axis: 6_378_137.0,
    ///     flattening: 1.0 / 298.257222101,
    ///     first_standard_parallel: 44_f64.to_radians(),
    ///     second_standard_parallel: 49_f64.to_radians(),
    ///     origin_latitude: 46.5_f64.to_radians(),
    ///     origin_longitude: 3_f64.to_radians(),
    ///     false_northing: 6_600_000.0,
    ///     false_easting: 700_000.0,
    /// }).unwrap();
    ///
    /// let (x, y) = lambert93.forward(3.0, 46.5);
    /// assert!((x - 700_000.0).abs() < 1e-6);
    /// assert!((y - 6_600_000.0).abs() < 1e-6);
    /// ```
    pub fn new(params: LambertConformalConicParams) -> Result<LambertConformalConic, Error> {
        let ellipsoid = Ellipsoid::new(params.semi_major_axis, params.flattening)?;

        for (name, value) in [
            ("first standard parallel", params.first_standard_parallel),
            ("second standard parallel", params.second_standard_parallel),
        ] {
            if !value.is_finite() || value.abs() >= FRAC_PI_2 {
                return Err(Error::InvalidParameter(format!(
                    "The {name} {value} rad must lie strictly between the poles."
                )));
            }
        }
        let separation = (params.first_standard_parallel - params.second_standard_parallel).abs();
        if separation < LCC_MIN_PARALLEL_SEPARATION {
            return Err(Error::InvalidParameter(
                "Standard parallels must differ to define a cone.".to_owned(),
            ));
        }
        if !params.origin_latitude.is_finite() || params.origin_latitude.abs() > FRAC_PI_2 {
            return Err(Error::InvalidParameter(format!(
                "Origin latitude {} rad outside of valid range [-π/2, π/2].",
                params.origin_latitude
            )));
        }
        check_finite("origin longitude", params.origin_longitude)?;
        check_finite("false northing", params.false_northing)?;
        check_finite("false easting", params.false_easting)?;

        let lcc = Self::derive(ellipsoid, params);
        if !lcc.n.is_finite() || lcc.n.abs() < LCC_MIN_CONE_CONSTANT {
            return Err(Error::InvalidParameter(format!(
                "Cone constant {} is degenerate; standard parallels symmetric about the equator?",
                lcc.n
            )));
        }
        if !lcc.f.is_finite() || !lcc.rho0.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "Derived constants are not finite (F = {}, ρ0 = {}).",
                lcc.f, lcc.rho0
            )));
        }

        Ok(lcc)
    }

    /// Derivation in dependency order e -> n -> F -> ρ0, without validation.
    pub(crate) fn derive(ellipsoid: Ellipsoid, params: LambertConformalConicParams) -> LambertConformalConic {
        let mut lcc = Self {
            params,
            ellipsoid,
            e: ellipsoid.e(),
            n: 0.,
            f: 0.,
            rho0: 0.,
        };

        let (phi1, phi2) = (params.first_standard_parallel, params.second_standard_parallel);
        lcc.n = (lcc.m(phi1).ln() - lcc.m(phi2).ln()) / (lcc.t(phi1).ln() - lcc.t(phi2).ln());
        lcc.f = lcc.m(phi1) / (lcc.n * lcc.t(phi1).powf(lcc.n));
        lcc.rho0 = lcc.rho(params.origin_latitude);

        debug!(n = lcc.n, f = lcc.f, rho0 = lcc.rho0, "derived lambert conformal conic constants");

        lcc
    }

    pub fn params(&self) -> &LambertConformalConicParams {
        &self.params
    }

    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// Cone constant `n`. Negative for cones opening towards the south pole.
    pub fn cone_constant(&self) -> f64 {
        self.n
    }

    /// Scale constant `F`
    pub fn scale_constant(&self) -> f64 {
        self.f
    }

    /// Radius `ρ0` of the origin parallel. Carries the sign of `n`.
    pub fn origin_radius(&self) -> f64 {
        self.rho0
    }

    fn m(&self, phi: f64) -> f64 {
        phi.cos() / (1. - self.ellipsoid.e2() * phi.sin().powi(2)).sqrt()
    }

    fn t(&self, phi: f64) -> f64 {
        (FRAC_PI_4 - phi / 2.).tan() / phi.conformal_factor(self.e)
    }

    fn rho(&self, phi: f64) -> f64 {
        self.ellipsoid.a() * self.f * self.t(phi).powf(self.n)
    }

    fn forward_rad(&self, lambda: f64, phi: f64) -> (f64, f64) {
        let theta = self.n * (lambda - self.params.origin_longitude);
        let rho = self.rho(phi);

        let x = self.params.false_easting + rho * theta.sin();
        let y = self.params.false_northing + self.rho0 - rho * theta.cos();

        (x, y)
    }

    fn inverse_rad(&self, x: f64, y: f64) -> Result<(f64, f64), Error> {
        let easting = x - self.params.false_easting;
        let rho0_n = self.rho0 - (y - self.params.false_northing);

        // A southern cone measures angle and radius from the flipped axes
        let south = self.n < 0.;
        let rho = easting.hypot(rho0_n);
        let lambda = if rho.is_zero() {
            // every meridian meets at the projected pole
            self.params.origin_longitude
        } else {
            let theta = south.ternary(-easting, easting).atan2(south.ternary(-rho0_n, rho0_n));
            self.params.origin_longitude + theta / self.n
        };

        let rho = south.ternary(-rho, rho);
        let t = (rho / (self.ellipsoid.a() * self.f)).powf(1. / self.n);

        let phi = self.latitude_from_t(t, LCC_MAX_ITERATIONS)?;

        Ok((lambda, phi))
    }

    /// Fixed-point solve of `φ = π/2 - 2 atan(t · ((1 - e sin φ)/(1 + e sin φ))^(e/2))`.
    fn latitude_from_t(&self, t: f64, max_iterations: usize) -> Result<f64, Error> {
        let mut phi = FRAC_PI_2 - 2. * t.atan();
        let mut step = f64::INFINITY;

        for iteration in 1..=max_iterations {
            let next = FRAC_PI_2 - 2. * (t * phi.conformal_factor(self.e)).atan();
            step = (next - phi).abs();
            phi = next;

            if step <= LCC_TOLERANCE {
                trace!(iterations = iteration, "lambert conformal conic latitude converged");
                return Ok(phi);
            }
        }

        warn!(t, step, "lambert conformal conic latitude did not converge");
        Err(Error::NoConvergence {
            iterations: max_iterations,
            residual: step,
        })
    }
}

impl Projection for LambertConformalConic {
    fn forward(&self, lon: f64, lat: f64) -> (f64, f64) {
        self.forward_rad(lon.to_radians(), lat.to_radians())
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), Error> {
        let (lambda, phi) = self.inverse_rad(x, y)?;

        Ok((lambda.to_degrees(), phi.to_degrees()))
    }
}

fn check_finite(name: &str, value: f64) -> Result<(), Error> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidParameter(format!("The {name} {value} is not finite.")))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn lambert93() -> LambertConformalConicParams {
        LambertConformalConicParams {
            semi_major_axis: 6_378_137.,
            flattening: 1. / 298.257_222_101,
            first_standard_parallel: 44_f64.to_radians(),
            second_standard_parallel: 49_f64.to_radians(),
            origin_latitude: 46.5_f64.to_radians(),
            origin_longitude: 3_f64.to_radians(),
            false_northing: 6_600_000.,
            false_easting: 700_000.,
        }
    }

    fn nz_continental_shelf() -> LambertConformalConicParams {
        LambertConformalConicParams {
            semi_major_axis: 6_378_137.,
            flattening: 1. / 298.257_222_101,
            first_standard_parallel: (-37.5_f64).to_radians(),
            second_standard_parallel: (-44.5_f64).to_radians(),
            origin_latitude: (-41_f64).to_radians(),
            origin_longitude: 173_f64.to_radians(),
            false_northing: 7_000_000.,
            false_easting: 3_000_000.,
        }
    }

    #[test]
    fn northern_cone_roundtrip() {
        let lcc = LambertConformalConic::new(lambert93()).unwrap();
        assert!(lcc.cone_constant() > 0.);

        for (lon, lat) in [(3.0, 46.5), (2.35, 48.86), (-1.55, 47.22), (7.75, 48.58)] {
            let (x, y) = lcc.forward(lon, lat);
            let (lon2, lat2) = lcc.inverse(x, y).unwrap();
            assert_abs_diff_eq!(lon2, lon, epsilon = 1e-9);
            assert_abs_diff_eq!(lat2, lat, epsilon = 1e-9);
        }
    }

    #[test]
    fn southern_cone_constants() {
        let lcc = LambertConformalConic::new(nz_continental_shelf()).unwrap();
        assert_abs_diff_eq!(lcc.cone_constant(), -0.656_474_172_359_6, epsilon = 1e-12);
        assert_abs_diff_eq!(lcc.scale_constant(), -1.919_462_066_344_2, epsilon = 1e-12);
        assert_abs_diff_eq!(lcc.origin_radius(), -7_329_506.805_915, epsilon = 1e-3);
    }

    #[test]
    fn parallel_order_does_not_matter() {
        let mut swapped = nz_continental_shelf();
        std::mem::swap(&mut swapped.first_standard_parallel, &mut swapped.second_standard_parallel);

        let a = LambertConformalConic::new(nz_continental_shelf()).unwrap();
        let b = LambertConformalConic::new(swapped).unwrap();
        assert_abs_diff_eq!(a.cone_constant(), b.cone_constant(), epsilon = 1e-14);

        let (xa, ya) = a.forward(170.0, -45.0);
        let (xb, yb) = b.forward(170.0, -45.0);
        assert_abs_diff_eq!(xa, xb, epsilon = 1e-6);
        assert_abs_diff_eq!(ya, yb, epsilon = 1e-6);
    }

    #[test]
    fn origin_maps_to_false_origin() {
        let lcc = LambertConformalConic::new(nz_continental_shelf()).unwrap();
        let (x, y) = lcc.forward(173.0, -41.0);
        assert_abs_diff_eq!(x, 3_000_000., epsilon = 1e-6);
        assert_abs_diff_eq!(y, 7_000_000., epsilon = 1e-6);
    }

    #[test]
    fn rejects_degenerate_parallels() {
        let mut params = lambert93();
        params.second_standard_parallel = params.first_standard_parallel;
        assert!(matches!(LambertConformalConic::new(params), Err(Error::InvalidParameter(_))));

        let mut params = lambert93();
        params.second_standard_parallel = -params.first_standard_parallel;
        assert!(matches!(LambertConformalConic::new(params), Err(Error::InvalidParameter(_))));

        let mut params = lambert93();
        params.first_standard_parallel = FRAC_PI_2;
        assert!(matches!(LambertConformalConic::new(params), Err(Error::InvalidParameter(_))));

        let mut params = lambert93();
        params.origin_latitude = f64::NAN;
        assert!(matches!(LambertConformalConic::new(params), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn rejects_nearly_degenerate_cones() {
        // almost symmetric about the equator, n collapses towards zero
        let mut params = lambert93();
        params.first_standard_parallel = 0.3;
        params.second_standard_parallel = -0.3 + 1e-12;
        assert!(matches!(LambertConformalConic::new(params), Err(Error::InvalidParameter(_))));

        // almost coincident
        let mut params = lambert93();
        params.second_standard_parallel = params.first_standard_parallel + 1e-12;
        assert!(matches!(LambertConformalConic::new(params), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn projected_pole_returns_origin_meridian() {
        let mut params = nz_continental_shelf();
        params.false_northing = 0.;
        params.false_easting = 0.;
        let lcc = LambertConformalConic::new(params).unwrap();

        let (lon, lat) = lcc.inverse(0., lcc.origin_radius()).unwrap();
        assert_abs_diff_eq!(lon, 173., epsilon = 1e-12);
        assert_abs_diff_eq!(lat, -90., epsilon = 1e-9);
    }

    #[test]
    fn rejects_invalid_ellipsoid() {
        let mut params = lambert93();
        params.flattening = 1.5;
        assert!(matches!(LambertConformalConic::new(params), Err(Error::InvalidEllipsoid(_))));
    }

    #[test]
    fn bounded_solve_reports_non_convergence() {
        let lcc = LambertConformalConic::new(nz_continental_shelf()).unwrap();
        let t = lcc.t((-45_f64).to_radians());

        assert!(matches!(
            lcc.latitude_from_t(t, 1),
            Err(Error::NoConvergence { iterations: 1, .. })
        ));
        assert_abs_diff_eq!(
            lcc.latitude_from_t(t, LCC_MAX_ITERATIONS).unwrap(),
            (-45_f64).to_radians(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn non_finite_input_fails_instead_of_spinning() {
        let lcc = LambertConformalConic::new(nz_continental_shelf()).unwrap();
        assert!(matches!(
            lcc.inverse(f64::NAN, 7_000_000.),
            Err(Error::NoConvergence { .. })
        ));
    }
}
