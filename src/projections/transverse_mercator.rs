//! Transverse Mercator using Redfearn's series.
//!
//! The forward map expands northing to 8th and easting to 7th order in the longitude
//! offset from the central meridian. The inverse recovers a footpoint latitude from the
//! meridian arc in closed form, then corrects latitude and longitude with series in the
//! normalised easting. Accuracy is limited by truncation, which is fine within a few
//! degrees of the central meridian.

use std::f64::consts::FRAC_PI_2;

use tracing::debug;

use crate::{Ellipsoid, Error, Projection, utility::polyval};

// ================================
// Meridian arc coefficients
// ================================

// A0, polynomial in e2 of order 3
const A0_COEFF: [f64; 4] = [-5. / 256., -3. / 64., -1. / 4., 1.];
// A2/e2, polynomial in e2 of order 2
const A2_COEFF: [f64; 3] = [45. / 1024., 3. / 32., 3. / 8.];
// A4/e4, polynomial in e2 of order 1
const A4_COEFF: [f64; 2] = [45. / 1024., 15. / 256.];
// A6/e6
const A6_COEFF: [f64; 1] = [35. / 3072.];

// ================================
// Footpoint latitude coefficients
// ================================

// Rectifying radius G/(a(1-n)(1-n^2)), polynomial in n2 of order 2
const G_COEFF: [f64; 3] = [225. / 64., 9. / 4., 1.];
// sin(2σ) term / n, polynomial in n2 of order 1
const FP2_COEFF: [f64; 2] = [-27. / 32., 3. / 2.];
// sin(4σ) term / n2, polynomial in n2 of order 1
const FP4_COEFF: [f64; 2] = [-55. / 32., 21. / 16.];
// sin(6σ) term / n3
const FP6_COEFF: [f64; 1] = [151. / 96.];
// sin(8σ) term / n4
const FP8_COEFF: [f64; 1] = [1097. / 512.];

/// Defining parameters of a Transverse Mercator. Angles are in radians, offsets in the
/// unit of `semi_major_axis`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransverseMercatorParams {
    pub semi_major_axis: f64,
    pub flattening: f64,
    pub origin_latitude: f64,
    pub origin_longitude: f64,
    pub false_northing: f64,
    pub false_easting: f64,
    /// Central meridian scale factor `k0`
    pub scale_factor: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct TransverseMercator {
    params: TransverseMercatorParams,
    ellipsoid: Ellipsoid,
    // meridian arc coefficients A0, A2, A4, A6
    arc: [f64; 4],
    // meridian arc at the origin latitude
    m0: f64,
    // rectifying radius
    g: f64,
    // footpoint series coefficients for sin 2σ .. sin 8σ
    footpoint: [f64; 4],
}

impl TransverseMercator {
    /// Validates the parameters and derives the series constants.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEllipsoid`] for a bad axis/flattening pair and
    /// [`Error::InvalidParameter`] for a non-positive or non-finite scale factor, an origin
    /// latitude outside `[-π/2, π/2]`, or a non-finite longitude/false offset.
    ///
    /// # Usage
    ///
    /// ```
    /// use geoproj::{Projection, TransverseMercator, TransverseMercatorParams};
    ///
    /// // UTM zone 33N
    /// let utm33 = TransverseMercator::new(TransverseMercatorParams {
    ///     semi_major_axis: 6_378_137.0,
    ///     flattening: 1.0 / 298.257223563,
    ///     origin_latitude: 0.0,
    ///     origin_longitude: 15_f64.to_radians(),
    ///     false_northing: 0.0,
    ///     false_easting: 500_000.0,
    ///     scale_factor: 0.9996,
    /// }).unwrap();
    ///
    /// let (e, n) = utm33.forward(15.0, 52.0);
    /// assert!((e - 500_000.0).abs() < 1e-6);
    /// assert!(n > 5_760_000.0 && n < 5_762_000.0);
    /// ```
    pub fn new(params: TransverseMercatorParams) -> Result<TransverseMercator, Error> {
        let ellipsoid = Ellipsoid::new(params.semi_major_axis, params.flattening)?;

        if !params.scale_factor.is_finite() || params.scale_factor <= 0. {
            return Err(Error::InvalidParameter(format!(
                "Scale factor {} must be finite and positive.",
                params.scale_factor
            )));
        }
        if !params.origin_latitude.is_finite() || params.origin_latitude.abs() > FRAC_PI_2 {
            return Err(Error::InvalidParameter(format!(
                "Origin latitude {} rad outside of valid range [-π/2, π/2].",
                params.origin_latitude
            )));
        }
        for (name, value) in [
            ("origin longitude", params.origin_longitude),
            ("false northing", params.false_northing),
            ("false easting", params.false_easting),
        ] {
            if !value.is_finite() {
                return Err(Error::InvalidParameter(format!("The {name} {value} is not finite.")));
            }
        }

        Ok(Self::derive(ellipsoid, params))
    }

    /// Derives the series constants without validation.
    pub(crate) fn derive(ellipsoid: Ellipsoid, params: TransverseMercatorParams) -> TransverseMercator {
        let e2 = ellipsoid.e2();
        let arc = [
            polyval(&A0_COEFF, e2),
            e2 * polyval(&A2_COEFF, e2),
            ellipsoid.e4() * polyval(&A4_COEFF, e2),
            ellipsoid.e6() * polyval(&A6_COEFF, e2),
        ];

        let n = ellipsoid.n();
        let n2 = n.powi(2);
        let g = ellipsoid.a() * (1. - n) * (1. - n2) * polyval(&G_COEFF, n2);
        let footpoint = [
            n * polyval(&FP2_COEFF, n2),
            n2 * polyval(&FP4_COEFF, n2),
            n.powi(3) * polyval(&FP6_COEFF, n2),
            n2.powi(2) * polyval(&FP8_COEFF, n2),
        ];

        let mut tm = Self {
            params,
            ellipsoid,
            arc,
            m0: 0.,
            g,
            footpoint,
        };
        tm.m0 = tm.meridian_arc(params.origin_latitude);

        debug!(
            a0 = arc[0], a2 = arc[1], a4 = arc[2], a6 = arc[3], m0 = tm.m0,
            "derived transverse mercator constants"
        );

        tm
    }

    pub fn params(&self) -> &TransverseMercatorParams {
        &self.params
    }

    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// Length of the meridian from the equator to latitude `phi` (radians).
    ///
    /// ```
    /// use geoproj::systems::Nztm2000;
    ///
    /// let quarter = Nztm2000::new().engine().meridian_arc(std::f64::consts::FRAC_PI_2);
    /// assert!((quarter - 10_001_965.729).abs() < 1e-3);
    /// ```
    pub fn meridian_arc(&self, phi: f64) -> f64 {
        let [a0, a2, a4, a6] = self.arc;

        self.ellipsoid.a()
            * (a0 * phi - a2 * (2. * phi).sin() + a4 * (4. * phi).sin() - a6 * (6. * phi).sin())
    }

    // meridian radius of curvature
    fn rho(&self, sin_phi: f64) -> f64 {
        let e2 = self.ellipsoid.e2();
        self.ellipsoid.a() * (1. - e2) / (1. - e2 * sin_phi.powi(2)).powf(1.5)
    }

    // prime vertical radius of curvature
    fn nu(&self, sin_phi: f64) -> f64 {
        self.ellipsoid.a() / (1. - self.ellipsoid.e2() * sin_phi.powi(2)).sqrt()
    }

    /// Latitude whose meridian arc equals `m`, from the rectifying latitude series.
    fn footpoint_latitude(&self, m: f64) -> f64 {
        let sigma = m / self.g;

        self.footpoint
            .iter()
            .zip([2., 4., 6., 8.])
            .fold(sigma, |phi, (c, k)| phi + c * (k * sigma).sin())
    }

    fn forward_rad(&self, lambda: f64, phi: f64) -> (f64, f64) {
        let k0 = self.params.scale_factor;

        let t = phi.tan();
        let t2 = t.powi(2);
        let t4 = t2.powi(2);
        let t6 = t4 * t2;

        let w = lambda - self.params.origin_longitude;
        let w2 = w.powi(2);
        let w4 = w2.powi(2);
        let w6 = w4 * w2;
        let w8 = w4.powi(2);

        let (sin_phi, cos_phi) = phi.sin_cos();
        let nu = self.nu(sin_phi);
        let psi = nu / self.rho(sin_phi);
        let psi2 = psi.powi(2);
        let psi3 = psi2 * psi;
        let psi4 = psi2.powi(2);

        let c2 = cos_phi.powi(2);
        let c3 = cos_phi.powi(3);
        let c4 = c2.powi(2);
        let c5 = c4 * cos_phi;
        let c6 = c4 * c2;
        let c7 = c6 * cos_phi;

        let nu_sin = nu * sin_phi;
        let north_terms = w2 * nu_sin * cos_phi / 2.
            + w4 * nu_sin * c3 * (4. * psi2 + psi - t2) / 24.
            + w6 * nu_sin * c5
                * (8. * psi4 * (11. - 24. * t2) - 28. * psi3 * (1. - 6. * t2) + psi2 * (1. - 32. * t2)
                    - 2. * psi * t2
                    + t4)
                / 720.
            + w8 * nu_sin * c7 * (1385. - 3111. * t2 + 543. * t4 - t6) / 40320.;

        let east_terms = w2 * c2 * (psi - t2) / 6.
            + w4 * c4 * (4. * psi3 * (1. - 6. * t2) + psi2 * (1. + 8. * t2) - 2. * psi * t2 + t4) / 120.
            + w6 * c6 * (61. - 479. * t2 + 179. * t4 - t6) / 5040.;

        let northing = self.params.false_northing + k0 * (self.meridian_arc(phi) - self.m0 + north_terms);
        let easting = self.params.false_easting + k0 * nu * w * cos_phi * (1. + east_terms);

        (easting, northing)
    }

    fn inverse_rad(&self, x: f64, y: f64) -> (f64, f64) {
        let k0 = self.params.scale_factor;

        let m = self.m0 + (y - self.params.false_northing) / k0;
        let phi_d = self.footpoint_latitude(m);

        let (sin_d, cos_d) = phi_d.sin_cos();
        let rho_d = self.rho(sin_d);
        let nu_d = self.nu(sin_d);

        let t = phi_d.tan();
        let t2 = t.powi(2);
        let t4 = t2.powi(2);
        let t6 = t4 * t2;

        let psi = nu_d / rho_d;
        let psi2 = psi.powi(2);
        let psi3 = psi2 * psi;
        let psi4 = psi2.powi(2);

        let easting = x - self.params.false_easting;
        let x1 = easting / (k0 * nu_d);
        let x3 = x1.powi(3);
        let x5 = x1.powi(5);
        let x7 = x1.powi(7);

        let lat_scale = t * easting / (k0 * rho_d);
        let lat_t1 = lat_scale * x1 / 2.;
        let lat_t2 = lat_scale * x3 * (-4. * psi2 + 9. * psi * (1. - t2) + 12. * t2) / 24.;
        let lat_t3 = lat_scale * x5
            * (8. * psi4 * (11. - 24. * t2) - 12. * psi3 * (21. - 71. * t2)
                + 15. * psi2 * (15. - 98. * t2 + 15. * t4)
                + 180. * psi * (5. * t2 - 3. * t4)
                + 360. * t4)
            / 720.;
        let lat_t4 = lat_scale * x7 * (1385. + 3633. * t2 + 4095. * t4 + 1575. * t6) / 40320.;

        let phi = phi_d - lat_t1 + lat_t2 - lat_t3 + lat_t4;

        let sec_d = cos_d.recip();
        let lon_t1 = x1 * sec_d;
        let lon_t2 = x3 * sec_d * (psi + 2. * t2) / 6.;
        let lon_t3 = x5 * sec_d * (-4. * psi3 * (1. - 6. * t2) + psi2 * (9. - 68. * t2) + 72. * psi * t2 + 24. * t4) / 120.;
        let lon_t4 = x7 * sec_d * (61. + 662. * t2 + 1320. * t4 + 720. * t6) / 5040.;

        let lambda = self.params.origin_longitude + lon_t1 - lon_t2 + lon_t3 - lon_t4;

        (lambda, phi)
    }
}

impl Projection for TransverseMercator {
    fn forward(&self, lon: f64, lat: f64) -> (f64, f64) {
        self.forward_rad(lon.to_radians(), lat.to_radians())
    }

    /// Closed-form series inverse; never fails.
    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), Error> {
        let (lambda, phi) = self.inverse_rad(x, y);

        Ok((lambda.to_degrees(), phi.to_degrees()))
    }
}
