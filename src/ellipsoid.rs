use crate::{Error, constants::{GRS80_A, GRS80_F, WGS84_A, WGS84_F}};

/// Reference ellipsoid, defined by its semi-major axis and flattening, along with the
/// derived shape constants both projection engines need.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "EllipsoidDef", into = "EllipsoidDef"))]
pub struct Ellipsoid {
    a: f64,
    f: f64,
    b: f64,
    e2: f64,
    e4: f64,
    e6: f64,
    n: f64,
}

impl Ellipsoid {
    /// GRS80, the ellipsoid of NZGD2000.
    pub const GRS80: Ellipsoid = Ellipsoid::derive(GRS80_A, GRS80_F);
    /// WGS84.
    pub const WGS84: Ellipsoid = Ellipsoid::derive(WGS84_A, WGS84_F);

    /// Derivation without any checks, only for the known-good constants above and for
    /// callers that already validated `a` and `f`.
    const fn derive(a: f64, f: f64) -> Ellipsoid {
        let b = a * (1. - f);
        let e2 = 2. * f - f * f;
        let e4 = e2 * e2;
        Self {
            a,
            f,
            b,
            e2,
            e4,
            e6: e4 * e2,
            n: (a - b) / (a + b),
        }
    }

    /// Tries to create an ellipsoid from its semi-major axis `a` and flattening `f`.
    /// * `a` must be finite and positive
    /// * `f` must be in the range `[0, 1)`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEllipsoid`] if either value is out of range.
    ///
    /// # Usage
    ///
    /// ```
    /// use geoproj::Ellipsoid;
    ///
    /// let grs80 = Ellipsoid::new(6_378_137.0, 1.0 / 298.257222101).unwrap();
    /// assert!((grs80.e() - 0.0818191910428).abs() < 1e-12);
    ///
    /// assert!(Ellipsoid::new(-1.0, 0.0).is_err());
    /// assert!(Ellipsoid::new(6_378_137.0, 1.0).is_err());
    /// ```
    pub fn new(a: f64, f: f64) -> Result<Ellipsoid, Error> {
        if !a.is_finite() || a <= 0. {
            Err(Error::InvalidEllipsoid(format!("Semi-major axis {a} must be finite and positive.")))
        } else if !(0_f64..1_f64).contains(&f) {
            Err(Error::InvalidEllipsoid(format!("Flattening {f} outside of valid range [0, 1).")))
        } else {
            Ok(Self::derive(a, f))
        }
    }

    /// Semi-major axis
    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Flattening
    #[inline]
    pub fn f(&self) -> f64 {
        self.f
    }

    /// Semi-minor axis, `a(1 - f)`
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// First eccentricity, `sqrt(2f - f²)`
    #[inline]
    pub fn e(&self) -> f64 {
        self.e2.sqrt()
    }

    #[inline]
    pub fn e2(&self) -> f64 {
        self.e2
    }

    #[inline]
    pub fn e4(&self) -> f64 {
        self.e4
    }

    #[inline]
    pub fn e6(&self) -> f64 {
        self.e6
    }

    /// Third flattening, `(a - b) / (a + b)`
    #[inline]
    pub fn n(&self) -> f64 {
        self.n
    }
}

/// Serialized form: only the defining pair, re-validated on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct EllipsoidDef {
    #[serde(alias = "semi_major_axis")]
    a: f64,
    #[serde(alias = "flattening")]
    f: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<EllipsoidDef> for Ellipsoid {
    type Error = Error;

    fn try_from(value: EllipsoidDef) -> Result<Self, Self::Error> {
        Ellipsoid::new(value.a, value.f)
    }
}

#[cfg(feature = "serde")]
impl From<Ellipsoid> for EllipsoidDef {
    fn from(value: Ellipsoid) -> Self {
        Self { a: value.a, f: value.f }
    }
}
