use num::Float;

pub(crate) mod dms {
    /// Degrees per quarter turn
    pub const QD: i32 = 90;
    /// Degrees per half turn
    pub const HD: i32 = 2 * QD;
}

/// Evaluate a polynomial, highest order coefficient first
pub(crate) fn polyval<T: Float>(p: &[T], x: T) -> T {
    p
        .iter()
        .fold(T::zero(), |acc, &val| acc*x + val)
}

pub(crate) trait GeoMath {
    fn is_zero(&self) -> bool;
    fn conformal_factor(&self, e: Self) -> Self;
    fn is_latitude(&self) -> bool;
}

impl GeoMath for f64 {
    fn is_zero(&self) -> bool {
        self.abs() < f64::EPSILON
    }

    /// `((1 - e sin φ) / (1 + e sin φ))^(e/2)` for a latitude φ in radians. Shared by the
    /// conic's `t(φ)` and its inverse latitude solve.
    fn conformal_factor(&self, e: f64) -> f64 {
        let esin = e * self.sin();
        ((1. - esin) / (1. + esin)).powf(e / 2.)
    }

    /// Whether the value (degrees) lies in `[-90, 90]`
    fn is_latitude(&self) -> bool {
        (-f64::from(dms::QD)..=f64::from(dms::QD)).contains(self)
    }
}
