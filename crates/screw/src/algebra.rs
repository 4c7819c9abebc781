//! Ring operations, norms, conjugation, inversion and tolerant comparison.

use core::ops::{Add, Mul, Neg, Sub};

use screw_math::Scalar;

use crate::dual_quat::DualQuat;
use crate::tolerance;

// Dual number rules, with quaternion coefficients:
// (q + εq₀) + (p + εp₀) = (q+p) + ε(q₀+p₀)
// (q + εq₀) * (p + εp₀) = qp + ε(qp₀ + q₀p)

impl<S: Scalar> Add for DualQuat<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_parts(self.real + rhs.real, self.dual + rhs.dual)
    }
}

impl<S: Scalar> Sub for DualQuat<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_parts(self.real - rhs.real, self.dual - rhs.dual)
    }
}

impl<S: Scalar> Neg for DualQuat<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_parts(-self.real, -self.dual)
    }
}

impl<S: Scalar> Mul<S> for DualQuat<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Self::from_parts(self.real * rhs, self.dual * rhs)
    }
}

// Scalar * DualQuat (commutative)
impl Mul<DualQuat<f64>> for f64 {
    type Output = DualQuat<f64>;
    #[inline]
    fn mul(self, rhs: DualQuat<f64>) -> DualQuat<f64> { rhs * self }
}

impl Mul<DualQuat<f32>> for f32 {
    type Output = DualQuat<f32>;
    #[inline]
    fn mul(self, rhs: DualQuat<f32>) -> DualQuat<f32> { rhs * self }
}

/// Composition. Not commutative: in `a * b`, `b` acts first.
impl<S: Scalar> Mul for DualQuat<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_parts(
            self.real * rhs.real,
            self.real * rhs.dual + self.dual * rhs.real,
        )
    }
}

impl<S: Scalar> DualQuat<S> {
    /// Dot product of the real parts only.
    #[inline]
    pub fn dot(&self, other: &DualQuat<S>) -> S {
        self.real.dot(&other.real)
    }

    /// Squared norm of the real part, `‖real‖²`.
    ///
    /// Note this is *not* a square root: [`DualQuat::normalize`] and callers
    /// comparing against 1 depend on the squared value.
    #[inline]
    pub fn length(&self) -> S {
        self.dot(self)
    }

    /// `(‖real‖², ‖dual‖²)`.
    #[inline]
    pub fn length_squared(&self) -> (S, S) {
        (self.real.norm_sq(), self.dual.norm_sq())
    }

    /// Scales every component by `1 / length()`, after snapping a near-zero
    /// length to exactly zero. A zero dual quaternion gives non-finite output.
    pub fn normalize(&self) -> Self {
        let length = tolerance::adjust(self.length());
        *self * length.recip()
    }

    /// Quaternion conjugate applied to `real` and `dual` independently.
    #[inline]
    pub fn conjugated(&self) -> Self {
        Self::from_parts(self.real.conjugate(), self.dual.conjugate())
    }

    /// In-place [`DualQuat::conjugated`].
    #[inline]
    pub fn conjugate(&mut self) {
        *self = self.conjugated();
    }

    /// Multiplicative inverse `r⁻¹ − ε·r⁻¹·d·r⁻¹` with `r⁻¹ = r̄ / ‖r‖²`.
    ///
    /// For a unit dual quaternion this equals [`DualQuat::conjugated`].
    /// A zero `real` part gives non-finite output.
    pub fn inverse(&self) -> Self {
        let (real_len_sq, _) = self.length_squared();
        let real_inv = self.real.conjugate() * real_len_sq.recip();
        let dual_inv = -(real_inv * self.dual * real_inv);
        Self::from_parts(real_inv, dual_inv)
    }

    /// In-place [`DualQuat::inverse`].
    #[inline]
    pub fn invert(&mut self) {
        *self = self.inverse();
    }

    /// Every component with `|v| < ZERO_TOLERANCE` snapped to zero.
    #[inline]
    pub fn adjusted(&self) -> Self {
        Self::from_parts(
            self.real.map(tolerance::adjust),
            self.dual.map(tolerance::adjust),
        )
    }

    /// In-place [`DualQuat::adjusted`].
    #[inline]
    pub fn adjust(&mut self) {
        *self = self.adjusted();
    }

    /// Number of components differing by more than `precision`, taking the
    /// better of `other` and `-other` (both encode the same transformation).
    /// Zero means equal up to sign. A non-finite difference always counts as
    /// a mismatch, so NaN never compares equal.
    pub fn compare(&self, other: &DualQuat<S>, precision: S) -> usize {
        let mismatch = |d: S| !d.is_finite() || d.abs() > precision;
        let (a, b) = (self.to_array(), other.to_array());
        let mut direct = 0;
        let mut negated = 0;
        for (x, y) in a.iter().zip(b.iter()) {
            if mismatch(*x - *y) {
                direct += 1;
            }
            if mismatch(*x + *y) {
                negated += 1;
            }
        }
        direct.min(negated)
    }

    /// `true` when all components are finite.
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }

    /// `(‖real‖² − 1, real · dual)`, both ~0 for a rigid transformation.
    pub fn unit_residuals(&self) -> (S, S) {
        (self.real.norm_sq() - S::ONE, self.real.dot(&self.dual))
    }
}
