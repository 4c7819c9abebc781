use crate::{Mat3, Scalar, Vec3};
use core::ops::{Add, Mul, Neg, Sub};

/// Quaternion xi + yj + zk + w.
///
/// Stored vector-part first (`x, y, z, w`) so that a pair of quaternions
/// lays out as eight contiguous scalars in interchange order. Not assumed to
/// be unit length; rotation-specific methods say so when they need it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat<S> {
    pub x: S,
    pub y: S,
    pub z: S,
    pub w: S,
}

impl<S: Scalar> Quat<S> {
    #[inline]
    pub fn new(x: S, y: S, z: S, w: S) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(S::ZERO, S::ZERO, S::ZERO, S::ONE)
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(S::ZERO, S::ZERO, S::ZERO, S::ZERO)
    }

    /// Builds `v.x i + v.y j + v.z k + w`.
    #[inline]
    pub fn from_vec_scalar(v: Vec3<S>, w: S) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Unit quaternion for a rotation of `angle` radians about unit `axis`.
    pub fn from_axis_angle(axis: Vec3<S>, angle: S) -> Self {
        let (s, c) = (angle * S::HALF).sin_cos();
        Self::from_vec_scalar(axis * s, c)
    }

    /// Vector (imaginary) part.
    #[inline]
    pub fn vector(&self) -> Vec3<S> {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Four-component Euclidean dot product.
    #[inline]
    pub fn dot(&self, other: &Quat<S>) -> S {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn norm_sq(&self) -> S {
        self.dot(self)
    }

    #[inline]
    pub fn norm(&self) -> S { self.norm_sq().sqrt() }

    pub fn normalize(&self) -> Self {
        *self * self.norm().recip()
    }

    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Hamilton product `self * other`.
    #[inline]
    pub fn mul_quat(&self, other: &Quat<S>) -> Quat<S> {
        Quat::new(
            self.w * other.x + self.x * other.w + self.y * other.z - self.z * other.y,
            self.w * other.y - self.x * other.z + self.y * other.w + self.z * other.x,
            self.w * other.z + self.x * other.y - self.y * other.x + self.z * other.w,
            self.w * other.w - self.x * other.x - self.y * other.y - self.z * other.z,
        )
    }

    /// Applies `f` to each component.
    #[inline]
    pub fn map(self, f: impl Fn(S) -> S) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z), f(self.w))
    }

    /// Rotation matrix (column-vector convention) of a unit quaternion.
    pub fn to_matrix(&self) -> Mat3<S> {
        let two = S::TWO;
        let Quat { x, y, z, w } = *self;

        Mat3::new(
            S::ONE - two * (y * y + z * z), two * (x * y - w * z),         two * (x * z + w * y),
            two * (x * y + w * z),         S::ONE - two * (x * x + z * z), two * (y * z - w * x),
            two * (x * z - w * y),         two * (y * z + w * x),         S::ONE - two * (x * x + y * y),
        )
    }
}

impl<S: Scalar> Default for Quat<S> {
    fn default() -> Self { Self::identity() }
}

impl<S: Scalar> Add for Quat<S> {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl<S: Scalar> Sub for Quat<S> {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl<S: Scalar> Neg for Quat<S> {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y, -self.z, -self.w) }
}

impl<S: Scalar> Mul<S> for Quat<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: S) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

// Quat * Quat (Hamilton)
impl<S: Scalar> Mul for Quat<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: Self) -> Self { self.mul_quat(&rhs) }
}
