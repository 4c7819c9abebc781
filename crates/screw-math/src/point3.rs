use crate::{Scalar, Vec3};
use core::ops::Sub;

/// A position in 3D space. Distinct from `Vec3` so that a point lifted into a
/// dual quaternion cannot be confused with a translation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3<S> {
    pub x: S,
    pub y: S,
    pub z: S,
}

impl<S: Scalar> Point3<S> {
    #[inline]
    pub fn new(x: S, y: S, z: S) -> Self { Self { x, y, z } }

    #[inline]
    pub fn origin() -> Self { Self::new(S::ZERO, S::ZERO, S::ZERO) }

    #[inline]
    pub fn to_vec(self) -> Vec3<S> { Vec3::new(self.x, self.y, self.z) }

    #[inline]
    pub fn from_vec(v: Vec3<S>) -> Self { Self::new(v.x, v.y, v.z) }

    #[inline]
    pub fn distance(self, other: Self) -> S { (other - self).norm() }
}

impl<S: Scalar> Default for Point3<S> {
    fn default() -> Self { Self::origin() }
}

impl<S: Scalar> From<Vec3<S>> for Point3<S> {
    #[inline]
    fn from(v: Vec3<S>) -> Self { Self::from_vec(v) }
}

// Point - Point = Vec
impl<S: Scalar> Sub for Point3<S> {
    type Output = Vec3<S>;
    #[inline] fn sub(self, rhs: Self) -> Vec3<S> {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<S: Scalar> core::fmt::Display for Point3<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Point3({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_difference_and_distance() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let q = Point3::from_vec(Vec3::new(4.0, 4.0, 4.0));
        assert_eq!(q - p, Vec3::new(3.0, 2.0, 1.0));
        assert_eq!(p.distance(p), 0.0);
        assert!((p.distance(Point3::new(4.0, 6.0, 3.0)) - 5.0).abs() < 1e-12);
    }
}
