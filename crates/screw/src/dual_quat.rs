use core::ops::{Index, IndexMut};

use screw_math::{Mat3, Point3, Quat, Scalar, Vec3};
use tracing::debug;

use crate::error::{DualQuatError, Result};
use crate::tolerance;

/// Dual quaternion `real + ε·dual` with `ε² = 0`.
///
/// One storage layout, several interpretations:
/// - transformation: unit `real` (rotation) with `real · dual = 0`
/// - point: `real` = identity, `dual.xyz` = coordinates
/// - line: `real.xyz` = direction, `dual.xyz` = Plücker moment
/// - plane: `real.xyz` = normal, `dual.w` = signed distance from origin
///
/// Components index as `real.x, real.y, real.z, real.w, dual.x, dual.y,
/// dual.z, dual.w` (`0..8`), which is also the interchange order.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DualQuat<S> {
    pub real: Quat<S>,
    pub dual: Quat<S>,
}

/// Number of scalar components.
pub const COMPONENTS: usize = 8;

impl<S: Scalar> DualQuat<S> {
    /// Smart constructor: `real` is normalized to unit length, `dual` is
    /// stored as given. Use [`DualQuat::from_parts`] to keep `real` verbatim.
    #[inline]
    pub fn new(real: Quat<S>, dual: Quat<S>) -> Self {
        Self { real: real.normalize(), dual }
    }

    /// Raw constructor, no normalization.
    #[inline]
    pub fn from_parts(real: Quat<S>, dual: Quat<S>) -> Self {
        Self { real, dual }
    }

    /// All eight components zero. Not a valid transformation.
    #[inline]
    pub fn zero() -> Self {
        Self::from_parts(Quat::zero(), Quat::zero())
    }

    /// The identity transformation.
    #[inline]
    pub fn identity() -> Self {
        Self::from_parts(Quat::identity(), Quat::zero())
    }

    /// The point (0, 0, 0).
    #[inline]
    pub fn origin_point() -> Self {
        Self::point(Point3::origin())
    }

    /// Build from exactly eight components in index order, stored verbatim.
    pub fn from_slice(values: &[S]) -> Result<Self> {
        if values.len() != COMPONENTS {
            return Err(DualQuatError::InvalidLength {
                expected: COMPONENTS,
                actual: values.len(),
            });
        }
        Ok(Self::from_parts(
            Quat::new(values[0], values[1], values[2], values[3]),
            Quat::new(values[4], values[5], values[6], values[7]),
        ))
    }

    #[inline]
    pub fn to_array(&self) -> [S; COMPONENTS] {
        let (r, d) = (self.real, self.dual);
        [r.x, r.y, r.z, r.w, d.x, d.y, d.z, d.w]
    }

    fn component(&self, index: usize) -> Option<&S> {
        Some(match index {
            0 => &self.real.x,
            1 => &self.real.y,
            2 => &self.real.z,
            3 => &self.real.w,
            4 => &self.dual.x,
            5 => &self.dual.y,
            6 => &self.dual.z,
            7 => &self.dual.w,
            _ => return None,
        })
    }

    fn component_mut(&mut self, index: usize) -> Option<&mut S> {
        Some(match index {
            0 => &mut self.real.x,
            1 => &mut self.real.y,
            2 => &mut self.real.z,
            3 => &mut self.real.w,
            4 => &mut self.dual.x,
            5 => &mut self.dual.y,
            6 => &mut self.dual.z,
            7 => &mut self.dual.w,
            _ => return None,
        })
    }

    /// Checked component read.
    pub fn get(&self, index: usize) -> Result<S> {
        self.component(index)
            .copied()
            .ok_or(DualQuatError::IndexOutOfRange(index))
    }

    /// Checked component write.
    pub fn set(&mut self, index: usize, value: S) -> Result<()> {
        let slot = self
            .component_mut(index)
            .ok_or(DualQuatError::IndexOutOfRange(index))?;
        *slot = value;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Factories
    // ------------------------------------------------------------------

    /// Rotation of `angle` radians about the line through `point` along unit `axis`.
    pub fn rotation(angle: S, axis: Vec3<S>, point: Point3<S>) -> Self {
        Self::rotation_plucker(angle, axis, point.to_vec().cross(axis))
    }

    /// Rotation of `angle` radians about the Plücker line (`axis`, `moment`).
    ///
    /// `real = (sin(θ/2)·axis, cos(θ/2))`, `dual = (sin(θ/2)·moment, 0)`.
    pub fn rotation_plucker(angle: S, axis: Vec3<S>, moment: Vec3<S>) -> Self {
        let (s, c) = (angle * S::HALF).sin_cos();
        let (s, c) = (tolerance::adjust(s), tolerance::adjust(c));
        Self::new(
            Quat::from_vec_scalar(axis * s, c),
            Quat::from_vec_scalar(moment * s, S::ZERO),
        )
        .adjusted()
    }

    /// Pure translation by `vector`.
    #[inline]
    pub fn translation(vector: Vec3<S>) -> Self {
        Self::translation_scaled(S::ONE, vector)
    }

    /// Pure translation by `amount · vector`.
    pub fn translation_scaled(amount: S, vector: Vec3<S>) -> Self {
        Self::new(
            Quat::identity(),
            Quat::from_vec_scalar(vector * (amount * S::HALF), S::ZERO),
        )
        .adjusted()
    }

    /// Lift a point: `real` = identity, `dual` = (point, 0).
    #[inline]
    pub fn point(point: Point3<S>) -> Self {
        Self::from_parts(Quat::identity(), Quat::from_vec_scalar(point.to_vec(), S::ZERO))
    }

    /// Line along `vector` through `point`.
    pub fn line(vector: Vec3<S>, point: Point3<S>) -> Self {
        Self::line_plucker(vector, point.to_vec().cross(vector))
    }

    /// Line from Plücker coordinates. The direction is normalized, the
    /// moment is stored as given, so pass a unit `vector` to keep them paired.
    pub fn line_plucker(vector: Vec3<S>, moment: Vec3<S>) -> Self {
        Self::new(
            Quat::from_vec_scalar(vector, S::ZERO),
            Quat::from_vec_scalar(moment, S::ZERO),
        )
    }

    /// Plane with `normal` at signed `distance` from the origin.
    pub fn plane(normal: Vec3<S>, distance: S) -> Self {
        Self::new(
            Quat::from_vec_scalar(normal, S::ZERO),
            Quat::new(S::ZERO, S::ZERO, S::ZERO, distance),
        )
    }

    /// Rotation recovered from a rotation matrix (column-vector convention)
    /// through the Cayley transform `B = (R − I)(R + I)⁻¹ = tan(θ/2)·[n]×`.
    ///
    /// The Cayley form only covers angles in (−π, π). At ±π `R + I` is
    /// singular and equals `2·n·nᵀ`, so the axis is read from its column
    /// instead and the result is the half turn about it.
    pub fn from_rotation_matrix(rotation: &Mat3<S>) -> Self {
        let identity = Mat3::identity();
        let sum = *rotation + identity;
        let Some(inv) = sum.try_inverse() else {
            debug!("R + I is singular, recovering half-turn axis");
            return Self::half_turn(&sum);
        };
        let b = (*rotation - identity) * inv;
        let skew = Vec3::new(b.get(2, 1), b.get(0, 2), b.get(1, 0));
        let magnitude = skew.norm();
        let axis = if magnitude == S::ZERO { skew } else { skew / magnitude };
        let half = magnitude.atan2(S::ONE);
        let (s, c) = half.sin_cos();
        Self::new(Quat::from_vec_scalar(axis * s, c), Quat::zero()).adjusted()
    }

    /// Half turn about `n` given `sum = R + I = 2·n·nᵀ`.
    fn half_turn(sum: &Mat3<S>) -> Self {
        // Largest diagonal entry 2·n_k² picks the best-conditioned column.
        let k = (1..3).fold(0, |best, i| {
            if sum.get(i, i) > sum.get(best, best) { i } else { best }
        });
        let axis = Vec3::new(sum.get(0, k), sum.get(1, k), sum.get(2, k)).normalize();
        Self::from_parts(Quat::from_vec_scalar(axis, S::ZERO), Quat::zero()).adjusted()
    }

    /// `rotation` followed by `translation`: `dual = (translation, 0) · r / 2`.
    pub fn rotation_then_translation(rotation: Quat<S>, translation: Vec3<S>) -> Self {
        let real = rotation.normalize();
        let factor = real * S::HALF;
        let dual = Quat::from_vec_scalar(translation, S::ZERO) * factor;
        Self::new(real, dual)
    }

    // ------------------------------------------------------------------
    // Interpretations
    // ------------------------------------------------------------------

    /// Coordinates of a point dual quaternion.
    #[inline]
    pub fn as_point(&self) -> Point3<S> {
        Point3::from_vec(self.dual.vector())
    }

    #[inline]
    pub fn line_direction(&self) -> Vec3<S> {
        self.real.vector()
    }

    #[inline]
    pub fn line_moment(&self) -> Vec3<S> {
        self.dual.vector()
    }

    #[inline]
    pub fn plane_normal(&self) -> Vec3<S> {
        self.real.vector()
    }

    #[inline]
    pub fn plane_distance(&self) -> S {
        self.dual.w
    }
}

impl<S: Scalar> Default for DualQuat<S> {
    fn default() -> Self { Self::identity() }
}

impl<S: Scalar> Index<usize> for DualQuat<S> {
    type Output = S;

    /// Panics outside `0..8`; see [`DualQuat::get`] for the checked form.
    fn index(&self, index: usize) -> &S {
        match self.component(index) {
            Some(v) => v,
            None => panic!("dual quaternion component index {index} out of range 0..8"),
        }
    }
}

impl<S: Scalar> IndexMut<usize> for DualQuat<S> {
    fn index_mut(&mut self, index: usize) -> &mut S {
        match self.component_mut(index) {
            Some(v) => v,
            None => panic!("dual quaternion component index {index} out of range 0..8"),
        }
    }
}

impl<S: Scalar> From<[S; COMPONENTS]> for DualQuat<S> {
    fn from(a: [S; COMPONENTS]) -> Self {
        Self::from_parts(Quat::new(a[0], a[1], a[2], a[3]), Quat::new(a[4], a[5], a[6], a[7]))
    }
}

impl<S: Scalar> From<DualQuat<S>> for [S; COMPONENTS] {
    fn from(q: DualQuat<S>) -> Self { q.to_array() }
}

impl<S: Scalar> TryFrom<&[S]> for DualQuat<S> {
    type Error = DualQuatError;

    fn try_from(values: &[S]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl<S: Scalar> core::fmt::Display for DualQuat<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let (r, d) = (self.real, self.dual);
        write!(
            f,
            "({}, {}, {}, {}) + ε({}, {}, {}, {})",
            r.x, r.y, r.z, r.w, d.x, d.y, d.z, d.w
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};
    use screw_math::skew;

    #[test]
    fn smart_constructor_normalizes_real_only() {
        let q = DualQuat::new(Quat::new(0.0, 0.0, 3.0, 4.0), Quat::new(1.0, 2.0, 3.0, 4.0));
        assert!((q.real.norm() - 1.0).abs() < 1e-12);
        assert_eq!(q.real.x, 0.0);
        assert_eq!(q.real.y, 0.0);
        assert!((q.real.z - 0.6).abs() < 1e-12);
        assert!((q.real.w - 0.8).abs() < 1e-12);
        assert_eq!(q.dual, Quat::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn constants() {
        assert_eq!(DualQuat::<f64>::zero().to_array(), [0.0; 8]);
        assert_eq!(DualQuat::<f64>::default(), DualQuat::identity());
        assert_eq!(DualQuat::<f64>::origin_point().to_array(), [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn index_order() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let mut q = DualQuat::from_slice(&values).unwrap();
        for (i, v) in values.iter().enumerate() {
            assert_eq!(q[i], *v);
            assert_eq!(q.get(i).unwrap(), *v);
        }
        assert_eq!(q.real.w, 4.0);
        assert_eq!(q.dual.x, 5.0);
        q[7] = -1.0;
        q.set(0, -2.0).unwrap();
        assert_eq!(q.dual.w, -1.0);
        assert_eq!(q.real.x, -2.0);
        assert_eq!(q.to_array()[7], -1.0);
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let mut q = DualQuat::<f32>::identity();
        assert!(matches!(q.get(8), Err(DualQuatError::IndexOutOfRange(8))));
        assert!(matches!(q.set(100, 1.0), Err(DualQuatError::IndexOutOfRange(100))));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_index_panics() {
        let q = DualQuat::<f64>::identity();
        let _ = q[8];
    }

    #[test]
    fn wrong_length_slice_is_an_error() {
        let err = DualQuat::<f64>::from_slice(&[1.0; 7]).unwrap_err();
        assert!(matches!(err, DualQuatError::InvalidLength { expected: 8, actual: 7 }));
        let empty: &[f64] = &[];
        assert!(DualQuat::try_from(empty).is_err());
        assert!(DualQuat::<f64>::try_from(&[0.0; 9][..]).is_err());
    }

    #[test]
    fn rotation_components() {
        let q = DualQuat::rotation(FRAC_PI_2, Vec3::z(), Point3::new(300.0, 0.0, 0.0));
        let h = FRAC_PI_2 / 2.0;
        assert!((q.real.z - h.sin()).abs() < 1e-12);
        assert!((q.real.w - h.cos()).abs() < 1e-12);
        // moment = (300, 0, 0) × z = (0, -300, 0)
        assert!((q.dual.y + 300.0 * h.sin()).abs() < 1e-9);
        assert_eq!(q.dual.x, 0.0);
        assert_eq!(q.dual.w, 0.0);
    }

    #[test]
    fn half_turn_snaps_cosine() {
        let q = DualQuat::rotation_plucker(PI, Vec3::z(), Vec3::zero());
        assert_eq!(q.real, Quat::new(0.0, 0.0, 1.0, 0.0));
    }

    #[test]
    fn translation_halves_vector() {
        let q = DualQuat::translation_scaled(5.0, Vec3::x());
        assert_eq!(q.real, Quat::identity());
        assert_eq!(q.dual, Quat::new(2.5, 0.0, 0.0, 0.0));
        assert_eq!(DualQuat::translation(Vec3::new(5.0, 0.0, 0.0)), q);
    }

    #[test]
    fn point_line_plane_layout() {
        let p = DualQuat::point(Point3::new(1.0, 2.0, 3.0));
        assert_eq!(p.to_array(), [0.0, 0.0, 0.0, 1.0, 1.0, 2.0, 3.0, 0.0]);
        assert_eq!(p.as_point(), Point3::new(1.0, 2.0, 3.0));

        let l = DualQuat::line(Vec3::z(), Point3::new(1.0, 0.0, 0.0));
        assert_eq!(l.line_direction(), Vec3::z());
        assert_eq!(l.line_moment(), Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(l.real.w, 0.0);

        let pl = DualQuat::plane(Vec3::new(0.0, 0.0, 2.0), 4.0);
        assert_eq!(pl.plane_normal(), Vec3::z());
        assert_eq!(pl.plane_distance(), 4.0);
        assert_eq!(pl.dual.vector(), Vec3::zero());
    }

    #[test]
    fn rotation_from_matrix_matches_axis_angle() {
        for &(axis, angle) in &[
            (Vec3::z(), 0.7),
            (Vec3::new(1.0, -2.0, 0.5).normalize(), 2.5),
            (Vec3::x(), -1.1),
        ] {
            let m = Mat3::rotation_axis(axis, angle);
            let q = DualQuat::from_rotation_matrix(&m);
            let expected = DualQuat::rotation(angle, axis, Point3::origin());
            assert_eq!(q.compare(&expected, 1e-9), 0, "angle {angle}");
        }
    }

    #[test]
    fn cayley_transform_is_scaled_skew() {
        let axis = Vec3::new(0.0, 0.6, 0.8);
        let angle = 1.0_f64;
        let r = Mat3::rotation_axis(axis, angle);
        let id = Mat3::identity();
        let b = (r - id) * (r + id).try_inverse().unwrap();
        let expected = skew(&(axis * (angle / 2.0).tan()));
        for i in 0..3 {
            for j in 0..3 {
                assert!((b.get(i, j) - expected.get(i, j)).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn rotation_from_identity_matrix() {
        let q = DualQuat::<f64>::from_rotation_matrix(&Mat3::identity());
        assert_eq!(q, DualQuat::identity());
    }

    #[test]
    fn rotation_from_half_turn_matrix() {
        let q = DualQuat::<f64>::from_rotation_matrix(&Mat3::rotation_z(PI));
        let expected = DualQuat::rotation(PI, Vec3::z(), Point3::origin());
        assert_eq!(q.compare(&expected, 1e-9), 0);
        let p = q.transform_point(Point3::new(1.0, 0.0, 0.0), true, true);
        assert_eq!(p, Point3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn rotation_from_oblique_half_turn_matrix() {
        let axis = Vec3::new(1.0, -2.0, 0.5).normalize();
        let q = DualQuat::<f64>::from_rotation_matrix(&Mat3::rotation_axis(axis, PI));
        assert!(q.is_finite());
        let expected = DualQuat::rotation(PI, axis, Point3::origin());
        assert_eq!(q.compare(&expected, 1e-6), 0);
        // Points on the axis stay, points off it reflect through it.
        let on_axis = Point3::from_vec(axis * 3.0);
        assert!(q.transform_point(on_axis, false, false).distance(on_axis) < 1e-6);
        let off = Point3::new(0.0, 0.0, 1.0);
        let moved = q.transform_point(off, false, false);
        let foot = axis * axis.dot(off.to_vec());
        assert!((moved.to_vec() - (foot * 2.0 - off.to_vec())).norm() < 1e-6);
    }

    #[test]
    fn rotation_from_half_turn_matrix_f32() {
        let q = DualQuat::<f32>::from_rotation_matrix(&Mat3::rotation_z(core::f32::consts::PI));
        let p = q.transform_point(Point3::new(2.0, 1.0, 4.0), true, true);
        assert_eq!(p, Point3::new(-2.0, -1.0, 4.0));
    }

    #[test]
    fn rotation_then_translation_dual_part() {
        let r = Quat::from_axis_angle(Vec3::z(), FRAC_PI_2);
        let q = DualQuat::rotation_then_translation(r, Vec3::new(1.0, 2.0, 3.0));
        assert!((q.real.norm() - 1.0).abs() < 1e-12);
        // Real and dual parts of a rigid transform are orthogonal.
        assert!(q.real.dot(&q.dual).abs() < 1e-12);
        assert!((q.translation_vec() - Vec3::new(1.0, 2.0, 3.0)).norm() < 1e-12);
    }

    #[test]
    fn display() {
        let s = DualQuat::<f64>::identity().to_string();
        assert_eq!(s, "(0, 0, 0, 1) + ε(0, 0, 0, 0)");
    }
}
