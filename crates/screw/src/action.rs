//! Applying a transformation to points and lines, and reading it back out
//! as a translation vector or homogeneous matrix.
//!
//! The four `f*g` operators are sandwich products `A · B · A⋆` that differ
//! only in the partial conjugate `A⋆` used on the right:
//!
//! | op    | `A⋆`                                   | operand |
//! |-------|----------------------------------------|---------|
//! | `f1g` | `A`                                    | generic |
//! | `f2g` | `(r̄, d̄)`                               | lines   |
//! | `f3g` | `(r, −d)`                              | generic |
//! | `f4g` | `(r̄, d.xyz, −d.w)` = `r̄ − ε·d̄`         | points  |

use screw_math::{Mat4, Point3, Quat, Scalar, Vec3};

use crate::dual_quat::DualQuat;
use crate::tolerance;

impl<S: Scalar> DualQuat<S> {
    /// `A · B · A`
    #[inline]
    pub fn f1g(&self, b: &DualQuat<S>) -> DualQuat<S> {
        *self * *b * *self
    }

    /// `A · B · (r̄ + ε·d̄)`
    #[inline]
    pub fn f2g(&self, b: &DualQuat<S>) -> DualQuat<S> {
        *self * *b * self.conjugated()
    }

    /// `A · B · (r − ε·d)`
    #[inline]
    pub fn f3g(&self, b: &DualQuat<S>) -> DualQuat<S> {
        *self * *b * DualQuat::from_parts(self.real, -self.dual)
    }

    /// `A · B · (r̄ − ε·d̄)`
    #[inline]
    pub fn f4g(&self, b: &DualQuat<S>) -> DualQuat<S> {
        let d = self.dual;
        let star = DualQuat::from_parts(self.real.conjugate(), Quat::new(d.x, d.y, d.z, -d.w));
        *self * *b * star
    }

    /// Send `point` through this transformation.
    ///
    /// `adjust` snaps near-zero components of the intermediate result to zero,
    /// `round` rounds the returned coordinates to three decimals.
    pub fn transform_point(&self, point: Point3<S>, adjust: bool, round: bool) -> Point3<S> {
        let mut moved = self.f4g(&DualQuat::point(point));
        if adjust {
            moved.adjust();
        }
        let coords = moved.as_point();
        if round {
            Point3::from_vec(coords.to_vec().map(tolerance::round))
        } else {
            coords
        }
    }

    /// Where this transformation sends the origin.
    #[inline]
    pub fn transform_origin(&self, adjust: bool, round: bool) -> Point3<S> {
        self.transform_point(Point3::origin(), adjust, round)
    }

    /// Send a Plücker line dual quaternion through this transformation.
    #[inline]
    pub fn transform_line(&self, line: &DualQuat<S>) -> DualQuat<S> {
        self.f2g(line)
    }

    /// Translation part, `(2 · d · r̄).xyz`.
    #[inline]
    pub fn translation_vec(&self) -> Vec3<S> {
        (self.dual * self.real.conjugate() * S::TWO).vector()
    }

    /// Homogeneous matrix in row-vector convention: rotation in the upper
    /// 3x3 block (transposed relative to `Quat::to_matrix`), translation in
    /// row 3. Normalizes first.
    pub fn to_matrix(&self) -> Mat4<S> {
        let q = self.normalize();
        let rotation = q.real.to_matrix();
        let translation = q.translation_vec();

        let mut m = Mat4::identity();
        for row in 0..3 {
            for col in 0..3 {
                m.set(row, col, rotation.get(col, row));
            }
        }
        m.set(3, 0, translation.x);
        m.set(3, 1, translation.y);
        m.set(3, 2, translation.z);
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};

    fn close(a: Point3<f64>, b: Point3<f64>, tol: f64) -> bool {
        a.distance(b) < tol
    }

    #[test]
    fn f4g_moves_points_rigidly() {
        let t = DualQuat::rotation(FRAC_PI_2, Vec3::z(), Point3::new(1.0, 0.0, 0.0));
        // (2, 0, 0) is one unit from the pivot; a quarter turn lands it at (1, 1, 0).
        let p = t.transform_point(Point3::new(2.0, 0.0, 0.0), false, false);
        assert!(close(p, Point3::new(1.0, 1.0, 0.0), 1e-12));
        // Points on the axis stay put.
        let on_axis = t.transform_point(Point3::new(1.0, 0.0, 5.0), false, false);
        assert!(close(on_axis, Point3::new(1.0, 0.0, 5.0), 1e-12));
    }

    #[test]
    fn transform_origin_reads_translation() {
        let t = DualQuat::translation(Vec3::new(1.0, -2.0, 3.0));
        assert_eq!(t.transform_origin(false, false), Point3::new(1.0, -2.0, 3.0));
    }

    #[test]
    fn adjust_and_round_flags() {
        let t = DualQuat::rotation(PI / 3.0, Vec3::z(), Point3::origin());
        let raw = t.transform_point(Point3::new(1.0, 0.0, 0.0), false, false);
        assert!((raw.x - 0.5).abs() < 1e-12);
        let rounded = t.transform_point(Point3::new(1.0, 0.0, 0.0), true, true);
        assert_eq!(rounded, Point3::new(0.5, 0.866, 0.0));
    }

    #[test]
    fn f2g_moves_lines() {
        // Z-parallel line through (1, 0, 0), shifted by (0, 2, 0).
        let line = DualQuat::line(Vec3::z(), Point3::new(1.0, 0.0, 0.0));
        let t = DualQuat::translation(Vec3::new(0.0, 2.0, 0.0));
        let moved = t.transform_line(&line);
        let expected = DualQuat::line(Vec3::z(), Point3::new(1.0, 2.0, 0.0));
        assert_eq!(moved.compare(&expected, 1e-12), 0);
        assert_eq!(moved.line_moment(), Vec3::new(2.0, -1.0, 0.0));
    }

    #[test]
    fn f2g_rotates_line_direction() {
        let line = DualQuat::line(Vec3::x(), Point3::new(0.0, 0.0, 1.0));
        let t = DualQuat::rotation(FRAC_PI_2, Vec3::z(), Point3::origin());
        let moved = t.transform_line(&line);
        let expected = DualQuat::line(Vec3::y(), Point3::new(0.0, 0.0, 1.0));
        assert_eq!(moved.compare(&expected, 1e-12), 0);
    }

    #[test]
    fn star_variants_differ_only_on_the_right() {
        let a = DualQuat::rotation(0.4, Vec3::x(), Point3::new(0.0, 1.0, 0.0));
        let b = DualQuat::point(Point3::new(1.0, 2.0, 3.0));
        assert_eq!(a.f1g(&b), a * b * a);
        assert_eq!(a.f3g(&b), a * b * DualQuat::from_parts(a.real, -a.dual));
        // For a pure rotation about a line through the origin the dual part
        // vanishes, so f2g, f3g and f4g of a point agree on the real part.
        let r = DualQuat::rotation(0.4, Vec3::x(), Point3::origin());
        assert_eq!(r.f2g(&b).real, r.f4g(&b).real);
    }

    #[test]
    fn star_variants_by_hand() {
        // A = translation by (2, 0, 0): real = 1, dual = (1, 0, 0, 0).
        // B = point (1, 2, 3):          real = 1, dual = (1, 2, 3, 0).
        // A·B has dual (2, 2, 3, 0).
        let a = DualQuat::translation(Vec3::new(2.0, 0.0, 0.0));
        let b = DualQuat::point(Point3::new(1.0, 2.0, 3.0));
        // f4g star is (1, ε(1, 0, 0, 0)): dual (3, 2, 3, 0), the moved point.
        assert_eq!(a.f4g(&b).to_array(), [0.0, 0.0, 0.0, 1.0, 3.0, 2.0, 3.0, 0.0]);
        // f3g star is (1, ε(-1, 0, 0, 0)): the translation cancels.
        assert_eq!(a.f3g(&b).to_array(), [0.0, 0.0, 0.0, 1.0, 1.0, 2.0, 3.0, 0.0]);

        // Quarter turn about z, r = c + s·k with c = s = √½, no dual part.
        // f3g(1 + ε·i) = r·(1 + ε·i)·r: real r² = k, dual r·i·r = (c² + s²)·i.
        let r = DualQuat::rotation(FRAC_PI_2, Vec3::z(), Point3::origin());
        let eps_i = DualQuat::from_parts(Quat::zero(), Quat::new(1.0, 0.0, 0.0, 0.0));
        let expected = DualQuat::from_parts(Quat::new(0.0, 0.0, 1.0, 0.0), Quat::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(r.f3g(&(DualQuat::identity() + eps_i)).compare(&expected, 1e-12), 0);
    }

    #[test]
    fn translation_vec_of_screw() {
        let t = DualQuat::rotation(FRAC_PI_2, Vec3::z(), Point3::origin())
            * DualQuat::translation(Vec3::new(5.0, 0.0, 0.0));
        let v = t.translation_vec();
        assert!((v - Vec3::new(0.0, 5.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn matrix_row_convention_matches_transform_point() {
        let t = DualQuat::rotation(0.9, Vec3::new(0.0, 0.6, 0.8), Point3::new(1.0, 2.0, 3.0))
            * DualQuat::translation(Vec3::new(-4.0, 0.5, 2.0));
        let m = t.to_matrix();
        let p = Point3::new(0.3, -1.0, 7.0);
        assert!(close(m.transform_point_row(p), t.transform_point(p, false, false), 1e-10));
        assert!((m.row_translation() - t.translation_vec()).norm() < 1e-12);
        assert_eq!(m.get(0, 3), 0.0);
        assert_eq!(m.get(3, 3), 1.0);
    }
}
