use crate::{Point3, Scalar, Vec3};

/// 4x4 homogeneous matrix, column-major storage (`cols[col][row]`).
///
/// Elements are addressed by `(row, col)`. The storage order says nothing
/// about the vector convention: [`Mat4::transform_point_row`] treats the
/// matrix as acting on row vectors (`p * M`, translation in row 3).
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4<S> {
    pub cols: [[S; 4]; 4],
}

impl<S: Scalar> Mat4<S> {
    #[inline]
    pub fn zero() -> Self {
        Self { cols: [[S::ZERO; 4]; 4] }
    }

    pub fn identity() -> Self {
        let mut m = Self::zero();
        for i in 0..4 {
            m.cols[i][i] = S::ONE;
        }
        m
    }

    /// Element access (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> S {
        self.cols[col][row]
    }

    /// Element assignment (row, col)
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: S) {
        self.cols[col][row] = value;
    }

    /// Row-vector transform: `[x y z 1] * M`.
    pub fn transform_point_row(&self, p: Point3<S>) -> Point3<S> {
        let v = [p.x, p.y, p.z, S::ONE];
        let mut out = [S::ZERO; 3];
        for (c, slot) in out.iter_mut().enumerate() {
            let mut acc = S::ZERO;
            for (r, x) in v.iter().enumerate() {
                acc += *x * self.get(r, c);
            }
            *slot = acc;
        }
        Point3::new(out[0], out[1], out[2])
    }

    /// Translation stored in row 3 (row-vector convention).
    #[inline]
    pub fn row_translation(&self) -> Vec3<S> {
        Vec3::new(self.get(3, 0), self.get(3, 1), self.get(3, 2))
    }
}

impl<S: Scalar> Default for Mat4<S> {
    fn default() -> Self { Self::identity() }
}
