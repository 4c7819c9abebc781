//! Chained composition of many transformations.
//!
//! A kinematic chain `T = J₁ · J₂ · … · Jₙ` is folded from the right in
//! plain `f64` registers. No intermediate `DualQuat` is built and nothing is
//! narrowed back to `S` until the final store, so an `f32` chain rounds once
//! instead of once per joint.

use screw_math::{Quat, Scalar};
use tracing::trace;

use crate::dual_quat::DualQuat;
use crate::error::{DualQuatError, Result};

/// `x, y, z, w` in accumulation precision.
type Q64 = [f64; 4];

#[inline(always)]
fn widen<S: Scalar>(q: &Quat<S>) -> Q64 {
    [q.x.to_f64(), q.y.to_f64(), q.z.to_f64(), q.w.to_f64()]
}

#[inline(always)]
fn narrow<S: Scalar>(q: Q64) -> Quat<S> {
    Quat::new(S::from_f64(q[0]), S::from_f64(q[1]), S::from_f64(q[2]), S::from_f64(q[3]))
}

/// Hamilton product, same term order as `Quat::mul_quat`.
#[inline(always)]
fn qmul(a: Q64, b: Q64) -> Q64 {
    let [ax, ay, az, aw] = a;
    let [bx, by, bz, bw] = b;
    [
        aw * bx + ax * bw + ay * bz - az * by,
        aw * by - ax * bz + ay * bw + az * bx,
        aw * bz + ax * by - ay * bx + az * bw,
        aw * bw - ax * bx - ay * by - az * bz,
    ]
}

#[inline(always)]
fn qadd(a: Q64, b: Q64) -> Q64 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2], a[3] + b[3]]
}

impl<S: Scalar> DualQuat<S> {
    /// Product `values[0] · values[1] · … · values[n-1]`.
    ///
    /// The rightmost transformation acts first. Equivalent to pairwise `*`
    /// in the same order, up to the precision gained by accumulating in `f64`.
    pub fn compose(values: &[DualQuat<S>]) -> Result<DualQuat<S>> {
        let (last, rest) = values.split_last().ok_or(DualQuatError::EmptyChain)?;
        trace!(len = values.len(), "composing transformation chain");

        let mut real = widen(&last.real);
        let mut dual = widen(&last.dual);
        for q in rest.iter().rev() {
            let (qr, qd) = (widen(&q.real), widen(&q.dual));
            // (qr + ε·qd)(real + ε·dual) = qr·real + ε(qr·dual + qd·real)
            dual = qadd(qmul(qr, dual), qmul(qd, real));
            real = qmul(qr, real);
        }

        Ok(DualQuat::from_parts(narrow(real), narrow(dual)))
    }
}
