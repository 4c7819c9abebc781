//! screw — dual-quaternion algebra for rigid transformations
//!
//! A [`DualQuat`] packs a rotation and a translation (a screw motion) into
//! eight scalars, and the same layout doubles as a point, a Plücker line or a
//! plane. Transformations compose by multiplication, act on geometry through
//! sandwich products, and chain without intermediate normalization.
//!
//! # Example
//! ```
//! use core::f64::consts::PI;
//! use screw::{DualQuat, Point3, Vec3};
//!
//! let rotation = DualQuat::rotation_plucker(PI, Vec3::z(), Vec3::zero());
//! let translation = DualQuat::translation_scaled(5.0, Vec3::x());
//! // Rightmost acts first: translate, then rotate.
//! let displacement = rotation * translation;
//! let p = displacement.transform_origin(true, true);
//! assert_eq!(p, Point3::new(-5.0, 0.0, 0.0));
//! ```
//!
//! # Conventions
//! - Right-handed, angles in radians
//! - Components index `real.xyzw` then `dual.xyzw`
//! - [`DualQuat::length`] is the *squared* real norm
//! - In-place mutators (`conjugate`, `invert`, `adjust`) have by-value twins
//!   (`conjugated`, `inverse`, `adjusted`)

mod dual_quat;
mod algebra;
mod action;
mod chain;
mod io;
pub mod error;
pub mod tolerance;

pub use dual_quat::{DualQuat, COMPONENTS};
pub use error::{DualQuatError, Result};
pub use io::ENCODED_LEN;
pub use screw_math::{Mat3, Mat4, Point3, Quat, Scalar, Vec3};

// DualQuat is two repr(C) quaternions of one float type.
#[cfg(feature = "bytemuck")]
mod bytemuck_impls {
    use super::DualQuat;

    // SAFETY: All fields are the same float type, #[repr(C)], no padding
    unsafe impl bytemuck::Zeroable for DualQuat<f32> {}
    unsafe impl bytemuck::Pod for DualQuat<f32> {}
    unsafe impl bytemuck::Zeroable for DualQuat<f64> {}
    unsafe impl bytemuck::Pod for DualQuat<f64> {}
}
