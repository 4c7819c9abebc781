//! screw-math — vector, quaternion and matrix primitives for screw
//!
//! The small, fixed-size algebra that dual quaternions are built from.
//! Generic over `Scalar` so the same code runs in `f32` (interchange width)
//! and `f64` (accumulation width).
//!
//! # Conventions
//! - Right-handed coordinates
//! - `Quat` stores `x, y, z, w` (vector part first)
//! - `Mat3` is column-major and acts on column vectors
//! - `#[repr(C)]` everywhere for zero-copy upload

mod scalar;
mod vec3;
mod point3;
mod quat;
mod mat3;
mod mat4;

pub use scalar::Scalar;
pub use vec3::Vec3;
pub use point3::Point3;
pub use quat::Quat;
pub use mat3::Mat3;
pub use mat4::Mat4;

/// Cross-product matrix [v]× such that [v]× w = v × w
pub fn skew<S: Scalar>(v: &Vec3<S>) -> Mat3<S> {
    Mat3::new(
        S::ZERO, -v.z,    v.y,
        v.z,     S::ZERO, -v.x,
        -v.y,    v.x,     S::ZERO,
    )
}

// Bytemuck impls for concrete f32/f64 types (generic structs can't derive Pod)
#[cfg(feature = "bytemuck")]
mod bytemuck_impls {
    use super::*;

    macro_rules! impl_pod {
        ($t:ty) => {
            // SAFETY: All fields are the same float type, #[repr(C)], no padding
            unsafe impl bytemuck::Zeroable for $t {}
            unsafe impl bytemuck::Pod for $t {}
        };
    }

    impl_pod!(Vec3<f32>);
    impl_pod!(Vec3<f64>);
    impl_pod!(Point3<f32>);
    impl_pod!(Point3<f64>);
    impl_pod!(Quat<f32>);
    impl_pod!(Quat<f64>);
    impl_pod!(Mat3<f32>);
    impl_pod!(Mat3<f64>);
    impl_pod!(Mat4<f32>);
    impl_pod!(Mat4<f64>);
}
