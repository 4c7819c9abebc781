use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// Floating-point scalar that every screw-math type is generic over.
///
/// Implemented for `f32` (the interchange width) and `f64`. Conversions
/// through `f64` let callers widen for accumulation and narrow once at the end.
pub trait Scalar:
    Copy
    + Clone
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const HALF: Self;
    const EPSILON: Self;

    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn sin_cos(self) -> (Self, Self);
    fn atan2(self, other: Self) -> Self;
    fn round(self) -> Self;
    fn recip(self) -> Self;
    fn is_finite(self) -> bool;

    fn from_f64(v: f64) -> Self;
    fn to_f64(self) -> f64;
}

macro_rules! impl_scalar_float {
    ($t:ident) => {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const HALF: Self = 0.5;
            const EPSILON: Self = $t::EPSILON;

            #[inline] fn sqrt(self) -> Self { $t::sqrt(self) }
            #[inline] fn abs(self) -> Self { $t::abs(self) }
            #[inline] fn sin_cos(self) -> (Self, Self) { $t::sin_cos(self) }
            #[inline] fn atan2(self, other: Self) -> Self { $t::atan2(self, other) }
            #[inline] fn round(self) -> Self { $t::round(self) }
            #[inline] fn recip(self) -> Self { $t::recip(self) }
            #[inline] fn is_finite(self) -> bool { $t::is_finite(self) }

            #[inline] fn from_f64(v: f64) -> Self { v as $t }
            #[inline] fn to_f64(self) -> f64 { self as f64 }
        }
    };
}

impl_scalar_float!(f32);
impl_scalar_float!(f64);
