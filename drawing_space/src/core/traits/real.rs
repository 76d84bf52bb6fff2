use super::FuzzyOrd;

/// Trait representing a real number coordinate type (implemented for `f32` and `f64`).
///
/// Every geometry type in this crate is generic over `T: Real` with `f64` as the default, so most
/// callers never name this trait directly.
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyOrd
    + std::default::Default
    + std::fmt::Debug
    + 'static
{
    #[inline]
    fn pi() -> Self {
        Self::from(std::f64::consts::PI).unwrap()
    }

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }

    /// Degrees in a half turn, used for angle unit conversion.
    #[inline]
    fn half_turn_degrees() -> Self {
        Self::from(180.0).unwrap()
    }
}

impl Real for f32 {
    #[inline]
    fn pi() -> Self {
        std::f32::consts::PI
    }

    #[inline]
    fn two() -> Self {
        2.0f32
    }

    #[inline]
    fn half() -> Self {
        0.5f32
    }

    #[inline]
    fn half_turn_degrees() -> Self {
        180.0f32
    }
}

impl Real for f64 {
    #[inline]
    fn pi() -> Self {
        std::f64::consts::PI
    }

    #[inline]
    fn two() -> Self {
        2.0f64
    }

    #[inline]
    fn half() -> Self {
        0.5f64
    }

    #[inline]
    fn half_turn_degrees() -> Self {
        180.0f64
    }
}
