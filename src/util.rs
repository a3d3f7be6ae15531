// MIT/Apache2 License

use num_traits::{AsPrimitive, Bounded};

/// Scale a value in the range [0, 1] to the full range of an unsigned integer type.
#[inline]
pub(crate) fn clamp<N>(value: f32) -> N
where
    N: Bounded + AsPrimitive<f32>,
    f32: AsPrimitive<N>,
{
    let max: f32 = N::max_value().as_();
    (value * max).round().as_()
}

/// The inverse of `clamp`: map an unsigned integer onto the range [0, 1].
#[inline]
pub(crate) fn unclamp<N>(value: N) -> f32
where
    N: Bounded + AsPrimitive<f32>,
{
    let max: f32 = N::max_value().as_();
    value.as_() / max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u8_values_survive_a_round_trip() {
        for v in [0u8, 1, 127, 128, 254, 255].iter().copied() {
            assert_eq!(clamp::<u8>(unclamp(v)), v);
        }
    }

    #[test]
    fn endpoints() {
        assert_eq!(clamp::<u8>(0.0), 0);
        assert_eq!(clamp::<u8>(1.0), 255);
        assert_eq!(clamp::<u16>(1.0), u16::MAX);
    }
}
