// eval/temporal.rs — Time-driven color interpolation
//
// A blend factor near 0.5 is synthesized from three sinusoids of the
// caller-supplied clock, then two fixed colors are lerped by it. The
// factor is never clamped: the slow term can push it slightly outside
// [0,1], which overshoots the endpoint colors on purpose (the
// "breathing" look). The horizontal-gradient variant is the same mix
// with the normalized x coordinate as the factor.

use crate::eval::color::{ClampMode, Color};

/// Sum-of-sinusoids blend factor, centered near 0.5.
///
/// `sin(t/2.5)/3` is the dominant slow swell (period 5π); the two fast
/// terms add ±1/30 of shimmer each. Full period of the sum is 10π.
/// Unclamped by contract.
#[inline]
pub fn blend_percent(time: f32) -> f32 {
    (time / 2.5).sin() / 3.0 + 0.5 + (time * 20.0).cos() / 30.0 + (time * 7.0).sin() / 30.0
}

/// Per-channel linear interpolation of two colors by an unclamped factor.
#[inline]
pub fn mix_colors(a: Color, b: Color, percent: f32) -> Color {
    a.lerp(b, percent)
}

/// `mix_colors` with the output run through a clamp mode. Strict mode
/// trades the overshoot effect for a hard [0,1] channel guarantee.
#[inline]
pub fn mix_colors_with(a: Color, b: Color, percent: f32, mode: ClampMode) -> Color {
    mode.apply(mix_colors(a, b, percent))
}

/// Time-driven mix of two colors.
#[inline]
pub fn mix_over_time(time: f32, a: Color, b: Color) -> Color {
    mix_colors(a, b, blend_percent(time))
}

/// Horizontal-gradient variant: the factor is the normalized x
/// coordinate, no time dependency.
#[inline]
pub fn mix_over_x(x: f32, a: Color, b: Color) -> Color {
    mix_colors(a, b, x)
}
