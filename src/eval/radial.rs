// eval/radial.rs — Pointer-relative radial intensity field
//
// Produces the dual-color cursor glow: two channels share the same
// pointer/fragment geometry but jitter the fragment position in
// opposite directions with time-offset phases (sin for green, cos for
// red). Intensity falls off linearly with normalized distance and may
// go negative far from the pointer — callers visualize it as-is.

use crate::eval::color::Color;

/// Per-channel output of the field. Intensities are unclamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialIntensity {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl RadialIntensity {
    pub fn to_color(self) -> Color {
        Color::rgb(self.r, self.g, self.b)
    }
}

/// Frequency of the spatial jitter over time.
const JITTER_RATE: f32 = 4.0;
/// Jitter amplitude in normalized screen units.
const JITTER_SCALE: f32 = 8.0;
/// Flat darkening applied after the distance falloff.
const FALLOFF_BIAS: f32 = 0.2;

#[inline]
fn distance(a: [f32; 2], b: [f32; 2]) -> f32 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    (dx * dx + dy * dy).sqrt()
}

/// Evaluate the field for one fragment.
///
/// `frag` and `pointer` are in the same pixel coordinate space;
/// both are normalized by `resolution` before any distance math.
/// Blue is fixed at zero.
#[inline]
pub fn radial_field(
    frag: [f32; 2],
    pointer: [f32; 2],
    resolution: [f32; 2],
    time: f32,
) -> RadialIntensity {
    let fragment = [frag[0] / resolution[0], frag[1] / resolution[1]];
    let cursor = [pointer[0] / resolution[0], pointer[1] / resolution[1]];

    let green_jitter = (time * JITTER_RATE).sin() / JITTER_SCALE;
    let green_dist = distance(
        cursor,
        [fragment[0] + green_jitter, fragment[1] + green_jitter],
    )
    .abs();
    let g = (1.0 - green_dist) - FALLOFF_BIAS;

    let red_jitter = (time * JITTER_RATE).cos() / JITTER_SCALE;
    let red_dist = distance(cursor, [fragment[0] - red_jitter, fragment[1] - red_jitter]).abs();
    let r = (1.0 - red_dist) - FALLOFF_BIAS;

    RadialIntensity { r, g, b: 0.0 }
}
