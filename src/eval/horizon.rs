// eval/horizon.rs — Horizon sky/sea compound mixer
//
// Composes three lerps and a smoothstep seam: a horizontal sky
// gradient above the horizon, a vertically darkened sea below it, a
// smooth transition band of width 0.08 just under the horizon line,
// and a global day/night modulation driven by the clock. The day/night
// factor is unclamped and can brighten past 1.0 at its peak.

use crate::eval::color::{Color, BLACK};

/// Default horizon line in normalized (bottom-up) y.
pub const HORIZON_Y: f32 = 0.333;

/// Width of the sea→sky transition band below the horizon.
pub const SEAM_WIDTH: f32 = 0.08;

/// Standard cubic Hermite smoothstep.
///
/// `t = clamp((x - e0) / (e1 - e0), 0, 1); t*t*(3 - 2t)`. Returns 0
/// for `x <= e0`, 1 for `x >= e1`, and is monotonic in between.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Sky, sun and sea base colors for the horizon scene.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HorizonPalette {
    pub sky: Color,
    pub sun: Color,
    pub sea: Color,
}

impl Default for HorizonPalette {
    fn default() -> Self {
        Self {
            sky: Color::rgb(0.298, 0.4392, 0.6745),
            sun: Color::rgb(0.8784, 0.4902, 0.1686),
            sea: Color::rgb(0.0392, 0.2431, 0.3686),
        }
    }
}

/// Unclamped day/night brightness: `sin(time/4) * 0.5 + 0.8`,
/// swinging between 0.3 and 1.3.
#[inline]
pub fn sun_position(time: f32) -> f32 {
    (time / 4.0).sin() * 0.5 + 0.8
}

/// Shade one fragment of the horizon scene.
///
/// `x` and `y` are normalized coordinates with y running bottom-up
/// (0 = shore, 1 = top of sky).
#[inline]
pub fn horizon_color(x: f32, y: f32, time: f32, palette: &HorizonPalette, horizon: f32) -> Color {
    let sea_sky_mix = smoothstep(horizon - SEAM_WIDTH, horizon, y);
    let sky = palette.sky.lerp(palette.sun, x);
    let sea = palette.sea.lerp(BLACK, 0.3 - y);
    let lit = sea.lerp(sky, sea_sky_mix);
    BLACK.lerp(lit, sun_position(time))
}
