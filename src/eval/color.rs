// eval/color.rs — Color value type and channel math
//
// Colors are immutable 4-channel f32 values produced fresh by every
// evaluator. Channel values live conceptually in [0,1] but evaluators
// never clamp internally; overshoot from unclamped blend factors is
// preserved until an explicit boundary applies `ClampMode`.

use serde::{Deserialize, Serialize};

/// Alpha used by the terrain classifier output (semi-transparent surface).
pub const TERRAIN_ALPHA: f32 = 0.85;

/// RGBA color with f32 channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "default_alpha")]
    pub a: f32,
}

fn default_alpha() -> f32 {
    1.0
}

pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

impl Color {
    /// Opaque color from RGB channels.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Per-channel linear interpolation `self + (other - self) * t`.
    ///
    /// `t` is deliberately unclamped: factors outside [0,1] produce
    /// overshoot colors, which several evaluators rely on.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Add `delta` uniformly to the RGB channels, leaving alpha intact.
    pub fn offset_rgb(self, delta: f32) -> Color {
        Color {
            r: self.r + delta,
            g: self.g + delta,
            b: self.b + delta,
            a: self.a,
        }
    }

    /// Copy with every channel clamped to [0,1].
    pub fn clamped(self) -> Color {
        Color {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Rec. 709 luma, used for frame-level min/max tracking.
    pub fn luma(self) -> f32 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }
}

/// Whether out-of-range channels survive to the frame output.
///
/// `Overshoot` is the default: unclamped blend factors intentionally
/// push channels slightly outside [0,1] (the "breathing" effect).
/// `Strict` clamps at the frame boundary for callers that need hard
/// color-range guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClampMode {
    #[default]
    Overshoot,
    Strict,
}

impl ClampMode {
    pub fn apply(self, color: Color) -> Color {
        match self {
            ClampMode::Overshoot => color,
            ClampMode::Strict => color.clamped(),
        }
    }
}
