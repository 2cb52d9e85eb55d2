// scene.rs — Scene descriptions and evaluator dispatch
//
// Parses the JSON-shaped scene format the frontend sends into a
// compiled, evaluable form. Parsing and validation happen once, up
// front, returning `Result<_, String>`; the compiled scene's `shade`
// path is infallible and does no per-fragment validation (malformed
// numeric input propagates IEEE-754 semantics).
//
// Composition happens only here: evaluators never call each other.
// The terrain mode is the one compound case (classifier + perturber),
// wired at this level exactly as a fragment-shader main() would.

use crate::eval::bands::BandSet;
use crate::eval::color::{ClampMode, Color, TERRAIN_ALPHA};
use crate::eval::horizon::{horizon_color, HorizonPalette, HORIZON_Y};
use crate::eval::radial::radial_field;
use crate::eval::temporal::{mix_over_time, mix_over_x};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Frame parameters ────────────────────────────────────────────────

/// Per-frame inputs resolved by the external driver: output extent,
/// the animation clock, and the pointer position in pixel space.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameParams {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub time: f32,
    #[serde(default)]
    pub pointer: [f32; 2],
    #[serde(default)]
    pub clamp: ClampMode,
}

impl FrameParams {
    pub fn resolution(&self) -> [f32; 2] {
        [self.width as f32, self.height as f32]
    }
}

// ── Scene description (wire format) ─────────────────────────────────

/// One custom height band: heights strictly below `upTo` take `color`.
/// A band without `upTo` is the catch-all and must come last.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up_to: Option<f32>,
    pub color: Color,
}

fn default_true() -> bool {
    true
}

fn default_height_scale() -> f32 {
    30.0
}

fn default_horizon_y() -> f32 {
    HORIZON_Y
}

/// Wire-format scene description, tagged by evaluator mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum SceneSpec {
    /// Height-classified terrain with optional sand perturbation.
    #[serde(rename_all = "camelCase")]
    Terrain {
        /// Custom bands; omitted means the three-band preset.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bands: Option<Vec<BandSpec>>,
        #[serde(default = "default_true")]
        perturb: bool,
        /// Screen-vertical heights span [0, heightScale].
        #[serde(default = "default_height_scale")]
        height_scale: f32,
    },
    /// Two-color mix, time-driven or as a horizontal gradient.
    #[serde(rename_all = "camelCase")]
    Temporal {
        color_a: Color,
        color_b: Color,
        #[serde(default)]
        gradient: bool,
    },
    /// Pointer-following dual-color glow.
    Radial {},
    /// Sky/sea horizon scene with day/night modulation.
    #[serde(rename_all = "camelCase")]
    Horizon {
        #[serde(default)]
        palette: HorizonPalette,
        #[serde(default = "default_horizon_y")]
        horizon_y: f32,
    },
}

impl SceneSpec {
    /// Parse a scene description from its JSON value.
    pub fn from_json(value: &Value) -> Result<SceneSpec, String> {
        serde_json::from_value(value.clone()).map_err(|e| format!("invalid scene: {e}"))
    }
}

// ── Compiled scene ──────────────────────────────────────────────────

/// Validated, evaluable scene. Construction resolves presets and
/// checks band ordering; `shade` is pure and infallible.
#[derive(Debug, Clone)]
pub enum Scene {
    Terrain {
        bands: BandSet,
        perturb: bool,
        height_scale: f32,
    },
    Temporal {
        color_a: Color,
        color_b: Color,
        gradient: bool,
    },
    Radial,
    Horizon {
        palette: HorizonPalette,
        horizon_y: f32,
    },
}

impl Scene {
    pub fn from_spec(spec: &SceneSpec) -> Result<Scene, String> {
        match spec {
            SceneSpec::Terrain {
                bands,
                perturb,
                height_scale,
            } => {
                let set = match bands {
                    None => BandSet::three_band(),
                    Some(specs) => compile_bands(specs)?,
                };
                if !height_scale.is_finite() || *height_scale <= 0.0 {
                    return Err(format!("heightScale must be positive, got {height_scale}"));
                }
                Ok(Scene::Terrain {
                    bands: set,
                    perturb: *perturb,
                    height_scale: *height_scale,
                })
            }
            SceneSpec::Temporal {
                color_a,
                color_b,
                gradient,
            } => Ok(Scene::Temporal {
                color_a: *color_a,
                color_b: *color_b,
                gradient: *gradient,
            }),
            SceneSpec::Radial {} => Ok(Scene::Radial),
            SceneSpec::Horizon { palette, horizon_y } => {
                if !horizon_y.is_finite() || !(0.0..=1.0).contains(horizon_y) {
                    return Err(format!("horizonY must be in [0,1], got {horizon_y}"));
                }
                Ok(Scene::Horizon {
                    palette: *palette,
                    horizon_y: *horizon_y,
                })
            }
        }
    }

    /// Parse + compile in one step (the path a JSON request takes).
    pub fn from_json(value: &Value) -> Result<Scene, String> {
        Scene::from_spec(&SceneSpec::from_json(value)?)
    }

    /// Shade one fragment. `frag` is the pixel-space screen coordinate
    /// (rows run top-down); all normalization happens here.
    #[inline]
    pub fn shade(&self, frag: [f32; 2], params: &FrameParams) -> Color {
        let res = params.resolution();
        match self {
            Scene::Terrain {
                bands,
                perturb,
                height_scale,
            } => {
                // Screen rows map to heights bottom-up: the lowest row
                // is height 0, the top row is height_scale.
                let height = (1.0 - frag[1] / res[1]) * height_scale;
                let color = if *perturb {
                    bands.classify_perturbed(height, [frag[0], frag[1], 0.0])
                } else {
                    bands.classify(height)
                };
                color.with_alpha(TERRAIN_ALPHA)
            }
            Scene::Temporal {
                color_a,
                color_b,
                gradient,
            } => {
                if *gradient {
                    mix_over_x(frag[0] / res[0], *color_a, *color_b)
                } else {
                    mix_over_time(params.time, *color_a, *color_b)
                }
            }
            Scene::Radial => radial_field(frag, params.pointer, res, params.time).to_color(),
            Scene::Horizon { palette, horizon_y } => {
                let x = frag[0] / res[0];
                let y = 1.0 - frag[1] / res[1];
                horizon_color(x, y, params.time, palette, *horizon_y)
            }
        }
    }
}

fn compile_bands(specs: &[BandSpec]) -> Result<BandSet, String> {
    let (last, bounded) = specs
        .split_last()
        .ok_or_else(|| "bands list must not be empty".to_string())?;
    if last.up_to.is_some() {
        return Err("last band must be the catch-all (no upTo)".to_string());
    }
    let mut pairs = Vec::with_capacity(bounded.len());
    for spec in bounded {
        let upper = spec
            .up_to
            .ok_or_else(|| "only the last band may omit upTo".to_string())?;
        pairs.push((upper, spec.color));
    }
    BandSet::new(&pairs, last.color)
}
