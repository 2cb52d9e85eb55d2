//! fragtint — procedural per-fragment color synthesis.
//!
//! A stateless color-evaluation core: height-banded classification
//! with hash-noise perturbation, time-driven color mixing, a
//! pointer-relative radial intensity field, and a horizon sky/sea
//! compound scene. Rasterization, GPU pipelines and window management
//! are external collaborators; this crate is called once per sample
//! point with resolved inputs and returns a color deterministically.
//!
//! Entry points:
//! - [`scene::Scene::from_json`] — parse a JSON scene description
//! - [`scene::Scene::shade`] — shade a single fragment
//! - [`eval::frame::render_frame`] — shade a full frame in parallel
//! - [`eval::cache::FrameCache`] — LRU reuse of rendered frames

pub mod eval;
pub mod scene;

pub use eval::color::{ClampMode, Color};
pub use scene::{FrameParams, Scene, SceneSpec};
