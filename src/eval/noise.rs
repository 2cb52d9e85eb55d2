// eval/noise.rs — Deterministic trigonometric hash noise
//
// The classic fract(sin(dot(seed, K)) * M) fragment-shader hash. Every
// constant is reproduced exactly: identical seeds must yield identical
// output across frames and platforms, otherwise static surfaces
// flicker. There is no RNG state anywhere — each call is a closed-form
// function of its seed.

/// Dot-product constants of the hash (shader-canonical values).
pub const HASH_DOT: [f32; 3] = [12.9898, 78.233, 54.02323];

/// Magnification factor applied before taking the fraction.
pub const HASH_SCALE: f32 = 43758.5453;

/// GLSL `fract`: `x - floor(x)`, in [0,1) for all finite `x`.
///
/// Rust's `f32::fract` is negative for negative inputs, which would
/// break the hash's output range.
#[inline]
pub fn glsl_fract(x: f32) -> f32 {
    x - x.floor()
}

/// Hash a 3D seed to a value in [0,1).
///
/// Non-cryptographic, fully deterministic. NaN seeds propagate NaN
/// (accepted precondition — no validation in the per-fragment path).
#[inline]
pub fn hash_noise(seed: [f32; 3]) -> f32 {
    let dot = seed[0] * HASH_DOT[0] + seed[1] * HASH_DOT[1] + seed[2] * HASH_DOT[2];
    glsl_fract(dot.sin() * HASH_SCALE)
}

/// Hash a 2D fragment coordinate (z fixed at 0).
#[inline]
pub fn hash_noise_2d(x: f32, y: f32) -> f32 {
    hash_noise([x, y, 0.0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_per_seed() {
        let seed = [417.25, 93.5, 12.0];
        let first = hash_noise(seed);
        for _ in 0..100 {
            assert_eq!(hash_noise(seed), first);
        }
    }

    #[test]
    fn output_in_unit_interval() {
        for i in 0..1000 {
            let s = [
                (i as f32) * 1.37,
                (i as f32) * -0.73 + 11.0,
                (i as f32) * 0.011,
            ];
            let v = hash_noise(s);
            assert!((0.0..1.0).contains(&v), "seed {s:?} gave {v}");
        }
    }

    #[test]
    fn distinct_seeds_generally_disagree() {
        // Not a statistical test, just a sanity check that the hash is
        // not collapsing to a constant.
        let a = hash_noise([1.0, 2.0, 3.0]);
        let b = hash_noise([1.0, 2.0, 3.001]);
        assert_ne!(a, b);
    }

    #[test]
    fn fract_handles_negatives() {
        assert_eq!(glsl_fract(-1.25), 0.75);
        assert_eq!(glsl_fract(2.5), 0.5);
        assert_eq!(glsl_fract(0.0), 0.0);
    }

    #[test]
    fn two_d_seed_matches_zero_z() {
        assert_eq!(hash_noise_2d(40.0, 30.0), hash_noise([40.0, 30.0, 0.0]));
    }
}
