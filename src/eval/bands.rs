// eval/bands.rs — Height-banded base-color classification
//
// Maps a scalar height to a base color through an ordered list of
// upper-bound bands, first match wins. The last band is the catch-all
// (stored with an infinite bound) so lookup is total for every real
// height, including negative and huge values.
//
// Terrain composition: only the lowest band is jittered by hash noise.
// Higher bands stay flat. That asymmetry is deliberate — sand gets
// grain, grass and rock read as uniform at terrain-preview scale.

use crate::eval::color::Color;
use crate::eval::noise::hash_noise;
use smallvec::SmallVec;

// ── Reference band colors ───────────────────────────────────────────

pub const SAND: Color = Color::rgb(0.8, 0.7059, 0.1725);
pub const GRASS: Color = Color::rgb(0.2275, 0.8118, 0.2588);
pub const ROCK: Color = Color::rgb(0.6314, 0.6314, 0.6314);

/// Perturbation divisor: `(noise - 0.5) / PERTURB_DIVISOR` bounds the
/// jitter to ±0.1 per channel.
pub const PERTURB_DIVISOR: f32 = 5.0;

// ── Band set ────────────────────────────────────────────────────────

/// One half-open height interval. Heights strictly below `upper`
/// (and not claimed by an earlier band) take `color`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub upper: f32,
    pub color: Color,
}

/// Ordered ascending band list. Band tables are tiny (2-4 entries in
/// practice) so they live inline in a SmallVec.
#[derive(Debug, Clone, PartialEq)]
pub struct BandSet {
    bands: SmallVec<[Band; 4]>,
}

impl BandSet {
    /// Build a band set from `(upper_bound, color)` pairs plus the
    /// catch-all color for heights at or above the last bound.
    ///
    /// Bounds must be finite and strictly ascending.
    pub fn new(bounded: &[(f32, Color)], catch_all: Color) -> Result<BandSet, String> {
        let mut bands: SmallVec<[Band; 4]> = SmallVec::with_capacity(bounded.len() + 1);
        let mut prev: Option<f32> = None;
        for &(upper, color) in bounded {
            if !upper.is_finite() {
                return Err(format!("band bound must be finite, got {upper}"));
            }
            if let Some(p) = prev {
                if upper <= p {
                    return Err(format!(
                        "band bounds must be strictly ascending ({upper} follows {p})"
                    ));
                }
            }
            prev = Some(upper);
            bands.push(Band { upper, color });
        }
        bands.push(Band {
            upper: f32::INFINITY,
            color: catch_all,
        });
        Ok(BandSet { bands })
    }

    /// Two-band terrain preset: sand below 1.0, grass above.
    pub fn two_band() -> BandSet {
        BandSet {
            bands: SmallVec::from_slice(&[
                Band { upper: 1.0, color: SAND },
                Band { upper: f32::INFINITY, color: GRASS },
            ]),
        }
    }

    /// Three-band terrain preset: sand below 1.0, grass to 20.0, rock above.
    pub fn three_band() -> BandSet {
        BandSet {
            bands: SmallVec::from_slice(&[
                Band { upper: 1.0, color: SAND },
                Band { upper: 20.0, color: GRASS },
                Band { upper: f32::INFINITY, color: ROCK },
            ]),
        }
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        false // the catch-all is always present
    }

    /// Index of the band claiming `height`. Strict `<` against each
    /// upper bound, so a height exactly at a bound belongs to the
    /// higher band. NaN heights fall through to the catch-all.
    #[inline]
    pub fn band_index(&self, height: f32) -> usize {
        let last = self.bands.len() - 1;
        for (i, band) in self.bands[..last].iter().enumerate() {
            if height < band.upper {
                return i;
            }
        }
        last
    }

    /// Base color for `height`, no perturbation.
    #[inline]
    pub fn classify(&self, height: f32) -> Color {
        self.bands[self.band_index(height)].color
    }

    /// Base color with the lowest band jittered by hash noise seeded
    /// from the fragment coordinate. The offset is uniform across RGB
    /// channels and bounded to ±0.1.
    #[inline]
    pub fn classify_perturbed(&self, height: f32, seed: [f32; 3]) -> Color {
        let idx = self.band_index(height);
        let color = self.bands[idx].color;
        if idx == 0 {
            color.offset_rgb((hash_noise(seed) - 0.5) / PERTURB_DIVISOR)
        } else {
            color
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_band_reference_values() {
        let bands = BandSet::two_band();
        assert_eq!(bands.classify(0.5), SAND);
        assert_eq!(bands.classify(0.999_999), SAND);
        assert_eq!(bands.classify(5.0), GRASS);
    }

    #[test]
    fn boundary_belongs_to_higher_band() {
        let two = BandSet::two_band();
        assert_eq!(two.classify(1.0), GRASS);
        let three = BandSet::three_band();
        assert_eq!(three.classify(1.0), GRASS);
        assert_eq!(three.classify(20.0), ROCK);
    }

    #[test]
    fn lookup_is_total() {
        let bands = BandSet::three_band();
        assert_eq!(bands.classify(f32::MIN), SAND);
        assert_eq!(bands.classify(-1.0e30), SAND);
        assert_eq!(bands.classify(f32::MAX), ROCK);
        assert_eq!(bands.classify(1.0e30), ROCK);
    }

    #[test]
    fn perturbation_stays_within_bound() {
        let bands = BandSet::two_band();
        for i in 0..500 {
            let seed = [i as f32 * 3.1, i as f32 * -1.7, 0.5];
            let c = bands.classify_perturbed(0.2, seed);
            assert!((c.r - SAND.r).abs() <= 0.1, "r drifted: {}", c.r);
            assert!((c.g - SAND.g).abs() <= 0.1, "g drifted: {}", c.g);
            assert!((c.b - SAND.b).abs() <= 0.1, "b drifted: {}", c.b);
            // uniform offset across channels
            assert!(((c.r - SAND.r) - (c.g - SAND.g)).abs() < 1e-6);
        }
    }

    #[test]
    fn only_lowest_band_perturbed() {
        let bands = BandSet::three_band();
        let seed = [123.0, 456.0, 7.0];
        assert_eq!(bands.classify_perturbed(10.0, seed), GRASS);
        assert_eq!(bands.classify_perturbed(50.0, seed), ROCK);
        assert_ne!(bands.classify_perturbed(0.5, seed), SAND);
    }

    #[test]
    fn rejects_unordered_bounds() {
        assert!(BandSet::new(&[(5.0, SAND), (2.0, GRASS)], ROCK).is_err());
        assert!(BandSet::new(&[(5.0, SAND), (5.0, GRASS)], ROCK).is_err());
        assert!(BandSet::new(&[(f32::NAN, SAND)], GRASS).is_err());
        assert!(BandSet::new(&[(f32::INFINITY, SAND)], GRASS).is_err());
    }

    #[test]
    fn empty_bounded_list_is_all_catch_all() {
        let bands = BandSet::new(&[], GRASS).unwrap();
        assert_eq!(bands.classify(-1.0e9), GRASS);
        assert_eq!(bands.classify(1.0e9), GRASS);
    }
}
