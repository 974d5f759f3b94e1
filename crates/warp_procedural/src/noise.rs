//! # 1D Perlin Noise
//!
//! Gradient noise along a single axis, used to drive camera shake.
//!
//! ## Determinism Guarantee
//!
//! The permutation table below is part of the contract. Changing a single
//! entry changes every shake curve derived from it, so it is kept as explicit
//! static data rather than generated from a seed.

/// Permutation table: a fixed jumble of all numbers 0-255.
///
/// The pattern repeats every 256 units of input, which is far longer than
/// any shake timeline before it is re-seeded.
pub const PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186,
    3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206, 59,
    227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163, 70,
    221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178,
    185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241, 81,
    51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204, 176, 115,
    121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141, 128, 195,
    78, 66, 215, 61, 156, 180,
];

/// Scale that maps the raw corner sum into `[-1, 1]`.
///
/// The raw maximum is `8 * (3/4)^4 = 2.53125`.
const OUTPUT_SCALE: f32 = 0.395;

/// Samples 1D noise at `x`.
///
/// # Returns
///
/// A value in the range `[-1, 1]`, exactly `0.0` at every integer.
///
/// # Performance
///
/// - O(1) per sample
/// - No allocations
#[must_use]
pub fn noise_1d(x: f32) -> f32 {
    let i0 = fast_floor(x);
    let i1 = i0.wrapping_add(1);

    // Distances to the two corners
    let x0 = x - i0 as f32;
    let x1 = x0 - 1.0;

    let n0 = corner(x0, hash(i0));
    let n1 = corner(x1, hash(i1));

    OUTPUT_SCALE * (n0 + n1)
}

/// Generates octaved noise.
///
/// Adds together noise layers whose frequencies are successive doublings of
/// `scale`. Each layer's weight is the previous one times `roughness`.
///
/// The input is mirrored to `|x|`; only magnitude matters.
///
/// # Arguments
///
/// * `x` - Position on the input axis (typically a time line)
/// * `octaves` - Number of layers (0 yields `0.0`)
/// * `roughness` - Weight multiplier per layer
/// * `scale` - Frequency of the first layer
///
/// # Returns
///
/// The weighted average of all layers, in `[-1, 1]`.
#[must_use]
pub fn octave_noise(x: f32, octaves: u32, roughness: f32, scale: f32) -> f32 {
    let x = x.abs();

    let mut noise_sum = 0.0;
    let mut frequency = scale;
    let mut weight = 1.0;
    let mut weight_sum = 0.0;

    for _ in 0..octaves {
        noise_sum += noise_1d(x * frequency) * weight;
        frequency *= 2.0;
        weight_sum += weight;
        weight *= roughness;
    }

    if weight_sum == 0.0 {
        return 0.0;
    }
    noise_sum / weight_sum
}

/// Contribution of one corner at distance `d`: `(1 - d²)⁴ · grad`.
#[inline]
fn corner(d: f32, hash: u8) -> f32 {
    let mut t = 1.0 - d * d;
    t *= t;
    t * t * gradient(hash, d)
}

/// Hashes a lattice index through the permutation table.
///
/// Negative indices are normalized with Euclidean remainder.
#[inline]
fn hash(i: i32) -> u8 {
    PERMUTATION[i.rem_euclid(256) as usize]
}

/// Gradient-dot-residual for 1D.
///
/// The low three bits pick a magnitude in `1..=8`, bit 3 picks the sign.
#[inline]
fn gradient(hash: u8, d: f32) -> f32 {
    let h = hash & 0x0F;
    let mut grad = 1.0 + f32::from(h & 7);
    if h & 8 != 0 {
        grad = -grad;
    }
    grad * d
}

/// Fast floor function.
///
/// Faster than `f32::floor()` followed by a cast.
#[inline]
#[allow(clippy::cast_possible_truncation)]
fn fast_floor(x: f32) -> i32 {
    let xi = x as i32;
    if x < xi as f32 {
        xi - 1
    } else {
        xi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permutation_is_a_permutation() {
        let mut seen = [false; 256];
        for &p in &PERMUTATION {
            assert!(!seen[p as usize], "duplicate entry {p}");
            seen[p as usize] = true;
        }
        assert_eq!(PERMUTATION[0], 151);
        assert_eq!(PERMUTATION[255], 180);
    }

    #[test]
    fn test_zero_at_integers() {
        for i in 0..50 {
            let v = noise_1d(i as f32);
            assert!(v.abs() < 1e-6, "noise({i}) = {v}");
        }
    }

    #[test]
    fn test_range() {
        for i in 0..100_000 {
            let x = i as f32 * 0.0037;
            let v = noise_1d(x);
            assert!((-1.0..=1.0).contains(&v), "Value {v} out of range at {x}");
        }
    }

    #[test]
    fn test_negative_input_is_defined() {
        // Corners below zero must hash without panicking.
        for i in 1..1000 {
            let v = noise_1d(-(i as f32) * 0.31);
            assert!(v.is_finite());
            assert!((-1.0..=1.0).contains(&v));
        }
        assert_eq!(noise_1d(-256.0), 0.0);
    }

    #[test]
    fn test_continuity() {
        let x = 17.3;
        let delta = 0.0001;
        let diff = (noise_1d(x) - noise_1d(x + delta)).abs();
        assert!(diff < 0.01, "Noise should be continuous: diff = {diff}");
    }

    #[test]
    fn test_not_flat() {
        let nonzero = (0..100)
            .map(|i| noise_1d(i as f32 + 0.5))
            .filter(|v| v.abs() > 0.01)
            .count();
        assert!(nonzero > 50, "noise is suspiciously flat");
    }

    #[test]
    fn test_single_octave_is_base_noise() {
        for i in 0..500 {
            let x = i as f32 * 0.137;
            for scale in [0.25, 0.75, 1.0, 3.5] {
                assert_eq!(octave_noise(x, 1, 1.5, scale), noise_1d(x * scale));
                assert_eq!(octave_noise(x, 1, 0.1, scale), noise_1d(x * scale));
            }
        }
    }

    #[test]
    fn test_octave_noise_mirrors_input() {
        for i in 0..200 {
            let x = i as f32 * 0.21;
            assert_eq!(octave_noise(-x, 2, 1.5, 0.75), octave_noise(x, 2, 1.5, 0.75));
        }
    }

    #[test]
    fn test_octave_noise_range() {
        for i in 0..10_000 {
            let x = i as f32 * 0.001;
            let v = octave_noise(x, 2, 1.5, 0.75);
            assert!((-1.0..=1.0).contains(&v), "octave value {v} out of range at {x}");
        }
    }

    #[test]
    fn test_zero_octaves() {
        assert_eq!(octave_noise(1.3, 0, 1.5, 0.75), 0.0);
    }

    #[test]
    fn test_determinism() {
        for i in 0..100 {
            let x = i as f32 * 0.77;
            assert_eq!(noise_1d(x), noise_1d(x), "Noise should be deterministic");
        }
    }
}
