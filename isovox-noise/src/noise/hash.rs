//! Lattice hashing.
//!
//! Each axis coordinate is premultiplied by its own odd 21-bit prime before the
//! hash sees it, so neighbouring cells along different axes never produce the
//! same XOR pattern. The primes leave headroom for lattice indices well past
//! ten thousand cells without wrapping into collisions.

/// Axis multipliers for 2D lattice coordinates.
pub(crate) const PRIMES_2D: [i32; 2] = [0x1827F5, 0x123C3B];
/// Axis multipliers for 3D lattice coordinates.
pub(crate) const PRIMES_3D: [i32; 3] = [0x1A36BF, 0x157931, 0x119749];
/// Axis multipliers for 4D lattice coordinates.
pub(crate) const PRIMES_4D: [i32; 4] = [0x1B69E5, 0x177C1F, 0x141E75, 0x113C33];
/// Axis multipliers for 5D lattice coordinates.
pub(crate) const PRIMES_5D: [i32; 5] = [0x1C3367, 0x18DA4B, 0x15E6E3, 0x134D49, 0x110281];
/// Axis multipliers for 6D lattice coordinates.
pub(crate) const PRIMES_6D: [i32; 6] = [
    0x1CC205, 0x19D7B5, 0x173935, 0x14DEC5, 0x12C139, 0x10DAAD,
];

/// Odd multiplier applied after the seed and coordinates are folded together.
const MIX: u32 = 0x12549B;

/// Mask selecting one of the 256 gradient slots.
pub(crate) const GRADIENT_MASK: u32 = 255;

/// Scale turning a full 32-bit hash into a signed fraction below `2^-10`.
const OFFSET_SCALE: f32 = 1.0 / (1u64 << 41) as f32;

/// Multiply, then fold in two rotations.
///
/// A single flipped input bit reaches roughly half of the output bits after
/// the two rotate-xor steps.
#[inline]
const fn finish(folded: i32) -> u32 {
    let h = (folded as u32).wrapping_mul(MIX);
    h ^ h.rotate_left(11) ^ h.rotate_left(23)
}

/// Hash two premultiplied lattice coordinates with a seed.
#[inline]
pub(crate) const fn hash_2d(seed: i32, x: i32, y: i32) -> u32 {
    finish(seed ^ x ^ y)
}

/// Hash three premultiplied lattice coordinates with a seed.
#[inline]
pub(crate) const fn hash_3d(seed: i32, x: i32, y: i32, z: i32) -> u32 {
    finish(seed ^ x ^ y ^ z)
}

/// Hash any number of premultiplied lattice coordinates with a seed.
///
/// Produces the same value as the fixed-arity versions for the same inputs.
#[inline]
pub(crate) fn hash_all(seed: i32, coords: &[i32]) -> u32 {
    finish(coords.iter().fold(seed, |acc, &c| acc ^ c))
}

/// The whole hash read as a signed fixed-point fraction.
///
/// Added to every corner contribution so corners that share a gradient and an
/// offset still contribute slightly different values.
#[inline]
pub(crate) fn hash_offset(h: u32) -> f32 {
    (h as i32) as f32 * OFFSET_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn all_odd(primes: &[i32]) -> bool {
        let mut i = 0;
        while i < primes.len() {
            if primes[i] & 1 == 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    #[test]
    fn axis_primes_are_odd_and_21_bit() {
        for primes in [
            &PRIMES_2D[..],
            &PRIMES_3D[..],
            &PRIMES_4D[..],
            &PRIMES_5D[..],
            &PRIMES_6D[..],
        ] {
            assert!(all_odd(primes));
            for &p in primes {
                assert_eq!(32 - p.leading_zeros(), 21, "{p:#x} is not a 21-bit value");
            }
        }
    }

    #[test]
    fn fixed_arity_matches_slice_hash() {
        for seed in [-7, 0, 1, 123, i32::MAX] {
            let x = 5i32.wrapping_mul(PRIMES_3D[0]);
            let y = (-3i32).wrapping_mul(PRIMES_3D[1]);
            let z = 9i32.wrapping_mul(PRIMES_3D[2]);
            assert_eq!(hash_3d(seed, x, y, z), hash_all(seed, &[x, y, z]));
            assert_eq!(hash_2d(seed, x, y), hash_all(seed, &[x, y]));
        }
    }

    #[test]
    fn single_bit_flip_changes_many_bits() {
        let mut total = 0u32;
        let samples = 256;
        for seed in 0..samples {
            let a = hash_2d(seed, 0x1827F5, 0);
            let b = hash_2d(seed ^ 1, 0x1827F5, 0);
            total += (a ^ b).count_ones();
        }
        let average = total as f32 / samples as f32;
        assert!(
            (8.0..=24.0).contains(&average),
            "average flipped bits {average} is far from half"
        );
    }

    #[test]
    fn offset_is_tiny() {
        for h in [0, 1, u32::MAX, 0x8000_0000, 0x7FFF_FFFF] {
            assert!(hash_offset(h).abs() <= 1.0 / 1024.0);
        }
    }
}
