//! Static gradient catalogs.
//!
//! Every table holds 256 unit vectors so a hash selects one with `hash & 255`.
//! Vectors are stored flat with a power-of-two stride; padding lanes are zero
//! and never read by [`GradientTable::lookup`].

mod tables;

use super::hash::GRADIENT_MASK;

/// A read-only catalog of unit vectors in one dimension.
#[derive(Debug)]
pub struct GradientTable {
    dimension: usize,
    stride: usize,
    data: &'static [f32],
}

/// 256 equidistant directions on the unit circle.
pub(crate) static GRADIENTS_2D: GradientTable = GradientTable {
    dimension: 2,
    stride: 2,
    data: &tables::GRADIENTS_2D,
};

/// 32 rhombic triacontahedron directions, repeated to fill 256 slots.
pub(crate) static GRADIENTS_3D: GradientTable = GradientTable {
    dimension: 3,
    stride: 4,
    data: &tables::GRADIENTS_3D,
};

pub(crate) static GRADIENTS_4D: GradientTable = GradientTable {
    dimension: 4,
    stride: 4,
    data: &tables::GRADIENTS_4D,
};

pub(crate) static GRADIENTS_5D: GradientTable = GradientTable {
    dimension: 5,
    stride: 8,
    data: &tables::GRADIENTS_5D,
};

pub(crate) static GRADIENTS_6D: GradientTable = GradientTable {
    dimension: 6,
    stride: 8,
    data: &tables::GRADIENTS_6D,
};

impl GradientTable {
    /// The table for `dimension`, or `None` outside `2..=6`.
    #[must_use]
    pub fn for_dimension(dimension: usize) -> Option<&'static Self> {
        match dimension {
            2 => Some(&GRADIENTS_2D),
            3 => Some(&GRADIENTS_3D),
            4 => Some(&GRADIENTS_4D),
            5 => Some(&GRADIENTS_5D),
            6 => Some(&GRADIENTS_6D),
            _ => None,
        }
    }

    /// Number of components in each vector.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Distance in floats between consecutive vectors.
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Number of hash slots (always 256).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len() / self.stride
    }

    /// Always `false`; present for API symmetry with [`len`](Self::len).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Offset of the vector selected by `hash` inside the flat data.
    #[inline]
    pub(crate) const fn offset(&self, hash: u32) -> usize {
        (hash & GRADIENT_MASK) as usize * self.stride
    }

    /// The unit vector selected by the low bits of `hash`.
    #[inline]
    #[must_use]
    pub fn lookup(&self, hash: u32) -> &'static [f32] {
        let start = self.offset(hash);
        &self.data[start..start + self.dimension]
    }

    /// Dot product of the selected vector with `delta`.
    ///
    /// `delta` must hold `dimension` components. The sum is accumulated in
    /// axis order starting from `start`.
    #[inline]
    pub(crate) fn dot(&self, hash: u32, start: f32, delta: &[f32]) -> f32 {
        self.lookup(hash)
            .iter()
            .zip(delta)
            .fold(start, |acc, (g, d)| acc + d * g)
    }

    /// Iterate all 256 vectors in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &'static [f32]> + '_ {
        let dimension = self.dimension;
        self.data
            .chunks_exact(self.stride)
            .map(move |chunk| &chunk[..dimension])
    }
}
