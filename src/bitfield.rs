// Copyright (c) 2020 Helge Wrede, Alexander Schultheiß, Lukas Simon
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Fixed-width bit field backing a Bloom filter.
//!
//! Bits are packed little-endian: byte `0` holds bits `[0, 8)`, and bit `0` of
//! the field is the least significant bit of byte `0`. This is also the wire
//! layout used by [`crate::codec`], so the storage can be written out as-is.
use std::fmt::Debug;

/// A packed, fixed-width bit field.
///
/// Storage bits past [`BitField::len`] are always zero.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitField {
    bytes: Vec<u8>,
    nbits: usize,
}

impl BitField {
    /// Create a new, all-zero bit field of the given width, in bits.
    pub fn new(width: usize) -> Self {
        Self {
            nbits: width,
            bytes: vec![0; width.div_ceil(8)],
        }
    }

    /// Get the width in bits of the field.
    pub fn len(&self) -> usize {
        self.nbits
    }

    /// Check whether this field has a width of zero.
    pub fn is_empty(&self) -> bool {
        self.nbits == 0
    }

    /// Set a single bit to `1`.
    pub fn set(&mut self, index: usize) {
        self.check_bounds(index);

        self.bytes[index / 8] |= 1 << (index % 8);
    }

    /// Check whether a bit is set.
    pub fn is_set(&self, index: usize) -> bool {
        self.check_bounds(index);

        let mask = 1 << (index % 8);
        self.bytes[index / 8] & mask == mask
    }

    /// Count the number of `1` bits. This is the population count of the field.
    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Count the number of `0` bits.
    pub fn count_zeros(&self) -> usize {
        self.len() - self.count_ones()
    }

    /// Bitwise `OR` another field of the same width into this one.
    pub fn union_with(&mut self, other: &Self) {
        self.check_width(other, "union");

        for (a, b) in self.bytes.iter_mut().zip(other.bytes.iter()) {
            *a |= b;
        }
    }

    /// Return the bitwise `AND` of two fields of the same width.
    pub fn intersection(&self, other: &Self) -> Self {
        self.check_width(other, "intersect");

        Self {
            bytes: self
                .bytes
                .iter()
                .zip(other.bytes.iter())
                .map(|(a, b)| a & b)
                .collect(),
            nbits: self.nbits,
        }
    }

    /// Check whether every bit set in `mask` is also set in `self`,
    /// ie. `self & mask == mask`.
    pub fn contains_all(&self, mask: &Self) -> bool {
        self.check_width(mask, "mask");

        self.bytes
            .iter()
            .zip(mask.bytes.iter())
            .all(|(a, m)| a & m == *m)
    }

    /// Return the underlying bytes storage.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn check_bounds(&self, index: usize) {
        if index >= self.len() {
            panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len(),
                index,
            )
        }
    }

    fn check_width(&self, other: &Self, op: &str) {
        if self.nbits != other.nbits {
            panic!(
                "unable to {} bit fields with different widths: {} and {}",
                op, self.nbits, other.nbits
            );
        }
    }
}

/// Bit fields restored from raw bytes always have a width that is a
/// multiple of `8`.
impl From<Vec<u8>> for BitField {
    fn from(bytes: Vec<u8>) -> Self {
        let nbits = bytes.len() * 8;

        Self { bytes, nbits }
    }
}

impl From<BitField> for Vec<u8> {
    fn from(other: BitField) -> Vec<u8> {
        other.bytes
    }
}

impl Debug for BitField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bits: String = (0..self.nbits)
            .map(|i| if self.is_set(i) { '1' } else { '0' })
            .collect();
        write!(f, "BitField({})", bits)
    }
}
