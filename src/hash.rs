// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Double hashing of items into bit positions.
//!
//! A single 64-bit hash of the item is turned into `k` positions by walking
//! `a, a + d₁, a + d₁ + d₂, …` modulo the filter width, where the step starts
//! odd and grows by `i` on step `i`. Positions are not deduplicated: two steps
//! landing on the same bit simply set it once.
use std::hash::Hasher;
use std::iter::FusedIterator;

use siphasher::sip::SipHasher13;

use crate::bitfield::BitField;

/// Seed passed to [`hash64`] for every item.
pub const HASH_SEED: u64 = 0;

/// Mixed into the item hash before the probe sequence is derived.
/// Part of the byte format: changing it changes every serialized filter.
pub const DECORRELATION_CONSTANT: u64 = 0x6740_BCA3_7BE0_516D;

/// Hash a byte string to 64 bits with SipHash-1-3, keyed by `seed`.
pub fn hash64(bytes: &[u8], seed: u64) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(seed, 0);
    hasher.write(bytes);
    hasher.finish()
}

/// Iterator over the `k` bit positions of an item in a filter of a given width.
///
/// Created by [`indices`].
#[derive(Clone, Debug)]
pub struct Indices {
    a: u64,
    delta: u64,
    bits: u64,
    step: u64,
    hashes: u64,
}

impl Iterator for Indices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.step >= self.hashes {
            return None;
        }
        self.delta = self.delta.wrapping_add(self.step);

        let bit = self.a % self.bits;

        self.a = self.a.wrapping_add(self.delta);
        self.step += 1;

        Some(bit as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.hashes - self.step) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Indices {}

impl FusedIterator for Indices {}

/// Return the `hashes` bit positions of `item` in a filter that is `bits` wide.
///
/// Every position is in `[0, bits)`. The sequence depends only on the
/// arguments.
///
/// # Panics
///
/// Panics if `bits` is zero.
pub fn indices(item: &[u8], bits: usize, hashes: u16) -> Indices {
    assert!(bits > 0, "unable to index into a filter with no bits");

    // Taken as a signed value, negatives are folded onto their magnitude.
    let h = hash64(item, HASH_SEED) as i64;
    let a = h.wrapping_abs() as u64 ^ DECORRELATION_CONSTANT;
    // An odd step is coprime with any power-of-two width.
    let delta = a.rotate_left(17) | 1;

    Indices {
        a,
        delta,
        bits: bits as u64,
        step: 0,
        hashes: hashes as u64,
    }
}

/// Return the positions of `item` as a mask of width `bits`.
pub fn mask(item: &[u8], bits: usize, hashes: u16) -> BitField {
    let mut mask = BitField::new(bits);
    for index in indices(item, bits, hashes) {
        mask.set(index);
    }
    mask
}
