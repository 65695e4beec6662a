// Copyright (c) 2018 Aleksandr Bezobchuk
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! A Bloom filter over byte strings using double hashing.

use log::debug;

use crate::bitfield::BitField;
use crate::error::{Error, Result};
use crate::hash;
use crate::params::{optimal_parameters, DEFAULT_FALSE_POSITIVE_RATE};

/// Outcome of comparing two filters with [`BloomFilter::compare`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// The filters have different widths or hash counts.
    Incompatible,
    /// The filters have identical bit fields.
    Equal,
    /// This filter holds more items, by estimate.
    Larger,
    /// This filter holds fewer items, by estimate.
    Smaller,
    /// The estimated sizes are the same, but the bit fields differ.
    Inequal,
}

/// A Bloom filter over byte strings.
///
/// The width (`bits`) and the number of positions set per item (`k`) are
/// fixed for the lifetime of the filter. Bits are only ever set, so an item
/// that was inserted is always reported as present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BloomFilter {
    state: BitField,
    nhashes: u16,
}

impl BloomFilter {
    /// Return a new, empty Bloom filter that is `bits` wide and sets `hashes`
    /// positions per item.
    ///
    /// # Panics
    ///
    /// Panics if `bits` or `hashes` is zero.
    pub fn new(bits: usize, hashes: u16) -> BloomFilter {
        assert!(bits > 0, "a filter must have at least one bit");
        assert!(hashes > 0, "a filter must use at least one hash");

        BloomFilter {
            state: BitField::new(bits),
            nhashes: hashes,
        }
    }

    /// Return a new Bloom filter with a given approximate item capacity.
    /// The false positive probability is [`DEFAULT_FALSE_POSITIVE_RATE`].
    pub fn with_capacity(capacity: usize) -> BloomFilter {
        BloomFilter::with_rate(capacity, DEFAULT_FALSE_POSITIVE_RATE)
    }

    /// Return a new Bloom filter with a given approximate item capacity
    /// and a desired false positive rate.
    ///
    /// The width is rounded up to a power of two.
    pub fn with_rate(capacity: usize, fp_rate: f64) -> BloomFilter {
        let (bits, hashes) = optimal_parameters(capacity, fp_rate);

        BloomFilter::new(bits.next_power_of_two(), hashes)
    }

    /// Build a filter sized for `items` at [`DEFAULT_FALSE_POSITIVE_RATE`] and
    /// insert every item into it, in order.
    pub fn from_collection<I, T>(items: I) -> BloomFilter
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let items: Vec<T> = items.into_iter().collect();
        let mut bf = BloomFilter::with_capacity(items.len());

        debug!(
            "building filter for {} items: bits={}, k={}",
            items.len(),
            bf.bits(),
            bf.hashes()
        );
        bf.extend(items);
        bf
    }

    pub(crate) fn from_parts(state: BitField, hashes: u16) -> BloomFilter {
        BloomFilter {
            state,
            nhashes: hashes,
        }
    }

    /// Set an item in the Bloom filter. This operation is idempotent with regards
    /// to each unique item.
    pub fn insert(&mut self, item: impl AsRef<[u8]>) {
        for index in hash::indices(item.as_ref(), self.bits(), self.nhashes) {
            self.state.set(index);
        }
    }

    /// Return whether or not a given item is likely in the Bloom filter or not. There is a
    /// possibility for a false positive, but a false negative will never occur.
    pub fn contains(&self, item: impl AsRef<[u8]>) -> bool {
        self.state.contains_all(&self.mask(item))
    }

    /// Return the positions of `item` in this filter, as a bit field of the
    /// same width.
    pub fn mask(&self, item: impl AsRef<[u8]>) -> BitField {
        hash::mask(item.as_ref(), self.bits(), self.nhashes)
    }

    /// Add every item of `other` to this filter.
    ///
    /// Fails with [`Error::ParameterMismatch`] if the filters are not
    /// [compatible](BloomFilter::is_compatible), leaving `self` untouched.
    pub fn union(&mut self, other: &Self) -> Result<()> {
        if !self.is_compatible(other) {
            debug!(
                "refusing union of bits={} k={} with bits={} k={}",
                self.bits(),
                self.hashes(),
                other.bits(),
                other.hashes()
            );
            return Err(Error::ParameterMismatch {
                expected: (self.bits(), self.hashes()),
                found: (other.bits(), other.hashes()),
            });
        }
        self.state.union_with(&other.state);

        Ok(())
    }

    /// Compare this filter against another.
    ///
    /// [`Comparison::Larger`] and [`Comparison::Smaller`] describe `self`
    /// relative to `other`, going by [`BloomFilter::estimated_size`].
    pub fn compare(&self, other: &Self) -> Comparison {
        if !self.is_compatible(other) {
            return Comparison::Incompatible;
        }
        if self.state == other.state {
            return Comparison::Equal;
        }
        let (a, b) = (self.estimated_size(), other.estimated_size());

        if a > b {
            Comparison::Larger
        } else if a < b {
            Comparison::Smaller
        } else {
            Comparison::Inequal
        }
    }

    /// Estimate the number of distinct items in the filter.
    ///
    /// Computed as `-(m/k)·ln(1 - X/m)` for `m` bits of which `X` are set. A
    /// filter with every bit set has no finite estimate and returns
    /// [`f64::INFINITY`].
    pub fn estimated_size(&self) -> f64 {
        let nbits = self.bits() as f64;
        let nbits_set = self.state.count_ones() as f64;
        let nhashes = self.nhashes as f64;

        if nbits_set >= nbits {
            return f64::INFINITY;
        }
        -(nbits / nhashes) * (1. - (nbits_set / nbits)).ln()
    }

    /// Count the approximate number of items in the filter.
    ///
    /// Saturates at [`usize::MAX`] when the filter is full.
    pub fn count(&self) -> usize {
        self.estimated_size().round() as usize
    }

    /// Return the number of bits in this filter.
    pub fn bits(&self) -> usize {
        self.state.len()
    }

    /// Number of hashes used (`k` parameter).
    pub fn hashes(&self) -> u16 {
        self.nhashes
    }

    /// Number of bits set.
    pub fn count_ones(&self) -> usize {
        self.state.count_ones()
    }

    /// Check whether nothing was inserted.
    pub fn is_empty(&self) -> bool {
        self.state.count_ones() == 0
    }

    /// Check whether two filters can be compared and unioned.
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.nhashes == other.nhashes && self.bits() == other.bits()
    }

    /// Return the underlying bytes storage.
    pub fn as_bytes(&self) -> &[u8] {
        self.state.as_bytes()
    }
}

impl AsRef<[u8]> for BloomFilter {
    fn as_ref(&self) -> &[u8] {
        self.state.as_bytes()
    }
}

impl<T: AsRef<[u8]>> Extend<T> for BloomFilter {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: AsRef<[u8]>> FromIterator<T> for BloomFilter {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        BloomFilter::from_collection(iter)
    }
}
