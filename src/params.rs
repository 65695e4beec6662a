// Copyright (c) 2018 Aleksandr Bezobchuk
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Filter sizing.
use std::f64;

use log::trace;

/// The default false positive probability value, 0.1%.
pub const DEFAULT_FALSE_POSITIVE_RATE: f64 = 0.001;

/// Smallest filter width the optimizer will return.
pub const MIN_BITS: usize = 8;

/// Largest hash count the optimizer will consider.
pub const MAX_HASHES: u16 = 999;

/// Base of the false positive approximation, see [`expected_false_positives`].
const FALSE_POSITIVE_BASE: f64 = 0.61285;

/// Return the filter width and hash count (`(bits, k)`) that minimize the
/// filter size for `capacity` items at the given false positive rate.
///
/// Every `k` in `1..=999` is tried against `m = -k·n / ln(1 - p^(1/k))` and the
/// smallest `m` wins; ties go to the smaller `k`. The width is rounded up and is
/// at least [`MIN_BITS`].
pub fn optimal_parameters(capacity: usize, fp_rate: f64) -> (usize, u16) {
    let n = capacity as f64;
    let mut best: Option<(f64, u16)> = None;

    for k in 1..=MAX_HASHES {
        let kf = k as f64;
        let m = (-kf * n) / (1. - fp_rate.powf(1. / kf)).ln();

        if best.map_or(true, |(min, _)| m < min) {
            best = Some((m, k));
        }
    }
    let (m, k) = best.unwrap_or((0., 1));
    let bits = usize::max(m.ceil() as usize, MIN_BITS);
    let k = u16::max(k, 1);

    trace!(
        "optimal parameters for {} items at p={}: bits={}, k={}",
        capacity,
        fp_rate,
        bits,
        k
    );
    (bits, k)
}

/// Return the optimal number of hash functions for a Bloom filter given a
/// bit vector size and an approximate set size.
///
/// Also called `k`. Never less than `1`.
pub fn optimal_k(nbits: usize, capacity: usize) -> u16 {
    if capacity == 0 {
        return 1;
    }
    let k = ((nbits as f64 / capacity as f64) * f64::consts::LN_2).ceil();

    k.clamp(1., u16::MAX as f64) as u16
}

/// Approximate false positive rate of a filter that is `nbits` wide and holds
/// `capacity` items, computed as `0.61285^(m/n)`.
///
/// This assumes `k` was chosen optimally for `m/n`.
pub fn expected_false_positives(nbits: usize, capacity: usize) -> f64 {
    FALSE_POSITIVE_BASE.powf(nbits as f64 / capacity as f64)
}
