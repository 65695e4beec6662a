//! A compact Bloom filter over byte strings, with a stable byte format.
//!
//! # Bloom Filters
//!
//! A Bloom filter is a space-efficient probabilistic data structure that is
//! used to test whether an element is a member of a set. It allows for queries
//! to return: "possibly in set" or "definitely not in set". Elements can be
//! added to the set, but not removed; the more elements that are added to the
//! set, the larger the probability of false positives.
//!
//! Filters are created empty with an explicit width and hash count, sized for
//! an expected number of items, or built from a known collection. Two filters
//! with the same parameters can be unioned, and compared by their estimated
//! number of items.
//!
//! # Double Hashing
//!
//! Each item is hashed once, with SipHash-1-3. The `k` bit positions are then
//! derived from that single hash by repeatedly adding an odd, growing step:
//!
//! a<sub>0</sub> = H(x) ⊕ c, d<sub>0</sub> = rotl(a<sub>0</sub>, 17) | 1,
//! d<sub>i</sub> = d<sub>i-1</sub> + i, g<sub>i</sub>(x) = a<sub>i</sub> mod m,
//! a<sub>i+1</sub> = a<sub>i</sub> + d<sub>i</sub>
//!
//! # Byte Format
//!
//! A filter encodes to a two byte little-endian `k`, followed by the bit field.
//! See [`codec`] for details.
//!
//! # Example
//!
//! ```
//! use bloomfield::{BloomFilter, Comparison};
//!
//! let mut filter = BloomFilter::new(64, 4);
//!
//! filter.insert("alpha");
//! filter.insert("beta");
//!
//! assert!(filter.contains("alpha"));
//! assert!(filter.contains("beta"));
//!
//! let bytes = filter.to_bytes();
//! let decoded = BloomFilter::from_bytes(&bytes).unwrap();
//!
//! assert_eq!(decoded.compare(&filter), Comparison::Equal);
//! assert_eq!(filter.count(), 2);
//! ```
#![warn(missing_docs)]
#![allow(clippy::bool_assert_comparison)]

pub mod bitfield;
pub mod bloom;
pub mod codec;
pub mod error;
pub mod hash;
pub mod params;

pub use bloom::{BloomFilter, Comparison};
pub use error::{Error, Result};
pub use params::{
    expected_false_positives, optimal_k, optimal_parameters, DEFAULT_FALSE_POSITIVE_RATE,
};
