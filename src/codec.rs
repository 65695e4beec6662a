// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Byte encoding of Bloom filters.
//!
//! ```text
//! 0       2                          2 + ⌈bits/8⌉
//! +-------+--------------------------+
//! | k u16 | bit field, little-endian |
//! +-------+--------------------------+
//! ```
//!
//! There is no magic number, version or checksum. The width is not stored: it
//! is recovered as `(len - 2) * 8`, so a filter whose width is not a multiple
//! of `8` comes back wider, with the extra bits unset. Its membership answers
//! change accordingly, since positions are taken modulo the width.
use byteorder::{ByteOrder, LittleEndian};
use log::debug;

use crate::bitfield::BitField;
use crate::bloom::BloomFilter;
use crate::error::{Error, Result};

/// Length of the `k` header, in bytes.
pub const HEADER_LEN: usize = 2;

impl BloomFilter {
    /// Encode this filter to bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let state = self.as_bytes();
        let mut bytes = vec![0; HEADER_LEN + state.len()];

        LittleEndian::write_u16(&mut bytes[..HEADER_LEN], self.hashes());
        bytes[HEADER_LEN..].copy_from_slice(state);

        bytes
    }

    /// Decode a filter from bytes produced by [`BloomFilter::to_bytes`].
    ///
    /// Fails with [`Error::MalformedInput`] if the buffer is shorter than the
    /// header, if `k` is zero, or if there is no bit field after the header.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            debug!("rejecting {} byte filter buffer", bytes.len());
            return Err(Error::malformed(format!(
                "buffer too short: expected at least {} bytes, got {}",
                HEADER_LEN,
                bytes.len()
            )));
        }
        let (header, state) = bytes.split_at(HEADER_LEN);
        let hashes = LittleEndian::read_u16(header);

        if hashes == 0 {
            return Err(Error::malformed("number of hashes is zero"));
        }
        if state.is_empty() {
            return Err(Error::malformed("filter has no bits"));
        }
        Ok(BloomFilter::from_parts(BitField::from(state.to_vec()), hashes))
    }
}

impl TryFrom<&[u8]> for BloomFilter {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        BloomFilter::from_bytes(bytes)
    }
}

impl From<&BloomFilter> for Vec<u8> {
    fn from(filter: &BloomFilter) -> Vec<u8> {
        filter.to_bytes()
    }
}

impl From<BloomFilter> for Vec<u8> {
    fn from(filter: BloomFilter) -> Vec<u8> {
        filter.to_bytes()
    }
}
