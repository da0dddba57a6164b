// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Base-2 logarithm buckets.
//!
//! The bucket of an index `i` is `floor(log2(i)) + 1`, i.e. the number of bits needed to
//! represent `i`. Index zero is the exception and lands in bucket zero.

use std::ops::Index;

/// Returns `floor(log2(i)) + 1`. There is an exception: for `i == 0`, it returns 0.
pub const fn bucket_value(i: u64) -> u8 {
    (u64::BITS - i.leading_zeros()) as u8
}

/// The bucket values of the indices `0..len`, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketSequence(Vec<u8>);

impl BucketSequence {
    /// Compute the buckets for every index below `len`.
    pub fn new(len: usize) -> Self {
        Self((0..len as u64).map(bucket_value).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The bucket of index `i`, or `None` if `i` is outside the sequence.
    pub fn get(&self, i: usize) -> Option<u8> {
        self.0.get(i).copied()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }
}

impl Index<usize> for BucketSequence {
    type Output = u8;

    fn index(&self, i: usize) -> &u8 {
        &self.0[i]
    }
}

impl AsRef<[u8]> for BucketSequence {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
