//! Module for the `TranspositionTable`, a hashmap-like structure where
//! position keys map to previously computed subtree counts.
//!
//! The table is a flat, zero-initialized array of entries. A key's `index`
//! field, masked down to a 4-entry boundary, selects a bucket of
//! [`BUCKET_SIZE`] consecutive entries; the key's `code` field disambiguates
//! collisions inside the bucket. An entry stores the subtree count in 56
//! bits and the depth it was computed at in 8 bits, so a zeroed entry reads
//! as empty.
//!
//! [`BUCKET_SIZE`]: constant.BUCKET_SIZE.html

use std::collections::TryReserveError;
use std::mem;

use super::{prefetch_write, PreFetchable};
use crate::helper::zobrist::Key;

/// Number of entries per bucket.
pub const BUCKET_SIZE: usize = 4;

/// The largest supported table size, in bits of addressable entries.
pub const MAX_TABLE_BITS: u32 = 32;

/// A single entry of the table: the key's 64-bit code, plus the subtree
/// count and depth packed into one u64 (count in the upper 56 bits, depth
/// in the low 8).
#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    code: u64,
    data: u64,
}

impl Entry {
    #[inline(always)]
    fn make(code: u64, depth: u8, count: u64) -> Entry {
        debug_assert!(count < (1u64 << 56));
        Entry {
            code,
            data: (count << 8) | u64::from(depth),
        }
    }

    /// The depth the stored count was computed at.
    #[inline(always)]
    fn depth(self) -> u8 {
        (self.data & 0xFF) as u8
    }

    /// The stored subtree count.
    #[inline(always)]
    fn count(self) -> u64 {
        self.data >> 8
    }
}

/// A fixed-capacity table mapping `(key, depth)` to subtree counts.
///
/// Construction takes the number of address bits `b` and allocates
/// `2^b + BUCKET_SIZE` zeroed entries, so that the last bucket may extend
/// past the addressable range without wrapping.
pub struct TranspositionTable {
    entries: Box<[Entry]>,
    mask: u64,
}

impl TranspositionTable {
    /// Creates a table with `2^bits` addressable entries. Fails cleanly if
    /// the backing allocation cannot be obtained.
    pub fn new(bits: u32) -> Result<TranspositionTable, TryReserveError> {
        debug_assert!(bits <= MAX_TABLE_BITS);
        let n = 1usize << bits;
        let mut vec: Vec<Entry> = Vec::new();
        vec.try_reserve_exact(n + BUCKET_SIZE)?;
        vec.resize(n + BUCKET_SIZE, Entry::default());
        Ok(TranspositionTable {
            entries: vec.into_boxed_slice(),
            mask: (n as u64 - 1) & !3,
        })
    }

    /// Returns the size of the backing array in megabytes.
    pub fn size_megabytes(&self) -> usize {
        (self.entries.len() * mem::size_of::<Entry>()) >> 20
    }

    /// Returns the bucket this key addresses.
    #[inline(always)]
    fn bucket_idx(&self, key: Key) -> usize {
        (u64::from(key.index) & self.mask) as usize
    }

    /// Looks up the count stored for `(key, depth)`. Returns 0 on a miss.
    ///
    /// A stored count of zero is indistinguishable from a miss; the walker
    /// recomputes in that case, which yields zero again.
    #[inline]
    pub fn probe(&self, key: Key, depth: u8) -> u64 {
        let idx = self.bucket_idx(key);
        for entry in &self.entries[idx..idx + BUCKET_SIZE] {
            if entry.code == key.code && entry.depth() == depth {
                return entry.count();
            }
        }
        0
    }

    /// Stores a count for `(key, depth)`. If the bucket already holds this
    /// exact slot the store is dropped; otherwise the entry with the
    /// smallest stored depth is replaced, favoring the retention of deeper,
    /// more expensive subtree counts.
    pub fn store(&mut self, key: Key, depth: u8, count: u64) {
        let idx = self.bucket_idx(key);
        let bucket = &mut self.entries[idx..idx + BUCKET_SIZE];
        let mut replace = 0;
        for i in 0..BUCKET_SIZE {
            if bucket[i].code == key.code && bucket[i].depth() == depth {
                return;
            }
            if bucket[i].depth() < bucket[replace].depth() {
                replace = i;
            }
        }
        bucket[replace] = Entry::make(key.code, depth, count);
    }
}

impl PreFetchable for TranspositionTable {
    /// Pre-loads the bucket the key addresses.
    #[inline(always)]
    fn prefetch(&self, key: Key) {
        let idx = self.bucket_idx(key);
        prefetch_write(&self.entries[idx]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: u64, index: u32) -> Key {
        Key { code, index }
    }

    #[test]
    fn tt_probe_miss_returns_zero() {
        let tt = TranspositionTable::new(10).unwrap();
        assert_eq!(tt.probe(key(0xDEAD_BEEF, 77), 5), 0);
    }

    #[test]
    fn tt_store_and_probe() {
        let mut tt = TranspositionTable::new(10).unwrap();
        let k = key(0xDEAD_BEEF, 77);
        tt.store(k, 5, 123_456);
        assert_eq!(tt.probe(k, 5), 123_456);
        // same code, different depth: distinct slot
        assert_eq!(tt.probe(k, 4), 0);
    }

    #[test]
    fn tt_store_keeps_existing_slot() {
        let mut tt = TranspositionTable::new(10).unwrap();
        let k = key(1, 8);
        tt.store(k, 3, 42);
        tt.store(k, 3, 9999);
        assert_eq!(tt.probe(k, 3), 42);
    }

    #[test]
    fn tt_replaces_shallowest_in_full_bucket() {
        let mut tt = TranspositionTable::new(4).unwrap();
        // same bucket (index bits masked to a 4-aligned boundary)
        let keys: Vec<Key> = (1..=4u64).map(|c| key(c, 2)).collect();
        for (i, k) in keys.iter().enumerate() {
            tt.store(*k, (i + 3) as u8, 100 + i as u64);
        }
        // bucket is now full; depth 3 is the shallowest and gets evicted
        let newcomer = key(99, 2);
        tt.store(newcomer, 10, 555);
        assert_eq!(tt.probe(newcomer, 10), 555);
        assert_eq!(tt.probe(keys[0], 3), 0);
        assert_eq!(tt.probe(keys[1], 4), 101);
    }

    #[test]
    fn tt_bucket_addressing_is_aligned() {
        let mut tt = TranspositionTable::new(6).unwrap();
        // indices 4..8 address the same bucket
        for i in 4..8u32 {
            tt.store(key(u64::from(i), i), 7, u64::from(i));
        }
        for i in 4..8u32 {
            assert_eq!(tt.probe(key(u64::from(i), 4), 7), u64::from(i));
        }
    }

    #[test]
    fn tt_randomized_store_probe() {
        use rand::{Rng, SeedableRng};
        let mut rng = rand::rngs::StdRng::seed_from_u64(0xFEED);
        let mut tt = TranspositionTable::new(12).unwrap();
        let mut stored: Vec<(Key, u8, u64)> = Vec::new();
        for _ in 0..200 {
            let k = key(rng.gen::<u64>() | 1, rng.gen());
            let depth = rng.gen_range(3..60);
            let count = u64::from(rng.gen::<u32>());
            tt.store(k, depth, count);
            stored.push((k, depth, count));
        }
        // whatever probe returns must be either a miss or the exact value
        for (k, depth, count) in stored {
            let got = tt.probe(k, depth);
            assert!(got == 0 || got == count);
        }
    }
}
