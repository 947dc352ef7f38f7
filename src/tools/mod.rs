//! Miscellaneous tools used by the perft walker. Most notably this module
//! contains the `TranspositionTable`, a fixed-capacity bucketed cache for
//! subtree counts, and the pseudo-random number generator seeding the
//! Zobrist keys.

pub mod prng;
pub mod tt;

use crate::helper::zobrist::Key;

/// Allows an object to have its entries pre-fetchable.
pub trait PreFetchable {
    /// Pre-fetches a particular key. This means bringing it into the cache
    /// for faster access.
    fn prefetch(&self, key: Key);
}

/// Prefetches `ptr` to all levels of the cache.
///
/// For some platforms this may compile down to nothing, and be optimized
/// away. To prevent compiling down into nothing, compilation must be done
/// for a `x86` or `x86_64` platform with SSE instructions available.
#[inline(always)]
pub fn prefetch_write<T>(ptr: *const T) {
    __prefetch_write::<T>(ptr);
}

#[cfg(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse"
))]
#[inline(always)]
fn __prefetch_write<T>(ptr: *const T) {
    #[cfg(target_arch = "x86")]
    use std::arch::x86::_mm_prefetch;
    #[cfg(target_arch = "x86_64")]
    use std::arch::x86_64::_mm_prefetch;
    unsafe {
        _mm_prefetch(ptr as *const i8, 3);
    }
}

#[cfg(not(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse"
)))]
#[inline(always)]
fn __prefetch_write<T>(_ptr: *const T) {
    // Do nothing
}
