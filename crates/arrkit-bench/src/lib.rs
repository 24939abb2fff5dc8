//! Benchmark workloads for the arrkit array surface.
//!
//! - [`host_profile`]: 1M integers in `0..500_000`, the size used by the
//!   host-language sort comparison
//! - [`small_profile`]: 1K integers, for per-call overhead
//! - [`full_range_profile`]: integers over all of `i32`, which the
//!   difference comparator must reject

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use arrkit_test_utils::{random_i32, random_i32_in};

/// Element count of [`host_profile`].
pub const HOST_LEN: usize = 1_000_000;

/// Exclusive upper bound of [`host_profile`] values.
pub const HOST_MAX: i32 = 500_000;

/// 1M integers drawn from `0..500_000`.
pub fn host_profile(seed: u64) -> Vec<i32> {
    random_i32_in(seed, HOST_LEN, 0, HOST_MAX)
}

/// 1K integers drawn from `0..500_000`.
pub fn small_profile(seed: u64) -> Vec<i32> {
    random_i32_in(seed, 1_000, 0, HOST_MAX)
}

/// 10K integers over the full `i32` range.
pub fn full_range_profile(seed: u64) -> Vec<i32> {
    random_i32(seed, 10_000)
}
