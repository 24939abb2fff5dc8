//! Buffer fixtures.

use arrkit_core::TypedBuffer;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// `len` integers drawn uniformly from the full `i32` range.
pub fn random_i32(seed: u64, len: usize) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random::<i32>()).collect()
}

/// `len` integers drawn uniformly from `low..high`.
///
/// Matches the host benchmark workload (`0..500_000`), which keeps every
/// pairwise difference inside `i32`.
pub fn random_i32_in(seed: u64, len: usize, low: i32, high: i32) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(low..high)).collect()
}

/// `len` floats drawn uniformly from `-1000.0..1000.0`.
pub fn random_f32(seed: u64, len: usize) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(-1000.0f32..1000.0)).collect()
}

/// Integers that stress wrapping and comparator overflow.
pub fn edge_case_i32() -> Vec<i32> {
    vec![i32::MAX, i32::MIN, 0, -1, 1, i32::MAX - 1, i32::MIN + 1]
}

/// Native-endian byte image of `values`.
pub fn i32_as_bytes(values: &[i32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_ne_bytes()).collect()
}

/// Decode a native-endian byte image back into integers.
pub fn i32_from_bytes(bytes: &[u8]) -> Vec<i32> {
    bytes
        .chunks_exact(4)
        .map(|c| i32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}

/// A random buffer of either kind.
pub fn random_typed(seed: u64, int: bool, len: usize) -> TypedBuffer {
    if int {
        TypedBuffer::Int32(random_i32_in(seed, len, -500_000, 500_000))
    } else {
        TypedBuffer::Float32(random_f32(seed, len))
    }
}
