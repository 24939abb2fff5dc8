//! Index sequences and other generated values.

use crate::buffer;
use crate::error::ArrayError;

/// Largest element count whose indices all fit in an `i32`.
pub const MAX_SEQUENCE_LEN: usize = i32::MAX as usize + 1;

/// Largest `n` whose Fibonacci number fits in a `u64`.
pub const MAX_FIBONACCI_INDEX: u32 = 93;

/// Allocate a buffer of `size` elements where element `i` holds `i`.
///
/// Fails with [`ArrayError::RangeOverflow`] when the last index cannot be
/// represented as an `i32`, and with [`ArrayError::InvalidLength`] when the
/// allocation fails.
pub fn generate(size: usize) -> Result<Vec<i32>, ArrayError> {
    if size > MAX_SEQUENCE_LEN {
        return Err(ArrayError::RangeOverflow {
            reason: format!("index {} does not fit in int32", size - 1),
        });
    }
    let mut v = buffer::reserve(size)?;
    v.extend((0..size).map(|i| i as i32));
    Ok(v)
}

/// Overwrite the first `size` elements of `buffer` with `0..size`.
///
/// Elements past `size` are left as they were. The buffer is untouched
/// when `size` exceeds its length.
pub fn fill(buffer: &mut [i32], size: usize) -> Result<(), ArrayError> {
    ArrayError::check_length(size, buffer.len())?;
    if size > MAX_SEQUENCE_LEN {
        return Err(ArrayError::RangeOverflow {
            reason: format!("index {} does not fit in int32", size - 1),
        });
    }
    for (i, slot) in buffer[..size].iter_mut().enumerate() {
        *slot = i as i32;
    }
    Ok(())
}

/// The `n`th Fibonacci number, with `fibonacci(0) == 0`.
pub fn fibonacci(n: u32) -> Result<u64, ArrayError> {
    if n > MAX_FIBONACCI_INDEX {
        return Err(ArrayError::RangeOverflow {
            reason: format!("fibonacci({n}) exceeds uint64"),
        });
    }
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..n {
        let next = a + b;
        a = b;
        b = next;
    }
    Ok(a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn generate_zero_is_empty() {
        assert_eq!(generate(0).unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn generate_small() {
        assert_eq!(generate(5).unwrap(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn generate_rejects_unrepresentable_indices() {
        assert!(matches!(
            generate(MAX_SEQUENCE_LEN + 1),
            Err(ArrayError::RangeOverflow { .. })
        ));
    }

    #[test]
    fn fill_prefix_leaves_tail() {
        let mut buf = vec![9; 6];
        fill(&mut buf, 4).unwrap();
        assert_eq!(buf, vec![0, 1, 2, 3, 9, 9]);
    }

    #[test]
    fn fill_oversized_is_invalid_length() {
        let mut buf = vec![7; 3];
        assert_eq!(
            fill(&mut buf, 4),
            Err(ArrayError::InvalidLength {
                requested: 4,
                capacity: 3
            })
        );
        assert_eq!(buf, vec![7, 7, 7]);
    }

    #[test]
    fn fibonacci_known_values() {
        assert_eq!(fibonacci(0).unwrap(), 0);
        assert_eq!(fibonacci(1).unwrap(), 1);
        assert_eq!(fibonacci(10).unwrap(), 55);
        assert_eq!(fibonacci(35).unwrap(), 9_227_465);
        assert_eq!(fibonacci(93).unwrap(), 12_200_160_415_121_876_738);
    }

    #[test]
    fn fibonacci_past_u64_overflows() {
        assert!(matches!(
            fibonacci(94),
            Err(ArrayError::RangeOverflow { .. })
        ));
    }

    proptest! {
        #[test]
        fn generate_holds_its_indices(n in 0usize..2048) {
            let buf = generate(n).unwrap();
            prop_assert_eq!(buf.len(), n);
            for (i, &v) in buf.iter().enumerate() {
                prop_assert_eq!(v as usize, i);
            }
        }

        #[test]
        fn fill_matches_generate(n in 0usize..512, extra in 0usize..16) {
            let mut buf = vec![-1; n + extra];
            fill(&mut buf, n).unwrap();
            let expected = generate(n).unwrap();
            prop_assert_eq!(&buf[..n], expected.as_slice());
            prop_assert!(buf[n..].iter().all(|&v| v == -1));
        }
    }
}
