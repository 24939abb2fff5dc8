//! In-place ordering of `i32` buffers under a named [`Comparator`].

use std::cmp::Ordering;

use crate::error::ArrayError;
use crate::kind::ElementKind;

/// Ordering strategy for [`sort`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Comparator {
    /// Ascending order defined by the arithmetic difference `a - b`.
    ///
    /// The difference is only meaningful while it fits in an `i32`, so a
    /// buffer whose `max - min` exceeds `i32::MAX` is rejected with
    /// [`ArrayError::RangeOverflow`] instead of being sorted wrongly.
    #[default]
    Difference,
    /// Ascending total order.
    Ascending,
    /// Descending total order.
    Descending,
}

impl Comparator {
    /// Compare two elements.
    ///
    /// For [`Comparator::Difference`] this is only called after
    /// [`Comparator::check_range`] accepted the buffer, so the difference
    /// and the total order agree.
    pub fn compare(self, a: i32, b: i32) -> Ordering {
        match self {
            Self::Difference | Self::Ascending => a.cmp(&b),
            Self::Descending => b.cmp(&a),
        }
    }

    /// Verify every pairwise comparison stays in range for this comparator.
    pub fn check_range(self, buffer: &[i32]) -> Result<(), ArrayError> {
        if self != Self::Difference {
            return Ok(());
        }
        let (Some(&min), Some(&max)) = (buffer.iter().min(), buffer.iter().max()) else {
            return Ok(());
        };
        let spread = i64::from(max) - i64::from(min);
        if spread > i64::from(i32::MAX) {
            return Err(ArrayError::RangeOverflow {
                reason: format!("difference {max} - ({min}) does not fit in int32"),
            });
        }
        Ok(())
    }
}

/// Sort `buffer` in place.
///
/// The buffer is untouched when the comparator rejects its range.
pub fn sort(buffer: &mut [i32], comparator: Comparator) -> Result<(), ArrayError> {
    comparator.check_range(buffer)?;
    buffer.sort_unstable_by(|a, b| comparator.compare(*a, *b));
    Ok(())
}

/// Sort the first `count` elements of `buffer`.
pub fn sort_prefix(
    buffer: &mut [i32],
    count: usize,
    comparator: Comparator,
) -> Result<(), ArrayError> {
    ArrayError::check_length(count, buffer.len())?;
    sort(&mut buffer[..count], comparator)
}

/// Sort `count` `i32` elements stored as native-endian bytes.
///
/// Only `element_size == 4` is accepted: the ordering is defined for
/// 32-bit integers alone.
pub fn sort_bytes(
    bytes: &mut [u8],
    count: usize,
    element_size: usize,
    comparator: Comparator,
) -> Result<(), ArrayError> {
    ElementKind::Int32.check_size(element_size)?;
    ArrayError::check_length(count, bytes.len() / element_size)?;

    let region = &mut bytes[..count * element_size];
    let mut values: Vec<i32> = region
        .chunks_exact(element_size)
        .map(|c| i32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    sort(&mut values, comparator)?;
    for (chunk, v) in region.chunks_exact_mut(element_size).zip(&values) {
        chunk.copy_from_slice(&v.to_ne_bytes());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sorts_three_elements() {
        let mut buf = vec![3, 1, 2];
        sort(&mut buf, Comparator::Difference).unwrap();
        assert_eq!(buf, vec![1, 2, 3]);
    }

    #[test]
    fn descending_reverses() {
        let mut buf = vec![5, 1, 7, 33, 99, 43, 12, 5, 1, 0];
        sort(&mut buf, Comparator::Descending).unwrap();
        assert_eq!(buf, vec![99, 43, 33, 12, 7, 5, 5, 1, 1, 0]);
    }

    #[test]
    fn difference_overflow_is_reported() {
        let mut buf = vec![i32::MAX, i32::MIN];
        let err = sort(&mut buf, Comparator::Difference).unwrap_err();
        assert!(matches!(err, ArrayError::RangeOverflow { .. }));
        assert_eq!(buf, vec![i32::MAX, i32::MIN]);
    }

    #[test]
    fn difference_at_the_edge_is_accepted() {
        // max - min == i32::MAX exactly.
        let mut buf = vec![i32::MAX, 0, 0];
        sort(&mut buf, Comparator::Difference).unwrap();
        assert_eq!(buf, vec![0, 0, i32::MAX]);

        let mut buf = vec![-1, i32::MAX - 1];
        sort(&mut buf, Comparator::Difference).unwrap();
        assert_eq!(buf, vec![-1, i32::MAX - 1]);
    }

    #[test]
    fn ascending_handles_full_range() {
        let mut buf = vec![i32::MAX, 0, i32::MIN];
        sort(&mut buf, Comparator::Ascending).unwrap();
        assert_eq!(buf, vec![i32::MIN, 0, i32::MAX]);
    }

    #[test]
    fn empty_and_single_are_trivially_sorted() {
        let mut empty: Vec<i32> = Vec::new();
        sort(&mut empty, Comparator::Difference).unwrap();
        let mut one = vec![42];
        sort(&mut one, Comparator::Difference).unwrap();
        assert_eq!(one, vec![42]);
    }

    #[test]
    fn sort_prefix_leaves_tail() {
        let mut buf = vec![3, 2, 1, 0];
        sort_prefix(&mut buf, 3, Comparator::Ascending).unwrap();
        assert_eq!(buf, vec![1, 2, 3, 0]);
        assert!(matches!(
            sort_prefix(&mut buf, 5, Comparator::Ascending),
            Err(ArrayError::InvalidLength { .. })
        ));
    }

    #[test]
    fn sort_bytes_round_trips_through_native_order() {
        let mut bytes: Vec<u8> = [3i32, -1, 2].iter().flat_map(|v| v.to_ne_bytes()).collect();
        sort_bytes(&mut bytes, 3, 4, Comparator::Difference).unwrap();
        let out: Vec<i32> = bytes
            .chunks_exact(4)
            .map(|c| i32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        assert_eq!(out, vec![-1, 2, 3]);
    }

    #[test]
    fn sort_bytes_rejects_other_widths() {
        let mut bytes = vec![0u8; 16];
        assert_eq!(
            sort_bytes(&mut bytes, 2, 8, Comparator::Ascending),
            Err(ArrayError::ElementSizeMismatch {
                expected: 4,
                actual: 8
            })
        );
    }

    proptest! {
        #[test]
        fn sort_is_idempotent(values in proptest::collection::vec(-1_000_000i32..1_000_000, 0..128)) {
            let mut once = values.clone();
            sort(&mut once, Comparator::Difference).unwrap();
            let mut twice = once.clone();
            sort(&mut twice, Comparator::Difference).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn difference_matches_ascending_when_in_range(values in proptest::collection::vec(-1_000_000i32..1_000_000, 0..128)) {
            let mut by_diff = values.clone();
            let mut by_cmp = values;
            sort(&mut by_diff, Comparator::Difference).unwrap();
            sort(&mut by_cmp, Comparator::Ascending).unwrap();
            prop_assert_eq!(by_diff, by_cmp);
        }

        #[test]
        fn ascending_output_is_non_decreasing(values in proptest::collection::vec(any::<i32>(), 0..128)) {
            let mut buf = values;
            sort(&mut buf, Comparator::Ascending).unwrap();
            prop_assert!(buf.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
