//! Integration tests: drive the C ABI the way a host would, with raw
//! pointers into Rust-owned buffers and status codes checked after every
//! call.

use std::ffi::c_void;

use arrkit_ffi::{
    arr_buffer_decrement, arr_buffer_destroy, arr_buffer_from_i32, arr_buffer_read,
    arr_buffer_sort, arr_fill, arr_free, arr_gen, arr_minus_one, arr_minus_one_typed,
    arr_sort_with, arr_update, arr_with_static, ArrComparator, ArrStatus,
};
use arrkit_test_utils::{edge_case_i32, random_i32_in};
use proptest::prelude::*;

const OK: i32 = ArrStatus::Ok as i32;

fn as_void(v: &mut [i32]) -> *mut c_void {
    v.as_mut_ptr().cast()
}

// ── Raw arrays ──────────────────────────────────────────────────

#[test]
fn generated_array_is_usable_then_released() {
    let mut ptr: *mut i32 = std::ptr::null_mut();
    assert_eq!(arr_gen(8, &mut ptr), OK);
    assert_eq!(arr_minus_one(ptr, 8), OK);
    assert_eq!(arr_fill(ptr, 8, 4), OK);
    assert_eq!(arr_free(ptr), OK);
    assert_eq!(arr_free(ptr), ArrStatus::InvalidHandle as i32);
}

#[test]
fn typed_decrement_of_fives() {
    let mut v = vec![5, 5, 5];
    let rc = arr_minus_one_typed(as_void(&mut v), 3, 4, c"int32".as_ptr());
    assert_eq!(rc, OK);
    assert_eq!(v, vec![4, 4, 4]);
}

#[test]
fn typed_decrement_of_floats() {
    let mut v = vec![1.5f32, -2.0];
    let rc = arr_minus_one_typed(v.as_mut_ptr().cast(), 2, 4, c"float".as_ptr());
    assert_eq!(rc, OK);
    assert_eq!(v, vec![0.5, -3.0]);
}

#[test]
fn typed_decrement_count_beyond_null_buffer() {
    let rc = arr_minus_one_typed(std::ptr::null_mut(), 4, 4, c"int32".as_ptr());
    assert_eq!(rc, ArrStatus::InvalidArgument as i32);
    let rc = arr_minus_one_typed(std::ptr::null_mut(), 0, 4, c"int32".as_ptr());
    assert_eq!(rc, OK);
}

#[test]
fn explicit_sorts_of_three_one_two() {
    for (comparator, expected) in [
        (ArrComparator::Difference, [1, 2, 3]),
        (ArrComparator::Ascending, [1, 2, 3]),
        (ArrComparator::Descending, [3, 2, 1]),
    ] {
        let mut v = [3, 1, 2];
        assert_eq!(arr_sort_with(as_void(&mut v), 3, 4, comparator as i32), OK);
        assert_eq!(v, expected);
    }
}

#[test]
fn edge_cases_need_an_ordered_comparator() {
    let mut v = edge_case_i32();
    let original = v.clone();
    let n = v.len();
    assert_eq!(
        arr_sort_with(as_void(&mut v), n, 4, ArrComparator::Difference as i32),
        ArrStatus::RangeOverflow as i32
    );
    assert_eq!(v, original);
    assert_eq!(
        arr_sort_with(as_void(&mut v), n, 4, ArrComparator::Ascending as i32),
        OK
    );
    assert!(v.windows(2).all(|w| w[0] <= w[1]));
}

extern "C" fn negate(v: i32) -> i32 {
    v.wrapping_neg()
}

#[test]
fn update_twice_is_identity() {
    let original = random_i32_in(17, 64, -1000, 1000);
    let mut v = original.clone();
    assert_eq!(arr_update(v.as_mut_ptr(), v.len(), Some(negate)), OK);
    assert_eq!(arr_update(v.as_mut_ptr(), v.len(), Some(negate)), OK);
    assert_eq!(v, original);
}

extern "C" fn sum_static(data: *mut i32, len: usize, user: *mut c_void) {
    // SAFETY: arr_with_static hands out len valid elements; user is a live
    // &mut i64 owned by the calling test.
    unsafe {
        let values = std::slice::from_raw_parts(data, len);
        *user.cast::<i64>() += values.iter().map(|&x| i64::from(x)).sum::<i64>();
    }
}

#[test]
fn static_buffer_always_sums_to_45() {
    let mut total = 0i64;
    for _ in 0..3 {
        let rc = arr_with_static(Some(sum_static), (&mut total as *mut i64).cast());
        assert_eq!(rc, OK);
    }
    assert_eq!(total, 3 * 45);
}

// ── Handles ─────────────────────────────────────────────────────

#[test]
fn handle_lifecycle() {
    let src = [3, 1, 2];
    let mut h = 0u64;
    assert_eq!(arr_buffer_from_i32(src.as_ptr(), 3, &mut h), OK);
    assert_eq!(arr_buffer_sort(h, ArrComparator::Ascending as i32), OK);
    assert_eq!(arr_buffer_decrement(h), OK);

    let mut out = [0i32; 3];
    assert_eq!(arr_buffer_read(h, as_void(&mut out), 12), OK);
    assert_eq!(out, [0, 1, 2]);

    assert_eq!(arr_buffer_destroy(h), OK);
    assert_eq!(
        arr_buffer_read(h, as_void(&mut out), 12),
        ArrStatus::InvalidHandle as i32
    );
}

// ── Properties ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn ffi_sort_matches_std(mut v in prop::collection::vec(-100_000i32..100_000, 0..200)) {
        let mut expected = v.clone();
        expected.sort();
        let n = v.len();
        prop_assert_eq!(
            arr_sort_with(as_void(&mut v), n, 4, ArrComparator::Difference as i32),
            OK
        );
        prop_assert_eq!(v, expected);
    }

    #[test]
    fn ffi_fixed_decrement_wraps(mut v in prop::collection::vec(any::<i32>(), 0..64)) {
        let expected: Vec<i32> = v.iter().map(|x| x.wrapping_sub(1)).collect();
        prop_assert_eq!(arr_minus_one(v.as_mut_ptr(), v.len()), OK);
        prop_assert_eq!(v, expected);
    }
}
