//! Raw-pointer array entry points: generate, free, fill, decrement, sort,
//! update, and scoped access to the shared static buffer.
//!
//! Arrays returned by [`arr_gen`] are tracked in `OWNED` by address so
//! that [`arr_free`] can rebuild the allocation with its true length and
//! reject pointers it never handed out.

use std::collections::BTreeMap;
use std::ffi::{c_char, c_void};
use std::sync::Mutex;

use arrkit_core::{mutate, order, sequence, shared, ElementKind};

use crate::config;
use crate::raw::{bytes_mut, check_out, slice_mut, str_arg, write_out};
use crate::status::ArrStatus;
use crate::types::ArrComparator;

/// Live library-owned arrays: start address → element count.
static OWNED: Mutex<BTreeMap<usize, usize>> = Mutex::new(BTreeMap::new());

/// Callback receiving the shared static buffer: `(data, len, user_data)`.
pub type ArrStaticCallback = extern "C" fn(*mut i32, usize, *mut c_void);

/// Per-element update callback for [`arr_update`].
pub type ArrUpdateCallback = extern "C" fn(i32) -> i32;

/// Allocate `size` integers holding `0..size` and write the pointer to
/// `out`.
///
/// Ownership passes to the caller, who releases the array with
/// [`arr_free`]. `size == 0` writes null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn arr_gen(size: usize, out: *mut *mut i32) -> i32 {
    ffi_guard!({
        ffi_try!(check_out(out));
        if size == 0 {
            ffi_try!(write_out(out, std::ptr::null_mut()));
            return ArrStatus::Ok as i32;
        }
        let values = ffi_try!(sequence::generate(size));
        // Every box released by `into_raw` is recorded in OWNED.
        let mut owned = ffi_lock!(OWNED);
        let ptr = Box::into_raw(values.into_boxed_slice()).cast::<i32>();
        owned.insert(ptr as usize, size);
        ffi_try!(write_out(out, ptr));
        ArrStatus::Ok as i32
    })
}

/// Release an array returned by [`arr_gen`].
///
/// Null is a no-op. A pointer this library did not hand out (or already
/// released) yields `InvalidHandle` and is left alone.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn arr_free(ptr: *mut i32) -> i32 {
    ffi_guard!({
        if ptr.is_null() {
            return ArrStatus::Ok as i32;
        }
        let len = match ffi_lock!(OWNED).remove(&(ptr as usize)) {
            Some(len) => len,
            None => {
                eprintln!("arrkit: arr_free called with unknown pointer {ptr:p}");
                return ArrStatus::InvalidHandle as i32;
            }
        };
        // SAFETY: ptr/len came from Box::into_raw in arr_gen and were removed
        // from OWNED above, so this is the only reconstruction.
        drop(unsafe { Box::from_raw(std::ptr::slice_from_raw_parts_mut(ptr, len)) });
        ArrStatus::Ok as i32
    })
}

/// Overwrite the first `count` of `capacity` integers at `data` with
/// `0..count`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn arr_fill(data: *mut i32, capacity: usize, count: usize) -> i32 {
    ffi_guard!({
        let buf = ffi_try!(slice_mut(data, capacity));
        ffi_try!(sequence::fill(buf, count));
        ArrStatus::Ok as i32
    })
}

/// Subtract one from each of the `len` integers at `data` (wrapping).
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn arr_minus_one(data: *mut i32, len: usize) -> i32 {
    ffi_guard!({
        let buf = ffi_try!(slice_mut(data, len));
        mutate::decrement_all(buf);
        ArrStatus::Ok as i32
    })
}

/// Subtract one from `count` elements of `element_size` bytes at `data`,
/// interpreting them as `kind_name` (`"int32"` or `"float32"`), and report
/// each new value to the configured report target.
///
/// Nothing is modified or reported unless the kind is known and
/// `element_size` matches it.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn arr_minus_one_typed(
    data: *mut c_void,
    count: usize,
    element_size: usize,
    kind_name: *const c_char,
) -> i32 {
    ffi_guard!({
        let name = ffi_try!(str_arg(kind_name));
        let kind = ffi_try!(ElementKind::from_name(name));
        ffi_try!(kind.check_size(element_size));
        let target = ffi_try!(config::current()).report_target;
        let bytes = ffi_try!(bytes_mut(data.cast::<u8>(), count, element_size));
        ffi_try!(mutate::decrement_typed(
            bytes,
            count,
            element_size,
            kind,
            target
        ));
        ArrStatus::Ok as i32
    })
}

/// Sort `count` integers of `element_size` bytes at `data` with the
/// configured comparator.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn arr_sort(data: *mut c_void, count: usize, element_size: usize) -> i32 {
    ffi_guard!({
        let comparator = ffi_try!(config::current()).comparator;
        sort_raw(data, count, element_size, comparator)
    })
}

/// Sort with an explicit comparator (an `ArrComparator` value).
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn arr_sort_with(
    data: *mut c_void,
    count: usize,
    element_size: usize,
    comparator: i32,
) -> i32 {
    ffi_guard!({
        let comparator = ffi_try!(ArrComparator::from_raw(comparator));
        sort_raw(data, count, element_size, comparator)
    })
}

fn sort_raw(
    data: *mut c_void,
    count: usize,
    element_size: usize,
    comparator: arrkit_core::Comparator,
) -> i32 {
    ffi_try!(ElementKind::Int32.check_size(element_size));
    let bytes = ffi_try!(bytes_mut(data.cast::<u8>(), count, element_size));
    ffi_try!(order::sort_bytes(bytes, count, element_size, comparator));
    ArrStatus::Ok as i32
}

/// Replace each of the `len` integers at `data` with `callback(value)`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn arr_update(
    data: *mut i32,
    len: usize,
    callback: Option<ArrUpdateCallback>,
) -> i32 {
    ffi_guard!({
        let Some(callback) = callback else {
            return ArrStatus::InvalidArgument as i32;
        };
        let buf = ffi_try!(slice_mut(data, len));
        mutate::update(buf, |v| callback(v));
        ArrStatus::Ok as i32
    })
}

/// Call `callback` with exclusive access to the shared 10-element buffer,
/// freshly reset to `0..10`.
///
/// The pointer passed to `callback` is valid only for the duration of the
/// call; every invocation sees the same address.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn arr_with_static(
    callback: Option<ArrStaticCallback>,
    user_data: *mut c_void,
) -> i32 {
    ffi_guard!({
        let Some(callback) = callback else {
            return ArrStatus::InvalidArgument as i32;
        };
        shared::with_static(|buf| callback(buf.as_mut_ptr(), buf.len(), user_data));
        ArrStatus::Ok as i32
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gen_then_free() {
        let mut p: *mut i32 = std::ptr::null_mut();
        assert_eq!(arr_gen(5, &mut p), 0);
        assert!(!p.is_null());
        let view = slice_mut(p, 5).unwrap();
        assert_eq!(view, &[0, 1, 2, 3, 4]);
        assert_eq!(arr_free(p), 0);
        assert_eq!(arr_free(p), ArrStatus::InvalidHandle as i32);
    }

    #[test]
    fn gen_zero_writes_null() {
        let mut p: *mut i32 = 1usize as *mut i32;
        assert_eq!(arr_gen(0, &mut p), 0);
        assert!(p.is_null());
        assert_eq!(arr_free(p), 0);
    }

    #[test]
    fn gen_null_out_is_invalid() {
        assert_eq!(
            arr_gen(3, std::ptr::null_mut()),
            ArrStatus::InvalidArgument as i32
        );
    }

    #[test]
    fn gen_misaligned_out_allocates_nothing() {
        const SIZE: usize = 4099;
        let mut words = [0u64; 2];
        let off_by_one = words
            .as_mut_ptr()
            .cast::<u8>()
            .wrapping_add(1)
            .cast::<*mut i32>();
        assert_eq!(arr_gen(SIZE, off_by_one), ArrStatus::InvalidArgument as i32);
        assert_eq!(words, [0, 0]);
        assert!(OWNED.lock().unwrap().values().all(|&len| len != SIZE));
    }

    #[test]
    fn free_foreign_pointer_is_rejected() {
        let mut mine = vec![1, 2, 3];
        assert_eq!(
            arr_free(mine.as_mut_ptr()),
            ArrStatus::InvalidHandle as i32
        );
        assert_eq!(mine, vec![1, 2, 3]);
    }

    #[test]
    fn fill_respects_capacity() {
        let mut v = vec![-1; 4];
        assert_eq!(arr_fill(v.as_mut_ptr(), 4, 3), 0);
        assert_eq!(v, vec![0, 1, 2, -1]);
        assert_eq!(
            arr_fill(v.as_mut_ptr(), 4, 5),
            ArrStatus::InvalidLength as i32
        );
    }

    #[test]
    fn minus_one_fixed_kind() {
        let mut v = vec![1, 2, 3];
        assert_eq!(arr_minus_one(v.as_mut_ptr(), v.len()), 0);
        assert_eq!(v, vec![0, 1, 2]);
        assert_eq!(
            arr_minus_one(std::ptr::null_mut(), 2),
            ArrStatus::InvalidArgument as i32
        );
    }

    #[test]
    fn minus_one_typed_rejects_unknown_kind() {
        let mut v = vec![5, 5, 5];
        let rc = arr_minus_one_typed(v.as_mut_ptr().cast(), 3, 4, c"complex64".as_ptr());
        assert_eq!(rc, ArrStatus::UnsupportedKind as i32);
        assert_eq!(v, vec![5, 5, 5]);
    }

    #[test]
    fn minus_one_typed_rejects_wrong_width() {
        let mut v = vec![5.0f32; 2];
        let rc = arr_minus_one_typed(v.as_mut_ptr().cast(), 1, 8, c"float32".as_ptr());
        assert_eq!(rc, ArrStatus::ElementSizeMismatch as i32);
        assert_eq!(v, vec![5.0, 5.0]);
    }

    #[test]
    fn sort_with_explicit_comparator() {
        let mut v = vec![3, 1, 2];
        let rc = arr_sort_with(v.as_mut_ptr().cast(), 3, 4, ArrComparator::Ascending as i32);
        assert_eq!(rc, 0);
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn sort_with_difference_overflow() {
        let mut v = vec![i32::MAX, i32::MIN];
        let rc = arr_sort_with(v.as_mut_ptr().cast(), 2, 4, ArrComparator::Difference as i32);
        assert_eq!(rc, ArrStatus::RangeOverflow as i32);
        assert_eq!(v, vec![i32::MAX, i32::MIN]);
    }

    #[test]
    fn sort_with_wrong_width_or_comparator() {
        let mut v = vec![2i64, 1];
        assert_eq!(
            arr_sort_with(v.as_mut_ptr().cast(), 2, 8, ArrComparator::Ascending as i32),
            ArrStatus::ElementSizeMismatch as i32
        );
        assert_eq!(
            arr_sort_with(v.as_mut_ptr().cast(), 2, 4, 99),
            ArrStatus::InvalidArgument as i32
        );
    }

    extern "C" fn triple(v: i32) -> i32 {
        v * 3
    }

    #[test]
    fn update_runs_callback() {
        let mut v = vec![1, 2, 3];
        assert_eq!(arr_update(v.as_mut_ptr(), 3, Some(triple)), 0);
        assert_eq!(v, vec![3, 6, 9]);
        assert_eq!(
            arr_update(v.as_mut_ptr(), 3, None),
            ArrStatus::InvalidArgument as i32
        );
    }

    extern "C" fn record_static(data: *mut i32, len: usize, user: *mut c_void) {
        let view = slice_mut(data, len).unwrap();
        let sink = user.cast::<Vec<i32>>();
        #[allow(unsafe_code)]
        // SAFETY: the test passes a live &mut Vec<i32>.
        unsafe {
            (*sink).extend_from_slice(view);
        }
        view.iter_mut().for_each(|v| *v = -1);
    }

    #[test]
    fn with_static_resets_each_call() {
        let mut seen: Vec<i32> = Vec::new();
        let user = (&mut seen as *mut Vec<i32>).cast::<c_void>();
        assert_eq!(arr_with_static(Some(record_static), user), 0);
        assert_eq!(arr_with_static(Some(record_static), user), 0);
        let expected: Vec<i32> = (0..10).chain(0..10).collect();
        assert_eq!(seen, expected);
        assert_eq!(
            arr_with_static(None, std::ptr::null_mut()),
            ArrStatus::InvalidArgument as i32
        );
    }
}
