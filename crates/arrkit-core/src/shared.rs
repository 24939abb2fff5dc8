//! The process-wide 10-element scratch buffer.
//!
//! Host demos historically returned a pointer into one static array that
//! every call refilled. Here the array sits behind a mutex and is only
//! reachable through a [`StaticBufferGuard`], so two callers can never
//! observe each other's writes mid-use. Acquiring the guard refills the
//! buffer with `0..STATIC_LEN`.

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard};

/// Number of elements in the shared buffer.
pub const STATIC_LEN: usize = 10;

static SHARED: Mutex<[i32; STATIC_LEN]> = Mutex::new([0; STATIC_LEN]);

/// Exclusive access to the shared buffer. Released on drop.
pub struct StaticBufferGuard {
    inner: MutexGuard<'static, [i32; STATIC_LEN]>,
}

impl Deref for StaticBufferGuard {
    type Target = [i32];

    fn deref(&self) -> &[i32] {
        &self.inner[..]
    }
}

impl DerefMut for StaticBufferGuard {
    fn deref_mut(&mut self) -> &mut [i32] {
        &mut self.inner[..]
    }
}

/// Lock the shared buffer and reset it to `0..STATIC_LEN`.
///
/// Blocks while another guard is alive. A lock poisoned by a panicking
/// holder is recovered: the refill discards whatever state it left.
pub fn generate_static() -> StaticBufferGuard {
    let mut inner = match SHARED.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            eprintln!("arrkit: shared buffer lock was poisoned; refilling");
            poisoned.into_inner()
        }
    };
    for (i, slot) in inner.iter_mut().enumerate() {
        *slot = i as i32;
    }
    StaticBufferGuard { inner }
}

/// Run `f` with exclusive access to the freshly reset shared buffer.
pub fn with_static<T>(f: impl FnOnce(&mut [i32]) -> T) -> T {
    let mut guard = generate_static();
    f(&mut guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_storage_reset_on_each_acquire() {
        let first_ptr = {
            let mut g = generate_static();
            assert_eq!(&g[..], &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
            g[3] = 100;
            g.as_ptr()
        };
        let g = generate_static();
        assert_eq!(g.as_ptr(), first_ptr);
        assert_eq!(g[3], 3);
        assert_eq!(g.len(), STATIC_LEN);
    }

    #[test]
    fn with_static_scopes_access() {
        let total: i32 = with_static(|buf| {
            buf.iter_mut().for_each(|v| *v *= 2);
            buf.iter().sum()
        });
        assert_eq!(total, 90);
        with_static(|buf| assert_eq!(buf[9], 9));
    }
}
