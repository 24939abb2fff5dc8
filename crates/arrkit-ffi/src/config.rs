//! Process-wide surface configuration.
//!
//! Entry points that do not name a comparator or report target read them
//! from here. The lock is held only long enough to copy the settings out.

use std::sync::Mutex;

use arrkit_core::SurfaceConfig;

use crate::raw::write_out;
use crate::status::ArrStatus;
use crate::types::{ArrComparator, ArrReportTarget};

static CONFIG: Mutex<SurfaceConfig> = Mutex::new(SurfaceConfig::new());

/// Copy of the current settings.
pub(crate) fn current() -> Result<SurfaceConfig, ArrStatus> {
    CONFIG
        .lock()
        .map(|cfg| *cfg)
        .map_err(|_| ArrStatus::InternalError)
}

/// Set the comparator used by `arr_sort` and `arr_buffer_sort`
/// (`comparator` is an `ArrComparator` value).
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn arr_config_set_comparator(comparator: i32) -> i32 {
    ffi_guard!({
        let comparator = ffi_try!(ArrComparator::from_raw(comparator));
        ffi_lock!(CONFIG).comparator = comparator;
        ArrStatus::Ok as i32
    })
}

/// Set where typed-decrement values are reported
/// (`target` is an `ArrReportTarget` value).
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn arr_config_set_report_target(target: i32) -> i32 {
    ffi_guard!({
        let target = ffi_try!(ArrReportTarget::from_raw(target));
        ffi_lock!(CONFIG).report_target = target;
        ArrStatus::Ok as i32
    })
}

/// Restore the default settings (difference comparator, reports on stdout).
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn arr_config_reset() -> i32 {
    ffi_guard!({
        *ffi_lock!(CONFIG) = SurfaceConfig::new();
        ArrStatus::Ok as i32
    })
}

/// Write the current comparator to `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn arr_config_comparator(out: *mut i32) -> i32 {
    ffi_guard!({
        let cfg = ffi_try!(current());
        ffi_try!(write_out(out, ArrComparator::to_raw(cfg.comparator)));
        ArrStatus::Ok as i32
    })
}

/// Write the current report target to `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn arr_config_report_target(out: *mut i32) -> i32 {
    ffi_guard!({
        let cfg = ffi_try!(current());
        ffi_try!(write_out(out, ArrReportTarget::to_raw(cfg.report_target)));
        ArrStatus::Ok as i32
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Settings are process-wide; keep every mutation in one test so the
    // parallel test runner cannot interleave them.
    #[test]
    fn set_read_and_reset() {
        assert_eq!(arr_config_set_comparator(ArrComparator::Descending as i32), 0);
        let mut raw = -1;
        assert_eq!(arr_config_comparator(&mut raw), 0);
        assert_eq!(raw, ArrComparator::Descending as i32);

        assert_eq!(arr_config_set_report_target(ArrReportTarget::Silent as i32), 0);
        assert_eq!(arr_config_report_target(&mut raw), 0);
        assert_eq!(raw, ArrReportTarget::Silent as i32);

        assert_eq!(
            arr_config_set_comparator(42),
            ArrStatus::InvalidArgument as i32
        );
        assert_eq!(
            arr_config_comparator(std::ptr::null_mut()),
            ArrStatus::InvalidArgument as i32
        );

        assert_eq!(arr_config_reset(), 0);
        assert_eq!(current().unwrap(), SurfaceConfig::default());
    }
}
