//! C-compatible enums for element kinds, comparators, and report targets.
//!
//! C passes these as raw `i32`; the `from_raw` constructors reject unknown
//! discriminators instead of transmuting them.

use arrkit_core::{Comparator, ElementKind, ReportTarget};

use crate::status::ArrStatus;

/// Element kind of a tagged buffer.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrKind {
    /// Signed 32-bit integer.
    Int32 = 0,
    /// Single-precision float.
    Float32 = 1,
}

impl ArrKind {
    pub(crate) fn from_raw(raw: i32) -> Result<ElementKind, ArrStatus> {
        match raw {
            x if x == ArrKind::Int32 as i32 => Ok(ElementKind::Int32),
            x if x == ArrKind::Float32 as i32 => Ok(ElementKind::Float32),
            _ => Err(ArrStatus::InvalidArgument),
        }
    }

    pub(crate) fn to_raw(kind: ElementKind) -> i32 {
        match kind {
            ElementKind::Int32 => ArrKind::Int32 as i32,
            ElementKind::Float32 => ArrKind::Float32 as i32,
        }
    }
}

/// Ordering strategy for sorts.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrComparator {
    /// Arithmetic difference; rejects buffers whose spread overflows.
    Difference = 0,
    /// Ascending total order.
    Ascending = 1,
    /// Descending total order.
    Descending = 2,
}

impl ArrComparator {
    pub(crate) fn from_raw(raw: i32) -> Result<Comparator, ArrStatus> {
        match raw {
            x if x == ArrComparator::Difference as i32 => Ok(Comparator::Difference),
            x if x == ArrComparator::Ascending as i32 => Ok(Comparator::Ascending),
            x if x == ArrComparator::Descending as i32 => Ok(Comparator::Descending),
            _ => Err(ArrStatus::InvalidArgument),
        }
    }

    pub(crate) fn to_raw(c: Comparator) -> i32 {
        match c {
            Comparator::Difference => ArrComparator::Difference as i32,
            Comparator::Ascending => ArrComparator::Ascending as i32,
            Comparator::Descending => ArrComparator::Descending as i32,
        }
    }
}

/// Destination for typed-decrement reports.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrReportTarget {
    /// Standard output.
    Stdout = 0,
    /// Standard error.
    Stderr = 1,
    /// Discard.
    Silent = 2,
}

impl ArrReportTarget {
    pub(crate) fn from_raw(raw: i32) -> Result<ReportTarget, ArrStatus> {
        match raw {
            x if x == ArrReportTarget::Stdout as i32 => Ok(ReportTarget::Stdout),
            x if x == ArrReportTarget::Stderr as i32 => Ok(ReportTarget::Stderr),
            x if x == ArrReportTarget::Silent as i32 => Ok(ReportTarget::Silent),
            _ => Err(ArrStatus::InvalidArgument),
        }
    }

    pub(crate) fn to_raw(t: ReportTarget) -> i32 {
        match t {
            ReportTarget::Stdout => ArrReportTarget::Stdout as i32,
            ReportTarget::Stderr => ArrReportTarget::Stderr as i32,
            ReportTarget::Silent => ArrReportTarget::Silent as i32,
        }
    }
}
