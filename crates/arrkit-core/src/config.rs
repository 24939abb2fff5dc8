//! Surface-wide settings: the default comparator and where reports go.

use crate::kind::Element;
use crate::order::Comparator;
use crate::report::{NullReporter, Reporter, StderrReporter, StdoutReporter};

/// Destination for values reported by the typed decrement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReportTarget {
    /// One value per line on standard output.
    #[default]
    Stdout,
    /// One value per line on standard error.
    Stderr,
    /// Values are dropped.
    Silent,
}

impl Reporter for ReportTarget {
    fn report(&mut self, index: usize, value: Element) {
        match self {
            Self::Stdout => StdoutReporter.report(index, value),
            Self::Stderr => StderrReporter.report(index, value),
            Self::Silent => NullReporter.report(index, value),
        }
    }
}

/// Settings consulted by operations that do not take them explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceConfig {
    /// Comparator used by sorts that do not name one.
    pub comparator: Comparator,
    /// Where typed-decrement values are reported.
    pub report_target: ReportTarget,
}

impl SurfaceConfig {
    /// Default settings: [`Comparator::Difference`], reports on stdout.
    pub const fn new() -> Self {
        Self {
            comparator: Comparator::Difference,
            report_target: ReportTarget::Stdout,
        }
    }

    /// Replace the comparator.
    pub fn with_comparator(mut self, comparator: Comparator) -> Self {
        self.comparator = comparator;
        self
    }

    /// Replace the report target.
    pub fn with_report_target(mut self, target: ReportTarget) -> Self {
        self.report_target = target;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn const_new_matches_default() {
        assert_eq!(SurfaceConfig::new(), SurfaceConfig::default());
    }

    #[test]
    fn builders_replace_fields() {
        let cfg = SurfaceConfig::new()
            .with_comparator(Comparator::Descending)
            .with_report_target(ReportTarget::Silent);
        assert_eq!(cfg.comparator, Comparator::Descending);
        assert_eq!(cfg.report_target, ReportTarget::Silent);
    }
}
