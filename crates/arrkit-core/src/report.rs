//! Sinks for values produced by the typed decrement.
//!
//! The typed decrement reports each decremented value as a side effect.
//! Where the values go is chosen by the caller through a [`Reporter`].

use std::io::Write;

use crate::kind::Element;

/// Receives each value produced by a reporting operation.
pub trait Reporter {
    /// Called once per element, in buffer order.
    fn report(&mut self, index: usize, value: Element);
}

/// Writes one value per line to standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn report(&mut self, _index: usize, value: Element) {
        let mut out = std::io::stdout().lock();
        // A closed stdout is not the array's problem.
        let _ = writeln!(out, "{value}");
    }
}

/// Writes one value per line to standard error.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrReporter;

impl Reporter for StderrReporter {
    fn report(&mut self, _index: usize, value: Element) {
        let mut out = std::io::stderr().lock();
        let _ = writeln!(out, "{value}");
    }
}

/// Discards every value.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&mut self, _index: usize, _value: Element) {}
}

/// Collects values in order.
impl Reporter for Vec<Element> {
    fn report(&mut self, _index: usize, value: Element) {
        self.push(value);
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, index: usize, value: Element) {
        (**self).report(index, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_collects_in_order() {
        let mut sink: Vec<Element> = Vec::new();
        sink.report(0, Element::Int32(4));
        sink.report(1, Element::Float32(0.5));
        assert_eq!(sink, vec![Element::Int32(4), Element::Float32(0.5)]);
    }

    fn report_twice<R: Reporter>(mut r: R) {
        r.report(0, Element::Int32(1));
        r.report(1, Element::Int32(2));
    }

    #[test]
    fn mut_ref_forwards() {
        let mut sink: Vec<Element> = Vec::new();
        report_twice(&mut sink);
        assert_eq!(sink, vec![Element::Int32(1), Element::Int32(2)]);
    }

    #[test]
    fn null_reporter_ignores_values() {
        let mut r = NullReporter;
        r.report(0, Element::Int32(1));
    }
}
