//! Human-readable summary of a [`FitResult`].

use std::fmt;

use crate::search::FitResult;

/// Three-line summary: candidates analyzed, best center, log10 error.
pub fn format_report(result: &FitResult) -> String {
    result.to_string()
}

impl fmt::Display for FitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Analyzed {} points inside the outline", self.grid.len())?;
        writeln!(f, "  Best center: ({}, {})", self.center.re, self.center.im)?;
        writeln!(f, "  Log10 error at center: {:.3}", self.log10_error())
    }
}
