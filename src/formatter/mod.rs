//! Output of a run.
//!
//! A [`ReportFormatter`] receives every failed assertion at the moment it is recorded
//! and the final [`Statistics`] once all groups ran. Implement it to change how a run
//! looks, [`pretty::PrettyFormatter`] is the default.

use std::io;

use crate::{assertion::Assertion, statistics::Statistics};

pub mod common;
pub mod no;
pub mod pretty;

pub trait ReportFormatter {
    /// Report a failed `assertion` of the test group described by `group`.
    fn fmt_failure(&mut self, group: &str, assertion: &Assertion) -> io::Result<()> {
        let _ = (group, assertion);
        Ok(())
    }

    /// Report the counts of a finished run.
    fn fmt_statistics(&mut self, statistics: &Statistics) -> io::Result<()> {
        let _ = statistics;
        Ok(())
    }
}

/// Print the summary of a run to stdout.
pub fn print_statistics(
    total_groups: usize,
    passed_groups: usize,
    total_assertions: usize,
    passed_assertions: usize,
) -> io::Result<()> {
    let statistics = Statistics::new(
        total_groups,
        passed_groups,
        total_assertions,
        passed_assertions,
    );
    pretty::PrettyFormatter::default().fmt_statistics(&statistics)
}
