//! A small unit test harness.
//!
//! Test groups are named bodies of assertions. They are registered in any order,
//! run sorted by source location, and summarized with a pass rate bar. The exit
//! status is `0` when every assertion passed and `1` otherwise.

pub mod assertion;
pub mod context;
pub mod formatter;
pub mod statistics;

mod discovery;
pub use discovery::*;

mod error;
pub use error::*;

mod group;
pub use group::*;

mod location;
pub use location::*;

mod registry;
pub use registry::*;

mod report;
pub use report::*;

pub use assertion::{Assertion, AssertionKind};

#[cfg(test)]
mod test_support;

#[doc(hidden)]
pub use linkme;

/// Run every group defined with [`test_group!`] and print the report to stdout.
///
/// Meant to be returned from `main` of a test binary.
pub fn run_discovered() -> std::process::ExitCode {
    Registry::discovered().run().exit_code()
}
