use thiserror::Error;

/// Which part of the output could not be written.
///
/// Formatter errors never change the outcome of a run, they are collected in
/// [`RunReport::fmt_errors`](crate::RunReport::fmt_errors) next to the underlying
/// [`io::Error`](std::io::Error).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatError {
    #[error("failed to report a failed assertion of test group {group:?}")]
    Failure { group: String },

    #[error("failed to report the statistics of the run")]
    Statistics,
}
