use crate::formatter::ReportFormatter;

/// A formatter that produces no output.
///
/// Useful when only the [`RunReport`](crate::RunReport) matters, for example when a
/// run is embedded into another system that does its own reporting.
#[derive(Debug, Default, Clone)]
pub struct NoFormatter;

impl ReportFormatter for NoFormatter {}
