use std::{borrow::Cow, cell::RefCell, io, rc::Rc};

use crate::{
    context::{FormatterGuard, SharedFormatter},
    discovery::GROUPS,
    error::FormatError,
    formatter::{ReportFormatter, pretty::PrettyFormatter},
    group::{GroupFn, TestGroup},
    location::SourceLocation,
    report::RunReport,
    statistics::Statistics,
};

/// The collection of test groups of a test binary and the loop that runs them.
///
/// Groups can be registered in any order. [`run`](Self::run) sorts them by file and
/// line first, so the order in which they were registered never shows in the output.
#[derive(Debug)]
pub struct Registry<Formatter> {
    groups: Vec<TestGroup>,
    ran: bool,
    formatter: Rc<RefCell<Formatter>>,
}

impl Default for Registry<PrettyFormatter<io::Stdout>> {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            ran: false,
            formatter: Rc::new(RefCell::new(PrettyFormatter::default())),
        }
    }
}

impl Registry<PrettyFormatter<io::Stdout>> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every group defined with [`test_group!`](crate::test_group).
    pub fn discovered() -> Self {
        let mut registry = Self::new();
        registry.discover();
        registry
    }
}

impl<Formatter> Registry<Formatter> {
    pub fn with_formatter<WithFormatter>(
        self,
        formatter: WithFormatter,
    ) -> Registry<WithFormatter> {
        Registry {
            groups: self.groups,
            ran: self.ran,
            formatter: Rc::new(RefCell::new(formatter)),
        }
    }

    /// Add a group. Duplicates are kept.
    pub fn register(&mut self, group: TestGroup) {
        log::trace!(
            "registering test group {:?} at {}",
            group.description(),
            group.location()
        );
        self.groups.push(group);
    }

    pub fn register_group<F>(
        &mut self,
        description: impl Into<Cow<'static, str>>,
        location: SourceLocation,
        body: F,
    ) where
        F: Fn() + 'static,
    {
        self.register(TestGroup::new(description, location, body));
    }

    /// Collect every group defined with [`test_group!`](crate::test_group) in the
    /// current binary.
    pub fn discover(&mut self) {
        let before = self.groups.len();
        for entry in GROUPS {
            self.register(TestGroup::from_handle(
                entry.description,
                entry.location.clone(),
                GroupFn::from_const_fn(entry.body),
            ));
        }
        log::debug!("discovered {} test groups", self.groups.len() - before);
    }

    pub fn groups(&self) -> &[TestGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn sort(&mut self) {
        // stable, groups on the same line keep their registration order
        self.groups
            .sort_by(|lhs, rhs| lhs.location().cmp(rhs.location()));
    }
}

impl<Formatter: ReportFormatter + 'static> Registry<Formatter> {
    /// Run every group once, report the statistics and return the outcome.
    ///
    /// # Panics
    ///
    /// A registry can only be run once.
    pub fn run(&mut self) -> RunReport {
        assert!(!self.ran, "cannot run the test groups of a registry more than once");
        self.ran = true;

        self.sort();
        log::debug!("running {} test groups", self.groups.len());

        let mut statistics = Statistics::default();
        let mut fmt_errors = Vec::new();

        let shared: SharedFormatter = self.formatter.clone();
        let formatter_guard = FormatterGuard::install(shared);
        for group in &mut self.groups {
            fmt_errors.extend(group.invoke_reporting());

            let total = group.assertions().len();
            let passed = group.passed_assertions();
            statistics.total_groups += 1;
            statistics.passed_groups += usize::from(passed == total);
            statistics.total_assertions += total;
            statistics.passed_assertions += passed;
        }
        drop(formatter_guard);

        if let Err(err) = self.formatter.borrow_mut().fmt_statistics(&statistics) {
            log::warn!("failed to report the statistics of the run: {err}");
            fmt_errors.push((FormatError::Statistics, err));
        }

        log::debug!(
            "finished {} test groups, {} of {} assertions passed",
            statistics.total_groups,
            statistics.passed_assertions,
            statistics.total_assertions
        );
        RunReport {
            statistics,
            fmt_errors,
        }
    }
}
