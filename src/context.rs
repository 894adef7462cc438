//! The current-group context.
//!
//! Assertions are written inside arbitrary expressions of a group body, so they cannot
//! be handed the group they belong to. Instead the group that is currently being
//! invoked installs a scope in a thread local slot and [`record`] appends to whatever
//! scope is active. A second slot holds the formatter of the running
//! [`Registry`](crate::Registry), so failures are reported the moment they are recorded.
//!
//! Both slots are only filled while a run or an invocation is on the call stack and
//! are cleared again by drop guards, even when a group body unwinds.

use std::{borrow::Cow, cell::RefCell, io, rc::Rc};

use crate::{
    assertion::Assertion, error::FormatError, formatter::ReportFormatter,
    location::SourceLocation,
};

pub(crate) type SharedFormatter = Rc<RefCell<dyn ReportFormatter>>;

#[derive(Debug)]
pub(crate) struct GroupScope {
    description: Cow<'static, str>,
    location: SourceLocation,
    pub(crate) assertions: Vec<Assertion>,
    pub(crate) fmt_errors: Vec<(FormatError, io::Error)>,
}

impl GroupScope {
    pub(crate) fn new(description: Cow<'static, str>, location: SourceLocation) -> Self {
        Self {
            description,
            location,
            assertions: Vec::new(),
            fmt_errors: Vec::new(),
        }
    }
}

thread_local! {
    static CURRENT_GROUP: RefCell<Option<GroupScope>> = const { RefCell::new(None) };
    static CURRENT_FORMATTER: RefCell<Option<SharedFormatter>> = const { RefCell::new(None) };
}

/// Keeps a [`GroupScope`] installed until [`finish`](Self::finish) or drop.
pub(crate) struct GroupScopeGuard(bool);

impl GroupScopeGuard {
    pub(crate) fn enter(scope: GroupScope) -> Self {
        CURRENT_GROUP.with_borrow_mut(|current| {
            if let Some(running) = current.as_ref() {
                panic!(
                    "cannot invoke test group {:?} while test group {:?} is running",
                    scope.description, running.description
                );
            }
            *current = Some(scope);
        });
        Self(true)
    }

    pub(crate) fn finish(mut self) -> Option<GroupScope> {
        self.0 = false;
        CURRENT_GROUP.with_borrow_mut(|current| current.take())
    }
}

impl Drop for GroupScopeGuard {
    fn drop(&mut self) {
        if self.0 {
            // the thread local may already be gone when dropped during thread teardown
            let _ = CURRENT_GROUP.try_with(|current| current.borrow_mut().take());
        }
    }
}

/// Keeps the formatter of a running registry reachable from [`record`].
pub(crate) struct FormatterGuard(Option<SharedFormatter>);

impl FormatterGuard {
    pub(crate) fn install(formatter: SharedFormatter) -> Self {
        let previous = CURRENT_FORMATTER.with_borrow_mut(|current| current.replace(formatter));
        Self(previous)
    }
}

impl Drop for FormatterGuard {
    fn drop(&mut self) {
        let previous = self.0.take();
        let _ = CURRENT_FORMATTER.try_with(|current| *current.borrow_mut() = previous);
    }
}

/// Append `assertion` to the test group that is currently being invoked.
///
/// Returns whether the assertion passed. A failed assertion is reported through the
/// formatter of the running registry right away, if there is one. The formatter runs
/// while the scope is not borrowed, so it may query [`current_group`] itself.
///
/// # Panics
///
/// Recording an assertion while no test group is being invoked is a usage error and
/// panics.
pub fn record(assertion: Assertion) -> bool {
    let passed = assertion.passed();
    log::trace!(
        "recording {} at {}: {}",
        assertion.kind().name(),
        assertion.location(),
        if passed { "passed" } else { "failed" }
    );

    let group = CURRENT_GROUP.with_borrow(|current| {
        current
            .as_ref()
            .map(|scope| (scope.description.clone(), scope.location.clone()))
    });
    let Some((description, location)) = group else {
        panic!(
            "assertion at {} was evaluated outside of a running test group",
            assertion.location()
        );
    };

    let fmt_error = if passed {
        None
    } else {
        report_failure(&description, &location, &assertion)
    };

    CURRENT_GROUP.with_borrow_mut(|current| {
        let Some(scope) = current.as_mut() else {
            unreachable!("test group {description:?} finished while reporting a failure");
        };
        scope.fmt_errors.extend(fmt_error);
        scope.assertions.push(assertion);
    });

    passed
}

fn report_failure(
    description: &str,
    location: &SourceLocation,
    assertion: &Assertion,
) -> Option<(FormatError, io::Error)> {
    let formatter = CURRENT_FORMATTER.with_borrow(|current| current.clone())?;

    let res = formatter.borrow_mut().fmt_failure(description, assertion);
    let err = res.err()?;
    log::warn!(
        "failed to report failed assertion at {} in {location}: {err}",
        assertion.location()
    );
    let group = description.to_string();
    Some((FormatError::Failure { group }, err))
}

/// Snapshot of the test group that is currently being invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentGroup {
    pub description: Cow<'static, str>,
    pub location: SourceLocation,
    /// Assertions recorded so far.
    pub assertions: usize,
    /// How many of them failed.
    pub failed: usize,
}

/// The test group that is currently being invoked on this thread, if any.
pub fn current_group() -> Option<CurrentGroup> {
    CURRENT_GROUP.with_borrow(|current| {
        current.as_ref().map(|scope| CurrentGroup {
            description: scope.description.clone(),
            location: scope.location.clone(),
            assertions: scope.assertions.len(),
            failed: scope.assertions.iter().filter(|a| !a.passed()).count(),
        })
    })
}

/// Description of the test group that is currently being invoked.
pub fn current_group_description() -> Option<String> {
    CURRENT_GROUP.with_borrow(|current| current.as_ref().map(|scope| scope.description.to_string()))
}

/// Whether a test group is currently being invoked on this thread.
pub fn in_group() -> bool {
    CURRENT_GROUP.with_borrow(|current| current.is_some())
}
