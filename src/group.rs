use std::{borrow::Cow, fmt::Debug};

use crate::{
    assertion::Assertion,
    context::{GroupScope, GroupScopeGuard},
    error::FormatError,
    location::SourceLocation,
};

/// The body of a [`TestGroup`].
#[non_exhaustive]
pub enum GroupFn {
    Ptr(fn()),
    Owned(Box<dyn Fn()>),
    Static(&'static dyn Fn()),
}

impl Debug for GroupFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ptr(ptr) => f.debug_tuple("Ptr").field(ptr).finish(),
            Self::Owned(_) => write!(f, "Owned(...)"),
            Self::Static(_) => write!(f, "Static(...)"),
        }
    }
}

impl Default for GroupFn {
    fn default() -> Self {
        Self::Static(&|| {})
    }
}

impl GroupFn {
    pub const fn from_const_fn(f: fn()) -> Self {
        Self::Ptr(f)
    }

    pub fn from_boxed<F>(f: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self::Owned(Box::new(f))
    }

    pub const fn from_static_obj(f: &'static dyn Fn()) -> Self {
        Self::Static(f)
    }

    pub fn call(&self) {
        match self {
            Self::Ptr(f) => f(),
            Self::Owned(f) => f(),
            Self::Static(f) => f(),
        }
    }
}

/// A named unit of assertions.
///
/// The body runs once through [`invoke`](Self::invoke). Every assertion it records
/// ends up in [`assertions`](Self::assertions), in the order they were evaluated.
#[derive(Debug)]
pub struct TestGroup {
    description: Cow<'static, str>,
    location: SourceLocation,
    body: GroupFn,
    assertions: Vec<Assertion>,
    invoked: bool,
}

impl TestGroup {
    pub fn new<F>(
        description: impl Into<Cow<'static, str>>,
        location: SourceLocation,
        body: F,
    ) -> Self
    where
        F: Fn() + 'static,
    {
        Self::from_handle(description, location, GroupFn::from_boxed(body))
    }

    pub fn from_handle(
        description: impl Into<Cow<'static, str>>,
        location: SourceLocation,
        body: GroupFn,
    ) -> Self {
        Self {
            description: description.into(),
            location,
            body,
            assertions: Vec::new(),
            invoked: false,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn assertions(&self) -> &[Assertion] {
        &self.assertions
    }

    pub fn was_invoked(&self) -> bool {
        self.invoked
    }

    /// A group passes when none of its assertions failed.
    ///
    /// This includes groups without any assertions.
    pub fn passed(&self) -> bool {
        self.assertions.iter().all(Assertion::passed)
    }

    pub fn passed_assertions(&self) -> usize {
        self.assertions.iter().filter(|a| a.passed()).count()
    }

    /// Run the body and collect the assertions it records.
    ///
    /// # Panics
    ///
    /// A group can only be invoked once. Invoking it again, or invoking it from inside
    /// the body of another group, panics.
    pub fn invoke(&mut self) {
        let _ = self.invoke_reporting();
    }

    /// Like [`invoke`](Self::invoke), but hands back formatter errors that happened
    /// while failures were reported.
    pub(crate) fn invoke_reporting(&mut self) -> Vec<(FormatError, std::io::Error)> {
        assert!(
            !self.invoked && self.assertions.is_empty(),
            "test group {:?} at {} was already invoked",
            self.description,
            self.location
        );
        self.invoked = true;

        log::debug!(
            "invoking test group {:?} at {}",
            self.description,
            self.location
        );
        let guard = GroupScopeGuard::enter(GroupScope::new(
            self.description.clone(),
            self.location.clone(),
        ));
        self.body.call();
        let scope = guard
            .finish()
            .unwrap_or_else(|| unreachable!("group scope removed while the group was running"));

        self.assertions = scope.assertions;
        log::debug!(
            "test group {:?} recorded {} assertions, {} passed",
            self.description,
            self.assertions.len(),
            self.passed_assertions()
        );
        scope.fmt_errors
    }
}
