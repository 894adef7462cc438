//! The recorded outcome of a single checked condition.
//!
//! An [`Assertion`] never evaluates anything itself. The assertion macros compute
//! whether the condition held and then build the record from that result plus the
//! source text of the checked expressions. Values are never printed, so they do not
//! have to implement [`Debug`] or [`Display`](std::fmt::Display).

use std::{borrow::Cow, fmt::Write};

use crate::location::SourceLocation;

/// Which kind of check produced an [`Assertion`], with its diagnostic source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionKind {
    IsTrue { condition: Cow<'static, str> },
    IsFalse { condition: Cow<'static, str> },
    AreEqual {
        left: Cow<'static, str>,
        right: Cow<'static, str>,
    },
    AreNotEqual {
        left: Cow<'static, str>,
        right: Cow<'static, str>,
    },
}

impl AssertionKind {
    /// Name of the macro that produces this kind.
    pub fn name(&self) -> &'static str {
        match self {
            AssertionKind::IsTrue { .. } => "assert_true",
            AssertionKind::IsFalse { .. } => "assert_false",
            AssertionKind::AreEqual { .. } => "assert_equal",
            AssertionKind::AreNotEqual { .. } => "assert_not_equal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assertion {
    passed: bool,
    description: Cow<'static, str>,
    location: SourceLocation,
    kind: AssertionKind,
}

impl Assertion {
    pub fn new(
        passed: bool,
        description: impl Into<Cow<'static, str>>,
        location: SourceLocation,
        kind: AssertionKind,
    ) -> Self {
        Self {
            passed,
            description: description.into(),
            location,
            kind,
        }
    }

    pub fn is_true(
        passed: bool,
        condition: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
        location: SourceLocation,
    ) -> Self {
        let condition = condition.into();
        Self::new(passed, description, location, AssertionKind::IsTrue { condition })
    }

    pub fn is_false(
        passed: bool,
        condition: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
        location: SourceLocation,
    ) -> Self {
        let condition = condition.into();
        Self::new(passed, description, location, AssertionKind::IsFalse { condition })
    }

    pub fn are_equal(
        passed: bool,
        left: impl Into<Cow<'static, str>>,
        right: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
        location: SourceLocation,
    ) -> Self {
        let kind = AssertionKind::AreEqual {
            left: left.into(),
            right: right.into(),
        };
        Self::new(passed, description, location, kind)
    }

    pub fn are_not_equal(
        passed: bool,
        left: impl Into<Cow<'static, str>>,
        right: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
        location: SourceLocation,
    ) -> Self {
        let kind = AssertionKind::AreNotEqual {
            left: left.into(),
            right: right.into(),
        };
        Self::new(passed, description, location, kind)
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn kind(&self) -> &AssertionKind {
        &self.kind
    }

    /// Render the kind specific part of a failure diagnostic.
    ///
    /// The lines are indented by two spaces and every line ends with a newline.
    /// Group description and location are added by the formatter, see
    /// [`ReportFormatter::fmt_failure`](crate::formatter::ReportFormatter::fmt_failure).
    pub fn failure_report(&self) -> String {
        let mut report = String::new();
        // writing into a String cannot fail
        match &self.kind {
            AssertionKind::IsTrue { condition } | AssertionKind::IsFalse { condition } => {
                let _ = writeln!(report, "  expression:   {}( {condition} )", self.kind.name());
            }
            AssertionKind::AreEqual { left, right } | AssertionKind::AreNotEqual { left, right } => {
                let _ = writeln!(report, "  expression:   {}( left, right )", self.kind.name());
                let _ = writeln!(report, "  left =        {left}");
                let _ = writeln!(report, "  right =       {right}");
            }
        }

        if !self.description.is_empty() {
            let _ = writeln!(report, "  description:  {}", self.description);
        }

        report
    }
}

/// Record that `condition` holds.
///
/// Evaluates to `true` when it does. An optional second argument adds a description
/// that is shown when the assertion fails.
///
/// ```
/// let mut group = sktest::TestGroup::new("math", sktest::location!(), || {
///     sktest::assert_true!(1 + 1 == 2);
///     sktest::assert_true!(2 + 2 == 5, "math broke");
/// });
/// group.invoke();
///
/// assert_eq!(group.assertions().len(), 2);
/// assert!(!group.passed());
/// ```
#[macro_export]
macro_rules! assert_true {
    ($condition:expr $(,)?) => {
        $crate::assert_true!($condition, "")
    };
    ($condition:expr, $description:expr $(,)?) => {
        $crate::context::record($crate::Assertion::is_true(
            $condition,
            ::std::stringify!($condition),
            $description,
            $crate::location!(),
        ))
    };
}

/// Record that `condition` does not hold.
#[macro_export]
macro_rules! assert_false {
    ($condition:expr $(,)?) => {
        $crate::assert_false!($condition, "")
    };
    ($condition:expr, $description:expr $(,)?) => {
        $crate::context::record($crate::Assertion::is_false(
            !($condition),
            ::std::stringify!($condition),
            $description,
            $crate::location!(),
        ))
    };
}

/// Record that both sides compare equal with [`PartialEq`].
///
/// Only the source text of both sides ends up in the report.
#[macro_export]
macro_rules! assert_equal {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_equal!($left, $right, "")
    };
    ($left:expr, $right:expr, $description:expr $(,)?) => {
        $crate::context::record($crate::Assertion::are_equal(
            match (&$left, &$right) {
                (left, right) => *left == *right,
            },
            ::std::stringify!($left),
            ::std::stringify!($right),
            $description,
            $crate::location!(),
        ))
    };
}

/// Record that both sides compare unequal with [`PartialEq`].
#[macro_export]
macro_rules! assert_not_equal {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_not_equal!($left, $right, "")
    };
    ($left:expr, $right:expr, $description:expr $(,)?) => {
        $crate::context::record($crate::Assertion::are_not_equal(
            match (&$left, &$right) {
                (left, right) => *left != *right,
            },
            ::std::stringify!($left),
            ::std::stringify!($right),
            $description,
            $crate::location!(),
        ))
    };
}
