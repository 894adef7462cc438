use std::{borrow::Cow, fmt::Display};

/// Where a test group or an assertion was written.
///
/// Ordering compares the file first and the line second, which is the order the
/// [`Registry`](crate::Registry) runs groups in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceLocation {
    file: Cow<'static, str>,
    line: u32,
}

impl SourceLocation {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self {
            file: Cow::Borrowed(file),
            line,
        }
    }

    pub fn owned(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: Cow::Owned(file.into()),
            line,
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

impl Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Capture the [`SourceLocation`] of the macro invocation.
#[macro_export]
macro_rules! location {
    () => {
        $crate::SourceLocation::new(::std::file!(), ::std::line!())
    };
}
