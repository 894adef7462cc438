//! Link time registration of test groups.
//!
//! [`test_group!`](crate::test_group) places a [`GroupEntry`] into the [`GROUPS`]
//! distributed slice from whichever module it is written in. The order of the slice
//! depends on the linker, [`Registry::discover`](crate::Registry::discover) collects it
//! and [`Registry::run`](crate::Registry::run) sorts the groups before running them.

use linkme::distributed_slice;

use crate::location::SourceLocation;

#[distributed_slice]
pub static GROUPS: [GroupEntry];

/// A test group as written in source, before it is collected into a registry.
#[derive(Debug)]
pub struct GroupEntry {
    pub description: &'static str,
    pub location: SourceLocation,
    pub body: fn(),
}

impl GroupEntry {
    pub const fn new(description: &'static str, location: SourceLocation, body: fn()) -> Self {
        Self {
            description,
            location,
            body,
        }
    }
}

/// Define a test group that [`Registry::discover`](crate::Registry::discover) picks up.
///
/// The first argument names the registration, it only has to be unique within its
/// module.
///
/// ```no_run
/// sktest::test_group!(integer_addition, "test addition operator for integer (`+`)", {
///     sktest::assert_true!(1 + 1 == 2);
///     sktest::assert_equal!(2 + 3, 5, "2 + 3 should equal 5");
/// });
///
/// fn main() -> std::process::ExitCode {
///     sktest::run_discovered()
/// }
/// ```
#[macro_export]
macro_rules! test_group {
    ($name:ident, $description:expr, $body:block $(,)?) => {
        #[$crate::linkme::distributed_slice($crate::GROUPS)]
        #[linkme(crate = $crate::linkme)]
        #[allow(non_upper_case_globals)]
        static $name: $crate::GroupEntry = $crate::GroupEntry::new($description, $crate::location!(), {
            fn body() $body
            body
        });
    };
}
