use std::borrow::Cow;

use crate::{
    formatter::no::NoFormatter,
    group::{GroupFn, TestGroup},
    location::SourceLocation,
    registry::Registry,
};

pub struct BuildGroup {
    pub body: GroupFn,
    pub description: Cow<'static, str>,
    pub location: SourceLocation,
}

impl Default for BuildGroup {
    fn default() -> Self {
        Self {
            body: GroupFn::Static(&|| ()),
            description: Default::default(),
            location: SourceLocation::new("unknown", 0),
        }
    }
}

impl From<BuildGroup> for TestGroup {
    fn from(value: BuildGroup) -> Self {
        TestGroup::from_handle(value.description, value.location, value.body)
    }
}

impl<F> From<F> for GroupFn
where
    F: Fn() + 'static,
{
    fn from(value: F) -> Self {
        GroupFn::Owned(Box::new(value))
    }
}

macro_rules! group {
    {$($field:ident: $value:expr),* $(,)?} => {
        $crate::group::TestGroup::from($crate::test_support::BuildGroup {
            $($field: From::from($value),)*
            ..($crate::test_support::BuildGroup {
                description: concat!(module_path!(), "::", file!(), ":", line!()).into(),
                location: $crate::location!(),
                ..Default::default()
            })
        })
    };
}

pub(crate) use group;

pub fn harness(groups: impl IntoIterator<Item = TestGroup>) -> Registry<NoFormatter> {
    let mut registry = Registry::new().with_formatter(NoFormatter);
    for group in groups {
        registry.register(group);
    }
    registry
}
