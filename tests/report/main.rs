use pretty_assertions::assert_eq;
use sktest::{
    Registry, SourceLocation, assert_equal, assert_false, assert_not_equal, assert_true,
    formatter::{common::color::ColorSetting, pretty::PrettyFormatter},
};

mod lib;
use lib::{Buffer, sanitize_locations};

fn registry_into(
    buffer: &Buffer,
) -> Registry<PrettyFormatter<Buffer>> {
    Registry::new().with_formatter(PrettyFormatter::default().with_target(buffer.clone()))
}

#[test]
fn integer_groups() {
    let actual = Buffer::default();
    let mut registry = registry_into(&actual);

    // registered out of source order on purpose
    registry.register_group(
        "test subtraction operator for integer (`-`)",
        SourceLocation::new("test/example/test_integer.rs", 13),
        || {
            assert_equal!(2 - 1, 1);
            assert_equal!(3 - 2, 4, "3 - 2 should not equal 4");
            assert_not_equal!(4 - 2, 2);
        },
    );
    registry.register_group(
        "test addition operator for integer (`+`)",
        SourceLocation::new("test/example/test_integer.rs", 3),
        || {
            assert_true!(1 + 1 == 2);
            assert_true!(1 + 1 == 3);
            assert_true!(2 + 3 == 4, "2 + 3 should not equal 4");

            assert_false!(1 + 1 == 3);
            assert_false!(2 + 2 == 3);
            assert_false!(3 + 3 == 4);
        },
    );

    let report = registry.run();
    assert_eq!(report.status(), 1);
    assert!(report.fmt_errors.is_empty());

    let expected = concat!(
        "error: test failed at tests/report/main.rs:<line>\n",
        "  test group:   test addition operator for integer (`+`)\n",
        "  expression:   assert_true( 1 + 1 == 3 )\n",
        "\n",
        "error: test failed at tests/report/main.rs:<line>\n",
        "  test group:   test addition operator for integer (`+`)\n",
        "  expression:   assert_true( 2 + 3 == 4 )\n",
        "  description:  2 + 3 should not equal 4\n",
        "\n",
        "error: test failed at tests/report/main.rs:<line>\n",
        "  test group:   test subtraction operator for integer (`-`)\n",
        "  expression:   assert_equal( left, right )\n",
        "  left =        3 - 2\n",
        "  right =       4\n",
        "  description:  3 - 2 should not equal 4\n",
        "\n",
        "error: test failed at tests/report/main.rs:<line>\n",
        "  test group:   test subtraction operator for integer (`-`)\n",
        "  expression:   assert_not_equal( left, right )\n",
        "  left =        4 - 2\n",
        "  right =       2\n",
        "\n",
        "tests failed:\n",
        "  ██████████████████░░░░░░░░░░░░░░ 55.6%\n",
        "test group:   0 passed, 2 failed, 2 total\n",
        "assertion:    5 passed, 4 failed, 9 total\n",
    );
    let actual = actual.try_to_string().unwrap();
    assert_eq!(sanitize_locations(&actual), expected);
}

#[test]
fn floating_point_groups() {
    let actual = Buffer::default();
    let mut registry = registry_into(&actual);

    registry.register_group(
        "test addition operator for float (`+`)",
        SourceLocation::new("test/example/test_floating_point.rs", 3),
        || {
            assert_equal!(1.0 + 1.0, 2.0);
            assert_equal!(1.0 + 2.0, 3.0);
        },
    );
    registry.register_group(
        "test subtraction operator for float (`-`)",
        SourceLocation::new("test/example/test_floating_point.rs", 8),
        || {
            assert_equal!(2.0 - 1.0, 1.0);
            assert_equal!(3.0 - 2.0, 1.0);
            assert_equal!(4.0 - 3.0, 1.0);
        },
    );

    let report = registry.run();
    assert_eq!(report.status(), 0);

    let expected = concat!(
        "test passed:\n",
        "  ████████████████████████████████ 100.0%\n",
        "test group:   2 passed, 0 failed, 2 total\n",
        "assertion:    5 passed, 0 failed, 5 total\n",
    );
    assert_eq!(actual.try_to_string().unwrap(), expected);
}

#[test]
fn groups_without_assertions() {
    let actual = Buffer::default();
    let mut registry = registry_into(&actual);
    registry.register_group("nothing to check", SourceLocation::new("empty.rs", 1), || {});

    let report = registry.run();
    assert_eq!(report.status(), 0);
    assert_eq!(
        actual.try_to_string().unwrap(),
        concat!(
            "test passed:\n",
            "  no assertions\n",
            "test group:   1 passed, 0 failed, 1 total\n",
            "assertion:    0 passed, 0 failed, 0 total\n",
        )
    );
}

#[test]
fn forced_colors() {
    let actual = Buffer::default();
    let mut registry = Registry::new().with_formatter(
        PrettyFormatter::default()
            .with_target(actual.clone())
            .with_color_setting(ColorSetting::Always),
    );
    registry.register_group("colored", SourceLocation::new("color.rs", 1), || {
        assert_true!(1 > 2);
    });
    registry.run();

    let actual = actual.try_to_string().unwrap();
    assert!(actual.starts_with("\x1b[31;1merror:\x1b[0m test failed at "));
    assert!(actual.contains("\x1b[31;1mtests failed:\x1b[0m\n"));
}
