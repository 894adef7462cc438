//! A test binary in the shape SkTest users write: groups spread over a file,
//! a `main` that runs them all and exits with the result.
//!
//! Some assertions fail on purpose, run it with `cargo run --example arithmetic`.

use std::process::ExitCode;

use sktest::{assert_equal, assert_false, assert_not_equal, assert_true, test_group};

test_group!(integer_addition, "test addition operator for integer (`+`)", {
    assert_true!(1 + 1 == 2);
    assert_true!(1 + 1 == 3);
    assert_true!(2 + 3 == 4, "2 + 3 should not equal 4");

    assert_false!(1 + 1 == 3);
    assert_false!(2 + 2 == 3);
    assert_false!(3 + 3 == 4);
});

test_group!(integer_subtraction, "test subtraction operator for integer (`-`)", {
    assert_equal!(2 - 1, 1);
    assert_equal!(3 - 2, 4, "3 - 2 should not equal 4");
    assert_not_equal!(4 - 2, 2);
});

test_group!(float_addition, "test addition operator for float (`+`)", {
    assert_equal!(1.0 + 1.0, 2.0);
    assert_equal!(1.0 + 2.0, 3.0);
});

test_group!(string_comparison, "test string comparison (`cmp`)", {
    use std::cmp::Ordering;

    assert_true!("a".cmp("a") == Ordering::Equal);
    assert_true!("a".cmp("b") == Ordering::Less);
    assert_true!("b".cmp("a") == Ordering::Greater);

    assert_equal!("a".cmp("b"), Ordering::Equal, "\"a\" and \"b\" are not the same");
});

test_group!(string_length, "test string length (`len`)", {
    assert_equal!("a".len(), 1);
    assert_equal!("ab".len(), 2);
    assert_equal!("abc".len(), 3);

    assert_equal!("a".len(), 0, "string \"a\" should have length 1");
});

fn main() -> ExitCode {
    sktest::run_discovered()
}
