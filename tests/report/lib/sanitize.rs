use std::sync::LazyLock;

use regex::Regex;

static PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Example matches:
    //   tests\report\main.rs:42
    //   tests/report/main.rs:42
    Regex::new(r"(?P<path>tests[^\n:]+\.rs):(?P<line>\d+)").unwrap()
});

pub fn sanitize_locations(input: &str) -> String {
    PATH_RE
        .replace_all(input, |caps: &regex::Captures| {
            let path = caps["path"].replace('\\', "/");
            format!("{path}:<line>")
        })
        .to_string()
}
