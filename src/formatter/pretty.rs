use std::{fmt::Write as _, io};

use crate::{
    assertion::Assertion,
    formatter::{
        ReportFormatter,
        common::color::{ColorSetting, SupportsColor, colors::*},
    },
    statistics::{PassRateBar, Statistics},
};

const PASSED_CELL: char = '█';
const FAILED_CELL: char = '░';

/// The default formatter, prints failures and a pass rate bar.
///
/// ```text
/// error: test failed at tests/integer.rs:5
///   test group:   test addition operator for integer (`+`)
///   expression:   assert_true( 1 + 1 == 3 )
///
/// tests failed:
///   ███████████████████████████░░░░░ 83.3%
/// test group:   1 passed, 1 failed, 2 total
/// assertion:    5 passed, 1 failed, 6 total
/// ```
#[derive(Debug)]
pub struct PrettyFormatter<W: io::Write> {
    target: W,
    color_setting: ColorSetting,
}

impl Default for PrettyFormatter<io::Stdout> {
    fn default() -> Self {
        Self {
            target: io::stdout(),
            color_setting: Default::default(),
        }
    }
}

impl<W: io::Write> PrettyFormatter<W> {
    pub fn with_target<WithTarget: io::Write>(
        self,
        with_target: WithTarget,
    ) -> PrettyFormatter<WithTarget> {
        PrettyFormatter {
            target: with_target,
            color_setting: self.color_setting,
        }
    }

    pub fn with_color_setting(self, color_setting: impl Into<ColorSetting>) -> Self {
        PrettyFormatter {
            color_setting: color_setting.into(),
            ..self
        }
    }

    pub fn target(&self) -> &W {
        &self.target
    }
}

impl<W: io::Write + SupportsColor> PrettyFormatter<W> {
    /// Return whether this formatter will currently emit colored output.
    pub fn use_color(&self) -> bool {
        match self.color_setting {
            ColorSetting::Automatic => self.target.supports_color(),
            ColorSetting::Always => true,
            ColorSetting::Never => false,
        }
    }
}

impl<W: io::Write + SupportsColor> ReportFormatter for PrettyFormatter<W> {
    fn fmt_failure(&mut self, group: &str, assertion: &Assertion) -> io::Result<()> {
        let rendered = render_failure(group, assertion, self.use_color());
        self.target.write_all(rendered.as_bytes())?;
        self.target.flush()
    }

    fn fmt_statistics(&mut self, statistics: &Statistics) -> io::Result<()> {
        let rendered = render_statistics(statistics, self.use_color());
        self.target.write_all(rendered.as_bytes())?;
        self.target.flush()
    }
}

/// Render the diagnostic block of a failed assertion.
pub fn render_failure(group: &str, assertion: &Assertion, use_color: bool) -> String {
    let mut out = String::new();
    let (error, bold, reset) = match use_color {
        true => (BOLD_RED, BOLD, RESET),
        false => ("", "", ""),
    };

    let _ = writeln!(
        out,
        "{error}error:{reset} test failed at {}",
        assertion.location()
    );
    let _ = writeln!(out, "  {bold}test group:{reset}   {group}");
    out.push_str(&assertion.failure_report());
    out.push('\n');
    out
}

/// Render the summary of a run.
///
/// This is a pure function of the counts, the same statistics always render the
/// same text.
pub fn render_statistics(statistics: &Statistics, use_color: bool) -> String {
    let mut out = String::new();
    let (header, header_color) = match statistics.all_passed() {
        true => ("test passed:", BOLD_GREEN),
        false => ("tests failed:", BOLD_RED),
    };
    let _ = match use_color {
        true => writeln!(out, "{header_color}{header}{RESET}"),
        false => writeln!(out, "{header}"),
    };

    match (statistics.bar(), statistics.pass_rate()) {
        (Some(PassRateBar { green, red }), Some(rate)) => {
            let green_cells = String::from_iter(std::iter::repeat_n(PASSED_CELL, green));
            let red_cells = String::from_iter(std::iter::repeat_n(FAILED_CELL, red));
            let _ = match use_color {
                true => write!(out, "  {GREEN}{green_cells}{RESET}{RED}{red_cells}{RESET}"),
                false => write!(out, "  {green_cells}{red_cells}"),
            };
            let _ = writeln!(out, " {:.1}%", rate * 100.0);
        }
        _ => out.push_str("  no assertions\n"),
    }

    let _ = writeln!(
        out,
        "test group:   {} passed, {} failed, {} total",
        statistics.passed_groups,
        statistics.failed_groups(),
        statistics.total_groups
    );
    let _ = writeln!(
        out,
        "assertion:    {} passed, {} failed, {} total",
        statistics.passed_assertions,
        statistics.failed_assertions(),
        statistics.total_assertions
    );
    out
}
