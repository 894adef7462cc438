//! Counts of a run and the geometry of the pass rate bar.

/// Width of the pass rate bar in cells.
pub const BAR_WIDTH: usize = 32;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub total_groups: usize,
    pub passed_groups: usize,
    pub total_assertions: usize,
    pub passed_assertions: usize,
}

impl Statistics {
    pub fn new(
        total_groups: usize,
        passed_groups: usize,
        total_assertions: usize,
        passed_assertions: usize,
    ) -> Self {
        Self {
            total_groups,
            passed_groups,
            total_assertions,
            passed_assertions,
        }
    }

    /// Fields are public, so inconsistent counts saturate at zero instead of wrapping.
    pub fn failed_groups(&self) -> usize {
        self.total_groups.saturating_sub(self.passed_groups)
    }

    pub fn failed_assertions(&self) -> usize {
        self.total_assertions.saturating_sub(self.passed_assertions)
    }

    pub fn all_passed(&self) -> bool {
        self.passed_assertions == self.total_assertions
    }

    /// Share of passed assertions in `0.0..=1.0`, `None` if nothing was asserted.
    pub fn pass_rate(&self) -> Option<f64> {
        match self.total_assertions {
            0 => None,
            total => Some(self.passed_assertions as f64 / total as f64),
        }
    }

    /// Split of the pass rate bar, `None` if nothing was asserted.
    pub fn bar(&self) -> Option<PassRateBar> {
        match self.total_assertions {
            0 => None,
            total => Some(PassRateBar::new(self.failed_assertions(), total)),
        }
    }
}

/// How many cells of the bar are drawn as passed and as failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassRateBar {
    pub green: usize,
    pub red: usize,
}

impl PassRateBar {
    /// `failed` out of `total` assertions, `total` must not be zero.
    ///
    /// The failed share is rounded down, but a run with any failure always gets at
    /// least one red cell.
    pub fn new(failed: usize, total: usize) -> Self {
        // integer floor of (1 - pass_rate) * BAR_WIDTH
        let mut red = failed * BAR_WIDTH / total;
        if red == 0 && failed != 0 {
            red = 1;
        }

        Self {
            green: BAR_WIDTH - red,
            red,
        }
    }
}
