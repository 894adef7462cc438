use std::{io, process::ExitCode};

use crate::{error::FormatError, statistics::Statistics};

#[derive(Debug)]
#[non_exhaustive]
pub struct RunReport {
    pub statistics: Statistics,
    pub fmt_errors: Vec<(FormatError, io::Error)>,
}

impl RunReport {
    /// `0` when every assertion passed, `1` otherwise.
    pub fn status(&self) -> u8 {
        match self.statistics.all_passed() {
            true => 0,
            false => 1,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(total: usize, passed: usize) -> RunReport {
        RunReport {
            statistics: Statistics::new(1, (total == passed) as usize, total, passed),
            fmt_errors: Vec::new(),
        }
    }

    #[test]
    fn status_follows_assertions() {
        assert_eq!(report(3, 3).status(), 0);
        assert_eq!(report(3, 2).status(), 1);
        assert_eq!(report(0, 0).status(), 0);
    }

    #[test]
    fn exit_code_matches_status() {
        assert_eq!(report(2, 2).exit_code(), ExitCode::SUCCESS);
        assert_eq!(report(2, 0).exit_code(), ExitCode::FAILURE);
    }
}
