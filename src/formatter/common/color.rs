use std::io;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum ColorSetting {
    #[default]
    Automatic,
    Always,
    Never,
}

pub(crate) mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const BOLD_RED: &str = "\x1b[31;1m";
    pub const BOLD_GREEN: &str = "\x1b[32;1m";
}

/// Whether a formatter target can render ANSI colors.
///
/// Every [`io::IsTerminal`] target answers by checking for a terminal. Custom targets,
/// like in memory buffers, implement this directly.
pub trait SupportsColor {
    fn supports_color(&self) -> bool;
}

impl<T: io::IsTerminal> SupportsColor for T {
    fn supports_color(&self) -> bool {
        self.is_terminal()
    }
}
