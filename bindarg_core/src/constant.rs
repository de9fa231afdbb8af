pub(crate) const FLAG_MARKER: char = '-';
pub(crate) const QUOTE: &str = "\"";
pub(crate) const WHITESPACE: [&str; 4] = [" ", "\t", "\r", "\n"];

// Used when the terminal width cannot be detected (ex: output is piped).
pub(crate) const DEFAULT_TERMINAL_WIDTH: usize = 80;
pub(crate) const MINIMUM_HELP_WIDTH: usize = 20;
pub(crate) const INDENT: usize = 1;
pub(crate) const PADDING: usize = 3;
