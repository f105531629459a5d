use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;

/// Format the final result line
/// Format: "Result: {total}"
pub fn format_result(total: i64, use_colors: bool) -> String {
    if use_colors {
        format!("Result: {}", total.bold())
    } else {
        format!("Result: {}", total)
    }
}

/// Write the result line to `out`
pub fn write_result(out: &mut impl Write, total: i64, use_colors: bool) -> io::Result<()> {
    writeln!(out, "{}", format_result(total, use_colors))
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}
