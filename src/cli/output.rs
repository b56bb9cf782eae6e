use colored::Colorize;

use crate::cli::context::{self, Verbosity};

/// Returns true when `--quiet` is active.
pub fn is_quiet() -> bool {
    context::verbosity() == Verbosity::Quiet
}

/// Print a success message.
pub fn success(msg: &str) {
    if !is_quiet() {
        println!("  {} {}", "✓".green(), msg);
    }
}

/// Print a warning message.
pub fn warning(msg: &str) {
    if !is_quiet() {
        println!("  {} {}", "⚠".yellow(), msg);
    }
}

/// Print an error message. Always shown.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}

/// Print a header line.
pub fn header(msg: &str) {
    if !is_quiet() {
        println!("\n{}", msg.bold());
    }
}

/// Print a detail line to stderr, only with `--verbose`.
///
/// Goes to stderr so it never mixes with data on stdout (`export`,
/// `list --json`, `show --field`).
pub fn detail(msg: &str) {
    if context::verbosity() == Verbosity::Verbose {
        eprintln!("    {}", msg.dimmed());
    }
}
