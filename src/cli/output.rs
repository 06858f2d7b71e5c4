use colored::Colorize;

use crate::cli::context;

// Status lines go to stderr: stdout is reserved for command results
// (public keys, field values) so they can be piped.

/// Print a success message.
pub fn success(msg: &str) {
    if !context::is_quiet() {
        eprintln!("  {} {}", "✓".green(), msg);
    }
}

/// Print a warning message.
pub fn warning(msg: &str) {
    if !context::is_quiet() {
        eprintln!("  {} {}", "⚠".yellow(), msg);
    }
}

/// Print an error message. Never muted.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}

/// Print a header line.
pub fn header(msg: &str) {
    if !context::is_quiet() {
        eprintln!("\n{}", msg.bold());
    }
}
