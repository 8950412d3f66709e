//! Console output helpers.
//!
//! Stateless on purpose: every function writes directly to stdout/stderr,
//! nothing holds formatting state across calls.

use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Welcome panel shown when `specify` is invoked with no subcommand.
pub fn welcome() {
    println!("{}", "Specify CLI".cyan().bold());
    println!("AI model switching and task tracking for spec-driven development");
    println!();
    println!("{}", "Commands:".white().bold());
    println!("  switch-model <target>   Switch AI model without losing progress");
    println!("  list-models             Show available AI models and compatibility");
    println!("  detect-project          Auto-detect existing spec-kit projects");
    println!("  reset-project           Clean project reset with backup");
    println!("  track-tasks <action>    Manage task tracking (enable|disable|status)");
    println!("  init [name]             Initialize a new spec-kit project");
    println!();
    println!("{}", "Examples:".white().bold());
    println!("  specify switch-model claude");
    println!("  specify track-tasks status");
    println!("  specify init my-project --ai claude");
    println!();
    println!("{}", "Use --help with any command for details".dimmed());
}

/// Error panel: a red headline followed by plain guidance lines, on stderr.
pub fn error_panel(headline: &str, guidance: &[&str]) {
    eprintln!("{} {}", "error:".red().bold(), headline);
    for line in guidance {
        eprintln!("  {line}");
    }
}

/// Ask a yes/no question and read one answer line from `input`.
///
/// Only `y`/`yes` (any case) counts as acceptance. An empty answer or EOF
/// declines, so piped stdin never accidentally confirms.
pub fn confirm_from(input: &mut dyn BufRead, question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}
