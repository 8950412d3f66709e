use anyhow::Result;
use std::io::BufRead;

use crate::delegate::{DelegateSource, Launcher};
use crate::ui;

/// Destructive, so confirmation comes first. Declining is a successful
/// no-op; nothing is forwarded.
pub fn execute<S: DelegateSource>(
    launcher: &Launcher<S>,
    assume_yes: bool,
    input: &mut dyn BufRead,
) -> Result<i32> {
    let confirmed = assume_yes
        || ui::confirm_from(
            input,
            "Reset the current project? A backup is kept, but local spec-kit state is discarded.",
        )?;

    if !confirmed {
        println!("Reset cancelled");
        return Ok(0);
    }

    launcher.run(&["reset-project".to_string()])
}
