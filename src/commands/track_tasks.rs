use anyhow::Result;

use crate::delegate::{DelegateSource, Launcher, EXIT_FAILURE};
use crate::ui;

/// Valid task tracking actions. Anything else is a user error and never
/// reaches the delegate.
pub const ACTIONS: &[&str] = &["enable", "disable", "status"];

pub fn execute<S: DelegateSource>(launcher: &Launcher<S>, action: &str) -> Result<i32> {
    if !ACTIONS.contains(&action) {
        let valid = format!("Valid actions: {}", ACTIONS.join(", "));
        ui::error_panel(&format!("Invalid action: {action}"), &[valid.as_str()]);
        return Ok(EXIT_FAILURE);
    }

    launcher.run(&["track-tasks".to_string(), action.to_string()])
}
