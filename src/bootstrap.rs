//! One-shot bootstrap of the bundled CLI implementation.
//!
//! When no prebuilt artifact can be found, the wrapper attempts to produce
//! one from a development checkout: verify the required external tools are
//! on PATH, then run the package manager's install and build steps. This is
//! a single attempt, not a retry loop; every failure is terminal for the
//! current invocation.

use anyhow::{bail, Result};
use std::path::PathBuf;
use std::process::Command;

use crate::paths::{DELEGATE_RUNTIME, PACKAGE_MANAGER};
use crate::ui;

pub struct NodeBootstrap {
    checkout_root: PathBuf,
    package_manager: String,
    required_tools: Vec<String>,
}

impl NodeBootstrap {
    pub fn new(checkout_root: impl Into<PathBuf>) -> Self {
        Self::custom(
            checkout_root,
            PACKAGE_MANAGER,
            &[DELEGATE_RUNTIME, PACKAGE_MANAGER],
        )
    }

    /// Bootstrap with non-default commands. Tests use this to avoid
    /// touching a real package manager.
    pub fn custom(
        checkout_root: impl Into<PathBuf>,
        package_manager: &str,
        required_tools: &[&str],
    ) -> Self {
        Self {
            checkout_root: checkout_root.into(),
            package_manager: package_manager.to_string(),
            required_tools: required_tools.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Run the install + build steps once.
    ///
    /// Missing tools are reported with installation guidance before the
    /// package manager is touched at all.
    pub fn run(&self) -> Result<()> {
        if let Some(tool) = missing_tool(&self.required_tools) {
            ui::error_panel(
                &format!("{tool} is not installed or not in PATH"),
                &[install_hint(tool)],
            );
            bail!("{tool} is required to build the CLI implementation");
        }

        println!("Building the bundled CLI implementation...");
        self.step("install", &["install"])?;
        self.step("build", &["run", "build"])?;
        Ok(())
    }

    fn step(&self, name: &str, args: &[&str]) -> Result<()> {
        // Spawn failures are reported here too: the tool can vanish
        // between the PATH probe and this call.
        let status = match Command::new(&self.package_manager)
            .args(args)
            .current_dir(&self.checkout_root)
            .status()
        {
            Ok(status) => status,
            Err(e) => {
                let detail = format!("Failed to run {} {name}: {e}", self.package_manager);
                ui::error_panel(&detail, &["Make sure it is installed and on PATH"]);
                bail!(detail);
            }
        };

        if !status.success() {
            ui::error_panel(
                &format!("{} {name} failed", self.package_manager),
                &["Fix the errors above and re-run the command"],
            );
            bail!("{} {name} step failed", self.package_manager);
        }
        Ok(())
    }
}

/// First required tool that cannot be found on PATH, if any.
pub fn missing_tool(tools: &[String]) -> Option<&str> {
    tools
        .iter()
        .find(|tool| which::which(tool.as_str()).is_err())
        .map(|tool| tool.as_str())
}

fn install_hint(tool: &str) -> &'static str {
    match tool {
        "node" => "Install Node.js: https://nodejs.org/",
        "npm" => "npm usually ships with Node.js",
        _ => "Install it and make sure it is on PATH",
    }
}
