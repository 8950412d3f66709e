//! Delegate launcher.
//!
//! The actual subcommand logic lives in a bundled Node.js CLI. This module
//! locates that artifact, optionally bootstraps it from a development
//! checkout, runs it with the forwarded arguments, and relays its exit code
//! verbatim. Resolution happens fresh on every invocation; nothing is
//! cached across runs.

use anyhow::{bail, Context, Result};
use std::io;
use std::path::PathBuf;
use std::process::Command;

use crate::bootstrap::NodeBootstrap;
use crate::paths::{self, DELEGATE_RUNTIME};
use crate::ui;

/// Exit code for every failure the wrapper itself produces.
pub const EXIT_FAILURE: i32 = 1;

/// Where the delegate artifact comes from.
///
/// Implementations may build the artifact on demand. `Err` means it cannot
/// be produced; the message is what the user sees.
pub trait DelegateSource {
    fn resolve(&self) -> Result<PathBuf>;
}

/// Filesystem lookup with a one-shot bootstrap fallback.
pub struct NodeSource {
    candidates: Vec<PathBuf>,
    bootstrap: Option<NodeBootstrap>,
}

impl NodeSource {
    /// Candidate paths and bootstrap root derived from the current
    /// executable location and working directory.
    pub fn detect() -> Result<Self> {
        let checkout_root =
            std::env::current_dir().context("Failed to get current directory")?;
        let exe = std::env::current_exe().ok();

        Ok(Self {
            candidates: paths::candidate_artifacts(exe.as_deref(), &checkout_root),
            bootstrap: Some(NodeBootstrap::new(&checkout_root)),
        })
    }

    pub fn custom(candidates: Vec<PathBuf>, bootstrap: Option<NodeBootstrap>) -> Self {
        Self {
            candidates,
            bootstrap,
        }
    }

    fn first_existing(&self) -> Option<PathBuf> {
        self.candidates.iter().find(|p| p.exists()).cloned()
    }
}

impl DelegateSource for NodeSource {
    fn resolve(&self) -> Result<PathBuf> {
        if let Some(artifact) = self.first_existing() {
            return Ok(artifact);
        }

        // Single bootstrap attempt, then one re-check. The bootstrap
        // reports its own failures before returning.
        if let Some(bootstrap) = &self.bootstrap {
            if bootstrap.run().is_ok() {
                if let Some(artifact) = self.first_existing() {
                    return Ok(artifact);
                }
            }
        }

        bail!("Could not find the bundled CLI implementation")
    }
}

/// Runs the delegate runtime with a forwarded argument list.
pub struct Launcher<S: DelegateSource> {
    runtime: String,
    source: S,
}

impl Launcher<NodeSource> {
    pub fn detect() -> Result<Self> {
        Ok(Self::with_source(DELEGATE_RUNTIME, NodeSource::detect()?))
    }
}

impl<S: DelegateSource> Launcher<S> {
    pub fn with_source(runtime: &str, source: S) -> Self {
        Self {
            runtime: runtime.to_string(),
            source,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run `<runtime> <artifact> <args...>` with inherited stdio and return
    /// the exit code to relay.
    ///
    /// Every failure mode of the wrapper itself maps to exit code 1; a
    /// delegate that ran and exited non-zero passes through untouched.
    pub fn run(&self, args: &[String]) -> Result<i32> {
        let artifact = match self.source.resolve() {
            Ok(artifact) => artifact,
            Err(e) => {
                ui::error_panel(
                    &e.to_string(),
                    &["This might be a development environment issue"],
                );
                return Ok(EXIT_FAILURE);
            }
        };

        let status = match Command::new(&self.runtime)
            .arg(&artifact)
            .args(args)
            .status()
        {
            Ok(status) => status,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                ui::error_panel(
                    &format!("{} is not installed or not in PATH", self.runtime),
                    &["Install Node.js: https://nodejs.org/"],
                );
                return Ok(EXIT_FAILURE);
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to run {}", self.runtime))
            }
        };

        // Killed by a signal leaves no code; treat as generic failure.
        Ok(status.code().unwrap_or(EXIT_FAILURE))
    }
}
