use anyhow::Result;

use crate::delegate::{DelegateSource, Launcher, EXIT_FAILURE};
use crate::ui;

pub const AI_AGENTS: &[&str] = &["claude", "gemini", "copilot"];
pub const SCRIPT_KINDS: &[&str] = &["sh", "ps"];

pub fn execute<S: DelegateSource>(
    launcher: &Launcher<S>,
    name: Option<&str>,
    here: bool,
    ai: Option<&str>,
    script: Option<&str>,
    ignore_agent_tools: bool,
) -> Result<i32> {
    // A target is required: either a project name or --here.
    if name.is_none() && !here {
        ui::error_panel(
            "Missing project name",
            &[
                "Pass a name or use --here to initialize the current directory:",
                "  specify init my-project",
                "  specify init --here",
            ],
        );
        return Ok(EXIT_FAILURE);
    }

    if let Some(ai) = ai {
        if !AI_AGENTS.contains(&ai) {
            let valid = format!("Valid agents: {}", AI_AGENTS.join(", "));
            ui::error_panel(&format!("Invalid AI agent: {ai}"), &[valid.as_str()]);
            return Ok(EXIT_FAILURE);
        }
    }

    if let Some(script) = script {
        if !SCRIPT_KINDS.contains(&script) {
            let valid = format!("Valid script kinds: {}", SCRIPT_KINDS.join(", "));
            ui::error_panel(&format!("Invalid script kind: {script}"), &[valid.as_str()]);
            return Ok(EXIT_FAILURE);
        }
    }

    launcher.run(&build_args(name, here, ai, script, ignore_agent_tools))
}

fn build_args(
    name: Option<&str>,
    here: bool,
    ai: Option<&str>,
    script: Option<&str>,
    ignore_agent_tools: bool,
) -> Vec<String> {
    let mut args = vec!["init".to_string()];
    if let Some(name) = name {
        args.push(name.to_string());
    }
    if here {
        args.push("--here".to_string());
    }
    if let Some(ai) = ai {
        args.push("--ai".to_string());
        args.push(ai.to_string());
    }
    if let Some(script) = script {
        args.push("--script".to_string());
        args.push(script.to_string());
    }
    if ignore_agent_tools {
        args.push("--ignore-agent-tools".to_string());
    }
    args
}
