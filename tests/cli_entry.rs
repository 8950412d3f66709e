//! Binary-level surface: invocations the wrapper answers by itself,
//! without ever consulting the delegate.

use std::process::Command;

fn specify() -> Command {
    Command::new(env!("CARGO_BIN_EXE_specify"))
}

#[test]
fn no_arguments_prints_welcome_and_exits_zero() {
    // empty working directory: any accidental delegation attempt would
    // find no artifact and exit non-zero
    let dir = tempfile::tempdir().unwrap();
    let output = specify().current_dir(dir.path()).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Specify CLI"));
    assert!(stdout.contains("switch-model"));
    assert!(stdout.contains("track-tasks"));
}

#[test]
fn version_flag_prints_static_version_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    for flag in ["--version", "-v"] {
        let output = specify().arg(flag).current_dir(dir.path()).output().unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(
            stdout.trim(),
            format!("specify-cli v{}", env!("CARGO_PKG_VERSION"))
        );
    }
}
