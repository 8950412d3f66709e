//! Single source of truth for where the bundled CLI implementation lives.
//!
//! This module defines WHERE the delegate artifact is looked up. It has no
//! I/O and no existence checks. One file shows the entire lookup order.
//!
//! ```text
//! <exe dir>/dist/cli/index.js      # installed package layout
//! <checkout>/dist/cli/index.js     # development checkout layout
//! ```

use std::path::{Path, PathBuf};

/// Interpreter that runs the delegate artifact.
pub const DELEGATE_RUNTIME: &str = "node";

/// Package manager used by the bootstrap path.
pub const PACKAGE_MANAGER: &str = "npm";

/// Delegate artifact path inside a package or checkout root.
pub fn bundled_artifact(root: &Path) -> PathBuf {
    root.join("dist").join("cli").join("index.js")
}

/// Ordered candidate locations for the delegate artifact.
///
/// The installed-package location (next to the `specify` executable) is
/// checked before the development checkout. First existing path wins;
/// resolution happens fresh on every invocation.
pub fn candidate_artifacts(exe_path: Option<&Path>, checkout_root: &Path) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(exe_dir) = exe_path.and_then(|p| p.parent()) {
        candidates.push(bundled_artifact(exe_dir));
    }

    candidates.push(bundled_artifact(checkout_root));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_artifact_is_under_dist_cli() {
        let artifact = bundled_artifact(Path::new("/opt/specify"));
        assert_eq!(artifact, Path::new("/opt/specify/dist/cli/index.js"));
    }

    #[test]
    fn installed_location_is_checked_first() {
        let candidates = candidate_artifacts(
            Some(Path::new("/usr/local/bin/specify")),
            Path::new("/home/dev/spec-kit"),
        );
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("/usr/local/bin/dist/cli/index.js"),
                PathBuf::from("/home/dev/spec-kit/dist/cli/index.js"),
            ]
        );
    }

    #[test]
    fn falls_back_to_checkout_when_exe_path_unknown() {
        let candidates = candidate_artifacts(None, Path::new("/home/dev/spec-kit"));
        assert_eq!(
            candidates,
            vec![PathBuf::from("/home/dev/spec-kit/dist/cli/index.js")]
        );
    }
}
