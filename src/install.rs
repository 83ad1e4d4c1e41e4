//! npm package installation.

use crate::utils;
use std::io;
use std::path::Path;
use std::process::Command;

/// Install `packages` as dev-dependencies of the project at `root`.
///
/// A missing npm executable is downgraded to a warning naming the skipped
/// packages; any other failure (spawn error, non-zero exit) propagates.
/// Blocking call, no timeout.
pub fn install_packages(root: &Path, packages: &[String]) -> io::Result<()> {
    if packages.is_empty() {
        return Ok(());
    }
    let status = Command::new("npm")
        .arg("install")
        .arg("--save-dev")
        .args(packages)
        .current_dir(root)
        .status();
    match status {
        Ok(s) if s.success() => Ok(()),
        Ok(s) => Err(io::Error::other(format!("npm install exited with {s}"))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            eprintln!(
                "{} npm executable not found; skipped installing: {}",
                utils::warn_prefix(),
                packages.join(", ")
            );
            Ok(())
        }
        Err(e) => Err(e),
    }
}
