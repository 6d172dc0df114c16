//! Git working-tree probes.

use std::path::Path;
use std::process::Command;

use crate::model::GitStatus;

/// Repository toplevel containing `root`, if `root` is inside a work tree
/// and `git` is installed.
#[must_use]
pub fn git_toplevel(root: &Path) -> Option<String> {
    Command::new("git")
        .arg("-C")
        .arg(root)
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Clean or dirty, from `git status --porcelain`.
#[must_use]
pub fn git_status(root: &Path) -> Option<GitStatus> {
    Command::new("git")
        .arg("-C")
        .arg(root)
        .args(["status", "--porcelain"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| {
            if String::from_utf8_lossy(&output.stdout).trim().is_empty() {
                GitStatus::Clean
            } else {
                GitStatus::Dirty
            }
        })
}
