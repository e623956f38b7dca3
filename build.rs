use std::path::PathBuf;
use std::process::Command;

/// Runs `git` with `args` and returns its trimmed stdout, if it succeeded.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_owned();
    (!text.is_empty()).then_some(text)
}

fn main() {
    let version = match git(&["rev-parse", "--short", "HEAD"]) {
        Some(hash) if git(&["status", "--porcelain", "--untracked-files=no"]).is_some() => {
            format!("{hash}-dirty")
        }
        Some(hash) => hash,
        None => "unknown".to_owned(),
    };
    println!("cargo:rustc-env=SNOOKER_TABLE_GIT_HASH={version}");

    // Also resolves worktrees and submodules
    let Some(git_dir) = git(&["rev-parse", "--git-dir"]).map(PathBuf::from) else {
        return;
    };
    for tracked in ["HEAD", "index", "packed-refs", "refs"] {
        let path = git_dir.join(tracked);
        if path.exists() {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}
