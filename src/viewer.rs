use std::env;
use std::path::Path;
use std::process::{Command, Stdio};

/// Whether a graphical session is likely available to show the chart.
pub fn display_available() -> bool {
    if cfg!(any(target_os = "macos", target_os = "windows")) {
        return true;
    }
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|var| env::var_os(var).is_some_and(|v| !v.is_empty()))
}

fn opener(path: &Path) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(path);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}

/// Hands the saved chart to the platform image viewer without waiting for it.
/// Returns whether a viewer was launched; failures are only logged.
pub fn show(path: &Path) -> bool {
    if !display_available() {
        tracing::debug!("no display available, not opening chart");
        return false;
    }

    match opener(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(child) => {
            tracing::debug!(pid = child.id(), path = %path.display(), "opened chart viewer");
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not open chart viewer");
            false
        }
    }
}
