//! Process invoker — fire-and-forget dispatch of the composed command.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::info;

use crate::launch::error::LaunchError;

/// The finished invocation: a program and its argument vector, shaped
/// for the host platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    /// Executable to spawn (`open` on macOS, the port binary
    /// elsewhere).
    pub program: String,
    /// Arguments, in final order.
    pub args: Vec<String>,
}

impl LaunchCommand {
    /// Shape the command for the current platform.
    pub fn for_host(binary: &Path, args: Vec<String>) -> Self {
        if cfg!(target_os = "macos") {
            Self::macos_bundle(binary, args)
        } else {
            Self::direct(binary, args)
        }
    }

    /// Direct invocation: the binary itself with the vector as-is.
    pub fn direct(binary: &Path, args: Vec<String>) -> Self {
        Self {
            program: binary.display().to_string(),
            args,
        }
    }

    /// macOS application bundles cannot be exec'd directly; the
    /// command goes through `open <bundle> --args <vector…>`.
    pub fn macos_bundle(bundle: &Path, args: Vec<String>) -> Self {
        let mut wrapped = vec![bundle.display().to_string(), "--args".to_string()];
        wrapped.extend(args);
        Self {
            program: "open".to_string(),
            args: wrapped,
        }
    }
}

/// Start the command as a detached child and return as soon as the
/// spawn call does.
///
/// The child's stdio is disconnected, it gets its own process group
/// on Unix, and the handle is dropped immediately; the OS owns the
/// child from here. One attempt, no retry, no cancellation.
pub fn spawn_detached(command: &LaunchCommand) -> Result<(), LaunchError> {
    info!(
        program = %command.program,
        args = ?command.args,
        "dispatching source port"
    );

    let mut cmd = Command::new(&command.program);
    cmd.args(&command.args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    let child = cmd.spawn().map_err(|e| LaunchError::Spawn {
        program: command.program.clone(),
        source: e,
    })?;
    drop(child);
    Ok(())
}
