//! Tool discovery
//!
//! Finds the debug bridge and mirroring executables. The execution path is
//! consulted first via `which`; installations that never touched PATH are
//! covered by a short list of conventional directories per tool.

use crate::error::BridgeError;
use directories::BaseDirs;
use std::path::PathBuf;
use tracing::debug;

/// External tools the console drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// The debug bridge, `adb`.
    Adb,
    /// The screen mirroring companion, `scrcpy`.
    Scrcpy,
}

impl Tool {
    /// Bare tool name as users know it.
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Adb => "adb",
            Tool::Scrcpy => "scrcpy",
        }
    }

    /// Executable file name on the current platform.
    pub fn executable(&self) -> String {
        if cfg!(windows) {
            format!("{}.exe", self.name())
        } else {
            self.name().to_string()
        }
    }
}

/// Conventional install directories for a tool, most specific first.
///
/// `~/.tether/<tool dir>` is checked before the platform SDK locations so a
/// local unpack always wins over a system install.
pub fn conventional_dirs(tool: Tool) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    let base = BaseDirs::new();

    match tool {
        Tool::Adb => {
            if let Some(base) = &base {
                let home = base.home_dir();
                dirs.push(home.join(".tether").join("platform-tools"));
                if cfg!(target_os = "macos") {
                    dirs.push(home.join("Library/Android/sdk/platform-tools"));
                } else if cfg!(windows) {
                    dirs.push(
                        base.data_local_dir()
                            .join("Android")
                            .join("Sdk")
                            .join("platform-tools"),
                    );
                } else {
                    dirs.push(home.join("Android").join("Sdk").join("platform-tools"));
                }
            }
            if cfg!(target_os = "linux") {
                dirs.push(PathBuf::from("/usr/lib/android-sdk/platform-tools"));
            }
        }
        Tool::Scrcpy => {
            if let Some(base) = &base {
                dirs.push(base.home_dir().join(".tether").join("scrcpy"));
            }
        }
    }

    dirs
}

/// Search `dirs` for `executable`, returning the first hit.
pub fn find_in_dirs(executable: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter()
        .map(|dir| dir.join(executable))
        .find(|candidate| candidate.is_file())
}

/// Locate a tool on the execution path or in its conventional directories.
pub fn find(tool: Tool) -> Result<PathBuf, BridgeError> {
    let executable = tool.executable();

    if let Ok(path) = which::which(&executable) {
        debug!(tool = tool.name(), path = %path.display(), "found on execution path");
        return Ok(path);
    }

    let dirs = conventional_dirs(tool);
    if let Some(path) = find_in_dirs(&executable, &dirs) {
        debug!(tool = tool.name(), path = %path.display(), "found in conventional directory");
        return Ok(path);
    }

    Err(not_found(tool, &dirs))
}

/// Error naming every location that was searched.
pub fn not_found(tool: Tool, searched: &[PathBuf]) -> BridgeError {
    let searched = if searched.is_empty() {
        "(none)".to_string()
    } else {
        searched
            .iter()
            .map(|dir| dir.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    BridgeError::ToolNotFound {
        tool: tool.name().to_string(),
        searched,
    }
}
