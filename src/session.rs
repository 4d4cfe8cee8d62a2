//! Session context
//!
//! A [`Session`] holds everything the operation handlers need: the resolved
//! tool paths and the runner that spawns them. Tools are located once at
//! startup; handlers never search the filesystem again. The runner is a type
//! parameter so handler flow can be tested without real processes.

use crate::error::BridgeError;
use crate::locate::{self, Tool};
use crate::ops::{self, BridgeCommand};
use crate::runner::{CommandResult, ProcessRunner, ToolRunner};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Result of the pairing operation and its follow-up connect.
///
/// The follow-up never changes the pairing verdict: `pair` is what the
/// pairing invocation itself reported. `connect` is `None` when pairing
/// failed or the follow-up could not be launched.
#[derive(Debug)]
pub struct PairOutcome {
    pub pair: CommandResult,
    pub connect: Option<CommandResult>,
    pub connect_target: String,
}

/// Result of the screen mirroring operation.
#[derive(Debug)]
pub enum MirrorOutcome {
    /// No ready device was attached, so the mirroring tool was never started.
    NoDevice,
    /// The mirroring tool ran and exited with this result.
    Finished(CommandResult),
}

/// Resolved tools plus the runner that drives them.
pub struct Session<R: ToolRunner> {
    bridge: PathBuf,
    mirror: Option<PathBuf>,
    runner: R,
}

impl Session<ProcessRunner> {
    /// Locate the tools and build a session around real processes.
    ///
    /// The debug bridge is required. The mirroring tool is optional: when it
    /// is missing the session still starts and only the mirror action
    /// reports the absence.
    pub fn resolve() -> Result<Self, BridgeError> {
        let bridge = locate::find(Tool::Adb)?;
        info!(bridge = %bridge.display(), "resolved debug bridge");

        let mirror = match locate::find(Tool::Scrcpy) {
            Ok(path) => {
                info!(mirror = %path.display(), "resolved mirroring tool");
                Some(path)
            }
            Err(_) => {
                debug!("mirroring tool not found; only the mirror action is affected");
                None
            }
        };

        Ok(Session::new(bridge, mirror, ProcessRunner::new()))
    }
}

impl<R: ToolRunner> Session<R> {
    pub fn new(bridge: PathBuf, mirror: Option<PathBuf>, runner: R) -> Self {
        Self {
            bridge,
            mirror,
            runner,
        }
    }

    pub fn bridge_path(&self) -> &Path {
        &self.bridge
    }

    pub fn mirror_path(&self) -> Option<&Path> {
        self.mirror.as_deref()
    }

    fn run_bridge(&self, command: &BridgeCommand) -> Result<CommandResult, BridgeError> {
        let args = command.args();
        if command.interactive() {
            self.runner.run_attached(&self.bridge, &args)
        } else {
            self.runner.run(&self.bridge, &args)
        }
    }

    pub fn list_devices(&self) -> Result<CommandResult, BridgeError> {
        self.run_bridge(&BridgeCommand::Devices)
    }

    pub fn start_server(&self) -> Result<CommandResult, BridgeError> {
        self.run_bridge(&BridgeCommand::StartServer)
    }

    pub fn stop_server(&self) -> Result<CommandResult, BridgeError> {
        self.run_bridge(&BridgeCommand::KillServer)
    }

    /// Pair with a device, then try one connect to the pairing host on the
    /// default connection port. Pairing and connecting listen on different
    /// ports, so the follow-up cannot reuse the pairing endpoint verbatim.
    pub fn pair(&self, endpoint: &str, pin: &str) -> Result<PairOutcome, BridgeError> {
        let command = BridgeCommand::pair(endpoint, pin)?;
        let connect_target = ops::follow_up_connect_target(endpoint.trim());

        let pair = self.run_bridge(&command)?;
        if !pair.succeeded {
            return Ok(PairOutcome {
                pair,
                connect: None,
                connect_target,
            });
        }

        let follow_up = BridgeCommand::Connect {
            endpoint: connect_target.clone(),
        };
        let connect = match self.run_bridge(&follow_up) {
            Ok(result) => Some(result),
            Err(e) => {
                warn!(endpoint = %connect_target, error = %e, "follow-up connect failed to launch");
                None
            }
        };

        Ok(PairOutcome {
            pair,
            connect,
            connect_target,
        })
    }

    pub fn connect(&self, endpoint: &str) -> Result<CommandResult, BridgeError> {
        self.run_bridge(&BridgeCommand::connect(endpoint)?)
    }

    pub fn enable_tcpip(&self, port: &str) -> Result<CommandResult, BridgeError> {
        self.run_bridge(&BridgeCommand::tcpip(port)?)
    }

    /// Open an interactive device shell attached to the console. Blocks
    /// until the shell exits.
    pub fn open_shell(&self) -> Result<CommandResult, BridgeError> {
        self.run_bridge(&BridgeCommand::Shell)
    }

    /// Run one shell command on the device. The command reaches the device
    /// shell as a single argument, so the device side does the word
    /// splitting.
    pub fn run_command(&self, command: &str) -> Result<CommandResult, BridgeError> {
        self.run_bridge(&BridgeCommand::run_command(command)?)
    }

    pub fn install(&self, package: &str) -> Result<CommandResult, BridgeError> {
        self.run_bridge(&BridgeCommand::install(package)?)
    }

    pub fn push(&self, local: &str, remote: &str) -> Result<CommandResult, BridgeError> {
        self.run_bridge(&BridgeCommand::push(local, remote)?)
    }

    pub fn pull(&self, remote: &str, local: &str) -> Result<CommandResult, BridgeError> {
        self.run_bridge(&BridgeCommand::pull(remote, local)?)
    }

    pub fn reboot(&self, mode: &str) -> Result<CommandResult, BridgeError> {
        self.run_bridge(&BridgeCommand::reboot(mode)?)
    }

    pub fn disconnect(&self, target: &str) -> Result<CommandResult, BridgeError> {
        self.run_bridge(&BridgeCommand::disconnect(target))
    }

    /// Mirror the device screen. The mirroring tool is only started when a
    /// ready device is attached; it shows its own window and blocks the
    /// console until closed.
    pub fn mirror(&self) -> Result<MirrorOutcome, BridgeError> {
        let mirror = self.mirror.as_deref().ok_or_else(|| {
            locate::not_found(Tool::Scrcpy, &locate::conventional_dirs(Tool::Scrcpy))
        })?;

        let listing = self.run_bridge(&BridgeCommand::Devices)?;
        let any_ready = ops::parse_device_listing(&listing.stdout)
            .iter()
            .any(|entry| entry.is_ready());
        if !any_ready {
            return Ok(MirrorOutcome::NoDevice);
        }

        let result = self.runner.run_attached(mirror, &[])?;
        Ok(MirrorOutcome::Finished(result))
    }
}
