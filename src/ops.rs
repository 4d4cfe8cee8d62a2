//! Operation catalog
//!
//! Closed enums describing everything the console can do. [`Operation`] is
//! the menu surface; [`BridgeCommand`] is a fully validated bridge invocation
//! with its exact argument vector. Validation lives in the constructors, so a
//! `BridgeCommand` that exists is always safe to hand to the runner.

use crate::error::BridgeError;
use std::path::Path;

/// Port the bridge listens on for network connections unless told otherwise.
pub const DEFAULT_TCPIP_PORT: u16 = 5555;

/// Menu entries, in the order they are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListDevices,
    StartServer,
    StopServer,
    Pair,
    Connect,
    EnableTcpip,
    Shell,
    RunCommand,
    Install,
    Push,
    Pull,
    Reboot,
    Disconnect,
    Mirror,
    Help,
    Exit,
}

impl Operation {
    /// Every operation, in menu order.
    pub const ALL: [Operation; 16] = [
        Operation::ListDevices,
        Operation::StartServer,
        Operation::StopServer,
        Operation::Pair,
        Operation::Connect,
        Operation::EnableTcpip,
        Operation::Shell,
        Operation::RunCommand,
        Operation::Install,
        Operation::Push,
        Operation::Pull,
        Operation::Reboot,
        Operation::Disconnect,
        Operation::Mirror,
        Operation::Help,
        Operation::Exit,
    ];

    /// Token the user types to pick this operation.
    pub fn selection(&self) -> &'static str {
        match self {
            Operation::ListDevices => "1",
            Operation::StartServer => "2",
            Operation::StopServer => "3",
            Operation::Pair => "4",
            Operation::Connect => "5",
            Operation::EnableTcpip => "6",
            Operation::Shell => "7",
            Operation::RunCommand => "8",
            Operation::Install => "9",
            Operation::Push => "10",
            Operation::Pull => "11",
            Operation::Reboot => "12",
            Operation::Disconnect => "13",
            Operation::Mirror => "14",
            Operation::Help => "15",
            Operation::Exit => "0",
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Operation::ListDevices => "List devices",
            Operation::StartServer => "Start server",
            Operation::StopServer => "Stop server",
            Operation::Pair => "Pair device",
            Operation::Connect => "Connect device",
            Operation::EnableTcpip => "Enable TCP/IP mode",
            Operation::Shell => "Open shell",
            Operation::RunCommand => "Run command",
            Operation::Install => "Install APK",
            Operation::Push => "Push file",
            Operation::Pull => "Pull file",
            Operation::Reboot => "Reboot device",
            Operation::Disconnect => "Disconnect",
            Operation::Mirror => "Mirror screen",
            Operation::Help => "Help",
            Operation::Exit => "Exit",
        }
    }

    /// Map user input to an operation. Input is trimmed; anything that is not
    /// exactly one of the menu tokens maps to `None`.
    pub fn from_selection(input: &str) -> Option<Operation> {
        let token = input.trim();
        Operation::ALL.iter().copied().find(|op| op.selection() == token)
    }
}

/// Reboot targets the bridge understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebootMode {
    Normal,
    Bootloader,
    Recovery,
}

impl RebootMode {
    /// Parse a user-entered mode. Empty input means a normal reboot.
    pub fn parse(input: &str) -> Result<RebootMode, BridgeError> {
        match input.trim() {
            "" => Ok(RebootMode::Normal),
            "bootloader" => Ok(RebootMode::Bootloader),
            "recovery" => Ok(RebootMode::Recovery),
            other => Err(BridgeError::Validation(format!(
                "unknown reboot mode {:?} (expected bootloader, recovery, or empty for a normal reboot)",
                other
            ))),
        }
    }
}

/// A validated invocation of the debug bridge.
///
/// Constructors trim their inputs and refuse anything the bridge would only
/// reject later with a worse message. [`BridgeCommand::args`] yields the
/// complete argument vector; nothing is appended downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeCommand {
    Devices,
    StartServer,
    KillServer,
    Pair { endpoint: String, pin: String },
    Connect { endpoint: String },
    Tcpip { port: u16 },
    Shell,
    RunCommand { command: String },
    Install { package: String },
    Push { local: String, remote: String },
    Pull { remote: String, local: String },
    Reboot { mode: RebootMode },
    Disconnect { target: Option<String> },
}

fn required(value: &str, what: &str) -> Result<String, BridgeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BridgeError::Validation(format!("{} must not be empty", what)));
    }
    Ok(trimmed.to_string())
}

impl BridgeCommand {
    pub fn pair(endpoint: &str, pin: &str) -> Result<BridgeCommand, BridgeError> {
        Ok(BridgeCommand::Pair {
            endpoint: required(endpoint, "pairing endpoint")?,
            pin: required(pin, "pairing code")?,
        })
    }

    pub fn connect(endpoint: &str) -> Result<BridgeCommand, BridgeError> {
        Ok(BridgeCommand::Connect {
            endpoint: required(endpoint, "connection endpoint")?,
        })
    }

    /// Empty input selects the default port.
    pub fn tcpip(port: &str) -> Result<BridgeCommand, BridgeError> {
        let trimmed = port.trim();
        let port = if trimmed.is_empty() {
            DEFAULT_TCPIP_PORT
        } else {
            trimmed.parse::<u16>().map_err(|_| {
                BridgeError::Validation(format!("{:?} is not a valid TCP port", trimmed))
            })?
        };
        Ok(BridgeCommand::Tcpip { port })
    }

    pub fn run_command(command: &str) -> Result<BridgeCommand, BridgeError> {
        Ok(BridgeCommand::RunCommand {
            command: required(command, "shell command")?,
        })
    }

    /// The package file must exist locally before anything is spawned.
    pub fn install(package: &str) -> Result<BridgeCommand, BridgeError> {
        let package = required(package, "package path")?;
        if !Path::new(&package).is_file() {
            return Err(BridgeError::Validation(format!(
                "package file not found: {}",
                package
            )));
        }
        Ok(BridgeCommand::Install { package })
    }

    /// The local source must exist; it may be a file or a directory.
    pub fn push(local: &str, remote: &str) -> Result<BridgeCommand, BridgeError> {
        let local = required(local, "local source path")?;
        if !Path::new(&local).exists() {
            return Err(BridgeError::Validation(format!(
                "local path not found: {}",
                local
            )));
        }
        Ok(BridgeCommand::Push {
            local,
            remote: required(remote, "remote destination path")?,
        })
    }

    pub fn pull(remote: &str, local: &str) -> Result<BridgeCommand, BridgeError> {
        Ok(BridgeCommand::Pull {
            remote: required(remote, "remote source path")?,
            local: required(local, "local destination path")?,
        })
    }

    pub fn reboot(mode: &str) -> Result<BridgeCommand, BridgeError> {
        Ok(BridgeCommand::Reboot {
            mode: RebootMode::parse(mode)?,
        })
    }

    /// Empty input means disconnect everything.
    pub fn disconnect(target: &str) -> BridgeCommand {
        let trimmed = target.trim();
        BridgeCommand::Disconnect {
            target: if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            },
        }
    }

    /// Complete argument vector for the bridge executable.
    pub fn args(&self) -> Vec<String> {
        match self {
            BridgeCommand::Devices => vec!["devices".into(), "-l".into()],
            BridgeCommand::StartServer => vec!["start-server".into()],
            BridgeCommand::KillServer => vec!["kill-server".into()],
            BridgeCommand::Pair { endpoint, pin } => {
                vec!["pair".into(), endpoint.clone(), pin.clone()]
            }
            BridgeCommand::Connect { endpoint } => vec!["connect".into(), endpoint.clone()],
            BridgeCommand::Tcpip { port } => vec!["tcpip".into(), port.to_string()],
            BridgeCommand::Shell => vec!["shell".into()],
            BridgeCommand::RunCommand { command } => vec!["shell".into(), command.clone()],
            BridgeCommand::Install { package } => vec!["install".into(), package.clone()],
            BridgeCommand::Push { local, remote } => {
                vec!["push".into(), local.clone(), remote.clone()]
            }
            BridgeCommand::Pull { remote, local } => {
                vec!["pull".into(), remote.clone(), local.clone()]
            }
            BridgeCommand::Reboot { mode } => match mode {
                RebootMode::Normal => vec!["reboot".into()],
                RebootMode::Bootloader => vec!["reboot".into(), "bootloader".into()],
                RebootMode::Recovery => vec!["reboot".into(), "recovery".into()],
            },
            BridgeCommand::Disconnect { target } => match target {
                Some(target) => vec!["disconnect".into(), target.clone()],
                None => vec!["disconnect".into()],
            },
        }
    }

    /// Whether this invocation takes over the console until the child exits.
    pub fn interactive(&self) -> bool {
        matches!(self, BridgeCommand::Shell)
    }
}

/// Network endpoint the pairing follow-up connects to: the pairing host on
/// the default connection port. Pairing and connecting use different ports.
pub fn follow_up_connect_target(endpoint: &str) -> String {
    let host = match endpoint.split_once(':') {
        Some((host, _)) => host,
        None => endpoint,
    };
    format!("{}:{}", host, DEFAULT_TCPIP_PORT)
}

/// One row of the bridge's device listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceEntry {
    pub serial: String,
    pub state: String,
    pub details: String,
}

impl DeviceEntry {
    /// A device is usable only in the `device` state. `offline` and
    /// `unauthorized` entries are listed but cannot run commands.
    pub fn is_ready(&self) -> bool {
        self.state == "device"
    }
}

/// Parse the output of the device listing.
///
/// Skips the header line, blank lines, and daemon startup notices (lines
/// beginning with `*`).
pub fn parse_device_listing(output: &str) -> Vec<DeviceEntry> {
    output
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('*') || line.starts_with("List of devices") {
                return None;
            }
            let mut fields = line.split_whitespace();
            let serial = fields.next()?.to_string();
            let state = fields.next().unwrap_or_default().to_string();
            let details = fields.collect::<Vec<_>>().join(" ");
            Some(DeviceEntry {
                serial,
                state,
                details,
            })
        })
        .collect()
}
