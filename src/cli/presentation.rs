//! Presentation: menu, tables, and result formatters. Builds strings only;
//! the menu loop decides when to print them.

use crate::error::BridgeError;
use crate::ops::{self, Operation};
use crate::runner::CommandResult;
use crate::session::{MirrorOutcome, PairOutcome};
use comfy_table::presets::{UTF8_BORDERS_ONLY, UTF8_FULL};
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::path::Path;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// The numbered menu shown before every prompt.
pub fn render_menu() -> String {
    let mut out = format!("{}\n", format_section_heading("Device Bridge Console"));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    for op in Operation::ALL {
        table.add_row(vec![op.selection(), op.label()]);
    }
    out.push_str(&table.to_string());
    out
}

/// Generic outcome line: the tool's own output in green on success (or
/// `fallback` when it printed nothing), its diagnostic in red on failure.
pub fn format_outcome(action: &str, fallback: &str, result: &CommandResult) -> String {
    if result.succeeded {
        let message = if result.stdout.is_empty() {
            fallback
        } else {
            &result.stdout
        };
        format!("{}", message.green())
    } else {
        format!(
            "{} {}",
            format!("{} failed:", action).red(),
            result.diagnostic()
        )
    }
}

/// Device listing as a table, one row per attached device.
pub fn format_device_listing(result: &CommandResult) -> String {
    if !result.succeeded {
        return format!("{} {}", "Could not list devices:".red(), result.diagnostic());
    }

    let entries = ops::parse_device_listing(&result.stdout);
    if entries.is_empty() {
        return "No devices attached.".to_string();
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Serial", "State", "Details"]);
    for entry in &entries {
        table.add_row(vec![&entry.serial, &entry.state, &entry.details]);
    }
    table.to_string()
}

/// Pairing plus its follow-up connect. A failed or unlaunchable follow-up is
/// reported in yellow; it never downgrades a successful pairing.
pub fn format_pair_outcome(outcome: &PairOutcome) -> String {
    if !outcome.pair.succeeded {
        return format!("{} {}", "Pairing failed:".red(), outcome.pair.diagnostic());
    }

    let paired = if outcome.pair.stdout.is_empty() {
        "Paired."
    } else {
        &outcome.pair.stdout
    };
    let mut out = format!("{}", paired.green());

    match &outcome.connect {
        Some(connect) if connect.succeeded => {
            let message = if connect.stdout.is_empty() {
                "Connected."
            } else {
                &connect.stdout
            };
            out.push_str(&format!("\n{}", message.green()));
        }
        Some(connect) => {
            out.push_str(&format!(
                "\n{} {}",
                format!("Paired, but connecting to {} failed:", outcome.connect_target).yellow(),
                connect.diagnostic()
            ));
        }
        None => {
            out.push_str(&format!(
                "\n{}",
                format!(
                    "Paired, but the follow-up connect to {} could not be launched.",
                    outcome.connect_target
                )
                .yellow()
            ));
        }
    }

    out
}

pub fn format_mirror_outcome(outcome: &MirrorOutcome) -> String {
    match outcome {
        MirrorOutcome::NoDevice => format!(
            "{}",
            "No ready device attached; not starting the mirroring tool.".yellow()
        ),
        MirrorOutcome::Finished(result) if result.succeeded => {
            format!("{}", "Mirroring finished.".green())
        }
        MirrorOutcome::Finished(result) => format!(
            "{}",
            format!("Mirroring tool exited with {}.", describe_exit(result)).red()
        ),
    }
}

/// Exit of the interactive device shell. Non-zero is informational here;
/// the user may simply have ended the shell that way.
pub fn format_shell_exit(result: &CommandResult) -> String {
    if result.succeeded {
        format!("{}", "Shell closed.".green())
    } else {
        format!(
            "{}",
            format!("Shell exited with {}.", describe_exit(result)).yellow()
        )
    }
}

/// Output of a one-shot device command.
pub fn format_command_output(result: &CommandResult) -> String {
    if result.succeeded {
        if result.stdout.is_empty() {
            "(no output)".to_string()
        } else {
            result.stdout.clone()
        }
    } else {
        format!("{} {}", "Command failed:".red(), result.diagnostic())
    }
}

fn describe_exit(result: &CommandResult) -> String {
    match result.exit_code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

/// What each menu entry runs, for the help screen.
pub fn operation_summary(operation: Operation) -> &'static str {
    match operation {
        Operation::ListDevices => "adb devices -l",
        Operation::StartServer => "adb start-server",
        Operation::StopServer => "adb kill-server",
        Operation::Pair => "adb pair <ip:port> <pin>, then one connect to <ip>:5555",
        Operation::Connect => "adb connect <ip:port>",
        Operation::EnableTcpip => "adb tcpip <port> (default 5555)",
        Operation::Shell => "adb shell",
        Operation::RunCommand => "adb shell <command>",
        Operation::Install => "adb install <apk>",
        Operation::Push => "adb push <local> <remote>",
        Operation::Pull => "adb pull <remote> <local>",
        Operation::Reboot => "adb reboot [bootloader|recovery]",
        Operation::Disconnect => "adb disconnect [<ip:port>]",
        Operation::Mirror => "scrcpy (requires a ready device)",
        Operation::Help => "this overview",
        Operation::Exit => "leave the console",
    }
}

/// Help screen: the operation table plus the tool paths this session runs.
pub fn format_help(bridge: &Path, mirror: Option<&Path>) -> String {
    let mut out = format!("{}\n", format_section_heading("Operations"));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Key", "Action", "Runs"]);
    for op in Operation::ALL {
        table.add_row(vec![op.selection(), op.label(), operation_summary(op)]);
    }
    out.push_str(&table.to_string());
    out.push_str(&format!("\nadb: {}", bridge.display()));
    match mirror {
        Some(path) => out.push_str(&format!("\nscrcpy: {}", path.display())),
        None => out.push_str(&format!("\nscrcpy: {}", "not found".yellow())),
    }
    out
}

/// Render a handler error for the console. Launch errors get a prefix so a
/// tool that never ran is not mistaken for a tool that ran and failed.
pub fn format_error(error: &BridgeError) -> String {
    match error {
        BridgeError::Launch { .. } => format!("{} {}", "The tool never ran:".red(), error),
        _ => format!("{}", error.to_string().red()),
    }
}

pub fn format_unrecognized(input: &str) -> String {
    format!(
        "{}",
        format!(
            "Unrecognized selection {:?}. Enter a number from the menu.",
            input.trim()
        )
        .red()
    )
}
