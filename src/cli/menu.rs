//! Interactive menu loop: render, prompt, dispatch, report, repeat.

use crate::cli::presentation;
use crate::error::BridgeError;
use crate::ops::{self, Operation};
use crate::runner::ToolRunner;
use crate::session::Session;
use tracing::info;

/// Drive the menu until the user exits.
///
/// Handler errors are printed and the loop continues; no operation outcome
/// ends the session. Only a failed prompt read returns early, since without
/// a readable stdin there is nothing left to drive.
pub fn run<R: ToolRunner>(session: &Session<R>) -> Result<(), BridgeError> {
    use dialoguer::Input;

    loop {
        println!("\n{}", presentation::render_menu());
        let choice: String = Input::new()
            .with_prompt("Select an action")
            .interact_text()?;

        let operation = match Operation::from_selection(&choice) {
            Some(operation) => operation,
            None => {
                println!("{}", presentation::format_unrecognized(&choice));
                continue;
            }
        };

        if operation == Operation::Exit {
            info!("exiting on user request");
            break;
        }

        match dispatch(session, operation) {
            Ok(output) => println!("{}", output),
            Err(e @ BridgeError::Prompt(_)) => return Err(e),
            Err(e) => println!("{}", presentation::format_error(&e)),
        }
    }

    Ok(())
}

/// Prompt for whatever the operation needs, run it, and format the outcome.
fn dispatch<R: ToolRunner>(
    session: &Session<R>,
    operation: Operation,
) -> Result<String, BridgeError> {
    use dialoguer::Input;

    match operation {
        Operation::ListDevices => Ok(presentation::format_device_listing(
            &session.list_devices()?,
        )),
        Operation::StartServer => Ok(presentation::format_outcome(
            "Start server",
            "Server started.",
            &session.start_server()?,
        )),
        Operation::StopServer => Ok(presentation::format_outcome(
            "Stop server",
            "Server stopped.",
            &session.stop_server()?,
        )),
        Operation::Pair => {
            let endpoint: String = Input::new()
                .with_prompt("Pairing ip:port (e.g. 192.168.0.5:37099)")
                .interact_text()?;
            let pin: String = Input::new().with_prompt("Pairing code").interact_text()?;
            Ok(presentation::format_pair_outcome(
                &session.pair(&endpoint, &pin)?,
            ))
        }
        Operation::Connect => {
            let endpoint: String = Input::new().with_prompt("Host ip:port").interact_text()?;
            Ok(presentation::format_outcome(
                "Connect",
                "Connected.",
                &session.connect(&endpoint)?,
            ))
        }
        Operation::EnableTcpip => {
            let port: String = Input::new()
                .with_prompt("TCP port")
                .default(ops::DEFAULT_TCPIP_PORT.to_string())
                .interact_text()?;
            Ok(presentation::format_outcome(
                "Enable TCP/IP mode",
                "TCP/IP mode enabled.",
                &session.enable_tcpip(&port)?,
            ))
        }
        Operation::Shell => {
            println!("Opening device shell. Type 'exit' to return to the menu.");
            Ok(presentation::format_shell_exit(&session.open_shell()?))
        }
        Operation::RunCommand => {
            let command: String = Input::new()
                .with_prompt("Shell command (e.g. ls /sdcard)")
                .interact_text()?;
            Ok(presentation::format_command_output(
                &session.run_command(&command)?,
            ))
        }
        Operation::Install => {
            let package: String = Input::new()
                .with_prompt("Path to the APK")
                .interact_text()?;
            Ok(presentation::format_outcome(
                "Install",
                "Install finished.",
                &session.install(&package)?,
            ))
        }
        Operation::Push => {
            let local: String = Input::new()
                .with_prompt("Local source path")
                .interact_text()?;
            let remote: String = Input::new()
                .with_prompt("Device destination path (e.g. /sdcard/Download/)")
                .interact_text()?;
            Ok(presentation::format_outcome(
                "Push",
                "Push finished.",
                &session.push(&local, &remote)?,
            ))
        }
        Operation::Pull => {
            let remote: String = Input::new()
                .with_prompt("Device source path (e.g. /sdcard/Download/file.txt)")
                .interact_text()?;
            let local: String = Input::new()
                .with_prompt("Local destination path")
                .interact_text()?;
            Ok(presentation::format_outcome(
                "Pull",
                "Pull finished.",
                &session.pull(&remote, &local)?,
            ))
        }
        Operation::Reboot => {
            let mode: String = Input::new()
                .with_prompt("Reboot mode (empty, bootloader, or recovery)")
                .allow_empty(true)
                .interact_text()?;
            Ok(presentation::format_outcome(
                "Reboot",
                "Reboot command sent.",
                &session.reboot(&mode)?,
            ))
        }
        Operation::Disconnect => {
            let target: String = Input::new()
                .with_prompt("Host ip:port to disconnect (empty for all)")
                .allow_empty(true)
                .interact_text()?;
            Ok(presentation::format_outcome(
                "Disconnect",
                "Disconnected.",
                &session.disconnect(&target)?,
            ))
        }
        Operation::Mirror => Ok(presentation::format_mirror_outcome(&session.mirror()?)),
        Operation::Help => Ok(presentation::format_help(
            session.bridge_path(),
            session.mirror_path(),
        )),
        Operation::Exit => unreachable!("handled by the loop"),
    }
}
