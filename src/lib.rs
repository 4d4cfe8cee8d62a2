//! Tether
//!
//! Interactive console for Android devices over the debug bridge. Wraps
//! `adb` and the `scrcpy` mirroring tool behind a numbered menu: pairing,
//! wireless connection, file transfer, package install, device shells, and
//! screen mirroring without memorizing tool syntax.
//!
//! The console spawns the real tools rather than speaking their protocols;
//! [`session::Session`] holds the resolved tool paths and the
//! [`runner::ToolRunner`] that drives them.

pub mod cli;
pub mod error;
pub mod locate;
pub mod logging;
pub mod ops;
pub mod runner;
pub mod session;
