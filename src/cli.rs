//! CLI domain: flag parsing, the interactive menu loop, and presentation only.
//! No process handling; operation semantics live in the session.

mod menu;
mod parse;
mod presentation;

pub use menu::run;
pub use parse::Cli;
pub use presentation::format_error;
