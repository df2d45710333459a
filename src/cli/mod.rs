//! CLI module for folio.
//!
//! The dispatcher is called early in `main()` to handle flags before the
//! TUI starts:
//!
//! ```ignore
//! use folio::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(code) = run_cli_command(&command) {
//!     std::process::exit(code);
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use version::{handle_version_command, VERSION};

/// Run a CLI command if applicable.
///
/// Returns `None` for [`CliCommand::RunTui`], otherwise the process exit
/// code. `Version` never returns.
pub fn run_cli_command(command: &CliCommand) -> Option<i32> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(0)
        }
        CliCommand::Invalid(reason) => {
            eprintln!("error: {}\n\n{}", reason, USAGE);
            Some(2)
        }
        CliCommand::RunTui { .. } => None,
    }
}
