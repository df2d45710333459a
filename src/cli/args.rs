//! Command-line argument parsing for folio.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI, optionally against a different backend
    RunTui { api_url: Option<String> },
    /// Unusable arguments; the message says why
    Invalid(String),
}

/// Usage text printed by `--help` and after invalid arguments.
pub const USAGE: &str = "\
Usage: folio [OPTIONS]

Options:
      --api-url <URL>  Blog backend base URL (overrides FOLIO_API_BASE_URL)
  -h, --help           Print help
  -V, --version        Print version

Environment:
  FOLIO_API_BASE_URL   Blog backend base URL
  FOLIO_PREFERENCES    Path of the preferences file
  FOLIO_LOG            Log filter (e.g. debug, folio=trace)";

/// Parse command-line arguments and return the appropriate command.
///
/// # Examples
///
/// ```
/// use folio::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["folio".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut api_url = None;
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--api-url" => match args.next() {
                Some(url) if !url.trim().is_empty() => api_url = Some(url),
                _ => return CliCommand::Invalid("--api-url requires a URL".to_string()),
            },
            other => {
                if let Some(url) = other.strip_prefix("--api-url=") {
                    if url.trim().is_empty() {
                        return CliCommand::Invalid("--api-url requires a URL".to_string());
                    }
                    api_url = Some(url.to_string());
                } else {
                    return CliCommand::Invalid(format!("unexpected argument '{}'", other));
                }
            }
        }
    }

    CliCommand::RunTui { api_url }
}
