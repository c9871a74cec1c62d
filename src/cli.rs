//! Command-line interface for blob-console.
//!
//! Uses lexopt for minimal binary size overhead.

use std::ffi::OsString;
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Debug, Clone, Default)]
pub struct Args {
    /// Path to configuration file.
    pub config: Option<PathBuf>,
    /// Storage connection string (overrides config file).
    pub connection_string: Option<String>,
    /// Local directory for staged uploads and downloads.
    pub data_dir: Option<String>,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: Option<String>,
    /// Show version and exit.
    pub version: bool,
    /// Show help and exit.
    pub help: bool,
}

/// Parse command-line arguments.
pub fn parse_args() -> Result<Args, ArgsError> {
    parse_args_from(std::env::args_os())
}

/// Parse arguments from an iterator (for testing).
pub fn parse_args_from<I>(args: I) -> Result<Args, ArgsError>
where
    I: IntoIterator<Item = OsString>,
{
    use lexopt::prelude::*;

    let mut result = Args::default();
    let mut parser = lexopt::Parser::from_iter(args);

    while let Some(arg) = parser.next()? {
        match arg {
            Short('h') | Long("help") => {
                result.help = true;
            }
            Short('V') | Long("version") => {
                result.version = true;
            }
            Short('c') | Long("config") => {
                result.config = Some(parser.value()?.parse()?);
            }
            Short('s') | Long("connection-string") => {
                result.connection_string = Some(parser.value()?.parse()?);
            }
            Short('d') | Long("data-dir") => {
                result.data_dir = Some(parser.value()?.parse()?);
            }
            Short('l') | Long("log-level") => {
                result.log_level = Some(parser.value()?.parse()?);
            }
            Value(val) => {
                return Err(ArgsError::UnexpectedArgument(val.to_string_lossy().into()));
            }
            _ => return Err(arg.unexpected().into()),
        }
    }

    Ok(result)
}

/// Print help message.
pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        r#"blob-console {version}
Interactive console for basic object-storage operations

USAGE:
    blob-console [OPTIONS]

OPTIONS:
    -c, --config <FILE>              Path to configuration file (JSON)
    -s, --connection-string <STR>    Storage connection string
    -d, --data-dir <DIR>             Local directory for uploads/downloads [default: ./data]
    -l, --log-level <LVL>            Log level (error, warn, info, debug, trace)
    -h, --help                       Print help
    -V, --version                    Print version

ENVIRONMENT VARIABLES:
    BLOB_CONSOLE_CONNECTION_STRING   Connection string (overrides config)
    BLOB_CONSOLE_DATA_DIR            Data directory (overrides config)
    BLOB_CONSOLE_LOG_LEVEL           Log level (overrides config)
    RUST_LOG                         Alternative log level setting

EXAMPLES:
    # Start against the built-in in-memory emulator
    blob-console

    # Start with a config file
    blob-console -c appsettings.json

    # Verbose diagnostics on stderr
    blob-console -l debug
"#
    );
}

/// Print version.
pub fn print_version() {
    println!("blob-console {}", env!("CARGO_PKG_VERSION"));
}

/// Argument parsing errors.
#[derive(Debug)]
pub enum ArgsError {
    /// Lexopt parsing error.
    Lexopt(lexopt::Error),
    /// Unexpected positional argument.
    UnexpectedArgument(String),
}

impl std::fmt::Display for ArgsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexopt(e) => write!(f, "{}", e),
            Self::UnexpectedArgument(arg) => {
                write!(f, "unexpected argument: '{}'", arg)
            }
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<lexopt::Error> for ArgsError {
    fn from(e: lexopt::Error) -> Self {
        Self::Lexopt(e)
    }
}
