//! Blob-console binary entry point.

use blob_console::{cli, logging, Config, Console, MemoryStorageClient, Session, SessionController};
use tracing::info;

#[tokio::main]
async fn main() -> blob_console::Result<()> {
    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("blob-console: {e}");
            std::process::exit(2);
        }
    };

    if args.help {
        cli::print_help();
        return Ok(());
    }
    if args.version {
        cli::print_version();
        return Ok(());
    }

    let config = match Config::load(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("blob-console: {e}");
            std::process::exit(2);
        }
    };

    logging::init(&config.log_filter());

    info!("blob-console v{}", env!("CARGO_PKG_VERSION"));
    info!(data_dir = %config.storage.data_dir, "starting interactive session");

    let client = MemoryStorageClient::new();
    let session = Session::new(config.storage.connection_string.clone());
    let console = Console::new(std::io::stdin().lock(), std::io::stdout().lock());

    let mut controller =
        SessionController::new(client, console, session, config.storage.data_dir.clone());
    controller.run().await
}
