use phishfeat_core::logging;

mod cli;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    let sink = logging::init_logging();
    tracing::debug!(%sink, "log sink");

    if let Err(err) = CliCommand::run_from_args().await {
        eprintln!("phishfeat error: {:#}", err);
        std::process::exit(1);
    }
}
