use clap::Parser;
use list_lambdas::{run, Cli};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // keep stdout clean for the table, warnings and errors go to stderr
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        tracing::error!(error = %err, "audit aborted");
        std::process::exit(1);
    }
}
