use clap::{Parser, Subcommand};
use tracing::error;

#[derive(Parser, Debug)]
#[command(
    name = "gensen",
    about = "Withholding tax API for Japanese severance payments"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP server.
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
}

#[tokio::main]
async fn main() {
    gensen::logging::init_logging();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve { port } => {
            if let Err(e) = gensen::api::run_http_server(port).await {
                error!("server error: {e}");
                std::process::exit(1);
            }
        }
    }
}
