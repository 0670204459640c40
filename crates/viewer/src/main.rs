//! Status viewer entry point.

use clap::Parser;
use status_viewer::{RenderOptions, StatusViewer, render};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "status-viewer", version, about = "Fetch the backend status once and print it")]
struct Args {
    /// Base URL of the status service
    #[arg(long, env = "STATUS_URL", default_value = "http://localhost:3000")]
    url: String,

    /// Also print the full status JSON
    #[arg(long)]
    show_json: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let mut viewer = StatusViewer::new(&args.url);
    let state = viewer.load().await;

    print!(
        "{}",
        render(
            state,
            RenderOptions {
                show_json: args.show_json,
            },
        )
    );
}
