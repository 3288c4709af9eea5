use std::process::ExitCode;

use storefront_check::{render_body, run_from_env};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
        Err(e) if e.not_found() => {
            tracing::warn!(".env file not found, using the process environment only");
        }
        Err(e) => tracing::warn!(error = %e, "Failed to load .env"),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    load_dotenv();

    match run_from_env().await {
        Ok(body) => {
            println!("{}", render_body(&body));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            err.exit_code()
        }
    }
}
