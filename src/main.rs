//! inspectlog main entrypoint.

use inspectlog::run;
use inspectlog::ui::messages::error;
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=debug for engine diagnostics; warnings only by default
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
