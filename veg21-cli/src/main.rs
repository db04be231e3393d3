//! VEG21 Command-Line Interface
//!
//! Entry point for the veg21 binary. Parses command-line arguments and
//! delegates to the appropriate command handler.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    veg21_cli::run_cli().await
}
