//! YOYO — removable-device backup and forensic report tool.
//!
//! Thin binary entry point. All logic lives in the `yoyo-core`
//! and `yoyo-cli` crates.

use clap::Parser;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;
use yoyo_cli::cli::Args;
use yoyo_cli::YoyoApp;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never interleave with menu prompts.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.default_log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("YOYO starting");

    let config = args.config()?;
    let stdout = std::io::stdout();
    let app = YoyoApp::new(config).interactive(stdout.is_terminal());
    let mut out = stdout.lock();

    match args.device {
        Some(device) => {
            app.run_device(&device, &mut out)?;
        }
        None => {
            let stdin = std::io::stdin();
            app.run_menu(&mut stdin.lock(), &mut out)?;
        }
    }

    Ok(())
}
