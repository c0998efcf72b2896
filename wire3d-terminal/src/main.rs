/// Wire3D Terminal Demo - Rotating Wireframe Cube
///
/// Usage: wire3d-terminal [config.json]
/// Controls:
///   - '+': Zoom in
///   - '-': Zoom out
///   - Esc / Q / Ctrl-C: Quit
///
/// Logging follows RUST_LOG (default "warn"). Set WIRE3D_LOG_FILE to send
/// log output to a file instead of stderr while the frame is on screen.

use anyhow::Context;
use log::info;
use std::env;
use std::fs::File;
use std::path::Path;
use wire3d_terminal::{AppConfig, TerminalApp};

fn init_logging() -> anyhow::Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    builder.format_timestamp_micros();
    if let Some(path) = env::var_os("WIRE3D_LOG_FILE") {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create log file {}", Path::new(&path).display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = match env::args_os().nth(1) {
        Some(path) => AppConfig::load(Path::new(&path))?,
        None => AppConfig::default(),
    };
    info!("configuration: {config:?}");

    let mut app = TerminalApp::new(config);
    let stats = app.run()?;

    println!(
        "Rendered {} frames ({} over budget). Thank you for using the Wire3D Terminal Renderer!",
        stats.frames, stats.overruns
    );
    Ok(())
}
