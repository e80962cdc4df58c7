//! PZ3D Terminal Demo - Pointer-zone overlay
//!
//! Move the mouse across the terminal to switch between overlay resources.
//! Controls:
//!   - Mouse motion: select zone
//!   - Focus loss: hide overlay
//!   - Left/Right: Nudge spin
//!   - Q/ESC: Quit

use clap::Parser;
use log::info;
use pz3d_core::SceneConfig;
use pz3d_terminal::{TerminalApp, TerminalError};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pz3d-terminal", about = "Pointer-zone overlay in the terminal")]
struct Args {
    /// JSON scene config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target frames per second
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Overlay resources, one per zone (overrides the config)
    resources: Vec<String>,
}

fn main() -> Result<(), TerminalError> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SceneConfig::from_path(path)?,
        None => SceneConfig::default(),
    };
    if !args.resources.is_empty() {
        config.resources = args.resources;
    }

    info!(
        "starting terminal overlay with resources {:?}",
        config.resources
    );

    let mut app = TerminalApp::new(&config, args.fps)?;
    app.run()?;

    println!("Thank you for using PZ3D Terminal!");
    Ok(())
}
