/// Example: Run the terminal overlay with a config built in code
///
/// Usage: cargo run --example three_zones -- [path/to/scene.json]
use std::env;
use pz3d_core::{LabelConfig, SceneConfig};
use pz3d_terminal::{TerminalApp, TerminalError};

fn main() -> Result<(), TerminalError> {
    let args: Vec<String> = env::args().collect();

    let config = match args.get(1) {
        Some(path) => {
            println!("Loading scene config: {}", path);
            SceneConfig::from_path(path)?
        }
        None => SceneConfig {
            resources: vec![
                "images/left.png".to_string(),
                "images/centre.png".to_string(),
                "images/right.png".to_string(),
            ],
            spin_step: [0.02, 0.03, 0.0],
            label: LabelConfig {
                text: "Three Zones".to_string(),
                ..LabelConfig::default()
            },
            ..SceneConfig::default()
        },
    };

    println!("Loaded {} zones", config.resources.len());
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = TerminalApp::new(&config, 30)?;
    app.run()?;

    Ok(())
}
