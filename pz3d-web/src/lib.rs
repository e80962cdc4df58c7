//! PZ3D Web - WASM host for the pointer-zone overlay
//!
//! The page owns the three.js scene; this crate owns the decisions: which
//! overlay image is shown for the current pointer position, and how far the
//! pyramid has spun on each animation frame.

use wasm_bindgen::prelude::*;

pub mod dom;
pub mod error;
pub mod overlay;
pub mod scene;

pub use error::WebError;
pub use overlay::{ImageOverlay, ImageSink};
pub use scene::{SceneCallbacks, SceneLoop};

/// Scene config as JSON with every default filled in.
///
/// The page reads the label text, colours and camera distance from here when
/// it builds the scene.
#[wasm_bindgen(js_name = sceneConfig)]
pub fn scene_config(config_json: Option<String>) -> Result<String, JsValue> {
    let config = dom::scene_config(config_json)?;
    Ok(config.to_json().map_err(WebError::from)?)
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // A logger may already be installed by an earlier module instance
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("pz3d-web loaded");
    Ok(())
}
