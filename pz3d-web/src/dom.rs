//! Small DOM helpers shared by the overlay and the scene loop
use pz3d_core::{SceneConfig, Viewport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlImageElement, Window};

use crate::error::WebError;

pub fn window() -> Result<Window, WebError> {
    web_sys::window().ok_or(WebError::NoWindow)
}

/// Current `innerWidth` x `innerHeight` of the window
pub fn viewport(window: &Window) -> Viewport {
    let extent = |value: Result<JsValue, JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport::new(extent(window.inner_width()), extent(window.inner_height()))
}

pub fn image_element(window: &Window, id: &str) -> Result<HtmlImageElement, WebError> {
    let document = window.document().ok_or(WebError::NoDocument)?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| WebError::MissingElement(id.to_string()))?
        .dyn_into::<HtmlImageElement>()
        .map_err(|_| WebError::NotAnImage(id.to_string()))
}

pub fn scene_config(json: Option<String>) -> Result<SceneConfig, WebError> {
    match json {
        Some(json) => Ok(SceneConfig::from_json(&json)?),
        None => Ok(SceneConfig::default()),
    }
}
