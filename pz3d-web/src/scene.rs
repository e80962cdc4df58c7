//! Animation loop handing the pyramid spin to the JS scene
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{error, info};
use nalgebra::Vector3;
use pz3d_core::{FrameLoop, SceneBackend, Viewport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, Window};

use crate::dom;
use crate::error::WebError;

#[wasm_bindgen]
extern "C" {
    /// JS object owning the actual scene (meshes, camera, renderer).
    ///
    /// Expected shape: `{ applyRotation(x, y, z), resize(width, height, aspect), render() }`.
    pub type SceneCallbacks;

    #[wasm_bindgen(method, js_name = applyRotation)]
    fn apply_rotation(this: &SceneCallbacks, x: f32, y: f32, z: f32);

    #[wasm_bindgen(method)]
    fn resize(this: &SceneCallbacks, width: f32, height: f32, aspect: f32);

    #[wasm_bindgen(method)]
    fn render(this: &SceneCallbacks);
}

/// Forwards frame callbacks to the JS scene
struct JsBackend {
    callbacks: SceneCallbacks,
}

impl SceneBackend for JsBackend {
    fn apply_rotation(&mut self, angles: Vector3<f32>) {
        self.callbacks.apply_rotation(angles.x, angles.y, angles.z);
    }

    fn resize(&mut self, viewport: Viewport) {
        self.callbacks
            .resize(viewport.width, viewport.height, viewport.aspect());
    }

    fn render(&mut self) {
        self.callbacks.render();
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` loop spinning the pyramid
#[wasm_bindgen]
pub struct SceneLoop {
    frames: Rc<RefCell<FrameLoop<JsBackend>>>,
    running: bool,
    /// Bumped on every stop so a pending frame from an old loop exits
    epoch: Rc<Cell<u64>>,
    window: Window,
    on_resize: Option<Closure<dyn FnMut(Event)>>,
}

#[wasm_bindgen]
impl SceneLoop {
    #[wasm_bindgen(constructor)]
    pub fn new(callbacks: SceneCallbacks, config_json: Option<String>) -> Result<SceneLoop, JsValue> {
        let window = dom::window()?;
        let config = dom::scene_config(config_json)?;
        let frames = FrameLoop::new(config.spin(), JsBackend { callbacks });

        Ok(SceneLoop {
            frames: Rc::new(RefCell::new(frames)),
            running: false,
            epoch: Rc::new(Cell::new(0)),
            window,
            on_resize: None,
        })
    }

    /// Start the animation loop and follow window resizes.
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.running {
            return Ok(());
        }
        self.running = true;
        info!("scene loop started");

        if self.on_resize.is_none() {
            let frames = self.frames.clone();
            let window = self.window.clone();
            let on_resize = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
                frames.borrow_mut().resize(dom::viewport(&window));
            });
            self.window
                .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
                .map_err(|_| WebError::Listener("resize"))?;
            self.on_resize = Some(on_resize);
        }
        self.frames.borrow_mut().resize(dom::viewport(&self.window));

        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let next = callback.clone();
        let frames = self.frames.clone();
        let epoch = self.epoch.clone();
        let started = epoch.get();
        let window = self.window.clone();

        *callback.borrow_mut() = Some(Closure::new(move || {
            if epoch.get() != started {
                // Drop our own closure to break the Rc cycle
                let _ = next.borrow_mut().take();
                return;
            }

            frames.borrow_mut().frame();

            if let Some(cb) = next.borrow().as_ref() {
                if let Err(err) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    error!("requestAnimationFrame failed: {:?}", err);
                }
            }
        }));

        if let Some(cb) = callback.borrow().as_ref() {
            self.window.request_animation_frame(cb.as_ref().unchecked_ref())?;
        }
        Ok(())
    }

    /// Stop after the current frame.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.epoch.set(self.epoch.get() + 1);
        }
        if let Some(on_resize) = self.on_resize.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        }
    }

    /// Advance a single frame outside the animation loop.
    pub fn frame(&self) {
        self.frames.borrow_mut().frame();
    }

    pub fn frames(&self) -> f64 {
        self.frames.borrow().frames() as f64
    }
}

impl Drop for SceneLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
