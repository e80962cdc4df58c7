//! Image overlay bound to DOM pointer events
use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use pz3d_core::{Opacity, OverlayDriver, PresentationSink, Viewport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlImageElement, MouseEvent, TouchEvent, Window};

use crate::dom;
use crate::error::WebError;

/// Presents the selected resource on an `<img>` element
pub struct ImageSink {
    image: HtmlImageElement,
}

impl ImageSink {
    pub fn new(image: HtmlImageElement) -> Self {
        let sink = Self { image };
        sink.set_opacity(Opacity::Hidden);
        sink
    }

    fn set_opacity(&self, opacity: Opacity) {
        if let Err(err) = self.image.style().set_property("opacity", opacity.as_css()) {
            warn!("failed to set overlay opacity: {:?}", err);
        }
    }
}

impl PresentationSink<String> for ImageSink {
    fn show(&mut self, zone: usize, resource: &String) {
        debug!("showing zone {} -> {}", zone, resource);
        self.image.set_src(resource);
        self.set_opacity(Opacity::Visible);
    }

    fn hide(&mut self) {
        self.set_opacity(Opacity::Hidden);
    }
}

type SharedDriver = Rc<RefCell<OverlayDriver<String, ImageSink>>>;

/// A window listener kept alive for as long as it is registered
struct Listener {
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

/// Mouse/touch driven image swap overlay
#[wasm_bindgen]
pub struct ImageOverlay {
    driver: SharedDriver,
    window: Window,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl ImageOverlay {
    /// Bind the overlay to the `<img>` with the given id.
    ///
    /// `config_json` is an optional scene config; without it the default five
    /// image paths are used.
    #[wasm_bindgen(constructor)]
    pub fn new(image_id: &str, config_json: Option<String>) -> Result<ImageOverlay, JsValue> {
        let window = dom::window()?;
        let image = dom::image_element(&window, image_id)?;
        let config = dom::scene_config(config_json)?;
        let selector = config.selector().map_err(WebError::from)?;

        info!(
            "image overlay on #{} with {} zones",
            image_id,
            selector.zone_count()
        );

        let viewport = dom::viewport(&window);
        let driver = OverlayDriver::new(selector, ImageSink::new(image), viewport);

        Ok(ImageOverlay {
            driver: Rc::new(RefCell::new(driver)),
            window,
            listeners: Vec::new(),
        })
    }

    /// Register mouse, touch and resize listeners on the window.
    pub fn attach(&mut self) -> Result<(), JsValue> {
        if !self.listeners.is_empty() {
            return Ok(());
        }

        let driver = self.driver.clone();
        self.listen("mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                driver
                    .borrow_mut()
                    .pointer_moved(event.client_x() as f32, event.client_y() as f32);
            }
        })?;

        let driver = self.driver.clone();
        self.listen("touchmove", move |event| {
            let touch = event
                .dyn_ref::<TouchEvent>()
                .and_then(|event| event.touches().get(0));
            if let Some(touch) = touch {
                driver
                    .borrow_mut()
                    .pointer_moved(touch.client_x() as f32, touch.client_y() as f32);
            }
        })?;

        // mouseout bubbles from every element; only leaving the window counts
        let driver = self.driver.clone();
        self.listen("mouseout", move |event| {
            let left_window = event
                .dyn_ref::<MouseEvent>()
                .map_or(true, |event| event.related_target().is_none());
            if left_window {
                driver.borrow_mut().session_ended();
            }
        })?;

        for name in ["touchend", "touchcancel"] {
            let driver = self.driver.clone();
            self.listen(name, move |_| {
                driver.borrow_mut().session_ended();
            })?;
        }

        let driver = self.driver.clone();
        let window = self.window.clone();
        self.listen("resize", move |_| {
            driver.borrow_mut().resize(dom::viewport(&window));
        })?;

        Ok(())
    }

    /// Remove every listener registered by [`attach`](Self::attach).
    pub fn detach(&mut self) {
        for listener in self.listeners.drain(..) {
            let _ = self.window.remove_event_listener_with_callback(
                listener.event,
                listener.closure.as_ref().unchecked_ref(),
            );
        }
    }

    /// Feed a move in CSS pixels; returns whether the overlay changed.
    #[wasm_bindgen(js_name = pointerMoved)]
    pub fn pointer_moved(&self, x: f32, y: f32) -> bool {
        self.driver.borrow_mut().pointer_moved(x, y).is_some()
    }

    /// Feed a move already normalized to [0, 1].
    pub fn sample(&self, x: f32, y: f32) -> bool {
        self.driver.borrow_mut().sample(x, y).is_some()
    }

    #[wasm_bindgen(js_name = sessionEnded)]
    pub fn session_ended(&self) -> bool {
        self.driver.borrow_mut().session_ended().is_some()
    }

    pub fn resize(&self, width: f32, height: f32) {
        self.driver.borrow_mut().resize(Viewport::new(width, height));
    }

    #[wasm_bindgen(js_name = zoneCount)]
    pub fn zone_count(&self) -> u32 {
        self.driver.borrow().selector().zone_count() as u32
    }

    #[wasm_bindgen(js_name = activeZone)]
    pub fn active_zone(&self) -> Option<u32> {
        self.driver.borrow().selector().active_zone().map(|zone| zone as u32)
    }
}

impl ImageOverlay {
    fn listen<F>(&mut self, event: &'static str, handler: F) -> Result<(), WebError>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        self.window
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|_| WebError::Listener(event))?;
        self.listeners.push(Listener { event, closure });
        Ok(())
    }
}

impl Drop for ImageOverlay {
    fn drop(&mut self) {
        self.detach();
    }
}
