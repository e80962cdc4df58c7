//! WASM-specific tests
//!
//! These tests run in a browser environment using wasm-pack test.
//! Run with: cd pz3d-web && wasm-pack test --headless --chrome
#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use pz3d_web::{scene_config, ImageOverlay, SceneCallbacks, SceneLoop};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Event, EventTarget, HtmlImageElement, MouseEvent, MouseEventInit, Touch, TouchEvent,
    TouchEventInit, TouchInit,
};

wasm_bindgen_test_configure!(run_in_browser);

fn mount_image(id: &str) -> HtmlImageElement {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("Document should exist");
    let image = document
        .create_element("img")
        .expect("img element")
        .dyn_into::<HtmlImageElement>()
        .expect("HtmlImageElement");
    image.set_id(id);
    document
        .body()
        .expect("body")
        .append_child(&image)
        .expect("append img");
    image
}

fn opacity(image: &HtmlImageElement) -> String {
    image.style().get_property_value("opacity").unwrap_or_default()
}

fn dispatch(event: &Event) {
    web_sys::window()
        .expect("Window should exist")
        .dispatch_event(event)
        .expect("dispatch event");
}

fn mouse_event(kind: &str, x: i32, y: i32, related: Option<&EventTarget>) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_client_x(x);
    init.set_client_y(y);
    init.set_related_target(related);
    MouseEvent::new_with_mouse_event_init_dict(kind, &init).expect("mouse event")
}

fn touch_move(target: &EventTarget, x: f64, y: f64) -> TouchEvent {
    let touch_init = TouchInit::new(1, target);
    touch_init.set_client_x(x);
    touch_init.set_client_y(y);
    let touch = Touch::new(&touch_init).expect("touch");

    let init = TouchEventInit::new();
    init.set_touches(&js_sys::Array::of1(&touch));
    TouchEvent::new_with_event_init_dict("touchmove", &init).expect("touch event")
}

fn touch_end(kind: &str) -> TouchEvent {
    TouchEvent::new(kind).expect("touch event")
}

/// Overlay attached to a fresh image with a fixed 1000x800 viewport
fn attached_overlay(id: &str) -> (HtmlImageElement, ImageOverlay) {
    let image = mount_image(id);
    let mut overlay = ImageOverlay::new(id, None).expect("overlay");
    overlay.resize(1000.0, 800.0);
    overlay.attach().expect("listeners attach");
    (image, overlay)
}

/// Overlay starts hidden and follows the pointer across zones
#[wasm_bindgen_test]
fn test_overlay_follows_pointer() {
    let image = mount_image("overlay-follow");
    let overlay = ImageOverlay::new("overlay-follow", None).expect("overlay");
    assert_eq!(opacity(&image), "0");
    assert_eq!(overlay.zone_count(), 5);

    overlay.resize(1000.0, 800.0);
    assert!(overlay.pointer_moved(450.0, 100.0));
    assert!(image.src().ends_with("images/image3.png"));
    assert_eq!(opacity(&image), "1");
    assert_eq!(overlay.active_zone(), Some(2));

    assert!(!overlay.pointer_moved(460.0, 100.0));

    assert!(overlay.session_ended());
    assert_eq!(opacity(&image), "0");
    assert!(!overlay.session_ended());
    assert_eq!(overlay.active_zone(), None);
}

/// Config JSON controls the zone list
#[wasm_bindgen_test]
fn test_overlay_with_config() {
    let image = mount_image("overlay-config");
    let overlay = ImageOverlay::new(
        "overlay-config",
        Some(r#"{ "resources": ["a.png", "b.png"] }"#.to_string()),
    )
    .expect("overlay");

    assert_eq!(overlay.zone_count(), 2);
    assert!(overlay.sample(1.0, 0.0));
    assert!(image.src().ends_with("b.png"));
}

#[wasm_bindgen_test]
fn test_missing_image_rejected() {
    assert!(ImageOverlay::new("no-such-element", None).is_err());
}

#[wasm_bindgen_test]
fn test_empty_resources_rejected() {
    mount_image("overlay-empty");
    let result = ImageOverlay::new("overlay-empty", Some(r#"{ "resources": [] }"#.to_string()));
    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn test_attach_and_detach() {
    mount_image("overlay-attach");
    let mut overlay = ImageOverlay::new("overlay-attach", None).expect("overlay");
    overlay.attach().expect("listeners attach");
    overlay.attach().expect("second attach is a no-op");
    overlay.detach();
}

#[wasm_bindgen_test]
fn test_scene_config_defaults() {
    let json = scene_config(None).expect("config json");
    assert!(json.contains("Paul Architect"));
    assert!(json.contains("images/image5.png"));
}

/// Window mousemove events select zones through the attached listener
#[wasm_bindgen_test]
fn test_mousemove_routes_to_overlay() {
    let (image, overlay) = attached_overlay("route-mousemove");

    dispatch(&mouse_event("mousemove", 450, 100, None));
    assert!(image.src().ends_with("images/image3.png"));
    assert_eq!(opacity(&image), "1");
    assert_eq!(overlay.active_zone(), Some(2));

    dispatch(&mouse_event("mousemove", 999, 100, None));
    assert!(image.src().ends_with("images/image5.png"));
    assert_eq!(overlay.active_zone(), Some(4));
}

/// mouseout between elements keeps the overlay; leaving the window hides it
#[wasm_bindgen_test]
fn test_mouseout_only_ends_session_when_leaving_window() {
    let (image, overlay) = attached_overlay("route-mouseout");
    dispatch(&mouse_event("mousemove", 450, 100, None));

    let inside: &EventTarget = image.as_ref();
    dispatch(&mouse_event("mouseout", 450, 100, Some(inside)));
    assert_eq!(opacity(&image), "1");
    assert_eq!(overlay.active_zone(), Some(2));

    dispatch(&mouse_event("mouseout", 450, 100, None));
    assert_eq!(opacity(&image), "0");
    assert_eq!(overlay.active_zone(), None);
}

/// First touch drives the same selection as the mouse; touchend and touchcancel hide
#[wasm_bindgen_test]
fn test_touch_routes_like_mouse() {
    let (image, overlay) = attached_overlay("route-touch");
    let target: &EventTarget = image.as_ref();

    dispatch(&touch_move(target, 650.0, 100.0));
    assert!(image.src().ends_with("images/image4.png"));
    assert_eq!(opacity(&image), "1");
    assert_eq!(overlay.active_zone(), Some(3));

    dispatch(&touch_end("touchend"));
    assert_eq!(opacity(&image), "0");
    assert_eq!(overlay.active_zone(), None);

    dispatch(&touch_move(target, 50.0, 100.0));
    assert!(image.src().ends_with("images/image1.png"));
    assert_eq!(opacity(&image), "1");

    dispatch(&touch_end("touchcancel"));
    assert_eq!(opacity(&image), "0");
}

/// After detach, window events no longer reach the overlay
#[wasm_bindgen_test]
fn test_detached_overlay_ignores_events() {
    let (image, mut overlay) = attached_overlay("route-detach");
    dispatch(&mouse_event("mousemove", 100, 100, None));
    assert!(image.src().ends_with("images/image1.png"));

    overlay.detach();
    dispatch(&mouse_event("mousemove", 900, 100, None));
    assert!(image.src().ends_with("images/image1.png"));
    assert_eq!(overlay.active_zone(), Some(0));

    dispatch(&mouse_event("mouseout", 900, 100, None));
    assert_eq!(opacity(&image), "1");
}

/// The scene loop hands size and aspect to the JS callbacks and drives frames
#[wasm_bindgen_test]
fn test_scene_loop_forwards_resize_and_frames() {
    let sizes = Rc::new(RefCell::new(Vec::<(f32, f32, f32)>::new()));
    let rotations = Rc::new(RefCell::new(Vec::<(f32, f32, f32)>::new()));
    let renders = Rc::new(RefCell::new(0u32));

    let resize = {
        let sizes = sizes.clone();
        Closure::<dyn FnMut(f32, f32, f32)>::new(move |w, h, aspect| {
            sizes.borrow_mut().push((w, h, aspect));
        })
    };
    let apply_rotation = {
        let rotations = rotations.clone();
        Closure::<dyn FnMut(f32, f32, f32)>::new(move |x, y, z| {
            rotations.borrow_mut().push((x, y, z));
        })
    };
    let render = {
        let renders = renders.clone();
        Closure::<dyn FnMut()>::new(move || {
            *renders.borrow_mut() += 1;
        })
    };

    let callbacks = js_sys::Object::new();
    js_sys::Reflect::set(&callbacks, &"resize".into(), resize.as_ref()).expect("set resize");
    js_sys::Reflect::set(&callbacks, &"applyRotation".into(), apply_rotation.as_ref())
        .expect("set applyRotation");
    js_sys::Reflect::set(&callbacks, &"render".into(), render.as_ref()).expect("set render");

    let mut scene = SceneLoop::new(callbacks.unchecked_into::<SceneCallbacks>(), None)
        .expect("scene loop");
    scene.start().expect("start");

    {
        let sizes = sizes.borrow();
        assert_eq!(sizes.len(), 1);
        let (w, h, aspect) = sizes[0];
        if w > 0.0 && h > 0.0 {
            assert!((aspect - w / h).abs() < 1e-4);
        } else {
            assert_eq!(aspect, 1.0);
        }
    }

    scene.frame();
    assert_eq!(*renders.borrow(), 1);
    let (x, y, z) = rotations.borrow()[0];
    assert!((x - 0.01).abs() < 1e-6);
    assert!((y - 0.01).abs() < 1e-6);
    assert_eq!(z, 0.0);

    scene.stop();
}
