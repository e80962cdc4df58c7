//! Event-driven overlay driver
//!
//! Hosts forward raw input to an [`OverlayDriver`], which runs it through the
//! selector and hands every resulting decision to a [`PresentationSink`].
use log::trace;

use crate::pointer::Viewport;
use crate::selector::{PointerZoneSelector, ZoneChangeEvent};

/// Opacity levels used by the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opacity {
    Visible,
    Hidden,
}

impl Opacity {
    /// CSS-style string form, `"1"` or `"0"`
    pub fn as_css(&self) -> &'static str {
        match self {
            Opacity::Visible => "1",
            Opacity::Hidden => "0",
        }
    }
}

/// Presentation layer that displays the selected resource
pub trait PresentationSink<R> {
    /// Display `resource` at full opacity.
    fn show(&mut self, zone: usize, resource: &R);

    /// Hide the overlay.
    fn hide(&mut self);
}

/// Apply a selector decision to a sink.
pub fn present<R, S: PresentationSink<R> + ?Sized>(sink: &mut S, event: &ZoneChangeEvent<R>) {
    match (event.visible, event.index, event.resource.as_ref()) {
        (true, Some(zone), Some(resource)) => sink.show(zone, resource),
        _ => sink.hide(),
    }
}

/// Couples a selector to a presentation sink and the current viewport
pub struct OverlayDriver<R, S> {
    selector: PointerZoneSelector<R>,
    sink: S,
    viewport: Viewport,
}

impl<R: Clone, S: PresentationSink<R>> OverlayDriver<R, S> {
    pub fn new(selector: PointerZoneSelector<R>, sink: S, viewport: Viewport) -> Self {
        Self {
            selector,
            sink,
            viewport,
        }
    }

    /// Handle a move in device pixels, relative to the current viewport.
    pub fn pointer_moved(&mut self, device_x: f32, device_y: f32) -> Option<ZoneChangeEvent<R>> {
        let Some(sample) = self.viewport.normalize(device_x, device_y) else {
            trace!("dropping sample against degenerate viewport {:?}", self.viewport);
            return None;
        };
        let event = self.selector.on_pointer(sample)?;
        present(&mut self.sink, &event);
        Some(event)
    }

    /// Handle an already-normalized move.
    pub fn sample(&mut self, x: f32, y: f32) -> Option<ZoneChangeEvent<R>> {
        let event = self.selector.on_sample(x, y)?;
        present(&mut self.sink, &event);
        Some(event)
    }

    /// Handle pointer-out or touch-end.
    pub fn session_ended(&mut self) -> Option<ZoneChangeEvent<R>> {
        let event = self.selector.on_session_end()?;
        present(&mut self.sink, &event);
        Some(event)
    }
}

impl<R, S> OverlayDriver<R, S> {
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn selector(&self) -> &PointerZoneSelector<R> {
        &self.selector
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
