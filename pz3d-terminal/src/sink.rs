//! Overlay sink for the terminal host
use pz3d_core::{Opacity, PresentationSink};

/// Remembers the last shown resource and whether it is currently visible,
/// the way an `<img>` keeps its `src` while its opacity drops to zero.
#[derive(Debug, Clone)]
pub struct StripSink {
    shown: Option<(usize, String)>,
    opacity: Opacity,
}

impl StripSink {
    pub fn new() -> Self {
        Self {
            shown: None,
            opacity: Opacity::Hidden,
        }
    }

    pub fn opacity(&self) -> Opacity {
        self.opacity
    }

    /// Zone currently displayed, `None` while hidden
    pub fn visible_zone(&self) -> Option<usize> {
        match (self.opacity, &self.shown) {
            (Opacity::Visible, Some((zone, _))) => Some(*zone),
            _ => None,
        }
    }

    pub fn resource(&self) -> Option<&str> {
        self.shown.as_ref().map(|(_, resource)| resource.as_str())
    }
}

impl Default for StripSink {
    fn default() -> Self {
        Self::new()
    }
}

impl PresentationSink<String> for StripSink {
    fn show(&mut self, zone: usize, resource: &String) {
        self.shown = Some((zone, resource.clone()));
        self.opacity = Opacity::Visible;
    }

    fn hide(&mut self) {
        self.opacity = Opacity::Hidden;
    }
}
