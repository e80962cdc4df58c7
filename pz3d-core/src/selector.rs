//! Pointer-to-zone selection with enter/leave events
//!
//! The selector turns a stream of normalized pointer samples into discrete
//! zone changes. Mouse and single-touch input go through the same two calls,
//! `on_sample` while the pointer moves and `on_session_end` when it leaves
//! the surface or the touch is lifted.
use log::debug;

use crate::error::ConfigurationError;
use crate::pointer::PointerSample;
use crate::zone::{Zone, ZoneLayout};

/// Selection state of a single interactive surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorState {
    /// No session in progress, overlay hidden
    #[default]
    Idle,
    /// Pointer is over the zone with this index, overlay shown
    Active(usize),
}

impl SelectorState {
    pub fn active_zone(&self) -> Option<usize> {
        match self {
            SelectorState::Idle => None,
            SelectorState::Active(index) => Some(*index),
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, SelectorState::Active(_))
    }
}

/// Decision emitted when the selected zone or the visibility changes
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneChangeEvent<R> {
    pub index: Option<usize>,
    pub resource: Option<R>,
    pub visible: bool,
}

impl<R> ZoneChangeEvent<R> {
    fn enter(index: usize, resource: R) -> Self {
        Self {
            index: Some(index),
            resource: Some(resource),
            visible: true,
        }
    }

    fn leave() -> Self {
        Self {
            index: None,
            resource: None,
            visible: false,
        }
    }
}

/// Maps normalized pointer positions onto `N` equal-width zones
#[derive(Debug, Clone)]
pub struct PointerZoneSelector<R = String> {
    layout: ZoneLayout,
    zones: Vec<Zone<R>>,
    state: SelectorState,
}

impl<R: Clone> PointerZoneSelector<R> {
    /// Create a selector with `zone_count` zones, one resource per zone.
    pub fn new(zone_count: usize, resources: Vec<R>) -> Result<Self, ConfigurationError> {
        let layout = ZoneLayout::new(zone_count).ok_or(ConfigurationError::NoZones)?;
        if resources.len() != zone_count {
            return Err(ConfigurationError::ResourceCountMismatch {
                expected: zone_count,
                actual: resources.len(),
            });
        }

        let zones = resources
            .into_iter()
            .enumerate()
            .map(|(index, resource)| Zone::new(index, resource))
            .collect();

        Ok(Self {
            layout,
            zones,
            state: SelectorState::Idle,
        })
    }

    /// Create a selector with one zone per resource.
    pub fn from_resources(resources: Vec<R>) -> Result<Self, ConfigurationError> {
        Self::new(resources.len(), resources)
    }

    /// Feed a normalized pointer position.
    ///
    /// Coordinates are clamped to [0, 1]; a NaN or infinite coordinate is
    /// ignored. Returns an event only when the pointer enters a different
    /// zone or the overlay was hidden.
    pub fn on_sample(&mut self, x: f32, y: f32) -> Option<ZoneChangeEvent<R>> {
        let sample = PointerSample::new(x, y)?;
        self.on_pointer(sample)
    }

    pub fn on_pointer(&mut self, sample: PointerSample) -> Option<ZoneChangeEvent<R>> {
        let index = self.layout.index_for(sample.x());
        if self.state == SelectorState::Active(index) {
            return None;
        }

        debug!("pointer entered zone {} ({:?})", index, self.state);
        self.state = SelectorState::Active(index);
        Some(ZoneChangeEvent::enter(index, self.zones[index].resource.clone()))
    }

    /// End the current pointer session.
    ///
    /// Emits a hide event only if the overlay was visible; calling this on an
    /// idle selector is a no-op.
    pub fn on_session_end(&mut self) -> Option<ZoneChangeEvent<R>> {
        let previous = std::mem::take(&mut self.state);
        if !previous.is_visible() {
            return None;
        }

        debug!("pointer session ended in {:?}", previous);
        Some(ZoneChangeEvent::leave())
    }
}

impl<R> PointerZoneSelector<R> {
    pub fn zone_count(&self) -> usize {
        self.layout.count()
    }

    pub fn zones(&self) -> &[Zone<R>] {
        &self.zones
    }

    pub fn layout(&self) -> ZoneLayout {
        self.layout
    }

    pub fn state(&self) -> SelectorState {
        self.state
    }

    pub fn active_zone(&self) -> Option<usize> {
        self.state.active_zone()
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }
}
