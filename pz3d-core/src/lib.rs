//! PZ3D Core Library - Pointer-zone selection for the interactive scene
//!
//! This library provides the host-independent logic behind the scene's image
//! overlay: mapping pointer positions to zones, emitting show/hide decisions,
//! and the per-frame spin handed to the rendering backend.

pub mod config;
pub mod error;
pub mod overlay;
pub mod pointer;
pub mod selector;
pub mod spin;
pub mod zone;

// Re-export commonly used types
pub use config::{LabelConfig, SceneConfig};
pub use error::ConfigurationError;
pub use overlay::{present, Opacity, OverlayDriver, PresentationSink};
pub use pointer::{PointerSample, Viewport};
pub use selector::{PointerZoneSelector, SelectorState, ZoneChangeEvent};
pub use spin::{FrameLoop, SceneBackend, Spin};
pub use zone::{Zone, ZoneInterval, ZoneLayout};
