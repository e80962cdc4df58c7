//! Pointer samples and viewport normalization
use nalgebra::Point2;

/// Normalized pointer position, each axis in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub position: Point2<f32>,
}

impl PointerSample {
    /// Build a sample, clamping both axes into [0, 1].
    ///
    /// Returns `None` if either coordinate is NaN or infinite.
    pub fn new(x: f32, y: f32) -> Option<Self> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }

        Some(Self {
            position: Point2::new(x.clamp(0.0, 1.0), y.clamp(0.0, 1.0)),
        })
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }
}

/// Extent of the tracked surface in device pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A viewport with zero, negative or non-finite extent cannot normalize.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }

    pub fn aspect(&self) -> f32 {
        if self.is_degenerate() {
            return 1.0;
        }
        self.width / self.height
    }

    /// Divide device coordinates by the viewport extent.
    pub fn normalize(&self, device_x: f32, device_y: f32) -> Option<PointerSample> {
        if self.is_degenerate() {
            return None;
        }
        PointerSample::new(device_x / self.width, device_y / self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}
