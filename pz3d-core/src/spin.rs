//! Per-frame rotation state and the scene backend callback surface
use nalgebra::Vector3;

use crate::pointer::Viewport;

/// Accumulated rotation around three axes (in radians), advanced once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    pub angles: Vector3<f32>,
    pub step: Vector3<f32>,
}

impl Spin {
    pub fn new(dx: f32, dy: f32, dz: f32) -> Self {
        Self {
            angles: Vector3::zeros(),
            step: Vector3::new(dx, dy, dz),
        }
    }

    /// Advance one frame and return the new angles.
    pub fn tick(&mut self) -> Vector3<f32> {
        self.angles += self.step;
        self.angles
    }

    /// Rotate by delta amounts outside the per-frame step (in radians)
    pub fn nudge(&mut self, dx: f32, dy: f32, dz: f32) {
        self.angles += Vector3::new(dx, dy, dz);
    }
}

impl Default for Spin {
    fn default() -> Self {
        Self::new(0.01, 0.01, 0.0)
    }
}

/// Rendering side of the scene; owns meshes, camera and drawing
pub trait SceneBackend {
    fn apply_rotation(&mut self, angles: Vector3<f32>);

    fn resize(&mut self, viewport: Viewport);

    fn render(&mut self);
}

/// Drives a [`SceneBackend`] once per animation frame
pub struct FrameLoop<B> {
    spin: Spin,
    backend: B,
    frames: u64,
}

impl<B: SceneBackend> FrameLoop<B> {
    pub fn new(spin: Spin, backend: B) -> Self {
        Self {
            spin,
            backend,
            frames: 0,
        }
    }

    pub fn frame(&mut self) {
        let angles = self.spin.tick();
        self.backend.apply_rotation(angles);
        self.backend.render();
        self.frames += 1;
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.backend.resize(viewport);
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn spin(&self) -> &Spin {
        &self.spin
    }

    pub fn spin_mut(&mut self) -> &mut Spin {
        &mut self.spin
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingBackend {
        rotations: Vec<Vector3<f32>>,
        renders: usize,
        viewport: Option<Viewport>,
    }

    impl SceneBackend for CountingBackend {
        fn apply_rotation(&mut self, angles: Vector3<f32>) {
            self.rotations.push(angles);
        }

        fn resize(&mut self, viewport: Viewport) {
            self.viewport = Some(viewport);
        }

        fn render(&mut self) {
            self.renders += 1;
        }
    }

    #[test]
    fn test_spin_accumulates() {
        let mut spin = Spin::default();
        for _ in 0..100 {
            spin.tick();
        }
        assert!((spin.angles.x - 1.0).abs() < 1e-4);
        assert!((spin.angles.y - 1.0).abs() < 1e-4);
        assert_eq!(spin.angles.z, 0.0);
    }

    #[test]
    fn test_zero_step_spin() {
        let mut spin = Spin::new(0.0, 0.0, 0.0);
        assert_eq!(spin.tick(), Vector3::zeros());

        spin.nudge(0.1, 0.2, 0.3);
        assert!((spin.angles.z - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_frame_loop_drives_backend() {
        let mut frames = FrameLoop::new(Spin::new(0.5, 0.0, 0.0), CountingBackend::default());
        frames.frame();
        frames.frame();
        frames.resize(Viewport::new(320.0, 200.0));

        let backend = frames.backend();
        assert_eq!(backend.renders, 2);
        assert_eq!(backend.rotations.len(), 2);
        assert!((backend.rotations[1].x - 1.0).abs() < 1e-6);
        assert_eq!(backend.viewport, Some(Viewport::new(320.0, 200.0)));
        assert_eq!(frames.frames(), 2);
    }
}
