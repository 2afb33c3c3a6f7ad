#![allow(dead_code)]

use haunted_core::{PerspectiveCamera, SceneGraph, SceneRenderer};

/// Renderer double that records what the frame loop and resize handler asked of it.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub sizes: Vec<(u32, u32)>,
    pub pixel_ratios: Vec<f64>,
    pub renders: u64,
    pub aspects: Vec<f64>,
    /// Fail the render call with this 1-based index.
    pub fail_on: Option<u64>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct RenderFailed(pub u64);

impl SceneRenderer for RecordingRenderer {
    type Error = RenderFailed;

    fn set_size(&mut self, width: u32, height: u32) {
        self.sizes.push((width, height));
    }

    fn set_pixel_ratio(&mut self, pixel_ratio: f64) {
        self.pixel_ratios.push(pixel_ratio);
    }

    fn render(&mut self, _scene: &SceneGraph, camera: &PerspectiveCamera) -> Result<(), RenderFailed> {
        let n = self.renders + 1;
        if self.fail_on == Some(n) {
            return Err(RenderFailed(n));
        }
        self.renders = n;
        self.aspects.push(camera.aspect);
        Ok(())
    }
}
