//! Per-frame update and render driver.
//!
//! Hosts own the scheduling (`requestAnimationFrame`, a winit event loop) and
//! call [`FrameLoop::tick`] once per frame. [`FrameLoop::run_until`] drives the
//! same tick back to back with an injected stop condition.

use crate::camera::PerspectiveCamera;
use crate::context::AppContext;
use crate::scene::SceneGraph;
use instant::Instant;

/// The rendering engine as seen by the frame loop and the resize handler.
pub trait SceneRenderer {
    type Error;

    /// Output size in CSS (logical) pixels.
    fn set_size(&mut self, width: u32, height: u32);
    fn set_pixel_ratio(&mut self, pixel_ratio: f64);
    fn render(&mut self, scene: &SceneGraph, camera: &PerspectiveCamera) -> Result<(), Self::Error>;
}

/// Monotonic clock started at construction.
#[derive(Clone, Debug)]
pub struct Clock {
    start: Instant,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// There is no pause or stop: once started the loop only ever runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStats {
    /// 1-based index of the frame just rendered.
    pub frame: u64,
    pub elapsed_secs: f64,
    pub camera_moved: bool,
}

#[derive(Debug, Default)]
pub struct FrameLoop {
    clock: Clock,
    frames: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoopState {
        LoopState::Running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Update controls, then draw. Renderer errors are handed back untouched.
    pub fn tick<R: SceneRenderer>(
        &mut self,
        app: &mut AppContext,
        renderer: &mut R,
    ) -> Result<FrameStats, R::Error> {
        let elapsed_secs = self.clock.elapsed_secs();
        let camera_moved = app.controls.update(&mut app.camera);
        renderer.render(&app.scene, &app.camera)?;
        self.frames += 1;
        Ok(FrameStats {
            frame: self.frames,
            elapsed_secs,
            camera_moved,
        })
    }

    /// Tick until `stop` returns true for the frame just rendered.
    pub fn run_until<R, F>(
        &mut self,
        app: &mut AppContext,
        renderer: &mut R,
        mut stop: F,
    ) -> Result<u64, R::Error>
    where
        R: SceneRenderer,
        F: FnMut(&FrameStats) -> bool,
    {
        loop {
            let stats = self.tick(app, renderer)?;
            if stop(&stats) {
                return Ok(stats.frame);
            }
        }
    }
}
