use crate::camera::PerspectiveCamera;
use crate::controls::OrbitControls;
use crate::debug_panel::{DebugPanel, PanelCommand};
use crate::error::SceneError;
use crate::frame::SceneRenderer;
use crate::scene::SceneGraph;
use crate::viewport::{capped_pixel_ratio, ViewportSize};

/// Everything one running diorama owns. The resize handler is the only
/// writer of `viewport`; the frame loop only reads it through the camera.
#[derive(Clone, Debug)]
pub struct AppContext {
    pub scene: SceneGraph,
    pub camera: PerspectiveCamera,
    pub controls: OrbitControls,
    pub panel: DebugPanel,
    viewport: ViewportSize,
}

impl AppContext {
    pub fn new(scene: SceneGraph, viewport: ViewportSize) -> Result<Self, SceneError> {
        let viewport = viewport.validate()?;
        let camera = PerspectiveCamera::haunted_default(viewport.aspect());
        let mut controls = OrbitControls::damped();
        controls.target = camera.target;
        Ok(Self {
            scene,
            camera,
            controls,
            panel: DebugPanel::haunted_house(),
            viewport,
        })
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    /// Push the current viewport to a freshly created renderer.
    pub fn attach<R: SceneRenderer>(&self, renderer: &mut R, device_pixel_ratio: f64) {
        renderer.set_size(self.viewport.width, self.viewport.height);
        renderer.set_pixel_ratio(capped_pixel_ratio(device_pixel_ratio));
    }

    /// Apply a viewport resize to the camera and the renderer.
    ///
    /// Zero-area sizes are not applied: they return
    /// `SceneError::DegenerateViewport` and the camera and renderer keep the
    /// last valid size, since a zero height would make the aspect infinite.
    pub fn resize<R: SceneRenderer>(
        &mut self,
        size: ViewportSize,
        device_pixel_ratio: f64,
        renderer: &mut R,
    ) -> Result<(), SceneError> {
        self.viewport = size.validate()?;

        self.camera.aspect = self.viewport.aspect();
        self.camera.update_projection_matrix();

        renderer.set_size(self.viewport.width, self.viewport.height);
        renderer.set_pixel_ratio(capped_pixel_ratio(device_pixel_ratio));
        log::debug!(
            "[resize] {}x{} aspect={:.4} dpr={}",
            size.width,
            size.height,
            self.camera.aspect,
            device_pixel_ratio
        );
        Ok(())
    }

    /// Route a key name to the debug panel. Returns true when it was handled.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match PanelCommand::from_key(key) {
            Some(cmd) => self.panel.apply(&mut self.scene.lights, cmd),
            None => false,
        }
    }
}
