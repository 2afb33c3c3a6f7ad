use crate::constants::MAX_PIXEL_RATIO;
use crate::error::SceneError;

/// Size of the drawing area in CSS (logical) pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Rejects zero-area sizes (minimized windows, hidden canvases).
    pub fn validate(self) -> Result<Self, SceneError> {
        if self.width == 0 || self.height == 0 {
            return Err(SceneError::DegenerateViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Device pixel ratio clamped so high-density displays don't render more than 2x.
#[inline]
pub fn capped_pixel_ratio(device_pixel_ratio: f64) -> f64 {
    device_pixel_ratio.min(MAX_PIXEL_RATIO)
}

/// What the renderer should allocate for a viewport at a given pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutputSize {
    pub viewport: ViewportSize,
    pub pixel_ratio: f64,
}

impl OutputSize {
    pub fn new(viewport: ViewportSize, pixel_ratio: f64) -> Self {
        Self {
            viewport,
            pixel_ratio,
        }
    }

    /// Backing-store size in physical pixels, never smaller than 1x1.
    pub fn drawing_buffer_size(&self) -> (u32, u32) {
        let scale = |v: u32| ((v as f64 * self.pixel_ratio).floor() as u32).max(1);
        (scale(self.viewport.width), scale(self.viewport.height))
    }
}
