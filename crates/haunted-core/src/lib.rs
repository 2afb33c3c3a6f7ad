pub mod camera;
pub mod constants;
pub mod context;
pub mod controls;
pub mod debug_panel;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod lighting;
pub mod scatter;
pub mod scene;
pub mod viewport;

pub use camera::*;
pub use constants::*;
pub use context::*;
pub use controls::*;
pub use debug_panel::*;
pub use error::*;
pub use frame::*;
pub use geometry::*;
pub use lighting::*;
pub use scatter::*;
pub use scene::*;
pub use viewport::*;

// Shader bundled as a string constant
pub static SCENE_WGSL: &str = include_str!("../../../shaders/scene.wgsl");
