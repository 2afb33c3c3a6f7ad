pub mod mesh;
pub mod renderer;
pub mod targets;
pub mod uniforms;

pub use mesh::{GpuMesh, Vertex};
pub use renderer::GpuRenderer;
pub use uniforms::{batch_draw_items, Batch, InstanceRaw, SceneUniforms};
