//! CPU-side packing of the scene into GPU buffers.
//!
//! [`SceneUniforms`] mirrors the `SceneUniforms` struct in `scene.wgsl` field
//! for field. Meshes that share a geometry and a material are drawn as one
//! instanced batch.

use fnv::FnvHashMap;
use haunted_core::{GeometryId, MaterialId, PerspectiveCamera, Rgb, SceneGraph, StandardMaterial};
use smallvec::SmallVec;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub ambient: [f32; 4],
    pub moon_dir: [f32; 4],
    pub moon_color: [f32; 4],
    pub point_pos: [f32; 4],
    pub point_color: [f32; 4],
    pub fog_color: [f32; 4],
    pub fog_range: [f32; 4],
}

fn scaled(color: Rgb, intensity: f32, w: f32) -> [f32; 4] {
    let [r, g, b] = color.to_linear();
    [r * intensity, g * intensity, b * intensity, w]
}

impl SceneUniforms {
    pub fn new(scene: &SceneGraph, camera: &PerspectiveCamera) -> Self {
        let lights = &scene.lights;
        let moon_dir = lights.moon.direction_to_light();
        let door = &lights.door;
        let (fog_color, fog_range) = match &scene.fog {
            Some(fog) => {
                let [r, g, b] = fog.color.to_linear();
                ([r, g, b, 1.0], [fog.near, fog.far, 0.0, 0.0])
            }
            None => ([0.0; 4], [0.0; 4]),
        };
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            view: camera.view_matrix().to_cols_array_2d(),
            ambient: scaled(lights.ambient.color, lights.ambient.intensity, 0.0),
            moon_dir: [moon_dir.x, moon_dir.y, moon_dir.z, 0.0],
            moon_color: scaled(lights.moon.color, lights.moon.intensity, 0.0),
            point_pos: [door.position.x, door.position.y, door.position.z, door.distance],
            point_color: scaled(door.color, door.intensity, door.decay),
            fog_color,
            fog_range,
        }
    }
}

/// Per-instance data: model matrix columns, linear base color, material parameters.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    /// roughness, metalness, displacement scale, transparent flag
    pub params: [f32; 4],
}

impl InstanceRaw {
    const ATTRIBUTES: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4,
        7 => Float32x4,
        8 => Float32x4,
    ];

    pub fn new(model: glam::Mat4, material: &StandardMaterial) -> Self {
        let [r, g, b] = material.color.to_linear();
        Self {
            model: model.to_cols_array_2d(),
            color: [r, g, b, 1.0],
            params: [
                material.roughness,
                material.metalness,
                material.displacement_scale,
                if material.transparent { 1.0 } else { 0.0 },
            ],
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Batch {
    pub geometry: GeometryId,
    pub material: MaterialId,
    pub transparent: bool,
    pub instances: SmallVec<[InstanceRaw; 4]>,
}

/// Group the scene's draw items by (geometry, material).
///
/// Batches keep the order in which their first mesh appears, with opaque
/// batches ahead of transparent ones. Items pointing at a missing material
/// are skipped.
pub fn batch_draw_items(scene: &SceneGraph) -> Vec<Batch> {
    let mut index: FnvHashMap<(GeometryId, MaterialId), usize> = FnvHashMap::default();
    let mut batches: Vec<Batch> = Vec::new();
    for item in scene.draw_items() {
        let Some(material) = scene.material(item.material) else {
            log::warn!("[gpu] draw item references unknown material {:?}", item.material);
            continue;
        };
        let instance = InstanceRaw::new(item.world, material);
        let slot = *index.entry((item.geometry, item.material)).or_insert_with(|| {
            batches.push(Batch {
                geometry: item.geometry,
                material: item.material,
                transparent: material.transparent,
                instances: SmallVec::new(),
            });
            batches.len() - 1
        });
        batches[slot].instances.push(instance);
    }
    batches.sort_by_key(|b| b.transparent);
    batches
}

#[cfg(test)]
mod tests {
    use super::*;
    use haunted_core::{build_scene, SceneConfig, GRAVE_COUNT};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scene() -> SceneGraph {
        let mut rng = StdRng::seed_from_u64(42);
        build_scene(&mut rng, &SceneConfig::default())
    }

    #[test]
    fn uniform_block_matches_shader_size() {
        // 2 mat4 + 7 vec4
        assert_eq!(std::mem::size_of::<SceneUniforms>(), 240);
        assert_eq!(std::mem::size_of::<InstanceRaw>(), 96);
    }

    #[test]
    fn graves_collapse_into_one_batch() {
        let batches = batch_draw_items(&scene());
        // bushes, walls, roof, graves, floor, door
        assert_eq!(batches.len(), 6);
        assert!(batches.iter().any(|b| b.instances.len() == GRAVE_COUNT));
        assert!(batches.iter().any(|b| b.instances.len() == 4));
        let total: usize = batches.iter().map(|b| b.instances.len()).sum();
        assert_eq!(total, scene().mesh_count());
    }

    #[test]
    fn transparent_batches_come_last() {
        let batches = batch_draw_items(&scene());
        let last = batches.last().unwrap();
        assert!(last.transparent);
        assert!(batches[..batches.len() - 1].iter().all(|b| !b.transparent));
    }

    #[test]
    fn fog_and_lights_are_packed() {
        let scene = scene();
        let camera = PerspectiveCamera::haunted_default(1.5);
        let u = SceneUniforms::new(&scene, &camera);
        assert_eq!(u.fog_color[3], 1.0);
        assert_eq!(&u.fog_range[..2], &[5.0, 15.0]);
        assert_eq!(u.point_pos, [0.0, 2.5, 3.0, 10.0]);
        assert_eq!(u.point_color[3], 1.0);

        let no_fog = SceneGraph {
            fog: None,
            ..scene
        };
        assert_eq!(SceneUniforms::new(&no_fog, &camera).fog_color[3], 0.0);
    }
}
