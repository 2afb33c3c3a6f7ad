//! Scene graph for the diorama and the pure constructor that fills it.
//!
//! Geometries and materials live in arenas on the [`SceneGraph`] and are
//! shared by id, so the 35 graves reference a single box and a single
//! material. Nodes form a tree of groups and meshes; [`SceneGraph::draw_items`]
//! flattens it into world-space draw items for a renderer.

use crate::constants::*;
use crate::geometry::Geometry;
use crate::lighting::{Fog, Lights, Rgb};
use crate::scatter::{scatter_graves, GraveMarker};
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::Rng;
use std::f32::consts::PI;

pub const HOUSE_GROUP: &str = "house";
pub const GRAVES_GROUP: &str = "graves";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeometryId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wrap {
    Clamp,
    Repeat,
}

/// Opaque reference to a texture asset, resolved by the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct TextureRef {
    pub path: &'static str,
    pub repeat: [f32; 2],
    pub wrap: Wrap,
}

impl TextureRef {
    pub fn new(path: &'static str) -> Self {
        Self {
            path,
            repeat: [1.0, 1.0],
            wrap: Wrap::Clamp,
        }
    }

    pub fn tiled(path: &'static str, repeat: f32) -> Self {
        Self {
            path,
            repeat: [repeat, repeat],
            wrap: Wrap::Repeat,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaterialMaps {
    pub color: Option<TextureRef>,
    pub alpha: Option<TextureRef>,
    pub ambient_occlusion: Option<TextureRef>,
    pub height: Option<TextureRef>,
    pub metalness: Option<TextureRef>,
    pub normal: Option<TextureRef>,
    pub roughness: Option<TextureRef>,
}

impl MaterialMaps {
    pub fn is_empty(&self) -> bool {
        *self == MaterialMaps::default()
    }
}

/// Physically based surface description.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardMaterial {
    pub color: Rgb,
    pub roughness: f32,
    pub metalness: f32,
    pub transparent: bool,
    pub displacement_scale: f32,
    pub maps: MaterialMaps,
}

impl StandardMaterial {
    pub fn solid(hex: u32) -> Self {
        Self {
            color: Rgb::from_hex(hex),
            roughness: 1.0,
            metalness: 0.0,
            transparent: false,
            displacement_scale: 1.0,
            maps: MaterialMaps::default(),
        }
    }

    /// A textured material; `tint` is what the surface looks like without its maps.
    pub fn textured(tint: u32, maps: MaterialMaps) -> Self {
        Self {
            maps,
            ..Self::solid(tint)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    /// Euler angles in radians, applied in X, Y, Z order.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.translation)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    pub name: String,
    pub geometry: GeometryId,
    pub material: MaterialId,
    pub transform: Transform,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    pub name: String,
    pub transform: Transform,
    pub children: Vec<Node>,
}

impl Group {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            transform: Transform::default(),
            children: Vec::new(),
        }
    }

    pub fn meshes(&self) -> impl Iterator<Item = &Mesh> {
        self.children.iter().filter_map(|n| match n {
            Node::Mesh(m) => Some(m),
            Node::Group(_) => None,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Mesh(Mesh),
    Group(Group),
}

/// A mesh resolved to world space, ready to be drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawItem {
    pub geometry: GeometryId,
    pub material: MaterialId,
    pub world: Mat4,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneGraph {
    pub geometries: Vec<Geometry>,
    pub materials: Vec<StandardMaterial>,
    pub nodes: Vec<Node>,
    pub lights: Lights,
    pub fog: Option<Fog>,
    pub clear_color: Rgb,
    /// Grave placements the graves group was built from.
    pub graves: Vec<GraveMarker>,
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self {
            geometries: Vec::new(),
            materials: Vec::new(),
            nodes: Vec::new(),
            lights: Lights::default(),
            fog: None,
            clear_color: Rgb::new(0.0, 0.0, 0.0),
            graves: Vec::new(),
        }
    }
}

impl SceneGraph {
    pub fn add_geometry(&mut self, geometry: Geometry) -> GeometryId {
        self.geometries.push(geometry);
        GeometryId(self.geometries.len() - 1)
    }

    pub fn add_material(&mut self, material: StandardMaterial) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    pub fn add(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn geometry(&self, id: GeometryId) -> Option<&Geometry> {
        self.geometries.get(id.0)
    }

    pub fn material(&self, id: MaterialId) -> Option<&StandardMaterial> {
        self.materials.get(id.0)
    }

    /// Top-level group with the given name.
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.nodes.iter().find_map(|n| match n {
            Node::Group(g) if g.name == name => Some(g),
            _ => None,
        })
    }

    /// Mesh with the given name anywhere in the tree.
    pub fn find_mesh(&self, name: &str) -> Option<&Mesh> {
        fn walk<'a>(nodes: &'a [Node], name: &str) -> Option<&'a Mesh> {
            nodes.iter().find_map(|n| match n {
                Node::Mesh(m) if m.name == name => Some(m),
                Node::Mesh(_) => None,
                Node::Group(g) => walk(&g.children, name),
            })
        }
        walk(&self.nodes, name)
    }

    pub fn mesh_count(&self) -> usize {
        fn count(nodes: &[Node]) -> usize {
            nodes
                .iter()
                .map(|n| match n {
                    Node::Mesh(_) => 1,
                    Node::Group(g) => count(&g.children),
                })
                .sum()
        }
        count(&self.nodes)
    }

    /// Flatten the tree, composing group transforms onto their children.
    pub fn draw_items(&self) -> Vec<DrawItem> {
        fn walk(nodes: &[Node], parent: Mat4, out: &mut Vec<DrawItem>) {
            for node in nodes {
                match node {
                    Node::Mesh(m) => out.push(DrawItem {
                        geometry: m.geometry,
                        material: m.material,
                        world: parent * m.transform.matrix(),
                    }),
                    Node::Group(g) => walk(&g.children, parent * g.transform.matrix(), out),
                }
            }
        }
        let mut out = Vec::with_capacity(self.mesh_count());
        walk(&self.nodes, Mat4::IDENTITY, &mut out);
        out
    }
}

fn mesh(name: &str, geometry: GeometryId, material: MaterialId, transform: Transform) -> Node {
    Node::Mesh(Mesh {
        name: name.to_string(),
        geometry,
        material,
        transform,
    })
}

fn door_maps() -> MaterialMaps {
    MaterialMaps {
        color: Some(TextureRef::new("/textures/door/color.jpg")),
        alpha: Some(TextureRef::new("/textures/door/alpha.jpg")),
        ambient_occlusion: Some(TextureRef::new("/textures/door/ambientOcclusion.jpg")),
        height: Some(TextureRef::new("/textures/door/height.jpg")),
        metalness: Some(TextureRef::new("/textures/door/metalness.jpg")),
        normal: Some(TextureRef::new("/textures/door/normal.jpg")),
        roughness: Some(TextureRef::new("/textures/door/roughness.jpg")),
    }
}

fn brick_maps() -> MaterialMaps {
    MaterialMaps {
        color: Some(TextureRef::new("/textures/bricks/color.jpg")),
        ambient_occlusion: Some(TextureRef::new("/textures/bricks/ambientOcclusion.jpg")),
        normal: Some(TextureRef::new("/textures/bricks/normal.jpg")),
        roughness: Some(TextureRef::new("/textures/bricks/roughness.jpg")),
        ..Default::default()
    }
}

fn grass_maps() -> MaterialMaps {
    MaterialMaps {
        color: Some(TextureRef::tiled("/textures/grass/color.jpg", GRASS_REPEAT)),
        ambient_occlusion: Some(TextureRef::tiled(
            "/textures/grass/ambientOcclusion.jpg",
            GRASS_REPEAT,
        )),
        normal: Some(TextureRef::tiled("/textures/grass/normal.jpg", GRASS_REPEAT)),
        roughness: Some(TextureRef::tiled(
            "/textures/grass/roughness.jpg",
            GRASS_REPEAT,
        )),
        ..Default::default()
    }
}

fn build_house(scene: &mut SceneGraph) -> Group {
    let mut house = Group::new(HOUSE_GROUP);

    let bush_geometry = scene.add_geometry(Geometry::Sphere {
        radius: 1.0,
        width_segments: BUSH_SEGMENTS,
        height_segments: BUSH_SEGMENTS,
    });
    let bush_material = scene.add_material(StandardMaterial::solid(BUSH_COLOR));
    for (i, bush) in BUSH_PLACEMENTS.iter().enumerate() {
        let transform = Transform::from_translation(Vec3::new(
            bush.position_x,
            bush.position_y,
            bush.position_z,
        ))
        .with_scale(bush.scale);
        house.children.push(mesh(
            &format!("bush-{i}"),
            bush_geometry,
            bush_material,
            transform,
        ));
    }

    let walls_geometry = scene.add_geometry(Geometry::Box {
        width: WALL_WIDTH,
        height: WALL_HEIGHT,
        depth: WALL_DEPTH,
    });
    let walls_material = scene.add_material(StandardMaterial::textured(BRICK_TINT, brick_maps()));
    house.children.push(mesh(
        "walls",
        walls_geometry,
        walls_material,
        Transform::from_translation(Vec3::new(0.0, WALL_HEIGHT / 2.0, 0.0)),
    ));

    let roof_geometry = scene.add_geometry(Geometry::Cone {
        radius: WALL_WIDTH,
        height: ROOF_HEIGHT,
        radial_segments: ROOF_SEGMENTS,
    });
    let roof_material = scene.add_material(StandardMaterial::solid(ROOF_COLOR));
    house.children.push(mesh(
        "roof",
        roof_geometry,
        roof_material,
        Transform::from_translation(Vec3::new(0.0, WALL_HEIGHT + ROOF_HEIGHT / 2.0, 0.0))
            .with_rotation(Vec3::new(0.0, PI * 0.25, 0.0)),
    ));

    let door_geometry = scene.add_geometry(Geometry::Plane {
        width: DOOR_SIZE,
        height: DOOR_SIZE,
        width_segments: DOOR_SEGMENTS,
        height_segments: DOOR_SEGMENTS,
    });
    let door_material = scene.add_material(StandardMaterial {
        transparent: true,
        displacement_scale: DOOR_DISPLACEMENT_SCALE,
        ..StandardMaterial::textured(DOOR_TINT, door_maps())
    });
    house.children.push(mesh(
        "door",
        door_geometry,
        door_material,
        Transform::from_translation(Vec3::new(0.0, 1.0, WALL_DEPTH / 2.0 + DOOR_OFFSET)),
    ));

    house
}

fn build_graves(scene: &mut SceneGraph, markers: &[GraveMarker]) -> Group {
    let mut graves = Group::new(GRAVES_GROUP);
    let geometry = scene.add_geometry(Geometry::Box {
        width: GRAVE_SIZE[0],
        height: GRAVE_SIZE[1],
        depth: GRAVE_SIZE[2],
    });
    let material = scene.add_material(StandardMaterial::solid(GRAVE_COLOR));
    for (i, m) in markers.iter().enumerate() {
        let transform = Transform::from_translation(Vec3::new(
            m.position_x as f32,
            m.position_y as f32,
            m.position_z as f32,
        ))
        .with_rotation(Vec3::new(0.0, m.rotation_y as f32, m.rotation_z as f32));
        graves
            .children
            .push(mesh(&format!("grave-{i}"), geometry, material, transform));
    }
    graves
}

fn build_floor(scene: &mut SceneGraph) -> Node {
    let geometry = scene.add_geometry(Geometry::Plane {
        width: FLOOR_SIZE,
        height: FLOOR_SIZE,
        width_segments: 1,
        height_segments: 1,
    });
    let material = scene.add_material(StandardMaterial::textured(GRASS_TINT, grass_maps()));
    mesh(
        "floor",
        geometry,
        material,
        Transform::default().with_rotation(Vec3::new(-PI * 0.5, 0.0, 0.0)),
    )
}

/// Build the whole diorama. All randomness comes from `rng`, so a seeded
/// generator reproduces the same scene.
pub fn build_scene<R: Rng + ?Sized>(rng: &mut R, config: &SceneConfig) -> SceneGraph {
    let mut scene = SceneGraph {
        fog: Some(Fog::default()),
        clear_color: Rgb::from_hex(NIGHT_COLOR),
        ..Default::default()
    };

    let house = build_house(&mut scene);
    let markers = scatter_graves(
        config.grave_count,
        config.grave_inner_radius,
        config.grave_outer_radius,
        rng,
    );
    let graves = build_graves(&mut scene, &markers);
    scene.graves = markers;
    scene.add(Node::Group(house));
    scene.add(Node::Group(graves));

    let floor = build_floor(&mut scene);
    scene.add(floor);

    log::info!(
        "[scene] built {} meshes ({} graves, {} geometries, {} materials)",
        scene.mesh_count(),
        scene.graves.len(),
        scene.geometries.len(),
        scene.materials.len()
    );
    scene
}
