// Scene tuning constants shared by the web and native frontends.

// House
pub const WALL_WIDTH: f32 = 5.0;
pub const WALL_HEIGHT: f32 = 2.5;
pub const WALL_DEPTH: f32 = 5.0;
pub const ROOF_HEIGHT: f32 = 1.5;
pub const ROOF_SEGMENTS: u32 = 4;
pub const DOOR_SIZE: f32 = 2.0;
pub const DOOR_SEGMENTS: u32 = 50;
pub const DOOR_DISPLACEMENT_SCALE: f32 = 0.1;
pub const DOOR_OFFSET: f32 = 0.01; // keeps the door plane off the wall face

// Colors (sRGB hex)
pub const ROOF_COLOR: u32 = 0xb35f45;
pub const BUSH_COLOR: u32 = 0x89c854;
pub const GRAVE_COLOR: u32 = 0xb2b6b1;
pub const NIGHT_COLOR: u32 = 0x262837; // fog and clear color
pub const MOON_COLOR: u32 = 0xb9d5ff;
pub const DOOR_LIGHT_COLOR: u32 = 0xff7d46;

// Base colors standing in for the texture maps when they are not sampled
pub const BRICK_TINT: u32 = 0xac8e82;
pub const DOOR_TINT: u32 = 0x7a4e34;
pub const GRASS_TINT: u32 = 0x4f7a3a;

// Bushes: (scale, x, y, z)
pub const BUSH_PLACEMENTS: [BushPlacement; 4] = [
    BushPlacement::new(0.5, 1.2, 0.2, 3.0),
    BushPlacement::new(0.25, 1.6, 0.1, 3.1),
    BushPlacement::new(0.4, -1.2, 0.1, 3.2),
    BushPlacement::new(0.15, -1.4, 0.05, 3.6),
];
pub const BUSH_SEGMENTS: u32 = 16;

// Graves
pub const GRAVE_COUNT: usize = 35;
pub const GRAVE_INNER_RADIUS: f64 = 4.0;
pub const GRAVE_OUTER_RADIUS: f64 = 9.0;
pub const GRAVE_SIZE: [f32; 3] = [0.6, 0.8, 0.2];

// Floor
pub const FLOOR_SIZE: f32 = 20.0;
pub const GRASS_REPEAT: f32 = 8.0;

// Lights
pub const AMBIENT_INTENSITY: f32 = 0.12;
pub const MOON_INTENSITY: f32 = 0.12;
pub const MOON_POSITION: [f32; 3] = [4.0, 5.0, -2.0];
pub const DOOR_LIGHT_INTENSITY: f32 = 1.5;
pub const DOOR_LIGHT_DISTANCE: f32 = 10.0;
pub const DOOR_LIGHT_DECAY: f32 = 1.0;
pub const DOOR_LIGHT_Z: f32 = 3.0;

// Fog
pub const FOG_NEAR: f32 = 5.0;
pub const FOG_FAR: f32 = 15.0;

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_POSITION: [f32; 3] = [4.0, 2.0, 5.0];

// Renderer
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// Fixed placement of one decorative bush next to the door.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BushPlacement {
    pub scale: f32,
    pub position_x: f32,
    pub position_y: f32,
    pub position_z: f32,
}

impl BushPlacement {
    pub const fn new(scale: f32, position_x: f32, position_y: f32, position_z: f32) -> Self {
        Self {
            scale,
            position_x,
            position_y,
            position_z,
        }
    }
}

/// Tunables for [`crate::build_scene`]; everything else is fixed by the constants above.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub grave_count: usize,
    pub grave_inner_radius: f64,
    pub grave_outer_radius: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            grave_count: GRAVE_COUNT,
            grave_inner_radius: GRAVE_INNER_RADIUS,
            grave_outer_radius: GRAVE_OUTER_RADIUS,
        }
    }
}
