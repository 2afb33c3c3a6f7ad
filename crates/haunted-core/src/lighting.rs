//! Colors, lights and fog for the night-time scene.

use crate::constants::*;
use glam::Vec3;

/// An sRGB color with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Decode a `0xRRGGBB` literal.
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self::new(channel(16), channel(8), channel(0))
    }

    /// Convert to linear light for shading and for clearing an sRGB target.
    pub fn to_linear(self) -> [f32; 3] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
        ]
    }
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: Rgb,
    pub intensity: f32,
}

/// Light arriving from `position` towards the origin, like moonlight.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectionalLight {
    pub color: Rgb,
    pub intensity: f32,
    pub position: Vec3,
}

impl DirectionalLight {
    /// Unit vector pointing from the lit surface towards the light.
    pub fn direction_to_light(&self) -> Vec3 {
        self.position.normalize_or_zero()
    }
}

/// Point light whose contribution fades to zero at `distance`.
#[derive(Clone, Debug, PartialEq)]
pub struct PointLight {
    pub color: Rgb,
    pub intensity: f32,
    pub distance: f32,
    pub decay: f32,
    pub position: Vec3,
}

impl PointLight {
    /// Distance attenuation at `d` units from the light.
    pub fn attenuation(&self, d: f32) -> f32 {
        if self.distance <= 0.0 {
            return 1.0;
        }
        (1.0 - d / self.distance).clamp(0.0, 1.0).powf(self.decay)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Lights {
    pub ambient: AmbientLight,
    pub moon: DirectionalLight,
    pub door: PointLight,
}

impl Default for Lights {
    fn default() -> Self {
        Self {
            ambient: AmbientLight {
                color: Rgb::from_hex(MOON_COLOR),
                intensity: AMBIENT_INTENSITY,
            },
            moon: DirectionalLight {
                color: Rgb::from_hex(MOON_COLOR),
                intensity: MOON_INTENSITY,
                position: Vec3::from(MOON_POSITION),
            },
            door: PointLight {
                color: Rgb::from_hex(DOOR_LIGHT_COLOR),
                intensity: DOOR_LIGHT_INTENSITY,
                distance: DOOR_LIGHT_DISTANCE,
                decay: DOOR_LIGHT_DECAY,
                position: Vec3::new(0.0, WALL_HEIGHT, DOOR_LIGHT_Z),
            },
        }
    }
}

/// Linear fog between `near` and `far` view-space depth.
#[derive(Clone, Debug, PartialEq)]
pub struct Fog {
    pub color: Rgb,
    pub near: f32,
    pub far: f32,
}

impl Default for Fog {
    fn default() -> Self {
        Self {
            color: Rgb::from_hex(NIGHT_COLOR),
            near: FOG_NEAR,
            far: FOG_FAR,
        }
    }
}

impl Fog {
    /// Blend weight of the fog color at `depth`; the shader uses the same curve.
    pub fn factor(&self, depth: f32) -> f32 {
        let t = ((depth - self.near) / (self.far - self.near)).clamp(0.0, 1.0);
        t * t * (3.0 - 2.0 * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_decodes_channels() {
        let c = Rgb::from_hex(0xff8000);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
    }

    #[test]
    fn linear_conversion_keeps_endpoints() {
        assert_eq!(Rgb::new(0.0, 1.0, 0.0).to_linear(), [0.0, 1.0, 0.0]);
        let mid = Rgb::new(0.5, 0.5, 0.5).to_linear()[0];
        assert!(mid > 0.2 && mid < 0.22);
    }

    #[test]
    fn fog_factor_spans_near_to_far() {
        let fog = Fog::default();
        assert_eq!(fog.factor(0.0), 0.0);
        assert_eq!(fog.factor(FOG_NEAR), 0.0);
        assert_eq!(fog.factor(FOG_FAR), 1.0);
        assert_eq!(fog.factor(100.0), 1.0);
        let mut prev = 0.0;
        for i in 0..=100 {
            let f = fog.factor(FOG_NEAR + (FOG_FAR - FOG_NEAR) * i as f32 / 100.0);
            assert!(f >= prev);
            prev = f;
        }
    }

    #[test]
    fn door_light_fades_out_at_its_distance() {
        let door = Lights::default().door;
        assert_eq!(door.attenuation(0.0), 1.0);
        assert_eq!(door.attenuation(DOOR_LIGHT_DISTANCE), 0.0);
        assert_eq!(door.attenuation(DOOR_LIGHT_DISTANCE * 2.0), 0.0);
        assert!(door.attenuation(2.0) > door.attenuation(5.0));
    }
}
