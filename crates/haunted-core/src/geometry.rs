//! Primitive shape descriptors and their triangle meshes.
//!
//! All shapes are centered at the origin with outward normals and UVs in
//! `[0, 1]`. Azimuth for cones and spheres is measured from +Z towards +X so
//! a 4-sided cone rotated by `π/4` about Y lines up with a box.

use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Geometry {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Cone {
        radius: f32,
        height: f32,
        radial_segments: u32,
    },
    /// Lies in the XY plane facing +Z.
    Plane {
        width: f32,
        height: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
}

/// Indexed triangle list ready for upload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn push(&mut self, position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) {
        self.positions.push(position);
        self.normals.push(normal);
        self.uvs.push(uv);
    }
}

impl Geometry {
    pub fn tessellate(&self) -> MeshData {
        match *self {
            Geometry::Box {
                width,
                height,
                depth,
            } => box_mesh(width, height, depth),
            Geometry::Cone {
                radius,
                height,
                radial_segments,
            } => cone_mesh(radius, height, radial_segments),
            Geometry::Plane {
                width,
                height,
                width_segments,
                height_segments,
            } => plane_mesh(width, height, width_segments, height_segments),
            Geometry::Sphere {
                radius,
                width_segments,
                height_segments,
            } => sphere_mesh(radius, width_segments, height_segments),
        }
    }
}

fn box_mesh(width: f32, height: f32, depth: f32) -> MeshData {
    let (hx, hy, hz) = (width * 0.5, height * 0.5, depth * 0.5);
    // (normal, tangent u axis, tangent v axis) for each face
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ];
    let half = [hx, hy, hz];
    let mut data = MeshData::default();
    for (normal, u_axis, v_axis) in faces {
        let base = data.positions.len() as u32;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let mut p = [0.0; 3];
            for k in 0..3 {
                p[k] = (normal[k] + u_axis[k] * su + v_axis[k] * sv) * half[k];
            }
            data.push(p, normal, [(su + 1.0) * 0.5, (1.0 - sv) * 0.5]);
        }
        data.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }
    data
}

fn cone_mesh(radius: f32, height: f32, radial_segments: u32) -> MeshData {
    let segs = radial_segments.max(3);
    let half = height * 0.5;
    // slope of the side normal
    let slope = radius / height;
    let mut data = MeshData::default();

    // Side: one apex vertex per segment so each face keeps its own normal
    for i in 0..segs {
        let base = data.positions.len() as u32;
        let t0 = i as f32 / segs as f32 * TAU;
        let t1 = (i + 1) as f32 / segs as f32 * TAU;
        let mid = (t0 + t1) * 0.5;
        let face_normal = normalize([mid.sin(), slope, mid.cos()]);
        let u0 = i as f32 / segs as f32;
        let u1 = (i + 1) as f32 / segs as f32;
        data.push([0.0, half, 0.0], face_normal, [(u0 + u1) * 0.5, 0.0]);
        data.push(
            [radius * t0.sin(), -half, radius * t0.cos()],
            face_normal,
            [u0, 1.0],
        );
        data.push(
            [radius * t1.sin(), -half, radius * t1.cos()],
            face_normal,
            [u1, 1.0],
        );
        data.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    // Base cap
    let center = data.positions.len() as u32;
    data.push([0.0, -half, 0.0], [0.0, -1.0, 0.0], [0.5, 0.5]);
    for i in 0..=segs {
        let t = i as f32 / segs as f32 * TAU;
        data.push(
            [radius * t.sin(), -half, radius * t.cos()],
            [0.0, -1.0, 0.0],
            [0.5 + 0.5 * t.sin(), 0.5 + 0.5 * t.cos()],
        );
    }
    for i in 0..segs {
        data.indices
            .extend_from_slice(&[center, center + 2 + i, center + 1 + i]);
    }
    data
}

fn plane_mesh(width: f32, height: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let w_segs = width_segments.max(1);
    let h_segs = height_segments.max(1);
    let mut data = MeshData::default();
    for y in 0..=h_segs {
        let v = y as f32 / h_segs as f32;
        let pos_y = (0.5 - v) * height;
        for x in 0..=w_segs {
            let u = x as f32 / w_segs as f32;
            let pos_x = (u - 0.5) * width;
            data.push([pos_x, pos_y, 0.0], [0.0, 0.0, 1.0], [u, v]);
        }
    }
    for y in 0..h_segs {
        for x in 0..w_segs {
            let i = y * (w_segs + 1) + x;
            let below = i + w_segs + 1;
            data.indices
                .extend_from_slice(&[i, below, i + 1, below, below + 1, i + 1]);
        }
    }
    data
}

fn sphere_mesh(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let w_segs = width_segments.max(3);
    let h_segs = height_segments.max(2);
    let mut data = MeshData::default();
    for lat in 0..=h_segs {
        let v = lat as f32 / h_segs as f32;
        let theta = v * PI;
        for long in 0..=w_segs {
            let u = long as f32 / w_segs as f32;
            let phi = u * TAU;
            let n = [theta.sin() * phi.sin(), theta.cos(), theta.sin() * phi.cos()];
            data.push([n[0] * radius, n[1] * radius, n[2] * radius], n, [u, v]);
        }
    }
    for lat in 0..h_segs {
        for long in 0..w_segs {
            let first = lat * (w_segs + 1) + long;
            let second = first + w_segs + 1;
            data.indices
                .extend_from_slice(&[first, second, first + 1, second, second + 1, first + 1]);
        }
    }
    data
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if len == 0.0 {
        return v;
    }
    [v[0] / len, v[1] / len, v[2] / len]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    #[test]
    fn box_has_six_quads_with_outward_normals() {
        let mesh = Geometry::Box {
            width: 5.0,
            height: 2.5,
            depth: 5.0,
        }
        .tessellate();
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 12);
        for (p, n) in mesh.positions.iter().zip(&mesh.normals) {
            assert!(dot(*p, *n) > 0.0);
            assert!(p[0].abs() <= 2.5 && p[1].abs() <= 1.25 && p[2].abs() <= 2.5);
        }
    }

    #[test]
    fn plane_vertex_grid_matches_segments() {
        let mesh = Geometry::Plane {
            width: 2.0,
            height: 2.0,
            width_segments: 50,
            height_segments: 50,
        }
        .tessellate();
        assert_eq!(mesh.vertex_count(), 51 * 51);
        assert_eq!(mesh.triangle_count(), 50 * 50 * 2);
        assert!(mesh.normals.iter().all(|n| *n == [0.0, 0.0, 1.0]));
    }

    #[test]
    fn cone_apex_and_base_are_at_half_height() {
        let mesh = Geometry::Cone {
            radius: 5.0,
            height: 1.5,
            radial_segments: 4,
        }
        .tessellate();
        assert_eq!(mesh.triangle_count(), 4 + 4);
        let max_y = mesh.positions.iter().map(|p| p[1]).fold(f32::MIN, f32::max);
        let min_y = mesh.positions.iter().map(|p| p[1]).fold(f32::MAX, f32::min);
        assert_eq!(max_y, 0.75);
        assert_eq!(min_y, -0.75);
        // first base corner sits on +Z
        assert!((mesh.positions[1][2] - 5.0).abs() < 1e-6);
    }

    #[test]
    fn sphere_vertices_lie_on_radius() {
        let mesh = Geometry::Sphere {
            radius: 1.0,
            width_segments: 16,
            height_segments: 16,
        }
        .tessellate();
        assert_eq!(mesh.vertex_count(), 17 * 17);
        assert_eq!(mesh.triangle_count(), 16 * 16 * 2);
        for p in &mesh.positions {
            let r = dot(*p, *p).sqrt();
            assert!((r - 1.0).abs() < 1e-5);
        }
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertex_count()));
    }
}
