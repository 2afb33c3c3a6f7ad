//! Procedural placement of grave markers on an annulus around the house.

use rand::Rng;
use std::f64::consts::TAU;

/// One grave's placement. Graves stand on the ground, so `position_y` is always 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraveMarker {
    pub position_x: f64,
    pub position_y: f64,
    pub position_z: f64,
    pub rotation_y: f64,
    pub rotation_z: f64,
}

impl GraveMarker {
    /// Distance from the vertical axis through the origin.
    pub fn radius(&self) -> f64 {
        (self.position_x * self.position_x + self.position_z * self.position_z).sqrt()
    }
}

/// Scatter `count` graves uniformly in angle and radius between the two radii.
///
/// Draw order per marker is angle, radius, yaw jitter, tilt jitter, so a seeded
/// `rng` always yields the same sequence. Overlapping markers are accepted.
pub fn scatter_graves<R: Rng + ?Sized>(
    count: usize,
    inner_radius: f64,
    outer_radius: f64,
    rng: &mut R,
) -> Vec<GraveMarker> {
    let span = outer_radius - inner_radius;
    (0..count)
        .map(|_| {
            let angle = rng.gen::<f64>() * TAU;
            let radius = below_outer(inner_radius + rng.gen::<f64>() * span, outer_radius, span);
            let rotation_y = rng.gen::<f64>() - 0.5;
            let rotation_z = (rng.gen::<f64>() - 0.5) * 0.1;
            GraveMarker {
                position_x: angle.sin() * radius,
                position_y: 0.0,
                position_z: angle.cos() * radius,
                rotation_y,
                rotation_z,
            }
        })
        .collect()
}

/// A draw just under 1 can round up to exactly `outer`; pull it back one ulp.
fn below_outer(radius: f64, outer: f64, span: f64) -> f64 {
    if span > 0.0 && outer > 0.0 && radius >= outer {
        f64::from_bits(outer.to_bits() - 1)
    } else {
        radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn zero_draws_land_on_inner_radius_along_z() {
        // StepRng(0, 0) always yields 0, so every uniform draw is 0.0
        let mut rng = StepRng::new(0, 0);
        let graves = scatter_graves(3, 4.0, 9.0, &mut rng);
        assert_eq!(graves.len(), 3);
        for g in graves {
            assert_eq!(g.position_x, 0.0);
            assert_eq!(g.position_z, 4.0);
            assert_eq!(g.rotation_y, -0.5);
            assert!((g.rotation_z + 0.05).abs() < 1e-12);
        }
    }

    #[test]
    fn largest_draw_stays_inside_the_outer_radius() {
        // u64::MAX maps to the largest f64 below 1.0
        let mut rng = StepRng::new(u64::MAX, 0);
        let graves = scatter_graves(2, 4.0, 9.0, &mut rng);
        for g in graves {
            assert!(g.radius() < 9.0, "radius {}", g.radius());
            assert!(g.radius() > 8.999);
            assert!(g.rotation_y < 0.5);
            assert!(g.rotation_z < 0.05, "tilt {}", g.rotation_z);
        }
    }

    #[test]
    fn outer_radius_rounding_is_pulled_back() {
        assert!(below_outer(9.0, 9.0, 5.0) < 9.0);
        assert_eq!(below_outer(7.5, 9.0, 5.0), 7.5);
        assert_eq!(below_outer(6.0, 6.0, 0.0), 6.0);
    }

    #[test]
    fn zero_count_is_empty() {
        let mut rng = StepRng::new(1, 1);
        assert!(scatter_graves(0, 4.0, 9.0, &mut rng).is_empty());
    }
}
