// Grave scatter: annulus bounds, jitter ranges and seeded determinism.

use haunted_core::{scatter_graves, GraveMarker, GRAVE_COUNT, GRAVE_INNER_RADIUS, GRAVE_OUTER_RADIUS};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

const EPS: f64 = 1e-9;

fn seeded(seed: u64, count: usize) -> Vec<GraveMarker> {
    let mut rng = StdRng::seed_from_u64(seed);
    scatter_graves(count, GRAVE_INNER_RADIUS, GRAVE_OUTER_RADIUS, &mut rng)
}

#[test]
fn graves_stay_inside_the_annulus() {
    for seed in 0..20 {
        for g in seeded(seed, 200) {
            let r = g.radius();
            assert!(
                r >= GRAVE_INNER_RADIUS - EPS && r < GRAVE_OUTER_RADIUS,
                "seed {seed}: radius {r} outside [4, 9)"
            );
        }
    }
}

#[test]
fn graves_stand_on_the_ground() {
    assert!(seeded(7, 500).iter().all(|g| g.position_y == 0.0));
}

#[test]
fn rotation_jitter_is_bounded() {
    for g in seeded(3, 1000) {
        assert!(g.rotation_y >= -0.5 && g.rotation_y < 0.5, "yaw {}", g.rotation_y);
        assert!(
            g.rotation_z >= -0.05 - EPS && g.rotation_z < 0.05,
            "tilt {}",
            g.rotation_z
        );
    }
}

#[test]
fn count_is_respected() {
    assert_eq!(seeded(1, GRAVE_COUNT).len(), 35);
    assert_eq!(seeded(1, 1).len(), 1);
    assert!(seeded(1, 0).is_empty());
}

#[test]
fn same_seed_same_graves() {
    assert_eq!(seeded(42, GRAVE_COUNT), seeded(42, GRAVE_COUNT));
}

#[test]
fn different_seeds_differ() {
    assert_ne!(seeded(1, GRAVE_COUNT), seeded(2, GRAVE_COUNT));
}

#[test]
fn graves_surround_the_house() {
    // With many samples every quadrant gets some graves
    let graves = seeded(11, 400);
    let quadrant = |g: &GraveMarker| (g.position_x >= 0.0, g.position_z >= 0.0);
    for q in [(true, true), (true, false), (false, true), (false, false)] {
        assert!(graves.iter().any(|g| quadrant(g) == q), "empty quadrant {q:?}");
    }
}

#[test]
fn equal_radii_put_every_grave_on_the_circle() {
    let mut rng = StdRng::seed_from_u64(5);
    for g in scatter_graves(50, 6.0, 6.0, &mut rng) {
        assert!((g.radius() - 6.0).abs() < 1e-9);
    }
}

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("graves_seed42.txt")
}

fn parse_row(line: &str) -> [f64; 5] {
    let values: Vec<f64> = line
        .split_whitespace()
        .map(|v| v.parse().unwrap_or_else(|_| panic!("bad number {v:?} in {line:?}")))
        .collect();
    assert_eq!(values.len(), 5, "row {line:?}");
    [values[0], values[1], values[2], values[3], values[4]]
}

#[test]
fn seed_42_matches_recorded_layout() {
    let path = fixture_path();
    let recorded = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("missing fixture {}: {e}", path.display()));
    let rows: Vec<[f64; 5]> = recorded.lines().filter(|l| !l.trim().is_empty()).map(parse_row).collect();
    let graves = seeded(42, GRAVE_COUNT);
    assert_eq!(rows.len(), GRAVE_COUNT);
    assert_eq!(graves.len(), rows.len());

    for (i, (g, row)) in graves.iter().zip(&rows).enumerate() {
        // Jitter is plain arithmetic on the draws; positions go through libm sin/cos
        assert_eq!(g.position_y, row[1], "grave {i} y");
        assert_eq!(g.rotation_y, row[3], "grave {i} yaw");
        assert_eq!(g.rotation_z, row[4], "grave {i} tilt");
        assert!((g.position_x - row[0]).abs() < 1e-12, "grave {i} x: {} vs {}", g.position_x, row[0]);
        assert!((g.position_z - row[2]).abs() < 1e-12, "grave {i} z: {} vs {}", g.position_z, row[2]);
    }
}
