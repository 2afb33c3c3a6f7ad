// Resize handling: camera aspect, projection refresh, renderer sizing.

mod common;

use common::RecordingRenderer;
use haunted_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn app(width: u32, height: u32) -> AppContext {
    let mut rng = StdRng::seed_from_u64(42);
    let scene = build_scene(&mut rng, &SceneConfig::default());
    AppContext::new(scene, ViewportSize::new(width, height)).unwrap()
}

#[test]
fn startup_aspect_matches_the_viewport() {
    let app = app(800, 600);
    assert_eq!(app.camera.aspect, 800.0 / 600.0);
    assert_eq!(app.viewport(), ViewportSize::new(800, 600));
}

#[test]
fn resize_updates_aspect_and_projection() {
    let mut app = app(800, 600);
    let mut renderer = RecordingRenderer::default();
    let before = app.camera.projection_matrix();

    app.resize(ViewportSize::new(1600, 900), 1.0, &mut renderer).unwrap();

    assert_eq!(app.camera.aspect, 16.0 / 9.0);
    assert_ne!(app.camera.projection_matrix(), before);
    let expected = PerspectiveCamera::haunted_default(16.0 / 9.0).projection_matrix();
    assert_eq!(app.camera.projection_matrix(), expected);
    assert_eq!(renderer.sizes, vec![(1600, 900)]);
    assert_eq!(renderer.pixel_ratios, vec![1.0]);
}

#[test]
fn next_frame_renders_with_the_new_aspect() {
    let mut app = app(800, 600);
    let mut renderer = RecordingRenderer::default();
    let mut frames = FrameLoop::new();
    frames.tick(&mut app, &mut renderer).unwrap();
    app.resize(ViewportSize::new(1600, 900), 1.0, &mut renderer).unwrap();
    frames.tick(&mut app, &mut renderer).unwrap();
    assert_eq!(renderer.aspects, vec![4.0 / 3.0, 16.0 / 9.0]);
}

#[test]
fn pixel_ratio_is_capped() {
    let mut app = app(800, 600);
    let mut renderer = RecordingRenderer::default();
    app.resize(ViewportSize::new(800, 600), 3.0, &mut renderer).unwrap();
    app.resize(ViewportSize::new(800, 600), 1.5, &mut renderer).unwrap();
    assert_eq!(renderer.pixel_ratios, vec![2.0, 1.5]);
}

#[test]
fn attach_pushes_initial_size() {
    let app = app(1024, 768);
    let mut renderer = RecordingRenderer::default();
    app.attach(&mut renderer, 2.5);
    assert_eq!(renderer.sizes, vec![(1024, 768)]);
    assert_eq!(renderer.pixel_ratios, vec![2.0]);
}

#[test]
fn resizing_leaves_the_scene_alone() {
    let mut app = app(800, 600);
    let scene = app.scene.clone();
    let mut renderer = RecordingRenderer::default();
    app.resize(ViewportSize::new(320, 480), 2.0, &mut renderer).unwrap();
    app.resize(ViewportSize::new(1920, 1080), 1.0, &mut renderer).unwrap();
    assert_eq!(app.scene, scene);
}

#[test]
fn zero_area_resize_is_rejected_without_side_effects() {
    let mut app = app(800, 600);
    let mut renderer = RecordingRenderer::default();
    let err = app.resize(ViewportSize::new(0, 600), 1.0, &mut renderer);
    assert_eq!(
        err,
        Err(SceneError::DegenerateViewport {
            width: 0,
            height: 600
        })
    );
    assert_eq!(app.camera.aspect, 800.0 / 600.0);
    assert!(renderer.sizes.is_empty());
}

#[test]
fn zero_area_startup_is_rejected() {
    let scene = SceneGraph::default();
    assert!(AppContext::new(scene, ViewportSize::new(640, 0)).is_err());
}
