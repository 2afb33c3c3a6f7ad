// Frame loop: one update plus one render per tick, errors surface to the host.

mod common;

use common::{RecordingRenderer, RenderFailed};
use glam::Vec3;
use haunted_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn app() -> AppContext {
    let mut rng = StdRng::seed_from_u64(42);
    let scene = build_scene(&mut rng, &SceneConfig::default());
    AppContext::new(scene, ViewportSize::new(800, 600)).unwrap()
}

#[test]
fn each_tick_renders_once() {
    let mut app = app();
    let mut renderer = RecordingRenderer::default();
    let mut frames = FrameLoop::new();
    assert_eq!(frames.state(), LoopState::Running);

    for expected in 1..=5 {
        let stats = frames.tick(&mut app, &mut renderer).unwrap();
        assert_eq!(stats.frame, expected);
    }
    assert_eq!(renderer.renders, 5);
    assert_eq!(frames.frames(), 5);
    assert_eq!(frames.state(), LoopState::Running);
}

#[test]
fn run_until_stops_on_the_requested_frame() {
    let mut app = app();
    let mut renderer = RecordingRenderer::default();
    let mut frames = FrameLoop::new();
    let last = frames
        .run_until(&mut app, &mut renderer, |s| s.frame == 120)
        .unwrap();
    assert_eq!(last, 120);
    assert_eq!(renderer.renders, 120);
}

#[test]
fn elapsed_time_never_goes_backwards() {
    let mut app = app();
    let mut renderer = RecordingRenderer::default();
    let mut frames = FrameLoop::new();
    let mut last = 0.0;
    frames
        .run_until(&mut app, &mut renderer, |s| {
            assert!(s.elapsed_secs >= last);
            last = s.elapsed_secs;
            s.frame == 10
        })
        .unwrap();
}

#[test]
fn render_error_is_returned_and_frame_not_counted() {
    let mut app = app();
    let mut renderer = RecordingRenderer {
        fail_on: Some(3),
        ..Default::default()
    };
    let mut frames = FrameLoop::new();
    let err = frames.run_until(&mut app, &mut renderer, |_| false);
    assert_eq!(err, Err(RenderFailed(3)));
    assert_eq!(frames.frames(), 2);
}

#[test]
fn idle_frames_leave_the_camera_alone() {
    let mut app = app();
    let mut renderer = RecordingRenderer::default();
    let mut frames = FrameLoop::new();
    frames.tick(&mut app, &mut renderer).unwrap();
    let before = app.camera.position;
    let stats = frames.tick(&mut app, &mut renderer).unwrap();
    assert!(!stats.camera_moved);
    assert!((app.camera.position - before).length() < 1e-5);
    assert!((app.camera.position - Vec3::new(4.0, 2.0, 5.0)).length() < 1e-4);
}

#[test]
fn dragging_keeps_the_camera_gliding_after_release() {
    let mut app = app();
    let mut renderer = RecordingRenderer::default();
    let mut frames = FrameLoop::new();
    let camera = app.camera.clone();
    app.controls.pointer_down(PointerButton::Primary, 100.0, 100.0);
    app.controls.pointer_move(160.0, 100.0, 600.0, &camera);
    app.controls.pointer_up();

    let first = frames.tick(&mut app, &mut renderer).unwrap();
    let second = frames.tick(&mut app, &mut renderer).unwrap();
    assert!(first.camera_moved);
    assert!(second.camera_moved);
}

#[test]
fn scene_is_untouched_by_ticking() {
    let mut app = app();
    let before = app.scene.clone();
    let mut renderer = RecordingRenderer::default();
    FrameLoop::new()
        .run_until(&mut app, &mut renderer, |s| s.frame == 30)
        .unwrap();
    assert_eq!(app.scene, before);
}
