// Host-side tests for the Scene: construction, frame updates, picking and instance output.

use folio_core::content::PROJECTS;
use folio_core::*;
use glam::{Vec2, Vec3};

fn ndc_of(scene: &Scene, world: Vec3) -> Vec2 {
    let p = scene.camera().view_proj().project_point3(world);
    Vec2::new(p.x, p.y)
}

fn single_target(action: PickAction) -> Scene {
    let cfg = SceneConfig::builder()
        .object_count(1)
        .placement(Placement::Orbit { radius: 0.0 })
        .scale(ScaleRange::fixed(1.0))
        .pickable(action)
        .build()
        .unwrap();
    Scene::new(cfg)
}

#[test]
fn projects_scene_places_markers_on_the_orbit() {
    let scene = Scene::new(Preset::Projects.config());
    assert_eq!(scene.live_objects(), PROJECTS.len());
    for (i, o) in scene.objects().iter().enumerate() {
        assert_eq!(o.payload, Some(i));
        assert!((o.position.length() - PROJECT_ORBIT_RADIUS).abs() < 1e-4);
    }
}

#[test]
fn clicking_a_project_marker_reports_its_index() {
    let mut scene = Scene::new(Preset::Projects.config());
    scene.resize(800, 800);
    let target = scene.objects().iter().next().map(|o| o.position).unwrap();
    let ev = scene.click(ndc_of(&scene, target)).expect("marker hit");
    assert_eq!(ev.payload, Some(0));
    assert!(!ev.removed);
    assert_eq!(scene.live_objects(), PROJECTS.len());
}

#[test]
fn clicking_empty_space_changes_nothing() {
    let mut scene = Scene::new(Preset::Projects.config());
    assert!(scene.click(Vec2::new(0.98, 0.98)).is_none());
    assert_eq!(scene.live_objects(), PROJECTS.len());
}

#[test]
fn non_pickable_scene_ignores_clicks() {
    let cfg = Preset::Particles.config();
    let mut scene = Scene::new(cfg);
    assert!(scene.click(Vec2::ZERO).is_none());
}

#[test]
fn exploding_an_object_replaces_it_with_a_burst() {
    let mut scene = single_target(PickAction::Explode);
    let ev = scene.click(Vec2::ZERO).expect("centre object hit");
    assert!(ev.removed);
    assert_eq!(scene.live_objects(), 0);
    assert_eq!(scene.live_particles(), BURST_PARTICLE_COUNT);

    assert!(
        scene.click(Vec2::ZERO).is_none(),
        "a removed object cannot be picked again"
    );
}

#[test]
fn bursts_fade_out_and_leave_the_scene() {
    let mut scene = single_target(PickAction::Explode);
    scene.click(Vec2::ZERO);
    let mut last = scene.live_particles();
    for _ in 0..15 {
        scene.tick(0.1);
        assert!(scene.live_particles() <= last);
        last = scene.live_particles();
    }
    assert_eq!(last, 0);
    let mut out = Vec::new();
    scene.write_instances(&mut out);
    assert!(out.is_empty());
}

#[test]
fn selecting_keeps_the_object() {
    let mut scene = single_target(PickAction::Select);
    let ev = scene.click(Vec2::ZERO).unwrap();
    assert!(!ev.removed);
    assert_eq!(scene.live_objects(), 1);
    assert_eq!(scene.live_particles(), 0);
}

#[test]
fn same_seed_gives_identical_frames() {
    let cfg = Preset::Asteroids.config();
    let mut a = Scene::new(cfg.clone());
    let mut b = Scene::new(cfg);
    let (mut out_a, mut out_b) = (Vec::new(), Vec::new());
    for _ in 0..30 {
        a.tick(1.0 / 60.0);
        b.tick(1.0 / 60.0);
    }
    a.write_instances(&mut out_a);
    b.write_instances(&mut out_b);
    assert_eq!(out_a, out_b);
}

#[test]
fn instances_cover_objects_and_particles_with_positive_alpha() {
    let mut scene = single_target(PickAction::Explode);
    let mut out = Vec::new();
    scene.write_instances(&mut out);
    assert_eq!(out.len(), 1);

    scene.click(Vec2::ZERO);
    scene.tick(0.2);
    scene.write_instances(&mut out);
    assert_eq!(out.len(), scene.live_objects() + scene.live_particles());
    assert!(out.iter().all(|s| s.color[3] > 0.0 && s.size > 0.0));
}

#[test]
fn zero_size_resize_is_ignored() {
    let mut scene = Scene::new(Preset::Icon.config());
    assert!(!scene.resize(0, 300));
    assert_eq!(scene.viewport(), None);
    assert!(scene.resize(400, 300));
    assert!(!scene.resize(400, 300), "same size is not a change");
    assert!(!scene.resize(400, 0));
    assert_eq!(scene.viewport(), Some((400, 300)));
    assert!((scene.camera().aspect - 4.0 / 3.0).abs() < 1e-6);
}

#[test]
fn parallax_follows_pointer_without_overshoot() {
    let cfg = Preset::Hero.config().to_builder().object_count(10).build().unwrap();
    let gain_x = cfg.parallax.map(|p| p.gain.x).unwrap();
    let mut scene = Scene::new(cfg);
    scene.pointer_moved(Vec2::new(1.0, 0.0));
    let mut last = scene.camera().position.x;
    for _ in 0..200 {
        scene.tick(1.0 / 60.0);
        let x = scene.camera().position.x;
        assert!(x >= last && x <= gain_x);
        last = x;
    }
    assert!((gain_x - last).abs() < 1e-2);
}

#[test]
fn hover_adds_group_spin_only_while_hovered() {
    let mut idle = Scene::new(Preset::Icon.config());
    let mut hovered = Scene::new(Preset::Icon.config());
    hovered.set_hovered(true);
    idle.tick(0.1);
    hovered.tick(0.1);
    let extra = hovered.group().rotation - idle.group().rotation;
    assert!((extra - Preset::Icon.config().hover_spin * 0.1).length() < 1e-5);

    hovered.set_hovered(false);
    let before = hovered.group().rotation - idle.group().rotation;
    idle.tick(0.1);
    hovered.tick(0.1);
    let after = hovered.group().rotation - idle.group().rotation;
    assert!((after - before).length() < 1e-5);
}

#[test]
fn long_frames_are_clamped() {
    let mut scene = Scene::new(Preset::Icon.config());
    scene.tick(5.0);
    assert!((scene.elapsed() - scene::state::MAX_FRAME_DELTA_SEC).abs() < 1e-6);
}

#[test]
fn highlighted_marker_changes_colour() {
    let mut scene = Scene::new(Preset::Projects.config());
    let mut plain = Vec::new();
    scene.write_instances(&mut plain);
    scene.highlight_payload(Some(1));
    let mut lit = Vec::new();
    scene.write_instances(&mut lit);
    assert_eq!(plain[0], lit[0]);
    assert_ne!(plain[1].color, lit[1].color);
}

#[test]
fn size_observed_after_mount_keeps_scene_state() {
    let mut scene = Scene::new(Preset::Asteroids.config());
    assert!(!scene.resize(0, 0));
    for _ in 0..10 {
        scene.tick(1.0 / 60.0);
    }
    let before: Vec<_> = scene.objects().iter().map(|o| (o.id, o.position)).collect();
    let elapsed = scene.elapsed();

    assert!(scene.resize(1280, 720));
    let after: Vec<_> = scene.objects().iter().map(|o| (o.id, o.position)).collect();
    assert_eq!(before, after);
    assert_eq!(scene.elapsed(), elapsed);
    assert_eq!(scene.viewport(), Some((1280, 720)));
    assert!((scene.camera().aspect - 16.0 / 9.0).abs() < 1e-6);
}
