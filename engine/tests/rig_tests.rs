//! Rig Tests - Full Tick Flow
//!
//! Runs the complete character rig (input, locomotion, orientation,
//! animation) over a kinematic body and checks what the host observes.

use glam::{Vec2, Vec3};
use stride_engine::animation::{ParameterTable, names};
use stride_engine::camera::{CameraRig, ThirdPersonCamera};
use stride_engine::config::{LocomotionConfig, SprintMode};
use stride_engine::physics::{CharacterBody, KinematicBody, yaw_of};
use stride_engine::player::{CharacterRig, MAX_DELTA_TIME, MovementState};

const DT: f32 = 1.0 / 60.0;

type Rig = CharacterRig<KinematicBody, ThirdPersonCamera, ParameterTable>;

fn rig_with(config: LocomotionConfig) -> Rig {
    CharacterRig::new(
        config,
        KinematicBody::default(),
        ThirdPersonCamera::new(),
        ParameterTable::new(),
    )
}

fn fast_config() -> LocomotionConfig {
    LocomotionConfig {
        walk_acceleration: 40.0,
        run_acceleration: 60.0,
        sprint_acceleration: 80.0,
        ..Default::default()
    }
}

fn run(rig: &mut Rig, ticks: usize) {
    for _ in 0..ticks {
        rig.tick(DT);
    }
}

#[test]
fn test_idle_rig_publishes_grounded_idle() {
    let mut rig = rig_with(LocomotionConfig::default());
    run(&mut rig, 5);

    let params = rig.sink();
    assert_eq!(params.len(), 9);
    assert_eq!(params.flag(names::IS_IDLING), Some(true));
    assert_eq!(params.flag(names::IS_GROUNDED), Some(true));
    assert_eq!(params.flag(names::IS_FALLING), Some(false));
    assert_eq!(params.flag(names::IS_JUMPING), Some(false));
    assert_eq!(params.flag(names::IS_ROTATING_TO_TARGET), Some(false));
    assert_eq!(params.float(names::INPUT_MAGNITUDE), Some(0.0));
    assert_eq!(params.float(names::ROTATION_MISMATCH), Some(0.0));
}

#[test]
fn test_forward_run_moves_body_and_blends() {
    let mut rig = rig_with(fast_config());
    rig.input_mut().on_move(Vec2::new(0.0, 1.0));

    let report = rig.tick(DT);
    assert_eq!(report.state, MovementState::Running);
    assert!(report.velocity.z < 0.0);

    run(&mut rig, 240);
    assert_eq!(rig.state(), MovementState::Running);
    assert!(rig.body().position().z < -1.0);

    // Running blend target is the raw input
    let input_y = rig.sink().float(names::INPUT_Y).unwrap_or_default();
    assert!((input_y - 1.0).abs() < 1e-3);
    assert_eq!(rig.sink().flag(names::IS_IDLING), Some(false));
}

#[test]
fn test_hold_sprint_scales_blend() {
    let mut rig = rig_with(fast_config());
    rig.input_mut().on_move(Vec2::new(0.0, 1.0));
    rig.input_mut().on_sprint(true);
    run(&mut rig, 240);

    assert_eq!(rig.state(), MovementState::Sprinting);
    let input_y = rig.sink().float(names::INPUT_Y).unwrap_or_default();
    assert!((input_y - 1.5).abs() < 1e-3);

    rig.input_mut().on_sprint(false);
    run(&mut rig, 2);
    assert_eq!(rig.state(), MovementState::Running);
}

#[test]
fn test_toggle_sprint_latches() {
    let config = LocomotionConfig {
        sprint_mode: SprintMode::Toggle,
        ..fast_config()
    };
    let mut rig = rig_with(config);
    rig.input_mut().on_move(Vec2::new(0.0, 1.0));

    rig.input_mut().on_sprint(true);
    rig.input_mut().on_sprint(false);
    run(&mut rig, 30);
    assert_eq!(rig.state(), MovementState::Sprinting);

    rig.input_mut().on_sprint(true);
    run(&mut rig, 2);
    assert_eq!(rig.state(), MovementState::Running);
}

#[test]
fn test_jump_pulse_is_consumed_once() {
    let mut rig = rig_with(LocomotionConfig::default());
    rig.input_mut().on_jump(true);
    rig.input_mut().on_jump(false);

    let first = rig.tick(DT);
    let config = *rig.config();
    let expected = config.jump_impulse() - config.gravity * DT;
    assert!((first.velocity.y - expected).abs() < 1e-4);

    // No second impulse: gravity only
    let second = rig.tick(DT);
    assert_eq!(second.state, MovementState::Jumping);
    assert!((second.velocity.y - (first.velocity.y - config.gravity * DT)).abs() < 1e-4);

    let params = rig.sink();
    assert_eq!(params.flag(names::IS_JUMPING), Some(true));
    assert_eq!(params.flag(names::IS_GROUNDED), Some(false));
}

#[test]
fn test_full_jump_lands_back_idle() {
    let mut rig = rig_with(LocomotionConfig::default());
    rig.input_mut().on_jump(true);

    let mut states = Vec::new();
    for _ in 0..120 {
        let report = rig.tick(DT);
        if states.last() != Some(&report.state) {
            states.push(report.state);
        }
    }

    assert_eq!(
        states,
        vec![
            MovementState::Idling,
            MovementState::Jumping,
            MovementState::Falling,
            MovementState::Idling,
        ]
    );
    assert_eq!(rig.body().position().y, 0.0);
    assert_eq!(rig.sink().flag(names::IS_GROUNDED), Some(true));
}

#[test]
fn test_look_delta_applies_for_one_tick() {
    let mut rig = rig_with(LocomotionConfig::default());
    rig.input_mut().on_look(Vec2::new(100.0, 0.0));
    run(&mut rig, 5);
    assert!((rig.camera().yaw - 10.0).abs() < 1e-4);
}

#[test]
fn test_idle_snap_is_published() {
    let mut rig = rig_with(LocomotionConfig::default());
    for _ in 0..10 {
        rig.input_mut().on_look(Vec2::new(95.0, 0.0));
        rig.tick(DT);
    }
    assert!(rig.sink().float(names::ROTATION_MISMATCH).unwrap_or_default() > 90.0);

    let mut saw_rotating = false;
    for _ in 0..60 {
        let report = rig.tick(DT);
        assert_eq!(report.state, MovementState::Idling);
        if rig.sink().flag(names::IS_ROTATING_TO_TARGET) == Some(true) {
            saw_rotating = true;
        }
    }
    assert!(saw_rotating);
    assert_eq!(rig.sink().flag(names::IS_ROTATING_TO_TARGET), Some(false));
    assert!(yaw_of(rig.body().rotation()) > 80.0);
}

#[test]
fn test_running_turns_body_with_camera() {
    let mut rig = rig_with(fast_config());
    rig.input_mut().on_move(Vec2::new(0.0, 1.0));
    for _ in 0..9 {
        rig.input_mut().on_look(Vec2::new(100.0, 0.0));
        rig.tick(DT);
    }
    run(&mut rig, 120);

    assert!((yaw_of(rig.body().rotation()) - 90.0).abs() < 0.5);
    // Now heading toward +X
    let velocity = rig.locomotion().velocity();
    assert!(velocity.x > 5.0);
    assert!(velocity.z.abs() < 0.5);
}

#[test]
fn test_long_frame_is_clamped() {
    let mut rig = rig_with(LocomotionConfig::default());
    rig.input_mut().on_jump(true);
    let report = rig.tick(2.0);
    assert_eq!(report.dt, MAX_DELTA_TIME);

    let config = *rig.config();
    let expected = config.jump_impulse() - config.gravity * MAX_DELTA_TIME;
    assert!((report.velocity.y - expected).abs() < 1e-4);
}

#[test]
fn test_camera_follow_stays_behind_body() {
    let mut rig = rig_with(fast_config());
    rig.input_mut().on_move(Vec2::new(0.0, 1.0));
    run(&mut rig, 60);

    let position = rig.body().position();
    let eye = rig.camera_mut().follow(position);
    let camera = rig.camera();
    let pivot = position + Vec3::Y * camera.pivot_height;
    assert!(((eye - pivot).length() - camera.distance).abs() < 1e-3);
    assert!((pivot - eye).normalize().dot(camera.forward()) > 0.999);
}

#[test]
fn test_config_from_json_drives_rig() {
    let config = LocomotionConfig::from_json_str(r#"{ "gravity": 10.0, "jump_speed": 2.0 }"#)
        .expect("valid config");
    let mut rig = rig_with(config);
    rig.input_mut().on_jump(true);
    let report = rig.tick(DT);
    let expected = (2.0_f32 * 3.0 * 10.0).sqrt() - 10.0 * DT;
    assert!((report.velocity.y - expected).abs() < 1e-4);
}

#[test]
fn test_reset_and_into_parts() {
    let mut rig = rig_with(fast_config());
    rig.input_mut().on_move(Vec2::new(0.0, 1.0));
    run(&mut rig, 30);
    assert_eq!(rig.tick_count(), 30);

    rig.reset();
    let report = rig.tick(DT);
    assert_eq!(report.state, MovementState::Running);
    assert!(rig.animation().blend_input().length() < 1.0);

    let (body, _camera, params) = rig.into_parts();
    assert!(body.position().z < 0.0);
    assert!(!params.is_empty());
}
