// Integration tests (native) for the `color_cubes` crate.
// These drive the round systems in a headless Bevy app, without window or renderer.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use color_cubes::command_handler::{FrameLoopStop, PendingDifficulty, PendingPicks, PendingReset};
use color_cubes::utils::config::GameConfig;
use color_cubes::utils::constants::cube_constants::WIN_SPIN_TARGET_RAD;
use color_cubes::utils::game_functions::{
    advance_tweens, apply_pending_picks, handle_reset_command, spin_cubes, sync_cube_transforms,
};
use color_cubes::utils::game_state::{Difficulty, GameState, RoundPhase};
use color_cubes::utils::objects::{CubeEntity, RandomGen, Spin};
use color_cubes::utils::setup::setup_round;
use color_cubes::utils::systems_logic::is_not_stopped;
use color_cubes::utils::tween::{ScaleTween, SpinTween};

/// Every update advances game time by this much.
const FRAME: Duration = Duration::from_millis(100);

fn test_app(difficulty: Difficulty) -> App {
    let mut random_gen = RandomGen::from_seed(11);
    let game_state = GameState::new(difficulty, &mut random_gen.random_gen);

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .init_resource::<Assets<Mesh>>()
        .init_resource::<Assets<StandardMaterial>>()
        .init_resource::<PendingReset>()
        .init_resource::<PendingDifficulty>()
        .init_resource::<PendingPicks>()
        .init_resource::<FrameLoopStop>()
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .insert_resource(GameConfig::default())
        .insert_resource(random_gen)
        .insert_resource(game_state)
        .add_systems(Startup, setup_round)
        .add_systems(
            Update,
            (
                handle_reset_command,
                apply_pending_picks,
                spin_cubes.run_if(is_not_stopped),
                advance_tweens,
                sync_cube_transforms,
            )
                .chain(),
        );
    app.update();
    app
}

fn cubes(app: &mut App) -> Vec<(Entity, CubeEntity)> {
    let mut query = app.world_mut().query::<(Entity, &CubeEntity)>();
    let mut cubes: Vec<_> = query
        .iter(app.world())
        .map(|(entity, cube)| (entity, cube.clone()))
        .collect();
    cubes.sort_by_key(|(_, cube)| cube.slot);
    cubes
}

fn state(app: &App) -> &GameState {
    app.world().resource::<GameState>()
}

fn material_color(app: &App, entity: Entity) -> Color {
    let handle = app
        .world()
        .get::<MeshMaterial3d<StandardMaterial>>(entity)
        .unwrap();
    app.world()
        .resource::<Assets<StandardMaterial>>()
        .get(&handle.0)
        .unwrap()
        .base_color
}

fn click(app: &mut App, entity: Entity) {
    app.world_mut().resource_mut::<PendingPicks>().0.push(entity);
    app.update();
}

/// Runs enough frames to cover `secs` of game time.
fn run_for(app: &mut App, secs: f32) {
    let frames = (secs / FRAME.as_secs_f32()).ceil() as usize + 1;
    for _ in 0..frames {
        app.update();
    }
}

#[test]
fn first_round_spawns_one_cube_per_palette_entry() {
    let mut app = test_app(Difficulty::Hard);
    let cubes = cubes(&mut app);
    assert_eq!(cubes.len(), 6);
    for (entity, cube) in &cubes {
        assert_eq!(cube.color, state(&app).palette[cube.slot]);
        assert_eq!(material_color(&app, *entity), cube.color.to_color());
    }
}

#[test]
fn reset_replaces_every_cube() {
    let mut app = test_app(Difficulty::Easy);
    let before: Vec<Entity> = cubes(&mut app).into_iter().map(|(e, _)| e).collect();
    let round = state(&app).round;

    app.world_mut().resource_mut::<PendingReset>().0 = true;
    app.update();

    let after = cubes(&mut app);
    assert_eq!(after.len(), 3);
    assert_eq!(state(&app).round, round + 1);
    assert!(after.iter().all(|(entity, _)| !before.contains(entity)));
    assert!(state(&app).palette.contains(&state(&app).target));
    assert!(!app.world().resource::<PendingReset>().0);
}

#[test]
fn difficulty_toggle_resizes_the_grid() {
    let mut app = test_app(Difficulty::Hard);

    app.world_mut().resource_mut::<PendingDifficulty>().0 = Some(Difficulty::from_label("Easy"));
    app.update();
    assert_eq!(cubes(&mut app).len(), 3);
    assert_eq!(state(&app).difficulty, Difficulty::Easy);

    app.world_mut().resource_mut::<PendingDifficulty>().0 = Some(Difficulty::from_label("Hard"));
    app.update();
    assert_eq!(cubes(&mut app).len(), 6);
    assert_eq!(state(&app).palette.len(), 6);
}

#[test]
fn clicking_the_target_cube_wins() {
    let mut app = test_app(Difficulty::Easy);
    let target = state(&app).target.clone();
    let (winner, _) = cubes(&mut app)
        .into_iter()
        .find(|(_, cube)| cube.color == target)
        .expect("a cube is bound to the target");

    click(&mut app, winner);

    assert_eq!(state(&app).message, "Correct!");
    assert_eq!(state(&app).reset_label, "Play Again?");
    assert_eq!(state(&app).phase, RoundPhase::Won);
    for (entity, _) in cubes(&mut app) {
        assert_eq!(material_color(&app, entity), target.to_color());
        assert!(app.world().get::<SpinTween>(entity).is_some());
    }
}

#[test]
fn clicking_another_cube_shrinks_only_that_cube() {
    let mut app = test_app(Difficulty::Hard);
    let target = state(&app).target.clone();
    let all = cubes(&mut app);
    let (missed, _) = all
        .iter()
        .find(|(_, cube)| cube.color != target)
        .cloned()
        .expect("a cube with another color");

    click(&mut app, missed);

    assert_eq!(state(&app).message, "Try Again");
    assert_eq!(state(&app).phase, RoundPhase::Idle);
    for (entity, cube) in &all {
        let shrinking = app.world().get::<ScaleTween>(*entity).is_some();
        assert_eq!(shrinking, *entity == missed);
        // Colors are untouched by a miss
        assert_eq!(material_color(&app, *entity), cube.color.to_color());
    }

    // One frame into the shrink
    let scale = app.world().get::<Transform>(missed).unwrap().scale;
    assert!(scale.x > 0.0 && scale.x < 1.0, "got {scale}");

    run_for(&mut app, GameConfig::default().shrink_duration_secs);
    assert_eq!(app.world().get::<Transform>(missed).unwrap().scale, Vec3::ZERO);
    assert!(app.world().get::<ScaleTween>(missed).is_none());
    for (entity, _) in all.iter().filter(|(entity, _)| *entity != missed) {
        assert_eq!(app.world().get::<Transform>(*entity).unwrap().scale, Vec3::ONE);
    }

    // The round goes on: the target is still there to be found
    assert!(all.iter().any(|(_, cube)| cube.color == target));
}

#[test]
fn win_spin_settles_then_idle_spin_resumes() {
    let mut app = test_app(Difficulty::Easy);
    let config = GameConfig::default();
    let target = state(&app).target.clone();
    let (winner, _) = cubes(&mut app)
        .into_iter()
        .find(|(_, cube)| cube.color == target)
        .expect("a cube is bound to the target");

    click(&mut app, winner);
    let spin = *app.world().get::<Spin>(winner).unwrap();
    assert!(spin.x > 0.0 && spin.x < WIN_SPIN_TARGET_RAD, "got {spin:?}");

    // Stop on the frame the tween ends, before idle spin adds to it again
    let max_frames = (config.win_spin_duration_secs / FRAME.as_secs_f32()).ceil() as usize + 2;
    let mut frames = 0;
    while app.world().get::<SpinTween>(winner).is_some() {
        assert!(frames < max_frames, "win spin never settled");
        app.update();
        frames += 1;
    }
    for (entity, _) in cubes(&mut app) {
        assert!(app.world().get::<SpinTween>(entity).is_none());
        let spin = *app.world().get::<Spin>(entity).unwrap();
        assert!((spin.x - WIN_SPIN_TARGET_RAD).abs() < 1e-4, "got {spin:?}");
        assert!((spin.y - WIN_SPIN_TARGET_RAD).abs() < 1e-4, "got {spin:?}");
        let rotation = app.world().get::<Transform>(entity).unwrap().rotation;
        assert!(rotation.abs_diff_eq(spin.rotation(), 1e-6));
    }

    let settled = *app.world().get::<Spin>(winner).unwrap();
    app.update();
    let spin = *app.world().get::<Spin>(winner).unwrap();
    assert!((spin.x - settled.x - config.spin_step_rad).abs() < 1e-6);
    assert!((spin.y - settled.y - config.spin_step_rad).abs() < 1e-6);
}

#[test]
fn idle_spin_turns_cubes_every_frame_until_stopped() {
    let mut app = test_app(Difficulty::Easy);
    let step = GameConfig::default().spin_step_rad;
    let (entity, _) = cubes(&mut app)[0].clone();
    let spin_before = *app.world().get::<Spin>(entity).unwrap();

    app.update();
    let spin = *app.world().get::<Spin>(entity).unwrap();
    assert!((spin.x - spin_before.x - step).abs() < 1e-6);
    assert!((spin.y - spin_before.y - step).abs() < 1e-6);
    let rotation = app.world().get::<Transform>(entity).unwrap().rotation;
    assert!(rotation.abs_diff_eq(spin.rotation(), 1e-6));

    app.world_mut().resource_mut::<FrameLoopStop>().0 = true;
    app.update();
    app.update();
    assert_eq!(*app.world().get::<Spin>(entity).unwrap(), spin);
}
