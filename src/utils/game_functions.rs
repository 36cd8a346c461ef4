//! Core game logic: resets, pick resolution, idle spin and tweens.
use bevy::math::curve::easing::EaseFunction;
use bevy::prelude::*;

use crate::command_handler::{PendingDifficulty, PendingPicks, PendingReset};
use crate::utils::config::GameConfig;
use crate::utils::constants::cube_constants::WIN_SPIN_TARGET_RAD;
use crate::utils::game_state::{GameState, PickOutcome};
use crate::utils::objects::{CubeEntity, GameEntity, RandomGen, Spin};
use crate::utils::setup::spawn_cubes;
use crate::utils::tween::{ScaleTween, SpinTween, Tween};

/// Applies a pending reset or difficulty change: new round state, then fresh cubes.
pub fn handle_reset_command(
    mut commands: Commands,
    mut pending_reset: ResMut<PendingReset>,
    mut pending_difficulty: ResMut<PendingDifficulty>,
    mut pending_picks: ResMut<PendingPicks>,
    mut game_state: ResMut<GameState>,
    mut random_gen: ResMut<RandomGen>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    game_entities: Query<Entity, With<GameEntity>>,
) {
    let difficulty = pending_difficulty.0.take();
    if !pending_reset.0 && difficulty.is_none() {
        return;
    }
    pending_reset.0 = false;

    match difficulty {
        Some(difficulty) => {
            info!("Difficulty set to {}", difficulty.label());
            game_state.set_difficulty(difficulty, &mut random_gen.random_gen);
        }
        None => game_state.reset(&mut random_gen.random_gen),
    }

    // Picks of the old round point at cubes about to disappear
    pending_picks.0.clear();
    for entity in &game_entities {
        commands.entity(entity).despawn();
    }

    spawn_cubes(&mut commands, &mut meshes, &mut materials, &game_state);
}

/// Resolves the cubes clicked this frame against the target color.
pub fn apply_pending_picks(
    mut commands: Commands,
    mut pending_picks: ResMut<PendingPicks>,
    mut game_state: ResMut<GameState>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<GameConfig>,
    cubes: Query<(
        Entity,
        &CubeEntity,
        &Spin,
        &Transform,
        &MeshMaterial3d<StandardMaterial>,
    )>,
) {
    for picked in pending_picks.0.drain(..) {
        let Ok((_, cube, _, transform, _)) = cubes.get(picked) else {
            continue;
        };

        match game_state.check_color(&cube.color) {
            PickOutcome::Correct => {
                info!("Correct! {} found in slot {}", cube.color, cube.slot);
                for (entity, cube, spin, _, material) in &cubes {
                    commands.entity(entity).insert(SpinTween(Tween::new(
                        spin.angles(),
                        Vec2::splat(WIN_SPIN_TARGET_RAD),
                        config.win_spin_duration_secs,
                        EaseFunction::CubicOut,
                    )));
                    if let (Some(material), Some(shown)) = (
                        materials.get_mut(&material.0),
                        game_state.shown.get(cube.slot),
                    ) {
                        material.base_color = shown.to_color();
                    }
                }
            }
            PickOutcome::Miss => {
                info!(
                    "Miss: {} in slot {} is not {}",
                    cube.color, cube.slot, game_state.target
                );
                commands.entity(picked).insert(ScaleTween(Tween::new(
                    transform.scale,
                    Vec3::ZERO,
                    config.shrink_duration_secs,
                    EaseFunction::CubicOut,
                )));
            }
        }
    }
}

/// Idle spin, once per frame.
pub fn spin_cubes(config: Res<GameConfig>, mut cubes: Query<&mut Spin, With<CubeEntity>>) {
    for mut spin in &mut cubes {
        spin.x += config.spin_step_rad;
        spin.y += config.spin_step_rad;
    }
}

/// Moves every running tween forward and drops the finished ones.
/// Runs after the idle spin, so a spin tween overrides the spin while it lasts.
pub fn advance_tweens(
    mut commands: Commands,
    time: Res<Time>,
    mut scale_tweens: Query<(Entity, &mut ScaleTween, &mut Transform)>,
    mut spin_tweens: Query<(Entity, &mut SpinTween, &mut Spin)>,
) {
    let delta = time.delta_secs();

    for (entity, mut tween, mut transform) in &mut scale_tweens {
        transform.scale = tween.0.advance(delta);
        if tween.0.is_finished() {
            commands.entity(entity).remove::<ScaleTween>();
        }
    }

    for (entity, mut tween, mut spin) in &mut spin_tweens {
        let angles = tween.0.advance(delta);
        spin.x = angles.x;
        spin.y = angles.y;
        if tween.0.is_finished() {
            commands.entity(entity).remove::<SpinTween>();
        }
    }
}

/// Writes spin angles into the rendered rotation.
pub fn sync_cube_transforms(mut cubes: Query<(&Spin, &mut Transform), Changed<Spin>>) {
    for (spin, mut transform) in &mut cubes {
        transform.rotation = spin.rotation();
    }
}
