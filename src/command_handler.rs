//! Command handler
//! Translates player input (HUD buttons, clicks, taps, keys) into pending commands
//! which the game systems apply once per frame.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::utils::constants::ui_constants::TAP_MAX_DISTANCE;
use crate::utils::game_state::Difficulty;
use crate::utils::objects::{CubeEntity, ModeButton, ResetButton};
use crate::utils::picking::pick_cube;

#[derive(Resource, Default)]
pub struct PendingReset(pub bool);

#[derive(Resource, Default)]
pub struct PendingDifficulty(pub Option<Difficulty>);

/// Screen points clicked or tapped this frame outside the HUD
#[derive(Resource, Default)]
pub struct PendingPointerPoints(pub Vec<Vec2>);

/// Cubes clicked this frame, in click order
#[derive(Resource, Default)]
pub struct PendingPicks(pub Vec<Entity>);

/// Stop token of the idle spin loop
#[derive(Resource, Default)]
pub struct FrameLoopStop(pub bool);

/// Systems reading input. Game logic runs after this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandSet;

pub struct CommandHandlerPlugin;

impl Plugin for CommandHandlerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PendingReset>()
            .init_resource::<PendingDifficulty>()
            .init_resource::<PendingPointerPoints>()
            .init_resource::<PendingPicks>()
            .init_resource::<FrameLoopStop>()
            .add_systems(
                Update,
                (
                    read_hud_buttons,
                    read_keyboard_commands,
                    (read_pointer_points, pick_pointed_cubes).chain(),
                )
                    .in_set(CommandSet),
            );
    }
}

/// Mode buttons are told apart by their label text.
pub fn read_hud_buttons(
    reset_buttons: Query<&Interaction, (Changed<Interaction>, With<ResetButton>)>,
    mode_buttons: Query<(&Interaction, &Children), (Changed<Interaction>, With<ModeButton>)>,
    labels: Query<&Text>,
    mut pending_reset: ResMut<PendingReset>,
    mut pending_difficulty: ResMut<PendingDifficulty>,
) {
    if reset_buttons.iter().any(|i| *i == Interaction::Pressed) {
        pending_reset.0 = true;
    }
    for (interaction, children) in &mode_buttons {
        if *interaction != Interaction::Pressed {
            continue;
        }
        if let Some(label) = labels.iter_many(children.iter()).next() {
            pending_difficulty.0 = Some(Difficulty::from_label(&label.0));
        }
    }
}

pub fn read_keyboard_commands(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut pending_reset: ResMut<PendingReset>,
    mut pending_difficulty: ResMut<PendingDifficulty>,
) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        pending_reset.0 = true;
    }
    if keyboard.just_pressed(KeyCode::Digit1) {
        pending_difficulty.0 = Some(Difficulty::Easy);
    }
    if keyboard.just_pressed(KeyCode::Digit2) {
        pending_difficulty.0 = Some(Difficulty::Hard);
    }
}

/// Collects left clicks and touch taps aimed at the scene.
///
/// bevy_ui clears `Interaction` on the frame a touch is released, so a touch is
/// attributed to the HUD when it starts over a button, and dropped on release.
pub fn read_pointer_points(
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    hud_buttons: Query<&Interaction, With<Button>>,
    mut hud_touches: Local<Vec<u64>>,
    mut pointer_points: ResMut<PendingPointerPoints>,
) {
    let over_hud = hud_buttons.iter().any(|i| *i != Interaction::None);

    if over_hud {
        hud_touches.extend(touches.iter_just_pressed().map(|touch| touch.id()));
    }

    for touch in touches.iter_just_canceled() {
        hud_touches.retain(|id| *id != touch.id());
    }

    for touch in touches.iter_just_released() {
        if let Some(index) = hud_touches.iter().position(|id| *id == touch.id()) {
            hud_touches.swap_remove(index);
            continue;
        }
        if touch.distance().length() <= TAP_MAX_DISTANCE {
            pointer_points.0.push(touch.position());
        }
    }

    if mouse.just_pressed(MouseButton::Left) && !over_hud {
        if let Ok(window) = windows.single() {
            pointer_points.0.extend(window.cursor_position());
        }
    }
}

/// Turns the collected screen points into picks of the cube under each of them.
pub fn pick_pointed_cubes(
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    cubes: Query<(Entity, &GlobalTransform), With<CubeEntity>>,
    mut pointer_points: ResMut<PendingPointerPoints>,
    mut pending_picks: ResMut<PendingPicks>,
) {
    if pointer_points.0.is_empty() {
        return;
    }
    let points: Vec<Vec2> = pointer_points.0.drain(..).collect();

    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    for point in points {
        let Ok(ray) = camera.viewport_to_world(camera_transform, point) else {
            continue;
        };
        if let Some(entity) = pick_cube(ray, &cubes) {
            pending_picks.0.push(entity);
        }
    }
}
