//! Systems logic: startup, per-frame game loop and HUD sync.

use bevy::prelude::*;

use crate::command_handler::{CommandSet, FrameLoopStop};
use crate::utils::camera::handle_window_resize;
use crate::utils::game_functions::{
    advance_tweens, apply_pending_picks, handle_reset_command, spin_cubes, sync_cube_transforms,
};
use crate::utils::game_state::GameState;
use crate::utils::setup::{setup_environment, setup_round};
use crate::utils::ui::{spawn_hud, update_hud_text, update_mode_buttons};

// Plugin for managing all the game systems.
pub struct SystemsLogicPlugin;

impl Plugin for SystemsLogicPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_environment, setup_round, spawn_hud))
            .add_systems(Update, handle_window_resize)
            .add_systems(
                Update,
                (
                    handle_reset_command,
                    apply_pending_picks,
                    spin_cubes.run_if(is_not_stopped),
                    advance_tweens,
                    sync_cube_transforms,
                    (update_hud_text, update_mode_buttons)
                        .run_if(resource_changed::<GameState>),
                )
                    .chain()
                    .after(CommandSet),
            );
    }
}

pub fn is_not_stopped(stop: Res<FrameLoopStop>) -> bool {
    !stop.0
}
