//! Debug functions for the game.
use bevy::{prelude::*, window::*};

use crate::command_handler::FrameLoopStop;

pub struct DebugFunctionsPlugin;

impl Plugin for DebugFunctionsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (toggle_vsync, toggle_frame_loop));
    }
}

/// Toggles VSync when the 'V' key is pressed.
fn toggle_vsync(input: Res<ButtonInput<KeyCode>>, mut window: Query<&mut Window>) {
    if input.just_pressed(KeyCode::KeyV) {
        let Ok(mut window) = window.single_mut() else {
            return;
        };

        window.present_mode = if matches!(window.present_mode, PresentMode::AutoVsync) {
            PresentMode::AutoNoVsync
        } else {
            PresentMode::AutoVsync
        };

        info!("PRESENT_MODE: {:?}", window.present_mode);
    }
}

/// Stops or restarts the idle spin when the 'P' key is pressed.
fn toggle_frame_loop(input: Res<ButtonInput<KeyCode>>, mut stop: ResMut<FrameLoopStop>) {
    if input.just_pressed(KeyCode::KeyP) {
        stop.0 = !stop.0;
        info!("Idle spin stopped: {}", stop.0);
    }
}
