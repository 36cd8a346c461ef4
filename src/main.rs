//! Start-up for color_cubes, with window, plugins, and resources.

use bevy::{
    diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin},
    prelude::*,
    window::*,
};

use color_cubes::{
    command_handler::CommandHandlerPlugin,
    log,
    utils::{
        config::GameConfig, debug_functions::DebugFunctionsPlugin, game_state::GameState,
        objects::RandomGen, systems_logic::SystemsLogicPlugin,
    },
};

/// Entry point for the application
fn main() {
    let config = GameConfig::load_or_default();

    let mut random_gen = match config.seed {
        Some(seed) => RandomGen::from_seed(seed),
        None => RandomGen::from_clock(),
    };
    let game_state = GameState::new(config.difficulty, &mut random_gen.random_gen);
    log!(
        "Color Cubes: find {} among {} cubes",
        game_state.target,
        game_state.palette.len()
    );

    let window = Some(Window {
        title: config.window_title.clone(),
        #[cfg(target_arch = "wasm32")]
        canvas: Some("#game-canvas".into()),
        fit_canvas_to_parent: true,
        prevent_default_event_handling: true,
        present_mode: PresentMode::AutoVsync,
        ..default()
    });

    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: window,
                ..default()
            }),
            LogDiagnosticsPlugin::default(),
            FrameTimeDiagnosticsPlugin::default(),
            CommandHandlerPlugin,
            SystemsLogicPlugin,
            DebugFunctionsPlugin,
        ))
        .insert_resource(config)
        .insert_resource(random_gen)
        .insert_resource(game_state)
        .run();
}
