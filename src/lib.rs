//! Declaration of the modules for color_cubes.

/// Command handler turning player input into pending game commands
pub mod command_handler;

/// Various utility functions, constants, and objects
pub mod utils {
    pub mod camera;
    pub mod config;
    pub mod constants;
    pub mod debug_functions;
    pub mod game_functions;
    pub mod game_state;
    pub mod macros;
    pub mod objects;
    pub mod palette;
    pub mod picking;
    pub mod setup;
    pub mod systems_logic;
    pub mod tween;
    pub mod ui;
}
