// Constants used in the game, structured into modules.

/// Generic game constants
pub mod game_constants {
    // Cubes per row of the grid.
    pub const GRID_COLUMNS: usize = 3;

    pub const EASY_CUBE_COUNT: usize = 3;
    pub const HARD_CUBE_COUNT: usize = 6;

    // Labels of the difficulty buttons. Anything but the easy label is hard.
    pub const EASY_LABEL: &str = "Easy";
    pub const HARD_LABEL: &str = "Hard";

    // Messages and reset button labels
    pub const CORRECT_MESSAGE: &str = "Correct!";
    pub const MISS_MESSAGE: &str = "Try Again";
    pub const NEW_COLORS_LABEL: &str = "New Colors";
    pub const PLAY_AGAIN_LABEL: &str = "Play Again?";

    // Seed used when no clock is available.
    pub const SEED: u64 = 69;

    // Configuration file looked up in the working directory (native only).
    pub const CONFIG_FILE: &str = "color_cubes.toml";
    pub const WINDOW_TITLE: &str = "Color Cubes";
}

/// 3D camera
pub mod camera_3d_constants {
    pub const CAMERA_3D_INITIAL_X: f32 = 0.0;
    pub const CAMERA_3D_INITIAL_Y: f32 = 0.0;
    pub const CAMERA_3D_INITIAL_Z: f32 = 5.0;

    // Vertical field of view
    pub const CAMERA_3D_FOV_DEG: f32 = 75.0;
    pub const CAMERA_3D_NEAR: f32 = 0.1;
    pub const CAMERA_3D_FAR: f32 = 1000.0;
}

/// Cube objects
pub mod cube_constants {
    pub const CUBE_SIZE: f32 = 1.0;

    // Grid layout: x = col * spacing + origin_x, y = -row * spacing + origin_y
    pub const CUBE_SPACING: f32 = 2.0;
    pub const GRID_ORIGIN_X: f32 = -2.0;
    pub const GRID_ORIGIN_Y: f32 = 1.0;

    // Idle spin added to the X and Y angles every frame
    pub const SPIN_STEP_RAD: f32 = 0.01;

    // Tween durations
    pub const SHRINK_DURATION_SECS: f32 = 0.5;
    pub const WIN_SPIN_DURATION_SECS: f32 = 1.0;
    pub const WIN_SPIN_TARGET_RAD: f32 = std::f32::consts::TAU;

    // Cubes smaller than this are ignored by picking
    pub const MIN_PICKABLE_SCALE: f32 = 1e-3;
}

/// Lighting constants
pub mod lighting_constants {
    pub const AMBIENT_LIGHT_BRIGHTNESS: f32 = 400.0;
    pub const DIRECTIONAL_LIGHT_ILLUMINANCE: f32 = 8_000.0;
    pub const DIRECTIONAL_LIGHT_POSITION: [f32; 3] = [5.0, 5.0, 5.0];
}

/// Heads-up display
pub mod ui_constants {
    use bevy::prelude::Color;

    pub const TITLE_FONT_SIZE: f32 = 22.0;
    pub const TARGET_FONT_SIZE: f32 = 48.0;
    pub const STRIPE_FONT_SIZE: f32 = 20.0;

    pub const HEADER_BACKGROUND: Color = Color::srgb(0.27, 0.51, 0.71); // steel blue
    pub const STRIPE_BACKGROUND: Color = Color::WHITE;
    pub const BUTTON_IDLE: Color = Color::WHITE;
    pub const BUTTON_SELECTED: Color = HEADER_BACKGROUND;
    pub const BUTTON_TEXT: Color = HEADER_BACKGROUND;
    pub const HEADER_TEXT: Color = Color::WHITE;

    // Touch gestures shorter than this count as a tap
    pub const TAP_MAX_DISTANCE: f32 = 12.0;
}
