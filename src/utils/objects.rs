//! This file defines the various objects, resources, and components used in the game.
use bevy::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::utils::palette::HexColor;

/// Random number generator
#[derive(Resource)]
pub struct RandomGen {
    pub random_gen: ChaCha8Rng,
}

impl RandomGen {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            random_gen: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seeded from the wall clock, so every launch plays different colors.
    pub fn from_clock() -> Self {
        Self::from_seed(clock_seed())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    use crate::utils::constants::game_constants::SEED;
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(SEED)
}

#[cfg(target_arch = "wasm32")]
fn clock_seed() -> u64 {
    js_sys::Date::now().to_bits()
}

/// A clickable cube bound to one palette entry
#[derive(Component, Clone, Debug)]
pub struct CubeEntity {
    pub slot: usize,
    pub color: HexColor,
}

/// Euler angles (XYZ order) of a cube. Written by the idle spin and by tweens.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Spin {
    pub x: f32,
    pub y: f32,
}

impl Spin {
    pub fn angles(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.x, self.y, 0.0)
    }
}

/// A component that marks an entity as a game entity, which is cleared on reset
#[derive(Component)]
pub struct GameEntity;

/// HUD texts kept in sync with the game state
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HudText {
    TargetColor,
    Message,
    ResetLabel,
}

/// The "New Colors" / "Play Again?" button
#[derive(Component)]
pub struct ResetButton;

/// A difficulty mode button. The mode it selects is read from its label.
#[derive(Component)]
pub struct ModeButton;
