//! Round state of the game, kept free of any scene entity so it can be driven directly.
use bevy::prelude::*;
use rand::Rng;
use serde::Deserialize;

use crate::utils::constants::game_constants::{
    CORRECT_MESSAGE, EASY_CUBE_COUNT, EASY_LABEL, HARD_CUBE_COUNT, HARD_LABEL, MISS_MESSAGE,
    NEW_COLORS_LABEL, PLAY_AGAIN_LABEL,
};
use crate::utils::palette::{HexColor, generate_palette};

/// Number of cubes per round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Hard,
}

impl Difficulty {
    /// Mode button label to difficulty. Only the exact easy label is easy.
    pub fn from_label(label: &str) -> Self {
        if label == EASY_LABEL {
            Difficulty::Easy
        } else {
            Difficulty::Hard
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => EASY_LABEL,
            Difficulty::Hard => HARD_LABEL,
        }
    }

    pub fn cube_count(self) -> usize {
        match self {
            Difficulty::Easy => EASY_CUBE_COUNT,
            Difficulty::Hard => HARD_CUBE_COUNT,
        }
    }
}

/// Phase of the current round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RoundPhase {
    #[default]
    Idle,
    // The target was found. Cubes stay clickable.
    Won,
}

/// Result of comparing a picked cube against the target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickOutcome {
    Correct,
    Miss,
}

/// A resource that holds the state of the current round.
#[derive(Resource, Clone, Debug)]
pub struct GameState {
    pub difficulty: Difficulty,
    // Candidate colors, one per cube slot.
    pub palette: Vec<HexColor>,
    // Always one of the palette entries.
    pub target: HexColor,
    // Colors the cubes currently display, per slot.
    pub shown: Vec<HexColor>,
    // Observed only. Cubes stay clickable in every phase.
    pub phase: RoundPhase,
    pub message: &'static str,
    pub reset_label: &'static str,
    // Incremented on every reset.
    pub round: u64,
}

impl GameState {
    /// Starts the first round.
    pub fn new(difficulty: Difficulty, rng: &mut impl Rng) -> Self {
        let mut state = Self {
            difficulty,
            palette: Vec::new(),
            target: HexColor::from_rgb(0, 0, 0),
            shown: Vec::new(),
            phase: RoundPhase::Idle,
            message: "",
            reset_label: NEW_COLORS_LABEL,
            round: 0,
        };
        state.reset(rng);
        state
    }

    /// New palette of the current size with a uniformly drawn target.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.palette = generate_palette(self.difficulty.cube_count(), rng);
        let target_index = rng.random_range(0..self.palette.len());
        self.target = self.palette[target_index].clone();
        self.shown = self.palette.clone();
        self.phase = RoundPhase::Idle;
        self.message = "";
        self.reset_label = NEW_COLORS_LABEL;
        self.round += 1;
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty, rng: &mut impl Rng) {
        self.difficulty = difficulty;
        self.reset(rng);
    }

    /// Compares a cube's bound color with the target.
    /// A miss leaves the round running, a hit reveals the target on every cube.
    pub fn check_color(&mut self, color: &HexColor) -> PickOutcome {
        if *color == self.target {
            self.message = CORRECT_MESSAGE;
            self.reset_label = PLAY_AGAIN_LABEL;
            self.phase = RoundPhase::Won;
            self.shown = vec![self.target.clone(); self.palette.len()];
            PickOutcome::Correct
        } else {
            self.message = MISS_MESSAGE;
            self.phase = RoundPhase::Idle;
            PickOutcome::Miss
        }
    }
}
