//! Heads-up display: target color, feedback message, reset and difficulty buttons.
use bevy::prelude::*;

use crate::utils::constants::ui_constants::{
    BUTTON_IDLE, BUTTON_SELECTED, BUTTON_TEXT, HEADER_BACKGROUND, HEADER_TEXT, STRIPE_BACKGROUND,
    STRIPE_FONT_SIZE, TARGET_FONT_SIZE, TITLE_FONT_SIZE,
};
use crate::utils::game_state::{Difficulty, GameState};
use crate::utils::objects::{HudText, ModeButton, ResetButton};

/// Spawns the HUD. It lives for the whole session and is only rewritten, never respawned.
pub fn spawn_hud(mut commands: Commands, game_state: Res<GameState>) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(0.0),
            width: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            ..default()
        })
        .with_children(|hud| {
            // Header with the color to find
            hud.spawn((
                Node {
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    padding: UiRect::all(Val::Px(12.0)),
                    ..default()
                },
                BackgroundColor(HEADER_BACKGROUND),
            ))
            .with_children(|header| {
                header.spawn((
                    Text::new("THE GREAT"),
                    TextFont {
                        font_size: TITLE_FONT_SIZE,
                        ..default()
                    },
                    TextColor(HEADER_TEXT),
                ));
                header.spawn((
                    Text::new(game_state.target.as_str()),
                    TextFont {
                        font_size: TARGET_FONT_SIZE,
                        ..default()
                    },
                    TextColor(HEADER_TEXT),
                    HudText::TargetColor,
                ));
                header.spawn((
                    Text::new("GUESSING GAME"),
                    TextFont {
                        font_size: TITLE_FONT_SIZE,
                        ..default()
                    },
                    TextColor(HEADER_TEXT),
                ));
            });

            // Stripe with the controls and the message
            hud.spawn((
                Node {
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    column_gap: Val::Px(24.0),
                    padding: UiRect::axes(Val::Px(8.0), Val::Px(4.0)),
                    ..default()
                },
                BackgroundColor(STRIPE_BACKGROUND),
            ))
            .with_children(|stripe| {
                stripe
                    .spawn((
                        Button,
                        Node {
                            padding: UiRect::axes(Val::Px(10.0), Val::Px(4.0)),
                            ..default()
                        },
                        BackgroundColor(BUTTON_IDLE),
                        ResetButton,
                    ))
                    .with_children(|button| {
                        button.spawn((
                            Text::new(game_state.reset_label),
                            TextFont {
                                font_size: STRIPE_FONT_SIZE,
                                ..default()
                            },
                            TextColor(BUTTON_TEXT),
                            HudText::ResetLabel,
                        ));
                    });

                stripe.spawn((
                    Text::new(game_state.message),
                    TextFont {
                        font_size: STRIPE_FONT_SIZE,
                        ..default()
                    },
                    TextColor(BUTTON_TEXT),
                    Node {
                        min_width: Val::Px(140.0),
                        ..default()
                    },
                    HudText::Message,
                ));

                for difficulty in [Difficulty::Easy, Difficulty::Hard] {
                    stripe
                        .spawn((
                            Button,
                            Node {
                                padding: UiRect::axes(Val::Px(10.0), Val::Px(4.0)),
                                ..default()
                            },
                            BackgroundColor(mode_button_color(
                                difficulty,
                                game_state.difficulty,
                            )),
                            ModeButton,
                        ))
                        .with_children(|button| {
                            button.spawn((
                                Text::new(difficulty.label()),
                                TextFont {
                                    font_size: STRIPE_FONT_SIZE,
                                    ..default()
                                },
                                TextColor(BUTTON_TEXT),
                            ));
                        });
                }
            });
        });
}

fn mode_button_color(button: Difficulty, selected: Difficulty) -> Color {
    if button == selected {
        BUTTON_SELECTED
    } else {
        BUTTON_IDLE
    }
}

/// Rewrites the HUD texts from the game state.
pub fn update_hud_text(game_state: Res<GameState>, mut texts: Query<(&mut Text, &HudText)>) {
    for (mut text, kind) in &mut texts {
        let value = match kind {
            HudText::TargetColor => game_state.target.as_str(),
            HudText::Message => game_state.message,
            HudText::ResetLabel => game_state.reset_label,
        };
        if text.0 != value {
            text.0 = value.to_string();
        }
    }
}

/// Highlights the button of the selected difficulty.
pub fn update_mode_buttons(
    game_state: Res<GameState>,
    mut buttons: Query<(&Children, &mut BackgroundColor), With<ModeButton>>,
    labels: Query<&Text>,
) {
    for (children, mut background) in &mut buttons {
        let Some(label) = labels.iter_many(children.iter()).next() else {
            continue;
        };
        background.0 = mode_button_color(Difficulty::from_label(&label.0), game_state.difficulty);
    }
}
