use arcade_helpers::welcome_screen::{WelcomeScreenElement, spawn_menu_button};
use bevy::prelude::*;
use bevy::sprite::Anchor;
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::art::{BUTTON_GREEN, GRASS_GREEN, GameArt, LIGHT_BLUE, LOGO_SIZE};
use crate::core::{GameConfig, Intent};

const GRASS_HEIGHT: f32 = 50.0;

/// Buttons on the main menu, top to bottom
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
pub enum MenuButton {
    #[strum(to_string = "PLAY")]
    Play,
    #[strum(to_string = "QUIT")]
    Quit,
}

impl MenuButton {
    pub const fn intent(self) -> Intent {
        match self {
            Self::Play => Intent::Play,
            Self::Quit => Intent::Quit,
        }
    }
}

pub fn use_menu_background(mut clear_color: ResMut<ClearColor>) {
    clear_color.0 = LIGHT_BLUE;
}

/// Spawns the title, the logo, the lawn and the menu buttons.
pub fn spawn_welcome_screen(mut commands: Commands, config: Res<GameConfig>, art: Res<GameArt>) {
    let screen = config.screen;

    commands.spawn((
        WelcomeScreenElement,
        Sprite::from_color(GRASS_GREEN, Vec2::new(screen.x, GRASS_HEIGHT)),
        Transform::from_xyz(0.0, -screen.y / 2.0 + GRASS_HEIGHT / 2.0, 0.0),
    ));

    commands.spawn((
        WelcomeScreenElement,
        Text2d::new("CATCH THE APPLE"),
        TextFont {
            font: art.font.clone(),
            font_size: 72.0,
            ..default()
        },
        TextColor(GRASS_GREEN),
        Anchor::TopCenter,
        Transform::from_xyz(0.0, screen.y / 2.0 - 100.0, 1.0),
    ));

    commands.spawn((
        WelcomeScreenElement,
        Text2d::new("A relaxing fruit-catching game"),
        TextFont {
            font: art.font.clone(),
            font_size: 24.0,
            ..default()
        },
        TextColor(Color::BLACK),
        Anchor::TopCenter,
        Transform::from_xyz(0.0, screen.y / 2.0 - 180.0, 1.0),
    ));

    let logo = commands
        .spawn((WelcomeScreenElement, Transform::from_xyz(0.0, 50.0, 1.0)))
        .id();
    art.logo.attach(&mut commands, logo, Vec2::splat(LOGO_SIZE));

    // Buttons sit below the logo, centered horizontally.
    commands
        .spawn((
            WelcomeScreenElement,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(290.0),
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                ..default()
            },
        ))
        .with_children(|parent| {
            for button in MenuButton::iter() {
                spawn_menu_button(
                    parent,
                    art.font.clone(),
                    &button.to_string(),
                    BUTTON_GREEN,
                    button,
                );
            }
        });
}

/// Turns menu button presses into intents
pub fn handle_menu_buttons(
    buttons: Query<(&Interaction, &MenuButton), Changed<Interaction>>,
    mut intents: EventWriter<Intent>,
) {
    for (interaction, button) in &buttons {
        if *interaction == Interaction::Pressed {
            intents.send(button.intent());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_are_labelled_and_ordered() {
        let labels: Vec<String> = MenuButton::iter().map(|button| button.to_string()).collect();

        assert_eq!(labels, ["PLAY", "QUIT"], "menu button labels");
    }

    #[test]
    fn buttons_map_to_intents() {
        assert_eq!(MenuButton::Play.intent(), Intent::Play, "play button");
        assert_eq!(MenuButton::Quit.intent(), Intent::Quit, "quit button");
    }
}
