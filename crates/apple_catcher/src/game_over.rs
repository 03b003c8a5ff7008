use bevy::prelude::*;
use bevy::sprite::Anchor;

use crate::art::{GameArt, HEART_SIZE, RESTART_ICON_SIZE};
use crate::core::{GameConfig, Session};
use crate::highscore::HighScore;

const OVERLAY_Z: f32 = 10.0;
const TEXT_Z: f32 = 11.0;

/// Component marker for game over screen entities
#[derive(Component)]
pub struct GameOverScreen;

/// Dims the frozen playfield and shows the final score with the way out
pub fn spawn_game_over_screen(
    mut commands: Commands,
    config: Res<GameConfig>,
    art: Res<GameArt>,
    session: Res<Session>,
    high_score: Res<HighScore>,
) {
    commands.spawn((
        GameOverScreen,
        Sprite::from_color(Color::srgba(0.0, 0.0, 0.0, 0.7), config.screen),
        Transform::from_xyz(0.0, 0.0, OVERLAY_Z),
    ));

    let font = |size: f32| TextFont {
        font: art.font.clone(),
        font_size: size,
        ..default()
    };

    // Title with the broken heart to its right
    commands.spawn((
        GameOverScreen,
        Text2d::new("GAME OVER"),
        font(48.0),
        TextColor(Color::WHITE),
        Anchor::CenterRight,
        Transform::from_xyz(60.0, 76.0, TEXT_Z),
    ));
    let heart = commands
        .spawn((GameOverScreen, Transform::from_xyz(100.0, 76.0, TEXT_Z)))
        .id();
    art.heart_broken
        .attach(&mut commands, heart, Vec2::splat(HEART_SIZE));

    commands.spawn((
        GameOverScreen,
        Text2d::new(format!("Your Score: {}", session.score())),
        font(32.0),
        TextColor(Color::WHITE),
        Transform::from_xyz(0.0, 24.0, TEXT_Z),
    ));

    commands.spawn((
        GameOverScreen,
        Text2d::new(format!("High Score: {}", high_score.best())),
        font(32.0),
        TextColor(Color::WHITE),
        Transform::from_xyz(0.0, -26.0, TEXT_Z),
    ));

    commands.spawn((
        GameOverScreen,
        Text2d::new("Press R to restart"),
        font(32.0),
        TextColor(Color::WHITE),
        Anchor::CenterRight,
        Transform::from_xyz(105.0, -86.0, TEXT_Z),
    ));
    let restart = commands
        .spawn((GameOverScreen, Transform::from_xyz(135.0, -86.0, TEXT_Z)))
        .id();
    art.restart
        .attach(&mut commands, restart, Vec2::splat(RESTART_ICON_SIZE));

    commands.spawn((
        GameOverScreen,
        Text2d::new("ESC for Main Menu"),
        font(32.0),
        TextColor(Color::WHITE),
        Transform::from_xyz(0.0, -136.0, TEXT_Z),
    ));
}

/// Cleans up the game over screen
pub fn cleanup_game_over(mut commands: Commands, query: Query<Entity, With<GameOverScreen>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}
