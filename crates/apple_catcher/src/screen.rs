use bevy::prelude::*;
use bevy::sprite::Anchor;

use crate::art::{BLADE_GREEN, GRASS_GREEN, GameArt, SKY_BLUE};
use crate::core::{Basket, FallingApple, GameConfig, Session};
use crate::highscore::HighScore;

const GRASS_HEIGHT: f32 = 40.0;
const HUD_FONT_SIZE: f32 = 32.0;
const HUD_MARGIN: f32 = 20.0;

// Draw order, back to front
const GRASS_Z: f32 = 0.0;
const APPLE_Z: f32 = 1.0;
const BASKET_Z: f32 = 2.0;
const HUD_Z: f32 = 5.0;

/// Marker for the background and HUD shown from play until the menu
#[derive(Component)]
pub struct PlayfieldElement;

/// Component tag for the score display
#[derive(Component)]
pub struct ScoreDisplay;

/// Component tag for the lives display
#[derive(Component)]
pub struct LivesDisplay;

/// Component tag for the high score display
#[derive(Component)]
pub struct HighScoreDisplay;

/// Converts a screen-space box (top-left origin, y down) to the world-space
/// translation of its center (center origin, y up).
pub fn to_world(config: &GameConfig, top_left: Vec2, size: Vec2, z: f32) -> Vec3 {
    let center = top_left + size / 2.0;
    Vec3::new(
        center.x - config.screen.x / 2.0,
        config.screen.y / 2.0 - center.y,
        z,
    )
}

pub fn use_sky_background(mut clear_color: ResMut<ClearColor>) {
    clear_color.0 = SKY_BLUE;
}

/// Spawns the grass strip and the score, high score and lives texts
pub fn spawn_playfield(mut commands: Commands, config: Res<GameConfig>, art: Res<GameArt>) {
    let screen = config.screen;
    let grass_top = screen.y - GRASS_HEIGHT;

    commands.spawn((
        PlayfieldElement,
        Sprite::from_color(GRASS_GREEN, Vec2::new(screen.x, GRASS_HEIGHT)),
        Transform::from_translation(to_world(
            &config,
            Vec2::new(0.0, grass_top),
            Vec2::new(screen.x, GRASS_HEIGHT),
            GRASS_Z,
        )),
    ));

    // Blades are rolled once so the lawn does not flicker.
    let mut rng = fastrand::Rng::new();
    for x in (0..screen.x as u32).step_by(4) {
        let blade = Vec2::new(2.0, rng.u32(5..=15) as f32);
        commands.spawn((
            PlayfieldElement,
            Sprite::from_color(BLADE_GREEN, blade),
            Transform::from_translation(to_world(
                &config,
                Vec2::new(x as f32, grass_top - blade.y),
                blade,
                GRASS_Z + 0.1,
            )),
        ));
    }

    let font = TextFont {
        font: art.font.clone(),
        font_size: HUD_FONT_SIZE,
        ..default()
    };
    let top = screen.y / 2.0 - HUD_MARGIN;

    commands.spawn((
        PlayfieldElement,
        ScoreDisplay,
        Text2d::new("Score: 0"),
        font.clone(),
        TextColor(Color::BLACK),
        Anchor::TopLeft,
        Transform::from_xyz(-screen.x / 2.0 + HUD_MARGIN, top, HUD_Z),
    ));

    commands.spawn((
        PlayfieldElement,
        HighScoreDisplay,
        Text2d::new("High Score: 0"),
        font.clone(),
        TextColor(Color::BLACK),
        Anchor::TopCenter,
        Transform::from_xyz(0.0, top, HUD_Z),
    ));

    commands.spawn((
        PlayfieldElement,
        LivesDisplay,
        Text2d::new("Lives: 0"),
        font,
        TextColor(Color::BLACK),
        Anchor::TopLeft,
        Transform::from_xyz(screen.x / 2.0 - 150.0, top, HUD_Z),
    ));
}

pub fn despawn_playfield(mut commands: Commands, query: Query<Entity, With<PlayfieldElement>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

/// Gives newly spawned apples and baskets their visuals
pub fn dress_new_entities(
    mut commands: Commands,
    art: Res<GameArt>,
    apples: Query<(Entity, &FallingApple), Added<FallingApple>>,
    baskets: Query<(Entity, &Basket), Added<Basket>>,
) {
    for (entity, apple) in &apples {
        art.apple.attach(&mut commands, entity, apple.size);
    }
    for (entity, basket) in &baskets {
        art.basket.attach(&mut commands, entity, basket.size);
    }
}

/// Moves visuals to where the simulation put the apples and the basket
pub fn place_entities(
    config: Res<GameConfig>,
    mut apples: Query<(&FallingApple, &mut Transform), Without<Basket>>,
    mut baskets: Query<(&Basket, &mut Transform), Without<FallingApple>>,
) {
    for (apple, mut transform) in &mut apples {
        transform.translation = to_world(&config, apple.position, apple.size, APPLE_Z);
        transform.rotation = Quat::from_rotation_z(apple.spin.to_radians());
    }
    for (basket, mut transform) in &mut baskets {
        transform.translation = to_world(
            &config,
            Vec2::new(basket.x, basket.y),
            basket.size,
            BASKET_Z,
        );
    }
}

/// Updates the HUD texts
pub fn update_hud(
    session: Res<Session>,
    high_score: Res<HighScore>,
    mut score_query: Query<
        &mut Text2d,
        (With<ScoreDisplay>, Without<LivesDisplay>, Without<HighScoreDisplay>),
    >,
    mut lives_query: Query<&mut Text2d, (With<LivesDisplay>, Without<HighScoreDisplay>)>,
    mut high_score_query: Query<&mut Text2d, With<HighScoreDisplay>>,
) {
    if let Ok(mut text) = score_query.get_single_mut() {
        text.0 = format!("Score: {}", session.score());
    }
    if let Ok(mut text) = lives_query.get_single_mut() {
        text.0 = format!("Lives: {}", session.lives());
    }
    if let Ok(mut text) = high_score_query.get_single_mut() {
        text.0 = format!("High Score: {}", high_score.best());
    }
}
