use bevy::prelude::*;

use crate::core::{Basket, FallingApple, GameConfig, Phase, Session};
use crate::highscore::HighScore;

/// What happened to an apple this tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fate {
    Caught,
    Missed,
}

/// Strict axis-aligned overlap: rectangles that only share an edge do not touch.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.min.x < b.max.x && b.min.x < a.max.x && a.min.y < b.max.y && b.min.y < a.max.y
}

/// Decides whether `apple` was caught, missed, or is still in play. A catch
/// wins when both hold in the same tick.
pub fn judge(apple: &FallingApple, basket: &Basket, screen_height: f32) -> Option<Fate> {
    if overlaps(apple.rect(), basket.rect()) {
        Some(Fate::Caught)
    } else if apple.position.y > screen_height {
        Some(Fate::Missed)
    } else {
        None
    }
}

/// Removes caught and missed apples and books the outcome. A new best score
/// is saved before the tick ends; failing to save it stops the game.
pub fn resolve_catches(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut session: ResMut<Session>,
    mut high_score: ResMut<HighScore>,
    mut next_phase: ResMut<NextState<Phase>>,
    mut exit: EventWriter<AppExit>,
    apple_query: Query<(Entity, &FallingApple)>,
    basket_query: Query<&Basket>,
) {
    if session.is_over() {
        return;
    }

    let Ok(basket) = basket_query.get_single() else {
        return;
    };

    for (entity, apple) in &apple_query {
        let Some(fate) = judge(apple, basket, config.screen.y) else {
            continue;
        };

        commands.entity(entity).despawn_recursive();

        match fate {
            Fate::Caught => {
                let score = session.record_catch();
                match high_score.submit(score) {
                    Ok(true) => info!("New high score: {score}"),
                    Ok(false) => {}
                    Err(err) => {
                        error!("{err}");
                        exit.send(AppExit::error());
                        return;
                    }
                }
            }
            Fate::Missed => {
                if session.record_miss() {
                    info!("Game over, final score {}", session.score());
                    next_phase.set(Phase::GameOver);
                    return;
                }
            }
        }
    }
}
