//! Moves the game between menu, play and game over.
//!
//! Playing -> GameOver is decided by scoring when the last life goes; every
//! other move comes from an [`Intent`].

use bevy::prelude::*;

use crate::core::{Basket, GameConfig, Intent, Phase, Session, SessionEntity};
use crate::spawner::Spawner;

/// What an intent means in a given phase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Goto(Phase),
    Exit,
    Ignore,
}

pub const fn next_transition(phase: Phase, intent: Intent) -> Transition {
    match (phase, intent) {
        (_, Intent::Quit) => Transition::Exit,
        (Phase::Menu, Intent::Play) | (Phase::GameOver, Intent::Restart) => {
            Transition::Goto(Phase::Playing)
        }
        (Phase::Playing | Phase::GameOver, Intent::BackToMenu) => Transition::Goto(Phase::Menu),
        _ => Transition::Ignore,
    }
}

/// Maps keys to intents. Which ones matter depends on the phase.
pub fn read_keyboard_intents(keys: Res<ButtonInput<KeyCode>>, mut intents: EventWriter<Intent>) {
    if keys.just_pressed(KeyCode::KeyR) {
        intents.send(Intent::Restart);
    }
    if keys.just_pressed(KeyCode::Escape) {
        intents.send(Intent::BackToMenu);
    }
    if keys.any_just_pressed([KeyCode::Enter, KeyCode::Space]) {
        intents.send(Intent::Play);
    }
}

/// Acts on the first meaningful intent of the frame and drops the rest
pub fn apply_intents(
    mut intents: EventReader<Intent>,
    phase: Res<State<Phase>>,
    mut next_phase: ResMut<NextState<Phase>>,
    mut exit: EventWriter<AppExit>,
) {
    let current = *phase.get();
    let transition = intents
        .read()
        .map(|intent| next_transition(current, *intent))
        .find(|transition| *transition != Transition::Ignore);
    intents.clear();

    match transition {
        Some(Transition::Goto(target)) => {
            info!("{current:?} -> {target:?}");
            next_phase.set(target);
        }
        Some(Transition::Exit) => {
            info!("Quit from {current:?}");
            exit.send(AppExit::Success);
        }
        Some(Transition::Ignore) | None => {}
    }
}

/// Starts a fresh session: score and lives back to their starting values,
/// no apples, basket centered. The high score carries over.
pub fn start_session(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut session: ResMut<Session>,
    mut spawner: ResMut<Spawner>,
    session_entities: Query<Entity, With<SessionEntity>>,
) {
    for entity in &session_entities {
        commands.entity(entity).despawn_recursive();
    }

    session.reset();
    spawner.make_ready();
    commands.spawn((Basket::new(&config), SessionEntity));

    info!("Session started with {} lives", session.lives());
}

/// Drops the basket and every apple when going back to the menu
pub fn clear_session(mut commands: Commands, query: Query<Entity, With<SessionEntity>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_only_starts_or_quits() {
        assert_eq!(
            next_transition(Phase::Menu, Intent::Play),
            Transition::Goto(Phase::Playing),
            "play starts a session"
        );
        assert_eq!(
            next_transition(Phase::Menu, Intent::Quit),
            Transition::Exit,
            "quit leaves"
        );
        assert_eq!(
            next_transition(Phase::Menu, Intent::Restart),
            Transition::Ignore,
            "nothing to restart in the menu"
        );
        assert_eq!(
            next_transition(Phase::Menu, Intent::BackToMenu),
            Transition::Ignore,
            "already in the menu"
        );
    }

    #[test]
    fn restart_only_works_after_game_over() {
        assert_eq!(
            next_transition(Phase::GameOver, Intent::Restart),
            Transition::Goto(Phase::Playing),
            "restart from game over"
        );
        assert_eq!(
            next_transition(Phase::Playing, Intent::Restart),
            Transition::Ignore,
            "restart is ignored mid-session"
        );
        assert_eq!(
            next_transition(Phase::Playing, Intent::Play),
            Transition::Ignore,
            "already playing"
        );
    }

    #[test]
    fn escape_returns_to_menu() {
        for phase in [Phase::Playing, Phase::GameOver] {
            assert_eq!(
                next_transition(phase, Intent::BackToMenu),
                Transition::Goto(Phase::Menu),
                "escape from {phase:?}"
            );
        }
    }

    #[test]
    fn quit_works_everywhere() {
        for phase in [Phase::Menu, Phase::Playing, Phase::GameOver] {
            assert_eq!(
                next_transition(phase, Intent::Quit),
                Transition::Exit,
                "quit from {phase:?}"
            );
        }
    }
}
