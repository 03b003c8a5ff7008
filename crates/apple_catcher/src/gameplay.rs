use bevy::prelude::*;

use crate::core::{GameConfig, Intent, Phase, Session};
use crate::flow::{apply_intents, clear_session, read_keyboard_intents, start_session};
use crate::highscore::HighScore;
use crate::physics::{fall_apples, move_basket};
use crate::scoring::resolve_catches;
use crate::spawner::{Spawner, spawn_apples};

/// The game without any rendering: phases, physics, spawning and scoring.
///
/// Insert a [`GameConfig`] before adding the plugin to override the defaults.
/// Needs `StatesPlugin`, `TimePlugin` and a `ButtonInput<KeyCode>` resource.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameConfig>();
        let tick_hz = app.world().resource::<GameConfig>().tick_hz;

        app.insert_resource(Time::<Fixed>::from_hz(tick_hz))
            .init_state::<Phase>()
            .add_event::<Intent>()
            .init_resource::<Session>()
            .init_resource::<Spawner>()
            .init_resource::<HighScore>()
            .add_systems(OnEnter(Phase::Menu), clear_session)
            .add_systems(OnEnter(Phase::Playing), start_session)
            .add_systems(Update, (read_keyboard_intents, apply_intents).chain())
            .add_systems(
                FixedUpdate,
                (spawn_apples, move_basket, fall_apples, resolve_catches)
                    .chain()
                    .run_if(in_state(Phase::Playing)),
            );
    }
}
