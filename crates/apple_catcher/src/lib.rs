//! Catch the Apple: move a basket along the ground and catch falling apples
//! before they drop off the screen.

use arcade_helpers::welcome_screen::despawn_welcome_screen;
use bevy::prelude::*;

pub mod core;
pub mod flow;
pub mod gameplay;
pub mod highscore;
pub mod physics;
pub mod scoring;
pub mod spawner;

mod art;
mod game_over;
mod screen;
mod welcome;

use crate::art::GameArt;
use crate::core::{GameConfig, Phase, config};
use crate::flow::apply_intents;
use crate::game_over::{cleanup_game_over, spawn_game_over_screen};
use crate::gameplay::SimulationPlugin;
use crate::screen::{
    despawn_playfield, dress_new_entities, place_entities, spawn_playfield, update_hud,
    use_sky_background,
};
use crate::welcome::{handle_menu_buttons, spawn_welcome_screen, use_menu_background};

/// Entry point for the game
pub fn run() -> AppExit {
    let config = GameConfig::default();
    let mut app = arcade_helpers::get_default_app(config::TITLE, config.screen);

    app.insert_resource(config)
        .add_plugins((SimulationPlugin, PresentationPlugin));

    app.run()
}

/// Draws the simulation and turns pointer input into intents. Needs a
/// window, so it is left out of headless runs.
struct PresentationPlugin;

impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameArt>()
            .add_systems(Startup, setup_camera)
            // Menu
            .add_systems(
                OnEnter(Phase::Menu),
                (use_menu_background, despawn_playfield, spawn_welcome_screen),
            )
            .add_systems(
                Update,
                handle_menu_buttons
                    .before(apply_intents)
                    .run_if(in_state(Phase::Menu)),
            )
            .add_systems(
                OnExit(Phase::Menu),
                (despawn_welcome_screen, use_sky_background, spawn_playfield),
            )
            // Playing and game over share the playfield
            .add_systems(
                Update,
                (dress_new_entities, place_entities, update_hud)
                    .chain()
                    .run_if(not(in_state(Phase::Menu))),
            )
            .add_systems(OnEnter(Phase::GameOver), spawn_game_over_screen)
            .add_systems(OnExit(Phase::GameOver), cleanup_game_over);
    }
}

/// Sets up the main 2D camera
fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
