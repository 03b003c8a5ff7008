use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy::window::{PresentMode, WindowMode, WindowResolution};
use bevy_framepace::{FramepacePlugin, FramepaceSettings, Limiter};

use crate::art::ASSETS_DIR;

/// Frame rate every game is paced to.
pub const TARGET_FPS: f64 = 60.0;

// Creates a Bevy app with the window, asset and frame pacing settings shared by the games
// This prevent duplication / errors accross different games
pub fn get_default_app(title: &str, size: Vec2) -> App {
    let mut app = App::new();

    let asset_plugin = AssetPlugin {
        mode: AssetMode::Unprocessed,
        file_path: ASSETS_DIR.to_string(),
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let window_plugin = WindowPlugin {
        primary_window: Some(Window {
            title: title.to_string(),
            present_mode: PresentMode::Fifo,
            resolution: WindowResolution::new(size.x, size.y),
            resizable: false,
            mode: WindowMode::Windowed,
            ..default()
        }),
        ..default()
    };

    app.add_plugins(DefaultPlugins.set(asset_plugin).set(window_plugin));

    // Keeps the render loop (and input sampling) at a steady 60 Hz.
    // https://github.com/aevyrie/bevy_framepace
    app.add_plugins(FramepacePlugin);
    app.insert_resource(FramepaceSettings {
        limiter: Limiter::from_framerate(TARGET_FPS),
    });

    app.insert_resource(ClearColor(Color::BLACK));

    app
}
