use std::path::PathBuf;
use std::time::Duration;

use bevy::prelude::*;

/// Coarse game mode driving which systems run
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash, Default, States)]
pub enum Phase {
    #[default]
    Menu,
    Playing,
    GameOver,
}

/// Abstract player requests. Input capture turns keys and clicks into these;
/// the phase machine decides what they mean in the current phase.
#[derive(Event, Clone, Copy, Eq, PartialEq, Debug)]
pub enum Intent {
    Play,
    Quit,
    Restart,
    BackToMenu,
}

/// Game configuration constants
pub mod config {
    use bevy::prelude::Vec2;

    pub const TITLE: &str = "Catch the Apple";

    // Playfield, in logical pixels
    pub const SCREEN_SIZE: Vec2 = Vec2::new(800.0, 600.0);

    // Apple physics, per tick
    pub const GRAVITY: f32 = 0.05;
    pub const INITIAL_SPEED: f32 = 0.8;
    pub const INITIAL_SPEED_JITTER: (f32, f32) = (0.7, 1.0);
    pub const MAX_DRIFT: f32 = 0.3;
    pub const TERMINAL_VELOCITY: f32 = 3.0;
    pub const SPIN_DEGREES: f32 = 0.5;
    pub const APPLE_SIZE: Vec2 = Vec2::new(60.0, 60.0);

    // Basket
    pub const BASKET_SIZE: Vec2 = Vec2::new(150.0, 75.0);
    pub const BASKET_SPEED: f32 = 6.0;
    pub const BASKET_FLOOR_GAP: f32 = 30.0;

    // Session rules
    pub const MAX_APPLES: usize = 5;
    pub const LIVES: u32 = 3;
    pub const SPAWN_COOLDOWN_SECS: f32 = 1.5;
    pub const TICK_HZ: f64 = 60.0;

    pub const HIGH_SCORE_FILE: &str = "highscore.txt";
}

/// Tunables shared by the simulation and the presentation.
#[derive(Resource, Clone, Debug)]
pub struct GameConfig {
    pub screen: Vec2,
    pub gravity: f32,
    pub initial_speed: f32,
    pub initial_speed_jitter: (f32, f32),
    pub max_drift: f32,
    pub terminal_velocity: f32,
    pub spin_degrees: f32,
    pub apple_size: Vec2,
    pub basket_size: Vec2,
    pub basket_speed: f32,
    pub basket_floor_gap: f32,
    pub max_apples: usize,
    pub lives: u32,
    pub spawn_cooldown: Duration,
    pub tick_hz: f64,
    pub high_score_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen: config::SCREEN_SIZE,
            gravity: config::GRAVITY,
            initial_speed: config::INITIAL_SPEED,
            initial_speed_jitter: config::INITIAL_SPEED_JITTER,
            max_drift: config::MAX_DRIFT,
            terminal_velocity: config::TERMINAL_VELOCITY,
            spin_degrees: config::SPIN_DEGREES,
            apple_size: config::APPLE_SIZE,
            basket_size: config::BASKET_SIZE,
            basket_speed: config::BASKET_SPEED,
            basket_floor_gap: config::BASKET_FLOOR_GAP,
            max_apples: config::MAX_APPLES,
            lives: config::LIVES,
            spawn_cooldown: Duration::from_secs_f32(config::SPAWN_COOLDOWN_SECS),
            tick_hz: config::TICK_HZ,
            high_score_path: PathBuf::from(config::HIGH_SCORE_FILE),
        }
    }
}

/// Marks every entity that belongs to one play session
#[derive(Component)]
pub struct SessionEntity;

/// A falling apple. Coordinates are screen space: origin at the top-left
/// corner, y growing downward.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct FallingApple {
    /// Top-left corner
    pub position: Vec2,
    /// Pixels per tick; `y` stays within `[0, terminal_velocity]`
    pub velocity: Vec2,
    pub size: Vec2,
    /// Visual rotation in degrees, follows the sign of the drift
    pub spin: f32,
}

impl FallingApple {
    pub const fn new(position: Vec2, velocity: Vec2, size: Vec2) -> Self {
        Self {
            position,
            velocity,
            size,
            spin: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_corners(self.position, self.position + self.size)
    }
}

/// The player's basket. Only `x` changes during a session.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Basket {
    pub x: f32,
    pub y: f32,
    pub size: Vec2,
    pub speed: f32,
}

impl Basket {
    /// Horizontally centered, resting just above the grass.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: (config.screen.x - config.basket_size.x) / 2.0,
            y: config.screen.y - config.basket_size.y - config.basket_floor_gap,
            size: config.basket_size,
            speed: config.basket_speed,
        }
    }

    pub fn rect(&self) -> Rect {
        let min = Vec2::new(self.x, self.y);
        Rect::from_corners(min, min + self.size)
    }
}

/// Score and lives of the session in progress
#[derive(Resource, Clone, Debug, PartialEq, Eq)]
pub struct Session {
    score: u32,
    lives: u32,
    starting_lives: u32,
}

impl Session {
    pub const fn new(lives: u32) -> Self {
        Self {
            score: 0,
            lives,
            starting_lives: lives,
        }
    }

    pub const fn score(&self) -> u32 {
        self.score
    }

    pub const fn lives(&self) -> u32 {
        self.lives
    }

    /// No lives left: nothing spawns, moves or scores until a new session.
    pub const fn is_over(&self) -> bool {
        self.lives == 0
    }

    /// Adds a point and returns the new score.
    pub const fn record_catch(&mut self) -> u32 {
        self.score += 1;
        self.score
    }

    /// Takes a life. Returns true only for the miss that ends the session;
    /// misses after that are ignored.
    pub const fn record_miss(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        self.lives -= 1;
        self.is_over()
    }

    pub const fn reset(&mut self) {
        self.score = 0;
        self.lives = self.starting_lives;
    }
}

impl FromWorld for Session {
    fn from_world(world: &mut World) -> Self {
        let lives = world
            .get_resource::<GameConfig>()
            .map_or(config::LIVES, |config| config.lives);
        Self::new(lives)
    }
}
