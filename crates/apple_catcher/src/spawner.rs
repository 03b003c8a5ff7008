use std::time::Duration;

use bevy::prelude::*;

use crate::core::{FallingApple, GameConfig, Session, SessionEntity};

/// Controls apple spawning: a cooldown between drops and a cap on how many
/// apples fall at once
#[derive(Resource)]
pub struct Spawner {
    cooldown: Timer,
    rng: fastrand::Rng,
}

impl Spawner {
    pub fn new(cooldown: Duration) -> Self {
        Self::with_rng(cooldown, fastrand::Rng::new())
    }

    /// Deterministic spawner, for replays and tests.
    pub fn with_seed(cooldown: Duration, seed: u64) -> Self {
        Self::with_rng(cooldown, fastrand::Rng::with_seed(seed))
    }

    fn with_rng(cooldown: Duration, rng: fastrand::Rng) -> Self {
        let mut spawner = Self {
            cooldown: Timer::new(cooldown, TimerMode::Once),
            rng,
        };
        spawner.make_ready();
        spawner
    }

    /// Lets the next tick spawn right away, as at the start of a session.
    pub fn make_ready(&mut self) {
        self.cooldown.reset();
        let duration = self.cooldown.duration();
        self.cooldown.tick(duration);
    }

    /// Advances the cooldown by `delta` and returns a new apple when the
    /// cooldown has run out and fewer than `max_apples` are falling.
    pub fn tick(
        &mut self,
        delta: Duration,
        active: usize,
        config: &GameConfig,
    ) -> Option<FallingApple> {
        self.cooldown.tick(delta);

        if active >= config.max_apples || !self.cooldown.finished() {
            return None;
        }

        self.cooldown.reset();
        Some(self.new_apple(config))
    }

    /// A fresh apple just above the top edge, at a uniformly random column.
    fn new_apple(&mut self, config: &GameConfig) -> FallingApple {
        let max_x = (config.screen.x - config.apple_size.x).max(1.0) as u32;
        let x = self.rng.u32(0..=max_x) as f32;

        let (low, high) = config.initial_speed_jitter;
        let jitter = self.rng.f32().mul_add(high - low, low);
        let drift = self
            .rng
            .f32()
            .mul_add(2.0 * config.max_drift, -config.max_drift);

        FallingApple::new(
            Vec2::new(x, -config.apple_size.y),
            Vec2::new(drift, config.initial_speed * jitter),
            config.apple_size,
        )
    }
}

impl FromWorld for Spawner {
    fn from_world(world: &mut World) -> Self {
        let cooldown = world
            .get_resource::<GameConfig>()
            .map(|config| config.spawn_cooldown)
            .unwrap_or_default();
        Self::new(cooldown)
    }
}

/// Drops a new apple when the spawner allows it
pub fn spawn_apples(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    config: Res<GameConfig>,
    session: Res<Session>,
    mut spawner: ResMut<Spawner>,
    apple_query: Query<(), With<FallingApple>>,
) {
    if session.is_over() {
        return;
    }

    if let Some(apple) = spawner.tick(time.timestep(), apple_query.iter().count(), &config) {
        commands.spawn((apple, SessionEntity));
    }
}
