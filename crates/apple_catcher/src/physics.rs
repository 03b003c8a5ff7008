use bevy::prelude::*;

use crate::core::{Basket, FallingApple, GameConfig, Session};

/// Horizontal movement keys held during a tick
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct MoveInput {
    pub left: bool,
    pub right: bool,
}

impl MoveInput {
    pub fn from_keys(keys: &ButtonInput<KeyCode>) -> Self {
        Self {
            left: keys.any_pressed([KeyCode::ArrowLeft, KeyCode::KeyA]),
            right: keys.any_pressed([KeyCode::ArrowRight, KeyCode::KeyD]),
        }
    }
}

impl FallingApple {
    /// Advances the apple by one tick: gravity capped at terminal velocity,
    /// then drift, then wrap around the side edges.
    pub fn update(&mut self, config: &GameConfig) {
        self.velocity.y = (self.velocity.y + config.gravity).min(config.terminal_velocity);
        self.position += self.velocity;

        let direction = if self.velocity.x > 0.0 { 1.0 } else { -1.0 };
        self.spin = config.spin_degrees.mul_add(direction, self.spin) % 360.0;

        let width = config.screen.x;
        if self.position.x + self.size.x < 0.0 {
            self.position.x = width;
        } else if self.position.x > width {
            self.position.x = -self.size.x;
        }
    }
}

impl Basket {
    /// Moves by `speed` per held direction and keeps the basket on screen.
    pub fn update(&mut self, input: MoveInput, screen_width: f32) {
        if input.left {
            self.x -= self.speed;
        }
        if input.right {
            self.x += self.speed;
        }
        self.x = self.x.clamp(0.0, screen_width - self.size.x);
    }
}

/// Steers the basket from the keyboard
pub fn move_basket(
    keys: Res<ButtonInput<KeyCode>>,
    config: Res<GameConfig>,
    session: Res<Session>,
    mut basket_query: Query<&mut Basket>,
) {
    if session.is_over() {
        return;
    }

    let Ok(mut basket) = basket_query.get_single_mut() else {
        return;
    };

    basket.update(MoveInput::from_keys(&keys), config.screen.x);
}

/// Applies one physics step to every apple
pub fn fall_apples(
    config: Res<GameConfig>,
    session: Res<Session>,
    mut apple_query: Query<&mut FallingApple>,
) {
    if session.is_over() {
        return;
    }

    for mut apple in &mut apple_query {
        apple.update(&config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple_at(position: Vec2, velocity: Vec2) -> FallingApple {
        FallingApple::new(position, velocity, Vec2::splat(60.0))
    }

    #[test]
    fn velocity_grows_by_gravity_until_terminal() {
        let config = GameConfig::default();
        let mut apple = apple_at(Vec2::new(100.0, 0.0), Vec2::new(0.1, 0.6));

        for _ in 0..200 {
            let before = apple.velocity.y;
            apple.update(&config);
            let expected = (before + config.gravity).min(config.terminal_velocity);
            assert!(
                (apple.velocity.y - expected).abs() < 1e-6,
                "vy {} should be {expected}",
                apple.velocity.y
            );
        }
        assert_eq!(
            apple.velocity.y, config.terminal_velocity,
            "200 ticks is plenty to reach terminal velocity"
        );
    }

    #[test]
    fn position_advances_by_velocity() {
        let config = GameConfig::default();
        let mut apple = apple_at(Vec2::new(100.0, -60.0), Vec2::new(-0.25, 1.0));
        apple.update(&config);

        assert!(
            (apple.position - Vec2::new(99.75, -58.95)).length() < 1e-4,
            "moved to {:?}",
            apple.position
        );
    }

    #[test]
    fn apples_wrap_around_the_side_edges() {
        let config = GameConfig::default();

        let mut leaving_left = apple_at(Vec2::new(-59.9, 100.0), Vec2::new(-0.3, 1.0));
        leaving_left.update(&config);
        assert_eq!(
            leaving_left.position.x, config.screen.x,
            "fully off the left edge reappears at the right edge"
        );

        let mut leaving_right = apple_at(Vec2::new(799.9, 100.0), Vec2::new(0.3, 1.0));
        leaving_right.update(&config);
        assert_eq!(
            leaving_right.position.x, -60.0,
            "past the right edge reappears with its right side at zero"
        );

        let mut partly_off = apple_at(Vec2::new(-30.0, 100.0), Vec2::new(-0.3, 1.0));
        partly_off.update(&config);
        assert!(
            partly_off.position.x < 0.0,
            "a partly visible apple keeps drifting"
        );
    }

    #[test]
    fn spin_follows_drift_direction() {
        let config = GameConfig::default();
        let mut right = apple_at(Vec2::new(100.0, 0.0), Vec2::new(0.2, 1.0));
        let mut left = apple_at(Vec2::new(100.0, 0.0), Vec2::new(-0.2, 1.0));
        right.update(&config);
        left.update(&config);

        assert!(right.spin > 0.0, "drifting right spins counter-clockwise");
        assert!(left.spin < 0.0, "drifting left spins clockwise");
    }

    #[test]
    fn basket_stays_on_screen() {
        let config = GameConfig::default();
        let mut basket = Basket::new(&config);
        let left = MoveInput {
            left: true,
            right: false,
        };
        let right = MoveInput {
            left: false,
            right: true,
        };

        for _ in 0..500 {
            basket.update(left, config.screen.x);
            assert!(basket.x >= 0.0, "basket left the screen at {}", basket.x);
        }
        assert_eq!(basket.x, 0.0, "basket should rest against the left edge");

        for _ in 0..500 {
            basket.update(right, config.screen.x);
            assert!(
                basket.x <= config.screen.x - basket.size.x,
                "basket left the screen at {}",
                basket.x
            );
        }
        assert_eq!(basket.x, 650.0, "basket should rest against the right edge");
    }

    #[test]
    fn opposing_keys_cancel_out() {
        let config = GameConfig::default();
        let mut basket = Basket::new(&config);
        let start = basket.x;
        basket.update(
            MoveInput {
                left: true,
                right: true,
            },
            config.screen.x,
        );

        assert_eq!(basket.x, start, "both keys held should not move the basket");
    }

    #[test]
    fn arrow_keys_and_letters_both_steer() {
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::KeyA);
        assert_eq!(
            MoveInput::from_keys(&keys),
            MoveInput {
                left: true,
                right: false
            },
            "A steers left"
        );

        keys.press(KeyCode::ArrowRight);
        assert_eq!(
            MoveInput::from_keys(&keys),
            MoveInput {
                left: true,
                right: true
            },
            "arrow right steers right"
        );
    }
}
