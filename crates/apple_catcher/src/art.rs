use std::f32::consts::{FRAC_PI_4, SQRT_2};

use arcade_helpers::art::{Art, ShapeLayer, load_font};
use bevy::prelude::*;

use crate::core::GameConfig;

/// Const equivalent of `Color::srgb_u8`, which is not `const` in this Bevy version
const fn srgb_u8(red: u8, green: u8, blue: u8) -> Color {
    Color::Srgba(Srgba {
        red: red as f32 / 255.0,
        green: green as f32 / 255.0,
        blue: blue as f32 / 255.0,
        alpha: 1.0,
    })
}

pub const SKY_BLUE: Color = srgb_u8(135, 206, 235);
pub const LIGHT_BLUE: Color = srgb_u8(173, 216, 230);
pub const GRASS_GREEN: Color = srgb_u8(34, 139, 34);
pub const BLADE_GREEN: Color = srgb_u8(0, 100, 0);
pub const BUTTON_GREEN: Color = srgb_u8(50, 150, 50);
const APPLE_RED: Color = srgb_u8(255, 50, 50);
const APPLE_SHINE: Color = srgb_u8(255, 200, 200);
const BASKET_BROWN: Color = srgb_u8(139, 69, 19);
const HEART_PINK: Color = srgb_u8(255, 105, 180);
const RESTART_BLUE: Color = srgb_u8(70, 130, 180);

pub const LOGO_SIZE: f32 = 100.0;
pub const HEART_SIZE: f32 = 60.0;
pub const RESTART_ICON_SIZE: f32 = 40.0;

/// Every picture the game draws, each either loaded or procedural
#[derive(Resource)]
pub struct GameArt {
    pub apple: Art,
    pub logo: Art,
    pub basket: Art,
    pub heart_broken: Art,
    pub restart: Art,
    pub font: Handle<Font>,
}

impl FromWorld for GameArt {
    fn from_world(world: &mut World) -> Self {
        let config = world.get_resource::<GameConfig>().cloned().unwrap_or_default();
        let asset_server = world.resource::<AssetServer>().clone();

        world.resource_scope(|world, mut meshes: Mut<Assets<Mesh>>| {
            let mut materials = world.resource_mut::<Assets<ColorMaterial>>();
            let mut shapes = Shapes {
                meshes: &mut *meshes,
                materials: &mut *materials,
            };

            Self {
                apple: Art::load_or_else(&asset_server, "images/apple.png", || {
                    shapes.apple(config.apple_size.x)
                }),
                logo: Art::load_or_else(&asset_server, "images/apple.png", || {
                    shapes.apple(LOGO_SIZE)
                }),
                basket: Art::load_or_else(&asset_server, "images/basket.png", || {
                    shapes.basket(config.basket_size)
                }),
                heart_broken: Art::load_or_else(&asset_server, "images/heart_broken.png", || {
                    shapes.heart_broken(HEART_SIZE)
                }),
                restart: Art::load_or_else(&asset_server, "images/restart.png", || {
                    shapes.restart(RESTART_ICON_SIZE)
                }),
                font: load_font(&asset_server),
            }
        })
    }
}

/// Procedural stand-ins, centered on the entity they are attached to
struct Shapes<'a> {
    meshes: &'a mut Assets<Mesh>,
    materials: &'a mut Assets<ColorMaterial>,
}

impl Shapes<'_> {
    fn layer(&mut self, mesh: impl Into<Mesh>, color: Color, offset: Vec2) -> ShapeLayer {
        ShapeLayer::new(self.meshes, self.materials, mesh, color, offset)
    }

    /// Red disc with a pale highlight up and to the left.
    fn apple(&mut self, size: f32) -> Vec<ShapeLayer> {
        vec![
            self.layer(Circle::new(size / 2.0), APPLE_RED, Vec2::ZERO),
            self.layer(
                Circle::new(size / 6.0),
                APPLE_SHINE,
                Vec2::new(-size / 6.0, size / 6.0),
            ),
        ]
    }

    /// Brown ellipse with a 2px black rim.
    fn basket(&mut self, size: Vec2) -> Vec<ShapeLayer> {
        let half = size / 2.0;
        vec![
            self.layer(Ellipse::new(half.x, half.y), Color::BLACK, Vec2::ZERO),
            self.layer(
                Ellipse::new(half.x - 2.0, half.y - 2.0),
                BASKET_BROWN,
                Vec2::ZERO,
            ),
        ]
    }

    /// Two lobes over a downward point, split by a diagonal crack.
    fn heart_broken(&mut self, size: f32) -> Vec<ShapeLayer> {
        let sixth = size / 6.0;
        vec![
            self.layer(Circle::new(size / 4.0), HEART_PINK, Vec2::new(-sixth, sixth)),
            self.layer(Circle::new(size / 4.0), HEART_PINK, Vec2::new(sixth, sixth)),
            self.layer(
                Triangle2d::new(
                    Vec2::new(-size / 3.0, sixth),
                    Vec2::new(0.0, -size / 2.0),
                    Vec2::new(size / 3.0, sixth),
                ),
                HEART_PINK,
                Vec2::ZERO,
            ),
            self.layer(
                Rectangle::new(size / 3.0 * SQRT_2, 3.0),
                Color::BLACK,
                Vec2::ZERO,
            )
            .with_angle(-FRAC_PI_4),
        ]
    }

    /// Thin blue ring around a white arrow head pointing right.
    fn restart(&mut self, size: f32) -> Vec<ShapeLayer> {
        let radius = size / 2.0 - 5.0;
        let quarter = size / 4.0;
        vec![
            self.layer(
                Annulus::new(radius - 1.0, radius + 1.0),
                RESTART_BLUE,
                Vec2::ZERO,
            ),
            self.layer(
                Triangle2d::new(
                    Vec2::new(0.0, quarter),
                    Vec2::new(0.0, -quarter),
                    Vec2::new(quarter, 0.0),
                ),
                Color::WHITE,
                Vec2::ZERO,
            ),
        ]
    }
}
