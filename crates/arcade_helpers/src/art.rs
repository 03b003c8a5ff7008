//! Visuals that come from an image on disk when one is shipped, and from
//! procedurally built meshes otherwise.
//!
//! The choice is made once, when the [`Art`] is constructed. Every entity the
//! art is attached to afterwards gets the same kind of visual.

use bevy::asset::io::file::FileAssetReader;
use bevy::prelude::*;

/// Directory, relative to the asset root, the [`AssetPlugin`] reads from.
pub const ASSETS_DIR: &str = "assets";

/// Font used for all text when it is present on disk.
pub const FONT: &str = "fonts/FiraSans-Bold.ttf";

/// Returns true if `path` names a regular file inside the asset directory.
pub fn asset_exists(path: &str) -> bool {
    FileAssetReader::get_base_path()
        .join(ASSETS_DIR)
        .join(path)
        .is_file()
}

/// Loads [`FONT`], or hands back Bevy's embedded default font if it is missing.
pub fn load_font(asset_server: &AssetServer) -> Handle<Font> {
    if asset_exists(FONT) {
        asset_server.load(FONT)
    } else {
        info!("{FONT} not found, using the default font");
        Handle::default()
    }
}

/// One mesh of a procedural drawing, placed relative to the owning entity.
#[derive(Clone)]
pub struct ShapeLayer {
    pub mesh: Handle<Mesh>,
    pub material: Handle<ColorMaterial>,
    pub offset: Vec3,
    pub angle: f32,
}

impl ShapeLayer {
    pub fn new(
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<ColorMaterial>,
        mesh: impl Into<Mesh>,
        color: Color,
        offset: Vec2,
    ) -> Self {
        Self {
            mesh: meshes.add(mesh),
            material: materials.add(ColorMaterial::from(color)),
            offset: offset.extend(0.0),
            angle: 0.0,
        }
    }

    /// Turns the layer by `angle` radians around its own origin.
    pub const fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }
}

/// Something drawable, decided at construction time.
#[derive(Clone)]
pub enum Art {
    /// A texture loaded from the asset directory.
    Image(Handle<Image>),
    /// A stack of meshes drawn back to front.
    Shapes(Vec<ShapeLayer>),
}

impl Art {
    /// Loads `path` if it is shipped, otherwise builds the fallback drawing.
    pub fn load_or_else<F>(asset_server: &AssetServer, path: &str, fallback: F) -> Self
    where
        F: FnOnce() -> Vec<ShapeLayer>,
    {
        if asset_exists(path) {
            Self::Image(asset_server.load(path.to_owned()))
        } else {
            info!("{path} not found, drawing it procedurally");
            Self::Shapes(fallback())
        }
    }

    /// Gives `entity` this visual. Images are stretched to `size`; shapes are
    /// already built at their final size.
    pub fn attach(&self, commands: &mut Commands, entity: Entity, size: Vec2) {
        let mut entity_commands = commands.entity(entity);
        match self {
            Self::Image(image) => {
                entity_commands.insert(Sprite {
                    image: image.clone(),
                    custom_size: Some(size),
                    ..default()
                });
            }
            Self::Shapes(layers) => {
                entity_commands
                    .insert_if_new((Transform::default(), Visibility::default()))
                    .with_children(|parent| {
                        for (depth, layer) in layers.iter().enumerate() {
                            // Later layers draw on top of earlier ones.
                            let offset = layer.offset + Vec3::Z * (depth as f32 * 0.001);
                            parent.spawn((
                                Mesh2d(layer.mesh.clone()),
                                MeshMaterial2d(layer.material.clone()),
                                Transform::from_translation(offset)
                                    .with_rotation(Quat::from_rotation_z(layer.angle)),
                            ));
                        }
                    });
            }
        }
    }
}
