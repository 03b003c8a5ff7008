use bevy::prelude::*;

/// Size of a menu button, in logical pixels.
pub const BUTTON_SIZE: Vec2 = Vec2::new(200.0, 50.0);

#[derive(Component)]
pub struct WelcomeScreenElement;

/// Spawns a rounded, outlined button with a centered label under `parent`.
pub fn spawn_menu_button(
    parent: &mut ChildBuilder,
    font: Handle<Font>,
    label: &str,
    color: Color,
    marker: impl Bundle,
) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(BUTTON_SIZE.x),
                height: Val::Px(BUTTON_SIZE.y),
                margin: UiRect::vertical(Val::Px(10.0)),
                border: UiRect::all(Val::Px(2.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(color),
            BorderColor(Color::BLACK),
            BorderRadius::all(Val::Px(10.0)),
            marker,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(label),
                TextFont {
                    font,
                    font_size: 32.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

pub fn despawn_welcome_screen(
    mut commands: Commands,
    welcome_elements: Query<Entity, With<WelcomeScreenElement>>,
) {
    for entity in welcome_elements.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
