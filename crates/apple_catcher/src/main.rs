use bevy::app::AppExit;

fn main() -> AppExit {
    apple_catcher::run()
}
