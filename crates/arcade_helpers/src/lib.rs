mod app;
pub use app::*;

pub mod art;
pub mod welcome_screen;
