//! The components module contains all shared components for our app.

mod app;
mod icons;
mod song_grid;
mod song_modal;

pub use app::*;
pub use icons::*;
pub use song_grid::*;
pub use song_modal::*;
