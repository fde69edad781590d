mod menu;
mod state;

pub use state::{AppState, InputAction};
