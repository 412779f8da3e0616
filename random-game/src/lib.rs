pub mod action;
pub mod game_state;

pub use action::*;
pub use game_state::*;
