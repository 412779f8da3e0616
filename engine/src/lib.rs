pub mod game;
pub mod player;

pub use crate::game::*;
pub use crate::player::*;
