mod display;
mod node;
#[cfg(test)]
mod scripted_game;
mod search_tree;
mod selection;

pub use node::*;
pub use search_tree::*;
pub use selection::*;
