use std::fmt::Display;

use super::player::Player;

/// A move produced by a game, already carrying the static evaluation of the
/// position it leads to.
pub trait Move: Display {
    fn player(&self) -> Player;
    fn score(&self) -> f32;
}

/// The rules of a concrete game as seen by the search tree.
///
/// A fresh state is created for every growth step and advanced in place while the
/// tree is descended, so `make_move` must observe the same player alternation that
/// `extend` reports.
pub trait Game: Sized {
    type Move: Move;

    /// Weight of the exploration bonus used during child selection.
    const EXPLORE_FACTOR: f32;

    fn initial() -> Self;
    fn make_move(&mut self, action: &Self::Move);

    /// Legal moves from the current position. Must never be empty.
    fn extend(&self) -> Vec<Self::Move>;
}
