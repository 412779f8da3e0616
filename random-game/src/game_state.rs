use engine::{Game, Player};
use rand::Rng;

use super::action::RandomMove;

pub const MIN_MOVES: usize = 2;
pub const MAX_MOVES: usize = 5;
pub const MIN_SCORE: i32 = 10;
pub const MAX_SCORE: i32 = 20;

/// A game with no board: every position offers a random number of moves with random
/// scores, positive when the first player moves and negative for the second.
#[derive(Clone, Debug)]
pub struct RandomGame {
    player_to_move: Player,
}

impl RandomGame {
    pub fn player_to_move(&self) -> Player {
        self.player_to_move
    }
}

impl Game for RandomGame {
    type Move = RandomMove;

    const EXPLORE_FACTOR: f32 = 2.0;

    fn initial() -> Self {
        Self {
            player_to_move: Player::First,
        }
    }

    fn make_move(&mut self, _action: &Self::Move) {
        self.player_to_move = self.player_to_move.opponent();
    }

    fn extend(&self) -> Vec<Self::Move> {
        let mut rng = rand::thread_rng();
        let num_moves = rng.gen_range(MIN_MOVES..=MAX_MOVES);

        (0..num_moves)
            .map(|_| {
                let score = rng.gen_range(MIN_SCORE..=MAX_SCORE) as f32;
                let score = match self.player_to_move {
                    Player::First => score,
                    Player::Second => -score,
                };

                RandomMove::new(self.player_to_move, score)
            })
            .collect()
    }
}
