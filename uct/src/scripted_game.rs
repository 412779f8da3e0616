use std::fmt::{self, Display, Formatter};

use engine::{Game, Move, Player};

#[derive(Clone, PartialEq, Debug)]
pub struct ScriptedMove {
    name: &'static str,
    player: Player,
    score: f32,
}

impl ScriptedMove {
    pub fn new(name: &'static str, player: Player, score: f32) -> Self {
        Self {
            name,
            player,
            score,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Move for ScriptedMove {
    fn player(&self) -> Player {
        self.player
    }

    fn score(&self) -> f32 {
        self.score
    }
}

impl Display for ScriptedMove {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.name, self.player, self.score)
    }
}

/// Every position offers `A` (first player, 10) and `B` (second player, -5).
pub struct PairGame;

impl Game for PairGame {
    type Move = ScriptedMove;

    const EXPLORE_FACTOR: f32 = 2.0;

    fn initial() -> Self {
        Self
    }

    fn make_move(&mut self, _action: &Self::Move) {}

    fn extend(&self) -> Vec<Self::Move> {
        vec![
            ScriptedMove::new("A", Player::First, 10.0),
            ScriptedMove::new("B", Player::Second, -5.0),
        ]
    }
}

pub const SINGLE_SCORE: f32 = 0.1 + 0.2;

/// Every position offers exactly one move.
pub struct SingleGame {
    to_move: Player,
}

impl Game for SingleGame {
    type Move = ScriptedMove;

    const EXPLORE_FACTOR: f32 = 2.0;

    fn initial() -> Self {
        Self {
            to_move: Player::First,
        }
    }

    fn make_move(&mut self, _action: &Self::Move) {
        self.to_move = self.to_move.opponent();
    }

    fn extend(&self) -> Vec<Self::Move> {
        vec![ScriptedMove::new("only", self.to_move, SINGLE_SCORE)]
    }
}

/// Three identically scored moves everywhere.
pub struct TiedGame {
    to_move: Player,
}

impl Game for TiedGame {
    type Move = ScriptedMove;

    const EXPLORE_FACTOR: f32 = 1.5;

    fn initial() -> Self {
        Self {
            to_move: Player::First,
        }
    }

    fn make_move(&mut self, _action: &Self::Move) {
        self.to_move = self.to_move.opponent();
    }

    fn extend(&self) -> Vec<Self::Move> {
        ["X", "Y", "Z"]
            .into_iter()
            .map(|name| ScriptedMove::new(name, self.to_move, 1.0))
            .collect()
    }
}

/// Offers two moves from the initial position and nothing afterwards, which breaks the
/// contract that a frontier always has moves.
pub struct DeadEndGame {
    moves_made: usize,
}

impl Game for DeadEndGame {
    type Move = ScriptedMove;

    const EXPLORE_FACTOR: f32 = 2.0;

    fn initial() -> Self {
        Self { moves_made: 0 }
    }

    fn make_move(&mut self, _action: &Self::Move) {
        self.moves_made += 1;
    }

    fn extend(&self) -> Vec<Self::Move> {
        if self.moves_made == 0 {
            vec![
                ScriptedMove::new("A", Player::First, 3.0),
                ScriptedMove::new("B", Player::First, 4.0),
            ]
        } else {
            vec![]
        }
    }
}

/// A counter that either player may increment, decrement or leave alone. Each move is
/// scored by the count it leads to.
pub struct CountingGame {
    to_move: Player,
    count: i32,
    moves_made: usize,
}

impl CountingGame {
    pub fn moves_made(&self) -> usize {
        self.moves_made
    }

    fn delta(action: &ScriptedMove) -> i32 {
        match action.name() {
            "increment" => 1,
            "decrement" => -1,
            _ => 0,
        }
    }
}

impl Game for CountingGame {
    type Move = ScriptedMove;

    const EXPLORE_FACTOR: f32 = 1.0;

    fn initial() -> Self {
        Self {
            to_move: Player::First,
            count: 0,
            moves_made: 0,
        }
    }

    fn make_move(&mut self, action: &Self::Move) {
        assert_eq!(action.player(), self.to_move, "Moves must alternate");
        self.count += Self::delta(action);
        self.to_move = self.to_move.opponent();
        self.moves_made += 1;
    }

    fn extend(&self) -> Vec<Self::Move> {
        ["increment", "decrement", "stay"]
            .into_iter()
            .map(|name| {
                let action = ScriptedMove::new(name, self.to_move, 0.0);
                let score = (self.count + Self::delta(&action)) as f32 / 10.0;
                ScriptedMove::new(name, self.to_move, score)
            })
            .collect()
    }
}
