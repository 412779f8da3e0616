use std::fmt::{self, Display, Formatter};
use std::sync::atomic::{AtomicUsize, Ordering};

use engine::{Move, Player};

static LAST_MOVE_ID: AtomicUsize = AtomicUsize::new(0);

#[derive(Clone, PartialEq, Debug)]
pub struct RandomMove {
    id: usize,
    player: Player,
    score: f32,
}

impl RandomMove {
    /// Creates a move with the next process-wide id.
    pub fn new(player: Player, score: f32) -> Self {
        let id = LAST_MOVE_ID.fetch_add(1, Ordering::Relaxed) + 1;

        Self { id, player, score }
    }

    pub fn id(&self) -> usize {
        self.id
    }
}

impl Move for RandomMove {
    fn player(&self) -> Player {
        self.player
    }

    fn score(&self) -> f32 {
        self.score
    }
}

impl Display for RandomMove {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "move-id: {} player: {} move-score: {}",
            self.id, self.player, self.score
        )
    }
}
