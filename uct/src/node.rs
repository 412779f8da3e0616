use engine::{Move, Player};
use generational_arena::Index;

/// Handle to a node owned by a `SearchTree`.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct NodeId(pub(crate) Index);

/// The position reached after playing `action`.
///
/// The root has no action; it is attributed to `Player::Second` with a score of zero so
/// that the first real move belongs to `Player::First`.
#[derive(Debug)]
pub struct Node<M> {
    action: Option<M>,
    player: Player,
    score: f32,
    children: Vec<NodeId>,
    expansion_weight: f32,
}

impl<M> Node<M> {
    pub(crate) fn root() -> Self {
        Self {
            action: None,
            player: Player::Second,
            score: 0.0,
            children: Vec::new(),
            expansion_weight: 0.0,
        }
    }

    pub fn action(&self) -> Option<&M> {
        self.action.as_ref()
    }

    /// The player who made the move leading to this node.
    pub fn player(&self) -> Player {
        self.player
    }

    pub fn score(&self) -> f32 {
        self.score
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Sum of the branching factors of every expansion whose path passed through this node.
    pub fn expansion_weight(&self) -> f32 {
        self.expansion_weight
    }

    pub fn is_frontier(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn set_score(&mut self, score: f32) {
        self.score = score;
    }

    pub(crate) fn set_children(&mut self, children: Vec<NodeId>) {
        debug_assert!(self.children.is_empty(), "Node was already expanded");
        self.children = children;
    }

    pub(crate) fn add_expansion_weight(&mut self, weight: f32) {
        self.expansion_weight += weight;
    }
}

impl<M: Move> Node<M> {
    pub(crate) fn new(action: M) -> Self {
        Self {
            player: action.player(),
            score: action.score(),
            action: Some(action),
            children: Vec::new(),
            expansion_weight: 0.0,
        }
    }
}
