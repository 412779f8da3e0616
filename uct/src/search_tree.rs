use std::marker::PhantomData;

use anyhow::{anyhow, Result};
use engine::{Game, Player};
use generational_arena::Arena;
use itertools::{Itertools, MinMaxResult};
use log::{debug, error};

use super::node::{Node, NodeId};

/// A search tree grown one frontier at a time.
///
/// Every call to [`SearchTree::grow`] replays a single path from the root on a fresh
/// game state, expands the frontier at the end of that path with all of its legal
/// moves, and then recomputes the scores along the path using a min/max rule keyed
/// on the player of each node.
pub struct SearchTree<G: Game> {
    arena: Arena<Node<G::Move>>,
    root: NodeId,
    _marker: PhantomData<fn() -> G>,
}

impl<G: Game> SearchTree<G> {
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = NodeId(arena.insert(Node::root()));

        Self {
            arena,
            root,
            _marker: PhantomData,
        }
    }

    /// Performs one selection, expansion and backpropagation step.
    ///
    /// Returns the depth of the frontier that was expanded, the root being at depth 0.
    /// If the game reports no moves for the selected frontier the tree is left untouched
    /// and an error is returned.
    pub fn grow(&mut self) -> Result<usize> {
        let mut game = G::initial();
        let path = self.select_path(&mut game);
        let frontier = *path
            .last()
            .ok_or_else(|| anyhow!("Selected path does not contain the root"))?;
        let depth = path.len() - 1;

        let moves = game.extend();
        if moves.is_empty() {
            error!(
                "Game produced no moves for the frontier at depth {}. Games must always provide at least one move.",
                depth
            );
            return Err(anyhow!(
                "Game produced no moves for the frontier at depth {}",
                depth
            ));
        }

        let branching = moves.len();
        self.expand(frontier, moves);

        for &id in &path {
            self.node_mut(id).add_expansion_weight(branching as f32);
        }

        self.backpropagate(&path);

        debug!(
            "Expanded frontier at depth {} with {} children, tree size {}, root score {}",
            depth,
            branching,
            self.len(),
            self.root().score()
        );

        Ok(depth)
    }

    /// Grows the tree `count` times, returning the deepest frontier expanded.
    pub fn grow_n(&mut self, count: usize) -> Result<usize> {
        let mut max_depth = 0;

        for _ in 0..count {
            max_depth = max_depth.max(self.grow()?);
        }

        Ok(max_depth)
    }

    /// Descends from the root to a frontier, applying each chosen move to `game`.
    /// The returned path starts with the root and ends with the frontier.
    pub fn select_path(&self, game: &mut G) -> Vec<NodeId> {
        let mut node_id = self.root;
        let mut path = vec![node_id];

        while let Some(child_id) = self.select_child(node_id) {
            if let Some(action) = self.node(child_id).action() {
                game.make_move(action);
            }

            path.push(child_id);
            node_id = child_id;
        }

        path
    }

    pub fn root_id(&self) -> NodeId {
        self.root
    }

    pub fn root(&self) -> &Node<G::Move> {
        self.node(self.root)
    }

    pub fn node(&self, id: NodeId) -> &Node<G::Move> {
        &self.arena[id.0]
    }

    /// Total number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Depth of the deepest node, the root being at depth 0.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self.root, 0)];

        while let Some((id, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            stack.extend(self.node(id).children().iter().map(|&c| (c, depth + 1)));
        }

        max_depth
    }

    /// The line of play the backpropagated scores currently expect: from the root,
    /// follow the first child whose score matches its parent's score.
    pub fn principal_variation(&self) -> Vec<&G::Move> {
        let mut moves = vec![];
        let mut node = self.root();

        loop {
            let score = node.score();
            let Some(&child_id) = node
                .children()
                .iter()
                .find(|&&c| self.node(c).score() == score)
            else {
                break;
            };

            node = self.node(child_id);
            if let Some(action) = node.action() {
                moves.push(action);
            }
        }

        moves
    }

    /// The first move of the principal variation, if the root has been expanded.
    pub fn best_move(&self) -> Option<&G::Move> {
        self.principal_variation().first().copied()
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<G::Move> {
        &mut self.arena[id.0]
    }

    fn expand(&mut self, frontier: NodeId, moves: Vec<G::Move>) {
        let children = moves
            .into_iter()
            .map(|action| NodeId(self.arena.insert(Node::new(action))))
            .collect();

        self.node_mut(frontier).set_children(children);
    }

    fn backpropagate(&mut self, path: &[NodeId]) {
        for &id in path.iter().rev() {
            let node = self.node(id);
            let scores = node.children().iter().map(|&c| self.node(c).score());

            let score = match scores.minmax_by(|a, b| a.total_cmp(b)) {
                MinMaxResult::OneElement(score) => score,
                MinMaxResult::MinMax(min, max) => match node.player() {
                    Player::First => min,
                    Player::Second => max,
                },
                MinMaxResult::NoElements => continue,
            };

            self.node_mut(id).set_score(score);
        }
    }
}

impl<G: Game> Default for SearchTree<G> {
    fn default() -> Self {
        Self::new()
    }
}
