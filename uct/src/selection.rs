use engine::{Game, Player};
use log::trace;

use super::node::NodeId;
use super::search_tree::SearchTree;

/// A child's score plus the exploration bonus.
///
/// `log_parent_weight` is the natural log of the parent's expansion weight. The child's
/// weight must be positive, which holds for any child that has been expanded.
pub fn combined_score(
    child_score: f32,
    child_weight: f32,
    log_parent_weight: f32,
    explore_factor: f32,
) -> f32 {
    child_score + explore_factor * (log_parent_weight / child_weight).sqrt()
}

impl<G: Game> SearchTree<G> {
    /// The combined score of `child` as seen from `parent` during selection.
    pub fn combined_score(&self, parent: NodeId, child: NodeId) -> f32 {
        let child = self.node(child);

        combined_score(
            child.score(),
            child.expansion_weight(),
            self.node(parent).expansion_weight().ln(),
            G::EXPLORE_FACTOR,
        )
    }

    /// Picks the child to descend into, or `None` if `parent` is a frontier.
    ///
    /// Frontier children are taken first, in order. Otherwise the child with the highest
    /// combined score is chosen when the parent's move belongs to the first player and the
    /// lowest when it belongs to the second. Ties keep the earlier child.
    pub fn select_child(&self, parent: NodeId) -> Option<NodeId> {
        let parent_node = self.node(parent);
        let children = parent_node.children();

        // Unexpanded children have no weight yet and must never reach the formula.
        if let Some(&frontier) = children.iter().find(|&&c| self.node(c).is_frontier()) {
            trace!("Selected unexpanded child {:?} of {:?}", frontier, parent);
            return Some(frontier);
        }

        let (&first, rest) = children.split_first()?;
        let log_parent_weight = parent_node.expansion_weight().ln();
        let score_of = |id: NodeId| {
            let child = self.node(id);
            combined_score(
                child.score(),
                child.expansion_weight(),
                log_parent_weight,
                G::EXPLORE_FACTOR,
            )
        };

        let mut selected = first;
        let mut selected_score = score_of(first);

        for &child in rest {
            let score = score_of(child);
            let is_better = match parent_node.player() {
                Player::First => selected_score < score,
                Player::Second => selected_score > score,
            };

            if is_better {
                selected = child;
                selected_score = score;
            }
        }

        trace!(
            "Selected child {:?} of {:?} with combined score {}",
            selected,
            parent,
            selected_score
        );

        Some(selected)
    }
}
