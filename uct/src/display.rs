use std::fmt::{self, Display, Formatter};

use engine::Game;

use super::node::{Node, NodeId};
use super::search_tree::SearchTree;

impl<M: Display> Display for Node<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.action() {
            Some(action) => write!(f, "{}", action)?,
            None => write!(f, "root")?,
        }

        write!(
            f,
            " score: {score} children: {children} weight: {weight}",
            score = self.score(),
            children = self.children().len(),
            weight = self.expansion_weight(),
        )
    }
}

/// Pre-order dump of the whole tree, one node per line, indented by depth.
impl<G: Game> Display for SearchTree<G> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_node(f, self.root_id(), 0)
    }
}

impl<G: Game> SearchTree<G> {
    fn fmt_node(&self, f: &mut Formatter<'_>, id: NodeId, level: usize) -> fmt::Result {
        let node = self.node(id);

        writeln!(f, "{}{}", "| ".repeat(level), node)?;

        for &child in node.children() {
            self.fmt_node(f, child, level + 1)?;
        }

        Ok(())
    }
}
