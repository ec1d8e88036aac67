//! Backward-linked search trace.
//!
//! Every node reached during a search lives in one arena and points at its
//! predecessor by index. The structure is a tree rooted at the start state:
//! the visited set guarantees each state is materialized at most once.

use super::path::{Path, Step};
use crate::core::State;
use std::collections::HashSet;

/// Index of a node inside the [`Trace`] that created it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(usize);

/// One step of the trace: where we are and how we got here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceNode {
    /// State reached at this node
    pub state: State,
    /// Button pushed to reach it, `None` for the root
    pub pushed: Option<usize>,
    /// Predecessor, `None` for the root
    pub prev: Option<NodeId>,
}

/// Outcome of expanding one node under a transition limit.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Expansion {
    /// Newly reached nodes, in ascending button order
    pub children: Vec<NodeId>,
    /// Set when an unvisited successor was left out because the limit was reached
    pub truncated: bool,
}

/// Arena of trace nodes.
///
/// `NodeId`s are only meaningful for the trace that issued them.
#[derive(Clone, Debug, Default)]
pub struct Trace {
    nodes: Vec<TraceNode>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root node with no button and no predecessor.
    pub fn root(&mut self, state: State) -> NodeId {
        self.insert(TraceNode {
            state,
            pushed: None,
            prev: None,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &TraceNode {
        &self.nodes[id.0]
    }

    /// One-step extensions of `parent` that lead to unseen states.
    ///
    /// Buttons are tried in ascending order. Each new state is added to
    /// `visited` as soon as it is produced, so siblings never duplicate
    /// each other.
    pub fn next(&mut self, parent: NodeId, visited: &mut HashSet<State>) -> Vec<NodeId> {
        self.next_within(parent, visited, usize::MAX).children
    }

    /// Like [`Trace::next`], but materializes at most `limit` new nodes.
    ///
    /// A successor that would exceed the limit is neither recorded nor
    /// marked visited.
    pub fn next_within(
        &mut self,
        parent: NodeId,
        visited: &mut HashSet<State>,
        limit: usize,
    ) -> Expansion {
        let state = self.node(parent).state.clone();
        let mut expansion = Expansion::default();
        for button in state.buttons() {
            let next = state.step(button);
            if visited.contains(&next) {
                continue;
            }
            if expansion.children.len() == limit {
                expansion.truncated = true;
                break;
            }
            visited.insert(next.clone());
            expansion.children.push(self.insert(TraceNode {
                state: next,
                pushed: Some(button),
                prev: Some(parent),
            }));
        }
        expansion
    }

    /// Nodes from `id` back to the root, following predecessor links.
    pub fn ancestry(&self, id: NodeId) -> impl Iterator<Item = &TraceNode> + '_ {
        std::iter::successors(Some(self.node(id)), move |node| {
            node.prev.map(|prev| self.node(prev))
        })
    }

    /// Root-first path ending at `id`.
    pub fn path_to(&self, id: NodeId) -> Path {
        let mut steps: Vec<Step> = self
            .ancestry(id)
            .map(|node| Step {
                button: node.pushed,
                state: node.state.clone(),
            })
            .collect();
        steps.reverse();
        Path::new(steps)
    }

    fn insert(&mut self, node: TraceNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }
}
