//! Single-instance A* search over sliding-tile boards.
//!
//! A [`SearchEngine`] is advanced one expansion at a time with
//! [`SearchEngine::step`], which lets a caller interleave several engines.

use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use crate::puzzle::Board;
use crate::queue::PriorityQueue;

/// Handle of a search node inside one engine's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct SearchNode {
    board: Board,
    moves: usize,
    parent: Option<NodeId>,
}

/// Result of a single [`SearchEngine::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// No goal yet; the engine can be stepped again unless it is exhausted.
    Pending,
    /// A goal board was popped after `moves` slides.
    Goal { moves: usize, node: NodeId },
}

#[derive(Debug)]
pub struct SearchEngine {
    open: PriorityQueue<NodeId>,
    nodes: Vec<SearchNode>,
    /// Board -> node it was first popped from; written once per board.
    predecessors: HashMap<Board, Option<NodeId>>,
    closed: HashSet<Board>,
    expanded: usize,
}

impl SearchEngine {
    pub fn new(initial: Board) -> Self {
        let mut engine = Self {
            open: PriorityQueue::new(),
            nodes: Vec::new(),
            predecessors: HashMap::new(),
            closed: HashSet::new(),
            expanded: 0,
        };

        let priority = initial.distance();
        engine.predecessors.insert(initial.clone(), None);
        let root = engine.alloc(initial, 0, None);
        engine.open.push(priority, root);
        engine
    }

    fn alloc(&mut self, board: Board, moves: usize, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode {
            board,
            moves,
            parent,
        });
        id
    }

    /// Pops the most promising node and expands it.
    ///
    /// # Panics
    ///
    /// Panics if the open set is empty; check [`SearchEngine::is_exhausted`]
    /// first.
    pub fn step(&mut self) -> Step {
        let Some(id) = self.open.pop() else {
            panic!("step called on an exhausted search engine");
        };

        let node = &self.nodes[id.0];
        if self.closed.contains(&node.board) {
            return Step::Pending;
        }

        self.predecessors
            .entry(node.board.clone())
            .or_insert(node.parent);

        if node.board.is_goal() {
            debug!(
                "goal reached at depth {} after {} expansions",
                node.moves, self.expanded
            );
            return Step::Goal {
                moves: node.moves,
                node: id,
            };
        }

        trace!(
            "expanding depth {} with distance {} ({} open)",
            node.moves,
            node.board.distance(),
            self.open.len()
        );

        let moves = node.moves + 1;
        let previous = node.parent.map(|parent| &self.nodes[parent.0].board);
        let successors: Vec<Board> = node
            .board
            .neighbors()
            .filter(|neighbor| previous != Some(neighbor) && !self.closed.contains(neighbor))
            .collect();

        let board = node.board.clone();
        self.closed.insert(board);
        self.expanded += 1;

        for neighbor in successors {
            let priority = neighbor.distance() + moves;
            let child = self.alloc(neighbor, moves, Some(id));
            self.open.push(priority, child);
        }

        if self.open.is_empty() {
            debug!("open set exhausted after {} expansions", self.expanded);
        }
        Step::Pending
    }

    pub fn is_exhausted(&self) -> bool {
        self.open.is_empty()
    }

    /// Number of boards expanded so far.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    pub fn frontier_len(&self) -> usize {
        self.open.len()
    }

    pub fn board(&self, node: NodeId) -> &Board {
        &self.nodes[node.0].board
    }

    pub fn moves(&self, node: NodeId) -> usize {
        self.nodes[node.0].moves
    }

    /// Boards from the initial board to `node`, inclusive, following the
    /// predecessor map.
    pub fn path(&self, node: NodeId) -> Vec<Board> {
        let mut current = self.board(node);
        let mut path = vec![current.clone()];
        while let Some(Some(parent)) = self.predecessors.get(current) {
            current = self.board(*parent);
            path.push(current.clone());
        }
        path.reverse();
        path
    }
}
