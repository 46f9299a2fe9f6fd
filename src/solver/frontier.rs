use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use crate::state::State;

#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode {
    pub(crate) state: State,
    pub(crate) prev: Option<State>,
    pub(crate) dist: u16,
    pub(crate) cost: u16,
}

impl SearchNode {
    pub(crate) fn new(state: State, prev: Option<State>, dist: u16, h: u16) -> Self {
        Self {
            state,
            prev,
            dist,
            cost: dist + h,
        }
    }
}

/// Nodes waiting to be expanded - the order they come out in is the only
/// thing that differs between the search methods
pub(crate) trait Frontier {
    fn push(&mut self, node: SearchNode);

    fn pop(&mut self) -> Option<SearchNode>;
}

/// LIFO - depth first
#[derive(Debug, Default)]
pub(crate) struct Stack(Vec<SearchNode>);

impl Frontier for Stack {
    fn push(&mut self, node: SearchNode) {
        self.0.push(node);
    }

    fn pop(&mut self) -> Option<SearchNode> {
        self.0.pop()
    }
}

/// FIFO - breadth first
#[derive(Debug, Default)]
pub(crate) struct Queue(VecDeque<SearchNode>);

impl Frontier for Queue {
    fn push(&mut self, node: SearchNode) {
        self.0.push_back(node);
    }

    fn pop(&mut self) -> Option<SearchNode> {
        self.0.pop_front()
    }
}

/// Lowest cost first, nodes with equal cost come out in insertion order.
///
/// Same order as keeping a queue and stably sorting it by cost after every push.
#[derive(Debug, Default)]
pub(crate) struct PriorityQueue {
    heap: BinaryHeap<Reverse<Prioritized>>,
    next_seq: u32,
}

impl Frontier for PriorityQueue {
    fn push(&mut self, node: SearchNode) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Prioritized { seq, node }));
    }

    fn pop(&mut self) -> Option<SearchNode> {
        self.heap.pop().map(|Reverse(prioritized)| prioritized.node)
    }
}

#[derive(Debug)]
struct Prioritized {
    seq: u32,
    node: SearchNode,
}

impl Prioritized {
    fn key(&self) -> (u16, u32) {
        (self.node.cost, self.seq)
    }
}

impl PartialEq for Prioritized {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Prioritized {}

impl PartialOrd for Prioritized {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Prioritized {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}
