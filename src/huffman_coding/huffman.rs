use log::{debug, trace};

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{HuffError, Result};
use crate::tools::freq_count::FreqTable;
use crate::tools::symbol_map::Symbol;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData<S> {
    Kids(Box<Node<S>>, Box<Node<S>>),
    Leaf(S),
}
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node<S> {
    /// Sum of the frequencies of every leaf below (or at) this node
    pub weight: usize,
    /// Longest path from this node down to a leaf
    pub depth: u32,
    pub node_data: NodeData<S>,
}
impl<S> Node<S> {
    /// Create a new node
    pub fn new(weight: usize, depth: u32, node_data: NodeData<S>) -> Node<S> {
        Node {
            weight,
            depth,
            node_data,
        }
    }

    /// Create a leaf holding one symbol
    pub fn leaf(sym: S, weight: usize) -> Node<S> {
        Node::new(weight, 0, NodeData::Leaf(sym))
    }

    /// Join two subtrees under a new internal node
    pub fn merge(left: Node<S>, right: Node<S>) -> Node<S> {
        Node::new(
            left.weight + right.weight,
            left.depth.max(right.depth) + 1,
            NodeData::Kids(Box::new(left), Box::new(right)),
        )
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }

    /// Number of symbols in this subtree
    pub fn leaf_count(&self) -> usize {
        match &self.node_data {
            NodeData::Kids(left, right) => left.leaf_count() + right.leaf_count(),
            NodeData::Leaf(_) => 1,
        }
    }
}

/// Heap entry. `seq` is the order in which the node entered the working set and
/// breaks weight ties, so the same frequencies always give the same tree.
struct Queued<S> {
    weight: usize,
    seq: usize,
    node: Node<S>,
}
impl<S> PartialEq for Queued<S> {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}
impl<S> Eq for Queued<S> {}
impl<S> Ord for Queued<S> {
    /// Reversed so that BinaryHeap pops the lightest, oldest node first
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl<S> PartialOrd for Queued<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the huffman tree for a frequency table by repeatedly merging the two lightest nodes.
/// Leaves enter the working set ordered by (weight, symbol); merged nodes follow in creation order.
pub fn build_tree<S: Symbol>(freqs: &FreqTable<S>) -> Result<Node<S>> {
    if freqs.is_empty() {
        return Err(HuffError::EmptyInput);
    }

    let mut leaves = freqs.iter().map(|(&s, &w)| (s, w)).collect::<Vec<_>>();
    leaves.sort_unstable_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));

    let mut heap = leaves
        .into_iter()
        .enumerate()
        .map(|(seq, (sym, weight))| Queued {
            weight,
            seq,
            node: Node::leaf(sym, weight),
        })
        .collect::<BinaryHeap<_>>();
    let mut seq = heap.len();

    loop {
        // The table was not empty, so the first pop always succeeds.
        let left = heap.pop().ok_or(HuffError::EmptyInput)?;
        let right = match heap.pop() {
            Some(right) => right,
            None => {
                debug!(
                    "Built code tree: {} symbols, weight {}, depth {}",
                    left.node.leaf_count(),
                    left.weight,
                    left.node.depth
                );
                return Ok(left.node);
            }
        };
        trace!("Merging weights {} and {}", left.weight, right.weight);
        let node = Node::merge(left.node, right.node);
        heap.push(Queued {
            weight: node.weight,
            seq,
            node,
        });
        seq += 1;
    }
}
