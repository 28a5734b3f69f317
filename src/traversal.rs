//! Depth-first traversal over anything which knows its neighbors.
//!
//! Traversal is restricted to the nodes of the input slice: a neighbor key which names no
//! input node is ignored. Nodes are discovered in the same order as a recursive search which
//! scans the input left to right, starting a new root at each node not yet reached.

use crate::geometry::{Cell, Hex};
use bitvec::bitvec;
use indexmap::IndexMap;
use std::{collections::HashMap, fmt, hash::Hash};
use tracing::debug;

/// A vertex in an implicit graph.
pub trait Node {
    /// Identity of a node. Input nodes sharing a key are the same vertex.
    type Key: Clone + Eq + Hash + fmt::Debug;
    type Neighbors: IntoIterator<Item = Self::Key>;

    fn key(&self) -> Self::Key;

    /// Keys of adjacent nodes, in the order they should be explored.
    fn neighbor_keys(&self) -> Self::Neighbors;
}

impl Node for Hex {
    type Key = Hex;
    type Neighbors = [Hex; 6];

    fn key(&self) -> Hex {
        *self
    }

    fn neighbor_keys(&self) -> [Hex; 6] {
        self.neighbors()
    }
}

impl<P> Node for Cell<P> {
    type Key = Hex;
    type Neighbors = [Hex; 6];

    fn key(&self) -> Hex {
        self.hex()
    }

    fn neighbor_keys(&self) -> [Hex; 6] {
        self.hex().neighbors()
    }
}

impl<T: Node + ?Sized> Node for &T {
    type Key = T::Key;
    type Neighbors = T::Neighbors;

    fn key(&self) -> Self::Key {
        (**self).key()
    }

    fn neighbor_keys(&self) -> Self::Neighbors {
        (**self).neighbor_keys()
    }
}

/// When a node was discovered and finished, and from where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp<K> {
    /// `0` if the node was never reached.
    pub discovery: u32,
    /// `0` if the node was never reached.
    pub finish: u32,
    /// `None` for traversal roots.
    pub predecessor: Option<K>,
}

impl<K> Default for Timestamp<K> {
    fn default() -> Self {
        Timestamp {
            discovery: 0,
            finish: 0,
            predecessor: None,
        }
    }
}

/// Per-key results of [`depth_first_search_timestamped`], in input order.
///
/// A single counter runs across the whole forest, so every discovery and finish time is
/// distinct and within `1..=2 * len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamps<K: Hash + Eq> {
    entries: IndexMap<K, Timestamp<K>>,
}

impl<K: Hash + Eq> Timestamps<K> {
    pub fn get(&self, key: &K) -> Option<&Timestamp<K>> {
        self.entries.get(key)
    }

    pub fn discovery(&self, key: &K) -> Option<u32> {
        self.get(key).map(|stamp| stamp.discovery)
    }

    pub fn finish(&self, key: &K) -> Option<u32> {
        self.get(key).map(|stamp| stamp.finish)
    }

    /// The node from which `key` was discovered, or `None` for roots and unknown keys.
    pub fn predecessor(&self, key: &K) -> Option<&K> {
        self.get(key).and_then(|stamp| stamp.predecessor.as_ref())
    }

    /// Keys which started a new traversal tree, in discovery order.
    pub fn roots(&self) -> impl Iterator<Item = &K> {
        self.entries
            .iter()
            .filter(|(_, stamp)| stamp.predecessor.is_none())
            .map(|(key, _)| key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every input key, in input order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &Timestamp<K>)> {
        self.entries.iter()
    }
}

/// Visit every node of `nodes` exactly once, depth first.
pub fn depth_first_search<N: Node>(nodes: &[N], mut visit: impl FnMut(&N)) {
    walk(nodes, |event| {
        if let Event::Discover { node, .. } = event {
            visit(&nodes[node]);
        }
    });
}

/// As [`depth_first_search`], also recording discovery time, finish time, and predecessor
/// of every node.
pub fn depth_first_search_timestamped<N: Node>(
    nodes: &[N],
    mut visit: impl FnMut(&N),
) -> Timestamps<N::Key> {
    let mut entries: IndexMap<_, _> = nodes
        .iter()
        .map(|node| (node.key(), Timestamp::default()))
        .collect();
    let mut time = 0;

    walk(nodes, |event| {
        time += 1;
        match event {
            Event::Discover { node, predecessor } => {
                let node = &nodes[node];
                if let Some(stamp) = entries.get_mut(&node.key()) {
                    stamp.discovery = time;
                    stamp.predecessor = predecessor.map(|p| nodes[p].key());
                }
                visit(node);
            }
            Event::Finish { node } => {
                if let Some(stamp) = entries.get_mut(&nodes[node].key()) {
                    stamp.finish = time;
                }
            }
        }
    });

    Timestamps { entries }
}

/// Nodes are reported by their index of first occurrence in the input.
enum Event {
    Discover {
        node: usize,
        predecessor: Option<usize>,
    },
    /// Every neighbor of `node` has been explored.
    Finish { node: usize },
}

fn walk<N: Node>(nodes: &[N], mut on_event: impl FnMut(Event)) {
    let mut index = HashMap::with_capacity(nodes.len());
    for (idx, node) in nodes.iter().enumerate() {
        index.entry(node.key()).or_insert(idx);
    }

    let mut visited = bitvec!(0; nodes.len());
    let mut stack = Vec::new();

    for (root, node) in nodes.iter().enumerate() {
        if visited[root] || index.get(&node.key()) != Some(&root) {
            continue;
        }
        debug!(root = ?node.key(), "starting traversal tree");

        visited.set(root, true);
        on_event(Event::Discover {
            node: root,
            predecessor: None,
        });
        stack.push((root, node.neighbor_keys().into_iter()));

        while let Some((current, neighbors)) = stack.last_mut() {
            let current = *current;
            let next = neighbors
                .find_map(|key| index.get(&key).copied().filter(|&idx| !visited[idx]));
            match next {
                Some(next) => {
                    visited.set(next, true);
                    on_event(Event::Discover {
                        node: next,
                        predecessor: Some(current),
                    });
                    stack.push((next, nodes[next].neighbor_keys().into_iter()));
                }
                None => {
                    on_event(Event::Finish { node: current });
                    stack.pop();
                }
            }
        }
    }
}
