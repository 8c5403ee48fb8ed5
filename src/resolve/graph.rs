//! Dependency graph over grammar names for a single resolution run.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::base::{FxIndexMap, FxIndexSet};

use super::error::ResolveError;

/// Directed graph recording "depends on" edges between grammar names.
///
/// One instance lives for exactly one resolution run and is discarded
/// afterwards; no state survives across unrelated requests. Nodes and
/// edge sets keep insertion order so depth reports and topological
/// ordering are deterministic.
///
/// Graph size is bounded by the number of distinct grammar files in a
/// project (typically < 100), so naive DFS is sufficient everywhere.
#[derive(Debug)]
pub struct DependencyGraph {
    /// name → names it directly depends on
    edges: FxIndexMap<String, FxIndexSet<String>>,
    /// Ceiling on the longest dependency chain.
    max_depth: usize,
}

impl DependencyGraph {
    /// Create an empty graph with the given depth ceiling.
    pub fn new(max_depth: usize) -> Self {
        Self {
            edges: FxIndexMap::default(),
            max_depth,
        }
    }

    /// Record that `from` depends on `to`.
    ///
    /// Does NOT re-validate: the caller is responsible for gating with
    /// [`would_create_cycle`](Self::would_create_cycle) first. Both
    /// endpoints become known nodes.
    pub fn add_dependency(&mut self, from: &str, to: &str) {
        self.edges
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string());
        self.edges.entry(to.to_string()).or_default();
    }

    /// True if adding the edge `from → to` would close a loop: either a
    /// self-import, or a path already exists from `to` back to `from`.
    pub fn would_create_cycle(&self, from: &str, to: &str) -> bool {
        if from == to {
            return true;
        }
        self.is_reachable(to, from)
    }

    /// DFS reachability from `start` to `target`.
    fn is_reachable(&self, start: &str, target: &str) -> bool {
        let mut stack = vec![start];
        let mut visited: FxHashSet<&str> = FxHashSet::default();

        while let Some(node) = stack.pop() {
            if node == target {
                return true;
            }
            if !visited.insert(node) {
                continue;
            }
            if let Some(deps) = self.edges.get(node) {
                stack.extend(deps.iter().map(String::as_str));
            }
        }
        false
    }

    /// Direct dependencies of `name`; empty for unknown names.
    pub fn dependencies(&self, name: &str) -> impl Iterator<Item = &str> {
        self.edges
            .get(name)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Length, in edges, of the longest outgoing path starting at `name`.
    ///
    /// A node with no outgoing edges (or an unknown name) has depth 0.
    /// Memoized recursion; terminates because edge additions are gated
    /// against cycles.
    pub fn depth(&self, name: &str) -> usize {
        let mut memo = FxHashMap::default();
        self.depth_from(name, &mut memo)
    }

    fn depth_from<'a>(&'a self, name: &'a str, memo: &mut FxHashMap<&'a str, usize>) -> usize {
        if let Some(&depth) = memo.get(name) {
            return depth;
        }
        let depth = self
            .edges
            .get(name)
            .map(|deps| {
                deps.iter()
                    .map(|dep| self.depth_from(dep, memo) + 1)
                    .max()
                    .unwrap_or(0)
            })
            .unwrap_or(0);
        memo.insert(name, depth);
        depth
    }

    /// Fail with a depth-exceeded error if the longest chain from `name`
    /// is deeper than the configured ceiling.
    pub fn validate_depth(&self, name: &str) -> Result<(), ResolveError> {
        let depth = self.depth(name);
        if depth > self.max_depth {
            return Err(ResolveError::depth_exceeded(name, depth, self.max_depth));
        }
        Ok(())
    }

    /// All known nodes ordered so every dependency precedes its
    /// dependents (Kahn's algorithm).
    ///
    /// Fails with a circular-import error if the graph is not acyclic.
    /// Checked independently of [`would_create_cycle`] gating, since
    /// [`add_dependency`](Self::add_dependency) trusts its caller.
    pub fn topological_order(&self) -> Result<Vec<String>, ResolveError> {
        let mut in_degree: FxIndexMap<&str, usize> = self
            .edges
            .iter()
            .map(|(node, deps)| (node.as_str(), deps.len()))
            .collect();

        // dep → nodes that depend on it
        let mut dependents: FxHashMap<&str, Vec<&str>> = FxHashMap::default();
        for (node, deps) in &self.edges {
            for dep in deps {
                dependents.entry(dep.as_str()).or_default().push(node.as_str());
            }
        }

        let mut queue: Vec<&str> = in_degree
            .iter()
            .filter(|&(_, &deg)| deg == 0)
            .map(|(&node, _)| node)
            .collect();

        let mut order: Vec<String> = Vec::with_capacity(self.edges.len());
        let mut next = 0;
        while next < queue.len() {
            let node = queue[next];
            next += 1;
            order.push(node.to_string());

            if let Some(deps) = dependents.get(node) {
                for &dependent in deps {
                    if let Some(deg) = in_degree.get_mut(dependent) {
                        *deg -= 1;
                        if *deg == 0 {
                            queue.push(dependent);
                        }
                    }
                }
            }
        }

        if order.len() != self.edges.len() {
            // Kahn's strands every node on a cycle, and a stranded node
            // always retains at least one stranded dependency.
            let emitted: FxHashSet<&str> = order.iter().map(String::as_str).collect();
            for (node, deps) in &self.edges {
                if emitted.contains(node.as_str()) {
                    continue;
                }
                if let Some(dep) = deps.iter().find(|dep| !emitted.contains(dep.as_str())) {
                    return Err(ResolveError::circular_import(node, dep));
                }
            }
        }
        Ok(order)
    }

    /// Reset the graph to empty. Used for reuse and testing, never
    /// mid-resolution.
    pub fn clear(&mut self) {
        self.edges.clear();
    }

    /// Configured depth ceiling.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Number of known nodes.
    pub fn node_count(&self) -> usize {
        self.edges.len()
    }
}
