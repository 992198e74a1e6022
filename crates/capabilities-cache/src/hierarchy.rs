//! Parent/child closure over feature, procedure and offering graphs.
//!
//! Each graph stores the parent edges and their inverse child edges side by
//! side; both are written by the same call so they never drift apart.
//! Traversal tracks visited nodes, so cyclic input terminates.

use std::collections::{HashMap, HashSet, VecDeque};

use sos_common::CacheResult;

use crate::validation;

type Edges = HashMap<String, HashSet<String>>;

#[derive(Debug, Clone)]
pub struct HierarchyGraph {
    label: &'static str,
    parents: Edges,
    children: Edges,
}

impl HierarchyGraph {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            parents: Edges::new(),
            children: Edges::new(),
        }
    }

    /// Record that `parent` is a parent of `child`.
    pub fn add_parent(&mut self, child: &str, parent: &str) -> CacheResult<()> {
        validation::not_null_or_empty(self.label, child)?;
        validation::not_null_or_empty(&format!("parent {}", self.label), parent)?;
        self.insert_edge(child, parent);
        Ok(())
    }

    pub fn add_parents(&mut self, child: &str, parents: &[String]) -> CacheResult<()> {
        validation::not_null_or_empty(self.label, child)?;
        validation::no_null_or_empty_values(&format!("parent {}", self.label), parents)?;
        for parent in parents {
            self.insert_edge(child, parent);
        }
        Ok(())
    }

    pub fn remove_parent(&mut self, child: &str, parent: &str) -> CacheResult<()> {
        validation::not_null_or_empty(self.label, child)?;
        validation::not_null_or_empty(&format!("parent {}", self.label), parent)?;
        remove_edge(&mut self.parents, child, parent);
        remove_edge(&mut self.children, parent, child);
        Ok(())
    }

    /// Drop every edge touching `id`.
    pub fn remove_node(&mut self, id: &str) -> CacheResult<()> {
        validation::not_null_or_empty(self.label, id)?;
        if let Some(parents) = self.parents.remove(id) {
            for parent in parents {
                remove_edge(&mut self.children, &parent, id);
            }
        }
        if let Some(children) = self.children.remove(id) {
            for child in children {
                remove_edge(&mut self.parents, &child, id);
            }
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.parents.clear();
        self.children.clear();
    }

    pub fn has_parents(&self, id: &str) -> bool {
        self.parents.get(id).is_some_and(|p| !p.is_empty())
    }

    pub fn has_children(&self, id: &str) -> bool {
        self.children.get(id).is_some_and(|c| !c.is_empty())
    }

    /// Union of the parent sets of every seed.
    ///
    /// With `full_hierarchy` the whole ancestor closure is returned. A seed
    /// only appears in the result when `include_self` is set, even if a
    /// cycle leads back to it.
    pub fn parents_of(
        &self,
        seeds: &[&str],
        full_hierarchy: bool,
        include_self: bool,
    ) -> HashSet<String> {
        closure(&self.parents, seeds, full_hierarchy, include_self)
    }

    /// Union of the child sets of every seed; see [`Self::parents_of`].
    pub fn children_of(
        &self,
        seeds: &[&str],
        full_hierarchy: bool,
        include_self: bool,
    ) -> HashSet<String> {
        closure(&self.children, seeds, full_hierarchy, include_self)
    }

    /// Every `(child, parent)` edge.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parents.iter().flat_map(|(child, parents)| {
            parents.iter().map(move |parent| (child.as_str(), parent.as_str()))
        })
    }

    fn insert_edge(&mut self, child: &str, parent: &str) {
        self.parents
            .entry(child.to_string())
            .or_default()
            .insert(parent.to_string());
        self.children
            .entry(parent.to_string())
            .or_default()
            .insert(child.to_string());
    }
}

fn remove_edge(edges: &mut Edges, from: &str, to: &str) {
    if let Some(targets) = edges.get_mut(from) {
        targets.remove(to);
        if targets.is_empty() {
            edges.remove(from);
        }
    }
}

fn closure(
    edges: &Edges,
    seeds: &[&str],
    full_hierarchy: bool,
    include_self: bool,
) -> HashSet<String> {
    let mut result = HashSet::new();

    for &seed in seeds {
        let mut reached = HashSet::new();
        let mut visited = HashSet::from([seed]);
        let mut queue = VecDeque::from([seed]);

        while let Some(node) = queue.pop_front() {
            let Some(next) = edges.get(node) else {
                continue;
            };
            for target in next {
                reached.insert(target.as_str());
                if full_hierarchy && visited.insert(target.as_str()) {
                    queue.push_back(target.as_str());
                }
            }
        }

        if include_self {
            reached.insert(seed);
        } else {
            reached.remove(seed);
        }
        result.extend(reached.into_iter().map(str::to_string));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn chain() -> HierarchyGraph {
        // C is parent of B, B is parent of A
        let mut graph = HierarchyGraph::new("procedure");
        graph.add_parent("A", "B").unwrap();
        graph.add_parent("B", "C").unwrap();
        graph
    }

    #[test]
    fn test_parent_closure() {
        let graph = chain();
        assert_eq!(graph.parents_of(&["A"], true, false), set(&["B", "C"]));
        assert_eq!(graph.parents_of(&["A"], false, false), set(&["B"]));
        assert_eq!(graph.parents_of(&["A"], true, true), set(&["A", "B", "C"]));
        assert_eq!(graph.parents_of(&["A"], false, true), set(&["A", "B"]));
    }

    #[test]
    fn test_child_closure_is_inverse() {
        let graph = chain();
        assert_eq!(graph.children_of(&["C"], true, false), set(&["A", "B"]));
        assert_eq!(graph.children_of(&["C"], false, false), set(&["B"]));
        assert!(graph.has_children("B"));
        assert!(!graph.has_children("A"));
    }

    #[test]
    fn test_cycle_terminates() {
        let mut graph = HierarchyGraph::new("procedure");
        graph.add_parent("A", "B").unwrap();
        graph.add_parent("B", "A").unwrap();

        assert_eq!(graph.parents_of(&["A"], true, false), set(&["B"]));
        assert_eq!(graph.parents_of(&["A"], true, true), set(&["A", "B"]));
        assert_eq!(graph.children_of(&["B"], true, false), set(&["A"]));
    }

    #[test]
    fn test_self_loop() {
        let mut graph = HierarchyGraph::new("feature of interest");
        graph.add_parent("A", "A").unwrap();
        assert!(graph.parents_of(&["A"], true, false).is_empty());
    }

    #[test]
    fn test_unknown_id_is_empty() {
        let graph = chain();
        assert!(graph.parents_of(&["Z"], true, false).is_empty());
        assert_eq!(graph.parents_of(&["Z"], true, true), set(&["Z"]));
    }

    #[test]
    fn test_multi_seed_union() {
        let mut graph = chain();
        graph.add_parent("X", "Y").unwrap();
        assert_eq!(
            graph.parents_of(&["A", "X"], true, false),
            set(&["B", "C", "Y"])
        );
    }

    #[test]
    fn test_remove_node_clears_both_directions() {
        let mut graph = chain();
        graph.remove_node("B").unwrap();
        assert!(!graph.has_parents("A"));
        assert!(!graph.has_children("C"));
        assert_eq!(graph.edges().count(), 0);
    }

    #[test]
    fn test_remove_parent() {
        let mut graph = chain();
        graph.remove_parent("A", "B").unwrap();
        assert!(graph.parents_of(&["A"], true, false).is_empty());
        assert!(graph.has_parents("B"));
    }

    #[test]
    fn test_rejects_empty_ids() {
        let mut graph = HierarchyGraph::new("offering");
        assert!(graph.add_parent("", "B").is_err());
        assert!(graph
            .add_parents("A", &["B".to_string(), String::new()])
            .is_err());
        assert_eq!(graph.edges().count(), 0);
    }
}
