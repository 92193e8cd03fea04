//! Path reconstruction from a predecessor map.
//!
//! The walk runs backward from the destination and is bounded by the size of
//! the map, so a corrupted map that cycles fails instead of spinning forever.

use log::warn;
use std::collections::HashMap;

use crate::graph::NodeId;
use crate::{Error, Result};

/// Rebuilds the path from `start` to `end` by following `predecessors` backward.
///
/// Returns the vertices from `start` to `end` inclusive. `end == start` always
/// yields `[start]`. A missing or unset predecessor before reaching `start` is
/// [`Error::Unreachable`]; a chain longer than the map is
/// [`Error::MalformedPredecessorChain`].
pub fn reconstruct_path<N: NodeId>(
    predecessors: &HashMap<N, Option<N>>,
    start: &N,
    end: &N,
) -> Result<Vec<N>> {
    let mut path = vec![end.clone()];
    let mut current = end;

    while current != start {
        // A chain can visit each vertex of the map at most once.
        if path.len() > predecessors.len() {
            warn!(
                "predecessor chain from {:?} exceeded {} vertices, likely a cycle",
                end,
                predecessors.len()
            );
            return Err(Error::MalformedPredecessorChain {
                end: format!("{:?}", end),
                steps: path.len() - 1,
            });
        }

        match predecessors.get(current) {
            Some(Some(pred)) => {
                path.push(pred.clone());
                current = pred;
            }
            _ => {
                return Err(Error::Unreachable {
                    start: format!("{:?}", start),
                    end: format!("{:?}", end),
                })
            }
        }
    }

    path.reverse();
    Ok(path)
}

/// Returns `(path, true)` when a path exists and `(vec![], false)` otherwise.
pub fn find_path<N: NodeId>(
    predecessors: &HashMap<N, Option<N>>,
    start: &N,
    end: &N,
) -> (Vec<N>, bool) {
    match reconstruct_path(predecessors, start, end) {
        Ok(path) => (path, true),
        Err(_) => (Vec::new(), false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preds(
        pairs: &[(&'static str, Option<&'static str>)],
    ) -> HashMap<&'static str, Option<&'static str>> {
        pairs.iter().cloned().collect()
    }

    #[test]
    fn walks_back_to_start() {
        let map = preds(&[("a", None), ("b", Some("a")), ("c", Some("b"))]);
        assert_eq!(reconstruct_path(&map, &"a", &"c"), Ok(vec!["a", "b", "c"]));
        assert_eq!(reconstruct_path(&map, &"b", &"c"), Ok(vec!["b", "c"]));
    }

    #[test]
    fn start_equals_end_even_when_absent() {
        let empty: HashMap<u32, Option<u32>> = HashMap::new();
        assert_eq!(reconstruct_path(&empty, &4, &4), Ok(vec![4]));
        assert_eq!(find_path(&empty, &4, &4), (vec![4], true));
    }

    #[test]
    fn unset_predecessor_is_unreachable() {
        let map = preds(&[("a", None), ("f", None)]);
        assert_eq!(
            reconstruct_path(&map, &"a", &"f"),
            Err(Error::Unreachable {
                start: "\"a\"".to_string(),
                end: "\"f\"".to_string()
            })
        );
        assert_eq!(find_path(&map, &"a", &"f"), (vec![], false));
    }

    #[test]
    fn dangling_chain_is_unreachable() {
        // "x" points at "ghost", which the map knows nothing about.
        let map = preds(&[("a", None), ("x", Some("ghost"))]);
        assert!(matches!(
            reconstruct_path(&map, &"a", &"x"),
            Err(Error::Unreachable { .. })
        ));
        assert!(matches!(
            reconstruct_path(&map, &"a", &"missing"),
            Err(Error::Unreachable { .. })
        ));
    }

    #[test]
    fn cycles_are_reported_not_followed() {
        let map = preds(&[("a", None), ("b", Some("c")), ("c", Some("b"))]);
        assert!(matches!(
            reconstruct_path(&map, &"a", &"b"),
            Err(Error::MalformedPredecessorChain { .. })
        ));

        let self_loop = preds(&[("a", None), ("b", Some("b"))]);
        assert!(matches!(
            reconstruct_path(&self_loop, &"a", &"b"),
            Err(Error::MalformedPredecessorChain { .. })
        ));
    }

    #[test]
    fn does_not_mutate_the_map() {
        let map = preds(&[("a", None), ("b", Some("a"))]);
        let before = map.clone();
        let _ = reconstruct_path(&map, &"a", &"b");
        assert_eq!(map, before);
    }
}
