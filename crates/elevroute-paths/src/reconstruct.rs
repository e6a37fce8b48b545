//! Turning predecessor mappings into ordered paths.
//!
//! The functions take the mapping as a lookup closure so they work with
//! the searches' internal state as well as with plain maps:
//!
//! ```
//! use std::collections::HashMap;
//! use elevroute_paths::reconstruct_path;
//!
//! let came_from: HashMap<&str, &str> = [("b", "a"), ("c", "b")].into();
//! let path = reconstruct_path("c", |n| came_from.get(n).copied(), 10);
//! assert_eq!(path, ["a", "b", "c"]);
//! ```

use log::warn;

/// Walk `parent` links back from `goal` until a node without a parent,
/// then reverse.
///
/// `limit` bounds the number of nodes walked; a mapping that needs more
/// (a cycle) yields an empty path.
pub fn reconstruct_path<K, F>(goal: K, parent: F, limit: usize) -> Vec<K>
where
    K: Clone,
    F: Fn(&K) -> Option<K>,
{
    let mut path = chain(goal, &parent, limit);
    path.reverse();
    path
}

/// Join a forward and a backward search at `meeting`.
///
/// The forward mapping leads from `meeting` back to the start, the
/// backward mapping leads from `meeting` on to the goal. The meeting node
/// appears once.
pub fn reconstruct_bidirectional<K, F, B>(
    meeting: K,
    forward: F,
    backward: B,
    limit: usize,
) -> Vec<K>
where
    K: Clone,
    F: Fn(&K) -> Option<K>,
    B: Fn(&K) -> Option<K>,
{
    let mut path = chain(meeting.clone(), &forward, limit);
    if path.is_empty() {
        return path;
    }
    path.reverse();

    let suffix = chain(meeting, &backward, limit);
    if suffix.is_empty() {
        return suffix;
    }
    path.extend(suffix.into_iter().skip(1));
    path
}

/// `from`, its parent, its grandparent, ... up to the root.
fn chain<K, F>(from: K, parent: &F, limit: usize) -> Vec<K>
where
    K: Clone,
    F: Fn(&K) -> Option<K>,
{
    let mut out = vec![from];
    while let Some(p) = out.last().and_then(parent) {
        if out.len() >= limit {
            warn!("predecessor chain exceeds {limit} nodes, discarding path");
            return Vec::new();
        }
        out.push(p);
    }
    out
}
