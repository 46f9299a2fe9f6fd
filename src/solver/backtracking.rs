use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Walks `prevs` back from `final_state` to the state which is its own prev
/// and returns the path in forward order.
pub(crate) fn backtrack_prevs<T: Clone + Eq + Hash, H: BuildHasher>(
    prevs: &HashMap<T, T, H>,
    final_state: T,
) -> Vec<T> {
    let mut states = Vec::new();
    let mut cur = &final_state;
    loop {
        states.push(cur.clone());
        let prev = &prevs[cur];
        if prev == cur {
            states.reverse();
            return states;
        }
        cur = prev;
    }
}
