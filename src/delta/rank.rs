use std::cmp::Reverse;

use super::Delta;

pub const DEFAULT_TOP_COUNT: usize = 5;

/// Keeps the `top` largest deltas, sorted descending. Order among equal
/// deltas is unspecified.
pub fn rank(mut deltas: Vec<Delta>, top: usize) -> Vec<Delta> {
    if top == 0 {
        return Vec::new();
    }
    if deltas.len() > top {
        deltas.select_nth_unstable_by_key(top - 1, |d| Reverse(d.delta));
        deltas.truncate(top);
    }
    deltas.sort_unstable_by_key(|d| Reverse(d.delta));
    deltas
}
