//! Shuffle index selection

use rand::Rng;

/// Pick a random queue index different from `current`.
///
/// Rejection sampling: redraw until the pick differs from the current
/// index. With a single-entry queue the only possible pick is 0.
pub(crate) fn pick_next_index<R: Rng>(len: usize, current: usize, rng: &mut R) -> usize {
    debug_assert!(len > 0);
    if len <= 1 {
        return 0;
    }
    loop {
        let candidate = rng.gen_range(0..len);
        if candidate != current {
            return candidate;
        }
    }
}
