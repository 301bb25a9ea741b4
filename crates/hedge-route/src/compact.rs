//! Loop elimination over raw exploration traces.
//!
//! Wall-following backtracks, so a raw trace revisits positions. The
//! compactor splices those detours out in O(n): the trace becomes a
//! linked sequence held in an index arena (`Vec<Option<usize>>`, with
//! `None` as the terminal sentinel), and each revisit rewrites the
//! forward link of the position's previous occurrence to skip the loop
//! in between. A final walk over the links yields the loop-free path.

use hedge_core::Position;
use indexmap::IndexMap;

use crate::explore::TraceEntry;

/// Remove revisited-position loops from a raw trace.
///
/// `start` is the runner's starting position, conceptually entry 0 of
/// the trace. The returned path starts at `start`, ends at the trace's
/// final position, visits each position exactly once, and is a
/// subsequence of the trace's positions in the order each was last
/// exited toward the goal. An already loop-free trace comes back
/// unchanged. An empty trace compacts to `[start]`.
pub fn compact(start: Position, trace: &[TraceEntry]) -> Vec<Position> {
    let mut positions = Vec::with_capacity(trace.len() + 1);
    positions.push(start);
    positions.extend(trace.iter().map(|e| e.position));

    let n = positions.len();
    let mut next: Vec<Option<usize>> = (0..n).map(|i| (i + 1 < n).then_some(i + 1)).collect();

    // Most recent index at which each position was seen. Splicing
    // rewrites the *previous* occurrence's forward link, so the first
    // recorded slot survives and later visits splice from the most
    // recent detour rather than stale history.
    let mut seen: IndexMap<Position, usize> = IndexMap::with_capacity(n);
    for i in 0..n {
        let Some(succ) = next[i] else {
            continue;
        };
        match seen.get_mut(&positions[i]) {
            Some(prev) => {
                next[*prev] = Some(succ);
                *prev = i;
            }
            None => {
                seen.insert(positions[i], i);
            }
        }
    }

    let mut path = Vec::new();
    let mut cursor = Some(0);
    while let Some(i) = cursor {
        path.push(positions[i]);
        cursor = next[i];
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use hedge_core::Action;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    fn entries(positions: &[(i32, i32)]) -> Vec<TraceEntry> {
        // The compactor only reads positions; the action is immaterial.
        positions
            .iter()
            .map(|&(x, y)| TraceEntry {
                position: p(x, y),
                action: Action::Forward,
            })
            .collect()
    }

    #[test]
    fn loop_free_trace_is_unchanged() {
        let trace = entries(&[(0, 1), (0, 2), (1, 2), (2, 2)]);
        let path = compact(p(0, 0), &trace);
        assert_eq!(path, vec![p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(2, 2)]);
    }

    #[test]
    fn empty_trace_compacts_to_the_start() {
        assert_eq!(compact(p(3, 3), &[]), vec![p(3, 3)]);
    }

    #[test]
    fn backtrack_detour_is_spliced_out() {
        // Dead end at (2, 0): in, back out, then continue north.
        let trace = entries(&[(1, 0), (2, 0), (1, 0), (1, 1)]);
        let path = compact(p(0, 0), &trace);
        assert_eq!(path, vec![p(0, 0), p(1, 0), p(1, 1)]);
    }

    #[test]
    fn loop_through_the_start_is_spliced_out() {
        // The runner wanders back through its starting cell.
        let trace = entries(&[(0, 1), (1, 1), (1, 0), (0, 0), (0, 1), (0, 2)]);
        let path = compact(p(0, 0), &trace);
        assert_eq!(path, vec![p(0, 0), p(0, 1), p(0, 2)]);
    }

    #[test]
    fn third_visit_splices_from_the_most_recent_detour() {
        // (1, 0) is visited three times; the surviving route must skip
        // both detours, not just the first.
        let trace = entries(&[
            (1, 0),
            (2, 0),
            (1, 0),
            (1, 1),
            (1, 0),
            (1, 1),
            (2, 1),
        ]);
        let path = compact(p(0, 0), &trace);
        assert_eq!(path, vec![p(0, 0), p(1, 0), p(1, 1), p(2, 1)]);
    }

    #[test]
    fn endpoints_are_preserved() {
        let trace = entries(&[(0, 1), (0, 0), (0, 1), (1, 1), (1, 0)]);
        let path = compact(p(0, 0), &trace);
        assert_eq!(path.first(), Some(&p(0, 0)));
        assert_eq!(path.last(), Some(&p(1, 0)));
        let mut unique = path.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), path.len(), "path contains duplicates");
    }
}
