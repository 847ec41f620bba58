//! Lane assignment for overlapping events within one day

use crate::model::Event;

/// An event with its lane and the lane count of its overlap cluster
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement<'a> {
    pub event: &'a Event,
    pub col: usize,
    pub total_cols: usize,
}

/// Assign every event the lowest lane that none of its overlapping predecessors occupy.
///
/// Events are ordered by start minute (stable, so equal starts keep input order). A lane's
/// width denominator is shared by the whole cluster of transitively overlapping events, so
/// blocks in one cluster always line up on the same column grid.
pub fn resolve_lanes<'a>(events: &[&'a Event]) -> Vec<Placement<'a>> {
    let mut sorted: Vec<&'a Event> = events.to_vec();
    sorted.sort_by_key(|event| event.start_minute());

    let mut placed: Vec<Placement<'a>> = Vec::with_capacity(sorted.len());
    for event in sorted {
        let mut col = 0;
        while placed.iter().any(|p| p.col == col && p.event.overlaps(event)) {
            col += 1;
        }
        placed.push(Placement {
            event,
            col,
            total_cols: 1,
        });
    }

    // In start order a cluster ends where the next start reaches the running end
    let mut cluster_start = 0;
    let mut cluster_end = 0;
    for i in 0..placed.len() {
        let event = placed[i].event;
        if i > cluster_start && event.start_minute() >= cluster_end {
            close_cluster(&mut placed[cluster_start..i]);
            cluster_start = i;
        }
        if i == cluster_start {
            cluster_end = event.end_minute();
        } else {
            cluster_end = cluster_end.max(event.end_minute());
        }
    }
    close_cluster(&mut placed[cluster_start..]);

    placed
}

fn close_cluster(cluster: &mut [Placement<'_>]) {
    let width = cluster.iter().map(|p| p.col + 1).max().unwrap_or(1);
    for placement in cluster {
        placement.total_cols = width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{sample_event, Event};
    use proptest::prelude::*;

    fn lanes(events: &[Event]) -> Vec<(u64, usize, usize)> {
        let refs: Vec<&Event> = events.iter().collect();
        resolve_lanes(&refs)
            .iter()
            .map(|p| (p.event.id.0, p.col, p.total_cols))
            .collect()
    }

    #[test]
    fn empty_day() {
        assert!(resolve_lanes(&[]).is_empty());
    }

    #[test]
    fn single_event_fills_width() {
        let events = [sample_event(1, (9, 0), 60)];
        assert_eq!(lanes(&events), vec![(1, 0, 1)]);
    }

    #[test]
    fn two_overlapping_then_one_alone() {
        let events = [
            sample_event(1, (9, 0), 60),
            sample_event(2, (9, 30), 60),
            sample_event(3, (11, 0), 30),
        ];
        assert_eq!(lanes(&events), vec![(1, 0, 2), (2, 1, 2), (3, 0, 1)]);
    }

    #[test]
    fn input_order_does_not_matter_except_for_ties() {
        let events = [
            sample_event(3, (11, 0), 30),
            sample_event(2, (9, 30), 60),
            sample_event(1, (9, 0), 60),
        ];
        assert_eq!(lanes(&events), vec![(1, 0, 2), (2, 1, 2), (3, 0, 1)]);
    }

    #[test]
    fn identical_events_get_distinct_lanes_in_input_order() {
        let events = [
            sample_event(5, (10, 0), 30),
            sample_event(4, (10, 0), 30),
            sample_event(6, (10, 0), 30),
        ];
        assert_eq!(lanes(&events), vec![(5, 0, 3), (4, 1, 3), (6, 2, 3)]);
    }

    #[test]
    fn touching_events_share_a_lane() {
        let events = [sample_event(1, (9, 0), 60), sample_event(2, (10, 0), 60)];
        assert_eq!(lanes(&events), vec![(1, 0, 1), (2, 0, 1)]);
    }

    #[test]
    fn chain_shares_cluster_width() {
        // 2 and 4 never touch but share the cluster width
        let events = [
            sample_event(1, (9, 0), 120),
            sample_event(2, (9, 0), 30),
            sample_event(3, (9, 30), 60),
            sample_event(4, (10, 15), 60),
        ];
        let result = lanes(&events);
        assert_eq!(result[0], (1, 0, 3));
        assert_eq!(result[1], (2, 1, 3));
        assert_eq!(result[2], (3, 1, 3));
        assert_eq!(result[3], (4, 2, 3));
    }

    fn arb_events() -> impl Strategy<Value = Vec<Event>> {
        prop::collection::vec((0u32..24, 0u32..4, 1u32..16), 0..24).prop_map(|specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (hour, quarter, quarters))| {
                    sample_event(i as u64 + 1, (hour, quarter * 15), quarters * 15)
                })
                .collect()
        })
    }

    fn find(parent: &mut [usize], mut i: usize) -> usize {
        while parent[i] != i {
            parent[i] = parent[parent[i]];
            i = parent[i];
        }
        i
    }

    /// Root index of each placement's connected component in the overlap graph
    fn overlap_components(placed: &[Placement<'_>]) -> Vec<usize> {
        let mut parent: Vec<usize> = (0..placed.len()).collect();
        for i in 0..placed.len() {
            for j in i + 1..placed.len() {
                if placed[i].event.overlaps(placed[j].event) {
                    let (a, b) = (find(&mut parent, i), find(&mut parent, j));
                    parent[a] = b;
                }
            }
        }
        (0..placed.len()).map(|i| find(&mut parent, i)).collect()
    }

    proptest! {
        #[test]
        fn width_equals_widest_lane_of_its_cluster(events in arb_events()) {
            let refs: Vec<&Event> = events.iter().collect();
            let placed = resolve_lanes(&refs);
            let roots = overlap_components(&placed);
            for (i, a) in placed.iter().enumerate() {
                let widest = placed
                    .iter()
                    .zip(&roots)
                    .filter(|(_, root)| **root == roots[i])
                    .map(|(p, _)| p.col + 1)
                    .max();
                prop_assert_eq!(Some(a.total_cols), widest);
            }
        }

        #[test]
        fn overlapping_events_never_share_a_lane(events in arb_events()) {
            let refs: Vec<&Event> = events.iter().collect();
            let placed = resolve_lanes(&refs);
            for (i, a) in placed.iter().enumerate() {
                for b in &placed[i + 1..] {
                    if a.event.overlaps(b.event) {
                        prop_assert_ne!(a.col, b.col);
                    }
                }
            }
        }

        #[test]
        fn width_covers_lane_and_matches_overlap_neighbours(events in arb_events()) {
            let refs: Vec<&Event> = events.iter().collect();
            let placed = resolve_lanes(&refs);
            prop_assert_eq!(placed.len(), events.len());
            for a in &placed {
                prop_assert!(a.total_cols >= a.col + 1);
                for b in &placed {
                    if a.event.overlaps(b.event) {
                        prop_assert_eq!(a.total_cols, b.total_cols);
                        prop_assert!(a.total_cols >= b.col + 1);
                    }
                }
            }
        }

        #[test]
        fn resolving_twice_is_identical(events in arb_events()) {
            let refs: Vec<&Event> = events.iter().collect();
            let first: Vec<_> = resolve_lanes(&refs).iter().map(|p| (p.event.id, p.col, p.total_cols)).collect();
            let second: Vec<_> = resolve_lanes(&refs).iter().map(|p| (p.event.id, p.col, p.total_cols)).collect();
            prop_assert_eq!(first, second);
        }
    }
}
