//! Overlap clustering: partition timed events into connected components.
//!
//! Two events land in the same cluster iff they overlap directly or through
//! a chain of overlaps. The chain matters: a short event bridging two
//! otherwise-disjoint groups must pull both groups into one cluster, so that
//! the packer sizes columns against the true component and not against
//! whichever events happened to be placed first.

use std::collections::HashSet;

use crate::event::TimelineEvent;
use crate::overlap::events_overlap;

/// Partition `events` into overlap clusters.
///
/// Returns index sets into `events`, one per cluster, in discovery order
/// (the order of each cluster's first member in the input). Within a
/// cluster, indices appear in the order the expansion reached them.
///
/// Callers are expected to pass the filtered set (timed, positive duration);
/// all-day events passed here simply end up in singleton clusters because
/// the overlap predicate refuses them.
///
/// The expansion is a repeated sweep: seed a cluster with the first
/// unvisited event, then rescan the remaining events for anything
/// overlapping any current member until a sweep adds nothing. Worst case
/// O(n²) per pass, which is fine for the one-week event counts this engine
/// sees.
pub fn find_clusters<E: TimelineEvent>(events: &[&E]) -> Vec<Vec<usize>> {
    let mut visited: HashSet<E::Id> = HashSet::with_capacity(events.len());
    let mut clusters = Vec::new();

    for seed in 0..events.len() {
        if visited.contains(&events[seed].id()) {
            continue;
        }

        visited.insert(events[seed].id());
        let mut members = vec![seed];

        loop {
            let mut grew = false;

            for (index, candidate) in events.iter().enumerate() {
                if visited.contains(&candidate.id()) {
                    continue;
                }

                if members
                    .iter()
                    .any(|&member| events_overlap(events[member], *candidate))
                {
                    visited.insert(candidate.id());
                    members.push(index);
                    grew = true;
                }
            }

            if !grew {
                break;
            }
        }

        clusters.push(members);
    }

    clusters
}

// ── Tests ───────────────────────────────────────────────────────────────────
