//! Column packing: assign each event in a cluster to the first free column.
//!
//! Greedy interval-graph coloring by earliest start. Processing events in
//! `(start, end)` order and always reusing the lowest-indexed column that
//! has drained yields the minimum number of columns: exactly the cluster's
//! maximum overlap depth.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::event::TimelineEvent;

/// The column assignment for one cluster.
#[derive(Debug, Clone)]
pub struct PackedColumns<Id> {
    /// Event id → 1-based column index.
    pub columns: HashMap<Id, u32>,
    /// Total number of columns the cluster needs (its maximum overlap
    /// depth). Zero only for an empty cluster.
    pub count: u32,
}

impl<Id: std::hash::Hash + Eq> PackedColumns<Id> {
    /// The column assigned to `id`, if the event was part of the packed
    /// cluster.
    pub fn column_of(&self, id: &Id) -> Option<u32> {
        self.columns.get(id).copied()
    }
}

/// Pack one cluster into columns.
///
/// Events are sorted by `(start, end)` ascending with a stable sort, so two
/// events with identical instants assign columns in input order on every
/// run. Each event takes the first column whose recorded end time is at or
/// before the event's start (a column freed exactly at the start is
/// reusable: touching is not overlapping); if none has drained, a new
/// column opens.
pub fn pack_columns<E: TimelineEvent>(cluster: &[&E]) -> PackedColumns<E::Id> {
    let mut order: Vec<&E> = cluster.to_vec();
    order.sort_by_key(|event| (event.start(), event.end()));

    let mut column_ends: Vec<NaiveDateTime> = Vec::new();
    let mut columns = HashMap::with_capacity(order.len());

    for event in order {
        let free = column_ends
            .iter()
            .position(|&column_end| column_end <= event.start());

        let index = match free {
            Some(index) => {
                column_ends[index] = event.end();
                index
            }
            None => {
                column_ends.push(event.end());
                column_ends.len() - 1
            }
        };

        columns.insert(event.id(), index as u32 + 1);
    }

    PackedColumns {
        columns,
        count: column_ends.len() as u32,
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 4, 13)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn ev(id: &str, start: NaiveDateTime, end: NaiveDateTime) -> Event {
        Event::new(id, start, end)
    }

    fn pack(events: &[Event]) -> PackedColumns<String> {
        let refs: Vec<&Event> = events.iter().collect();
        pack_columns(&refs)
    }

    #[test]
    fn test_single_event_gets_column_one() {
        let events = vec![ev("a", at(9, 0), at(10, 0))];
        let packed = pack(&events);
        assert_eq!(packed.count, 1);
        assert_eq!(packed.column_of(&"a".to_string()), Some(1));
    }

    #[test]
    fn test_three_pairwise_overlapping_events_use_three_columns() {
        let events = vec![
            ev("a", at(9, 0), at(10, 0)),
            ev("b", at(9, 30), at(10, 30)),
            ev("c", at(9, 15), at(9, 45)),
        ];
        let packed = pack(&events);
        assert_eq!(packed.count, 3);

        let mut assigned: Vec<u32> = ["a", "b", "c"]
            .iter()
            .map(|id| packed.column_of(&id.to_string()).unwrap())
            .collect();
        assigned.sort_unstable();
        assert_eq!(assigned, vec![1, 2, 3]);
    }

    #[test]
    fn test_drained_column_is_reused() {
        // b starts after a ends, so it drops back into column 1 even though
        // the bridging event c keeps the cluster connected.
        let events = vec![
            ev("a", at(9, 0), at(10, 0)),
            ev("c", at(9, 30), at(11, 0)),
            ev("b", at(10, 0), at(10, 30)),
        ];
        let packed = pack(&events);
        assert_eq!(packed.count, 2);
        assert_eq!(packed.column_of(&"a".to_string()), Some(1));
        assert_eq!(packed.column_of(&"c".to_string()), Some(2));
        assert_eq!(packed.column_of(&"b".to_string()), Some(1));
    }

    #[test]
    fn test_column_freed_exactly_at_start_is_reusable() {
        let events = vec![ev("a", at(9, 0), at(10, 0)), ev("b", at(10, 0), at(11, 0))];
        let packed = pack(&events);
        assert_eq!(packed.count, 1);
        assert_eq!(packed.column_of(&"b".to_string()), Some(1));
    }

    #[test]
    fn test_identical_start_times_assign_in_input_order() {
        let events = vec![
            ev("first", at(9, 0), at(10, 0)),
            ev("second", at(9, 0), at(10, 0)),
            ev("third", at(9, 0), at(10, 0)),
        ];
        let packed = pack(&events);
        assert_eq!(packed.column_of(&"first".to_string()), Some(1));
        assert_eq!(packed.column_of(&"second".to_string()), Some(2));
        assert_eq!(packed.column_of(&"third".to_string()), Some(3));
    }

    #[test]
    fn test_count_equals_max_depth_not_event_count() {
        // Five events, but never more than two at once.
        let events = vec![
            ev("a", at(9, 0), at(9, 45)),
            ev("b", at(9, 30), at(10, 15)),
            ev("c", at(10, 0), at(10, 45)),
            ev("d", at(10, 30), at(11, 15)),
            ev("e", at(11, 0), at(11, 45)),
        ];
        let packed = pack(&events);
        assert_eq!(packed.count, 2);
    }

    #[test]
    fn test_empty_cluster() {
        let refs: Vec<&Event> = Vec::new();
        let packed = pack_columns(&refs);
        assert_eq!(packed.count, 0);
        assert!(packed.columns.is_empty());
    }
}
