//! Interval predicates: do two timed events collide, and does an event fall
//! on a given calendar day.
//!
//! These are the shared leaves of the engine. [`events_overlap`] feeds the
//! clustering pass; [`occurs_on_date`] is exposed on its own for month cells
//! and multi-day banner strips, which test membership without ever touching
//! the column packer.

use chrono::{NaiveDate, NaiveDateTime};

use crate::event::TimelineEvent;

// ── Timed overlap ───────────────────────────────────────────────────────────

/// Whether two timed events occupy a common instant.
///
/// All-day events never overlap anything here: they are laid out by the
/// banner path, not the hour grid, so the predicate returns `false`
/// unconditionally when either side is all-day.
///
/// Events that merely touch (`a.end == b.start`) do **not** overlap.
/// Back-to-back meetings stay in separate clusters instead of chaining into
/// one oversized cluster that squeezes every column.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use chronolane::{events_overlap, Event};
///
/// let day = NaiveDate::from_ymd_opt(2024, 4, 13).unwrap();
/// let at = |h, m| day.and_hms_opt(h, m, 0).unwrap();
///
/// let a = Event::new("a", at(9, 0), at(10, 0));
/// let b = Event::new("b", at(9, 30), at(10, 30));
/// let c = Event::new("c", at(10, 0), at(11, 0));
///
/// assert!(events_overlap(&a, &b));
/// assert!(!events_overlap(&a, &c)); // touching is not overlapping
/// ```
pub fn events_overlap<A, B>(a: &A, b: &B) -> bool
where
    A: TimelineEvent,
    B: TimelineEvent,
{
    if a.is_all_day() || b.is_all_day() {
        return false;
    }

    b.end() > a.start() && a.end() > b.start()
}

// ── Day membership ──────────────────────────────────────────────────────────

/// Whether `event` should appear in the cell for `date`.
///
/// The event's visual day span is the inclusive date range from the day its
/// start falls on through the day its end falls on. Works for single-day
/// timed events (reduces to a same-day check), multi-day events, and all-day
/// events alike.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use chronolane::{occurs_on_date, Event};
///
/// let date = |d| NaiveDate::from_ymd_opt(2024, 4, d).unwrap();
/// let mut event = Event::new(
///     "retreat",
///     date(13).and_hms_opt(0, 0, 0).unwrap(),
///     date(15).and_hms_opt(23, 59, 0).unwrap(),
/// );
/// event.all_day = true;
///
/// assert!(!occurs_on_date(&event, date(12)));
/// assert!(occurs_on_date(&event, date(13)));
/// assert!(occurs_on_date(&event, date(15)));
/// assert!(!occurs_on_date(&event, date(16)));
/// ```
pub fn occurs_on_date<E: TimelineEvent>(event: &E, date: NaiveDate) -> bool {
    let first = event.start().date();
    let last = event.end().date();

    first <= date && date <= last
}

/// Whether the event's start and end fall on different calendar days.
///
/// Banner callers use this to pick between the single-day all-day row and
/// the multi-day continuation strip.
pub fn spans_multiple_days<E: TimelineEvent>(event: &E) -> bool {
    event.start().date() != event.end().date()
}

/// The events whose day span contains `date`, in input order.
///
/// Membership only: no clustering, no packing, no geometry. This is the
/// filter month cells and banner rows run per day.
pub fn occurring_on<E: TimelineEvent>(events: &[E], date: NaiveDate) -> Vec<&E> {
    events
        .iter()
        .filter(|event| occurs_on_date(*event, date))
        .collect()
}

/// End-exclusive containment of an instant in an event's interval.
///
/// The counting primitive behind cluster depth: an event occupies `[start,
/// end)`, consistent with touching-is-not-overlapping.
pub fn contains_instant<E: TimelineEvent>(event: &E, instant: NaiveDateTime) -> bool {
    event.start() <= instant && instant < event.end()
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 4, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn ev(id: &str, start: NaiveDateTime, end: NaiveDateTime) -> Event {
        Event::new(id, start, end)
    }

    fn all_day(id: &str, start: NaiveDateTime, end: NaiveDateTime) -> Event {
        let mut event = Event::new(id, start, end);
        event.all_day = true;
        event
    }

    // ── events_overlap ──────────────────────────────────────────────────

    #[test]
    fn test_partial_overlap() {
        let a = ev("a", at(13, 9, 0), at(13, 10, 0));
        let b = ev("b", at(13, 9, 30), at(13, 10, 30));
        assert!(events_overlap(&a, &b));
        assert!(events_overlap(&b, &a));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = ev("outer", at(13, 8, 0), at(13, 18, 0));
        let inner = ev("inner", at(13, 10, 0), at(13, 12, 0));
        assert!(events_overlap(&outer, &inner));
        assert!(events_overlap(&inner, &outer));
    }

    #[test]
    fn test_disjoint_do_not_overlap() {
        let morning = ev("m", at(13, 9, 0), at(13, 10, 0));
        let afternoon = ev("a", at(13, 14, 0), at(13, 15, 0));
        assert!(!events_overlap(&morning, &afternoon));
        assert!(!events_overlap(&afternoon, &morning));
    }

    #[test]
    fn test_touching_is_not_overlapping() {
        let first = ev("first", at(13, 9, 0), at(13, 10, 0));
        let second = ev("second", at(13, 10, 0), at(13, 11, 0));
        assert!(!events_overlap(&first, &second));
        assert!(!events_overlap(&second, &first));
    }

    #[test]
    fn test_identical_ranges_overlap() {
        let a = ev("a", at(13, 9, 0), at(13, 10, 0));
        let b = ev("b", at(13, 9, 0), at(13, 10, 0));
        assert!(events_overlap(&a, &b));
    }

    #[test]
    fn test_all_day_never_overlaps() {
        let timed = ev("timed", at(13, 9, 0), at(13, 10, 0));
        let banner = all_day("banner", at(13, 9, 0), at(13, 10, 0));
        assert!(!events_overlap(&timed, &banner));
        assert!(!events_overlap(&banner, &timed));
        assert!(!events_overlap(&banner, &banner));
    }

    // ── occurs_on_date ──────────────────────────────────────────────────

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, day).unwrap()
    }

    #[test]
    fn test_single_day_event_occurs_on_its_day_only() {
        let event = ev("e", at(13, 9, 0), at(13, 10, 0));
        assert!(occurs_on_date(&event, date(13)));
        assert!(!occurs_on_date(&event, date(12)));
        assert!(!occurs_on_date(&event, date(14)));
    }

    #[test]
    fn test_multi_day_span_includes_end_day() {
        let event = all_day("retreat", at(13, 0, 0), at(15, 23, 59));
        assert!(!occurs_on_date(&event, date(12)));
        assert!(occurs_on_date(&event, date(13)));
        assert!(occurs_on_date(&event, date(14)));
        assert!(occurs_on_date(&event, date(15)));
        assert!(!occurs_on_date(&event, date(16)));
    }

    #[test]
    fn test_event_ending_at_midnight_occurs_on_end_day() {
        // End instant falls exactly on the 14th's floor, so the 14th is
        // part of the visual span.
        let event = ev("late", at(13, 22, 0), at(14, 0, 0));
        assert!(occurs_on_date(&event, date(13)));
        assert!(occurs_on_date(&event, date(14)));
        assert!(!occurs_on_date(&event, date(15)));
    }

    // ── spans_multiple_days / occurring_on ──────────────────────────────

    #[test]
    fn test_spans_multiple_days() {
        assert!(spans_multiple_days(&ev("m", at(13, 22, 0), at(14, 2, 0))));
        assert!(!spans_multiple_days(&ev("s", at(13, 9, 0), at(13, 23, 59))));
    }

    #[test]
    fn test_occurring_on_preserves_input_order() {
        let events = vec![
            ev("b", at(13, 12, 0), at(13, 13, 0)),
            ev("a", at(12, 9, 0), at(14, 10, 0)),
            ev("c", at(14, 9, 0), at(14, 10, 0)),
        ];
        let on_13th: Vec<&str> = occurring_on(&events, date(13))
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(on_13th, vec!["b", "a"]);
    }

    #[test]
    fn test_contains_instant_is_end_exclusive() {
        let event = ev("e", at(13, 9, 0), at(13, 10, 0));
        assert!(contains_instant(&event, at(13, 9, 0)));
        assert!(contains_instant(&event, at(13, 9, 59)));
        assert!(!contains_instant(&event, at(13, 10, 0)));
    }
}
