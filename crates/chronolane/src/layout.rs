//! The layout facade: from an event collection and a reference date to one
//! layout record per visible timed event.
//!
//! The pipeline is filter → cluster → pack → resolve geometry. Events with
//! non-positive duration, all-day events, and events starting outside the
//! reference week are silently dropped: that is the filtering contract, not
//! an error condition. The whole computation is a pure function of its
//! inputs; nothing is cached between calls.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::Serialize;

use crate::cluster::find_clusters;
use crate::error::LayoutError;
use crate::event::TimelineEvent;
use crate::geometry::{EventGeometry, GeometryConfig, TimelineKind};
use crate::pack::pack_columns;

// ── Week alignment ──────────────────────────────────────────────────────────

/// Which day begins the reference week.
///
/// Controls both the filtering window and the `day_index` used for week-view
/// horizontal placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum WeekStart {
    /// ISO 8601 standard (Monday = first day of the week).
    #[default]
    Monday,
    /// US/Canada convention (Sunday = first day of the week).
    Sunday,
}

impl WeekStart {
    /// How many days `weekday` is from the week's first day (0-6).
    fn offset_from_start(self, weekday: Weekday) -> u32 {
        match self {
            WeekStart::Monday => weekday.num_days_from_monday(),
            WeekStart::Sunday => weekday.num_days_from_sunday(),
        }
    }

    /// 1-based weekday position within a week starting on `self`.
    pub fn day_index(self, weekday: Weekday) -> u32 {
        self.offset_from_start(weekday) + 1
    }
}

impl std::str::FromStr for WeekStart {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(WeekStart::Monday),
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            other => Err(LayoutError::UnknownWeekStart(other.to_string())),
        }
    }
}

/// The half-open datetime interval of one displayed week.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeekWindow {
    /// Midnight at the start of the week's first day.
    pub start: NaiveDateTime,
    /// Midnight at the start of the following week (exclusive).
    pub end: NaiveDateTime,
}

impl WeekWindow {
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant < self.end
    }

    /// The week's first calendar day.
    pub fn first_day(&self) -> NaiveDate {
        self.start.date()
    }
}

/// The week containing `date`, aligned to `week_start`.
///
/// `None` only when the week would fall outside chrono's representable date
/// range; the facade treats that as "no usable window" and lays out nothing.
pub fn week_window(date: NaiveDate, week_start: WeekStart) -> Option<WeekWindow> {
    let back = week_start.offset_from_start(date.weekday());
    let first = date.checked_sub_days(Days::new(u64::from(back)))?;
    let next = first.checked_add_days(Days::new(7))?;

    Some(WeekWindow {
        start: first.and_time(NaiveTime::MIN),
        end: next.and_time(NaiveTime::MIN),
    })
}

// ── Options and output ──────────────────────────────────────────────────────

/// Knobs for one layout pass.
#[derive(Debug, Clone, Default)]
pub struct LayoutOptions {
    pub kind: TimelineKind,
    pub week_start: WeekStart,
    pub geometry: GeometryConfig,
}

/// One laid-out timed event.
///
/// Borrows the source event rather than copying it; display attributes stay
/// wherever the caller keeps them.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "E: Serialize"))]
pub struct EventLayoutRecord<'a, E: TimelineEvent> {
    pub event: &'a E,
    /// Total columns allocated to this event's overlap cluster (>= 1).
    pub cluster_size: u32,
    /// This event's 1-based column within the cluster.
    pub column: u32,
    /// 1-based weekday position relative to the displayed week's first day.
    pub day_index: u32,
    pub geometry: EventGeometry,
}

// ── Facade ──────────────────────────────────────────────────────────────────

/// Lay out every visible timed event for the week containing
/// `reference_date`.
///
/// Filters to events that are timed, have positive duration, and start
/// inside the reference week; clusters the survivors by transitive overlap;
/// packs each cluster into columns; and resolves the grid geometry for each
/// event. Records come back grouped by cluster and ordered by column within
/// a cluster; callers needing a stable render order should re-sort by start
/// time.
///
/// Identical inputs (including input order) produce identical records.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use chronolane::{compute_layout, Event, LayoutOptions};
///
/// let day = NaiveDate::from_ymd_opt(2024, 4, 13).unwrap();
/// let at = |h, m| day.and_hms_opt(h, m, 0).unwrap();
///
/// let events = vec![
///     Event::new("standup", at(9, 0), at(10, 0)),
///     Event::new("review", at(9, 30), at(10, 30)),
/// ];
///
/// let records = compute_layout(&events, day, 747.0, &LayoutOptions::default());
/// assert_eq!(records.len(), 2);
/// assert!(records.iter().all(|r| r.cluster_size == 2));
/// ```
pub fn compute_layout<'a, E: TimelineEvent>(
    events: &'a [E],
    reference_date: NaiveDate,
    available_width: f64,
    options: &LayoutOptions,
) -> Vec<EventLayoutRecord<'a, E>> {
    let Some(window) = week_window(reference_date, options.week_start) else {
        return Vec::new();
    };

    let visible: Vec<&E> = events
        .iter()
        .filter(|event| !event.is_all_day())
        .filter(|event| event.end() > event.start())
        .filter(|event| window.contains(event.start()))
        .collect();

    let geometry = &options.geometry;
    let slot_width = geometry.slot_width(available_width, options.kind);

    let mut records = Vec::with_capacity(visible.len());

    for cluster in find_clusters(&visible) {
        let members: Vec<&E> = cluster.into_iter().map(|index| visible[index]).collect();
        let packed = pack_columns(&members);

        let mut placed: Vec<(&E, u32)> = members
            .into_iter()
            .map(|event| {
                let column = packed.column_of(&event.id()).unwrap_or(1);
                (event, column)
            })
            .collect();
        placed.sort_by_key(|&(event, column)| (column, event.start()));

        for (event, column) in placed {
            let start = event.start();
            let day_index = options.week_start.day_index(start.date().weekday());
            let width = geometry.event_width(slot_width, packed.count);

            records.push(EventLayoutRecord {
                event,
                cluster_size: packed.count,
                column,
                day_index,
                geometry: EventGeometry {
                    width,
                    height: geometry.event_height(start, event.end()),
                    x_offset: geometry.horizontal_offset(
                        options.kind,
                        slot_width,
                        day_index,
                        column,
                        width,
                    ),
                    y_offset: geometry.vertical_offset(start),
                },
            });
        }
    }

    records
}

// ── Tests ───────────────────────────────────────────────────────────────────
