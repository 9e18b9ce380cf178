//! The event schema the engine reads, and a ready-made concrete event type.
//!
//! The engine never depends on a concrete event model. Any type exposing a
//! stable id, a start instant, an end instant, and an all-day flag can be
//! laid out; display attributes stay on the caller's type and travel through
//! the layout untouched (records hold a borrow of the source event).

use std::fmt::Debug;
use std::hash::Hash;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The fields the layout engine reads from an event.
///
/// Implement this on your own event model to feed it to
/// [`compute_layout`](crate::compute_layout). Instants are naive local
/// datetimes: the engine does no timezone conversion, and geometry is always
/// derived from the local calendar components of `start`.
pub trait TimelineEvent {
    /// Stable unique identifier, used for equality and hash keys throughout
    /// clustering and packing. Two distinct events must never share an id.
    type Id: Clone + Eq + Hash + Debug;

    fn id(&self) -> Self::Id;

    /// Start instant. Must precede [`end`](TimelineEvent::end) for the event
    /// to be laid out; violations are filtered, not reported.
    fn start(&self) -> NaiveDateTime;

    /// End instant.
    fn end(&self) -> NaiveDateTime;

    /// All-day events skip timed-overlap clustering and the hour grid
    /// entirely; they are placed by the banner path via
    /// [`occurs_on_date`](crate::occurs_on_date).
    fn is_all_day(&self) -> bool;
}

/// A plain calendar event for callers without their own event model.
///
/// `label` and `color` are opaque to the engine and only exist so a renderer
/// (or the CLI's JSON output) has something to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub color: String,
}

impl Event {
    /// A timed event with empty display attributes.
    pub fn new(id: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Event {
            id: id.into(),
            start,
            end,
            all_day: false,
            label: String::new(),
            color: String::new(),
        }
    }
}

impl TimelineEvent for Event {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn start(&self) -> NaiveDateTime {
        self.start
    }

    fn end(&self) -> NaiveDateTime {
        self.end
    }

    fn is_all_day(&self) -> bool {
        self.all_day
    }
}
