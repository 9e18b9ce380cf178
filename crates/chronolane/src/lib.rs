//! # chronolane
//!
//! Deterministic event layout for calendar timelines.
//!
//! Given a collection of events (start, end, all-day flag) and a reference
//! date, chronolane computes the visual arrangement a day or week timeline
//! needs: which column each event occupies inside its overlap cluster, how
//! many columns the cluster requires, and the box geometry (width, height,
//! offsets) a renderer maps onto drawing primitives. It also answers the
//! membership question month grids and multi-day banner rows ask ("does
//! this event fall on this day?") without any packing.
//!
//! The engine draws nothing and keeps no state: every layout pass is a pure
//! function of (events, reference date, available width, options).
//!
//! ## Modules
//!
//! - [`event`] — The [`TimelineEvent`] schema the engine reads, and a plain
//!   [`Event`] type for callers without their own model
//! - [`overlap`] — Interval predicates: timed overlap, day membership
//! - [`cluster`] — Connected-component clustering over the overlap relation
//! - [`pack`] — Greedy earliest-free-column packing within a cluster
//! - [`geometry`] — Scale constants and time/column → rectangle arithmetic
//! - [`layout`] — The facade: [`compute_layout`] and its options
//! - [`error`] — Error types

pub mod cluster;
pub mod error;
pub mod event;
pub mod geometry;
pub mod layout;
pub mod overlap;
pub mod pack;

pub use cluster::find_clusters;
pub use error::LayoutError;
pub use event::{Event, TimelineEvent};
pub use geometry::{
    EventGeometry, GeometryConfig, TimelineKind, DEFAULT_GUTTER, DEFAULT_HOUR_HEIGHT,
    DEFAULT_TIME_BAR_WIDTH,
};
pub use layout::{compute_layout, week_window, EventLayoutRecord, LayoutOptions, WeekStart, WeekWindow};
pub use overlap::{
    contains_instant, events_overlap, occurring_on, occurs_on_date, spans_multiple_days,
};
pub use pack::{pack_columns, PackedColumns};
