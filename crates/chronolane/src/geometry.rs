//! Grid geometry: pure arithmetic from times and column assignments to
//! pixel-space rectangles.
//!
//! Nothing in this module iterates over other events. Every number is a
//! function of one event's instants, its column within its cluster, the
//! cluster's column count, and the configured scale constants.

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

use crate::error::LayoutError;

/// Vertical scale: layout units per hour of event time.
pub const DEFAULT_HOUR_HEIGHT: f64 = 60.0;

/// Horizontal gap between columns sharing a day slot.
pub const DEFAULT_GUTTER: f64 = 5.0;

/// Width reserved on the left for the hour-label strip.
pub const DEFAULT_TIME_BAR_WIDTH: f64 = 47.0;

/// Number of day columns in a week timeline.
const DAYS_SHOWN_PER_WEEK: f64 = 7.0;

// ── Timeline kind ───────────────────────────────────────────────────────────

/// Which timeline the layout targets.
///
/// A day timeline spends the full event area on one day; a week timeline
/// splits it into seven day slots and offsets each event into its weekday's
/// slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TimelineKind {
    Day,
    #[default]
    Week,
}

impl std::str::FromStr for TimelineKind {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "day" => Ok(TimelineKind::Day),
            "week" => Ok(TimelineKind::Week),
            other => Err(LayoutError::UnknownTimelineKind(other.to_string())),
        }
    }
}

// ── Config ──────────────────────────────────────────────────────────────────

/// Scale constants for the hour grid.
///
/// All fields are layout units (logical pixels for most renderers). The
/// defaults reproduce a 60-unit hour, a 5-unit inter-column gutter, and a
/// 47-unit hour-label strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeometryConfig {
    /// Vertical units per hour of event time.
    pub hour_height: f64,
    /// Horizontal gap between adjacent columns.
    pub gutter: f64,
    /// Width reserved for the hour labels on the left edge.
    pub time_bar_width: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        GeometryConfig {
            hour_height: DEFAULT_HOUR_HEIGHT,
            gutter: DEFAULT_GUTTER,
            time_bar_width: DEFAULT_TIME_BAR_WIDTH,
        }
    }
}

impl GeometryConfig {
    /// Check the scale constants are usable.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidDimension`] if `hour_height` is not a
    /// positive finite number, or if `gutter`/`time_bar_width` are negative
    /// or non-finite. Library callers building configs from literals can
    /// skip this; boundaries accepting user input (the CLI) should not.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.hour_height.is_finite() || self.hour_height <= 0.0 {
            return Err(LayoutError::InvalidDimension(format!(
                "hour_height must be positive and finite, got {}",
                self.hour_height
            )));
        }
        if !self.gutter.is_finite() || self.gutter < 0.0 {
            return Err(LayoutError::InvalidDimension(format!(
                "gutter must be non-negative and finite, got {}",
                self.gutter
            )));
        }
        if !self.time_bar_width.is_finite() || self.time_bar_width < 0.0 {
            return Err(LayoutError::InvalidDimension(format!(
                "time_bar_width must be non-negative and finite, got {}",
                self.time_bar_width
            )));
        }
        Ok(())
    }

    /// Height of an event box: duration scaled by [`hour_height`](Self::hour_height).
    ///
    /// A multi-day timed event keeps its full duration-derived height; the
    /// renderer's 24-hour grid clips it. Negative durations (already
    /// filtered by the facade) clamp to zero rather than producing an
    /// upside-down box.
    pub fn event_height(&self, start: NaiveDateTime, end: NaiveDateTime) -> f64 {
        let seconds = (end - start).num_seconds().max(0) as f64;
        seconds / 3600.0 * self.hour_height
    }

    /// Vertical offset of an event box: the time-of-day of its start.
    ///
    /// Hours scale by [`hour_height`](Self::hour_height); minutes are added
    /// as raw units, which lines up exactly at the default 60-unit hour.
    pub fn vertical_offset(&self, start: NaiveDateTime) -> f64 {
        self.time_offset(start.time())
    }

    /// Vertical offset for an arbitrary time of day.
    ///
    /// Same formula as [`vertical_offset`](Self::vertical_offset); renderers
    /// use it to place the current-time indicator line.
    pub fn time_offset(&self, time: NaiveTime) -> f64 {
        f64::from(time.hour()) * self.hour_height + f64::from(time.minute())
    }

    /// Width of one day slot.
    ///
    /// The event area is the available width minus the hour-label strip; a
    /// week timeline divides it across seven days, a day timeline keeps all
    /// of it. Never negative: an available width narrower than the time bar
    /// collapses the slot to zero.
    pub fn slot_width(&self, available_width: f64, kind: TimelineKind) -> f64 {
        let event_area = (available_width - self.time_bar_width).max(0.0);
        match kind {
            TimelineKind::Day => event_area,
            TimelineKind::Week => event_area / DAYS_SHOWN_PER_WEEK,
        }
    }

    /// Width of one event box: an equal share of the slot, minus the gutter.
    ///
    /// Never negative; a slot too narrow for the gutter collapses to zero
    /// width rather than folding boxes over each other.
    pub fn event_width(&self, slot_width: f64, cluster_size: u32) -> f64 {
        let share = slot_width / f64::from(cluster_size.max(1));
        (share - self.gutter).max(0.0)
    }

    /// Horizontal offset of an event box.
    ///
    /// Starts past the hour-label strip, steps into the weekday's slot on a
    /// week timeline (`day_index` is 1-based relative to the displayed
    /// week's first day, ignored for a day timeline), then steps right one
    /// `(width + gutter)` stride per column.
    pub fn horizontal_offset(
        &self,
        kind: TimelineKind,
        slot_width: f64,
        day_index: u32,
        column: u32,
        event_width: f64,
    ) -> f64 {
        let day_offset = match kind {
            TimelineKind::Day => 0.0,
            TimelineKind::Week => f64::from(day_index.saturating_sub(1)) * slot_width,
        };
        let column_offset = f64::from(column.saturating_sub(1)) * (event_width + self.gutter);

        self.time_bar_width + day_offset + column_offset
    }
}

// ── Resolved geometry ───────────────────────────────────────────────────────

/// The rectangle a renderer draws for one event, in layout units.
///
/// `x_offset`/`y_offset` locate the top-left corner relative to the
/// timeline's origin (left edge including the hour-label strip, 00:00 at the
/// top).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventGeometry {
    pub width: f64,
    pub height: f64,
    pub x_offset: f64,
    pub y_offset: f64,
}

// ── Tests ───────────────────────────────────────────────────────────────────
