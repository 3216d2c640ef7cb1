//! Monitor queries used by the borderless frame.
//!
//! A frameless window that maximizes must be told where the monitor's work
//! area lies, otherwise the platform extends it under the taskbar. Moving the
//! window onto a different monitor also invalidates the cached frame metrics,
//! which [`MonitorTracker`] detects.

use crate::geometry::{Point, Rect, Size};
use crate::logging::targets;

/// Opaque identity of a physical monitor.
///
/// Only equality is meaningful. On Windows this is the `HMONITOR` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonitorId(u64);

impl MonitorId {
    /// Wrap a raw platform monitor identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw identifier.
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

/// Geometry of the monitor a window currently sits on, in physical virtual
/// screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorWorkArea {
    /// Identity of the monitor.
    pub id: MonitorId,
    /// Full monitor bounds.
    pub monitor: Rect,
    /// Monitor bounds minus taskbars and docked bars.
    pub work_area: Rect,
}

impl MonitorWorkArea {
    /// Create monitor geometry.
    pub const fn new(id: MonitorId, monitor: Rect, work_area: Rect) -> Self {
        Self {
            id,
            monitor,
            work_area,
        }
    }
}

/// Size limits reported for a min/max-info query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackLimits {
    /// Maximized position and size.
    ///
    /// The position is relative to the monitor origin. `None` when the
    /// monitor could not be queried, in which case the platform defaults
    /// are kept.
    pub maximized: Option<(Point, Size)>,
    /// Minimum tracking size in physical pixels.
    pub min_track_size: Size,
}

/// Compute the maximize geometry and minimum tracking size.
///
/// `min_logical` is scaled by `scale_factor` so the minimum stays constant in
/// logical pixels across monitors.
pub fn track_limits(
    min_logical: Size,
    scale_factor: f64,
    monitor: Option<&MonitorWorkArea>,
) -> TrackLimits {
    let maximized = monitor.map(|m| {
        let position = Point::new(
            m.work_area.left - m.monitor.left,
            m.work_area.top - m.monitor.top,
        );
        (position, m.work_area.size())
    });

    TrackLimits {
        maximized,
        min_track_size: min_logical.to_physical(scale_factor),
    }
}

/// Remembers the last monitor a window was seen on.
///
/// Each window owns its own tracker, so two windows moving in alternation
/// never see each other's monitor.
#[derive(Debug, Clone, Default)]
pub struct MonitorTracker {
    last: Option<MonitorId>,
}

impl MonitorTracker {
    /// Create a tracker that has not seen any monitor yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last observed monitor.
    pub fn current(&self) -> Option<MonitorId> {
        self.last
    }

    /// Record the monitor the window is on after a move.
    ///
    /// Returns `true` only when the window changed monitor. The first
    /// observation establishes a baseline and returns `false`.
    pub fn observe(&mut self, id: MonitorId) -> bool {
        let previous = self.last.replace(id);
        let changed = previous.is_some_and(|prev| prev != id);
        if changed {
            tracing::debug!(
                target: targets::MONITOR,
                from = previous.map(|p| p.raw()),
                to = id.raw(),
                "window moved to another monitor"
            );
        }
        changed
    }
}
