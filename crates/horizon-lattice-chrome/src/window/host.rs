//! The seam between the chrome state machine and the platform window.

use super::frameless_chrome::ResizeDirection;
use super::monitor::MonitorWorkArea;
use super::window_state::WindowState;
use crate::geometry::{Point, Size};

/// Read-only queries the chrome makes against the platform window.
///
/// Implemented over a Win32 `HWND` by the native hook, over a winit window
/// for the toolkit fallback, and by mocks in tests. Every query may fail; a
/// failed query degrades the answer rather than erroring.
pub trait ChromeHost {
    /// Device pixel ratio of the window.
    fn scale_factor(&self) -> f64;

    /// Current lifecycle state.
    fn window_state(&self) -> WindowState;

    /// Convert a physical screen point to physical client coordinates.
    fn screen_to_client(&self, screen: Point) -> Option<Point>;

    /// Client area size in physical pixels.
    fn client_size(&self) -> Option<Size>;

    /// Geometry of the monitor nearest to the window.
    fn monitor_work_area(&self) -> Option<MonitorWorkArea>;
}

/// A mutation of the platform window requested by the chrome.
///
/// The chrome never mutates the window while handling a message. Native
/// calls such as `ShowWindow` re-enter the window procedure synchronously,
/// so requests are collected and executed by the platform layer once the
/// chrome is no longer borrowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowRequest {
    /// Minimize the window.
    Minimize,
    /// Maximize the window.
    Maximize,
    /// Restore from maximized or minimized.
    Restore,
    /// Close the window; the close has already passed the veto.
    Close,
    /// Re-run the non-client size calculation without moving or resizing.
    RefreshFrame,
    /// Re-apply the native frame style for the resizable flag.
    ApplyFrameStyle {
        /// Whether the thick (resizable) frame should be present.
        resizable: bool,
    },
    /// Start an interactive window move.
    BeginMove,
    /// Start an interactive resize from an edge or corner.
    BeginResize(ResizeDirection),
    /// Repaint the title bar.
    Redraw,
}
