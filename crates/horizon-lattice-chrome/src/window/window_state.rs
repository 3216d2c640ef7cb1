//! Window lifecycle state.

/// The lifecycle state of a top-level window.
///
/// The platform window owns this state. The chrome only observes it through
/// lifecycle notifications and asks for changes through
/// [`WindowRequest`](super::WindowRequest)s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindowState {
    /// Normal window state (restored size and position).
    #[default]
    Normal,
    /// Window is minimized (iconified).
    Minimized,
    /// Window is maximized to the monitor work area.
    Maximized,
    /// Window covers the entire monitor.
    Fullscreen,
}

impl WindowState {
    /// Check if the window is in a normal state.
    pub fn is_normal(&self) -> bool {
        matches!(self, WindowState::Normal)
    }

    /// Check if the window is minimized.
    pub fn is_minimized(&self) -> bool {
        matches!(self, WindowState::Minimized)
    }

    /// Check if the window is maximized.
    pub fn is_maximized(&self) -> bool {
        matches!(self, WindowState::Maximized)
    }

    /// Check if the window is fullscreen.
    pub fn is_fullscreen(&self) -> bool {
        matches!(self, WindowState::Fullscreen)
    }

    /// Whether the window edges may be dragged to resize in this state.
    ///
    /// A maximized or fullscreen window has no free edges.
    pub fn allows_edge_resize(&self) -> bool {
        !matches!(self, WindowState::Maximized | WindowState::Fullscreen)
    }
}
