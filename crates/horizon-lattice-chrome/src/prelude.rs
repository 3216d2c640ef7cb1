//! Prelude module for the borderless window chrome.
//!
//! ```ignore
//! use horizon_lattice_chrome::prelude::*;
//! ```

// ============================================================================
// Controller and Configuration
// ============================================================================

pub use crate::window::{
    BorderlessWindow, ChromeCapabilities, ChromeConfig, CloseIntent, WindowRequest, WindowState,
};

// ============================================================================
// Hit Testing
// ============================================================================

pub use crate::window::{ChromeHost, HitRegion, cursor_for_region};

// ============================================================================
// Title Bar
// ============================================================================

pub use crate::window::{ButtonKind, TitleBar, TitleBarIntent};

// ============================================================================
// Platform
// ============================================================================

#[cfg(target_os = "windows")]
pub use crate::platform::NativeChromeHook;
pub use crate::platform::{WinitResponse, handle_window_event, has_native_chrome_hook};

// ============================================================================
// Common Types
// ============================================================================

pub use crate::geometry::{Point, Rect, Size};
pub use crate::signal::{ConnectionId, Signal};
pub use crate::{ChromeError, ChromeResult};
