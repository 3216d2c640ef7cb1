//! Borderless window chrome.
//!
//! - [`FramelessChrome`]: hit-test state machine and frame suppression
//! - [`TitleBar`]: the application-drawn title bar and its buttons
//! - [`BorderlessWindow`]: controller combining both with the lifecycle
//! - [`NativeMessage`]: decoded platform messages for the native bridge

mod borderless_window;
mod chrome_config;
mod frameless_chrome;
mod host;
mod monitor;
mod native_bridge;
mod title_bar;
mod window_state;

pub use borderless_window::{BorderlessWindow, ChromeCapabilities, CloseIntent};
pub use chrome_config::{
    BUTTON_WIDTH, ChromeConfig, DEFAULT_MIN_SIZE, DEFAULT_TITLE_BAR_HEIGHT, HIT_TEST_MARGIN,
};
pub use frameless_chrome::{
    ButtonBands, FramelessChrome, HitRegion, HitTestInput, MaximizeHover, ResizeDirection,
    cursor_for_region,
};
pub use host::{ChromeHost, WindowRequest};
pub use monitor::{MonitorId, MonitorTracker, MonitorWorkArea, TrackLimits, track_limits};
pub use native_bridge::{MessageOutcome, NativeDispatch, NativeMessage, SizeKind};
pub use title_bar::{
    BUTTON_HOVER_COLOR, BUTTON_HOVER_TEXT_COLOR, BUTTON_TEXT_COLOR, ButtonKind, ButtonVisual,
    CLOSE_HOVER_COLOR, Color, TITLE_BAR_COLOR, TitleBar, TitleBarButton, TitleBarIntent,
    TitleBarLayout,
};
pub use window_state::WindowState;
