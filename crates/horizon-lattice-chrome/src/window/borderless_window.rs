//! Borderless main window controller.
//!
//! [`BorderlessWindow`] ties together the hit-test state machine, the custom
//! title bar, and the window lifecycle. It is fed by one of two event
//! sources:
//!
//! - the native message bridge ([`BorderlessWindow::dispatch_native`]) when
//!   the platform lets the chrome answer its hit tests (Windows), or
//! - the toolkit pointer path ([`BorderlessWindow::pointer_moved`] and
//!   friends), which starts interactive moves and resizes itself.
//!
//! Window mutations are never performed here. They are queued as
//! [`WindowRequest`]s and drained by the platform layer.
//!
//! # Signals
//!
//! - `close_requested`: a close is about to be requested; slots may veto it
//! - `state_changed`: the lifecycle state changed

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::chrome_config::ChromeConfig;
use super::frameless_chrome::{FramelessChrome, HitRegion, HitTestInput};
use super::host::{ChromeHost, WindowRequest};
use super::monitor::MonitorId;
use super::title_bar::{ButtonKind, TitleBar, TitleBarIntent};
use super::window_state::WindowState;
use crate::error::ChromeResult;
use crate::geometry::Point;
use crate::logging::targets;
use crate::signal::Signal;

/// A pending close that slots of `close_requested` may veto.
///
/// Clones share the same veto flag.
#[derive(Debug, Clone, Default)]
pub struct CloseIntent {
    vetoed: Arc<AtomicBool>,
}

impl CloseIntent {
    /// Create an intent that has not been vetoed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prevent the close.
    pub fn veto(&self) {
        self.vetoed.store(true, Ordering::SeqCst);
    }

    /// Whether any slot vetoed the close.
    pub fn is_vetoed(&self) -> bool {
        self.vetoed.load(Ordering::SeqCst)
    }
}

/// Which event sources can drive window moves and resizes.
///
/// The default assumes no native hook, even where the platform has one;
/// installing the hook sets `native_hook`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeCapabilities {
    /// A native hook answers the platform's hit tests.
    pub native_hook: bool,
    /// The toolkit can start interactive moves and resizes.
    pub toolkit_drag: bool,
}

impl Default for ChromeCapabilities {
    fn default() -> Self {
        Self {
            native_hook: false,
            toolkit_drag: true,
        }
    }
}

impl ChromeCapabilities {
    /// Whether the title bar can drag the window by any path.
    pub fn can_drag(&self) -> bool {
        self.native_hook || self.toolkit_drag
    }
}

/// Controller for a borderless main window with a custom title bar.
pub struct BorderlessWindow {
    pub(super) chrome: FramelessChrome,
    pub(super) title_bar: TitleBar,
    state: WindowState,
    capabilities: ChromeCapabilities,
    last_pointer: Option<Point>,
    pressed: Option<HitRegion>,
    pending: Vec<WindowRequest>,

    /// Emitted before a close is requested. Call [`CloseIntent::veto`] to
    /// keep the window open.
    pub close_requested: Signal<CloseIntent>,
    /// Emitted when the lifecycle state changes.
    pub state_changed: Signal<WindowState>,
}

impl std::fmt::Debug for BorderlessWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BorderlessWindow")
            .field("chrome", &self.chrome)
            .field("title_bar", &self.title_bar)
            .field("state", &self.state)
            .field("capabilities", &self.capabilities)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl Default for BorderlessWindow {
    fn default() -> Self {
        Self::new(ChromeConfig::new())
    }
}

impl BorderlessWindow {
    /// Create a controller with the given chrome configuration.
    pub fn new(config: ChromeConfig) -> Self {
        let title_bar = TitleBar::for_config(&config);
        Self {
            chrome: FramelessChrome::new(config),
            title_bar,
            state: WindowState::Normal,
            capabilities: ChromeCapabilities::default(),
            last_pointer: None,
            pressed: None,
            pending: Vec::new(),
            close_requested: Signal::new(),
            state_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The hit-test state machine.
    pub fn chrome(&self) -> &FramelessChrome {
        &self.chrome
    }

    /// The title bar.
    pub fn title_bar(&self) -> &TitleBar {
        &self.title_bar
    }

    /// Mutable access to the title bar, e.g. to hide a button.
    pub fn title_bar_mut(&mut self) -> &mut TitleBar {
        &mut self.title_bar
    }

    /// Last lifecycle state reported to the controller.
    pub fn state(&self) -> WindowState {
        self.state
    }

    /// Current event-source capabilities.
    pub fn capabilities(&self) -> ChromeCapabilities {
        self.capabilities
    }

    /// Title bar height in logical pixels.
    pub fn title_bar_height(&self) -> i32 {
        self.chrome.config().title_bar_height()
    }

    /// Whether edge resizing is enabled.
    pub fn is_resizable(&self) -> bool {
        self.chrome.config().is_resizable()
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Set the title bar height for both hit-testing and the title bar.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::InvalidTitleBarHeight`](crate::ChromeError) if
    /// `height <= 0`; nothing changes.
    pub fn set_title_bar_height(&mut self, height: i32) -> ChromeResult<()> {
        if self.chrome.config_mut().set_title_bar_height(height)? {
            self.title_bar.set_height(height)?;
            tracing::debug!(target: targets::CHROME, height, "title bar height changed");
            self.flush_repaint();
        }
        Ok(())
    }

    /// Enable or disable edge resizing and re-apply the native frame style.
    pub fn set_resizable(&mut self, resizable: bool) {
        if self.chrome.config().is_resizable() == resizable {
            return;
        }
        self.chrome.config_mut().set_resizable(resizable);
        tracing::debug!(target: targets::CHROME, resizable, "resizable changed");
        self.pending.push(WindowRequest::ApplyFrameStyle { resizable });
    }

    /// Update which event sources are available.
    ///
    /// Without any drag path the title bar stops advertising itself as
    /// draggable.
    pub fn set_capabilities(&mut self, capabilities: ChromeCapabilities) {
        if self.capabilities != capabilities {
            tracing::debug!(target: targets::CHROME, ?capabilities, "capabilities changed");
        }
        self.capabilities = capabilities;
        self.title_bar.set_drag_hints_enabled(capabilities.can_drag());
    }

    /// Record that the toolkit could not start an interactive move or
    /// resize, and stop relying on it.
    pub fn drag_unavailable(&mut self) {
        let capabilities = ChromeCapabilities {
            toolkit_drag: false,
            ..self.capabilities
        };
        tracing::warn!(target: targets::CHROME, "toolkit drag unavailable");
        self.set_capabilities(capabilities);
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Notify the controller of the window's lifecycle state.
    ///
    /// Entering or leaving `Maximized` swaps the maximize glyph before this
    /// returns.
    pub fn on_state_changed(&mut self, state: WindowState) {
        if self.state == state {
            return;
        }
        let was_maximized = self.state.is_maximized();
        self.state = state;

        if was_maximized != state.is_maximized() {
            self.title_bar.update_maximize_state(state.is_maximized());
            self.flush_repaint();
        }

        tracing::debug!(target: targets::LIFECYCLE, ?state, "window state changed");
        self.state_changed.emit(state);
    }

    /// The window is being shown.
    pub fn on_show(&mut self) {
        if self.is_resizable() {
            self.pending
                .push(WindowRequest::ApplyFrameStyle { resizable: true });
        }
    }

    /// The window moved; `monitor` is the monitor it is now on.
    ///
    /// Moving to a different monitor requests a single frame refresh.
    pub fn on_moved(&mut self, monitor: MonitorId) {
        if self.chrome.monitor_tracker_mut().observe(monitor) {
            tracing::debug!(target: targets::MONITOR, "requesting frame refresh");
            self.pending.push(WindowRequest::RefreshFrame);
        }
    }

    /// Ask to close the window.
    ///
    /// Emits `close_requested` first. Returns `false` if a slot vetoed.
    pub fn request_close(&mut self) -> bool {
        let intent = CloseIntent::new();
        self.close_requested.emit(intent.clone());
        if intent.is_vetoed() {
            tracing::debug!(target: targets::LIFECYCLE, "close vetoed");
            return false;
        }
        self.pending.push(WindowRequest::Close);
        true
    }

    /// Activate a title bar button as if it had been clicked.
    pub fn activate_button(&mut self, kind: ButtonKind) {
        if let Some(intent) = self.title_bar.activate(kind) {
            self.apply_intent(intent);
        }
    }

    /// Carry out a title bar intent.
    pub fn apply_intent(&mut self, intent: TitleBarIntent) {
        match intent {
            TitleBarIntent::Minimize => self.pending.push(WindowRequest::Minimize),
            TitleBarIntent::MaximizeToggle => {
                let request = if self.state.is_maximized() {
                    WindowRequest::Restore
                } else {
                    WindowRequest::Maximize
                };
                self.pending.push(request);
            }
            TitleBarIntent::Close => {
                self.request_close();
            }
        }
    }

    // =========================================================================
    // Hit Testing
    // =========================================================================

    /// Classify a physical client point against the host's current geometry.
    ///
    /// Falls back to [`HitRegion::Client`] when the client size is unknown.
    pub fn hit_test_client(&mut self, pointer: Point, host: &dyn ChromeHost) -> HitRegion {
        let Some(input) = self.hit_test_input(pointer, host) else {
            return HitRegion::Client;
        };
        let region = self.chrome.classify(&input, &mut self.title_bar);
        self.flush_repaint();
        region
    }

    /// Classify a physical screen point.
    pub fn hit_test_screen(&mut self, screen: Point, host: &dyn ChromeHost) -> HitRegion {
        match host.screen_to_client(screen) {
            Some(pointer) => self.hit_test_client(pointer, host),
            None => HitRegion::Client,
        }
    }

    /// Whether a physical screen point is on the visible maximize button.
    pub fn is_over_maximize_button(&self, screen: Point, host: &dyn ChromeHost) -> bool {
        host.screen_to_client(screen)
            .and_then(|pointer| self.hit_test_input(pointer, host))
            .is_some_and(|input| self.chrome.is_over_maximize_button(&input))
    }

    /// Clear the maximize hover mirrored from the platform hit test.
    pub fn clear_maximize_hover(&mut self) {
        self.chrome.clear_hover(&mut self.title_bar);
        self.flush_repaint();
    }

    fn hit_test_input(&self, pointer: Point, host: &dyn ChromeHost) -> Option<HitTestInput> {
        let client_size = host.client_size()?;
        Some(
            HitTestInput::new(pointer, client_size)
                .with_scale_factor(host.scale_factor())
                .with_state(host.window_state())
                .with_maximize_visible(self.title_bar.button(ButtonKind::Maximize).is_visible()),
        )
    }

    // =========================================================================
    // Toolkit Pointer Path
    // =========================================================================

    /// The pointer moved within the client area.
    pub fn pointer_moved(&mut self, pointer: Point, host: &dyn ChromeHost) -> HitRegion {
        self.last_pointer = Some(pointer);
        let region = self.hit_test_client(pointer, host);
        self.title_bar.set_passthrough_hover(region.button());
        self.flush_repaint();
        region
    }

    /// The pointer left the client area.
    pub fn pointer_left(&mut self) {
        self.last_pointer = None;
        self.pressed = None;
        self.chrome.clear_hover(&mut self.title_bar);
        self.title_bar.set_passthrough_hover(None);
        self.flush_repaint();
    }

    /// The primary button was pressed. Returns `true` if the chrome consumed
    /// the press.
    pub fn pointer_pressed(&mut self, host: &dyn ChromeHost) -> bool {
        let Some(pointer) = self.last_pointer else {
            return false;
        };
        let region = self.hit_test_client(pointer, host);

        if region.is_button() {
            self.pressed = Some(region);
            return true;
        }

        // With a native hook the platform owns caption and edge drags.
        if self.capabilities.native_hook || !self.capabilities.toolkit_drag {
            return false;
        }

        if region.is_draggable() && self.title_bar.drag_hints_enabled() {
            self.pending.push(WindowRequest::BeginMove);
            return true;
        }
        if let Some(direction) = region.resize_direction() {
            self.pending.push(WindowRequest::BeginResize(direction));
            return true;
        }
        false
    }

    /// The primary button was released. Activates a button if the press and
    /// the release landed on the same one.
    pub fn pointer_released(&mut self, host: &dyn ChromeHost) -> bool {
        let Some(pressed) = self.pressed.take() else {
            return false;
        };
        let Some(pointer) = self.last_pointer else {
            return false;
        };
        let region = self.hit_test_client(pointer, host);
        match region.button() {
            Some(kind) if region == pressed => {
                self.activate_button(kind);
                true
            }
            _ => false,
        }
    }

    // =========================================================================
    // Requests
    // =========================================================================

    /// Drain the queued window mutations.
    pub fn take_requests(&mut self) -> Vec<WindowRequest> {
        std::mem::take(&mut self.pending)
    }

    fn flush_repaint(&mut self) {
        if self.title_bar.take_needs_repaint()
            && !self.pending.contains(&WindowRequest::Redraw)
        {
            self.pending.push(WindowRequest::Redraw);
        }
    }
}

// Slots may hold controllers behind Arc<Mutex<_>>.
static_assertions::assert_impl_all!(BorderlessWindow: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::window::monitor::MonitorWorkArea;
    use std::sync::atomic::AtomicUsize;

    struct FixedHost {
        size: Size,
        state: WindowState,
    }

    impl ChromeHost for FixedHost {
        fn scale_factor(&self) -> f64 {
            1.0
        }
        fn window_state(&self) -> WindowState {
            self.state
        }
        fn screen_to_client(&self, screen: Point) -> Option<Point> {
            Some(screen)
        }
        fn client_size(&self) -> Option<Size> {
            Some(self.size)
        }
        fn monitor_work_area(&self) -> Option<MonitorWorkArea> {
            None
        }
    }

    fn host() -> FixedHost {
        FixedHost {
            size: Size::new(800, 600),
            state: WindowState::Normal,
        }
    }

    fn window() -> BorderlessWindow {
        let mut window = BorderlessWindow::default();
        window.take_requests();
        window
    }

    #[test]
    fn test_set_title_bar_height_propagates() {
        let mut window = window();
        window.set_title_bar_height(48).unwrap();
        assert_eq!(window.title_bar_height(), 48);
        assert_eq!(window.title_bar().height(), 48);
        assert_eq!(window.title_bar().button(ButtonKind::Close).height(), 48);

        assert!(window.set_title_bar_height(0).is_err());
        assert_eq!(window.title_bar_height(), 48);
        assert_eq!(window.title_bar().height(), 48);
    }

    #[test]
    fn test_set_resizable_reapplies_style() {
        let mut window = window();
        window.set_resizable(false);
        window.set_resizable(false);
        assert_eq!(
            window.take_requests(),
            vec![WindowRequest::ApplyFrameStyle { resizable: false }]
        );

        window.on_show();
        assert!(window.take_requests().is_empty());

        window.set_resizable(true);
        window.on_show();
        assert_eq!(
            window.take_requests(),
            vec![
                WindowRequest::ApplyFrameStyle { resizable: true },
                WindowRequest::ApplyFrameStyle { resizable: true },
            ]
        );
    }

    #[test]
    fn test_maximize_transition_swaps_glyph() {
        let mut window = window();
        let states = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let states_clone = states.clone();
        window.state_changed.connect(move |state| {
            states_clone.lock().push(*state);
        });

        window.on_state_changed(WindowState::Maximized);
        assert_eq!(
            window.title_bar().button(ButtonKind::Maximize).tooltip(),
            "Restore Down"
        );
        window.on_state_changed(WindowState::Maximized);
        window.on_state_changed(WindowState::Normal);
        assert_eq!(
            window.title_bar().button(ButtonKind::Maximize).tooltip(),
            "Maximize"
        );
        assert_eq!(
            *states.lock(),
            vec![WindowState::Maximized, WindowState::Normal]
        );
    }

    #[test]
    fn test_maximize_toggle_follows_state() {
        let mut window = window();
        window.apply_intent(TitleBarIntent::MaximizeToggle);
        window.on_state_changed(WindowState::Maximized);
        window.take_requests();

        window.apply_intent(TitleBarIntent::MaximizeToggle);
        assert_eq!(window.take_requests(), vec![WindowRequest::Restore]);
    }

    #[test]
    fn test_close_veto() {
        let mut window = window();
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_clone = fired.clone();
        let id = window.close_requested.connect(move |intent| {
            fired_clone.fetch_add(1, Ordering::SeqCst);
            intent.veto();
        });

        assert!(!window.request_close());
        assert!(window.take_requests().is_empty());
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        window.close_requested.disconnect(id);
        assert!(window.request_close());
        assert_eq!(window.take_requests(), vec![WindowRequest::Close]);
    }

    #[test]
    fn test_toolkit_drag_from_caption_and_edge() {
        let mut window = window();
        let host = host();

        window.pointer_moved(Point::new(300, 10), &host);
        assert!(window.pointer_pressed(&host));
        window.pointer_moved(Point::new(0, 300), &host);
        assert!(window.pointer_pressed(&host));
        window.pointer_moved(Point::new(300, 300), &host);
        assert!(!window.pointer_pressed(&host));

        let requests = window.take_requests();
        assert!(requests.contains(&WindowRequest::BeginMove));
        assert!(requests.contains(&WindowRequest::BeginResize(
            super::super::frameless_chrome::ResizeDirection::West
        )));
    }

    #[test]
    fn test_native_hook_leaves_drags_to_platform() {
        let mut window = window();
        window.set_capabilities(ChromeCapabilities {
            native_hook: true,
            toolkit_drag: true,
        });
        let host = host();

        window.pointer_moved(Point::new(300, 10), &host);
        assert!(!window.pointer_pressed(&host));
        assert!(!window.take_requests().contains(&WindowRequest::BeginMove));
    }

    #[test]
    fn test_no_drag_path_disables_hints() {
        let mut window = window();
        window.drag_unavailable();
        assert!(!window.title_bar().drag_hints_enabled());
        assert!(!window.capabilities().can_drag());

        let host = host();
        window.pointer_moved(Point::new(300, 10), &host);
        assert!(!window.pointer_pressed(&host));
    }

    #[test]
    fn test_click_close_button() {
        let mut window = window();
        let host = host();

        window.pointer_moved(Point::new(790, 10), &host);
        assert!(window.title_bar().button(ButtonKind::Close).is_hovered());
        assert!(window.pointer_pressed(&host));
        assert!(window.pointer_released(&host));
        assert!(window.take_requests().contains(&WindowRequest::Close));

        // Press on minimize, release on close: nothing fires.
        window.pointer_moved(Point::new(680, 10), &host);
        window.pointer_pressed(&host);
        window.pointer_moved(Point::new(790, 10), &host);
        assert!(!window.pointer_released(&host));
        assert!(!window.take_requests().contains(&WindowRequest::Minimize));
    }

    #[test]
    fn test_pointer_left_clears_hover() {
        let mut window = window();
        let host = host();

        window.pointer_moved(Point::new(730, 10), &host);
        assert!(window.title_bar().button(ButtonKind::Maximize).is_hovered());
        assert!(window.take_requests().contains(&WindowRequest::Redraw));

        window.pointer_left();
        assert!(!window.title_bar().button(ButtonKind::Maximize).is_hovered());
        assert!(!window.chrome().is_maximize_hovered());
        assert_eq!(window.take_requests(), vec![WindowRequest::Redraw]);
    }

    #[test]
    fn test_monitor_change_requests_single_refresh() {
        let mut window = window();
        window.on_moved(MonitorId::new(1));
        window.on_moved(MonitorId::new(1));
        assert!(window.take_requests().is_empty());

        window.on_moved(MonitorId::new(2));
        assert_eq!(window.take_requests(), vec![WindowRequest::RefreshFrame]);
    }
}
