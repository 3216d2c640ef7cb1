//! Frameless window chrome and hit-testing.
//!
//! This module holds the state machine behind a borderless main window. It
//! answers "what is under this pixel" for the platform (caption, resize edge,
//! title bar button, or client content) and decides how the suppressed native
//! frame should be sized.
//!
//! # Hit Test Order
//!
//! Title bar buttons occupy three fixed [`BUTTON_WIDTH`] bands at the
//! trailing edge of the title bar: close `[W-46, W)`, maximize
//! `[W-92, W-46)`, minimize `[W-138, W-92)`. Classification runs in priority
//! order, first match wins:
//!
//! 1. Maximize band → [`HitRegion::MaximizeButtonSnap`]. The platform must
//!    believe this is a native maximize button so it offers Snap Layouts.
//! 2. Close or minimize band → passthrough, so the toolkit click handling
//!    fires the button.
//! 3. Resize edges and corners, when resizable and neither maximized nor
//!    fullscreen. Top edge and top corners never win inside the title bar.
//! 4. Title bar → [`HitRegion::Caption`].
//! 5. Everything else → [`HitRegion::Client`].
//!
//! # Usage
//!
//! ```
//! use horizon_lattice_chrome::geometry::{Point, Size};
//! use horizon_lattice_chrome::window::{
//!     ChromeConfig, FramelessChrome, HitRegion, HitTestInput, MaximizeHover, WindowState,
//! };
//!
//! struct NoHover;
//! impl MaximizeHover for NoHover {
//!     fn set_maximize_hovered(&mut self, _hovered: bool) {}
//! }
//!
//! let mut chrome = FramelessChrome::new(ChromeConfig::new());
//! let input = HitTestInput::new(Point::new(400, 10), Size::new(800, 600))
//!     .with_state(WindowState::Normal);
//!
//! assert_eq!(chrome.classify(&input, &mut NoHover), HitRegion::Caption);
//! ```

use cursor_icon::CursorIcon;
pub use winit::window::ResizeDirection;

use super::chrome_config::{BUTTON_WIDTH, ChromeConfig};
use super::monitor::{MonitorTracker, MonitorWorkArea};
use super::title_bar::ButtonKind;
use super::window_state::WindowState;
use crate::geometry::{Point, Rect, Size};
use crate::logging::targets;

/// Classification of a point within a borderless window.
///
/// This is a closed set: every hit test yields exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitRegion {
    /// Ordinary content; the toolkit handles the event.
    Client,
    /// Title bar area that drags the window.
    Caption,
    /// Left resize edge.
    Left,
    /// Right resize edge.
    Right,
    /// Top resize edge.
    Top,
    /// Bottom resize edge.
    Bottom,
    /// Top-left resize corner.
    TopLeft,
    /// Top-right resize corner.
    TopRight,
    /// Bottom-left resize corner.
    BottomLeft,
    /// Bottom-right resize corner.
    BottomRight,
    /// The maximize button, reported to the platform as its own native
    /// maximize button.
    MaximizeButtonSnap,
    /// The minimize button; clicks go to the toolkit.
    MinimizeButtonPassthrough,
    /// The close button; clicks go to the toolkit.
    CloseButtonPassthrough,
}

impl HitRegion {
    /// Check if this region resizes the window.
    pub fn is_resize(&self) -> bool {
        self.resize_direction().is_some()
    }

    /// Check if this region drags the window.
    pub fn is_draggable(&self) -> bool {
        matches!(self, Self::Caption)
    }

    /// Check if this region is one of the title bar buttons.
    pub fn is_button(&self) -> bool {
        self.button().is_some()
    }

    /// The title bar button this region belongs to, if any.
    pub fn button(&self) -> Option<ButtonKind> {
        match self {
            Self::MinimizeButtonPassthrough => Some(ButtonKind::Minimize),
            Self::MaximizeButtonSnap => Some(ButtonKind::Maximize),
            Self::CloseButtonPassthrough => Some(ButtonKind::Close),
            _ => None,
        }
    }

    /// The resize direction for edge and corner regions.
    pub fn resize_direction(&self) -> Option<ResizeDirection> {
        match self {
            Self::Left => Some(ResizeDirection::West),
            Self::Right => Some(ResizeDirection::East),
            Self::Top => Some(ResizeDirection::North),
            Self::Bottom => Some(ResizeDirection::South),
            Self::TopLeft => Some(ResizeDirection::NorthWest),
            Self::TopRight => Some(ResizeDirection::NorthEast),
            Self::BottomLeft => Some(ResizeDirection::SouthWest),
            Self::BottomRight => Some(ResizeDirection::SouthEast),
            _ => None,
        }
    }
}

/// Get the cursor that should be shown over a hit region.
pub fn cursor_for_region(region: HitRegion) -> CursorIcon {
    match region {
        HitRegion::Left | HitRegion::Right => CursorIcon::EwResize,
        HitRegion::Top | HitRegion::Bottom => CursorIcon::NsResize,
        HitRegion::TopLeft | HitRegion::BottomRight => CursorIcon::NwseResize,
        HitRegion::TopRight | HitRegion::BottomLeft => CursorIcon::NeswResize,
        _ => CursorIcon::Default,
    }
}

/// Receiver of maximize-button hover changes.
///
/// The chrome calls this only when the hover flag actually flips, and always
/// before `classify` returns, so the next paint sees the new value.
pub trait MaximizeHover {
    /// Set the maximize button hover flag.
    fn set_maximize_hovered(&mut self, hovered: bool);
}

/// The trailing title bar button bands for a given logical client width.
///
/// Bands are half-open on the right: `x == W - 46` is the first close
/// column and `x == W - 47` the last maximize column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonBands {
    client_width: i32,
}

impl ButtonBands {
    /// Bands for a logical client width.
    pub fn new(client_width: i32) -> Self {
        Self { client_width }
    }

    /// Left edge of a button's band.
    pub fn left(&self, kind: ButtonKind) -> i32 {
        self.client_width - BUTTON_WIDTH * (kind.trailing_index() + 1)
    }

    /// The button band containing the logical x coordinate, if any.
    pub fn button_at(&self, x: i32) -> Option<ButtonKind> {
        ButtonKind::ALL.into_iter().find(|&kind| {
            let left = self.left(kind);
            x >= left && x < left + BUTTON_WIDTH
        })
    }

    /// A button's rectangle for a given title bar height, in logical pixels.
    pub fn rect(&self, kind: ButtonKind, title_bar_height: i32) -> Rect {
        let left = self.left(kind);
        Rect::new(left, 0, left + BUTTON_WIDTH, title_bar_height)
    }
}

/// Everything a single hit test needs besides the chrome configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTestInput {
    /// Pointer position in physical client pixels.
    pub pointer: Point,
    /// Client area size in physical pixels.
    pub client_size: Size,
    /// Device pixel ratio.
    pub scale_factor: f64,
    /// Current window lifecycle state.
    pub state: WindowState,
    /// Whether the maximize button is currently shown.
    pub maximize_visible: bool,
}

impl HitTestInput {
    /// Create an input at scale 1.0, `Normal` state, maximize button visible.
    pub fn new(pointer: Point, client_size: Size) -> Self {
        Self {
            pointer,
            client_size,
            scale_factor: 1.0,
            state: WindowState::Normal,
            maximize_visible: true,
        }
    }

    /// Set the device pixel ratio.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the lifecycle state.
    pub fn with_state(mut self, state: WindowState) -> Self {
        self.state = state;
        self
    }

    /// Set whether the maximize button is visible.
    pub fn with_maximize_visible(mut self, visible: bool) -> Self {
        self.maximize_visible = visible;
        self
    }

    fn effective_scale(&self) -> f64 {
        if self.scale_factor > 0.0 {
            self.scale_factor
        } else {
            1.0
        }
    }
}

/// Chrome state machine for one borderless window.
///
/// Owns the chrome configuration, the mirrored maximize-button hover flag
/// (needed for the Snap Layout affordance), and the monitor tracker used to
/// detect moves between monitors. None of this state is shared between
/// windows.
#[derive(Debug, Clone)]
pub struct FramelessChrome {
    config: ChromeConfig,
    maximize_hovered: bool,
    monitor_tracker: MonitorTracker,
}

impl Default for FramelessChrome {
    fn default() -> Self {
        Self::new(ChromeConfig::new())
    }
}

impl FramelessChrome {
    /// Create a chrome state machine with the given configuration.
    pub fn new(config: ChromeConfig) -> Self {
        Self {
            config,
            maximize_hovered: false,
            monitor_tracker: MonitorTracker::new(),
        }
    }

    /// The chrome configuration.
    pub fn config(&self) -> &ChromeConfig {
        &self.config
    }

    /// Mutable access to the chrome configuration.
    pub fn config_mut(&mut self) -> &mut ChromeConfig {
        &mut self.config
    }

    /// Whether the pointer was over the maximize button at the last hit test.
    pub fn is_maximize_hovered(&self) -> bool {
        self.maximize_hovered
    }

    /// Mutable access to the per-window monitor tracker.
    pub fn monitor_tracker_mut(&mut self) -> &mut MonitorTracker {
        &mut self.monitor_tracker
    }

    // =========================================================================
    // Hit Testing
    // =========================================================================

    /// Classify a pointer position.
    ///
    /// Apart from the maximize hover flag this is a pure function of `input`
    /// and the configuration; evaluating the same input twice yields the same
    /// region and leaves the hover flag unchanged.
    pub fn classify<H>(&mut self, input: &HitTestInput, hover: &mut H) -> HitRegion
    where
        H: MaximizeHover + ?Sized,
    {
        let scale = input.effective_scale();
        let (in_title_bar, band) = self.title_bar_band(input, scale);

        let over_maximize = band == Some(ButtonKind::Maximize) && input.maximize_visible;
        self.update_maximize_hover(over_maximize, hover);

        let region = if over_maximize {
            HitRegion::MaximizeButtonSnap
        } else if band == Some(ButtonKind::Close) {
            HitRegion::CloseButtonPassthrough
        } else if band == Some(ButtonKind::Minimize) {
            HitRegion::MinimizeButtonPassthrough
        } else if let Some(edge) = self.hit_test_edges(input, scale, in_title_bar) {
            edge
        } else if in_title_bar {
            HitRegion::Caption
        } else {
            HitRegion::Client
        };

        tracing::trace!(
            target: targets::HIT_TEST,
            x = input.pointer.x,
            y = input.pointer.y,
            ?region,
            "classified pointer"
        );
        region
    }

    /// Clear the maximize hover flag, e.g. when the pointer leaves the window.
    pub fn clear_hover<H>(&mut self, hover: &mut H)
    where
        H: MaximizeHover + ?Sized,
    {
        self.update_maximize_hover(false, hover);
    }

    /// Check whether a point lies on the visible maximize button, without
    /// touching the hover flag.
    pub fn is_over_maximize_button(&self, input: &HitTestInput) -> bool {
        if !input.maximize_visible {
            return false;
        }
        let (_, band) = self.title_bar_band(input, input.effective_scale());
        band == Some(ButtonKind::Maximize)
    }

    /// Whether the pointer is in the title bar, and which button band it is in.
    ///
    /// Pointer and width are rounded to logical pixels separately, so at a
    /// fractional scale the last physical column can land on logical `W`.
    /// That column still belongs to the close button.
    fn title_bar_band(&self, input: &HitTestInput, scale: f64) -> (bool, Option<ButtonKind>) {
        let logical = input.pointer.to_logical(scale);
        if logical.y >= self.config.title_bar_height() {
            return (false, None);
        }
        let client_width = input.client_size.to_logical(scale).width;
        let x = if input.pointer.x < input.client_size.width {
            logical.x.min(client_width - 1)
        } else {
            logical.x
        };
        (true, ButtonBands::new(client_width).button_at(x))
    }

    fn update_maximize_hover<H>(&mut self, hovered: bool, hover: &mut H)
    where
        H: MaximizeHover + ?Sized,
    {
        if self.maximize_hovered != hovered {
            self.maximize_hovered = hovered;
            hover.set_maximize_hovered(hovered);
        }
    }

    /// Hit test the resize margins, in physical pixels.
    fn hit_test_edges(
        &self,
        input: &HitTestInput,
        scale: f64,
        in_title_bar: bool,
    ) -> Option<HitRegion> {
        if !self.config.is_resizable() || !input.state.allows_edge_resize() {
            return None;
        }

        let m = self.config.hit_test_margin(scale);
        let Point { x, y } = input.pointer;
        let Size { width, height } = input.client_size;

        let l = x < m;
        let r = x > width - m;
        let t = y < m && !in_title_bar;
        let b = y > height - m;

        match (l, r, t, b) {
            (true, _, _, true) => Some(HitRegion::BottomLeft),
            (_, true, _, true) => Some(HitRegion::BottomRight),
            (true, _, true, _) => Some(HitRegion::TopLeft),
            (_, true, true, _) => Some(HitRegion::TopRight),
            (true, _, _, _) => Some(HitRegion::Left),
            (_, true, _, _) => Some(HitRegion::Right),
            (_, _, true, _) => Some(HitRegion::Top),
            (_, _, _, true) => Some(HitRegion::Bottom),
            _ => None,
        }
    }

    // =========================================================================
    // Frame Suppression
    // =========================================================================

    /// Compute the client rectangle reported for the non-client size request.
    ///
    /// `adjusted` is the rectangle after the platform's default frame
    /// calculation; its top is replaced by `proposed_top` so no caption is
    /// drawn. While maximized the top moves to the work-area top instead,
    /// because the platform over-extends maximized frameless windows past the
    /// work area.
    pub fn calc_frame(
        &self,
        proposed_top: i32,
        adjusted: Rect,
        state: WindowState,
        monitor: Option<&MonitorWorkArea>,
    ) -> Rect {
        let mut frame = Rect {
            top: proposed_top,
            ..adjusted
        };
        if state.is_maximized()
            && let Some(monitor) = monitor
        {
            frame.top = monitor.work_area.top;
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingHover {
        hovered: bool,
        calls: usize,
    }

    impl MaximizeHover for CountingHover {
        fn set_maximize_hovered(&mut self, hovered: bool) {
            self.hovered = hovered;
            self.calls += 1;
        }
    }

    fn input(x: i32, y: i32) -> HitTestInput {
        HitTestInput::new(Point::new(x, y), Size::new(800, 600))
    }

    #[test]
    fn test_maximize_band_snaps_and_hovers() {
        let mut chrome = FramelessChrome::default();
        let mut hover = CountingHover::default();

        let region = chrome.classify(&input(730, 10), &mut hover);
        assert_eq!(region, HitRegion::MaximizeButtonSnap);
        assert!(hover.hovered);
        assert!(chrome.is_maximize_hovered());
    }

    #[test]
    fn test_close_band_passthrough() {
        let mut chrome = FramelessChrome::default();
        let mut hover = CountingHover::default();

        assert_eq!(
            chrome.classify(&input(799, 10), &mut hover),
            HitRegion::CloseButtonPassthrough
        );
        assert_eq!(
            chrome.classify(&input(680, 10), &mut hover),
            HitRegion::MinimizeButtonPassthrough
        );
        assert_eq!(hover.calls, 0);
    }

    #[test]
    fn test_band_boundaries_are_right_open() {
        let bands = ButtonBands::new(800);
        assert_eq!(bands.button_at(799), Some(ButtonKind::Close));
        assert_eq!(bands.button_at(754), Some(ButtonKind::Close));
        assert_eq!(bands.button_at(753), Some(ButtonKind::Maximize));
        assert_eq!(bands.button_at(708), Some(ButtonKind::Maximize));
        assert_eq!(bands.button_at(707), Some(ButtonKind::Minimize));
        assert_eq!(bands.button_at(662), Some(ButtonKind::Minimize));
        assert_eq!(bands.button_at(661), None);
        assert_eq!(bands.button_at(800), None);
    }

    #[test]
    fn test_maximized_suppresses_corner() {
        let mut chrome = FramelessChrome::default();
        let mut hover = CountingHover::default();

        let region = chrome.classify(
            &input(2, 2).with_state(WindowState::Maximized),
            &mut hover,
        );
        assert_eq!(region, HitRegion::Caption);

        let region = chrome.classify(
            &input(1, 598).with_state(WindowState::Fullscreen),
            &mut hover,
        );
        assert_eq!(region, HitRegion::Client);
    }

    #[test]
    fn test_left_edge() {
        let mut chrome = FramelessChrome::default();
        let mut hover = CountingHover::default();
        assert_eq!(chrome.classify(&input(1, 150), &mut hover), HitRegion::Left);
    }

    #[test]
    fn test_all_edges_and_corners() {
        let mut chrome = FramelessChrome::default();
        let mut hover = CountingHover::default();

        assert_eq!(chrome.classify(&input(799, 300), &mut hover), HitRegion::Right);
        assert_eq!(chrome.classify(&input(400, 599), &mut hover), HitRegion::Bottom);
        assert_eq!(chrome.classify(&input(0, 599), &mut hover), HitRegion::BottomLeft);
        assert_eq!(chrome.classify(&input(799, 599), &mut hover), HitRegion::BottomRight);
        assert_eq!(chrome.classify(&input(400, 300), &mut hover), HitRegion::Client);
    }

    #[test]
    fn test_top_edge_yields_to_title_bar() {
        let mut chrome = FramelessChrome::default();
        let mut hover = CountingHover::default();

        // Inside the title bar the top margin is caption, the left margin
        // still resizes horizontally.
        assert_eq!(chrome.classify(&input(400, 1), &mut hover), HitRegion::Caption);
        assert_eq!(chrome.classify(&input(1, 1), &mut hover), HitRegion::Left);

        // A title bar thinner than the margin exposes the top edge.
        chrome.config_mut().set_title_bar_height(2).unwrap();
        assert_eq!(chrome.classify(&input(400, 3), &mut hover), HitRegion::Top);
        assert_eq!(chrome.classify(&input(1, 3), &mut hover), HitRegion::TopLeft);
        assert_eq!(chrome.classify(&input(400, 1), &mut hover), HitRegion::Caption);
    }

    #[test]
    fn test_not_resizable_never_resizes() {
        let mut chrome = FramelessChrome::new(ChromeConfig::new().with_resizable(false));
        let mut hover = CountingHover::default();

        for y in [0, 1, 2, 3, 10, 31, 32, 300, 596, 597, 598, 599] {
            for x in [0, 1, 2, 3, 400, 661, 796, 797, 798, 799] {
                let region = chrome.classify(&input(x, y), &mut hover);
                assert!(!region.is_resize(), "({x}, {y}) gave {region:?}");
            }
        }
    }

    #[test]
    fn test_hidden_maximize_button_falls_through() {
        let mut chrome = FramelessChrome::default();
        let mut hover = CountingHover::default();

        let region = chrome.classify(&input(730, 10).with_maximize_visible(false), &mut hover);
        assert_eq!(region, HitRegion::Caption);
        assert!(!hover.hovered);
        assert_eq!(hover.calls, 0);
    }

    #[test]
    fn test_hover_is_edge_triggered() {
        let mut chrome = FramelessChrome::default();
        let mut hover = CountingHover::default();

        chrome.classify(&input(720, 10), &mut hover);
        chrome.classify(&input(730, 12), &mut hover);
        chrome.classify(&input(750, 20), &mut hover);
        assert_eq!(hover.calls, 1);
        assert!(hover.hovered);

        // Leaving the band clears the flag in the same call.
        let region = chrome.classify(&input(400, 10), &mut hover);
        assert_eq!(region, HitRegion::Caption);
        assert_eq!(hover.calls, 2);
        assert!(!hover.hovered);
        assert!(!chrome.is_maximize_hovered());
    }

    #[test]
    fn test_classification_is_idempotent() {
        let mut chrome = FramelessChrome::default();
        let mut hover = CountingHover::default();

        for (x, y) in [(730, 10), (799, 10), (1, 150), (400, 10), (400, 400)] {
            let first = chrome.classify(&input(x, y), &mut hover);
            let hovered = chrome.is_maximize_hovered();
            let calls = hover.calls;
            let second = chrome.classify(&input(x, y), &mut hover);
            assert_eq!(first, second);
            assert_eq!(hovered, chrome.is_maximize_hovered());
            assert_eq!(calls, hover.calls);
        }
    }

    #[test]
    fn test_high_dpi_bands_and_margin() {
        let mut chrome = FramelessChrome::default();
        let mut hover = CountingHover::default();
        let size = Size::new(1600, 1200);

        // Logical width 800; physical x 1460 is logical 730.
        let snap = HitTestInput::new(Point::new(1460, 20), size).with_scale_factor(2.0);
        assert_eq!(chrome.classify(&snap, &mut hover), HitRegion::MaximizeButtonSnap);

        // Margin is 8 physical pixels at 2x.
        let edge = HitTestInput::new(Point::new(7, 600), size).with_scale_factor(2.0);
        assert_eq!(chrome.classify(&edge, &mut hover), HitRegion::Left);
        let inside = HitTestInput::new(Point::new(8, 600), size).with_scale_factor(2.0);
        assert_eq!(chrome.classify(&inside, &mut hover), HitRegion::Client);
    }

    #[test]
    fn test_fractional_scale_last_column_is_close() {
        let size = Size::new(2560, 1440);
        let corner = HitTestInput::new(Point::new(2559, 5), size).with_scale_factor(1.5);

        for (state, resizable) in [
            (WindowState::Maximized, true),
            (WindowState::Normal, true),
            (WindowState::Normal, false),
        ] {
            let mut chrome = FramelessChrome::new(ChromeConfig::new().with_resizable(resizable));
            let mut hover = CountingHover::default();
            let region = chrome.classify(&corner.with_state(state), &mut hover);
            assert_eq!(
                region,
                HitRegion::CloseButtonPassthrough,
                "{state:?} resizable={resizable}"
            );
        }

        // Every physical column of the title bar lands in some band near the
        // trailing edge.
        let mut chrome = FramelessChrome::default();
        let mut hover = CountingHover::default();
        for x in 2400..2560 {
            let input = HitTestInput::new(Point::new(x, 5), size)
                .with_scale_factor(1.5)
                .with_state(WindowState::Maximized);
            assert!(chrome.classify(&input, &mut hover).is_button(), "x = {x}");
        }
    }

    #[test]
    fn test_bands_partition_trailing_edge_at_any_width() {
        for width in [138, 139, 400, 800, 801, 1921] {
            let bands = ButtonBands::new(width);
            for x in 0..width {
                let expected = match width - x {
                    1..=46 => Some(ButtonKind::Close),
                    47..=92 => Some(ButtonKind::Maximize),
                    93..=138 => Some(ButtonKind::Minimize),
                    _ => None,
                };
                assert_eq!(bands.button_at(x), expected, "width {width}, x {x}");
            }
            assert_eq!(bands.button_at(width), None);
            assert_eq!(bands.left(ButtonKind::Close), width - 46);
        }
    }

    #[test]
    fn test_maximized_never_resizes_on_any_border_pixel() {
        let (width, height) = (800, 600);
        let mut border = Vec::new();
        for x in 0..width {
            for y in [0, 1, 2, 3, height - 4, height - 3, height - 2, height - 1] {
                border.push((x, y));
            }
        }
        for y in 0..height {
            for x in [0, 1, 2, 3, width - 4, width - 3, width - 2, width - 1] {
                border.push((x, y));
            }
        }

        for state in [WindowState::Maximized, WindowState::Fullscreen] {
            let mut chrome = FramelessChrome::default();
            let mut hover = CountingHover::default();
            for &(x, y) in &border {
                let region = chrome.classify(&input(x, y).with_state(state), &mut hover);
                assert!(!region.is_resize(), "{state:?} ({x}, {y}) gave {region:?}");
            }
        }
    }

    #[test]
    fn test_clear_hover() {
        let mut chrome = FramelessChrome::default();
        let mut hover = CountingHover::default();

        chrome.classify(&input(730, 10), &mut hover);
        chrome.clear_hover(&mut hover);
        chrome.clear_hover(&mut hover);
        assert!(!hover.hovered);
        assert_eq!(hover.calls, 2);
    }

    #[test]
    fn test_is_over_maximize_button_is_read_only() {
        let chrome = FramelessChrome::default();
        assert!(chrome.is_over_maximize_button(&input(730, 10)));
        assert!(!chrome.is_over_maximize_button(&input(730, 40)));
        assert!(!chrome.is_over_maximize_button(&input(730, 10).with_maximize_visible(false)));
        assert!(!chrome.is_maximize_hovered());
    }

    #[test]
    fn test_calc_frame() {
        let chrome = FramelessChrome::default();
        let adjusted = Rect::new(108, 131, 1292, 892);
        let monitor = MonitorWorkArea::new(
            super::super::monitor::MonitorId::new(1),
            Rect::new(0, 0, 1920, 1080),
            Rect::new(0, 40, 1920, 1080),
        );

        let frame = chrome.calc_frame(100, adjusted, WindowState::Normal, Some(&monitor));
        assert_eq!(frame, Rect::new(108, 100, 1292, 892));

        let frame = chrome.calc_frame(-8, adjusted, WindowState::Maximized, Some(&monitor));
        assert_eq!(frame.top, 40);

        let frame = chrome.calc_frame(-8, adjusted, WindowState::Maximized, None);
        assert_eq!(frame.top, -8);
    }

    #[test]
    fn test_cursor_and_direction() {
        assert_eq!(cursor_for_region(HitRegion::Left), CursorIcon::EwResize);
        assert_eq!(cursor_for_region(HitRegion::Bottom), CursorIcon::NsResize);
        assert_eq!(cursor_for_region(HitRegion::TopLeft), CursorIcon::NwseResize);
        assert_eq!(cursor_for_region(HitRegion::BottomLeft), CursorIcon::NeswResize);
        assert_eq!(cursor_for_region(HitRegion::Caption), CursorIcon::Default);

        assert_eq!(
            HitRegion::BottomRight.resize_direction(),
            Some(ResizeDirection::SouthEast)
        );
        assert!(HitRegion::MaximizeButtonSnap.is_button());
        assert!(HitRegion::Caption.is_draggable());
        assert!(!HitRegion::Client.is_resize());
    }
}
