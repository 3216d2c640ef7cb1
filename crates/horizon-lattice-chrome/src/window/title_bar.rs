//! Custom title bar model.
//!
//! The title bar is drawn by the application, not the platform. This module
//! owns what it needs to draw: the three trailing buttons, their glyphs,
//! tooltips, hover state and colors. It also emits which button the user
//! triggered.
//!
//! Layout shares [`ButtonBands`] with hit-testing, so the painted buttons and
//! the regions reported to the platform can never disagree.

use super::chrome_config::ChromeConfig;
use super::frameless_chrome::{ButtonBands, MaximizeHover};
use crate::error::{ChromeError, ChromeResult};
use crate::geometry::Rect;
use crate::logging::targets;
use crate::signal::Signal;

/// The three title bar buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    /// Minimize button.
    Minimize,
    /// Maximize / restore button.
    Maximize,
    /// Close button (rightmost).
    Close,
}

impl ButtonKind {
    /// All buttons, ordered from the trailing edge inward.
    pub const ALL: [ButtonKind; 3] = [ButtonKind::Close, ButtonKind::Maximize, ButtonKind::Minimize];

    /// Position counted from the trailing edge: close is 0.
    pub fn trailing_index(self) -> i32 {
        match self {
            ButtonKind::Close => 0,
            ButtonKind::Maximize => 1,
            ButtonKind::Minimize => 2,
        }
    }
}

/// What the user asked for by activating a title bar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleBarIntent {
    /// Minimize the window.
    Minimize,
    /// Maximize when restored, restore when maximized.
    MaximizeToggle,
    /// Close the window.
    Close,
}

impl From<ButtonKind> for TitleBarIntent {
    fn from(kind: ButtonKind) -> Self {
        match kind {
            ButtonKind::Minimize => TitleBarIntent::Minimize,
            ButtonKind::Maximize => TitleBarIntent::MaximizeToggle,
            ButtonKind::Close => TitleBarIntent::Close,
        }
    }
}

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Create a color from 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Title bar background.
pub const TITLE_BAR_COLOR: Color = Color::from_rgb8(45, 45, 48);
/// Button glyph color at rest.
pub const BUTTON_TEXT_COLOR: Color = Color::from_rgb8(200, 200, 200);
/// Button glyph color while hovered.
pub const BUTTON_HOVER_TEXT_COLOR: Color = Color::from_rgb8(255, 255, 255);
/// Minimize and maximize background while hovered.
pub const BUTTON_HOVER_COLOR: Color = Color::from_rgb8(70, 70, 74);
/// Close background while hovered.
pub const CLOSE_HOVER_COLOR: Color = Color::from_rgb8(232, 17, 35);

const GLYPH_MINIMIZE: &str = "\u{2500}";
const GLYPH_MAXIMIZE: &str = "\u{25A1}";
const GLYPH_RESTORE: &str = "\u{2750}";
const GLYPH_CLOSE: &str = "\u{2715}";

/// How a button should be painted right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonVisual {
    /// Background fill, `None` to let the title bar show through.
    pub background: Option<Color>,
    /// Glyph color.
    pub foreground: Color,
    /// Glyph text.
    pub glyph: &'static str,
}

impl ButtonVisual {
    /// Compute the visual for a button.
    pub fn for_button(kind: ButtonKind, hovered: bool, glyph: &'static str) -> Self {
        let background = match (kind, hovered) {
            (_, false) => None,
            (ButtonKind::Close, true) => Some(CLOSE_HOVER_COLOR),
            (_, true) => Some(BUTTON_HOVER_COLOR),
        };
        let foreground = if hovered {
            BUTTON_HOVER_TEXT_COLOR
        } else {
            BUTTON_TEXT_COLOR
        };
        Self {
            background,
            foreground,
            glyph,
        }
    }
}

/// A single title bar button.
#[derive(Debug, Clone)]
pub struct TitleBarButton {
    kind: ButtonKind,
    glyph: &'static str,
    tooltip: &'static str,
    hovered: bool,
    visible: bool,
    height: i32,
}

impl TitleBarButton {
    fn new(kind: ButtonKind, height: i32) -> Self {
        let (glyph, tooltip) = match kind {
            ButtonKind::Minimize => (GLYPH_MINIMIZE, "Minimize"),
            ButtonKind::Maximize => (GLYPH_MAXIMIZE, "Maximize"),
            ButtonKind::Close => (GLYPH_CLOSE, "Close"),
        };
        Self {
            kind,
            glyph,
            tooltip,
            hovered: false,
            visible: true,
            height,
        }
    }

    /// Which button this is.
    pub fn kind(&self) -> ButtonKind {
        self.kind
    }

    /// Current glyph.
    pub fn glyph(&self) -> &'static str {
        self.glyph
    }

    /// Current tooltip.
    pub fn tooltip(&self) -> &'static str {
        self.tooltip
    }

    /// Whether the pointer is over the button.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether the button is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Button height in logical pixels; always equals the title bar height.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// How the button should be painted.
    pub fn render(&self) -> ButtonVisual {
        ButtonVisual::for_button(self.kind, self.hovered, self.glyph)
    }

    /// Set the hover flag. Returns `true` if it changed and the button needs
    /// a repaint.
    pub fn set_hovered(&mut self, hovered: bool) -> bool {
        let changed = self.hovered != hovered;
        self.hovered = hovered;
        changed
    }

    /// Pointer entered the button.
    pub fn on_pointer_enter(&mut self) -> bool {
        self.set_hovered(true)
    }

    /// Pointer left the button.
    pub fn on_pointer_leave(&mut self) -> bool {
        self.set_hovered(false)
    }

    /// The intent this button stands for.
    pub fn on_activate(&self) -> TitleBarIntent {
        TitleBarIntent::from(self.kind)
    }
}

/// The application-drawn title bar.
///
/// # Signals
///
/// - `intent_triggered`: a visible button was activated
pub struct TitleBar {
    height: i32,
    minimize: TitleBarButton,
    maximize: TitleBarButton,
    close: TitleBarButton,
    drag_hints: bool,
    needs_repaint: bool,

    /// Emitted when a title bar button is activated.
    pub intent_triggered: Signal<TitleBarIntent>,
}

impl std::fmt::Debug for TitleBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TitleBar")
            .field("height", &self.height)
            .field("minimize", &self.minimize)
            .field("maximize", &self.maximize)
            .field("close", &self.close)
            .field("drag_hints", &self.drag_hints)
            .finish_non_exhaustive()
    }
}

impl TitleBar {
    /// Create a title bar of the given logical height.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::InvalidTitleBarHeight`] if `height <= 0`.
    pub fn new(height: i32) -> ChromeResult<Self> {
        if height <= 0 {
            return Err(ChromeError::InvalidTitleBarHeight(height));
        }
        Ok(Self::with_height(height))
    }

    /// A title bar sized by a configuration, whose height is always valid.
    pub(crate) fn for_config(config: &ChromeConfig) -> Self {
        Self::with_height(config.title_bar_height())
    }

    fn with_height(height: i32) -> Self {
        Self {
            height,
            minimize: TitleBarButton::new(ButtonKind::Minimize, height),
            maximize: TitleBarButton::new(ButtonKind::Maximize, height),
            close: TitleBarButton::new(ButtonKind::Close, height),
            drag_hints: true,
            needs_repaint: true,
            intent_triggered: Signal::new(),
        }
    }

    /// Title bar height in logical pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Set the height of the bar and all of its buttons.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::InvalidTitleBarHeight`] if `height <= 0`;
    /// neither the bar nor any button is changed.
    pub fn set_height(&mut self, height: i32) -> ChromeResult<()> {
        if height <= 0 {
            return Err(ChromeError::InvalidTitleBarHeight(height));
        }
        if self.height != height {
            self.height = height;
            for button in self.buttons_mut() {
                button.height = height;
            }
            self.needs_repaint = true;
        }
        Ok(())
    }

    /// Access a button.
    pub fn button(&self, kind: ButtonKind) -> &TitleBarButton {
        match kind {
            ButtonKind::Minimize => &self.minimize,
            ButtonKind::Maximize => &self.maximize,
            ButtonKind::Close => &self.close,
        }
    }

    fn button_mut(&mut self, kind: ButtonKind) -> &mut TitleBarButton {
        match kind {
            ButtonKind::Minimize => &mut self.minimize,
            ButtonKind::Maximize => &mut self.maximize,
            ButtonKind::Close => &mut self.close,
        }
    }

    fn buttons_mut(&mut self) -> [&mut TitleBarButton; 3] {
        [&mut self.minimize, &mut self.maximize, &mut self.close]
    }

    /// Show or hide a button. Hiding clears its hover flag.
    pub fn set_button_visible(&mut self, kind: ButtonKind, visible: bool) {
        let button = self.button_mut(kind);
        if button.visible != visible {
            button.visible = visible;
            if !visible {
                button.hovered = false;
            }
            self.needs_repaint = true;
        }
    }

    /// Swap the maximize glyph and tooltip to match the window state.
    pub fn update_maximize_state(&mut self, maximized: bool) {
        let (glyph, tooltip) = if maximized {
            (GLYPH_RESTORE, "Restore Down")
        } else {
            (GLYPH_MAXIMIZE, "Maximize")
        };
        if self.maximize.glyph != glyph {
            self.maximize.glyph = glyph;
            self.maximize.tooltip = tooltip;
            self.needs_repaint = true;
            tracing::debug!(target: targets::LIFECYCLE, maximized, "updated maximize glyph");
        }
    }

    /// Update hover for the buttons whose clicks pass through to the
    /// application. `over` is the button under the pointer, if any.
    ///
    /// The maximize button is not touched here; its hover mirrors the
    /// platform hit test through [`MaximizeHover`].
    pub fn set_passthrough_hover(&mut self, over: Option<ButtonKind>) {
        let mut changed = false;
        for kind in [ButtonKind::Minimize, ButtonKind::Close] {
            let button = self.button_mut(kind);
            let hovered = button.visible && over == Some(kind);
            changed |= button.set_hovered(hovered);
        }
        self.needs_repaint |= changed;
    }

    /// Whether dragging the empty title bar area moves the window.
    pub fn drag_hints_enabled(&self) -> bool {
        self.drag_hints
    }

    /// Enable or disable title bar drag behavior.
    pub fn set_drag_hints_enabled(&mut self, enabled: bool) {
        self.drag_hints = enabled;
    }

    /// Rectangles of the bar and its visible buttons for a logical client
    /// width.
    pub fn layout(&self, client_width: i32) -> TitleBarLayout {
        let bands = ButtonBands::new(client_width);
        let buttons = [ButtonKind::Minimize, ButtonKind::Maximize, ButtonKind::Close]
            .into_iter()
            .filter(|&kind| self.button(kind).visible)
            .map(|kind| (kind, bands.rect(kind, self.height)))
            .collect();
        TitleBarLayout {
            bar: Rect::new(0, 0, client_width, self.height),
            buttons,
        }
    }

    /// Activate a button, emitting `intent_triggered`.
    ///
    /// Hidden buttons cannot be activated.
    pub fn activate(&self, kind: ButtonKind) -> Option<TitleBarIntent> {
        let button = self.button(kind);
        if !button.visible {
            return None;
        }
        let intent = button.on_activate();
        tracing::debug!(target: targets::CHROME, ?intent, "title bar button activated");
        self.intent_triggered.emit(intent);
        Some(intent)
    }

    /// Whether the bar changed since the last call, clearing the flag.
    pub fn take_needs_repaint(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }
}

impl MaximizeHover for TitleBar {
    fn set_maximize_hovered(&mut self, hovered: bool) {
        let hovered = hovered && self.maximize.visible;
        if self.maximize.set_hovered(hovered) {
            self.needs_repaint = true;
        }
    }
}

/// Computed title bar geometry in logical pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleBarLayout {
    /// The whole bar.
    pub bar: Rect,
    /// Visible buttons, leading to trailing.
    pub buttons: Vec<(ButtonKind, Rect)>,
}

// Ensure TitleBar is Send + Sync
static_assertions::assert_impl_all!(TitleBar: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_set_height_is_atomic() {
        let mut bar = TitleBar::new(32).unwrap();
        bar.set_height(40).unwrap();
        assert_eq!(bar.height(), 40);
        for kind in ButtonKind::ALL {
            assert_eq!(bar.button(kind).height(), 40);
        }

        assert_eq!(bar.set_height(0), Err(ChromeError::InvalidTitleBarHeight(0)));
        assert_eq!(bar.height(), 40);
        for kind in ButtonKind::ALL {
            assert_eq!(bar.button(kind).height(), 40);
        }

        assert!(TitleBar::new(-1).is_err());
    }

    #[test]
    fn test_layout_matches_bands() {
        let bar = TitleBar::new(32).unwrap();
        let layout = bar.layout(800);
        assert_eq!(layout.bar, Rect::new(0, 0, 800, 32));
        assert_eq!(
            layout.buttons,
            vec![
                (ButtonKind::Minimize, Rect::new(662, 0, 708, 32)),
                (ButtonKind::Maximize, Rect::new(708, 0, 754, 32)),
                (ButtonKind::Close, Rect::new(754, 0, 800, 32)),
            ]
        );
    }

    #[test]
    fn test_hidden_button_not_laid_out_or_activated() {
        let mut bar = TitleBar::new(32).unwrap();
        bar.set_button_visible(ButtonKind::Maximize, false);

        let layout = bar.layout(800);
        assert_eq!(layout.buttons.len(), 2);
        assert_eq!(bar.activate(ButtonKind::Maximize), None);

        bar.set_maximize_hovered(true);
        assert!(!bar.button(ButtonKind::Maximize).is_hovered());
    }

    #[test]
    fn test_maximize_glyph_swap() {
        let mut bar = TitleBar::new(32).unwrap();
        bar.take_needs_repaint();
        assert_eq!(bar.button(ButtonKind::Maximize).tooltip(), "Maximize");

        bar.update_maximize_state(true);
        assert_eq!(bar.button(ButtonKind::Maximize).glyph(), "\u{2750}");
        assert_eq!(bar.button(ButtonKind::Maximize).tooltip(), "Restore Down");
        assert!(bar.take_needs_repaint());

        bar.update_maximize_state(true);
        assert!(!bar.take_needs_repaint());

        bar.update_maximize_state(false);
        assert_eq!(bar.button(ButtonKind::Maximize).glyph(), "\u{25A1}");
    }

    #[test]
    fn test_button_visuals() {
        let close = ButtonVisual::for_button(ButtonKind::Close, true, GLYPH_CLOSE);
        assert_eq!(close.background, Some(CLOSE_HOVER_COLOR));
        assert_eq!(close.foreground, BUTTON_HOVER_TEXT_COLOR);

        let min = ButtonVisual::for_button(ButtonKind::Minimize, true, GLYPH_MINIMIZE);
        assert_eq!(min.background, Some(BUTTON_HOVER_COLOR));

        let idle = ButtonVisual::for_button(ButtonKind::Maximize, false, GLYPH_MAXIMIZE);
        assert_eq!(idle.background, None);
        assert_eq!(idle.foreground, BUTTON_TEXT_COLOR);
    }

    #[test]
    fn test_button_pointer_enter_leave() {
        let mut bar = TitleBar::new(32).unwrap();
        let button = bar.button_mut(ButtonKind::Minimize);

        assert!(button.on_pointer_enter());
        assert!(!button.on_pointer_enter());
        assert_eq!(button.render().background, Some(BUTTON_HOVER_COLOR));
        assert!(button.on_pointer_leave());
        assert_eq!(button.render().background, None);
        assert_eq!(button.on_activate(), TitleBarIntent::Minimize);
    }

    #[test]
    fn test_passthrough_hover() {
        let mut bar = TitleBar::new(32).unwrap();
        bar.take_needs_repaint();

        bar.set_passthrough_hover(Some(ButtonKind::Close));
        assert!(bar.button(ButtonKind::Close).is_hovered());
        assert!(!bar.button(ButtonKind::Minimize).is_hovered());
        assert!(bar.take_needs_repaint());

        // Maximize hover belongs to the hit test, not the pointer path.
        bar.set_passthrough_hover(Some(ButtonKind::Maximize));
        assert!(!bar.button(ButtonKind::Close).is_hovered());
        assert!(!bar.button(ButtonKind::Maximize).is_hovered());
    }

    #[test]
    fn test_activate_emits_intent() {
        let bar = TitleBar::new(32).unwrap();
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        bar.intent_triggered.connect(move |intent| {
            assert_eq!(*intent, TitleBarIntent::Close);
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(bar.activate(ButtonKind::Close), Some(TitleBarIntent::Close));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
