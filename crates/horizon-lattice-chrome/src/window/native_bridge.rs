//! Decoded native window messages and their handling.
//!
//! The platform layer decodes raw messages into [`NativeMessage`] values,
//! hands them to [`BorderlessWindow::dispatch_native`], and encodes the
//! returned [`MessageOutcome`] back into the platform's result. No raw
//! pointers cross this boundary.

use super::borderless_window::BorderlessWindow;
use super::frameless_chrome::HitRegion;
use super::host::{ChromeHost, WindowRequest};
use super::monitor::{TrackLimits, track_limits};
use super::title_bar::ButtonKind;
use super::window_state::WindowState;
use crate::geometry::{Point, Rect};
use crate::logging::{span_names, targets};

/// The kind of size change reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeKind {
    /// Resized while restored.
    Restored,
    /// Minimized.
    Minimized,
    /// Maximized.
    Maximized,
    /// Any other size notification.
    Other,
}

/// A native window message relevant to the chrome.
///
/// Coordinates are physical screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeMessage {
    /// Non-client activation change.
    NcActivate,
    /// The window was resized.
    Size(SizeKind),
    /// Non-client size calculation.
    CalcFrame {
        /// Top of the proposed client rectangle, before the default handler.
        proposed_top: i32,
        /// Client rectangle after the default handler.
        adjusted: Rect,
    },
    /// Non-client hit test.
    HitTest {
        /// Pointer position.
        screen: Point,
    },
    /// Min/max tracking size query.
    GetMinMaxInfo,
    /// The window moved.
    Move,
    /// The pointer left the non-client area.
    NcMouseLeave,
    /// Primary button pressed in the non-client area.
    NcLButtonDown {
        /// Pointer position.
        screen: Point,
    },
    /// Primary button released in the non-client area.
    NcLButtonUp {
        /// Pointer position.
        screen: Point,
    },
    /// Primary button double-clicked in the non-client area.
    NcLButtonDblClk,
    /// The window is being shown.
    Show,
}

/// How a native message was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageOutcome {
    /// Forward to the default handler.
    Unhandled,
    /// Handled; return this value.
    Handled(isize),
    /// Hit test answered with this region.
    HitTest(HitRegion),
    /// Write this client rectangle back.
    Frame(Rect),
    /// Write these limits back.
    TrackLimits(TrackLimits),
}

impl MessageOutcome {
    /// Whether the default handler must still run.
    pub fn is_unhandled(&self) -> bool {
        matches!(self, MessageOutcome::Unhandled)
    }
}

/// The result of dispatching one native message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeDispatch {
    /// How to answer the message.
    pub outcome: MessageOutcome,
    /// Window mutations to perform once the controller is released.
    pub requests: Vec<WindowRequest>,
}

impl BorderlessWindow {
    /// Handle one decoded native message.
    pub fn dispatch_native(
        &mut self,
        message: NativeMessage,
        host: &dyn ChromeHost,
    ) -> NativeDispatch {
        let span = tracing::trace_span!(span_names::NATIVE_DISPATCH, ?message);
        let _guard = span.enter();

        let outcome = match message {
            NativeMessage::NcActivate => MessageOutcome::Handled(1),

            NativeMessage::Size(kind) => {
                match kind {
                    SizeKind::Restored => self.on_state_changed(restored_state(host)),
                    SizeKind::Maximized => self.on_state_changed(WindowState::Maximized),
                    SizeKind::Minimized => self.on_state_changed(WindowState::Minimized),
                    SizeKind::Other => {}
                }
                MessageOutcome::Unhandled
            }

            NativeMessage::CalcFrame {
                proposed_top,
                adjusted,
            } => {
                let monitor = host.monitor_work_area();
                MessageOutcome::Frame(self.chrome.calc_frame(
                    proposed_top,
                    adjusted,
                    host.window_state(),
                    monitor.as_ref(),
                ))
            }

            NativeMessage::HitTest { screen } => {
                MessageOutcome::HitTest(self.hit_test_screen(screen, host))
            }

            NativeMessage::GetMinMaxInfo => {
                let monitor = host.monitor_work_area();
                MessageOutcome::TrackLimits(track_limits(
                    self.chrome.config().min_size(),
                    host.scale_factor(),
                    monitor.as_ref(),
                ))
            }

            NativeMessage::Move => {
                match host.monitor_work_area() {
                    Some(monitor) => self.on_moved(monitor.id),
                    None => {
                        tracing::trace!(target: targets::MONITOR, "monitor unavailable on move")
                    }
                }
                MessageOutcome::Unhandled
            }

            NativeMessage::NcMouseLeave => {
                self.clear_maximize_hover();
                MessageOutcome::Unhandled
            }

            NativeMessage::NcLButtonDown { screen } => {
                if self.is_over_maximize_button(screen, host) {
                    MessageOutcome::Handled(0)
                } else {
                    MessageOutcome::Unhandled
                }
            }

            NativeMessage::NcLButtonUp { screen } => {
                if self.is_over_maximize_button(screen, host) {
                    self.activate_button(ButtonKind::Maximize);
                    MessageOutcome::Handled(0)
                } else {
                    MessageOutcome::Unhandled
                }
            }

            NativeMessage::NcLButtonDblClk => {
                if self.is_resizable() {
                    MessageOutcome::Unhandled
                } else {
                    MessageOutcome::Handled(0)
                }
            }

            NativeMessage::Show => {
                self.on_show();
                MessageOutcome::Unhandled
            }
        };

        let requests = self.take_requests();
        if !requests.is_empty() {
            tracing::debug!(target: targets::NATIVE, ?requests, "deferred window requests");
        }
        NativeDispatch { outcome, requests }
    }
}

/// A restored size notification also arrives when leaving fullscreen.
fn restored_state(host: &dyn ChromeHost) -> WindowState {
    match host.window_state() {
        WindowState::Fullscreen => WindowState::Fullscreen,
        _ => WindowState::Normal,
    }
}
