//! Native chrome hook for Windows.
//!
//! Subclasses the top-level `HWND` so the chrome can answer `WM_NCHITTEST`,
//! suppress the native caption in `WM_NCCALCSIZE`, and report the monitor
//! work area in `WM_GETMINMAXINFO`. Answering `HTMAXBUTTON` over the custom
//! maximize button is what makes Windows 11 offer Snap Layouts there.
//!
//! Create the winit window with decorations enabled; the hook removes the
//! caption from the client calculation and keeps the thick frame for
//! resizing and the drop shadow.

use std::cell::{Cell, RefCell};
use std::ffi::c_void;
use std::rc::Rc;
use std::sync::Arc;

use raw_window_handle::{HasWindowHandle, RawWindowHandle};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, POINT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{
    GetMonitorInfoW, MONITOR_DEFAULTTONEAREST, MONITORINFO, MonitorFromWindow, ScreenToClient,
};
use windows::Win32::UI::HiDpi::GetDpiForWindow;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    TME_LEAVE, TME_NONCLIENT, TRACKMOUSEEVENT, TrackMouseEvent,
};
use windows::Win32::UI::Shell::{DefSubclassProc, RemoveWindowSubclass, SetWindowSubclass};
use windows::Win32::UI::WindowsAndMessaging::{
    GWL_STYLE, GetClientRect, GetWindowLongPtrW, GetWindowRect, HTBOTTOM, HTBOTTOMLEFT,
    HTBOTTOMRIGHT, HTCAPTION, HTCLIENT, HTLEFT, HTMAXBUTTON, HTRIGHT, HTTOP, HTTOPLEFT,
    HTTOPRIGHT, IsIconic, IsWindowVisible, IsZoomed, MINMAXINFO, NCCALCSIZE_PARAMS,
    PostMessageW, SIZE_MAXIMIZED, SIZE_MINIMIZED, SIZE_RESTORED, SW_MAXIMIZE, SW_MINIMIZE,
    SW_RESTORE, SWP_FRAMECHANGED, SWP_NOMOVE, SWP_NOSIZE, SWP_NOZORDER, SetWindowLongPtrW,
    SetWindowPos, ShowWindow, WM_CLOSE, WM_GETMINMAXINFO, WM_MOVE, WM_NCACTIVATE,
    WM_NCCALCSIZE, WM_NCDESTROY, WM_NCHITTEST, WM_NCLBUTTONDBLCLK, WM_NCLBUTTONDOWN,
    WM_NCLBUTTONUP, WM_NCMOUSELEAVE, WM_NCMOUSEMOVE, WM_SHOWWINDOW, WM_SIZE, WS_MAXIMIZEBOX,
    WS_SYSMENU, WS_THICKFRAME, WVR_REDRAW,
};
use winit::event::WindowEvent;
use winit::window::Window;

use crate::error::{ChromeError, ChromeResult};
use crate::geometry::{Point, Rect, Size};
use crate::logging::targets;
use crate::window::{
    BorderlessWindow, ChromeCapabilities, ChromeHost, HitRegion, MessageOutcome, MonitorId,
    MonitorWorkArea, NativeMessage, SizeKind, TrackLimits, WindowRequest, WindowState,
};

use super::winit_host::{self, WinitResponse};

/// Subclass id of the chrome hook. Any value unique per window procedure.
const CHROME_SUBCLASS_ID: usize = 0x484c_4348;

/// Per-window data reachable from the subclass procedure.
struct HookState {
    hwnd: HWND,
    window: Arc<Window>,
    controller: Rc<RefCell<BorderlessWindow>>,
    attached: Cell<bool>,
}

/// An installed native chrome hook.
///
/// The subclass is removed when the hook is dropped or the window is
/// destroyed, whichever comes first. The hook must be dropped on the thread
/// that owns the window.
pub struct NativeChromeHook {
    state: *mut HookState,
}

impl std::fmt::Debug for NativeChromeHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeChromeHook")
            .field("hwnd", &self.state().hwnd)
            .field("attached", &self.state().attached.get())
            .finish()
    }
}

impl NativeChromeHook {
    /// Subclass the window and route its non-client messages to `controller`.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::HandleUnavailable`] if winit cannot provide a
    /// handle, [`ChromeError::UnsupportedHandle`] if it is not a Win32
    /// handle, and [`ChromeError::HookInstall`] if subclassing fails.
    pub fn install(
        window: Arc<Window>,
        controller: Rc<RefCell<BorderlessWindow>>,
    ) -> ChromeResult<Self> {
        let handle = window
            .window_handle()
            .map_err(|err| ChromeError::HandleUnavailable(err.to_string()))?;
        let hwnd = match handle.as_raw() {
            RawWindowHandle::Win32(raw) => HWND(raw.hwnd.get() as *mut c_void),
            other => return Err(ChromeError::UnsupportedHandle(format!("{other:?}"))),
        };

        let state = Box::into_raw(Box::new(HookState {
            hwnd,
            window,
            controller,
            attached: Cell::new(false),
        }));

        // SAFETY: `state` stays valid until `Drop`, which detaches the
        // subclass before freeing it.
        let attached = unsafe {
            SetWindowSubclass(hwnd, Some(chrome_subclass_proc), CHROME_SUBCLASS_ID, state as usize)
        }
        .as_bool();

        if !attached {
            // SAFETY: the subclass was not registered, so nothing else
            // holds the pointer.
            drop(unsafe { Box::from_raw(state) });
            return Err(ChromeError::HookInstall(
                "SetWindowSubclass returned FALSE".into(),
            ));
        }

        let hook = Self { state };
        hook.state().attached.set(true);
        tracing::info!(target: targets::NATIVE, hwnd = ?hwnd.0, "installed native chrome hook");

        let visible = unsafe { IsWindowVisible(hwnd) }.as_bool();
        hook.update(|chrome| {
            chrome.set_capabilities(ChromeCapabilities {
                native_hook: true,
                ..chrome.capabilities()
            });
            if visible {
                chrome.on_show();
            }
        });
        refresh_frame(hwnd);

        Ok(hook)
    }

    fn state(&self) -> &HookState {
        // SAFETY: owned by `self` until `Drop`.
        unsafe { &*self.state }
    }

    /// Whether the subclass is still attached to a live window.
    pub fn is_attached(&self) -> bool {
        self.state().attached.get()
    }

    /// Mutate the controller and carry out any requests it queued.
    ///
    /// Use this for changes made outside message handling, such as
    /// [`BorderlessWindow::set_resizable`].
    pub fn update<R>(&self, f: impl FnOnce(&mut BorderlessWindow) -> R) -> R {
        let state = self.state();
        let (result, requests) = {
            let mut controller = state.controller.borrow_mut();
            let result = f(&mut controller);
            (result, controller.take_requests())
        };
        execute_requests(state, &requests);
        result
    }

    /// Feed one winit window event to the controller.
    ///
    /// Requests the event produced run once the controller borrow is
    /// released, so messages they trigger reach the chrome. The returned
    /// [`WinitResponse::deferred`] is always empty.
    pub fn handle_window_event(&self, event: &WindowEvent) -> WinitResponse {
        let state = self.state();
        let mut response = {
            let mut controller = state.controller.borrow_mut();
            winit_host::handle_window_event(&mut controller, &state.window, event)
        };
        execute_requests(state, &std::mem::take(&mut response.deferred));
        response
    }
}

impl Drop for NativeChromeHook {
    fn drop(&mut self) {
        let state = self.state();
        if state.attached.replace(false) {
            // SAFETY: same procedure and id that were registered.
            let removed = unsafe {
                RemoveWindowSubclass(state.hwnd, Some(chrome_subclass_proc), CHROME_SUBCLASS_ID)
            }
            .as_bool();
            if !removed {
                tracing::warn!(target: targets::NATIVE, "failed to remove native chrome hook");
            }
        }
        // SAFETY: the subclass no longer references the state.
        drop(unsafe { Box::from_raw(self.state) });
        tracing::info!(target: targets::NATIVE, "removed native chrome hook");
    }
}

/// A decoded message plus the default result, when the default handler had
/// to run before the chrome could look at the message.
struct Decoded {
    message: NativeMessage,
    default_result: Option<LRESULT>,
}

unsafe extern "system" fn chrome_subclass_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
    _subclass_id: usize,
    ref_data: usize,
) -> LRESULT {
    // SAFETY: `ref_data` is the `HookState` registered in `install`, alive
    // while the subclass is attached.
    let state = unsafe { &*(ref_data as *const HookState) };

    match msg {
        WM_NCDESTROY => {
            if state.attached.replace(false) {
                let _ = unsafe {
                    RemoveWindowSubclass(hwnd, Some(chrome_subclass_proc), CHROME_SUBCLASS_ID)
                };
                tracing::debug!(target: targets::NATIVE, "window destroyed, hook detached");
            }
            return unsafe { DefSubclassProc(hwnd, msg, wparam, lparam) };
        }
        WM_NCMOUSEMOVE => track_nc_leave(hwnd),
        _ => {}
    }

    // SAFETY: message parameters come straight from the window procedure.
    let Some(decoded) = (unsafe { decode(hwnd, msg, wparam, lparam) }) else {
        return unsafe { DefSubclassProc(hwnd, msg, wparam, lparam) };
    };

    let host = Win32Host::new(hwnd);
    let dispatch = match state.controller.try_borrow_mut() {
        Ok(mut controller) => controller.dispatch_native(decoded.message, &host),
        Err(_) => {
            tracing::trace!(target: targets::NATIVE, msg, "controller busy, default handling");
            return decoded
                .default_result
                .unwrap_or_else(|| unsafe { DefSubclassProc(hwnd, msg, wparam, lparam) });
        }
    };

    execute_requests(state, &dispatch.requests);

    // SAFETY: same message parameters as decoded above.
    unsafe { encode(hwnd, msg, wparam, lparam, dispatch.outcome, decoded.default_result) }
}

fn screen_point(lparam: LPARAM) -> Point {
    let x = (lparam.0 & 0xffff) as i16 as i32;
    let y = ((lparam.0 >> 16) & 0xffff) as i16 as i32;
    Point::new(x, y)
}

fn rect_from_win32(rc: &RECT) -> Rect {
    Rect::new(rc.left, rc.top, rc.right, rc.bottom)
}

/// Decode a raw message, or `None` for default handling.
///
/// # Safety
///
/// `lparam` must be the pointer payload the system sent with `msg`.
unsafe fn decode(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> Option<Decoded> {
    let message = match msg {
        WM_NCACTIVATE => NativeMessage::NcActivate,
        WM_SIZE => NativeMessage::Size(match wparam.0 as u32 {
            SIZE_RESTORED => SizeKind::Restored,
            SIZE_MINIMIZED => SizeKind::Minimized,
            SIZE_MAXIMIZED => SizeKind::Maximized,
            _ => SizeKind::Other,
        }),
        WM_NCCALCSIZE => {
            if wparam.0 == 0 || lparam.0 == 0 {
                return None;
            }
            let params = lparam.0 as *mut NCCALCSIZE_PARAMS;
            // SAFETY: wParam TRUE means lParam points at NCCALCSIZE_PARAMS.
            let proposed_top = unsafe { (*params).rgrc[0].top };
            let default_result = unsafe { DefSubclassProc(hwnd, msg, wparam, lparam) };
            let adjusted = rect_from_win32(unsafe { &(*params).rgrc[0] });
            return Some(Decoded {
                message: NativeMessage::CalcFrame {
                    proposed_top,
                    adjusted,
                },
                default_result: Some(default_result),
            });
        }
        WM_NCHITTEST => NativeMessage::HitTest {
            screen: screen_point(lparam),
        },
        WM_GETMINMAXINFO => {
            if lparam.0 == 0 {
                return None;
            }
            NativeMessage::GetMinMaxInfo
        }
        WM_MOVE => NativeMessage::Move,
        WM_NCMOUSELEAVE => NativeMessage::NcMouseLeave,
        WM_NCLBUTTONDOWN => NativeMessage::NcLButtonDown {
            screen: screen_point(lparam),
        },
        WM_NCLBUTTONUP => NativeMessage::NcLButtonUp {
            screen: screen_point(lparam),
        },
        WM_NCLBUTTONDBLCLK => NativeMessage::NcLButtonDblClk,
        WM_SHOWWINDOW if wparam.0 != 0 => NativeMessage::Show,
        _ => return None,
    };
    Some(Decoded {
        message,
        default_result: None,
    })
}

/// Write a dispatch outcome back into the message result.
///
/// # Safety
///
/// Same as [`decode`].
unsafe fn encode(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
    outcome: MessageOutcome,
    default_result: Option<LRESULT>,
) -> LRESULT {
    match outcome {
        MessageOutcome::Unhandled => default_result
            .unwrap_or_else(|| unsafe { DefSubclassProc(hwnd, msg, wparam, lparam) }),
        MessageOutcome::Handled(value) => LRESULT(value),
        MessageOutcome::HitTest(region) => LRESULT(hit_test_code(region) as isize),
        MessageOutcome::Frame(frame) => {
            let params = lparam.0 as *mut NCCALCSIZE_PARAMS;
            // SAFETY: only produced for WM_NCCALCSIZE with a valid payload.
            unsafe {
                (*params).rgrc[0] = RECT {
                    left: frame.left,
                    top: frame.top,
                    right: frame.right,
                    bottom: frame.bottom,
                };
            }
            LRESULT(WVR_REDRAW as isize)
        }
        MessageOutcome::TrackLimits(limits) => {
            // SAFETY: only produced for WM_GETMINMAXINFO with a non-null payload.
            unsafe { write_track_limits(&mut *(lparam.0 as *mut MINMAXINFO), limits) };
            LRESULT(0)
        }
    }
}

fn write_track_limits(info: &mut MINMAXINFO, limits: TrackLimits) {
    if let Some((position, size)) = limits.maximized {
        info.ptMaxPosition = POINT {
            x: position.x,
            y: position.y,
        };
        info.ptMaxSize = POINT {
            x: size.width,
            y: size.height,
        };
    }
    info.ptMinTrackSize = POINT {
        x: limits.min_track_size.width,
        y: limits.min_track_size.height,
    };
}

fn hit_test_code(region: HitRegion) -> u32 {
    match region {
        HitRegion::Client
        | HitRegion::MinimizeButtonPassthrough
        | HitRegion::CloseButtonPassthrough => HTCLIENT,
        HitRegion::Caption => HTCAPTION,
        HitRegion::Left => HTLEFT,
        HitRegion::Right => HTRIGHT,
        HitRegion::Top => HTTOP,
        HitRegion::Bottom => HTBOTTOM,
        HitRegion::TopLeft => HTTOPLEFT,
        HitRegion::TopRight => HTTOPRIGHT,
        HitRegion::BottomLeft => HTBOTTOMLEFT,
        HitRegion::BottomRight => HTBOTTOMRIGHT,
        HitRegion::MaximizeButtonSnap => HTMAXBUTTON,
    }
}

/// Ask for `WM_NCMOUSELEAVE` when the pointer leaves the non-client area.
fn track_nc_leave(hwnd: HWND) {
    let mut track = TRACKMOUSEEVENT {
        cbSize: std::mem::size_of::<TRACKMOUSEEVENT>() as u32,
        dwFlags: TME_LEAVE | TME_NONCLIENT,
        hwndTrack: hwnd,
        dwHoverTime: 0,
    };
    if let Err(err) = unsafe { TrackMouseEvent(&mut track) } {
        tracing::trace!(target: targets::NATIVE, error = %err, "TrackMouseEvent failed");
    }
}

/// Re-run `WM_NCCALCSIZE` without moving or resizing.
fn refresh_frame(hwnd: HWND) {
    let _ = unsafe {
        SetWindowPos(
            hwnd,
            HWND::default(),
            0,
            0,
            0,
            0,
            SWP_NOMOVE | SWP_NOSIZE | SWP_NOZORDER | SWP_FRAMECHANGED,
        )
    };
}

/// Keep the thick frame and maximize box the platform needs for resizing,
/// snapping and the maximize-button hit test.
fn apply_frame_style(hwnd: HWND, resizable: bool) {
    unsafe {
        let style = GetWindowLongPtrW(hwnd, GWL_STYLE) as u32;
        let style = if resizable {
            (style & !WS_SYSMENU.0) | WS_MAXIMIZEBOX.0 | WS_THICKFRAME.0
        } else {
            style & !WS_THICKFRAME.0
        };
        SetWindowLongPtrW(hwnd, GWL_STYLE, style as isize);
    }
    refresh_frame(hwnd);
}

fn execute_requests(state: &HookState, requests: &[WindowRequest]) {
    let hwnd = state.hwnd;
    for request in requests {
        tracing::debug!(target: targets::NATIVE, ?request, "executing window request");
        match *request {
            WindowRequest::Minimize => {
                let _ = unsafe { ShowWindow(hwnd, SW_MINIMIZE) };
            }
            WindowRequest::Maximize => {
                let _ = unsafe { ShowWindow(hwnd, SW_MAXIMIZE) };
            }
            WindowRequest::Restore => {
                let _ = unsafe { ShowWindow(hwnd, SW_RESTORE) };
            }
            WindowRequest::Close => {
                let _ = unsafe { PostMessageW(hwnd, WM_CLOSE, WPARAM(0), LPARAM(0)) };
            }
            WindowRequest::RefreshFrame => refresh_frame(hwnd),
            WindowRequest::ApplyFrameStyle { resizable } => apply_frame_style(hwnd, resizable),
            WindowRequest::BeginMove => {
                if let Err(err) = state.window.drag_window() {
                    tracing::warn!(target: targets::NATIVE, error = %err, "cannot move window");
                }
            }
            WindowRequest::BeginResize(direction) => {
                if let Err(err) = state.window.drag_resize_window(direction) {
                    tracing::warn!(target: targets::NATIVE, error = %err, "cannot resize window");
                }
            }
            WindowRequest::Redraw => state.window.request_redraw(),
        }
    }
}

/// [`ChromeHost`] over a raw `HWND`.
struct Win32Host {
    hwnd: HWND,
}

impl Win32Host {
    fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    fn monitor_info(&self) -> Option<(MonitorId, MONITORINFO)> {
        let monitor = unsafe { MonitorFromWindow(self.hwnd, MONITOR_DEFAULTTONEAREST) };
        if monitor.is_invalid() {
            return None;
        }
        let mut info = MONITORINFO {
            cbSize: std::mem::size_of::<MONITORINFO>() as u32,
            ..Default::default()
        };
        if !unsafe { GetMonitorInfoW(monitor, &mut info) }.as_bool() {
            return None;
        }
        Some((MonitorId::new(monitor.0 as usize as u64), info))
    }

    fn is_fullscreen(&self) -> bool {
        let mut window = RECT::default();
        if unsafe { GetWindowRect(self.hwnd, &mut window) }.is_err() {
            return false;
        }
        self.monitor_info()
            .is_some_and(|(_, info)| rect_from_win32(&window) == rect_from_win32(&info.rcMonitor))
    }
}

impl ChromeHost for Win32Host {
    fn scale_factor(&self) -> f64 {
        match unsafe { GetDpiForWindow(self.hwnd) } {
            0 => 1.0,
            dpi => dpi as f64 / 96.0,
        }
    }

    fn window_state(&self) -> WindowState {
        if unsafe { IsIconic(self.hwnd) }.as_bool() {
            WindowState::Minimized
        } else if unsafe { IsZoomed(self.hwnd) }.as_bool() {
            WindowState::Maximized
        } else if self.is_fullscreen() {
            WindowState::Fullscreen
        } else {
            WindowState::Normal
        }
    }

    fn screen_to_client(&self, screen: Point) -> Option<Point> {
        let mut point = POINT {
            x: screen.x,
            y: screen.y,
        };
        if !unsafe { ScreenToClient(self.hwnd, &mut point) }.as_bool() {
            return None;
        }
        Some(Point::new(point.x, point.y))
    }

    fn client_size(&self) -> Option<Size> {
        let mut rc = RECT::default();
        unsafe { GetClientRect(self.hwnd, &mut rc) }.ok()?;
        Some(rect_from_win32(&rc).size())
    }

    fn monitor_work_area(&self) -> Option<MonitorWorkArea> {
        let (id, info) = self.monitor_info()?;
        Some(MonitorWorkArea::new(
            id,
            rect_from_win32(&info.rcMonitor),
            rect_from_win32(&info.rcWork),
        ))
    }
}
