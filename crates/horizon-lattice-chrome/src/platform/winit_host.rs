//! Toolkit event source built on winit.
//!
//! Feeds winit window events into a [`BorderlessWindow`] and carries out the
//! resulting [`WindowRequest`]s with winit calls. Without a native hook this
//! path also starts interactive moves and resizes through
//! [`Window::drag_window`] and [`Window::drag_resize_window`].

use std::hash::{DefaultHasher, Hash, Hasher};

use cursor_icon::CursorIcon;
use winit::error::ExternalError;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::monitor::MonitorHandle;
use winit::window::Window;

use crate::error::{ChromeError, ChromeResult};
use crate::geometry::{Point, Rect, Size};
use crate::logging::targets;
use crate::window::{
    BorderlessWindow, ChromeHost, MonitorId, MonitorWorkArea, WindowRequest, WindowState,
    cursor_for_region,
};

/// [`ChromeHost`] over a winit window.
///
/// winit does not expose monitor work areas, so the reported work area is
/// the full monitor bounds.
#[derive(Debug, Clone, Copy)]
pub struct WinitHost<'a> {
    window: &'a Window,
}

impl<'a> WinitHost<'a> {
    /// Wrap a winit window.
    pub fn new(window: &'a Window) -> Self {
        Self { window }
    }
}

impl ChromeHost for WinitHost<'_> {
    fn scale_factor(&self) -> f64 {
        self.window.scale_factor()
    }

    fn window_state(&self) -> WindowState {
        if self.window.fullscreen().is_some() {
            WindowState::Fullscreen
        } else if self.window.is_minimized() == Some(true) {
            WindowState::Minimized
        } else if self.window.is_maximized() {
            WindowState::Maximized
        } else {
            WindowState::Normal
        }
    }

    fn screen_to_client(&self, screen: Point) -> Option<Point> {
        let origin = self.window.inner_position().ok()?;
        Some(Point::new(screen.x - origin.x, screen.y - origin.y))
    }

    fn client_size(&self) -> Option<Size> {
        let size = self.window.inner_size();
        Some(Size::new(
            i32::try_from(size.width).ok()?,
            i32::try_from(size.height).ok()?,
        ))
    }

    fn monitor_work_area(&self) -> Option<MonitorWorkArea> {
        let monitor = self.window.current_monitor()?;
        let position = monitor.position();
        let size = monitor.size();
        let bounds = Rect::from_origin_size(
            Point::new(position.x, position.y),
            Size::new(
                i32::try_from(size.width).ok()?,
                i32::try_from(size.height).ok()?,
            ),
        );
        Some(MonitorWorkArea::new(monitor_id(&monitor), bounds, bounds))
    }
}

fn monitor_id(monitor: &MonitorHandle) -> MonitorId {
    let position = monitor.position();
    let size = monitor.size();
    monitor_key_id(
        monitor.name().as_deref(),
        (position.x, position.y),
        (size.width, size.height),
    )
}

/// Identity of a monitor from the properties winit reports for it.
///
/// `MonitorHandle` is not hashable, so the id is derived from its name and
/// bounds. Moving the monitor in the display settings yields a new id.
fn monitor_key_id(name: Option<&str>, position: (i32, i32), size: (u32, u32)) -> MonitorId {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    position.hash(&mut hasher);
    size.hash(&mut hasher);
    MonitorId::new(hasher.finish())
}

/// What the application should do after [`handle_window_event`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WinitResponse {
    /// The chrome consumed the event; do not forward it to content.
    pub consumed: bool,
    /// A close passed the veto; the application should close the window.
    ///
    /// Only set when the requests ran on this path. With a native hook the
    /// close is posted to the window and arrives as
    /// [`WindowEvent::CloseRequested`].
    pub close_requested: bool,
    /// Requests left for the native hook, which must run them after the
    /// controller borrow is released.
    pub deferred: Vec<WindowRequest>,
}

/// Feed one winit window event to the chrome and apply its requests.
///
/// When a native hook is installed monitor changes come from the hook, since
/// winit and the hook identify monitors differently. The hook also owns the
/// window mutations: queued requests are returned in
/// [`WinitResponse::deferred`] instead of running here, because they re-enter
/// the window procedure while the caller still borrows the controller. Use
/// `NativeChromeHook::handle_window_event` to have them run.
pub fn handle_window_event(
    chrome: &mut BorderlessWindow,
    window: &Window,
    event: &WindowEvent,
) -> WinitResponse {
    let host = WinitHost::new(window);
    let routed = route_event(chrome, &host, event);
    if let Some(cursor) = routed.cursor {
        window.set_cursor(cursor);
    }

    let mut response = WinitResponse {
        consumed: routed.consumed,
        ..WinitResponse::default()
    };
    match pending_requests(chrome) {
        PendingRequests::Apply(requests) => {
            response.close_requested = apply_requests(chrome, window, &requests);
        }
        PendingRequests::Defer(requests) => response.deferred = requests,
    }
    response
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct RoutedEvent {
    consumed: bool,
    cursor: Option<CursorIcon>,
}

fn route_event(
    chrome: &mut BorderlessWindow,
    host: &dyn ChromeHost,
    event: &WindowEvent,
) -> RoutedEvent {
    let native = chrome.capabilities().native_hook;
    let mut routed = RoutedEvent::default();

    match event {
        WindowEvent::CursorMoved { position, .. } => {
            let pointer = Point::new(position.x as i32, position.y as i32);
            let region = chrome.pointer_moved(pointer, host);
            if !native {
                routed.cursor = Some(cursor_for_region(region));
            }
        }
        WindowEvent::CursorLeft { .. } => chrome.pointer_left(),
        WindowEvent::MouseInput {
            state,
            button: MouseButton::Left,
            ..
        } => {
            routed.consumed = match state {
                ElementState::Pressed => chrome.pointer_pressed(host),
                ElementState::Released => chrome.pointer_released(host),
            };
        }
        WindowEvent::Resized(_) => chrome.on_state_changed(host.window_state()),
        WindowEvent::Moved(_) if !native => {
            if let Some(monitor) = host.monitor_work_area() {
                chrome.on_moved(monitor.id);
            }
        }
        _ => {}
    }
    routed
}

#[derive(Debug, PartialEq, Eq)]
enum PendingRequests {
    Apply(Vec<WindowRequest>),
    Defer(Vec<WindowRequest>),
}

fn pending_requests(chrome: &mut BorderlessWindow) -> PendingRequests {
    let requests = chrome.take_requests();
    if chrome.capabilities().native_hook {
        PendingRequests::Defer(requests)
    } else {
        PendingRequests::Apply(requests)
    }
}

/// Carry out window requests with winit calls.
///
/// Returns `true` if one of the requests was a close; winit cannot close a
/// window itself, so the application must drop it. Not for use while a
/// native hook is installed; the hook runs its own requests.
pub fn apply_requests(
    chrome: &mut BorderlessWindow,
    window: &Window,
    requests: &[WindowRequest],
) -> bool {
    let mut close_requested = false;
    for request in requests {
        match *request {
            WindowRequest::Minimize => window.set_minimized(true),
            WindowRequest::Maximize => window.set_maximized(true),
            WindowRequest::Restore => {
                window.set_minimized(false);
                window.set_maximized(false);
            }
            WindowRequest::Close => close_requested = true,
            WindowRequest::RefreshFrame | WindowRequest::Redraw => window.request_redraw(),
            WindowRequest::ApplyFrameStyle { resizable } => window.set_resizable(resizable),
            WindowRequest::BeginMove => {
                if let Err(err) = drag(window.drag_window()) {
                    tracing::warn!(target: targets::CHROME, error = %err, "cannot move window");
                    chrome.drag_unavailable();
                }
            }
            WindowRequest::BeginResize(direction) => {
                if let Err(err) = drag(window.drag_resize_window(direction)) {
                    tracing::warn!(target: targets::CHROME, error = %err, "cannot resize window");
                }
            }
        }
    }
    close_requested
}

fn drag(result: Result<(), ExternalError>) -> ChromeResult<()> {
    result.map_err(|err| ChromeError::DragFailed(err.to_string()))
}
