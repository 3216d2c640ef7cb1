//! Platform event sources for the borderless window chrome.
//!
//! Two sources feed the same [`BorderlessWindow`](crate::window::BorderlessWindow):
//!
//! - [`NativeChromeHook`] (Windows only) subclasses the native window and
//!   answers non-client messages, which enables Snap Layouts on the custom
//!   maximize button.
//! - [`handle_window_event`] consumes winit window events. It is always
//!   needed for the client-area buttons, and without a native hook it also
//!   drives moves and resizes.
//!
//! ```ignore
//! let chrome = Rc::new(RefCell::new(BorderlessWindow::new(ChromeConfig::new())));
//!
//! // On Windows, let the hook own the controller borrow and the requests:
//! let hook = NativeChromeHook::install(window.clone(), chrome.clone())?;
//! let response = hook.handle_window_event(&event);
//!
//! // Elsewhere, drive the controller directly:
//! let response = handle_window_event(&mut chrome.borrow_mut(), &window, &event);
//! if response.close_requested {
//!     event_loop.exit();
//! }
//! ```
//!
//! With a hook installed, a close is posted to the window and arrives as
//! `WindowEvent::CloseRequested` after the veto has passed.

#[cfg(target_os = "windows")]
mod win32;
mod winit_host;

#[cfg(target_os = "windows")]
pub use win32::NativeChromeHook;
pub use winit_host::{WinitHost, WinitResponse, apply_requests, handle_window_event};

/// Whether this platform provides a native chrome hook.
///
/// This only reports availability. [`ChromeCapabilities`] start with
/// `native_hook: false` and only `NativeChromeHook::install` sets it, since
/// the flag changes which path starts drags and runs window requests.
///
/// [`ChromeCapabilities`]: crate::window::ChromeCapabilities
pub const fn has_native_chrome_hook() -> bool {
    cfg!(target_os = "windows")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_hook_capability() {
        assert_eq!(has_native_chrome_hook(), cfg!(target_os = "windows"));
    }

    #[test]
    fn test_capabilities_wait_for_hook_install() {
        let capabilities = crate::window::ChromeCapabilities::default();
        assert!(!capabilities.native_hook);
        assert!(capabilities.toolkit_drag);
    }
}
