//! Borderless main window chrome for Horizon Lattice.
//!
//! This crate turns an undecorated top-level window into one that behaves
//! like a native one:
//!
//! - **Hit-testing**: classifies every pointer position as caption, resize
//!   edge, title bar button, or client content
//! - **Snap Layouts**: reports the custom maximize button to Windows as its
//!   own maximize button
//! - **Frame suppression**: hides the native caption while keeping the
//!   resize frame, and keeps maximized windows inside the monitor work area
//! - **Title bar**: an application-drawn bar with minimize, maximize/restore
//!   and close buttons
//!
//! # Example
//!
//! ```
//! use horizon_lattice_chrome::geometry::Point;
//! use horizon_lattice_chrome::window::{
//!     BorderlessWindow, ChromeConfig, HitRegion, NativeMessage, MessageOutcome,
//! };
//! # use horizon_lattice_chrome::geometry::Size;
//! # use horizon_lattice_chrome::window::{ChromeHost, MonitorWorkArea, WindowState};
//! # struct Host;
//! # impl ChromeHost for Host {
//! #     fn scale_factor(&self) -> f64 { 1.0 }
//! #     fn window_state(&self) -> WindowState { WindowState::Normal }
//! #     fn screen_to_client(&self, p: Point) -> Option<Point> { Some(p) }
//! #     fn client_size(&self) -> Option<Size> { Some(Size::new(800, 600)) }
//! #     fn monitor_work_area(&self) -> Option<MonitorWorkArea> { None }
//! # }
//! # let host = Host;
//!
//! let mut window = BorderlessWindow::new(ChromeConfig::new().with_title_bar_height(32));
//!
//! let dispatch = window.dispatch_native(
//!     NativeMessage::HitTest { screen: Point::new(730, 10) },
//!     &host,
//! );
//! assert_eq!(dispatch.outcome, MessageOutcome::HitTest(HitRegion::MaximizeButtonSnap));
//! ```
//!
//! # Logging
//!
//! The crate logs through `tracing`; see [`logging`] for the targets.

mod error;
pub mod geometry;
pub mod logging;
pub mod platform;
pub mod prelude;
pub mod signal;
pub mod window;

pub use error::{ChromeError, ChromeResult};
pub use signal::{ConnectionId, Signal};

// Re-export winit types that users may need
pub use winit::window::{CursorIcon, ResizeDirection, Window};
