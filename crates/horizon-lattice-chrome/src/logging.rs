//! Logging targets for the window chrome.
//!
//! The chrome uses the `tracing` crate for instrumentation. Install a
//! subscriber in the application to see the output, and filter with the
//! targets below:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_lattice_chrome::hit_test=trace")
//!     .init();
//! ```
//!
//! Hit-test classification is very chatty (one event per pointer move over
//! the window), so it only logs at `trace` level.

/// Span names used by the chrome.
pub mod span_names {
    /// Native message dispatch span.
    pub const NATIVE_DISPATCH: &str = "horizon_lattice_chrome::native_dispatch";
}

/// Target names for log filtering.
pub mod targets {
    /// Crate-wide target.
    pub const CHROME: &str = "horizon_lattice_chrome";
    /// Hit-test classification.
    pub const HIT_TEST: &str = "horizon_lattice_chrome::hit_test";
    /// Window lifecycle (maximize/restore, glyph refresh, close requests).
    pub const LIFECYCLE: &str = "horizon_lattice_chrome::lifecycle";
    /// Monitor tracking and frame refresh requests.
    pub const MONITOR: &str = "horizon_lattice_chrome::monitor";
    /// Native hook installation and message bridging.
    pub const NATIVE: &str = "horizon_lattice_chrome::native";
    /// Signal emission.
    pub const SIGNAL: &str = "horizon_lattice_chrome::signal";
}
