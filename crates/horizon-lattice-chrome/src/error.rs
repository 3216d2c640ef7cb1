//! Error types for the chrome crate.

use thiserror::Error;

/// Errors that can occur while configuring or hooking a borderless window.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChromeError {
    /// A title bar height of zero or less was requested.
    #[error("invalid title bar height: {0} (must be greater than zero)")]
    InvalidTitleBarHeight(i32),

    /// The window handle is not one the native hook understands.
    #[error("unsupported window handle: {0}")]
    UnsupportedHandle(String),

    /// The window handle could not be obtained from the toolkit.
    #[error("window handle unavailable: {0}")]
    HandleUnavailable(String),

    /// Installing the native message hook failed.
    #[error("failed to install native chrome hook: {0}")]
    HookInstall(String),

    /// Starting an interactive move or resize failed.
    #[error("window drag operation failed: {0}")]
    DragFailed(String),
}

/// Result type for chrome operations.
pub type ChromeResult<T> = Result<T, ChromeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChromeError::InvalidTitleBarHeight(-3);
        assert!(err.to_string().contains("-3"));

        let err = ChromeError::HookInstall("SetWindowSubclass returned FALSE".into());
        assert!(err.to_string().contains("SetWindowSubclass"));

        let err = ChromeError::DragFailed("not supported".into());
        assert!(err.to_string().starts_with("window drag operation failed"));
    }
}
