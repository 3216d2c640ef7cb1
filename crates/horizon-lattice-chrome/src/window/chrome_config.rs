//! Borderless window chrome configuration.

use crate::error::{ChromeError, ChromeResult};
use crate::geometry::Size;

/// Width of each title bar button, in logical pixels.
pub const BUTTON_WIDTH: i32 = 46;

/// Thickness of the invisible resize margin along each edge, in logical
/// pixels. Scaled by the device pixel ratio at hit-test time.
pub const HIT_TEST_MARGIN: i32 = 4;

/// Default title bar height, in logical pixels.
pub const DEFAULT_TITLE_BAR_HEIGHT: i32 = 32;

/// Default minimum window size, in logical pixels.
pub const DEFAULT_MIN_SIZE: Size = Size::new(400, 300);

/// Runtime configuration of a borderless window's chrome.
///
/// Button width and hit-test margin are fixed ([`BUTTON_WIDTH`],
/// [`HIT_TEST_MARGIN`]); the title bar height and the resizable flag may
/// change after construction.
///
/// # Example
///
/// ```
/// use horizon_lattice_chrome::window::ChromeConfig;
///
/// let config = ChromeConfig::new()
///     .with_title_bar_height(40)
///     .with_resizable(false);
///
/// assert_eq!(config.title_bar_height(), 40);
/// assert!(!config.is_resizable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromeConfig {
    title_bar_height: i32,
    resizable: bool,
    min_size: Size,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ChromeConfig {
    /// Create a configuration with a 32px title bar, resizable, and a
    /// 400x300 minimum size.
    pub fn new() -> Self {
        Self {
            title_bar_height: DEFAULT_TITLE_BAR_HEIGHT,
            resizable: true,
            min_size: DEFAULT_MIN_SIZE,
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Set the title bar height. Non-positive values are ignored.
    pub fn with_title_bar_height(mut self, height: i32) -> Self {
        let _ = self.set_title_bar_height(height);
        self
    }

    /// Set whether the window can be resized from its edges.
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Set the minimum window size in logical pixels.
    pub fn with_min_size(mut self, size: Size) -> Self {
        self.min_size = Size::new(size.width.max(0), size.height.max(0));
        self
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Set the title bar height.
    ///
    /// Returns `Ok(true)` if the height changed, `Ok(false)` if it already
    /// had this value.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::InvalidTitleBarHeight`] for zero or negative
    /// heights; the previous height is kept.
    pub fn set_title_bar_height(&mut self, height: i32) -> ChromeResult<bool> {
        if height <= 0 {
            return Err(ChromeError::InvalidTitleBarHeight(height));
        }
        let changed = self.title_bar_height != height;
        self.title_bar_height = height;
        Ok(changed)
    }

    /// Set whether the window can be resized from its edges.
    pub fn set_resizable(&mut self, resizable: bool) {
        self.resizable = resizable;
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Title bar height in logical pixels.
    pub fn title_bar_height(&self) -> i32 {
        self.title_bar_height
    }

    /// Whether edge resizing is enabled.
    pub fn is_resizable(&self) -> bool {
        self.resizable
    }

    /// Minimum window size in logical pixels.
    pub fn min_size(&self) -> Size {
        self.min_size
    }

    /// Resize margin in physical pixels for the given scale factor.
    pub fn hit_test_margin(&self, scale_factor: f64) -> i32 {
        (HIT_TEST_MARGIN as f64 * scale_factor) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ChromeConfig::new();
        assert_eq!(config.title_bar_height(), 32);
        assert!(config.is_resizable());
        assert_eq!(config.min_size(), Size::new(400, 300));
    }

    #[test]
    fn test_rejects_non_positive_height() {
        let mut config = ChromeConfig::new().with_title_bar_height(40);

        assert_eq!(
            config.set_title_bar_height(0),
            Err(ChromeError::InvalidTitleBarHeight(0))
        );
        assert_eq!(
            config.set_title_bar_height(-8),
            Err(ChromeError::InvalidTitleBarHeight(-8))
        );
        assert_eq!(config.title_bar_height(), 40);

        // The builder silently keeps the previous value.
        let config = config.with_title_bar_height(0);
        assert_eq!(config.title_bar_height(), 40);
    }

    #[test]
    fn test_height_change_reporting() {
        let mut config = ChromeConfig::new();
        assert_eq!(config.set_title_bar_height(32), Ok(false));
        assert_eq!(config.set_title_bar_height(48), Ok(true));
    }

    #[test]
    fn test_margin_scales_with_dpi() {
        let config = ChromeConfig::new();
        assert_eq!(config.hit_test_margin(1.0), 4);
        assert_eq!(config.hit_test_margin(1.5), 6);
        assert_eq!(config.hit_test_margin(2.0), 8);
    }
}
