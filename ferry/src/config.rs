//! Instance configuration and the process-wide platform patch flag.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Delay between a state change and the announcement it triggers.
pub const ANNOUNCE_DELAY: Duration = Duration::from_millis(250);

/// Items skipped by PageUp/PageDown.
pub const PAGE_STEP: usize = 5;

/// Text written to a cleared live region. Some assistive technology stops
/// announcing regions that were ever truly empty.
pub const PLACEHOLDER: &str = "\u{a0}";

/// Per-instance configuration.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use ferry::FerryConfig;
///
/// let config = FerryConfig::default()
///     .with_announce_delay(Duration::from_millis(400))
///     .with_keyboard_toggles(true);
/// assert_eq!(config.page_step, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FerryConfig {
    /// Delay applied to every announcement.
    ///
    /// Default: 250 ms
    pub announce_delay: Duration,

    /// Items skipped by a paging move.
    ///
    /// Default: 5
    pub page_step: usize,

    /// Non-empty text used when clearing a live region.
    pub placeholder: String,

    /// When set, Space/Enter selection from the keyboard adds to the
    /// selection instead of replacing it.
    pub keyboard_toggles: bool,

    /// Scroll the active item into view after keyboard moves.
    pub reveal_on_move: bool,
}

impl Default for FerryConfig {
    fn default() -> Self {
        Self {
            announce_delay: ANNOUNCE_DELAY,
            page_step: PAGE_STEP,
            placeholder: PLACEHOLDER.to_string(),
            keyboard_toggles: false,
            reveal_on_move: true,
        }
    }
}

impl FerryConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the announcement delay.
    pub fn with_announce_delay(mut self, delay: Duration) -> Self {
        self.announce_delay = delay;
        self
    }

    /// Set the paging step. Zero is treated as one.
    pub fn with_page_step(mut self, step: usize) -> Self {
        self.page_step = step.max(1);
        self
    }

    /// Set the live region placeholder. Blank text falls back to the default.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        self.placeholder = if placeholder.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            placeholder
        };
        self
    }

    /// Make keyboard selection additive.
    pub fn with_keyboard_toggles(mut self, toggles: bool) -> Self {
        self.keyboard_toggles = toggles;
        self
    }

    /// Enable or disable reveal after keyboard moves.
    pub fn with_reveal_on_move(mut self, reveal: bool) -> Self {
        self.reveal_on_move = reveal;
        self
    }
}

// =============================================================================
// Platform patches
// =============================================================================

/// Platform-specific behavior patches.
///
/// When effective, drag visuals are cleared on pointer release as well as on
/// drag end, for platforms that never deliver a drag-end notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformPatches {
    /// Ask the host whether the platform prefers touch.
    #[default]
    Auto,
    /// Always apply.
    Enabled,
    /// Never apply.
    Disabled,
}

impl PlatformPatches {
    /// Resolve against the host's touch preference.
    pub fn effective(self, prefers_touch: bool) -> bool {
        match self {
            Self::Auto => prefers_touch,
            Self::Enabled => true,
            Self::Disabled => false,
        }
    }
}

impl From<bool> for PlatformPatches {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Enabled } else { Self::Disabled }
    }
}

impl From<Option<bool>> for PlatformPatches {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Auto, Self::from)
    }
}

#[derive(Debug)]
struct PatchState {
    patches: PlatformPatches,
    locked: bool,
}

static PATCH_STATE: Mutex<PatchState> = Mutex::new(PatchState {
    patches: PlatformPatches::Auto,
    locked: false,
});

/// Set the process-wide platform patch flag.
///
/// Only allowed before the first instance is built; afterwards the flag is
/// locked and this returns [`ConfigError::PatchesLocked`].
pub fn configure_platform_patches(patches: impl Into<PlatformPatches>) -> Result<(), ConfigError> {
    let mut state = PATCH_STATE.lock().unwrap_or_else(PoisonError::into_inner);
    if state.locked {
        log::warn!("Platform patches configured after the first instance was created");
        return Err(ConfigError::PatchesLocked);
    }
    state.patches = patches.into();
    Ok(())
}

/// Current process-wide platform patch flag.
pub fn platform_patches() -> PlatformPatches {
    PATCH_STATE
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .patches
}

/// Lock the flag and return its value. Called when an instance is built.
pub(crate) fn lock_platform_patches() -> PlatformPatches {
    let mut state = PATCH_STATE.lock().unwrap_or_else(PoisonError::into_inner);
    state.locked = true;
    state.patches
}
