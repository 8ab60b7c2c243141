//! Client configuration.

use std::time::Duration;

use codec::{AssetRoots, FrameFormat};
use serde::{Deserialize, Serialize};

/// Settings for a client session.
///
/// Every field has a default, so a config file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Header framing limits.
    pub limits: wire::Limits,
    /// Grid frame field layout.
    pub frame_format: FrameFormat,
    /// Where catalog images are loaded from.
    pub assets: AssetRoots,
    /// Scrollback size in bytes before the oldest text is dropped.
    pub scrollback_limit: usize,
    /// Interval between display poll requests.
    pub poll_interval_ms: u64,
    /// Delay before the first display poll request.
    pub poll_start_delay_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            limits: wire::Limits::default(),
            frame_format: FrameFormat::default(),
            assets: AssetRoots::default(),
            scrollback_limit: 25_000,
            // 10 frames per second
            poll_interval_ms: 100,
            poll_start_delay_ms: 1_000,
        }
    }
}

impl ClientConfig {
    /// Creates a config suitable for testing with smaller values.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            scrollback_limit: 256,
            poll_interval_ms: 10,
            poll_start_delay_ms: 0,
            ..Self::default()
        }
    }

    /// Parses a JSON config document.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    #[must_use]
    pub const fn poll_start_delay(&self) -> Duration {
        Duration::from_millis(self.poll_start_delay_ms)
    }
}
