//! Session player settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default countdown granularity.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// How a session drives its countdowns.
///
/// Build with [`crate::builder::SessionSettingsBuilder`] or use `Default`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Timed steps move on by themselves when their countdown expires.
    pub auto_advance: bool,
    /// Time removed from the countdown by each [`super::WorkoutSession::tick`].
    pub tick_interval: Duration,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            auto_advance: true,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}
