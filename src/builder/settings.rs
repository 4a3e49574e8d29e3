//! Builder for session settings.

use crate::builder::error::BuildError;
use crate::session::SessionSettings;
use std::time::Duration;

/// Builder for [`SessionSettings`]; unset fields keep their defaults.
#[derive(Clone, Debug, Default)]
pub struct SessionSettingsBuilder {
    auto_advance: Option<bool>,
    tick_interval: Option<Duration>,
}

impl SessionSettingsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether timed steps advance by themselves when they expire.
    pub fn auto_advance(mut self, enabled: bool) -> Self {
        self.auto_advance = Some(enabled);
        self
    }

    /// Countdown granularity used by `WorkoutSession::tick`.
    pub fn tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = Some(interval);
        self
    }

    pub fn build(self) -> Result<SessionSettings, BuildError> {
        let defaults = SessionSettings::default();
        let tick_interval = self.tick_interval.unwrap_or(defaults.tick_interval);
        if tick_interval.is_zero() {
            return Err(BuildError::ZeroTickInterval);
        }
        Ok(SessionSettings {
            auto_advance: self.auto_advance.unwrap_or(defaults.auto_advance),
            tick_interval,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_yields_defaults() {
        assert_eq!(
            SessionSettingsBuilder::new().build(),
            Ok(SessionSettings::default())
        );
    }

    #[test]
    fn overrides_are_applied() {
        let settings = SessionSettingsBuilder::new()
            .auto_advance(false)
            .tick_interval(Duration::from_millis(250))
            .build()
            .unwrap();
        assert!(!settings.auto_advance);
        assert_eq!(settings.tick_interval, Duration::from_millis(250));
    }

    #[test]
    fn zero_tick_interval_is_rejected() {
        assert_eq!(
            SessionSettingsBuilder::new()
                .tick_interval(Duration::ZERO)
                .build(),
            Err(BuildError::ZeroTickInterval)
        );
    }
}
