// SPDX-License-Identifier: MPL-2.0

use crate::prelude::*;

/// Which clock a [`TimeService`] should read.
///
/// [`TimeService`]: crate::TimeService
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClockPreference {
    /// The best facility of the platform, shared by the whole process.
    #[default]
    Best,
    /// Exactly this facility, if the platform offers it.
    Only(ClockKind),
}

/// Options for building a [`TimeService`].
///
/// [`TimeService`]: crate::TimeService
#[derive(Debug, Clone, Default)]
pub struct TimeConfig {
    clock: ClockPreference,
}

impl TimeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clock(mut self, preference: ClockPreference) -> Self {
        self.clock = preference;
        self
    }

    pub fn clock_preference(&self) -> ClockPreference {
        self.clock
    }

    /// Resolves the preference into a clock source.
    ///
    /// A facility that fails its probe falls back to the best one.
    pub(crate) fn resolve_clock(&self) -> Arc<ClockSource> {
        let kind = match self.clock {
            ClockPreference::Best => return ClockSource::get().clone(),
            ClockPreference::Only(kind) => kind,
        };

        match ClockSource::probe(kind) {
            Ok(source) => Arc::new(source),
            Err(err) => {
                warn!("time: {} is unavailable ({}), using the best clock", kind, err);
                ClockSource::get().clone()
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn best_is_the_default() {
        assert_eq!(TimeConfig::new().clock_preference(), ClockPreference::Best);
        let clock = TimeConfig::new().resolve_clock();
        assert!(Arc::ptr_eq(&clock, ClockSource::get()));
    }

    #[test]
    fn foreign_clock_falls_back_to_best() {
        let foreign = if cfg!(windows) {
            ClockKind::Realtime
        } else {
            ClockKind::PerformanceCounter
        };
        let clock = TimeConfig::new()
            .clock(ClockPreference::Only(foreign))
            .resolve_clock();
        assert_eq!(clock.kind(), ClockSource::get().kind());
    }

    #[cfg(unix)]
    #[test]
    fn realtime_can_be_forced() {
        let clock = TimeConfig::new()
            .clock(ClockPreference::Only(ClockKind::Realtime))
            .resolve_clock();
        assert_eq!(clock.kind(), ClockKind::Realtime);
        assert!(!clock.is_monotonic());
        assert_eq!(clock.frequency(), 1_000_000_000);
    }
}
