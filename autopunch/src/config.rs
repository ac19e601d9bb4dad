use std::path::Path;

use chrono::NaiveTime;
use serde::Deserialize;
use tracing::debug;

use crate::errors::AutomationError;

/// Login identity used for the Google sign-in flow.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// A pair of times-of-day, no date component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TimeInterval {
    #[serde(deserialize_with = "deserialize_time")]
    pub start: NaiveTime,
    #[serde(deserialize_with = "deserialize_time")]
    pub end: NaiveTime,
}

/// One base work interval plus any number of break intervals.
#[derive(Debug, Clone, Deserialize)]
pub struct Schedule {
    pub base: TimeInterval,
    #[serde(default)]
    pub breaks: Vec<TimeInterval>,
}

impl Schedule {
    /// All target times that still need a scheduled entry after the
    /// work start has been recorded: every break boundary plus the work end.
    pub fn remaining_targets(&self) -> Vec<NaiveTime> {
        let mut targets: Vec<NaiveTime> = self
            .breaks
            .iter()
            .flat_map(|b| [b.start, b.end])
            .collect();
        targets.push(self.base.end);
        targets
    }

    /// Intervals sorted by start must chain: each end at or before the next
    /// start. The check runs over base and breaks together.
    fn is_ordered(&self) -> bool {
        let mut intervals = Vec::with_capacity(self.breaks.len() + 1);
        intervals.push(self.base);
        intervals.extend(self.breaks.iter().copied());
        intervals.sort_by_key(|i| i.start);
        intervals.windows(2).all(|pair| pair[0].end <= pair[1].start)
    }
}

/// Everything the program reads at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub profile: Credentials,
    pub schedule: Schedule,
}

impl Config {
    /// Read and validate a configuration file. Any failure here is fatal to
    /// startup; no browser is launched on an invalid configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AutomationError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        debug!(
            breaks = config.schedule.breaks.len(),
            "configuration loaded from {}",
            path.as_ref().display()
        );
        Ok(config)
    }

    /// Reject schedules whose intervals overlap or are out of order.
    pub fn validate(&self) -> Result<(), AutomationError> {
        if !self.schedule.is_ordered() {
            return Err(AutomationError::InvalidSchedule(
                "intervals must be non-overlapping and chronologically ordered".to_string(),
            ));
        }
        Ok(())
    }
}

/// Accepts `HH:MM` or `HH:MM:SS`.
fn deserialize_time<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    NaiveTime::parse_from_str(&s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M"))
        .map_err(|e| serde::de::Error::custom(format!("invalid time of day {s:?}: {e}")))
}
