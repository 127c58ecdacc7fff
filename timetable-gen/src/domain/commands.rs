//! Per-station command overrides with a wildcard default.

use std::collections::HashMap;

use super::Station;

/// Station-keyed command strings with an optional trip- or table-wide
/// default.
///
/// Lookups resolve in two steps: a station-specific override wins, then the
/// wildcard default, then the empty string. Modelling the wildcard as a
/// separate field keeps it from colliding with a legitimately empty station
/// identifier.
///
/// # Examples
///
/// ```
/// use timetable_gen::domain::{CommandOverrides, Station};
///
/// let mut commands = CommandOverrides::new();
/// commands.set_default("$no_waiting");
/// commands.insert(Station::new("York"), "$hold");
///
/// assert_eq!(commands.lookup(&Station::new("York")), "$hold");
/// assert_eq!(commands.lookup(&Station::new("Leeds")), "$no_waiting");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOverrides {
    specific: HashMap<Station, String>,
    default: Option<String>,
}

impl CommandOverrides {
    /// An empty override set: every lookup resolves to `""`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the command for one station.
    pub fn insert(&mut self, station: Station, command: impl Into<String>) {
        self.specific.insert(station, command.into());
    }

    /// Set the wildcard default used when no station-specific entry exists.
    pub fn set_default(&mut self, command: impl Into<String>) {
        self.default = Some(command.into());
    }

    /// Resolve the command for a station: specific, then wildcard, then `""`.
    pub fn lookup(&self, station: &Station) -> &str {
        self.specific
            .get(station)
            .map(String::as_str)
            .or(self.default.as_deref())
            .unwrap_or("")
    }
}
