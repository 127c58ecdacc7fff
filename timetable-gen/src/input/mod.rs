//! Timetable description files.
//!
//! The loaders that produce trips (GTFS readers, route and consist
//! databases) live outside this crate; they hand over a JSON description
//! of the finished timetable. This module deserializes that description
//! and converts it into validated domain values, rejecting anything the
//! core is entitled to assume away: unknown timezones, malformed instants,
//! a stop that departs before it arrives, or a trip with no stops.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Deserialize;

use crate::domain::{
    CommandOverrides, ConsistComponent, SpeedUnit, Station, Stop, Timetable, Trip, TripFields,
};

/// Errors raised while converting a description file into domain values.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The timezone name is not in the tz database.
    #[error("unknown timezone {name:?}")]
    UnknownTimezone {
        /// The name as given in the file.
        name: String,
    },

    /// An arrival or departure is not a valid RFC 3339 instant.
    #[error("trip {trip:?}, stop {station:?}: invalid instant {value:?}: {source}")]
    InvalidInstant {
        trip: String,
        station: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A stop departs before it arrives.
    #[error("trip {trip:?}, stop {station:?}: departure is before arrival")]
    DepartureBeforeArrival { trip: String, station: String },

    /// A trip has no stops and cannot be laid out.
    #[error("trip {trip:?} has no stops")]
    EmptyTrip { trip: String },
}

/// Top-level timetable description.
#[derive(Debug, Deserialize)]
pub struct TimetableFile {
    /// Timetable display name.
    pub name: String,

    /// Name of the route the timetable belongs to.
    #[serde(default)]
    pub route: String,

    /// Effective date (ISO 8601).
    pub date: NaiveDate,

    /// tz database name all cell times are rendered in.
    pub timezone: String,

    /// Unit the speed commands are expressed in: `ms`, `kph` or `mph`.
    pub speed_unit: SpeedUnitTag,

    /// Table-wide per-station commands.
    #[serde(default)]
    pub station_commands: HashMap<String, String>,

    /// Table-wide command for stations without a specific entry.
    #[serde(default)]
    pub default_station_command: Option<String>,

    /// Trips in column order.
    pub trips: Vec<TripEntry>,
}

/// Speed unit tag as written in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedUnitTag {
    Ms,
    Kph,
    Mph,
}

impl From<SpeedUnitTag> for SpeedUnit {
    fn from(tag: SpeedUnitTag) -> Self {
        match tag {
            SpeedUnitTag::Ms => SpeedUnit::MetersPerSecond,
            SpeedUnitTag::Kph => SpeedUnit::Kph,
            SpeedUnitTag::Mph => SpeedUnit::Mph,
        }
    }
}

/// One trip in the description file.
#[derive(Debug, Deserialize)]
pub struct TripEntry {
    pub name: String,

    /// Path identifier from the route.
    #[serde(default)]
    pub path: String,

    /// Equipment components front to back.
    #[serde(default)]
    pub consist: Vec<ConsistEntry>,

    /// Seconds added to the first stop's arrival to get the start time.
    #[serde(default)]
    pub start_offset: i64,

    #[serde(default)]
    pub start_commands: String,
    #[serde(default)]
    pub note_commands: String,
    #[serde(default)]
    pub speed_commands: String,
    #[serde(default)]
    pub delay_commands: String,
    #[serde(default)]
    pub dispose_commands: String,

    /// Per-station commands for this trip's cells.
    #[serde(default)]
    pub station_commands: HashMap<String, String>,

    /// Trip-wide command for stations without a specific entry.
    #[serde(default)]
    pub default_station_command: Option<String>,

    /// Stops in travel order.
    pub stops: Vec<StopEntry>,
}

/// One equipment reference.
#[derive(Debug, Deserialize)]
pub struct ConsistEntry {
    pub id: String,
    #[serde(default)]
    pub reverse: bool,
}

/// One stop in a trip.
#[derive(Debug, Deserialize)]
pub struct StopEntry {
    pub station: String,

    #[serde(default)]
    pub comment: String,

    /// Arrival instant, RFC 3339.
    pub arrival: String,

    /// Departure instant, RFC 3339. Defaults to the arrival.
    #[serde(default)]
    pub departure: Option<String>,
}

impl TimetableFile {
    /// Convert the description into a validated [`Timetable`].
    pub fn into_timetable(self) -> Result<Timetable, InputError> {
        let tzinfo: Tz = self
            .timezone
            .parse()
            .map_err(|_| InputError::UnknownTimezone {
                name: self.timezone.clone(),
            })?;

        let trips = self
            .trips
            .into_iter()
            .map(TripEntry::into_trip)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Timetable::new(
            self.name,
            self.route,
            self.date,
            tzinfo,
            trips,
            overrides(self.station_commands, self.default_station_command),
            self.speed_unit.into(),
        ))
    }
}

impl TripEntry {
    fn into_trip(self) -> Result<Trip, InputError> {
        if self.stops.is_empty() {
            return Err(InputError::EmptyTrip { trip: self.name });
        }

        let stops = self
            .stops
            .into_iter()
            .map(|stop| stop.into_stop(&self.name))
            .collect::<Result<Vec<_>, _>>()?;

        let consist = self
            .consist
            .into_iter()
            .map(|entry| ConsistComponent::new(entry.id, entry.reverse))
            .collect();

        Ok(Trip::new(TripFields {
            name: self.name,
            stops,
            path: self.path,
            consist,
            start_offset: self.start_offset,
            start_commands: self.start_commands,
            note_commands: self.note_commands,
            speed_commands: self.speed_commands,
            delay_commands: self.delay_commands,
            station_commands: overrides(self.station_commands, self.default_station_command),
            dispose_commands: self.dispose_commands,
        }))
    }
}

impl StopEntry {
    fn into_stop(self, trip: &str) -> Result<Stop, InputError> {
        let arrival = parse_instant(&self.arrival, trip, &self.station)?;
        let departure = match &self.departure {
            Some(value) => parse_instant(value, trip, &self.station)?,
            None => arrival,
        };

        if departure < arrival {
            return Err(InputError::DepartureBeforeArrival {
                trip: trip.to_string(),
                station: self.station,
            });
        }

        Ok(Stop::new(
            Station::new(self.station),
            self.comment,
            arrival,
            departure,
        ))
    }
}

fn parse_instant(value: &str, trip: &str, station: &str) -> Result<DateTime<Utc>, InputError> {
    DateTime::parse_from_rfc3339(value)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|source| InputError::InvalidInstant {
            trip: trip.to_string(),
            station: station.to_string(),
            value: value.to_string(),
            source,
        })
}

fn overrides(specific: HashMap<String, String>, default: Option<String>) -> CommandOverrides {
    let mut commands = CommandOverrides::new();
    for (station, command) in specific {
        commands.insert(Station::new(station), command);
    }
    if let Some(command) = default {
        commands.set_default(command);
    }
    commands
}
