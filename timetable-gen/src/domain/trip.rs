//! One scheduled run of a train.

use chrono::{DateTime, Duration, Utc};

use super::{CommandOverrides, ConsistComponent, DomainError, Stop};

/// A scheduled trip: an ordered stop sequence plus the formatting and
/// command metadata rendered in its timetable column.
///
/// All fields are set once by the upstream loaders; the core reads them
/// only. The command strings are opaque to the core and rendered verbatim.
#[derive(Debug, Clone)]
pub struct Trip {
    name: String,
    stops: Vec<Stop>,
    path: String,
    consist: Vec<ConsistComponent>,
    start_offset: i64,
    start_commands: String,
    note_commands: String,
    speed_commands: String,
    delay_commands: String,
    station_commands: CommandOverrides,
    dispose_commands: String,
}

/// Builder-free constructor argument bundle.
///
/// Trips carry enough fields that a positional constructor would be easy to
/// misuse; the loader fills this struct by name instead.
#[derive(Debug, Clone, Default)]
pub struct TripFields {
    pub name: String,
    pub stops: Vec<Stop>,
    pub path: String,
    pub consist: Vec<ConsistComponent>,
    pub start_offset: i64,
    pub start_commands: String,
    pub note_commands: String,
    pub speed_commands: String,
    pub delay_commands: String,
    pub station_commands: CommandOverrides,
    pub dispose_commands: String,
}

impl Trip {
    /// Assemble a trip from its fields.
    pub fn new(fields: TripFields) -> Self {
        Self {
            name: fields.name,
            stops: fields.stops,
            path: fields.path,
            consist: fields.consist,
            start_offset: fields.start_offset,
            start_commands: fields.start_commands,
            note_commands: fields.note_commands,
            speed_commands: fields.speed_commands,
            delay_commands: fields.delay_commands,
            station_commands: fields.station_commands,
            dispose_commands: fields.dispose_commands,
        }
    }

    /// The trip's display name (column header).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stops in travel order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Identifier of the path the trip runs over.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Equipment components, joined with `+` when rendered.
    pub fn consist(&self) -> &[ConsistComponent] {
        &self.consist
    }

    /// Commands appended to the start-time cell.
    pub fn start_commands(&self) -> &str {
        &self.start_commands
    }

    /// Commands for the `#note` row.
    pub fn note_commands(&self) -> &str {
        &self.note_commands
    }

    /// Commands for the speed row, already in the timetable's unit.
    pub fn speed_commands(&self) -> &str {
        &self.speed_commands
    }

    /// Commands for the `#restartdelay` row.
    pub fn delay_commands(&self) -> &str {
        &self.delay_commands
    }

    /// Per-station command overrides for this trip's cells.
    pub fn station_commands(&self) -> &CommandOverrides {
        &self.station_commands
    }

    /// Commands for the `#dispose` row.
    pub fn dispose_commands(&self) -> &str {
        &self.dispose_commands
    }

    /// Nominal departure instant from the origin: the first stop's arrival
    /// plus the start offset.
    ///
    /// Fails for a trip with no stops, which has no defined start time.
    pub fn start_time(&self) -> Result<DateTime<Utc>, DomainError> {
        let first = self.stops.first().ok_or_else(|| DomainError::EmptyTrip {
            trip: self.name.clone(),
        })?;
        Ok(first.arrival() + Duration::seconds(self.start_offset))
    }
}
