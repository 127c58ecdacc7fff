//! The timetable aggregate and its output-variant selector.

use chrono::NaiveDate;
use chrono_tz::Tz;

use super::{CommandOverrides, Trip};

/// Unit the timetable's speed commands are expressed in.
///
/// A closed set: each variant maps to exactly one speed-row header token,
/// so the renderer's match stays exhaustive. The core never converts
/// between units; the upstream producer of the command strings does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedUnit {
    /// Meters per second (`#speed`).
    MetersPerSecond,
    /// Kilometers per hour (`#speedkph`).
    Kph,
    /// Miles per hour (`#speedmph`).
    Mph,
}

impl SpeedUnit {
    /// The header token for the speed row.
    ///
    /// # Examples
    ///
    /// ```
    /// use timetable_gen::domain::SpeedUnit;
    ///
    /// assert_eq!(SpeedUnit::Kph.row_header(), "#speedkph");
    /// ```
    pub fn row_header(self) -> &'static str {
        match self {
            SpeedUnit::MetersPerSecond => "#speed",
            SpeedUnit::Kph => "#speedkph",
            SpeedUnit::Mph => "#speedmph",
        }
    }
}

/// The aggregate root: a named set of trips over one route, rendered as a
/// single grid with trips as columns and stations as rows.
///
/// `tzinfo` is the timezone every instant is converted to before its
/// hour/minute appear in a cell; no other timezone arithmetic happens in
/// the core.
#[derive(Debug, Clone)]
pub struct Timetable {
    name: String,
    route: String,
    date: NaiveDate,
    tzinfo: Tz,
    trips: Vec<Trip>,
    station_commands: CommandOverrides,
    speed_unit: SpeedUnit,
}

impl Timetable {
    /// Assemble a timetable from its parts.
    pub fn new(
        name: impl Into<String>,
        route: impl Into<String>,
        date: NaiveDate,
        tzinfo: Tz,
        trips: Vec<Trip>,
        station_commands: CommandOverrides,
        speed_unit: SpeedUnit,
    ) -> Self {
        Self {
            name: name.into(),
            route: route.into(),
            date,
            tzinfo,
            trips,
            station_commands,
            speed_unit,
        }
    }

    /// The timetable's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The route the timetable belongs to.
    pub fn route(&self) -> &str {
        &self.route
    }

    /// The effective date of the timetable.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Timezone all cell times are rendered in.
    pub fn tzinfo(&self) -> Tz {
        self.tzinfo
    }

    /// Trips in column order.
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Table-wide per-station command overrides.
    pub fn station_commands(&self) -> &CommandOverrides {
        &self.station_commands
    }

    /// Unit variant selecting the speed-row header.
    pub fn speed_unit(&self) -> SpeedUnit {
        self.speed_unit
    }
}
