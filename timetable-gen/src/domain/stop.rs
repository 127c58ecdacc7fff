//! A trip's visit to one station.

use chrono::{DateTime, Utc};

use super::Station;

/// One scheduled call at a station, with timezone-aware instants.
///
/// Within a trip, stops are ordered by increasing time along the trip's
/// direction of travel, and `arrival <= departure` for each stop. The core
/// assumes the producer validated both; the input layer enforces them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    station: Station,
    comment: String,
    arrival: DateTime<Utc>,
    departure: DateTime<Utc>,
}

impl Stop {
    /// Create a stop at a station with its arrival and departure instants.
    pub fn new(
        station: Station,
        comment: impl Into<String>,
        arrival: DateTime<Utc>,
        departure: DateTime<Utc>,
    ) -> Self {
        Self {
            station,
            comment: comment.into(),
            arrival,
            departure,
        }
    }

    /// The station this stop calls at.
    pub fn station(&self) -> &Station {
        &self.station
    }

    /// Free-text comment rendered in the station's comment row.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Arrival instant.
    pub fn arrival(&self) -> DateTime<Utc> {
        self.arrival
    }

    /// Departure instant.
    pub fn departure(&self) -> DateTime<Utc> {
        self.departure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn accessors() {
        let arr = Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap();
        let dep = Utc.with_ymd_and_hms(2024, 3, 15, 8, 3, 0).unwrap();
        let stop = Stop::new(Station::new("York"), "crew change", arr, dep);
        assert_eq!(stop.station().as_str(), "York");
        assert_eq!(stop.comment(), "crew change");
        assert_eq!(stop.arrival(), arr);
        assert_eq!(stop.departure(), dep);
    }
}
