//! Timetable rendering.
//!
//! Projects a [`Timetable`] onto the fixed grid the timetable format
//! expects: a block of header rows, one row pair per station (times, then
//! comments), and trailing rows, with one column per trip after the label
//! columns. Pure with respect to its inputs; the only failure mode is a
//! trip that has no stops and therefore no column content.

use std::collections::HashMap;

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;

use crate::domain::{DomainError, Station, Stop, Timetable, Trip};
use crate::order::resolve_station_order;

/// One output row: an ordered sequence of cell strings. Rows may have
/// differing cell counts; a blank separator row has none.
pub type Row = Vec<String>;

/// Render a timetable, resolving the station order first.
pub fn render(timetable: &Timetable) -> Result<Vec<Row>, DomainError> {
    let order = resolve_station_order(timetable.trips());
    render_with_order(timetable, &order)
}

/// Render a timetable against an already-resolved station order.
///
/// Row sequence: trip names, the timetable name, `#path`, `#consist`,
/// `#start`, `#note`, the speed row, `#restartdelay`, a blank separator,
/// a station/comment row pair per station in order, a blank separator,
/// and `#dispose`.
///
/// Fails with [`DomainError::EmptyTrip`] before producing any row if a
/// trip has no stops; a trip merely lacking a stop at some station renders
/// an empty cell there instead.
pub fn render_with_order(
    timetable: &Timetable,
    station_order: &[Station],
) -> Result<Vec<Row>, DomainError> {
    let tz = timetable.tzinfo();
    let trips = timetable.trips();

    // Validate up front so the caller never sees partial output.
    let start_times: Vec<DateTime<Utc>> = trips
        .iter()
        .map(Trip::start_time)
        .collect::<Result<_, _>>()?;

    let mut rows: Vec<Row> = Vec::with_capacity(11 + 2 * station_order.len());

    rows.push(labelled(
        ["", "", "#comment"],
        trips.iter().map(|t| t.name().to_string()),
    ));
    // The timetable name row carries no trip columns.
    rows.push(vec![
        "#comment".to_string(),
        String::new(),
        timetable.name().to_string(),
    ]);
    rows.push(labelled(
        ["#path", "", ""],
        trips.iter().map(|t| t.path().to_string()),
    ));
    rows.push(labelled(["#consist", "", ""], trips.iter().map(consist_cell)));
    rows.push(labelled(
        ["#start", "", ""],
        trips
            .iter()
            .zip(&start_times)
            .map(|(trip, &start)| start_cell(trip, start, tz)),
    ));
    rows.push(labelled(
        ["#note", "", ""],
        trips.iter().map(|t| t.note_commands().to_string()),
    ));
    rows.push(labelled(
        [timetable.speed_unit().row_header(), "", ""],
        trips.iter().map(|t| t.speed_commands().to_string()),
    ));
    rows.push(labelled(
        ["#restartdelay", "", ""],
        trips.iter().map(|t| t.delay_commands().to_string()),
    ));

    // Per-trip stop lookup; a repeat visit keeps the later stop.
    let stops_index: Vec<HashMap<&Station, &Stop>> = trips
        .iter()
        .map(|trip| {
            let mut by_station = HashMap::new();
            for stop in trip.stops() {
                by_station.insert(stop.station(), stop);
            }
            by_station
        })
        .collect();

    rows.push(Vec::new());
    for station in station_order {
        let table_command = timetable.station_commands().lookup(station).to_string();
        let mut station_row = vec![station.to_string(), table_command, String::new()];
        station_row.extend(trips.iter().zip(&stops_index).map(|(trip, index)| {
            index
                .get(station)
                .map(|stop| stop_cell(trip, station, stop, tz))
                .unwrap_or_default()
        }));
        rows.push(station_row);

        let mut comment_row = vec!["#comment".to_string(), String::new(), String::new()];
        comment_row.extend(stops_index.iter().map(|index| {
            index
                .get(station)
                .map(|stop| stop.comment().to_string())
                .unwrap_or_default()
        }));
        rows.push(comment_row);
    }
    rows.push(Vec::new());

    rows.push(labelled(
        ["#dispose", "", ""],
        trips.iter().map(|t| t.dispose_commands().to_string()),
    ));

    Ok(rows)
}

/// Prefix a row of trip cells with its label columns.
fn labelled(labels: [&str; 3], cells: impl Iterator<Item = String>) -> Row {
    let mut row: Row = labels.iter().map(|label| label.to_string()).collect();
    row.extend(cells);
    row
}

/// Format an instant as local wall-clock `HH:MM`.
fn hhmm(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format("%H:%M").to_string()
}

fn consist_cell(trip: &Trip) -> String {
    trip.consist()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("+")
}

fn start_cell(trip: &Trip, start: DateTime<Utc>, tz: Tz) -> String {
    let time = hhmm(start, tz);
    if trip.start_commands().is_empty() {
        time
    } else {
        format!("{time} {}", trip.start_commands())
    }
}

/// A stop's time span: a single `HH:MM` when arrival and departure land on
/// the same local minute, `HH:MM-HH:MM` otherwise.
fn time_cell(stop: &Stop, tz: Tz) -> String {
    let arrival = stop.arrival().with_timezone(&tz);
    let departure = stop.departure().with_timezone(&tz);
    if arrival.hour() == departure.hour() && arrival.minute() == departure.minute() {
        arrival.format("%H:%M").to_string()
    } else {
        format!("{}-{}", arrival.format("%H:%M"), departure.format("%H:%M"))
    }
}

fn stop_cell(trip: &Trip, station: &Station, stop: &Stop, tz: Tz) -> String {
    let time = time_cell(stop, tz);
    let command = trip.station_commands().lookup(station);
    if command.is_empty() {
        time
    } else {
        format!("{time} {command}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CommandOverrides, ConsistComponent, SpeedUnit, TripFields};
    use chrono::{NaiveDate, TimeZone};

    fn instant(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, h, m, 0).unwrap()
    }

    fn stop(station: &str, arr: (u32, u32), dep: (u32, u32)) -> Stop {
        Stop::new(
            Station::new(station),
            "",
            instant(arr.0, arr.1),
            instant(dep.0, dep.1),
        )
    }

    fn timetable(trips: Vec<Trip>) -> Timetable {
        Timetable::new(
            "Test timetable",
            "Test route",
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            chrono_tz::UTC,
            trips,
            CommandOverrides::new(),
            SpeedUnit::Kph,
        )
    }

    fn simple_trip(name: &str) -> Trip {
        Trip::new(TripFields {
            name: name.to_string(),
            stops: vec![stop("X", (8, 0), (8, 0)), stop("Y", (8, 30), (8, 33))],
            path: format!("{name}-path"),
            consist: vec![ConsistComponent::new("AC44W", false)],
            ..TripFields::default()
        })
    }

    #[test]
    fn header_rows_in_order() {
        let rows = render(&timetable(vec![simple_trip("1A01")])).unwrap();
        assert_eq!(rows[0], vec!["", "", "#comment", "1A01"]);
        assert_eq!(rows[1], vec!["#comment", "", "Test timetable"]);
        assert_eq!(rows[2], vec!["#path", "", "", "1A01-path"]);
        assert_eq!(rows[3], vec!["#consist", "", "", "AC44W"]);
        assert_eq!(rows[4], vec!["#start", "", "", "08:00"]);
        assert_eq!(rows[5], vec!["#note", "", "", ""]);
        assert_eq!(rows[6], vec!["#speedkph", "", "", ""]);
        assert_eq!(rows[7], vec!["#restartdelay", "", "", ""]);
        assert_eq!(rows[8], Vec::<String>::new());
    }

    #[test]
    fn timetable_name_row_has_no_trip_columns() {
        let rows = render(&timetable(vec![simple_trip("1A01"), simple_trip("1A02")])).unwrap();
        assert_eq!(rows[1].len(), 3);
    }

    #[test]
    fn speed_header_tracks_unit() {
        for (unit, header) in [
            (SpeedUnit::MetersPerSecond, "#speed"),
            (SpeedUnit::Kph, "#speedkph"),
            (SpeedUnit::Mph, "#speedmph"),
        ] {
            let tt = Timetable::new(
                "Test timetable",
                "Test route",
                NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
                chrono_tz::UTC,
                vec![simple_trip("1A01")],
                CommandOverrides::new(),
                unit,
            );
            let rows = render(&tt).unwrap();
            assert_eq!(rows[6][0], header);
        }
    }

    #[test]
    fn station_rows_follow_resolved_order() {
        let rows = render(&timetable(vec![simple_trip("1A01")])).unwrap();
        // 8 headers, blank, then a pair per station.
        assert_eq!(rows[9][0], "X");
        assert_eq!(rows[10][0], "#comment");
        assert_eq!(rows[11][0], "Y");
        assert_eq!(rows[12][0], "#comment");
        assert_eq!(rows[13], Vec::<String>::new());
        assert_eq!(rows[14][0], "#dispose");
        assert_eq!(rows.len(), 15);
    }

    #[test]
    fn same_minute_renders_single_time() {
        let rows = render(&timetable(vec![simple_trip("1A01")])).unwrap();
        assert_eq!(rows[9][3], "08:00");
    }

    #[test]
    fn different_minutes_render_a_range() {
        let rows = render(&timetable(vec![simple_trip("1A01")])).unwrap();
        assert_eq!(rows[11][3], "08:30-08:33");
    }

    #[test]
    fn seconds_are_ignored_when_minutes_match() {
        let trip = Trip::new(TripFields {
            name: "1A01".to_string(),
            stops: vec![Stop::new(
                Station::new("X"),
                "",
                Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 10).unwrap(),
                Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 50).unwrap(),
            )],
            ..TripFields::default()
        });
        let rows = render(&timetable(vec![trip])).unwrap();
        assert_eq!(rows[9][3], "08:00");
    }

    #[test]
    fn missing_stop_renders_empty_cell() {
        let a = simple_trip("1A01");
        let b = Trip::new(TripFields {
            name: "1A02".to_string(),
            stops: vec![stop("Y", (9, 0), (9, 0))],
            ..TripFields::default()
        });
        let rows = render(&timetable(vec![a, b])).unwrap();
        // Station X: first trip stops there, second does not.
        assert_eq!(rows[9][0], "X");
        assert_eq!(rows[9][3], "08:00");
        assert_eq!(rows[9][4], "");
    }

    #[test]
    fn trip_station_command_appended_to_time() {
        let mut commands = CommandOverrides::new();
        commands.insert(Station::new("X"), "$hold");
        commands.set_default("$no_waiting");
        let trip = Trip::new(TripFields {
            name: "1A01".to_string(),
            stops: vec![stop("X", (8, 0), (8, 0)), stop("Y", (8, 30), (8, 33))],
            station_commands: commands,
            ..TripFields::default()
        });
        let rows = render(&timetable(vec![trip])).unwrap();
        assert_eq!(rows[9][3], "08:00 $hold");
        assert_eq!(rows[11][3], "08:30-08:33 $no_waiting");
    }

    #[test]
    fn table_station_command_in_second_column() {
        let mut commands = CommandOverrides::new();
        commands.insert(Station::new("Y"), "$terminal");
        let tt = Timetable::new(
            "Test timetable",
            "Test route",
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            chrono_tz::UTC,
            vec![simple_trip("1A01")],
            commands,
            SpeedUnit::Kph,
        );
        let rows = render(&tt).unwrap();
        assert_eq!(rows[9][1], "");
        assert_eq!(rows[11][1], "$terminal");
    }

    #[test]
    fn stop_comments_fill_comment_row() {
        let trip = Trip::new(TripFields {
            name: "1A01".to_string(),
            stops: vec![
                Stop::new(Station::new("X"), "crew change", instant(8, 0), instant(8, 0)),
                stop("Y", (8, 30), (8, 33)),
            ],
            ..TripFields::default()
        });
        let rows = render(&timetable(vec![trip])).unwrap();
        assert_eq!(rows[10], vec!["#comment", "", "", "crew change"]);
        assert_eq!(rows[12], vec!["#comment", "", "", ""]);
    }

    #[test]
    fn start_commands_follow_the_time() {
        let trip = Trip::new(TripFields {
            name: "1A01".to_string(),
            stops: vec![stop("X", (8, 0), (8, 0))],
            start_offset: 60,
            start_commands: "$create=-120".to_string(),
            ..TripFields::default()
        });
        let rows = render(&timetable(vec![trip])).unwrap();
        assert_eq!(rows[4][3], "08:01 $create=-120");
    }

    #[test]
    fn coupled_consist_joined_with_plus() {
        let trip = Trip::new(TripFields {
            name: "1A01".to_string(),
            stops: vec![stop("X", (8, 0), (8, 0))],
            consist: vec![
                ConsistComponent::new("AC44W", false),
                ConsistComponent::new("AC44W", true),
            ],
            ..TripFields::default()
        });
        let rows = render(&timetable(vec![trip])).unwrap();
        assert_eq!(rows[3][3], "AC44W+AC44W $reverse");
    }

    #[test]
    fn times_convert_to_timetable_timezone() {
        let trip = Trip::new(TripFields {
            name: "1A01".to_string(),
            stops: vec![Stop::new(
                Station::new("X"),
                "",
                Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap(),
            )],
            ..TripFields::default()
        });
        let tt = Timetable::new(
            "Test timetable",
            "Test route",
            NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            chrono_tz::America::New_York,
            vec![trip],
            CommandOverrides::new(),
            SpeedUnit::Mph,
        );
        let rows = render(&tt).unwrap();
        // 12:00 UTC is 08:00 EDT.
        assert_eq!(rows[4][3], "08:00");
        assert_eq!(rows[9][3], "08:00");
    }

    #[test]
    fn empty_trip_fails_without_partial_output() {
        let empty = Trip::new(TripFields {
            name: "1Z99".to_string(),
            ..TripFields::default()
        });
        let err = render(&timetable(vec![simple_trip("1A01"), empty])).unwrap_err();
        assert_eq!(
            err,
            DomainError::EmptyTrip {
                trip: "1Z99".to_string()
            }
        );
    }

    #[test]
    fn column_count_matches_trip_count() {
        let rows = render(&timetable(vec![simple_trip("1A01"), simple_trip("1A02")])).unwrap();
        for row in [&rows[0], &rows[2], &rows[9], &rows[10], &rows[14]] {
            assert_eq!(row.len(), 3 + 2);
        }
    }
}
