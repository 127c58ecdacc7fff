//! Station order resolution.
//!
//! A timetable lays every trip out against one shared row order, even
//! though individual trips visit stations in different, partially
//! overlapping, and sometimes physically reversed sequences. This module
//! computes that single total order with a greedy left fold: each trip is
//! merged into the accumulated order twice, once forward and once
//! reversed, and the candidate that better preserves the trip's own travel
//! direction wins.
//!
//! The heuristic is deliberately O(trips x stations) and can produce
//! suboptimal orderings on pathological inputs; an optimal minimum-order
//! solver for overlapping sequences is NP-hard. The scoring and the
//! forward tie-break are load-bearing for output stability and must not be
//! altered.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Station, Trip};

/// Compute one total order over every station visited by any trip.
///
/// Deterministic in the trips and their order; every station appearing in
/// any trip's stops occurs exactly once in the result.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use timetable_gen::domain::{Station, Stop, Trip, TripFields};
/// use timetable_gen::order::resolve_station_order;
///
/// let t = Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap();
/// let trip = Trip::new(TripFields {
///     name: "1A01".to_string(),
///     stops: vec![
///         Stop::new(Station::new("X"), "", t, t),
///         Stop::new(Station::new("Y"), "", t, t),
///     ],
///     ..TripFields::default()
/// });
///
/// let order = resolve_station_order(&[trip]);
/// assert_eq!(order, vec![Station::new("X"), Station::new("Y")]);
/// ```
pub fn resolve_station_order(trips: &[Trip]) -> Vec<Station> {
    trips.iter().fold(Vec::new(), merge_trip)
}

/// Merge one trip into the accumulated order, choosing the travel
/// direction that scores better against the trip's own stop sequence.
fn merge_trip(current: Vec<Station>, trip: &Trip) -> Vec<Station> {
    let forward: Vec<Station> = trip.stops().iter().map(|s| s.station().clone()).collect();
    let backward: Vec<Station> = forward.iter().rev().cloned().collect();

    let index: HashMap<&Station, usize> = current
        .iter()
        .enumerate()
        .map(|(i, station)| (station, i))
        .collect();

    let fwd_merged = merge_in(&current, &index, &forward);
    let bwd_merged = merge_in(&current, &index, &backward);

    let fwd_score = direction_score(&fwd_merged, &forward);
    let bwd_score = direction_score(&bwd_merged, &backward);

    debug!(
        trip = trip.name(),
        fwd_score,
        bwd_score,
        forward = fwd_score >= bwd_score,
        "merged trip into station order"
    );

    // Ties favor the forward direction.
    if fwd_score >= bwd_score {
        fwd_merged
    } else {
        bwd_merged
    }
}

/// Weave a trip's station sequence into the existing order.
///
/// Walks the visits left to right with a non-decreasing cursor into
/// `current`. A station already in `current` pulls in everything up to and
/// including its existing position (preserving relative order); an unseen
/// station is inserted at the point the trip first visits it. The cursor
/// never moves backward, so a visit that jumps behind it contributes
/// nothing extra.
fn merge_in(
    current: &[Station],
    index: &HashMap<&Station, usize>,
    visits: &[Station],
) -> Vec<Station> {
    let mut merged = Vec::with_capacity(current.len() + visits.len());
    let mut ptr = 0;

    for station in visits {
        match index.get(station) {
            Some(&at) => {
                let next = ptr.max(at + 1);
                merged.extend_from_slice(&current[ptr..next]);
                ptr = next;
            }
            None => merged.push(station.clone()),
        }
    }
    merged.extend_from_slice(&current[ptr..]);

    merged
}

/// Count adjacent pairs of the travelled sequence that remain in
/// increasing position in the merged order.
///
/// Intentionally unnormalized: a longer trip is not penalized relative to
/// a shorter one, and real inputs depend on that.
fn direction_score(merged: &[Station], travelled: &[Station]) -> usize {
    let index: HashMap<&Station, usize> = merged
        .iter()
        .enumerate()
        .map(|(i, station)| (station, i))
        .collect();

    travelled
        .windows(2)
        .filter(|pair| {
            matches!(
                (index.get(&pair[0]), index.get(&pair[1])),
                (Some(a), Some(b)) if a < b
            )
        })
        .count()
}
