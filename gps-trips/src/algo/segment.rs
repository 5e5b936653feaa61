use chrono::Duration;
use uom::si::f64::Length;
use uom::si::length::kilometer;

use crate::algo::{haversine_distance, PointInTime};
use crate::model::{LocationPoint, Trip};

/// limits between two consecutive points of the same trip.
///
/// Exceeding either one starts a new trip.
#[derive(Debug, Clone, Copy)]
pub struct GapThreshold {
    pub max_time_gap: Duration,
    pub max_distance: Length,
}

impl Default for GapThreshold {
    fn default() -> Self {
        Self {
            max_time_gap: Duration::minutes(25),
            max_distance: Length::new::<kilometer>(2.0),
        }
    }
}

impl GapThreshold {
    /// true when the step from `prev` to `next` has to split a trip
    pub fn is_exceeded<PIT>(&self, prev: &PIT, next: &PIT) -> bool
    where
        PIT: PointInTime,
    {
        let time_gap = next.timestamp() - prev.timestamp();
        let distance = haversine_distance(&prev.point(), &next.point());
        time_gap > self.max_time_gap || distance > self.max_distance
    }
}

/// split chronologically sorted points into trips.
///
/// The point causing a split opens the next trip. Trip ids count up from 1
/// in creation order.
pub fn segment_trips(points: Vec<LocationPoint>, threshold: &GapThreshold) -> Vec<Trip> {
    let mut trips = Vec::new();
    let mut current: Vec<LocationPoint> = Vec::new();

    for point in points {
        if let Some(last) = current.last() {
            if threshold.is_exceeded(last, &point) {
                let id = trips.len() + 1;
                trips.push(Trip::new(id, std::mem::take(&mut current)));
            }
        }
        current.push(point);
    }

    if !current.is_empty() {
        let id = trips.len() + 1;
        trips.push(Trip::new(id, current));
    }
    trips
}
