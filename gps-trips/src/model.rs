use crate::algo::{seconds_between, PointInTime, Speed};
use chrono::{DateTime, Utc};
use geo_types::{Coord, Point};
use serde::Serialize;
use uom::si::length::kilometer;
use uom::si::velocity::kilometer_per_hour;

pub const STROKE_WIDTH: u32 = 3;
pub const STROKE_OPACITY: u32 = 1;

/// a validated location ping.
///
/// Latitude is within [-90, 90], longitude within [-180, 180].
#[derive(PartialEq, Clone, Debug)]
pub struct LocationPoint {
    pub device_id: String,
    pub lat: f64,
    pub lon: f64,
    pub timestamp: DateTime<Utc>,
}

impl LocationPoint {
    pub fn new(device_id: impl Into<String>, lat: f64, lon: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            device_id: device_id.into(),
            lat,
            lon,
            timestamp,
        }
    }
}

impl From<&LocationPoint> for Coord<f64> {
    fn from(lp: &LocationPoint) -> Self {
        lp.point().0
    }
}

impl PointInTime for LocationPoint {
    #[inline]
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[inline]
    fn point(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// 1-based, in order of creation
    pub id: usize,

    /// chronologically sorted, never empty
    pub points: Vec<LocationPoint>,
}

impl Trip {
    pub fn new(id: usize, points: Vec<LocationPoint>) -> Self {
        Self { id, points }
    }

    pub fn label(&self) -> String {
        format!("trip_{}", self.id)
    }

    /// expects the points to be sorted chronologically
    pub fn duration_min(&self) -> f64 {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => seconds_between(first, last) / 60.0,
            _ => 0.0,
        }
    }

    /// expects the points to be sorted chronologically
    pub fn summary(&self, stroke: String) -> TripSummary {
        let total_distance_km = self.points.distance_covered().get::<kilometer>();
        let duration_min = self.duration_min();
        let avg_speed_kmh = if duration_min > 0.0 {
            total_distance_km / (duration_min / 60.0)
        } else {
            0.0
        };
        let max_speed_kmh = self
            .points
            .speed_max()
            .map(|v| v.get::<kilometer_per_hour>())
            .unwrap_or(0.0);

        TripSummary {
            trip_id: self.label(),
            points: self.points.len(),
            total_distance_km: round_to(total_distance_km, 3),
            duration_min: round_to(duration_min, 1),
            avg_speed_kmh: round_to(avg_speed_kmh, 2),
            max_speed_kmh: round_to(max_speed_kmh, 2),
            stroke,
            stroke_width: STROKE_WIDTH,
            stroke_opacity: STROKE_OPACITY,
        }
    }
}

/// per-trip properties of the emitted feature, field order is the output order
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TripSummary {
    pub trip_id: String,
    pub points: usize,
    pub total_distance_km: f64,
    pub duration_min: f64,
    pub avg_speed_kmh: f64,
    pub max_speed_kmh: f64,
    pub stroke: String,
    #[serde(rename = "stroke-width")]
    pub stroke_width: u32,
    #[serde(rename = "stroke-opacity")]
    pub stroke_opacity: u32,
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
