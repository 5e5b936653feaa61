use chrono::{DateTime, Utc};
use geo_types::Point;

pub mod distance;
pub mod segment;
pub mod speed;
pub mod time;

pub use distance::haversine_distance;
pub use segment::{segment_trips, GapThreshold};
pub use speed::Speed;
pub use time::SortChronologically;

/// x is the longitude, y the latitude
pub trait PointInTime {
    fn timestamp(&self) -> DateTime<Utc>;
    fn point(&self) -> Point<f64>;
}

/// elapsed time from `from` to `to` in fractional seconds, millisecond precision
pub(crate) fn seconds_between<PIT>(from: &PIT, to: &PIT) -> f64
where
    PIT: PointInTime,
{
    (to.timestamp() - from.timestamp()).num_milliseconds() as f64 / 1000.0
}
