use ordered_float::OrderedFloat;
use uom::si::f64::{Length, Time, Velocity};
use uom::si::length::kilometer;
use uom::si::time::second;
use uom::si::velocity::kilometer_per_hour;

use crate::algo::{haversine_distance, seconds_between, PointInTime};

/// speed between two chronologically ordered points.
///
/// `None` when no time passed between them.
pub fn speed<PIT>(tp1: &PIT, tp2: &PIT) -> Option<Velocity>
where
    PIT: PointInTime,
{
    let secs = seconds_between(tp1, tp2);
    if secs > 0.0 {
        Some(haversine_distance(&tp1.point(), &tp2.point()) / Time::new::<second>(secs))
    } else {
        None
    }
}

pub trait Speed {
    /// speeds of all consecutive pairs with a positive duration
    fn speeds(&self) -> Vec<Velocity>;

    /// sum of the distances between consecutive points
    fn distance_covered(&self) -> Length;

    fn speed_max(&self) -> Option<Velocity> {
        self.speeds()
            .iter()
            .filter_map(|v| {
                let value = v.get::<kilometer_per_hour>();
                if value.is_nan() {
                    None
                } else {
                    Some(OrderedFloat::from(value))
                }
            })
            .max()
            .map(|oflt| Velocity::new::<kilometer_per_hour>(oflt.0))
    }
}

impl<PIT> Speed for [PIT]
where
    PIT: PointInTime,
{
    fn speeds(&self) -> Vec<Velocity> {
        self.windows(2)
            .filter_map(|window| speed(&window[0], &window[1]))
            .collect()
    }

    fn distance_covered(&self) -> Length {
        Length::new::<kilometer>(
            self.windows(2)
                .map(|window| {
                    haversine_distance(&window[0].point(), &window[1].point()).get::<kilometer>()
                })
                .sum(),
        )
    }
}
