use geo_types::Point;
use uom::si::f64::Length;
use uom::si::length::kilometer;

/// spherical earth, as used for the trip metrics
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// great-circle distance between two points using the haversine formula.
///
/// The points are expected in degrees with x as longitude and y as latitude.
pub fn haversine_distance(a: &Point<f64>, b: &Point<f64>) -> Length {
    let lat1 = a.y().to_radians();
    let lat2 = b.y().to_radians();
    let delta_lat = (b.y() - a.y()).to_radians();
    let delta_lon = (b.x() - a.x()).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    Length::new::<kilometer>(EARTH_RADIUS_KM * c)
}
