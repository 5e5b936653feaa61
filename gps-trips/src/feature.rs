use crate::model::{Trip, TripSummary};
use geo_types::{Coord, LineString};
use geojson::{Feature, FeatureCollection, GeoJson, Value};
use serde_json::{to_value, Value as JsonValue};
use std::io::Write;

/// one LineString feature per trip, in trip order.
///
/// `summaries` has to line up with `trips`.
pub fn build_feature_collection(
    trips: &[Trip],
    summaries: &[TripSummary],
) -> eyre::Result<FeatureCollection> {
    if trips.len() != summaries.len() {
        eyre::bail!(
            "got {} summaries for {} trips",
            summaries.len(),
            trips.len()
        );
    }

    let mut features = Vec::with_capacity(trips.len());
    for (trip, summary) in trips.iter().zip(summaries) {
        let linestring: LineString<f64> = trip.points.iter().map(Coord::from).collect();

        let props = match to_value(summary)? {
            JsonValue::Object(props) => props,
            other => eyre::bail!("trip properties are not an object: {}", other),
        };

        features.push(Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::new(Value::from(&linestring))),
            id: None,
            properties: Some(props),
            foreign_members: None,
        })
    }

    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

/// pretty printed GeoJSON
pub fn write_geojson<W: Write>(collection: FeatureCollection, mut writer: W) -> eyre::Result<()> {
    let gj = GeoJson::FeatureCollection(collection);
    serde_json::to_writer_pretty(&mut writer, &gj)?;
    writer.flush()?;
    Ok(())
}
