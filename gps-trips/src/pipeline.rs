use crate::algo::{segment_trips, GapThreshold, SortChronologically};
use crate::color::color_for;
use crate::model::{LocationPoint, Trip, TripSummary};
use crate::record::{validate, RawRow, Validation};
use itertools::Itertools;
use log::debug;
use std::io::Write;

/// outcome of validating all input rows
#[derive(Debug, Default)]
pub struct Validated {
    /// in input order
    pub points: Vec<LocationPoint>,
    /// original row texts, in the order they were found
    pub rejects: Vec<String>,
}

/// everything needed to write the outputs of one run
#[derive(Debug)]
pub struct Processed {
    pub valid_count: usize,
    pub rejects: Vec<String>,
    pub trips: Vec<Trip>,
    pub summaries: Vec<TripSummary>,
}

pub fn validate_rows<I>(rows: I) -> Validated
where
    I: IntoIterator<Item = RawRow>,
{
    let mut validated = Validated::default();
    for raw in rows {
        match validate(&raw) {
            Validation::Valid(point) => validated.points.push(point),
            Validation::Rejected { row, reason } => {
                debug!("rejected row - {}: {}", reason, row);
                validated.rejects.push(row);
            }
        }
    }
    validated
}

/// summaries in trip order, each trip colored by its position among all trips
pub fn summarize_trips(trips: &[Trip]) -> Vec<TripSummary> {
    let total = trips.len();
    trips
        .iter()
        .enumerate()
        .map(|(i, trip)| trip.summary(color_for(i + 1, total)))
        .collect()
}

/// validate, order and segment the rows, then summarize the trips
pub fn process<I>(rows: I, threshold: &GapThreshold) -> Processed
where
    I: IntoIterator<Item = RawRow>,
{
    let Validated {
        mut points,
        rejects,
    } = validate_rows(rows);
    let valid_count = points.len();

    points.sort_chronologically();
    let trips = segment_trips(points, threshold);
    let summaries = summarize_trips(&trips);

    for (trip, summary) in trips.iter().zip(&summaries) {
        debug!(
            "{}: {} points, {} km, devices {}",
            summary.trip_id,
            summary.points,
            summary.total_distance_km,
            trip.points.iter().map(|p| p.device_id.as_str()).unique().join(", ")
        );
    }

    Processed {
        valid_count,
        rejects,
        trips,
        summaries,
    }
}

/// one rejected row per line, no trailing newline
pub fn write_rejects<W: Write>(rejects: &[String], mut writer: W) -> eyre::Result<()> {
    writer.write_all(rejects.join("\n").as_bytes())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{process, validate_rows, write_rejects};
    use crate::algo::GapThreshold;
    use crate::feature::{build_feature_collection, write_geojson};
    use crate::input::read_rows;
    use crate::record::RawRow;
    use serde_json::Value;
    use std::fs::File;

    fn rows(lines: &[&str]) -> Vec<RawRow> {
        lines.iter().map(|l| RawRow::from(*l)).collect()
    }

    #[test]
    fn rejects_in_discovery_order() {
        let validated = validate_rows(rows(&[
            "a,1,1,2024-01-01T00:00:00",
            "b,100,1,2024-01-01T00:00:00",
            "c,1,1,never",
        ]));
        assert_eq!(validated.points.len(), 1);
        let mut buf = Vec::new();
        write_rejects(&validated.rejects, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "b,100,1,2024-01-01T00:00:00\nc,1,1,never"
        );
    }

    #[test]
    fn no_rejects_write_nothing() {
        let mut buf = Vec::new();
        write_rejects(&[], &mut buf).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn empty_input() {
        let processed = process(Vec::new(), &GapThreshold::default());
        assert_eq!(processed.valid_count, 0);
        assert!(processed.trips.is_empty());
        assert!(processed.summaries.is_empty());
    }

    #[test]
    fn equal_timestamps_keep_input_order_within_trip() {
        let processed = process(
            rows(&[
                "d,0,0.002,2024-01-01T00:05:00",
                "d,0,0.000,2024-01-01T00:00:00",
                "d,0,0.003,2024-01-01T00:05:00",
                "d,0,0.001,2024-01-01T00:05:00",
            ]),
            &GapThreshold::default(),
        );
        assert_eq!(processed.trips.len(), 1);
        let lons: Vec<f64> = processed.trips[0].points.iter().map(|p| p.lon).collect();
        assert_eq!(lons, vec![0.0, 0.002, 0.003, 0.001]);
    }

    #[test]
    fn trips_are_colored_by_position() {
        let processed = process(
            rows(&[
                "d,0,0,2024-01-01T00:00:00",
                "d,0,0.01,2024-01-01T00:10:00",
                "d,10,10,2024-01-01T00:40:00",
            ]),
            &GapThreshold::default(),
        );
        assert_eq!(processed.trips.len(), 2);
        let strokes: Vec<&str> = processed
            .summaries
            .iter()
            .map(|s| s.stroke.as_str())
            .collect();
        // hue 180 then hue 0
        assert_eq!(strokes, vec!["#26d9d9", "#d92626"]);
    }

    #[test]
    fn undecodable_row_is_rejected_and_run_continues() {
        let data: &[u8] = b"device_id,lat,lon,timestamp\n\
                            dev1,45,10,2024-01-01T00:00:00\n\
                            dev1,4\xff5,10,2024-01-01T00:05:00\n\
                            dev1,45,10,2024-01-01T00:10:00\n";
        let processed = process(read_rows(data).unwrap(), &GapThreshold::default());
        assert_eq!(processed.valid_count, 2);
        assert_eq!(
            processed.rejects,
            vec!["dev1,4\u{fffd}5,10,2024-01-01T00:05:00"]
        );
        assert_eq!(processed.trips.len(), 1);
    }

    #[test]
    fn sample_file_end_to_end() {
        let raw = read_rows(
            File::open(format!("{}/data/points.csv", env!("CARGO_MANIFEST_DIR"))).unwrap(),
        )
        .unwrap();
        let processed = process(raw, &GapThreshold::default());

        assert_eq!(processed.valid_count, 10);
        assert_eq!(
            processed.rejects,
            vec![
                "car-7,999,13.4100,2024-05-01T08:06:00Z",
                "car-7,52.5250,13.4140,yesterday",
                "car-7,48.8575,abc,2024-05-01T09:23:00Z",
                "car-7,52.52",
            ]
        );
        let sizes: Vec<usize> = processed.trips.iter().map(|t| t.points.len()).collect();
        assert_eq!(sizes, vec![4, 3, 3]);

        // the out of order 08:02 row was sorted in
        assert_eq!(processed.trips[0].points[1].lon, 13.4070);

        let fc = build_feature_collection(&processed.trips, &processed.summaries).unwrap();
        let mut buf = Vec::new();
        write_geojson(fc, &mut buf).unwrap();
        let gj: Value = serde_json::from_slice(&buf).unwrap();
        let features = gj["features"].as_array().unwrap();
        assert_eq!(features.len(), 3);
        for (i, feature) in features.iter().enumerate() {
            assert_eq!(feature["properties"]["trip_id"], format!("trip_{}", i + 1));
            assert_eq!(
                feature["properties"]["points"],
                processed.trips[i].points.len()
            );
        }
        assert_eq!(features[1]["properties"]["duration_min"], 10.0);
    }
}
