use crate::model::LocationPoint;
use datetime::parse_timestamp;
use thiserror::Error;

mod datetime;

/// an input row as read from the source, no guarantees about its content.
///
/// Expected fields: device id, latitude, longitude, timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub fields: Vec<String>,
}

impl RawRow {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// the row as written to the reject log
    pub fn text(&self) -> String {
        self.fields.join(",")
    }
}

#[cfg(test)]
impl From<&str> for RawRow {
    /// naive split on commas, no quoting
    fn from(line: &str) -> Self {
        RawRow::new(line.split(','))
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RejectReason {
    #[error("expected 4 fields, found {0}")]
    FieldCount(usize),
    #[error("latitude is not a number within [-90, 90]: {0:?}")]
    Latitude(String),
    #[error("longitude is not a number within [-180, 180]: {0:?}")]
    Longitude(String),
    #[error("unparseable timestamp: {0:?}")]
    Timestamp(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    Valid(LocationPoint),
    Rejected {
        /// the original row text
        row: String,
        reason: RejectReason,
    },
}

/// classify a row, never fails
pub fn validate(raw: &RawRow) -> Validation {
    match parse_row(raw) {
        Ok(point) => Validation::Valid(point),
        Err(reason) => Validation::Rejected {
            row: raw.text(),
            reason,
        },
    }
}

fn parse_row(raw: &RawRow) -> Result<LocationPoint, RejectReason> {
    let [device_id, lat, lon, timestamp] = raw.fields.as_slice() else {
        return Err(RejectReason::FieldCount(raw.fields.len()));
    };

    let lat_value = parse_coordinate(lat, 90.0).ok_or_else(|| RejectReason::Latitude(lat.clone()));
    let lon_value =
        parse_coordinate(lon, 180.0).ok_or_else(|| RejectReason::Longitude(lon.clone()));
    let ts_value =
        parse_timestamp(timestamp).ok_or_else(|| RejectReason::Timestamp(timestamp.clone()));

    Ok(LocationPoint::new(
        device_id.as_str(),
        lat_value?,
        lon_value?,
        ts_value?,
    ))
}

/// a finite number within [-limit, limit]
fn parse_coordinate(s: &str, limit: f64) -> Option<f64> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && (-limit..=limit).contains(v))
}
