use log::debug;
use serde::ser::{Serialize, Serializer};

/// A single position in (longitude, latitude, optional altitude) order.
///
/// Altitude is carried for display purposes only; it takes no part in
/// length measurement or ring-closure checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
    pub alt: Option<f64>,
}

impl Coordinate {
    pub fn new(lon: f64, lat: f64) -> Self {
        Coordinate {
            lon,
            lat,
            alt: None,
        }
    }

    /// Compares longitude and latitude only, ignoring altitude.
    pub fn same_position(&self, other: &Coordinate) -> bool {
        self.lon == other.lon && self.lat == other.lat
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from(lon_lat: (f64, f64)) -> Self {
        Coordinate::new(lon_lat.0, lon_lat.1)
    }
}

impl Serialize for Coordinate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.alt {
            Some(alt) => (self.lon, self.lat, alt).serialize(serializer),
            None => (self.lon, self.lat).serialize(serializer),
        }
    }
}

/// Parse the text of a `<coordinates>` element into positions.
///
/// Tuples are separated by runs of whitespace, fields within a tuple by
/// commas. A tuple whose longitude or latitude is not a finite number is
/// dropped; the remaining tuples are kept. No range validation happens
/// here.
pub fn parse_coordinates(text: &str) -> Vec<Coordinate> {
    text.split_whitespace().filter_map(parse_tuple).collect()
}

fn parse_tuple(token: &str) -> Option<Coordinate> {
    let parts: Vec<&str> = token.splitn(3, ',').collect();
    if parts.len() < 2 {
        debug!("dropping coordinate token {:?}: fewer than two fields", token);
        return None;
    }
    let lon: Option<f64> = parts[0].parse().ok();
    let lat: Option<f64> = parts[1].parse().ok();
    match (lon, lat) {
        (Some(lon), Some(lat)) if lon.is_finite() && lat.is_finite() => {
            let alt = parts.get(2).and_then(|part| part.parse().ok());
            Some(Coordinate { lon, lat, alt })
        }
        _ => {
            debug!("dropping coordinate token {:?}: non-numeric field", token);
            None
        }
    }
}
