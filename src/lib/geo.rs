use super::coordinates::Coordinate;
use super::geojson::Geometry;
use geo::prelude::*;
use geo_types::Point;
use itertools::Itertools;
use log::warn;

/// Geodesic length in meters, using a spherical-earth great-circle model.
pub trait Length {
    fn length(&self) -> f64;
}

fn line_length(coordinates: &[Coordinate]) -> f64 {
    coordinates
        .iter()
        .tuple_windows()
        .map(|(a, b)| {
            let a = Point::new(a.lon, a.lat);
            let b = Point::new(b.lon, b.lat);
            a.haversine_distance(&b)
        })
        .sum()
}

impl Length for Geometry {
    /// Sums great-circle distances between consecutive vertices; grouped
    /// lines sum their member lines. Altitude is ignored. Non-line kinds
    /// and any non-finite accumulation report 0 — measurement never fails
    /// a conversion.
    fn length(&self) -> f64 {
        let meters = match self {
            Geometry::LineString { coordinates } => line_length(coordinates),
            Geometry::MultiLineString { coordinates } => {
                coordinates.iter().map(|line| line_length(line)).sum()
            }
            _ => 0.,
        };
        if meters.is_finite() {
            meters
        } else {
            warn!("length of {} was not finite, reporting 0", self.kind());
            0.
        }
    }
}
