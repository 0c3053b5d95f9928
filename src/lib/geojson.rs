use super::coordinates::Coordinate;
use serde::Serialize;
use std::collections::BTreeMap;

/// GeoJSON geometry kinds produced by the converter.
///
/// Polygons model the outer ring only; holes are out of scope.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        coordinates: Coordinate,
    },
    LineString {
        coordinates: Vec<Coordinate>,
    },
    Polygon {
        coordinates: Vec<Vec<Coordinate>>,
    },
    MultiPoint {
        coordinates: Vec<Coordinate>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Coordinate>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Coordinate>>>,
    },
}

impl Geometry {
    /// The GeoJSON type name, also used as the summary key.
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Point { .. } => "Point",
            Geometry::LineString { .. } => "LineString",
            Geometry::Polygon { .. } => "Polygon",
            Geometry::MultiPoint { .. } => "MultiPoint",
            Geometry::MultiLineString { .. } => "MultiLineString",
            Geometry::MultiPolygon { .. } => "MultiPolygon",
        }
    }

    pub fn is_line(&self) -> bool {
        matches!(
            self,
            Geometry::LineString { .. } | Geometry::MultiLineString { .. }
        )
    }
}

/// Display properties attached to every feature.
///
/// `length` is set only for line-shaped geometries and is omitted from the
/// serialized output otherwise.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Properties {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
}

impl Properties {
    pub fn new(name: String, description: String) -> Self {
        Properties {
            name,
            description,
            length: None,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Feature {
    #[serde(rename = "type")]
    feature_type: &'static str,
    pub geometry: Geometry,
    pub properties: Properties,
}

impl Feature {
    pub fn new(geometry: Geometry, properties: Properties) -> Self {
        Feature {
            feature_type: "Feature",
            geometry,
            properties,
        }
    }
}

/// The complete conversion result: all features in source-document order
/// plus a per-kind tally.
#[derive(Serialize, Debug, PartialEq)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    collection_type: &'static str,
    pub features: Vec<Feature>,
    pub summary: BTreeMap<String, usize>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>, summary: BTreeMap<String, usize>) -> Self {
        FeatureCollection {
            collection_type: "FeatureCollection",
            features,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::to_string;

    #[test]
    fn geometry_is_tagged_by_type() {
        let geometry = Geometry::Point {
            coordinates: Coordinate::new(10., 20.),
        };
        let json = to_string(&geometry).unwrap();
        assert_eq!(json, r#"{"type":"Point","coordinates":[10.0,20.0]}"#);
    }

    #[test]
    fn length_is_skipped_when_absent() {
        let feature = Feature::new(
            Geometry::Point {
                coordinates: Coordinate::new(1., 2.),
            },
            Properties::new("A".into(), String::new()),
        );
        let json = to_string(&feature).unwrap();
        assert!(!json.contains("length"));
        assert!(json.contains(r#""type":"Feature""#));
    }

    #[test]
    fn length_is_serialized_when_present() {
        let mut properties = Properties::new(String::new(), String::new());
        properties.length = Some(12.5);
        let feature = Feature::new(
            Geometry::LineString {
                coordinates: vec![Coordinate::new(0., 0.), Coordinate::new(0., 1.)],
            },
            properties,
        );
        let json = to_string(&feature).unwrap();
        assert!(json.contains(r#""length":12.5"#));
    }

    #[test]
    fn kind_names() {
        let line = Geometry::LineString {
            coordinates: vec![],
        };
        assert_eq!(line.kind(), "LineString");
        assert!(line.is_line());
        let polygon = Geometry::Polygon {
            coordinates: vec![],
        };
        assert_eq!(polygon.kind(), "Polygon");
        assert!(!polygon.is_line());
    }
}
