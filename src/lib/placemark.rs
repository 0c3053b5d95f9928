use super::coordinates::{parse_coordinates, Coordinate};
use super::geojson::{Feature, Geometry, Properties};
use log::debug;
use roxmltree::Node;

fn child<'a, 'i>(node: Node<'a, 'i>, name: &str) -> Option<Node<'a, 'i>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

fn children<'a, 'i: 'a>(
    node: Node<'a, 'i>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'i>> + 'a {
    node.children()
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}

fn child_text(node: Node, name: &str) -> String {
    child(node, name)
        .and_then(|n| n.text())
        .unwrap_or("")
        .to_string()
}

fn coordinates_of(geometry: Node) -> Vec<Coordinate> {
    child(geometry, "coordinates")
        .and_then(|n| n.text())
        .map(parse_coordinates)
        .unwrap_or_default()
}

/// Appends the first coordinate when the ring is open. Longitude and
/// latitude are compared exactly, altitude is ignored.
fn close_ring(ring: &mut Vec<Coordinate>) {
    let first = ring[0];
    let last = ring[ring.len() - 1];
    if !first.same_position(&last) {
        ring.push(first);
    }
}

/// The outer ring of a `<Polygon>`, reached only via its
/// `outerBoundaryIs`/`LinearRing` path. Inner boundaries (holes) are not
/// modeled.
fn outer_ring(polygon: Node) -> Option<Vec<Coordinate>> {
    let boundary = child(polygon, "outerBoundaryIs")?;
    let ring = child(boundary, "LinearRing")?;
    let mut coordinates = coordinates_of(ring);
    if coordinates.is_empty() {
        debug!("skipping polygon with no usable coordinates");
        return None;
    }
    close_ring(&mut coordinates);
    Some(coordinates)
}

/// Turn one `<Placemark>` into zero or more features.
///
/// Dispatch checks direct children in a fixed order and the first
/// recognized kind wins: `Point`, then `LineString`, then `Polygon`, then
/// `MultiGeometry`. Inside a `MultiGeometry` the line, point, and polygon
/// children are each collected independently, producing up to three
/// features in that order. A `MultiGeometry` nested inside another is not
/// descended into. Name and description are read once per placemark and
/// attached to every produced feature.
pub fn extract_features(placemark: Node) -> Vec<Feature> {
    let name = child_text(placemark, "name");
    let description = child_text(placemark, "description");
    let properties = Properties::new(name, description);

    if let Some(point) = child(placemark, "Point") {
        let geometry = coordinates_of(point)
            .into_iter()
            .next()
            .map(|coordinate| Geometry::Point {
                coordinates: coordinate,
            });
        return collect_single(geometry, properties);
    }

    if let Some(line) = child(placemark, "LineString") {
        let coordinates = coordinates_of(line);
        let geometry = if coordinates.is_empty() {
            None
        } else {
            Some(Geometry::LineString { coordinates })
        };
        return collect_single(geometry, properties);
    }

    if let Some(polygon) = child(placemark, "Polygon") {
        let geometry = outer_ring(polygon).map(|ring| Geometry::Polygon {
            coordinates: vec![ring],
        });
        return collect_single(geometry, properties);
    }

    if let Some(multi) = child(placemark, "MultiGeometry") {
        return extract_multi(multi, &properties);
    }

    debug!("placemark without a recognized geometry, skipping");
    vec![]
}

fn collect_single(geometry: Option<Geometry>, properties: Properties) -> Vec<Feature> {
    match geometry {
        Some(geometry) => vec![Feature::new(geometry, properties)],
        None => {
            debug!("skipping geometry with no usable coordinates");
            vec![]
        }
    }
}

fn extract_multi(multi: Node, properties: &Properties) -> Vec<Feature> {
    let mut features = vec![];

    let lines: Vec<Vec<Coordinate>> = children(multi, "LineString")
        .map(coordinates_of)
        .filter(|coordinates| !coordinates.is_empty())
        .collect();
    if !lines.is_empty() {
        let geometry = Geometry::MultiLineString { coordinates: lines };
        features.push(Feature::new(geometry, properties.clone()));
    }

    let points: Vec<Coordinate> = children(multi, "Point")
        .filter_map(|point| coordinates_of(point).into_iter().next())
        .collect();
    if !points.is_empty() {
        let geometry = Geometry::MultiPoint {
            coordinates: points,
        };
        features.push(Feature::new(geometry, properties.clone()));
    }

    let polygons: Vec<Vec<Vec<Coordinate>>> = children(multi, "Polygon")
        .filter_map(outer_ring)
        .map(|ring| vec![ring])
        .collect();
    if !polygons.is_empty() {
        let geometry = Geometry::MultiPolygon {
            coordinates: polygons,
        };
        features.push(Feature::new(geometry, properties.clone()));
    }

    features
}
