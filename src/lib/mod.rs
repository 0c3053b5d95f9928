use self::geo::Length;
use self::geojson::{Feature, FeatureCollection};
use self::placemark::extract_features;
use roxmltree::Document;
use std::collections::BTreeMap;
use std::error::Error;

pub mod coordinates;
pub mod geo;
pub mod geojson;
pub mod output;
pub mod placemark;

/// Summary key for the raw source-element tally.
const PLACEMARK_TALLY: &str = "Placemark";

/// Convert a KML document into a GeoJSON feature collection.
///
/// Every `Placemark` element is visited in document order; line-shaped
/// features get a geodesic `length` property in meters; the collection
/// carries a summary mapping each produced geometry kind (plus the raw
/// `Placemark` tally) to its count. Individual malformed coordinates,
/// geometries without usable coordinates, and placemarks without a
/// recognized geometry are skipped silently. The only failure is a
/// document that is not well-formed XML, in which case no partial
/// collection is returned.
///
/// # Example
///
/// ```
/// use kml2geojson::convert;
///
/// let kml = "<kml><Placemark>\
///              <name>A</name>\
///              <Point><coordinates>10,20</coordinates></Point>\
///            </Placemark></kml>";
/// let collection = convert(kml).unwrap();
/// assert_eq!(collection.features.len(), 1);
/// assert_eq!(collection.summary["Placemark"], 1);
/// assert_eq!(collection.summary["Point"], 1);
/// ```
pub fn convert(kml: &str) -> Result<FeatureCollection, Box<dyn Error>> {
    let doc = Document::parse(kml)?;
    let placemarks: Vec<_> = doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "Placemark")
        .collect();
    let placemark_count = placemarks.len();

    let mut features: Vec<Feature> = vec![];
    for placemark in placemarks {
        for mut feature in extract_features(placemark) {
            if feature.geometry.is_line() {
                feature.properties.length = Some(feature.geometry.length());
            }
            features.push(feature);
        }
    }

    let summary = summarize(&features, placemark_count);
    Ok(FeatureCollection::new(features, summary))
}

fn summarize(features: &[Feature], placemark_count: usize) -> BTreeMap<String, usize> {
    let mut summary = BTreeMap::new();
    summary.insert(PLACEMARK_TALLY.to_string(), placemark_count);
    for feature in features {
        *summary.entry(feature.geometry.kind().to_string()).or_insert(0) += 1;
    }
    summary
}
