use super::geojson::FeatureCollection;
use serde::Serialize;
use serde_json::to_string;
use std::error::Error;
use std::io::Write;

pub trait Output {
    fn write_geojson(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>>;
    fn write_json_lines(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>>;
}

/// Row shape consumed by tabular display: one object per feature.
#[derive(Serialize)]
struct JSONRow {
    kind: &'static str,
    name: String,
    length: String,
}

impl Output for FeatureCollection {
    fn write_geojson(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        let string = to_string(self)?;
        writeln!(writer, "{}", string)?;
        Ok(())
    }

    fn write_json_lines(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        for feature in &self.features {
            let name = if feature.properties.name.is_empty() {
                "Unnamed".to_string()
            } else {
                feature.properties.name.clone()
            };
            let length = match feature.properties.length {
                Some(meters) => format!("{:.2} m", meters),
                None => "N/A".to_string(),
            };
            let row = JSONRow {
                kind: feature.geometry.kind(),
                name,
                length,
            };
            let json = to_string(&row)?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::convert;
    use super::*;
    use std::io::Cursor;

    fn get_string(cursor: Cursor<Vec<u8>>) -> String {
        String::from_utf8(cursor.into_inner()).unwrap()
    }

    #[test]
    fn json_lines_substitute_unnamed_and_na() {
        let collection = convert(
            "<kml>\
               <Placemark><Point><coordinates>1,2</coordinates></Point></Placemark>\
               <Placemark><name>trail</name>\
                 <LineString><coordinates>0,0 0,1</coordinates></LineString>\
               </Placemark>\
             </kml>",
        )
        .unwrap();
        let mut cursor = Cursor::new(Vec::new());
        collection.write_json_lines(&mut cursor).unwrap();
        let string = get_string(cursor);
        let lines: Vec<&str> = string.trim().split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(r#""name":"Unnamed""#));
        assert!(lines[0].contains(r#""length":"N/A""#));
        assert!(lines[1].contains(r#""name":"trail""#));
        assert!(lines[1].contains(" m\""));
    }

    #[test]
    fn geojson_document_contains_summary() {
        let collection = convert(
            "<kml><Placemark><Point><coordinates>1,2</coordinates></Point></Placemark></kml>",
        )
        .unwrap();
        let mut cursor = Cursor::new(Vec::new());
        collection.write_geojson(&mut cursor).unwrap();
        let string = get_string(cursor);
        assert!(string.contains(r#""type":"FeatureCollection""#));
        assert!(string.contains(r#""summary":{"Placemark":1,"Point":1}"#));
    }
}
