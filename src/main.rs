use kml2geojson::convert;
use kml2geojson::output::Output;
use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(
    name = "kml2geojson",
    about = "Convert a KML document into a GeoJSON feature collection"
)]
struct Opt {
    /// KML file to convert
    #[structopt(parse(from_os_str))]
    file: PathBuf,
    /// Emit one JSON object per feature instead of a GeoJSON document
    #[structopt(long)]
    lines: bool,
    /// Print the per-kind summary only
    #[structopt(long, conflicts_with = "lines")]
    summary: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let opt = Opt::from_args();
    let kml = fs::read_to_string(&opt.file)?;
    let collection = convert(&kml)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if opt.summary {
        for (kind, count) in &collection.summary {
            writeln!(handle, "{}: {}", kind, count)?;
        }
    } else if opt.lines {
        collection.write_json_lines(&mut handle)?;
    } else {
        collection.write_geojson(&mut handle)?;
    }
    Ok(())
}
