use std::{path::Path, time::Instant};
use syrenka::ztm::{Config, Timetable, Ztm};
use tracing::{error, info};

fn main() {
    tracing_subscriber::fmt().init();

    let args: Vec<_> = std::env::args().collect();
    if args.len() < 2 {
        error!("Missing timetable export (txt or zip)");
        std::process::exit(1);
    }
    let path = Path::new(&args[1]).canonicalize().unwrap();
    let out_dir = args
        .get(2)
        .map(|dir| Path::new(dir).to_path_buf())
        .unwrap_or_else(|| std::env::current_dir().unwrap());

    info!("Parsing {}...", path.display());
    let now = Instant::now();
    let is_zip = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));
    let ztm = if is_zip {
        Ztm::new(Config::default()).from_zip(path)
    } else {
        Ztm::new(Config::default()).from_path(path)
    };
    let timetable = match ztm.parse() {
        Ok(timetable) => timetable,
        Err(err) => {
            error!("Failed to parse export: {err}");
            std::process::exit(1);
        }
    };
    info!("Parsing took {:?}", now.elapsed());

    let simple = timetable.simple_edges();
    info!(
        "{} stops, {} raw edges, {} simplified edges",
        timetable.stops.len(),
        timetable.edges.len(),
        simple.len()
    );

    if let Err(err) = export(&timetable, &out_dir) {
        error!("Failed to write csv output: {err}");
        std::process::exit(1);
    }
    info!("Wrote csv output to {}", out_dir.display());
}

fn export(timetable: &Timetable, out_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut stops: Vec<_> = timetable.stops.values().collect();
    stops.sort_unstable_by(|a, b| a.id.cmp(&b.id));
    let mut writer = csv::Writer::from_path(out_dir.join("stops.csv"))?;
    for stop in stops {
        writer.serialize(stop)?;
    }
    writer.flush()?;

    let mut writer = csv::Writer::from_path(out_dir.join("edges.csv"))?;
    for edge in &timetable.edges {
        writer.serialize(edge)?;
    }
    writer.flush()?;

    let mut writer = csv::Writer::from_path(out_dir.join("simple_edges.csv"))?;
    for edge in timetable.simple_edges() {
        writer.serialize(edge)?;
    }
    writer.flush()?;
    Ok(())
}
