use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use timetable_gen::input::TimetableFile;
use timetable_gen::render::render;
use timetable_gen::writer::write_rows;

/// Render a timetable description into a tab-delimited timetable grid.
#[derive(Parser)]
struct Args {
    /// JSON timetable description to read.
    #[clap(long)]
    input: PathBuf,

    /// File to write the grid to; stdout when omitted.
    #[clap(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let contents = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let file: TimetableFile = serde_json::from_str(&contents)
        .with_context(|| format!("parsing {}", args.input.display()))?;

    let timetable = file.into_timetable().context("validating timetable")?;
    info!(
        name = timetable.name(),
        route = timetable.route(),
        date = %timetable.date(),
        trips = timetable.trips().len(),
        "rendering timetable"
    );

    let rows = render(&timetable)?;

    match &args.output {
        Some(path) => {
            let mut out = fs::File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            write_rows(&mut out, &rows)?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_rows(&mut out, &rows)?;
            out.flush()?;
        }
    }

    Ok(())
}
