// File: crates/ternary-demo/src/main.rs
// Summary: Demo loads (upper, right, left) compositions from CSV, projects them and renders a ternary PNG.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use cli::Cli;
use ternary_core::{project_slices, ternary, LineStyle, MarkerStyle};

/// Column names tried, in order, when no apex label names a column.
const UPPER_NAMES: &[&str] = &["upper", "top", "a"];
const RIGHT_NAMES: &[&str] = &["right", "b"];
const LEFT_NAMES: &[&str] = &["left", "c"];

/// Markers sit above the outer triangle.
const MARKER_Z: f32 = 12.0;

/// One (upper, right, left) sample.
type Composition = (f64, f64, f64);

fn main() {
    let cli = Cli::parse();
    cli.init_logging();
    info!("no-fuss ternary plots ready");

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let samples = match &cli.input {
        Some(raw) => {
            let path = resolve_path(raw)?;
            info!(path = %path.display(), "using input file");
            load_compositions(&path, &cli)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            info!("no input file; plotting built-in sample");
            sample_compositions()
        }
    };
    info!(count = samples.len(), "loaded compositions");

    if samples.is_empty() {
        anyhow::bail!("no compositions loaded; check headers/delimiter.");
    }

    let upper: Vec<f64> = samples.iter().map(|s| s.0).collect();
    let right: Vec<f64> = samples.iter().map(|s| s.1).collect();
    let left: Vec<f64> = samples.iter().map(|s| s.2).collect();
    let points = project_slices(&upper, &right, &left)?;
    let degenerate = points.iter().filter(|p| !p.0.is_finite() || !p.1.is_finite()).count();
    if degenerate > 0 {
        warn!(degenerate, "samples with zero component sum are not drawn");
    }

    let opts = cli.figure_options();
    let theme = opts.theme;
    let mut fig = ternary(cli.upper.as_deref(), cli.left.as_deref(), cli.right.as_deref(), opts);
    if cli.connect {
        fig.axes_mut().plot_points(&points, LineStyle::new(theme.line, 1.5));
    }
    fig.axes_mut()
        .scatter(&points, MarkerStyle::new(theme.marker, cli.marker_size).with_z_order(MARKER_Z));

    let out = match &cli.output {
        Some(p) => p.clone(),
        None => out_name_for(cli.input.as_deref()),
    };
    fig.render_to_png(&out)
        .with_context(|| format!("failed to write '{}'", out.display()))?;
    println!("Wrote {}", out.display());

    Ok(())
}

fn resolve_path(raw: &Path) -> Result<PathBuf> {
    if raw.exists() {
        return Ok(raw.to_path_buf());
    }
    anyhow::bail!("file not found: {}", raw.display());
}

/// Produce output file name like target/out/ternary_<stem>.png
fn out_name_for(input: Option<&Path>) -> PathBuf {
    let stem = input
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or("sample");
    PathBuf::from("target/out").join(format!("ternary_{stem}.png"))
}

/// Load compositions from a CSV with a header row.
///
/// Columns come from the apex labels when they match a header, then from the
/// conventional names, then from the leftover numeric columns.
fn load_compositions(path: &Path, cli: &Cli) -> Result<Vec<Composition>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    debug!(?headers, "csv headers");

    // Buffered so the first row can decide which columns are numeric.
    let records = rdr.records().collect::<Result<Vec<_>, _>>()?;

    let columns = find_columns(&headers, records.first(), cli)?;
    debug!(?columns, "component columns");

    let mut out = Vec::with_capacity(records.len());
    for (row, rec) in records.iter().enumerate() {
        let parse = |ix: usize| -> Option<f64> { rec.get(ix).and_then(|s| s.parse::<f64>().ok()) };
        match (parse(columns[0]), parse(columns[1]), parse(columns[2])) {
            (Some(u), Some(r), Some(l)) => out.push((u, r, l)),
            _ => warn!(row = row + 1, "skipping row with missing or non-numeric components"),
        }
    }
    Ok(out)
}

/// Column indices for `[upper, right, left]`.
///
/// Labelled columns are claimed first, then conventional names among the
/// unclaimed columns, then unclaimed columns whose value in `first` parses
/// as a number. Two components never share a column.
fn find_columns(headers: &[String], first: Option<&csv::StringRecord>, cli: &Cli) -> Result<[usize; 3]> {
    let labels = [cli.upper.as_deref(), cli.right.as_deref(), cli.left.as_deref()];
    let names: [&[&str]; 3] = [UPPER_NAMES, RIGHT_NAMES, LEFT_NAMES];
    let mut cols: [Option<usize>; 3] = [None; 3];

    for (slot, label) in labels.iter().enumerate() {
        let Some(label) = label else { continue };
        let wanted = label.to_lowercase();
        let found = headers.iter().position(|h| *h == wanted);
        if let Some(ix) = found {
            if cols.contains(&Some(ix)) {
                anyhow::bail!("apex labels resolve to the same column '{}'", headers[ix]);
            }
        }
        cols[slot] = found;
    }

    for slot in 0..3 {
        if cols[slot].is_some() {
            continue;
        }
        let found = headers
            .iter()
            .enumerate()
            .find(|&(i, h)| !cols.contains(&Some(i)) && names[slot].contains(&h.as_str()))
            .map(|(i, _)| i);
        cols[slot] = found;
    }

    if cols.iter().any(Option::is_none) {
        warn!("could not match upper/right/left columns by name; using the remaining numeric columns");
        let is_numeric = |i: usize| first.map_or(true, |rec| rec.get(i).is_some_and(|s| s.parse::<f64>().is_ok()));
        let mut spare = (0..headers.len())
            .filter(|&i| !cols.contains(&Some(i)) && is_numeric(i))
            .collect::<Vec<_>>()
            .into_iter();
        for slot in cols.iter_mut().filter(|c| c.is_none()) {
            *slot = spare.next();
        }
    }

    match cols {
        [Some(u), Some(r), Some(l)] => Ok([u, r, l]),
        _ => anyhow::bail!("need three numeric component columns, found headers {:?}", headers),
    }
}

/// Quartz/feldspar/lithics point counts for a handful of sandstones.
fn sample_compositions() -> Vec<Composition> {
    vec![
        (92.0, 3.0, 5.0),
        (75.0, 15.0, 10.0),
        (60.0, 25.0, 15.0),
        (48.0, 40.0, 12.0),
        (35.0, 20.0, 45.0),
        (25.0, 55.0, 20.0),
        (15.0, 30.0, 55.0),
    ]
}
