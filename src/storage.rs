use crate::chart::{ChartSpec, echarts};
use crate::models::Measurement;
use anyhow::{Context, Result, bail};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Shape of a saved chart spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    /// The crate's own `ChartSpec` document.
    Native,
    /// ECharts option object.
    Echarts,
}

/// Load measurements, choosing CSV or JSON by file extension (default JSON).
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Measurement>> {
    let path = path.as_ref();
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("csv") => load_csv(path),
        _ => load_json(path),
    }
}

/// Load a JSON array of measurement records.
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Vec<Measurement>> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let v: serde_json::Value =
        serde_json::from_reader(f).with_context(|| format!("read {}", path.display()))?;
    crate::api::parse_measurements(v)
}

/// Load measurements from CSV with a `date,totalValue,roValue` (or `date,total_etp,etp_ro`) header.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Measurement>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("open {}", path.display()))?;
    let mut out = Vec::new();
    for (i, row) in rdr.deserialize::<Measurement>().enumerate() {
        let mut m = row.with_context(|| format!("{}: row {}", path.display(), i + 1))?;
        m.date = unescape_cell(&m.date);
        out.push(m);
    }
    Ok(out)
}

/// Save measurements as CSV with header.
pub fn save_csv<P: AsRef<Path>>(points: &[Measurement], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.write_record(["date", "totalValue", "roValue"])?;
    for p in points {
        wtr.serialize((escape_cell(&p.date), p.total_etp, p.etp_ro))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save measurements as pretty JSON array.
pub fn save_json<P: AsRef<Path>>(points: &[Measurement], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(points)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

/// Save a chart spec as pretty JSON.
pub fn save_spec_json<P: AsRef<Path>>(spec: &ChartSpec, path: P, format: SpecFormat) -> Result<()> {
    let path = path.as_ref();
    let s = spec_to_string(spec, format)?;
    let mut f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    f.write_all(s.as_bytes())?;
    log::info!("wrote chart spec to {}", path.display());
    Ok(())
}

/// Pretty JSON text of a chart spec.
pub fn spec_to_string(spec: &ChartSpec, format: SpecFormat) -> Result<String> {
    let s = match format {
        SpecFormat::Native => serde_json::to_string_pretty(spec)?,
        SpecFormat::Echarts => serde_json::to_string_pretty(&echarts::to_option(spec))?,
    };
    Ok(s)
}

/// Parse a `--format`-style name.
pub fn parse_spec_format(name: &str) -> Result<SpecFormat> {
    match name.to_ascii_lowercase().as_str() {
        "native" | "spec" => Ok(SpecFormat::Native),
        "echarts" => Ok(SpecFormat::Echarts),
        other => bail!("unsupported spec format: {}", other),
    }
}

/// Spreadsheet apps evaluate cells starting with these characters as formulas.
const FORMULA_STARTERS: [char; 4] = ['=', '+', '-', '@'];

/// Prefix formula-like text cells with `'` so spreadsheets show them verbatim.
fn escape_cell(s: &str) -> String {
    if s.starts_with(FORMULA_STARTERS) {
        format!("'{}", s)
    } else {
        s.to_string()
    }
}

/// Undo [`escape_cell`] when reading our own files back.
fn unescape_cell(s: &str) -> String {
    match s.strip_prefix('\'') {
        Some(rest) if rest.starts_with(FORMULA_STARTERS) => rest.to_string(),
        _ => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("x.csv");
        let jsonp = dir.path().join("x.json");
        let pts = vec![Measurement::new("2024-01-01", 80.0, 60.5)];
        save_csv(&pts, &csvp).unwrap();
        save_json(&pts, &jsonp).unwrap();
        assert_eq!(load(&csvp).unwrap(), pts);
        assert_eq!(load(&jsonp).unwrap(), pts);
    }

    #[test]
    fn cell_escaping_is_reversible() {
        assert_eq!(escape_cell("=1+1"), "'=1+1");
        assert_eq!(escape_cell("2024-01-01"), "2024-01-01");
        assert_eq!(unescape_cell(&escape_cell("@foo")), "@foo");
        assert_eq!(unescape_cell("'quoted"), "'quoted");
    }
}
