//! Dataset files of the batch drivers.
//!
//! - `vertices_{n}.txt`: one vertex line per row (canonical edge order).
//! - `ancestors_{k}.csv`: `n,xi` with `xi` a vertex line.
//! - `refine_on_ancestors_{k}.csv`: `n,x0,gap,family_gap,num_iterations`,
//!   floats with 6 decimals, `num_iterations = -1` when the target was missed.
//!
//! CSV files go through polars; every column is read as a string so vertex
//! lines keep their exact rational text.

use anyhow::{Context, Result};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq)]
pub struct AncestorRow {
    pub n: usize,
    pub xi: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RefineRow {
    pub n: usize,
    pub x0: String,
    pub gap: f64,
    pub family_gap: f64,
    pub num_iterations: i64,
}

pub fn vertices_path(dir: &Path, n: usize) -> PathBuf {
    dir.join(format!("vertices_{n}.txt"))
}

pub fn ancestors_path(dir: &Path, k: usize) -> PathBuf {
    dir.join(format!("ancestors_{k}.csv"))
}

pub fn refine_path(dir: &Path, k: usize) -> PathBuf {
    dir.join(format!("refine_on_ancestors_{k}.csv"))
}

/// Non-empty, trimmed lines of a vertices file.
pub fn read_vertex_lines(path: &Path) -> Result<Vec<String>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

pub fn read_ancestors(path: &Path) -> Result<Vec<AncestorRow>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading {}", path.display()))?;
    let ns = df.column("n")?.str()?;
    let xis = df.column("xi")?.str()?;
    let mut rows = Vec::with_capacity(df.height());
    for (i, (n, xi)) in ns.into_iter().zip(xis.into_iter()).enumerate() {
        let n = n.with_context(|| format!("{}: row {i} has no n", path.display()))?;
        let xi = xi.with_context(|| format!("{}: row {i} has no xi", path.display()))?;
        rows.push(AncestorRow {
            n: n.trim()
                .parse()
                .with_context(|| format!("{}: row {i}: bad n {n:?}", path.display()))?,
            xi: xi.trim().to_string(),
        });
    }
    Ok(rows)
}

pub fn write_ancestors(path: &Path, rows: &[AncestorRow]) -> Result<()> {
    let mut df = df!(
        "n" => rows.iter().map(|r| r.n as u64).collect::<Vec<_>>(),
        "xi" => rows.iter().map(|r| r.xi.as_str()).collect::<Vec<_>>()
    )?;
    write_csv(path, &mut df)
}

pub fn write_refine(path: &Path, rows: &[RefineRow]) -> Result<()> {
    let mut df = df!(
        "n" => rows.iter().map(|r| r.n as u64).collect::<Vec<_>>(),
        "x0" => rows.iter().map(|r| r.x0.as_str()).collect::<Vec<_>>(),
        "gap" => rows.iter().map(|r| r.gap).collect::<Vec<_>>(),
        "family_gap" => rows.iter().map(|r| r.family_gap).collect::<Vec<_>>(),
        "num_iterations" => rows.iter().map(|r| r.num_iterations).collect::<Vec<_>>()
    )?;
    write_csv(path, &mut df)
}

fn write_csv(path: &Path, df: &mut DataFrame) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_float_precision(Some(6))
        .finish(df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_names_follow_the_dataset_layout() {
        let dir = Path::new("/data");
        assert_eq!(vertices_path(dir, 7), Path::new("/data/vertices_7.txt"));
        assert_eq!(ancestors_path(dir, 3), Path::new("/data/ancestors_3.csv"));
        assert_eq!(refine_path(dir, 4), Path::new("/data/refine_on_ancestors_4.csv"));
    }

    #[test]
    fn vertex_lines_skip_blank_rows() {
        let dir = tempdir().unwrap();
        let path = vertices_path(dir.path(), 3);
        fs::write(&path, "1 1 1\n\n  1/2 1 1  \n").unwrap();
        assert_eq!(read_vertex_lines(&path).unwrap(), vec!["1 1 1", "1/2 1 1"]);
    }

    #[test]
    fn ancestors_round_trip_keeps_rational_text() {
        let dir = tempdir().unwrap();
        let path = ancestors_path(dir.path(), 3);
        let rows = vec![
            AncestorRow {
                n: 6,
                xi: "1/2 1/2 1 0 0 1/2 0 1 0 0 0 1 1/2 1/2 1/2".into(),
            },
            AncestorRow {
                n: 6,
                xi: "0 1 0".into(),
            },
        ];
        write_ancestors(&path, &rows).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("n,xi\n"));
        assert_eq!(read_ancestors(&path).unwrap(), rows);
    }

    #[test]
    fn refine_rows_use_six_decimals() {
        let dir = tempdir().unwrap();
        let path = refine_path(dir.path(), 3);
        let rows = vec![RefineRow {
            n: 6,
            x0: "1 0 1".into(),
            gap: 1.0 / 3.0,
            family_gap: 1.25,
            num_iterations: -1,
        }];
        write_refine(&path, &rows).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("n,x0,gap,family_gap,num_iterations"));
        assert_eq!(lines.next(), Some("6,1 0 1,0.333333,1.250000,-1"));
    }

    #[test]
    fn missing_ancestors_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(read_ancestors(&ancestors_path(dir.path(), 9)).is_err());
    }
}
