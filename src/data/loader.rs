use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};

use super::model::SampleSeries;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a strain/stress series from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` – comma-separated `strain,stress[,...]` records, no header
/// * anything else – whitespace-separated columns (LAMMPS `fix print` output)
///
/// Lines that do not hold two numbers are dropped; an input with no usable
/// line yields an empty series.
pub fn load_file(path: &Path) -> Result<SampleSeries> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;

    let series = match ext.as_str() {
        "csv" => parse_csv(file),
        _ => parse_text(BufReader::new(file)),
    }
    .with_context(|| format!("reading {}", path.display()))?;

    log::info!("Loaded {} samples from {}", series.len(), path.display());
    Ok(series)
}

// ---------------------------------------------------------------------------
// Line tolerance
// ---------------------------------------------------------------------------

/// Why a line was left out of the series.  Never surfaced as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineRejection {
    NotUtf8,
    TooFewTokens,
    NotNumeric,
}

/// Parse the first two tokens as `(strain, stress)`.
fn parse_pair<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Result<(f64, f64), LineRejection> {
    let (Some(strain), Some(stress)) = (tokens.next(), tokens.next()) else {
        return Err(LineRejection::TooFewTokens);
    };
    let strain = parse_value(strain)?;
    let stress = parse_value(stress)?;
    Ok((strain, stress))
}

fn parse_value(token: &str) -> Result<f64, LineRejection> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(LineRejection::NotNumeric),
    }
}

// ---------------------------------------------------------------------------
// Whitespace text loader
// ---------------------------------------------------------------------------

/// Text layout: one sample per line, `strain stress [ignored...]`, separated
/// by any run of whitespace.  Headers, comments and blank lines fail to parse
/// and are skipped.
pub fn parse_text<R: BufRead>(reader: R) -> Result<SampleSeries> {
    let mut series = SampleSeries::new();

    for (line_no, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes.with_context(|| format!("line {}", line_no + 1))?;
        let parsed = std::str::from_utf8(&bytes)
            .map_err(|_| LineRejection::NotUtf8)
            .and_then(|line| parse_pair(line.split_whitespace()));
        match parsed {
            Ok((strain, stress)) => series.push(strain, stress),
            Err(reason) => log::debug!(
                "Skipping line {}: {reason:?}: {:?}",
                line_no + 1,
                String::from_utf8_lossy(&bytes)
            ),
        }
    }

    Ok(series)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: no header, `strain,stress` in the first two columns, any
/// further columns ignored.  Records follow the same tolerance rules as the
/// text format.
pub fn parse_csv<R: Read>(reader: R) -> Result<SampleSeries> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut series = SampleSeries::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => {
                return Err(e).with_context(|| format!("CSV row {row_no}"));
            }
            Err(e) => {
                log::debug!("Skipping CSV row {row_no}: {e}");
                continue;
            }
        };

        match parse_pair(record.iter()) {
            Ok((strain, stress)) => series.push(strain, stress),
            Err(reason) => log::debug!("Skipping CSV row {row_no}: {reason:?}"),
        }
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use super::*;

    #[test]
    fn parses_whitespace_columns() {
        let input = "0.0 0.0\n0.01\t2.0\n  0.02   4.0  extra\n";
        let series = parse_text(Cursor::new(input)).unwrap();

        assert_eq!(series.strain(), &[0.0, 0.01, 0.02]);
        assert_eq!(series.stress(), &[0.0, 2.0, 4.0]);
    }

    #[test]
    fn skips_short_and_non_numeric_lines() {
        let input = "\
# strain stress
Step Strain Stress

0.5
0.1 abc
xyz 0.2
1e-3 2.5E1
0.2 3.0
";
        let series = parse_text(Cursor::new(input)).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.strain(), &[0.001, 0.2]);
        assert_eq!(series.stress(), &[25.0, 3.0]);
        assert!(series.len() <= input.lines().count());
    }

    #[test]
    fn skips_undecodable_lines() {
        let mut input = b"# stress \xb0C header\n".to_vec();
        input.extend_from_slice(b"0.0 0.0\n0.01 2.0\n0.02 \xff4.0\n0.02 4.0\r\n0.03 3.0");

        let series = parse_text(Cursor::new(input)).unwrap();

        assert_eq!(series.strain(), &[0.0, 0.01, 0.02, 0.03]);
        assert_eq!(series.stress(), &[0.0, 2.0, 4.0, 3.0]);
    }

    #[test]
    fn drops_non_finite_values() {
        let series = parse_text(Cursor::new("0.1 nan\ninf 2.0\n0.2 1.0\n")).unwrap();

        assert_eq!(series.points().collect::<Vec<_>>(), vec![(0.2, 1.0)]);
    }

    #[test]
    fn no_valid_lines_yields_empty_series() {
        let series = parse_text(Cursor::new("header only\n\n1.0\n")).unwrap();

        assert!(series.is_empty());
    }

    #[test]
    fn rejection_reasons() {
        assert_eq!(parse_pair("1.0".split_whitespace()), Err(LineRejection::TooFewTokens));
        assert_eq!(parse_pair("1.0 x".split_whitespace()), Err(LineRejection::NotNumeric));
        assert_eq!(parse_pair("1 2 3".split_whitespace()), Ok((1.0, 2.0)));
    }

    #[test]
    fn parses_csv_records() {
        let input = "strain,stress\n0.0, 0.0\n0.01,2.0,9.9\n0.02\n0.03,bad\n0.04,4.0\n";
        let series = parse_csv(Cursor::new(input)).unwrap();

        assert_eq!(series.strain(), &[0.0, 0.01, 0.04]);
        assert_eq!(series.stress(), &[0.0, 2.0, 4.0]);
    }

    #[test]
    fn load_file_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();

        let txt = dir.path().join("curve.txt");
        std::fs::write(&txt, "0.0 1.0\n0.1 2.0\n").unwrap();
        assert_eq!(load_file(&txt).unwrap().len(), 2);

        let csv_path = dir.path().join("curve.CSV");
        let mut file = File::create(&csv_path).unwrap();
        writeln!(file, "0.0,1.0\n0.1,2.0\n0.2,3.0").unwrap();
        drop(file);
        assert_eq!(load_file(&csv_path).unwrap().len(), 3);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("absent.txt")).unwrap_err();

        assert!(format!("{err:#}").contains("absent.txt"));
    }
}
