// src/data_input/log_parser.rs

use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

use tracing::{debug, info, warn};

use crate::constants::{LEFT_FOOT_MARKER, RIGHT_FOOT_MARKER};
use crate::data_input::log_data::{Coordinate, FootPositions};
use crate::error::{GaitError, LineParseError, Result};

// Each label followed by a contiguous non-whitespace token.
static FIELD_PATTERNS: OnceLock<[(char, Regex); 3]> = OnceLock::new();

fn field_patterns() -> &'static [(char, Regex); 3] {
    FIELD_PATTERNS.get_or_init(|| {
        ['X', 'Y', 'Z'].map(|label| {
            let pattern = format!(r"{label}=\S*");
            // The pattern is built from a fixed label set and always compiles.
            (label, Regex::new(&pattern).unwrap_or_else(|e| panic!("bad field pattern: {e}")))
        })
    })
}

fn extract_field(line: &str, label: char, pattern: &Regex) -> std::result::Result<f64, LineParseError> {
    let found = pattern
        .find(line)
        .ok_or(LineParseError::MissingField { field: label })?;
    // Strip the two-character "X=" prefix.
    let token = &found.as_str()[2..];
    match token.parse::<f64>() {
        // `inf` and `nan` parse as f64 but are not positions.
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LineParseError::MalformedNumber {
            field: label,
            token: token.to_string(),
        }),
    }
}

/// Extracts the `X=`, `Y=` and `Z=` values from a foot-coordinate line.
///
/// The fields may appear in any order. Only field extraction is performed;
/// the caller decides whether the line is a coordinate record at all.
pub fn parse_coordinates(line: &str) -> std::result::Result<Coordinate, LineParseError> {
    let [(xl, xp), (yl, yp), (zl, zp)] = field_patterns();
    Ok(Coordinate {
        x: extract_field(line, *xl, xp)?,
        y: extract_field(line, *yl, yp)?,
        z: extract_field(line, *zl, zp)?,
    })
}

/// Scans a log stream and routes each foot-labelled line to its sequence.
///
/// Lines containing `Right:` go to the right sequence, otherwise lines containing
/// `Left:` go to the left sequence; everything else is skipped. Order follows
/// the log. Equal lengths are not checked here.
pub fn read_foot_positions<R: BufRead>(reader: R) -> Result<FootPositions> {
    let mut positions = FootPositions::default();
    let mut skipped_lines = 0usize;

    for (line_index, line_result) in reader.lines().enumerate() {
        let line = line_result?;

        let target = if line.contains(RIGHT_FOOT_MARKER) {
            &mut positions.right
        } else if line.contains(LEFT_FOOT_MARKER) {
            &mut positions.left
        } else {
            skipped_lines += 1;
            continue;
        };

        let coordinate = parse_coordinates(&line).map_err(|source| GaitError::Parse {
            line: line_index + 1,
            source,
        })?;
        target.push(coordinate);
    }

    debug!(skipped_lines, "Finished scanning log lines");
    Ok(positions)
}

/// Opens the log at `input_file_path` and reads both foot sequences.
pub fn parse_log_file(input_file_path: &Path) -> Result<FootPositions> {
    info!(path = %input_file_path.display(), "Reading foot positions");
    let positions = {
        let file = File::open(input_file_path)?;
        read_foot_positions(BufReader::new(file))?
    }; // File handle is dropped here

    info!(
        right = positions.right.len(),
        left = positions.left.len(),
        "Finished reading foot positions"
    );
    if positions.right.is_empty() && positions.left.is_empty() {
        warn!("No 'Right:' or 'Left:' lines found in log");
    }
    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_coordinates_in_order() {
        let c = parse_coordinates("LogTemp: Right: X=1.5 Y=-2.0 Z=3.25").unwrap();
        assert_eq!(c, Coordinate::new(1.5, -2.0, 3.25));
    }

    #[test]
    fn test_parse_coordinates_any_order() {
        let c = parse_coordinates("Z=3.25 foo X=1.5 Left: Y=-2.0").unwrap();
        assert_eq!(c, Coordinate::new(1.5, -2.0, 3.25));
    }

    #[test]
    fn test_parse_coordinates_missing_field() {
        let err = parse_coordinates("Right: X=1.0 Z=2.0").unwrap_err();
        assert_eq!(err, LineParseError::MissingField { field: 'Y' });
    }

    #[test]
    fn test_parse_coordinates_malformed_number() {
        let err = parse_coordinates("Right: X=1.0 Y=abc Z=2.0").unwrap_err();
        assert_eq!(
            err,
            LineParseError::MalformedNumber {
                field: 'Y',
                token: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_parse_coordinates_empty_token() {
        let err = parse_coordinates("Right: X= Y=1 Z=2").unwrap_err();
        assert!(matches!(err, LineParseError::MalformedNumber { field: 'X', .. }));
    }

    #[test]
    fn test_parse_coordinates_rejects_non_finite() {
        for (line, field, token) in [
            ("Right: X=inf Y=1 Z=2", 'X', "inf"),
            ("Right: X=nan Y=1 Z=2", 'X', "nan"),
            ("Left: X=0 Y=1 Z=-infinity", 'Z', "-infinity"),
        ] {
            assert_eq!(
                parse_coordinates(line).unwrap_err(),
                LineParseError::MalformedNumber {
                    field,
                    token: token.to_string()
                },
                "line: {line}"
            );
        }
    }

    #[test]
    fn test_read_foot_positions_routes_by_marker() {
        let log = "\
Session start
[0] Right: X=1 Y=2 Z=3
[0] Left: X=4 Y=5 Z=6
Unrelated X=99
[1] Right: X=7 Y=8 Z=9
[1] Left: X=10 Y=11 Z=12
";
        let positions = read_foot_positions(Cursor::new(log)).unwrap();
        assert_eq!(
            positions.right,
            vec![Coordinate::new(1.0, 2.0, 3.0), Coordinate::new(7.0, 8.0, 9.0)]
        );
        assert_eq!(
            positions.left,
            vec![Coordinate::new(4.0, 5.0, 6.0), Coordinate::new(10.0, 11.0, 12.0)]
        );
    }

    #[test]
    fn test_right_marker_wins_when_both_present() {
        let positions = read_foot_positions(Cursor::new("Right: Left: X=1 Y=1 Z=1\n")).unwrap();
        assert_eq!(positions.right.len(), 1);
        assert!(positions.left.is_empty());
    }

    #[test]
    fn test_read_foot_positions_reports_line_number() {
        let log = "Right: X=1 Y=2 Z=3\nLeft: X=1 Z=3\n";
        match read_foot_positions(Cursor::new(log)) {
            Err(GaitError::Parse { line, source }) => {
                assert_eq!(line, 2);
                assert_eq!(source, LineParseError::MissingField { field: 'Y' });
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}

// src/data_input/log_parser.rs
