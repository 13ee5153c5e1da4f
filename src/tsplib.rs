//! TSPLIB coordinate-section reader.
//!
//! Reads the `NODE_COORD_SECTION` subset of the TSPLIB format:
//!
//! ```text
//! NAME: square
//! DIMENSION: 4
//! EDGE_WEIGHT_TYPE: EUC_2D
//! NODE_COORD_SECTION
//! 1 0 0
//! 2 0 10
//! 3 10 10
//! 4 10 0
//! EOF
//! ```
//!
//! Header lines before the marker are optional. `NAME`, `DIMENSION` and
//! `EDGE_WEIGHT_TYPE` are honoured, everything else is skipped. The leading
//! id on each coordinate line only fixes the order; the 0-based position in
//! the file becomes the city index.
//!
//! Reference: Reinelt (1991) "TSPLIB—A Traveling Salesman Problem Library"

use std::path::Path;

use crate::error::{TspError, TspResult};
use crate::geometry::{Instance, Point};

const COORD_MARKER: &str = "NODE_COORD_SECTION";
const TERMINATOR: &str = "EOF";

/// Parser for TSPLIB coordinate files.
#[derive(Debug)]
pub struct TsplibParser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Header,
    Coords,
    Done,
}

impl TsplibParser {
    /// Reads and parses a file.
    pub fn parse_file(path: &Path) -> TspResult<Instance> {
        let content = std::fs::read_to_string(path).map_err(|source| TspError::Io {
            file: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parses file content; `path` is used for error messages and as the
    /// fallback instance name.
    pub fn parse(content: &str, path: &Path) -> TspResult<Instance> {
        let fail = |line: Option<usize>, cause: String| TspError::InputFormat {
            file: path.to_path_buf(),
            line,
            cause,
        };

        let mut name: Option<String> = None;
        let mut dimension: Option<usize> = None;
        let mut points: Vec<Point> = Vec::new();
        let mut section = Section::Header;

        for (idx, raw) in content.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            match section {
                Section::Header => {
                    if line == COORD_MARKER {
                        section = Section::Coords;
                        continue;
                    }
                    if line == TERMINATOR {
                        return Err(fail(
                            Some(line_no),
                            format!("{TERMINATOR} reached before {COORD_MARKER}"),
                        ));
                    }
                    let Some((key, value)) = line.split_once(':') else {
                        continue;
                    };
                    let value = value.trim();
                    match key.trim().to_uppercase().as_str() {
                        "NAME" => name = Some(value.to_string()),
                        "DIMENSION" => {
                            let dim = value.parse().map_err(|_| {
                                fail(Some(line_no), format!("invalid DIMENSION: {value}"))
                            })?;
                            dimension = Some(dim);
                        }
                        "EDGE_WEIGHT_TYPE" => {
                            if !value.eq_ignore_ascii_case("EUC_2D") {
                                return Err(fail(
                                    Some(line_no),
                                    format!("unsupported edge weight type: {value}"),
                                ));
                            }
                        }
                        _ => {}
                    }
                }
                Section::Coords => {
                    if line == TERMINATOR {
                        section = Section::Done;
                        break;
                    }
                    points.push(Self::parse_coord_line(line).map_err(|cause| {
                        fail(Some(line_no), cause)
                    })?);
                }
                Section::Done => break,
            }
        }

        match section {
            Section::Header => return Err(fail(None, format!("missing {COORD_MARKER}"))),
            Section::Coords => return Err(fail(None, format!("missing {TERMINATOR} terminator"))),
            Section::Done => {}
        }

        if let Some(dim) = dimension {
            if dim != points.len() {
                return Err(fail(
                    None,
                    format!("DIMENSION is {dim} but {} cities were listed", points.len()),
                ));
            }
        }

        let name = name.unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("unnamed")
                .to_string()
        });

        Instance::new(name, points)
    }

    fn parse_coord_line(line: &str) -> Result<Point, String> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [_, x, y] = fields.as_slice() else {
            return Err(format!(
                "expected `<id> <x> <y>`, found {} fields",
                fields.len()
            ));
        };
        let coord = |axis: &str, text: &str| -> Result<f64, String> {
            match text.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(v),
                _ => Err(format!("invalid {axis} coordinate: {text}")),
            }
        };
        Ok(Point::new(coord("x", *x)?, coord("y", *y)?))
    }
}
