//! Point parsing and file loading.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::models::Point;

/// Errors raised while loading a point set.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading the input file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A line was not a comma-separated coordinate pair.
    #[error("line {line}: expected `x,y`, got `{content}`")]
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// The offending line.
        content: String,
    },

    /// A coordinate parsed to NaN or infinity.
    #[error("line {line}: non-finite coordinate")]
    NonFiniteCoordinate {
        /// 1-based line number.
        line: usize,
    },
}

/// Parses a point set from CSV text.
///
/// Accepts an optional `x,y` header line; blank lines are skipped.
/// Every remaining line must be two finite floats separated by a comma.
///
/// # Examples
///
/// ```
/// use u_tsp::io::parse_points;
///
/// let points = parse_points("x,y\n0.0,0.0\n3.0,4.0\n").expect("valid input");
/// assert_eq!(points.len(), 2);
/// assert!((points[0].distance_to(&points[1]) - 5.0).abs() < 1e-10);
/// ```
pub fn parse_points(input: &str) -> Result<Vec<Point>, LoadError> {
    let mut points = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if points.is_empty() && line.eq_ignore_ascii_case("x,y") {
            continue;
        }

        let line_no = idx + 1;
        let (x, y) = line
            .split_once(',')
            .ok_or_else(|| LoadError::MalformedLine {
                line: line_no,
                content: line.to_string(),
            })?;
        let x: f64 = x
            .trim()
            .parse()
            .map_err(|_| LoadError::MalformedLine {
                line: line_no,
                content: line.to_string(),
            })?;
        let y: f64 = y
            .trim()
            .parse()
            .map_err(|_| LoadError::MalformedLine {
                line: line_no,
                content: line.to_string(),
            })?;

        if !x.is_finite() || !y.is_finite() {
            return Err(LoadError::NonFiniteCoordinate { line: line_no });
        }
        points.push(Point::new(x, y));
    }
    Ok(points)
}

/// Reads and parses a point set from a file.
pub fn read_points(path: impl AsRef<Path>) -> Result<Vec<Point>, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_points(&content)
}
