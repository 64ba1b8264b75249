//! Point loading and tour output.
//!
//! The input format is the plain CSV used by the TSP challenge datasets:
//! an `x,y` header line followed by one coordinate pair per line. Tours
//! are written as an `index` header followed by one point index per line.
//!
//! Malformed and non-finite coordinates are rejected here, at the
//! boundary, so the solver core never sees a NaN or infinite distance.

mod format;
mod parse;

pub use format::{format_tour, write_tour};
pub use parse::{parse_points, read_points, LoadError};
