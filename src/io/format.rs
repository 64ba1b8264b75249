//! Tour formatting and output.

use std::fs;
use std::io;
use std::path::Path;

/// Renders a tour in the challenge output format: an `index` header
/// followed by one point index per line, no trailing newline.
///
/// # Examples
///
/// ```
/// use u_tsp::io::format_tour;
///
/// assert_eq!(format_tour(&[0, 2, 1]), "index\n0\n2\n1");
/// ```
pub fn format_tour(tour: &[usize]) -> String {
    let mut lines = Vec::with_capacity(tour.len() + 1);
    lines.push("index".to_string());
    lines.extend(tour.iter().map(|i| i.to_string()));
    lines.join("\n")
}

/// Writes a formatted tour to a file, with a trailing newline.
pub fn write_tour(path: impl AsRef<Path>, tour: &[usize]) -> io::Result<()> {
    fs::write(path, format_tour(tour) + "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tour() {
        assert_eq!(format_tour(&[0, 2, 1]), "index\n0\n2\n1");
    }

    #[test]
    fn test_format_empty_tour() {
        assert_eq!(format_tour(&[]), "index");
    }

    #[test]
    fn test_write_tour_roundtrip() {
        let dir = std::env::temp_dir();
        let path = dir.join("u_tsp_write_tour_test.csv");
        write_tour(&path, &[1, 0, 2]).expect("write");
        let content = fs::read_to_string(&path).expect("read back");
        assert_eq!(content, "index\n1\n0\n2\n");
        let _ = fs::remove_file(&path);
    }
}
