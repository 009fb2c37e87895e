use crate::core::turtle::TurtlePath;
use crate::utils::error::{FractalError, Result};

/// Segments as CSV with an `x1,y1,x2,y2` header.
pub fn segments_csv(path: &TurtlePath) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["x1", "y1", "x2", "y2"])?;

    for line in path.lines() {
        writer.write_record(&[
            format!("{:.4}", line.x1),
            format!("{:.4}", line.y1),
            format!("{:.4}", line.x2),
            format!("{:.4}", line.y2),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| FractalError::RenderError {
        message: format!("failed to flush CSV: {}", e),
    })?;
    String::from_utf8(bytes).map_err(|e| FractalError::RenderError {
        message: format!("CSV is not UTF-8: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_csv() {
        let mut path = TurtlePath::new();
        path.add_line(0.0, 0.0, 1.5, -2.0);
        let csv = segments_csv(&path).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines, vec!["x1,y1,x2,y2", "0.0000,0.0000,1.5000,-2.0000"]);
    }

    #[test]
    fn test_empty_path_has_header_only() {
        assert_eq!(segments_csv(&TurtlePath::new()).unwrap(), "x1,y1,x2,y2\n");
    }
}
