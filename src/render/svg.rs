use crate::core::turtle::{TurtleInterpreter, TurtlePath};
use crate::render::color::iteration_color;
use crate::utils::error::{FractalError, Result};
use std::fmt::Write;

const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 800;
const BASE_STROKE_WIDTH: f64 = 2.0;
const DEFAULT_PADDING: f64 = 20.0;
const DEFAULT_BACKGROUND: &str = "#ffffff";

/// Draws turtle paths as standalone SVG documents.
///
/// The path is scaled to fit the canvas (minus padding) and centred, so the
/// turtle's own step size only matters for proportions.
#[derive(Debug, Clone)]
pub struct Renderer {
    pub width: u32,
    pub height: u32,
    pub stroke_width: f64,
    pub padding: f64,
    pub background: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            stroke_width: BASE_STROKE_WIDTH,
            padding: DEFAULT_PADDING,
            background: DEFAULT_BACKGROUND.to_string(),
        }
    }
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Interprets `lstring` and renders the result.
    pub fn render(
        &self,
        interpreter: &TurtleInterpreter,
        lstring: &str,
        iteration: usize,
        seed: u64,
    ) -> Result<String> {
        // 起點在畫布底部中央
        let start = (f64::from(self.width) / 2.0, f64::from(self.height));
        let path = interpreter.interpret(lstring, start)?;
        self.render_path(&path, iteration, seed)
    }

    pub fn render_path(&self, path: &TurtlePath, iteration: usize, seed: u64) -> Result<String> {
        self.write_document(path, iteration, seed)
            .map_err(|e| FractalError::RenderError {
                message: format!("failed to write SVG: {}", e),
            })
    }

    fn write_document(
        &self,
        path: &TurtlePath,
        iteration: usize,
        seed: u64,
    ) -> std::result::Result<String, std::fmt::Error> {
        let mut svg = String::new();
        let (w, h) = (self.width, self.height);

        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        )?;
        writeln!(
            svg,
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            self.background
        )?;

        if !path.is_empty() {
            let (scale, dx, dy) = self.fit(path);
            write!(
                svg,
                r#"<path fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round" d=""#,
                iteration_color(iteration),
                self.stroke_width
            )?;

            let mut pen: Option<(f64, f64)> = None;
            for line in path.lines() {
                let (x1, y1) = (line.x1 * scale + dx, line.y1 * scale + dy);
                let (x2, y2) = (line.x2 * scale + dx, line.y2 * scale + dy);

                // 連續線段省略 M
                let continues = pen
                    .map(|(px, py)| (px - x1).abs() < 1e-6 && (py - y1).abs() < 1e-6)
                    .unwrap_or(false);
                if !continues {
                    write!(svg, "M{:.2} {:.2}", x1, y1)?;
                }
                write!(svg, "L{:.2} {:.2}", x2, y2)?;
                pen = Some((x2, y2));
            }
            writeln!(svg, r#""/>"#)?;
        }

        writeln!(
            svg,
            r##"<text x="10" y="25" font-family="sans-serif" font-size="14" fill="#000000">Iteration: {}</text>"##,
            iteration
        )?;
        writeln!(
            svg,
            r##"<text x="10" y="50" font-family="sans-serif" font-size="14" fill="#000000">Seed: {}</text>"##,
            seed
        )?;
        writeln!(svg, "</svg>")?;

        Ok(svg)
    }

    /// Uniform scale and offset mapping the path's bounds into the padded canvas.
    fn fit(&self, path: &TurtlePath) -> (f64, f64, f64) {
        let Some(bounds) = path.bounds() else {
            return (1.0, 0.0, 0.0);
        };

        let avail_w = (f64::from(self.width) - 2.0 * self.padding).max(1.0);
        let avail_h = (f64::from(self.height) - 2.0 * self.padding).max(1.0);

        let scale = match (bounds.width() > 0.0, bounds.height() > 0.0) {
            (true, true) => (avail_w / bounds.width()).min(avail_h / bounds.height()),
            (true, false) => avail_w / bounds.width(),
            (false, true) => avail_h / bounds.height(),
            (false, false) => 1.0,
        };

        let dx = (f64::from(self.width) - bounds.width() * scale) / 2.0 - bounds.min_x * scale;
        let dy = (f64::from(self.height) - bounds.height() * scale) / 2.0 - bounds.min_y * scale;

        (scale, dx, dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_renders_overlay_only() {
        let svg = Renderer::default()
            .render(&TurtleInterpreter::default(), "", 0, 7)
            .unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(!svg.contains("<path"));
        assert!(svg.contains("Iteration: 0"));
        assert!(svg.contains("Seed: 7"));
    }

    #[test]
    fn test_path_is_fitted_into_canvas() {
        let renderer = Renderer::new(200, 100);
        let svg = renderer
            .render(&TurtleInterpreter::new(90.0, 1.0), "F", 1, 0)
            .unwrap();
        // 垂直線: 高度可用 60, 置中於 x=100
        assert!(svg.contains("M100.00 80.00L100.00 20.00"), "{svg}");
        assert!(svg.contains(&iteration_color(1)));
    }

    #[test]
    fn test_connected_lines_share_one_move() {
        let svg = Renderer::default()
            .render(&TurtleInterpreter::new(90.0, 1.0), "F-F-F", 2, 0)
            .unwrap();
        assert_eq!(svg.matches('M').count(), 1);
        assert_eq!(svg.matches('L').count(), 3);
    }

    #[test]
    fn test_malformed_input_propagates() {
        assert!(Renderer::default()
            .render(&TurtleInterpreter::default(), "F(1", 0, 0)
            .is_err());
    }
}
