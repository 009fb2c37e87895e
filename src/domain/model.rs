use serde::{Deserialize, Serialize};
use std::fmt;

/// Position and heading of the turtle. `angle` is in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurtleState {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
}

impl TurtleState {
    pub fn new(x: f64, y: f64, angle: f64) -> Self {
        Self { x, y, angle }
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn turn(&mut self, delta: f64) {
        self.angle += delta;
    }
}

impl fmt::Display for TurtleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TurtleState{{x={:.2}, y={:.2}, angle={:.2}}}",
            self.x,
            self.y,
            self.angle.to_degrees()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Segment {
    pub fn length(&self) -> f64 {
        (self.x2 - self.x1).hypot(self.y2 - self.y1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// One step of an L-system run.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub rule: String,
    pub iteration: usize,
    pub seed: u64,
    pub instructions: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSummary {
    pub iteration: usize,
    pub file: String,
    pub symbols: usize,
    pub segments: usize,
    pub total_length: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameManifest {
    pub rule: String,
    pub seed: u64,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub frames: Vec<FrameSummary>,
}

#[derive(Debug, Clone)]
pub struct RenderedFrame {
    pub file_name: String,
    pub svg: String,
}

#[derive(Debug, Clone)]
pub struct RenderResult {
    pub frames: Vec<RenderedFrame>,
    pub segments_csv: String,
    pub manifest: FrameManifest,
}
