use crate::core::symbols::{head, split_parameters, split_symbols};
use crate::domain::model::{Bounds, Segment, TurtleState};
use crate::utils::error::Result;
use std::fmt;

const DEFAULT_ANGLE_DEGREES: f64 = 25.0;
const DEFAULT_STEP_SIZE: f64 = 8.0;

/// Line segments produced by interpreting an L-string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TurtlePath {
    lines: Vec<Segment>,
}

impl TurtlePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.lines.push(Segment { x1, y1, x2, y2 });
    }

    pub fn lines(&self) -> &[Segment] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn total_length(&self) -> f64 {
        self.lines.iter().map(Segment::length).sum()
    }

    /// Bounding box of all segments, `None` for an empty path.
    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.lines.first()?;
        let init = Bounds {
            min_x: first.x1.min(first.x2),
            min_y: first.y1.min(first.y2),
            max_x: first.x1.max(first.x2),
            max_y: first.y1.max(first.y2),
        };

        Some(self.lines.iter().fold(init, |b, l| Bounds {
            min_x: b.min_x.min(l.x1).min(l.x2),
            min_y: b.min_y.min(l.y1).min(l.y2),
            max_x: b.max_x.max(l.x1).max(l.x2),
            max_y: b.max_y.max(l.y1).max(l.y2),
        }))
    }
}

impl fmt::Display for TurtlePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TurtlePath{{lines={}, totalLength={:.2}}}",
            self.lines.len(),
            self.total_length()
        )
    }
}

/// Reads symbols as turtle commands.
///
/// | symbol | action |
/// |--------|--------|
/// | `F`, `F(d)` | move forward and draw |
/// | `f`, `f(d)` | move forward without drawing |
/// | `+` / `-` | turn left / right by the increment |
/// | `A(θ)` | turn by θ degrees |
/// | `[` / `]` | push / pop the turtle state |
///
/// Anything else is ignored. Screen y grows downward; the turtle starts
/// facing up.
#[derive(Debug, Clone, Copy)]
pub struct TurtleInterpreter {
    angle_increment: f64,
    step_size: f64,
}

impl TurtleInterpreter {
    pub fn new(angle_degrees: f64, step_size: f64) -> Self {
        Self {
            angle_increment: angle_degrees.to_radians(),
            step_size,
        }
    }

    pub fn angle_increment(&self) -> f64 {
        self.angle_increment
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    pub fn interpret(&self, lstring: &str, start: (f64, f64)) -> Result<TurtlePath> {
        let mut path = TurtlePath::new();
        let mut turtle = TurtleState::new(start.0, start.1, 90f64.to_radians());
        let mut stack: Vec<TurtleState> = Vec::new();

        for symbol in split_symbols(lstring)? {
            let Some(command) = head(symbol) else { continue };
            let first_param = split_parameters(symbol)
                .and_then(|p| p.first().and_then(|v| v.trim().parse::<f64>().ok()));

            match command {
                'F' => self.move_forward(first_param, &mut turtle, &mut path, true),
                'f' => self.move_forward(first_param, &mut turtle, &mut path, false),
                '+' => turtle.turn(self.angle_increment),
                '-' => turtle.turn(-self.angle_increment),
                'A' => {
                    if let Some(degrees) = first_param {
                        turtle.turn(degrees.to_radians());
                    }
                }
                '[' => stack.push(turtle),
                ']' => {
                    if let Some(saved) = stack.pop() {
                        turtle = saved;
                    }
                }
                _ => {}
            }
        }

        if !stack.is_empty() {
            tracing::debug!("{} unclosed branch(es) left on the stack", stack.len());
        }

        Ok(path)
    }

    fn move_forward(
        &self,
        step: Option<f64>,
        turtle: &mut TurtleState,
        path: &mut TurtlePath,
        draw: bool,
    ) {
        let step = step.unwrap_or(self.step_size);
        let new_x = turtle.x + step * turtle.angle.cos();
        let new_y = turtle.y - step * turtle.angle.sin();

        if draw {
            path.add_line(turtle.x, turtle.y, new_x, new_y);
        }

        turtle.move_to(new_x, new_y);
    }
}

impl Default for TurtleInterpreter {
    fn default() -> Self {
        Self::new(DEFAULT_ANGLE_DEGREES, DEFAULT_STEP_SIZE)
    }
}
