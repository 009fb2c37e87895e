use crate::core::controller::RuleController;
use crate::core::engine::LSystemEngine;
use crate::core::random::SeededRandom;
use crate::domain::model::Frame;
use crate::utils::error::Result;

pub const DEFAULT_MAX_ITERATIONS: usize = 8;

/// Headless animation loop over one rule at a time.
///
/// Every `tick` rewrites the current instructions once; after
/// `max_iterations` the loop starts over from the axiom with the random
/// sequence rewound, so stochastic rules redraw the same tree.
pub struct Animation {
    engine: LSystemEngine,
    controller: RuleController,
    current_iteration: usize,
    max_iterations: usize,
    instructions: String,
    paused: bool,
}

impl Animation {
    pub fn new(controller: RuleController, random: SeededRandom, max_iterations: usize) -> Self {
        let engine = LSystemEngine::with_random(controller.current_rule(), random);
        let instructions = engine.rule().axiom();
        Self {
            engine,
            controller,
            current_iteration: 0,
            max_iterations,
            instructions,
            paused: false,
        }
    }

    /// Advances one iteration unless paused. Returns whether anything changed.
    pub fn tick(&mut self) -> Result<bool> {
        if self.paused {
            return Ok(false);
        }

        if self.current_iteration >= self.max_iterations {
            self.restart();
        } else {
            self.instructions = self.engine.apply_rules(&self.instructions)?;
            self.current_iteration += 1;
        }

        tracing::debug!(
            "Animation tick: '{}' iteration {}",
            self.engine.rule().name(),
            self.current_iteration
        );
        Ok(true)
    }

    pub fn restart(&mut self) {
        self.current_iteration = 0;
        self.instructions = self.engine.rule().axiom();
        self.engine.random_mut().reset();
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// New time-based seed, then start over.
    pub fn regenerate_seed(&mut self) -> u64 {
        let seed = self.engine.random_mut().regenerate();
        self.restart();
        seed
    }

    pub fn next_rule(&mut self) {
        self.controller.shift_right();
        self.switch_rule();
    }

    pub fn previous_rule(&mut self) {
        self.controller.shift_left();
        self.switch_rule();
    }

    fn switch_rule(&mut self) {
        self.engine.set_rule(self.controller.current_rule());
        self.current_iteration = 0;
        self.instructions = self.engine.rule().axiom();
        tracing::info!("🔀 Switched to rule '{}'", self.engine.rule().name());
    }

    pub fn current_iteration(&self) -> usize {
        self.current_iteration
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn engine(&self) -> &LSystemEngine {
        &self.engine
    }

    pub fn frame(&self) -> Frame {
        Frame {
            rule: self.engine.rule().name().to_string(),
            iteration: self.current_iteration,
            seed: self.engine.random().seed(),
            instructions: self.instructions.clone(),
        }
    }
}
