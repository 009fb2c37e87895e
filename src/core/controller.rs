use crate::core::rules::builtin_rules;
use crate::domain::ports::LSystemRule;
use crate::utils::error::{FractalError, Result};
use std::sync::Arc;

/// Cyclic selection over the registered rules.
pub struct RuleController {
    rules: Vec<Arc<dyn LSystemRule>>,
    current_index: usize,
}

impl RuleController {
    /// Pre-loaded with the built-in rules; the first one is selected.
    pub fn new() -> Self {
        let mut controller = Self {
            rules: Vec::new(),
            current_index: 0,
        };
        for rule in builtin_rules() {
            controller.register_rule(rule);
        }
        controller
    }

    pub fn register_rule(&mut self, rule: Arc<dyn LSystemRule>) {
        self.rules.push(rule);
    }

    pub fn shift_right(&mut self) -> &mut Self {
        if !self.rules.is_empty() {
            self.current_index = (self.current_index + 1) % self.rules.len();
        }
        self
    }

    pub fn shift_left(&mut self) -> &mut Self {
        if !self.rules.is_empty() {
            self.current_index = (self.current_index + self.rules.len() - 1) % self.rules.len();
        }
        self
    }

    /// The selected rule. Panics only if the controller is empty, which
    /// `new` rules out.
    pub fn current(&self) -> &dyn LSystemRule {
        self.rules[self.current_index].as_ref()
    }

    pub fn current_rule(&self) -> Arc<dyn LSystemRule> {
        Arc::clone(&self.rules[self.current_index])
    }

    pub fn select(&mut self, name: &str) -> Result<&dyn LSystemRule> {
        let index = self
            .rules
            .iter()
            .position(|rule| rule.name() == name)
            .ok_or_else(|| FractalError::UnknownRuleError {
                name: name.to_string(),
            })?;
        self.current_index = index;
        Ok(self.current())
    }

    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    pub fn rules(&self) -> impl Iterator<Item = &dyn LSystemRule> {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let controller = RuleController::new();
        assert_eq!(
            controller.names(),
            vec![
                "binary-tree",
                "simple-plant",
                "koch-snowflake",
                "stochastic-tree",
                "parametric-tree"
            ]
        );
        assert_eq!(controller.current().name(), "binary-tree");
    }

    #[test]
    fn test_shift_wraps_around() {
        let mut controller = RuleController::new();
        assert_eq!(controller.shift_left().current().name(), "parametric-tree");
        assert_eq!(controller.shift_right().current().name(), "binary-tree");
        for _ in 0..controller.len() {
            controller.shift_right();
        }
        assert_eq!(controller.current().name(), "binary-tree");
    }

    #[test]
    fn test_select_by_name() {
        let mut controller = RuleController::new();
        assert_eq!(controller.select("koch-snowflake").unwrap().angle_degrees(), 60.0);
        assert_eq!(controller.shift_right().current().name(), "stochastic-tree");
        assert!(controller.select("dragon-curve").is_err());
        assert_eq!(controller.current().name(), "stochastic-tree");
    }
}
