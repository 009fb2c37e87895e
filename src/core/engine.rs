use crate::core::random::SeededRandom;
use crate::core::symbols::{head, split_parameters, split_symbols};
use crate::domain::ports::LSystemRule;
use crate::utils::error::{FractalError, Result};
use std::sync::Arc;

/// Upper bound on the length of a rewritten string, in bytes.
/// Koch at 9 iterations (1.8 MB) fits, 10 iterations (7.3 MB) does not.
pub const MAX_LSTRING_LEN: usize = 2_000_000;

/// Applies a rule's productions to an axiom, one rewriting step at a time.
pub struct LSystemEngine {
    rule: Arc<dyn LSystemRule>,
    random: SeededRandom,
}

impl LSystemEngine {
    pub fn new(rule: Arc<dyn LSystemRule>) -> Self {
        Self::with_random(rule, SeededRandom::from_time())
    }

    pub fn with_random(rule: Arc<dyn LSystemRule>, random: SeededRandom) -> Self {
        Self { rule, random }
    }

    /// The axiom rewritten `iterations` times.
    pub fn generate(&mut self, iterations: usize) -> Result<String> {
        let mut current = self.rule.axiom();

        for i in 0..iterations {
            current = self.apply_rules(&current)?;
            tracing::debug!(
                "Iteration {} of '{}': {} bytes",
                i + 1,
                self.rule.name(),
                current.len()
            );
        }

        Ok(current)
    }

    /// One rewriting step. Symbols without a production are copied verbatim.
    pub fn apply_rules(&mut self, input: &str) -> Result<String> {
        let mut result = String::with_capacity(input.len() * 2);

        if self.rule.is_parametric() {
            for symbol in split_symbols(input)? {
                let Some(c) = head(symbol) else { continue };
                let params = split_parameters(symbol);
                match self.rule.rewrite(c, params.as_deref(), &mut self.random) {
                    Some(replacement) => result.push_str(&replacement),
                    None => result.push_str(symbol),
                }
                self.check_length(&result)?;
            }
        } else {
            let productions = self.rule.production_rules();
            for symbol in split_symbols(input)? {
                match head(symbol).and_then(|c| productions.get(&c)) {
                    Some(replacement) => result.push_str(replacement),
                    None => result.push_str(symbol),
                }
                self.check_length(&result)?;
            }
        }

        Ok(result)
    }

    // 字串過長時中止, 避免耗盡記憶體
    fn check_length(&self, output: &str) -> Result<()> {
        if output.len() > MAX_LSTRING_LEN {
            return Err(FractalError::LStringTooLongError {
                rule: self.rule.name().to_string(),
                limit: MAX_LSTRING_LEN,
            });
        }
        Ok(())
    }

    pub fn rule(&self) -> &dyn LSystemRule {
        self.rule.as_ref()
    }

    pub fn set_rule(&mut self, rule: Arc<dyn LSystemRule>) {
        self.rule = rule;
    }

    pub fn random(&self) -> &SeededRandom {
        &self.random
    }

    pub fn random_mut(&mut self) -> &mut SeededRandom {
        &mut self.random
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rules::{BinaryTree, KochSnowflake, SimplePlant};

    #[test]
    fn test_zero_iterations_returns_axiom() {
        let mut engine = LSystemEngine::new(Arc::new(SimplePlant::new()));
        assert_eq!(engine.generate(0).unwrap(), "X");
    }

    #[test]
    fn test_binary_tree_two_iterations() {
        let mut engine = LSystemEngine::new(Arc::new(BinaryTree::new()));
        assert_eq!(engine.generate(2).unwrap(), "FF[+FFF[+F0]-F0]-FFF[+F0]-F0");
    }

    #[test]
    fn test_apply_rules_is_one_step() {
        let mut engine = LSystemEngine::new(Arc::new(KochSnowflake::new()));
        let once = engine.apply_rules("F--F--F").unwrap();
        assert_eq!(once, "F+F--F+F--F+F--F+F--F+F--F+F");
        assert_eq!(engine.generate(1).unwrap(), once);
    }

    #[test]
    fn test_set_rule_switches_axiom() {
        let mut engine = LSystemEngine::new(Arc::new(BinaryTree::new()));
        engine.set_rule(Arc::new(SimplePlant::new()));
        assert_eq!(engine.rule().name(), "simple-plant");
        assert_eq!(engine.generate(0).unwrap(), "X");
    }

    #[test]
    fn test_oversized_output_is_rejected() {
        let mut engine = LSystemEngine::new(Arc::new(KochSnowflake::new()));
        assert_eq!(engine.generate(9).unwrap().len(), 7 * 4usize.pow(9));

        match engine.generate(16).unwrap_err() {
            FractalError::LStringTooLongError { rule, limit } => {
                assert_eq!(rule, "koch-snowflake");
                assert_eq!(limit, MAX_LSTRING_LEN);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        let mut engine = LSystemEngine::new(Arc::new(BinaryTree::new()));
        assert!(engine.apply_rules("F(10").is_err());
    }
}
