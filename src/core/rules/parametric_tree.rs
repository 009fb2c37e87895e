use super::{grow_forward, GROW_FORWARD_PRODUCTION};
use crate::core::random::SeededRandom;
use crate::domain::ports::LSystemRule;
use crate::utils::lstring::LStringBuilder;

/// Binary tree whose segments keep growing with exponential decay.
///
/// ```text
/// F(x) -> F(x + 25 * e^(-0.1 * x))
/// 0    -> F(10)[+F(5)0]-F(5)0
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParametricBinaryTree;

impl ParametricBinaryTree {
    pub fn new() -> Self {
        Self
    }

    fn expand_leaf(builder: &mut LStringBuilder) -> String {
        builder
            .forward_by("10")
            .open_branch()
            .turn_left()
            .forward_by("5")
            .leaf()
            .close_branch()
            .turn_right()
            .forward_by("5")
            .leaf()
            .build()
    }
}

impl LSystemRule for ParametricBinaryTree {
    fn name(&self) -> &str {
        "parametric-tree"
    }

    fn description(&self) -> &str {
        "Binary tree with parametric segments. F(x) grows by 25*e^(-0.1x) every iteration, \
         0 sprouts a trunk and two branches."
    }

    fn axiom(&self) -> String {
        LStringBuilder::new().forward_by("12").leaf().build()
    }

    fn productions(&self) -> Vec<String> {
        vec![
            GROW_FORWARD_PRODUCTION.to_string(),
            "0 -> F(10)[+F(5)0]-F(5)0".to_string(),
        ]
    }

    fn is_parametric(&self) -> bool {
        true
    }

    fn rewrite(
        &self,
        symbol: char,
        params: Option<&[&str]>,
        _rng: &mut SeededRandom,
    ) -> Option<String> {
        let mut builder = LStringBuilder::new();
        match symbol {
            'F' => Some(grow_forward(params, &mut builder)),
            '0' => Some(Self::expand_leaf(&mut builder)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::LSystemEngine;
    use std::sync::Arc;

    fn engine() -> LSystemEngine {
        LSystemEngine::new(Arc::new(ParametricBinaryTree::new()))
    }

    #[test]
    fn test_zero_iterations() {
        let mut builder = LStringBuilder::new();
        assert_eq!(
            engine().generate(0).unwrap(),
            builder.forward_by("12").leaf().build()
        );
    }

    #[test]
    fn test_one_iteration() {
        let mut builder = LStringBuilder::new();
        let expected = builder
            .forward_by("19.53")
            .forward_by("10")
            .open_branch()
            .turn_left()
            .forward_by("5")
            .leaf()
            .close_branch()
            .turn_right()
            .forward_by("5")
            .leaf()
            .build();
        assert_eq!(engine().generate(1).unwrap(), expected);
    }

    #[test]
    fn test_two_iterations() {
        let mut builder = LStringBuilder::new();
        let expected = builder
            .forward_by("23.08")
            .forward_by("19.20")
            .open_branch()
            .turn_left()
            .forward_by("20.16")
            .forward_by("10")
            .open_branch()
            .turn_left()
            .forward_by("5")
            .leaf()
            .close_branch()
            .turn_right()
            .forward_by("5")
            .leaf()
            .close_branch()
            .turn_right()
            .forward_by("20.16")
            .forward_by("10")
            .open_branch()
            .turn_left()
            .forward_by("5")
            .leaf()
            .close_branch()
            .turn_right()
            .forward_by("5")
            .leaf()
            .build();
        assert_eq!(engine().generate(2).unwrap(), expected);
    }
}
