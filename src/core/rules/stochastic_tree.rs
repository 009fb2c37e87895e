use super::{grow_forward, GROW_FORWARD_PRODUCTION};
use crate::core::random::SeededRandom;
use crate::domain::ports::LSystemRule;
use crate::utils::lstring::LStringBuilder;

const MIN_TRUNK_LENGTH: i64 = 1;
const MAX_TRUNK_LENGTH: i64 = 20;
const MIN_BRANCH_LENGTH: i64 = 1;
const MAX_BRANCH_LENGTH: i64 = 20;
const MIN_BRANCH_ANGLE: i64 = 1;
// 超過 25 度看起來不自然
const MAX_BRANCH_ANGLE: i64 = 25;

/// Binary tree with random trunk/branch lengths and branch angles.
///
/// ```text
/// F(x) -> F(x + 25 * e^(-0.1 * x))
/// 0    -> F(t)[A(l)F(a)0]A(-r)F(b)0
/// ```
///
/// Lengths are drawn from `[1, 20)` and angles (degrees) from `[1, 25)`.
#[derive(Debug, Clone, Default)]
pub struct StochasticBinaryTree;

impl StochasticBinaryTree {
    pub fn new() -> Self {
        Self
    }

    fn expand_leaf(rng: &mut SeededRandom, builder: &mut LStringBuilder) -> String {
        let trunk = rng.range(MIN_TRUNK_LENGTH, MAX_TRUNK_LENGTH);
        let left_length = rng.range(MIN_BRANCH_LENGTH, MAX_BRANCH_LENGTH);
        let right_length = rng.range(MIN_BRANCH_LENGTH, MAX_BRANCH_LENGTH);
        let left_angle = rng.range(MIN_BRANCH_ANGLE, MAX_BRANCH_ANGLE);
        let right_angle = rng.range(MIN_BRANCH_ANGLE, MAX_BRANCH_ANGLE);

        builder
            .forward_by(&trunk.to_string())
            .open_branch()
            .symbol_with('A', &[left_angle.to_string()])
            .forward_by(&left_length.to_string())
            .leaf()
            .close_branch()
            .symbol_with('A', &[format!("-{}", right_angle)])
            .forward_by(&right_length.to_string())
            .leaf()
            .build()
    }
}

impl LSystemRule for StochasticBinaryTree {
    fn name(&self) -> &str {
        "stochastic-tree"
    }

    fn description(&self) -> &str {
        "Stochastic binary tree. 0 represents leaves, F represents forward movements, \
         A(θ) turns by θ degrees. Branch lengths and angles come from the seeded generator."
    }

    fn axiom(&self) -> String {
        LStringBuilder::new().leaf().build()
    }

    fn productions(&self) -> Vec<String> {
        vec![
            GROW_FORWARD_PRODUCTION.to_string(),
            "0 -> F(t)[A(l)F(a)0]A(-r)F(b)0".to_string(),
        ]
    }

    fn is_parametric(&self) -> bool {
        true
    }

    fn rewrite(
        &self,
        symbol: char,
        params: Option<&[&str]>,
        rng: &mut SeededRandom,
    ) -> Option<String> {
        let mut builder = LStringBuilder::new();
        match symbol {
            'F' => Some(grow_forward(params, &mut builder)),
            '0' => Some(Self::expand_leaf(rng, &mut builder)),
            _ => None,
        }
    }
}
