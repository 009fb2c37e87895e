pub mod binary_tree;
pub mod koch_snowflake;
pub mod parametric_tree;
pub mod simple_plant;
pub mod stochastic_tree;

pub use binary_tree::BinaryTree;
pub use koch_snowflake::KochSnowflake;
pub use parametric_tree::ParametricBinaryTree;
pub use simple_plant::SimplePlant;
pub use stochastic_tree::StochasticBinaryTree;

use crate::domain::ports::LSystemRule;
use crate::utils::lstring::LStringBuilder;
use std::sync::Arc;

const INITIAL_QUANTITY: f64 = 25.0;
const DECAY_CONSTANT: f64 = 0.1;
const DEFAULT_STEP: &str = "10";

pub(crate) const GROW_FORWARD_PRODUCTION: &str = "F(x) -> F(x+25*e^(-0.1x))";

/// Built-in rules in their default display order.
pub fn builtin_rules() -> Vec<Arc<dyn LSystemRule>> {
    vec![
        Arc::new(BinaryTree::new()),
        Arc::new(SimplePlant::new()),
        Arc::new(KochSnowflake::new()),
        Arc::new(StochasticBinaryTree::new()),
        Arc::new(ParametricBinaryTree::new()),
    ]
}

pub fn find_rule(name: &str) -> Option<Arc<dyn LSystemRule>> {
    builtin_rules().into_iter().find(|rule| rule.name() == name)
}

/// `F(x) -> F(x + 25 * e^(-0.1 * x))`, rounded to two decimals.
/// Missing or unparsable lengths restart at the default step.
pub(crate) fn grow_forward(params: Option<&[&str]>, builder: &mut LStringBuilder) -> String {
    let last_step = params
        .and_then(|p| p.first())
        .and_then(|p| p.trim().parse::<f64>().ok());

    match last_step {
        Some(x) => {
            let next = x + exp_decay(x);
            builder.forward_by(&format!("{:.2}", next)).build()
        }
        None => builder.forward_by(DEFAULT_STEP).build(),
    }
}

fn exp_decay(x: f64) -> f64 {
    INITIAL_QUANTITY * (-DECAY_CONSTANT * x).exp()
}
