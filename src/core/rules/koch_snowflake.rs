use crate::domain::ports::LSystemRule;
use std::collections::HashMap;

/// Koch snowflake. Needs 60 degree turns to close.
#[derive(Debug, Clone)]
pub struct KochSnowflake {
    productions: HashMap<char, String>,
}

impl KochSnowflake {
    const AXIOM: &'static str = "F--F--F";

    pub fn new() -> Self {
        let mut productions = HashMap::new();
        productions.insert('F', "F+F--F+F".to_string());
        Self { productions }
    }
}

impl Default for KochSnowflake {
    fn default() -> Self {
        Self::new()
    }
}

impl LSystemRule for KochSnowflake {
    fn name(&self) -> &str {
        "koch-snowflake"
    }

    fn description(&self) -> &str {
        "Koch snowflake. Every edge F is replaced by four edges with a 60 degree spike."
    }

    fn axiom(&self) -> String {
        Self::AXIOM.to_string()
    }

    fn production_rules(&self) -> HashMap<char, String> {
        self.productions.clone()
    }

    fn angle_degrees(&self) -> f64 {
        60.0
    }
}
