use crate::domain::ports::LSystemRule;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct SimplePlant {
    productions: HashMap<char, String>,
}

impl SimplePlant {
    const AXIOM: &'static str = "X";

    pub fn new() -> Self {
        let mut productions = HashMap::new();
        productions.insert('X', "F+[[X]-X]-F[-FX]+X".to_string());
        productions.insert('F', "FF".to_string());
        Self { productions }
    }
}

impl Default for SimplePlant {
    fn default() -> Self {
        Self::new()
    }
}

impl LSystemRule for SimplePlant {
    fn name(&self) -> &str {
        "simple-plant"
    }

    fn description(&self) -> &str {
        "Plant growth L-system with branching structures. \
         X represents growth points, F represents stem segments. \
         Brackets [ ] represent branching points."
    }

    fn axiom(&self) -> String {
        Self::AXIOM.to_string()
    }

    fn production_rules(&self) -> HashMap<char, String> {
        self.productions.clone()
    }
}
